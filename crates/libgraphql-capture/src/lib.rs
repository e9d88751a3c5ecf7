//! Tools for pulling GraphQL operations out of captured HTTP traffic.
//!
//! A captured [`TransactionRecord`] is first gated by a
//! [`TransactionClassifier`], then its request body is split into one or more
//! [`RawQuery`]s by [`extract_queries`]. Each raw query is parsed and
//! normalized into a [`ParseResult`] tree by [`parse_query`], and finally
//! [`correlate_responses`] pairs every parse result with its slice of the
//! response body to produce the [`DisplayRecord`]s handed to renderers.
//!
//! [`process_transaction`] runs that whole pipeline for one transaction.

pub mod ast;
mod classifier;
mod classifier_config;
mod content_type;
mod correlator;
mod definition;
mod display_record;
mod document_normalizer;
mod extractor;
pub mod har;
mod http_request;
mod normalized_value;
mod operation_kind;
mod operation_node;
mod param;
mod parse_result;
mod pipeline;
mod query_parser;
mod raw_query;
mod transaction_record;
mod value_kind;

pub use classifier::PatternCompileError;
pub use classifier::TransactionClassifier;
pub use classifier_config::ClassifierConfig;
pub use classifier_config::ConfigLoadError;
pub use content_type::ContentType;
pub use correlator::correlate_responses;
pub use definition::Definition;
pub use definition::DefinitionKind;
pub use display_record::DisplayRecord;
pub use document_normalizer::normalize_document;
pub use document_normalizer::NormalizeError;
pub use extractor::extract_queries;
pub use extractor::ExtractError;
pub use http_request::FormParam;
pub use http_request::Header;
pub use http_request::HttpRequest;
pub use http_request::PostData;
pub use normalized_value::NormalizedValue;
pub use operation_kind::OperationKind;
pub use operation_node::OperationNode;
pub use operation_node::SelectionKind;
pub use param::Param;
pub use parse_result::ParseResult;
pub use pipeline::process_transaction;
pub use pipeline::TransactionOutcome;
pub use query_parser::parse_query;
pub use query_parser::QueryParseError;
pub use raw_query::normalize_variables;
pub use raw_query::QueryVariables;
pub use raw_query::RawQuery;
pub use raw_query::VariablesError;
pub use transaction_record::ResponseContentError;
pub use transaction_record::ResponseMeta;
pub use transaction_record::TransactionRecord;
pub use value_kind::ValueKind;

#[cfg(test)]
mod tests;
