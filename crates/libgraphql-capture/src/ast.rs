//! Aliases over the `graphql-parser` executable-document AST.
//!
//! Every alias fixes the text type to [`String`] so that the rest of the crate
//! only ever has to name the document lifetime.

pub use graphql_parser::Pos as AstPos;
pub use graphql_parser::query::Number;
pub use graphql_parser::query::ParseError;

pub type Definition<'a> = graphql_parser::query::Definition<'a, String>;
pub type Document<'a> = graphql_parser::query::Document<'a, String>;
pub type Field<'a> = graphql_parser::query::Field<'a, String>;
pub type FragmentDefinition<'a> = graphql_parser::query::FragmentDefinition<'a, String>;
pub type FragmentSpread<'a> = graphql_parser::query::FragmentSpread<'a, String>;
pub type InlineFragment<'a> = graphql_parser::query::InlineFragment<'a, String>;
pub type OperationDefinition<'a> = graphql_parser::query::OperationDefinition<'a, String>;
pub type Selection<'a> = graphql_parser::query::Selection<'a, String>;
pub type SelectionSet<'a> = graphql_parser::query::SelectionSet<'a, String>;
pub type TypeCondition<'a> = graphql_parser::query::TypeCondition<'a, String>;
pub type Value<'a> = graphql_parser::query::Value<'a, String>;

/// Parse an executable GraphQL document (operations and fragments).
pub fn parse(query: &str) -> Result<Document<'_>, ParseError> {
    graphql_parser::query::parse_query::<String>(query)
}
