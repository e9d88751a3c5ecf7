use crate::correlate_responses;
use crate::extract_queries;
use crate::DisplayRecord;
use crate::ExtractError;
use crate::RawQuery;
use crate::TransactionClassifier;
use crate::TransactionRecord;

/// What came out of one GraphQL transaction: its display records, or the
/// reason its request body could not be split into queries.
pub type TransactionOutcome = Result<Vec<DisplayRecord>, ExtractError>;

/// Classify, extract, parse, and correlate a single transaction.
///
/// Returns `None` for transactions that are not GraphQL. A query that fails
/// to parse yields a record carrying the error; it never affects the other
/// queries in the same batch.
pub async fn process_transaction<R: TransactionRecord>(
    record: &R,
    classifier: &TransactionClassifier,
) -> Option<TransactionOutcome> {
    let request = record.request();
    if !classifier.is_graphql(request) {
        return None;
    }

    let raw_queries = match extract_queries(request) {
        Ok(raw_queries) => raw_queries,
        Err(err) => {
            log::warn!("{err}");
            return Some(Err(err));
        },
    };
    log::debug!(
        "Extracted {} GraphQL queries from {} {}.",
        raw_queries.len(),
        request.method,
        request.url,
    );

    let parsed_queries = raw_queries.iter().map(RawQuery::parse).collect();
    Some(Ok(correlate_responses(record, parsed_queries).await))
}
