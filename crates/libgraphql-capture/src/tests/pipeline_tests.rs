use crate::process_transaction;
use crate::tests::test_utils::get;
use crate::tests::test_utils::post_form;
use crate::tests::test_utils::post_json;
use crate::tests::test_utils::TestTransaction;
use crate::ExtractError;
use crate::QueryParseError;
use crate::TransactionClassifier;
use proptest::prelude::*;
use serde_json::json;

#[tokio::test]
async fn non_graphql_transactions_are_skipped() {
    let classifier = TransactionClassifier::default();
    let record = TestTransaction::new(get("https://example.com/index.html"));
    assert!(process_transaction(&record, &classifier).await.is_none());
}

#[tokio::test]
async fn batched_transaction_end_to_end() {
    let classifier = TransactionClassifier::default();
    let record =
        TestTransaction::new(post_json(r#"[{"query":"{a}"},{"query":"{b}"}]"#))
            .with_response_body(r#"[{"data":{"a":1}},{"data":{"b":2}}]"#);

    let records = process_transaction(&record, &classifier).await.unwrap().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].response_body(), Some(&json!({ "data": { "a": 1 } })));
    assert_eq!(records[1].response_body(), Some(&json!({ "data": { "b": 2 } })));
    assert_eq!(records[0].query().unwrap().data()[0].operations()[0].name(), "a");
    assert_eq!(records[1].query().unwrap().data()[0].operations()[0].name(), "b");
}

#[tokio::test]
async fn one_broken_query_does_not_affect_its_batch_siblings() {
    let classifier = TransactionClassifier::default();
    let record = TestTransaction::new(post_json(
        r#"[{"query":"{a}"},{"query":"{ user(id: }"},{"query":"{c}"}]"#,
    ));

    let records = process_transaction(&record, &classifier).await.unwrap().unwrap();
    assert_eq!(records.len(), 3);
    assert!(records[0].query().is_ok());
    assert!(matches!(records[1].query(), Err(QueryParseError::Syntax { .. })));
    assert!(records[2].query().is_ok());
}

#[tokio::test]
async fn non_object_variables_keep_the_whole_batch() {
    let classifier = TransactionClassifier::default();
    let record = TestTransaction::new(post_json(
        r#"[{"query":"{a}"},{"query":"{b}","variables":5},{"query":"{c}","variables":[]}]"#,
    ));

    let records = process_transaction(&record, &classifier).await.unwrap().unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].query().unwrap().bare_query(), "{a}");
    assert_eq!(records[1].query().unwrap().query_variables().as_json(), &json!(5));
    assert_eq!(records[2].query().unwrap().query_variables().as_json(), &json!([]));
}

#[tokio::test]
async fn form_transaction_end_to_end() {
    let classifier = TransactionClassifier::default();
    let record =
        TestTransaction::new(post_form(&[("query", "%7Bping%7D")]))
            .with_response_body(r#"{"data":{"ping":"pong"}}"#);

    let records = process_transaction(&record, &classifier).await.unwrap().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].query().unwrap().bare_query(), "{ping}");
}

#[tokio::test]
async fn extraction_failures_are_reported_for_the_transaction() {
    let classifier = TransactionClassifier::default();
    let record = TestTransaction::new(post_json(
        r#"{"query":"{a}","variables":"{oops"}"#,
    ));

    let outcome = process_transaction(&record, &classifier).await.unwrap();
    assert!(matches!(outcome, Err(ExtractError::InvalidVariables { .. })));
}

proptest! {
    #[test]
    fn json_batches_pair_each_query_with_its_response(
        field_names in proptest::collection::vec("[a-z]{1,4}[0-9]", 1..16),
    ) {
        let batch: Vec<serde_json::Value> =
            field_names.iter()
                .map(|name| json!({ "query": format!("{{ {name} }}") }))
                .collect();
        let responses: Vec<serde_json::Value> =
            field_names.iter()
                .enumerate()
                .map(|(batch_index, name)| {
                    let mut data = serde_json::Map::new();
                    data.insert(name.clone(), json!(batch_index));
                    json!({ "data": data })
                })
                .collect();

        let record =
            TestTransaction::new(post_json(&serde_json::Value::from(batch).to_string()))
                .with_response_body(&serde_json::Value::from(responses.clone()).to_string());
        let classifier = TransactionClassifier::default();
        let runtime =
            tokio::runtime::Builder::new_current_thread()
                .build()
                .unwrap();
        let records =
            runtime.block_on(process_transaction(&record, &classifier))
                .unwrap()
                .unwrap();

        prop_assert_eq!(records.len(), field_names.len());
        for (batch_index, record) in records.iter().enumerate() {
            prop_assert_eq!(record.response_body(), Some(&responses[batch_index]));
            let parse_result = record.query().unwrap();
            prop_assert_eq!(
                parse_result.data()[0].operations()[0].name(),
                field_names[batch_index].as_str(),
            );
        }
    }
}
