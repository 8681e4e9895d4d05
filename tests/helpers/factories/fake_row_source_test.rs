use super::fake_row_source::FakeRowSource;
use super::record_factory::RecordFactory;
use crate::engine::errors::StoreError;
use crate::engine::store::{Database, QuerySpec, RowSource};

fn spec(metric: &'static str, project: i64) -> QuerySpec {
    let mut q = QuerySpec::builder(Database::Processor, metric);
    let sql = format!("SELECT 1 WHERE project_id = {}", q.bind("project_id", project));
    q.finish(&sql)
}

#[tokio::test]
async fn unmatched_queries_return_no_rows() {
    let source = FakeRowSource::new();
    assert!(source.fetch(&spec("anything", 1)).await.unwrap().is_empty());
    assert_eq!(source.call_count(), 1);
}

#[tokio::test]
async fn param_rules_take_precedence_when_listed_first() {
    let source = FakeRowSource::new()
        .respond_when("m", "project_id", 2_i64, RecordFactory::new().with("count", 2).create_list(1))
        .respond("m", RecordFactory::new().with("count", 1).create_list(1));

    let two = source.fetch(&spec("m", 2)).await.unwrap();
    let one = source.fetch(&spec("m", 1)).await.unwrap();

    assert_eq!(two[0]["count"], 2);
    assert_eq!(one[0]["count"], 1);
}

#[tokio::test]
async fn failures_fire_once() {
    let source = FakeRowSource::new().fail_once("m", "down");

    let err = source.fetch(&spec("m", 1)).await.unwrap_err();
    assert!(matches!(err, StoreError::Unavailable(_)));
    assert!(source.fetch(&spec("m", 1)).await.is_ok());
    assert_eq!(source.calls().len(), 2);
}
