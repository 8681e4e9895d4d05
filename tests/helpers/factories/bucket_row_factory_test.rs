use super::bucket_row_factory::BucketRowFactory;
use crate::engine::aggregate::NO_DATA;
use chrono::NaiveDate;

#[test]
fn defaults_to_one_undimensioned_row() {
    let row = BucketRowFactory::new().create();
    assert_eq!(row.day, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    assert_eq!(row.count, 1);
    assert_eq!(row.label(), NO_DATA);
}

#[test]
fn builder_sets_fields() {
    let day = NaiveDate::from_ymd_opt(2024, 5, 6).unwrap();
    let row = BucketRowFactory::new().day(day).count(9).dimension("reddit").create();
    assert_eq!(row.day, day);
    assert_eq!(row.count, 9);
    assert_eq!(row.label(), "reddit");
}
