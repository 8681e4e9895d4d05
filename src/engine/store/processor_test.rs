use super::processor::{
    StoryDateColumn, StoryFilter, below_story_count, posted_above_story_count,
    project_binned_model_scores, recent_stories, stories_by_day, unposted_above_story_count,
    unposted_stories,
};
use super::query::{Database, ParamValue};
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn stories_by_day_without_filters_binds_only_the_window() {
    let spec = stories_by_day(
        StoryDateColumn::Posted,
        &StoryFilter::new(),
        date(2024, 1, 1),
        date(2024, 1, 31),
    );

    assert_eq!(spec.key.database, Database::Processor);
    assert_eq!(spec.key.metric, "stories_by_posted_day");
    assert_eq!(
        spec.binds,
        vec![
            ParamValue::Date(date(2024, 1, 1)),
            ParamValue::Date(date(2024, 1, 31)),
        ]
    );
    assert!(spec.sql.contains("posted_date::date AS day"));
    assert!(spec.sql.contains("(posted_date >= $1)"));
    assert!(spec.sql.contains("(posted_date::date <= $2)"));
    assert!(!spec.sql.contains("$3"));
    assert!(!spec.sql.contains("AND  GROUP"), "no dangling AND");
    assert!(spec.sql.starts_with("SELECT row_to_json(q) FROM ("));
}

#[test]
fn stories_by_day_binds_every_filter_in_placeholder_order() {
    let filter = StoryFilter::new()
        .project(Some(42))
        .platform("reddit-pushshift")
        .above_threshold(Some(true))
        .posted(Some(false));

    let spec = stories_by_day(
        StoryDateColumn::Processed,
        &filter,
        date(2024, 2, 1),
        date(2024, 2, 29),
    );

    assert_eq!(
        spec.binds,
        vec![
            ParamValue::Date(date(2024, 2, 1)),
            ParamValue::Date(date(2024, 2, 29)),
            ParamValue::Int(42),
            ParamValue::Text("reddit-pushshift".to_string()),
            ParamValue::Bool(true),
        ]
    );
    assert!(spec.sql.contains("(processed_date::date <= $2)"));
    assert!(spec.sql.contains("(project_id = $3)"));
    assert!(spec.sql.contains("(source = $4)"));
    assert!(spec.sql.contains("(above_threshold = $5)"));
    assert!(spec.sql.contains("(posted_date IS NULL)"));
    assert!(!spec.sql.contains("reddit-pushshift"), "values never spliced into SQL");
    assert_eq!(spec.key.param("is_posted"), Some(&ParamValue::Bool(false)));
}

#[test]
fn distinct_parameters_give_distinct_keys() {
    let base = StoryFilter::new().project(Some(1));
    let earliest = date(2024, 1, 1);
    let latest = date(2024, 1, 10);
    let by_day = |column, filter: &StoryFilter| stories_by_day(column, filter, earliest, latest);

    let reddit = by_day(StoryDateColumn::Published, &base.clone().platform("reddit"));
    let youtube = by_day(StoryDateColumn::Published, &base.clone().platform("youtube"));
    let posted = by_day(StoryDateColumn::Published, &base.clone().posted(Some(true)));
    let unposted = by_day(StoryDateColumn::Published, &base.clone().posted(Some(false)));
    let other_column = by_day(StoryDateColumn::Posted, &base.clone().platform("reddit"));
    let other_start = stories_by_day(
        StoryDateColumn::Published,
        &base.clone().platform("reddit"),
        date(2024, 1, 2),
        latest,
    );
    let other_end = stories_by_day(
        StoryDateColumn::Published,
        &base.clone().platform("reddit"),
        earliest,
        date(2024, 1, 11),
    );

    assert_ne!(reddit.key, youtube.key);
    assert_ne!(posted.key, unposted.key);
    assert_ne!(reddit.key, other_column.key);
    assert_ne!(reddit.key, other_start.key);
    assert_ne!(reddit.key, other_end.key);

    let again = by_day(StoryDateColumn::Published, &base.platform("reddit"));
    assert_eq!(reddit.key, again.key, "key is a pure function of the parameters");
}

#[test]
fn date_columns_parse_from_names() {
    assert_eq!(StoryDateColumn::parse("posted"), Some(StoryDateColumn::Posted));
    assert_eq!(StoryDateColumn::parse("processed"), Some(StoryDateColumn::Processed));
    assert_eq!(StoryDateColumn::parse("published"), Some(StoryDateColumn::Published));
    assert_eq!(StoryDateColumn::parse("posted_date; DROP TABLE"), None);
}

#[test]
fn recent_stories_binds_all_values() {
    let spec = recent_stories(7, false, date(2024, 3, 1), 5);

    assert_eq!(spec.key.metric, "recent_stories");
    assert_eq!(
        spec.binds,
        vec![
            ParamValue::Int(7),
            ParamValue::Bool(false),
            ParamValue::Date(date(2024, 3, 1)),
            ParamValue::Int(5),
        ]
    );
    assert!(spec.sql.contains("ORDER BY RANDOM() LIMIT $4"));
}

#[test]
fn count_queries_alias_count_column() {
    for spec in [
        unposted_above_story_count(3, None),
        posted_above_story_count(3),
        below_story_count(3),
    ] {
        assert!(spec.sql.contains("COUNT(1) AS count"), "{}", spec.sql);
        assert_eq!(spec.binds, vec![ParamValue::Int(3)]);
    }
}

#[test]
fn unposted_count_window_is_optional() {
    let windowed = unposted_above_story_count(3, Some(date(2024, 1, 1)));
    assert!(windowed.sql.contains("processed_date >= $2"));
    assert_ne!(windowed.key, unposted_above_story_count(3, None).key);
}

#[test]
fn unposted_stories_and_scores_are_project_scoped() {
    let unposted = unposted_stories(9, date(2024, 1, 1));
    assert!(unposted.sql.contains("posted_date IS NULL"));
    assert_eq!(unposted.binds.len(), 2);

    let scores = project_binned_model_scores(9);
    assert!(scores.sql.contains("ROUND(CAST(model_score AS numeric), 1) AS value"));
    assert!(scores.sql.contains("COUNT(1) AS frequency"));
    assert_eq!(scores.binds, vec![ParamValue::Int(9)]);
}
