use chrono::NaiveDate;
use std::collections::HashMap;
use thiserror::Error;

use crate::engine::store::alerts::ArticleDateColumn;
use crate::engine::store::processor::StoryDateColumn;
use crate::shared::datetime::DayParser;
use crate::shared::response::StatusCode;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequestError {
    #[error("No route for {0}")]
    NotFound(String),

    #[error("Only GET is supported")]
    MethodNotAllowed,

    #[error("{0}")]
    BadRequest(String),
}

impl RequestError {
    pub fn status(&self) -> StatusCode {
        match self {
            RequestError::NotFound(_) => StatusCode::NotFound,
            RequestError::MethodNotAllowed => StatusCode::MethodNotAllowed,
            RequestError::BadRequest(_) => StatusCode::BadRequest,
        }
    }
}

/// Form-decoded `?key=value&...` pairs. A repeated key keeps its last value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: HashMap<String, String>,
}

impl QueryParams {
    pub fn parse(query: &str) -> Self {
        let pairs = url::form_urlencoded::parse(query.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        Self { pairs }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .get(name)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// `metric`: which story date to bucket by. Defaults to posted.
    pub fn metric(&self) -> Result<StoryDateColumn, RequestError> {
        match self.get("metric") {
            None => Ok(StoryDateColumn::Posted),
            Some(raw) => StoryDateColumn::parse(raw).ok_or_else(|| {
                RequestError::BadRequest(format!(
                    "metric must be posted, processed or published, got {raw}"
                ))
            }),
        }
    }

    /// `date_column`: which article date to bucket by. Defaults to publish.
    pub fn date_column(&self) -> Result<ArticleDateColumn, RequestError> {
        match self.get("date_column") {
            None => Ok(ArticleDateColumn::Publish),
            Some(raw) => ArticleDateColumn::parse(raw).ok_or_else(|| {
                RequestError::BadRequest(format!(
                    "date_column must be publish or created, got {raw}"
                ))
            }),
        }
    }

    pub fn project_id(&self) -> Result<Option<i64>, RequestError> {
        self.int("project_id")
    }

    pub fn require_project_id(&self) -> Result<i64, RequestError> {
        self.project_id()?
            .ok_or_else(|| RequestError::BadRequest("project_id is required".to_string()))
    }

    pub fn limit(&self) -> Result<Option<i64>, RequestError> {
        self.int("limit")
    }

    pub fn flag(&self, name: &str) -> Result<Option<bool>, RequestError> {
        match self.get(name) {
            None => Ok(None),
            Some("true") | Some("1") => Ok(Some(true)),
            Some("false") | Some("0") => Ok(Some(false)),
            Some(raw) => Err(RequestError::BadRequest(format!(
                "{name} must be true or false, got {raw}"
            ))),
        }
    }

    /// `as_of`: the last day a panel covers. Defaults to `today`.
    pub fn as_of(&self, today: NaiveDate) -> Result<NaiveDate, RequestError> {
        match self.get("as_of") {
            None => Ok(today),
            Some(raw) => DayParser::parse_str(raw)
                .ok_or_else(|| RequestError::BadRequest(format!("as_of is not a date: {raw}"))),
        }
    }

    fn int(&self, name: &str) -> Result<Option<i64>, RequestError> {
        self.get(name)
            .map(|raw| {
                raw.parse().map_err(|_| {
                    RequestError::BadRequest(format!("{name} must be an integer, got {raw}"))
                })
            })
            .transpose()
    }
}
