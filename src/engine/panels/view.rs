use serde::Serialize;

use crate::engine::errors::PanelError;

pub const NO_DATA_MESSAGE: &str = "No data to show";

/// What a panel endpoint returns: its rows, plus a notice when there is nothing to draw.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelView<T> {
    pub rows: Vec<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> PanelView<T> {
    pub fn new(rows: Vec<T>) -> Self {
        if rows.is_empty() {
            return Self::no_data();
        }
        Self {
            rows,
            message: None,
        }
    }

    pub fn no_data() -> Self {
        Self {
            rows: Vec::new(),
            message: Some(NO_DATA_MESSAGE.to_string()),
        }
    }

    /// A failed panel degrades to an empty view; the error is logged, never surfaced.
    pub fn from_result(result: Result<Vec<T>, PanelError>) -> Self {
        match result {
            Ok(rows) => Self::new(rows),
            Err(e) => {
                e.log_error();
                Self::no_data()
            }
        }
    }

    pub fn has_data(&self) -> bool {
        !self.rows.is_empty()
    }
}
