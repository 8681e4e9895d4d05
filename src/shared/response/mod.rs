pub mod json;
pub mod types;

pub use json::{render_error, render_json};
pub use types::{ErrorBody, StatusCode};
