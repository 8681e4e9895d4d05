pub mod aggregate;
pub mod cache;
pub mod errors;
pub mod panels;
pub mod store;

pub use errors::*;
