pub mod alerts;
pub mod cached;
pub mod processor;
pub mod query;
pub mod record;
pub mod source;

pub use cached::CachedStore;
pub use query::{Database, ParamValue, QueryKey, QuerySpec, QuerySpecBuilder};
pub use record::{Record, decode_records, first_count};
pub use source::{PgRowSource, RowSource};

#[cfg(test)]
mod processor_test;
