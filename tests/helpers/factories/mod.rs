pub mod bucket_row_factory;
pub mod fake_row_source;
pub mod record_factory;

pub use bucket_row_factory::BucketRowFactory;
pub use fake_row_source::FakeRowSource;
pub use record_factory::RecordFactory;

#[cfg(test)]
mod bucket_row_factory_test;
#[cfg(test)]
mod fake_row_source_test;
#[cfg(test)]
mod record_factory_test;
