pub mod day;
pub mod time;

pub use day::{DayParser, days_inclusive, window_start};
pub use time::TimeConfig;

#[cfg(test)]
mod time_test;
