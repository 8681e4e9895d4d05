pub mod handler;
pub mod listener;
pub mod params;
pub mod route;
