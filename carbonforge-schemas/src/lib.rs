pub mod activity;
pub mod factors;
pub mod file_formats;
pub mod results;
pub mod scenario;
