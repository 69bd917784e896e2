pub mod benchmark;
pub mod error;
pub mod export;
pub mod factors;
pub mod model;
pub mod recommend;
pub mod scenario;

pub use error::FootprintError;
pub use model::{compute, EmissionsModel, OccupancyPolicy};
pub use scenario::compare;
