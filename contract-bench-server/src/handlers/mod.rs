pub mod benchmarks;
pub mod contracts;
pub mod deployments;
pub mod error;
pub mod health;
pub mod notices;

pub use error::ApiError;
