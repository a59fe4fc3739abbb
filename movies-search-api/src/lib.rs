// Library exports for the movies search HTTP service
pub mod config;
pub mod error;
pub mod server;
pub mod service;
pub mod validation;

pub use error::{ApiError, ApiResult};
pub use service::MovieService;
