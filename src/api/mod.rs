//! Stack Exchange REST client.
//!
//! [`StackExchangeApi`] is the seam the repository depends on; [`HttpApi`]
//! is the production implementation.

mod client;
mod error;
pub mod models;
pub mod params;

pub use client::{ApiResponse, HttpApi, StackExchangeApi};
pub use error::ApiError;
pub use models::{Answer, Envelope, Owner, Question};
pub use params::QueryOptions;
