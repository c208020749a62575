//! # Domain Layer
//!
//! Request and outcome value types plus the error taxonomy.
//! This layer is independent of HTTP and presentation concerns.

mod error;
pub mod models;

pub use error::*;
pub use models::*;
