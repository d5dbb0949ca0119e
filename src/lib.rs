//! Healthgate - LocalStack startup gate.
//!
//! Evaluates a LocalStack `/health` payload (read from stdin by the binary)
//! and reports whether every service has reached the "running" state.

pub mod error;
pub mod health;

pub use error::HealthError;
pub use health::{evaluate, Outcome};
