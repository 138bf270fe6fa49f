//! Request-side domain types validated at construction
//!
//! Invalid input returns ValidationError, not panic.

pub mod record_id;
pub mod validation;

pub use record_id::RecordId;
pub use validation::ValidationError;
