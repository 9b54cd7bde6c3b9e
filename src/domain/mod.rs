//! src/domain/mod.rs
mod email;
pub use email::{Email, Error as EmailError};
