//! # Verify API
//!
//! This library provides the typed request-payload model for a Twilio
//! Verify-style factor-verification service. It maps the factor-creation and
//! challenge-update surfaces into a set of immutable Rust data structures,
//! plus the API traits a transport client implements to consume them.
//!
//! Transport, signing and key storage live in whatever client implements
//! [`FactorsApi`]/[`ChallengesApi`]; nothing here performs I/O.

pub mod api;
pub mod error;
pub mod types;
pub mod validate;

pub use api::*;
pub use types::*;
pub use error::VerifyError;
