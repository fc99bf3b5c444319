//! Server-side models and type definitions.
//!
//! Holds the shared application state handed to every handler and the
//! request-scoped identity type attached by the authentication
//! middleware. Wire-facing DTOs live in the crate-level `model` module.

pub mod app;
pub mod identity;
