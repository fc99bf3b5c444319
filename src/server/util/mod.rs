//! Server-side helpers.
//!
//! Currently only hosts the shared test setup for in-crate unit tests;
//! integration tests under `tests/` carry their own copy.
