//! Integration tests for the HTTP endpoints.
//!
//! Each test drives the real router, so the identity middleware and role
//! guards sit in front of the handlers exactly as they do in production.

mod account;
mod application;
mod auth;
mod offer;
mod placement;
