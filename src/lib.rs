//! Practika: internship management platform backend.
//!
//! Connects four kinds of accounts: students applying to internship
//! offers, companies publishing them, professors supervising placements,
//! and coordinators administering the platform.

pub mod model;
pub mod server;
