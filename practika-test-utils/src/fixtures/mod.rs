//! Test fixtures for database rows and mock provider endpoints.
//!
//! - `account` - directory rows for each account role
//! - `internship` - offers, applications and placements
//! - `idp` - mock identity provider HTTP endpoints

pub mod account;
pub mod idp;
pub mod internship;
