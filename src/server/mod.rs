//! Server application core modules.
//!
//! This module contains all server-side functionality for the Practika
//! application, including HTTP routing, bearer-token authentication
//! against the external identity provider, role-guarded access control,
//! and database operations for accounts, offers, applications and
//! placements.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod identity;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
