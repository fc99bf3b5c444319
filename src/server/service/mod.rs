//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer that implements business logic,
//! coordinates between repositories and the identity provider, and handles
//! multi-step operations. Services cover the account directory, offers,
//! applications, placements, and the registration/login/verification flows.

pub mod account;
pub mod application;
pub mod auth;
pub mod offer;
pub mod placement;
