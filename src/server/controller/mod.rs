//! HTTP controller endpoints for the Practika web API.
//!
//! This module contains Axum handlers for authentication, the account
//! directory, offers, applications, and placements. Controllers handle
//! HTTP requests, delegate to services, and return appropriate HTTP
//! responses. They use utoipa for OpenAPI documentation; access control
//! lives in the router's middleware layers, not here.

pub mod application;
pub mod auth;
pub mod company;
pub mod offer;
pub mod placement;
pub mod professor;
pub mod student;
