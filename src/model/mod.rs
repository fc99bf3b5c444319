pub mod account;
pub mod api;
pub mod application;
pub mod auth;
pub mod offer;
pub mod placement;
