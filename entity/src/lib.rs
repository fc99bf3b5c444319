pub mod account;
pub mod application;
pub mod offer;
pub mod placement;
pub mod prelude;
