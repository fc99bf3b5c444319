//! Data access layer repositories.
//!
//! This module contains all database repository implementations for the
//! application. Repositories provide an abstraction layer over database
//! operations, one per collection: accounts, offers, applications and
//! placements.
//!
//! The schema carries no foreign keys, matching the document-store
//! origins of the data model. Repositories therefore never join;
//! cross-collection reads go through the `get_many_by_ids` accessors
//! and are stitched together in the service layer.

pub mod account;
pub mod application;
pub mod offer;
pub mod placement;
