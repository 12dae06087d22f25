//! Read/write collaborators for the archive-page core.
//!
//! The core never owns persistence. It consumes two traits:
//! - [`MappingStore`]: content type name → assigned page id
//! - [`PageHierarchy`]: page lookup, paths and ancestor chains
//!
//! This crate also ships the in-memory implementations the host adapter and
//! the tests use, the normalization of stored option values, and the
//! [`RoutingFlag`] that tells the host when rewrite rules must be rebuilt.
//!
//! Every lookup fails softly: a missing assignment or page is a normal state
//! and comes back as `None` or an empty value.

mod error;
mod flag;
mod hierarchy;
mod mapping;
mod option;

pub use error::{StoreError, StoreResult};
pub use flag::{FlushTicket, RoutingFlag, RoutingState};
pub use hierarchy::{InMemoryPageTree, PageHierarchy};
pub use mapping::{Assignments, InMemoryMappingStore, MappingStore};
pub use option::{AssignmentOption, normalize_page_id};
