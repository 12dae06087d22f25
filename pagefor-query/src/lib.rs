//! Read-only lookups the host's templates make against page assignments.
//!
//! Every lookup degrades to the caller's default: a missing assignment or an
//! unpublished page is never an error.

mod body;
mod facade;

pub use facade::ArchiveQuery;
