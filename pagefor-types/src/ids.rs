//! Identifier types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU64;
use std::str::FromStr;

/// Identifier of a page in the host's document store.
///
/// Zero is the host's "no page" marker, so it is not a valid `PageId`.
/// Functions that may find no page return `Option<PageId>` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageId(NonZeroU64);

impl PageId {
    /// Creates a page ID from a raw value. Returns `None` for zero.
    #[must_use]
    pub const fn new(raw: u64) -> Option<Self> {
        match NonZeroU64::new(raw) {
            Some(id) => Some(Self(id)),
            None => None,
        }
    }

    /// Returns the raw numeric value.
    #[must_use]
    pub const fn get(&self) -> u64 {
        self.0.get()
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PageId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse::<NonZeroU64>()?))
    }
}

impl From<PageId> for u64 {
    fn from(id: PageId) -> Self {
        id.get()
    }
}
