use core::fmt;
use core::num::NonZeroU32;

use crate::error::{CoreError, CoreResult};

/// Compact 1-based identifier for mesh entities.
///
/// The stored value is the externally visible id; the 0-based index used for
/// matrix addressing is always `id - 1`, so the two can never disagree.
///
/// - `u32` keeps memory small
/// - `NonZero` enables `Option<Id>` to be pointer-optimized
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(NonZeroU32);

impl Id {
    /// Create an Id from its external 1-based value.
    pub fn new(raw: u32) -> CoreResult<Self> {
        NonZeroU32::new(raw)
            .map(Self)
            .ok_or(CoreError::InvalidId { what: "id", raw })
    }

    /// Create an Id from a 0-based index by storing index+1.
    pub fn from_index(index: u32) -> Self {
        Self(NonZeroU32::MIN.saturating_add(index))
    }

    /// The external 1-based value.
    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// Recover the 0-based index.
    pub fn index(self) -> usize {
        (self.0.get() - 1) as usize
    }
}

impl fmt::Debug for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.get())
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

impl TryFrom<u32> for Id {
    type Error = CoreError;

    fn try_from(raw: u32) -> CoreResult<Self> {
        Self::new(raw)
    }
}

/// Domain-specific ID aliases for clarity (no runtime cost).
pub type NodeId = Id;
pub type ElementId = Id;
