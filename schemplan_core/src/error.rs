// Typed prevalidation failures.
//
// Both variants are fatal and non-retryable: they mean the schematic (or
// the graph generated from it) admits no valid build order, not that
// something transient went wrong. Callers reject the schematic before
// handing it to an order solver and surface the carried position as the
// actionable diagnostic.
//
// Reporting is fail-fast — each check stops at the first violation it
// finds, so a failing schematic with several problems yields one located
// error per run.

use crate::types::VoxelPos;
use thiserror::Error;

/// A located, fatal prevalidation failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The position has no incoming support on any of its six faces: it can
    /// never be placed, no matter the order.
    #[error("{0} cannot be placed from any side")]
    UnsupportedFromAnySide(VoxelPos),

    /// Every face of the position has some support in principle, but no
    /// chain of placements starting from the exterior ever reaches it.
    #[error("{0} is placeable in isolation, but no placement path from the exterior reaches it")]
    UnreachableFromExterior(VoxelPos),
}

impl ValidationError {
    /// The offending position — the diagnostic callers surface to users.
    pub fn position(&self) -> VoxelPos {
        match self {
            ValidationError::UnsupportedFromAnySide(pos)
            | ValidationError::UnreachableFromExterior(pos) => *pos,
        }
    }
}
