// Core types shared across the crate.
//
// Defines spatial coordinates (`VoxelPos`), the six axis-aligned face
// directions (`Face`), and the per-cell material classification
// (`BlockKind`). All types derive `Serialize` and `Deserialize` — schematics
// and rule sets are plain JSON files.
//
// The coordinate system uses right-handed conventions:
// - X: east  (positive) / west  (negative)
// - Y: up    (positive) / down  (negative)
// - Z: south (positive) / north (negative)

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Spatial types
// ---------------------------------------------------------------------------

/// A position in the 3D voxel grid. Each component is in voxel units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VoxelPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl VoxelPos {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// The position displaced by the given per-axis deltas.
    pub const fn offset(self, dx: i32, dy: i32, dz: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            z: self.z + dz,
        }
    }
}

impl fmt::Display for VoxelPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

// ---------------------------------------------------------------------------
// Face directions
// ---------------------------------------------------------------------------

/// One of the six axis-aligned directions linking a voxel to an immediate
/// face neighbor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Face {
    PosX,
    NegX,
    PosY,
    NegY,
    PosZ,
    NegZ,
}

impl Face {
    /// All six faces, in a fixed iteration order.
    pub const ALL: [Face; 6] = [
        Face::PosX,
        Face::NegX,
        Face::PosY,
        Face::NegY,
        Face::PosZ,
        Face::NegZ,
    ];

    /// The unit offset along this face's axis.
    pub const fn to_offset(self) -> (i32, i32, i32) {
        match self {
            Face::PosX => (1, 0, 0),
            Face::NegX => (-1, 0, 0),
            Face::PosY => (0, 1, 0),
            Face::NegY => (0, -1, 0),
            Face::PosZ => (0, 0, 1),
            Face::NegZ => (0, 0, -1),
        }
    }

    /// The face pointing the opposite way.
    pub const fn opposite(self) -> Face {
        match self {
            Face::PosX => Face::NegX,
            Face::NegX => Face::PosX,
            Face::PosY => Face::NegY,
            Face::NegY => Face::PosY,
            Face::PosZ => Face::NegZ,
            Face::NegZ => Face::PosZ,
        }
    }

    /// The neighbor of `pos` in this direction.
    pub const fn offset(self, pos: VoxelPos) -> VoxelPos {
        let (dx, dy, dz) = self.to_offset();
        pos.offset(dx, dy, dz)
    }
}

// ---------------------------------------------------------------------------
// Block kinds
// ---------------------------------------------------------------------------

/// The material classification of a single schematic cell.
///
/// The kind alone says nothing about placement behavior — that lives in the
/// per-kind `PlacementProfile` entries of a `RuleSet` (see `config.rs`).
/// The variants cover the behavioral archetypes the standard rules
/// distinguish:
///
/// - `Air`: empty space, treated as scaffolding and skipped by validation.
/// - `Solid`: a full block; placeable against any neighbor, and neighbors
///   may be placed against it.
/// - `Fixture`: a torch-like attachment; rests on the block below or one of
///   the four walls, and nothing can be placed against it.
/// - `Hanging`: attaches only to the block above it.
/// - `Loose`: gravity-bound; rests only on the block below it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BlockKind {
    #[default]
    Air,
    Solid,
    Fixture,
    Hanging,
    Loose,
}
