// Dense 3D voxel grid for the target structure.
//
// A schematic is stored as a flat `Vec<BlockKind>` indexed by
// `x + z * size_x + y * size_x * size_z`, giving O(1) read/write access.
// Out-of-bounds reads return `Air`; out-of-bounds writes are no-ops.
//
// Unlike transient working state, the schematic IS the input format: it
// derives `Serialize`/`Deserialize` and is loaded from JSON by the CLI and
// by tests. `is_well_formed()` guards against hand-edited files whose flat
// block vector disagrees with the declared dimensions — callers reject
// such files before building a graph over them.
//
// See also: `graph.rs` for the rule-driven dependency graph built on top
// of the grid, `analyzer.rs` for the prevalidation passes that consume it.

use crate::types::{BlockKind, VoxelPos};
use serde::{Deserialize, Serialize};

/// Dense 3D voxel grid describing the structure to be built.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schematic {
    /// Flat storage: index = x + z * size_x + y * size_x * size_z.
    blocks: Vec<BlockKind>,
    pub size_x: u32,
    pub size_y: u32,
    pub size_z: u32,
}

impl Schematic {
    /// Create a new schematic filled with `Air`.
    pub fn new(size_x: u32, size_y: u32, size_z: u32) -> Self {
        let total = (size_x as usize) * (size_y as usize) * (size_z as usize);
        Self {
            blocks: vec![BlockKind::Air; total],
            size_x,
            size_y,
            size_z,
        }
    }

    /// Total number of cells in the bounded region.
    pub fn volume(&self) -> usize {
        (self.size_x as usize) * (self.size_y as usize) * (self.size_z as usize)
    }

    /// A deserialized schematic is well-formed when its flat block vector
    /// matches the declared dimensions.
    pub fn is_well_formed(&self) -> bool {
        self.blocks.len() == self.volume()
    }

    /// Check whether a position is within bounds.
    pub fn in_bounds(&self, pos: VoxelPos) -> bool {
        pos.x >= 0
            && pos.y >= 0
            && pos.z >= 0
            && (pos.x as u32) < self.size_x
            && (pos.y as u32) < self.size_y
            && (pos.z as u32) < self.size_z
    }

    /// Convert a position to a flat index. Returns `None` if out of bounds.
    fn index(&self, pos: VoxelPos) -> Option<usize> {
        if self.in_bounds(pos) {
            let x = pos.x as usize;
            let y = pos.y as usize;
            let z = pos.z as usize;
            let sx = self.size_x as usize;
            let sz = self.size_z as usize;
            Some(x + z * sx + y * sx * sz)
        } else {
            None
        }
    }

    /// Read a cell. Returns `Air` for out-of-bounds positions.
    pub fn get(&self, pos: VoxelPos) -> BlockKind {
        self.index(pos)
            .map(|i| self.blocks[i])
            .unwrap_or(BlockKind::Air)
    }

    /// Write a cell. No-op for out-of-bounds positions.
    pub fn set(&mut self, pos: VoxelPos, kind: BlockKind) {
        if let Some(i) = self.index(pos) {
            self.blocks[i] = kind;
        }
    }

    /// Iterate every in-bounds position in flat-array order
    /// (x inner, z mid, y outer).
    pub fn positions(&self) -> impl Iterator<Item = VoxelPos> + '_ {
        let (sx, sy, sz) = (self.size_x as i32, self.size_y as i32, self.size_z as i32);
        (0..sy).flat_map(move |y| {
            (0..sz).flat_map(move |z| (0..sx).map(move |x| VoxelPos::new(x, y, z)))
        })
    }
}
