// Two-phase build-order prevalidation.
//
// Catches schematics that admit no valid build order before an order
// solver runs, so the user gets an error **that names the offending
// position** instead of a generic "no solution" from deep inside the
// solver.
//
// The two passes prove different properties:
//
// - `check_local_support()`: every structural position can be placed from
//   at least one side. Necessary but not sufficient — a position can have
//   local support yet sit inside a sealed cavity no placement chain ever
//   reaches.
// - `check_exterior_reachability()`: every structural position is covered
//   by the placement closure grown from exterior-accessible seeds.
//
// Both are pure queries against a `PlacementGraph`; the analyzer holds no
// state across calls. Each pass is fail-fast: the first violation aborts
// it. Pass/fail is independent of bounds-iteration and traversal order —
// both properties are set-membership fixed points — only the identity of
// the first reported violation can vary when several exist.
//
// See also: `graph.rs` for the predicate contract, `error.rs` for the two
// failure kinds.

use crate::error::ValidationError;
use crate::graph::PlacementGraph;
use crate::types::{Face, VoxelPos};
use rustc_hash::FxHashSet;
use std::collections::VecDeque;

/// Run both prevalidation passes. The first violation found aborts.
pub fn prevalidate<G: PlacementGraph>(graph: &G) -> Result<(), ValidationError> {
    check_local_support(graph)?;
    check_exterior_reachability(graph)
}

/// Every structural position must have at least one true `incoming`
/// predicate across its six faces.
pub fn check_local_support<G: PlacementGraph>(graph: &G) -> Result<(), ValidationError> {
    'positions: for pos in graph.bounds() {
        if graph.is_scaffolding(pos) {
            // Completely fine to, for example, have an air pocket with
            // non-attachable material all around it.
            continue;
        }
        for face in Face::ALL {
            if graph.incoming(pos, face) {
                continue 'positions;
            }
        }
        return Err(ValidationError::UnsupportedFromAnySide(pos));
    }
    Ok(())
}

/// Every structural position must be inside the placement closure grown
/// from positions directly placeable from the exterior of the region.
///
/// Seeds are the `(pos, face)` pairs whose support is satisfied *only* by
/// exterior access — `incoming_permit_exterior` true, `incoming` false. A
/// position may be enqueued once per qualifying face; duplicates are
/// discarded at dequeue time against the reachable set. Expansion follows
/// `outgoing` edges, pushing neighbors to the front of the queue; seeding
/// is FIFO. The traversal order only affects which violation surfaces
/// first, never the final outcome.
pub fn check_exterior_reachability<G: PlacementGraph>(graph: &G) -> Result<(), ValidationError> {
    let mut reachable: FxHashSet<VoxelPos> = FxHashSet::default();
    let mut queue: VecDeque<VoxelPos> = VecDeque::new();

    for pos in graph.bounds() {
        for face in Face::ALL {
            if graph.incoming_permit_exterior(pos, face) && !graph.incoming(pos, face) {
                // This position is placeable from outside the schematic.
                queue.push_back(pos);
            }
        }
    }

    while let Some(pos) = queue.pop_front() {
        if !reachable.insert(pos) {
            continue;
        }
        for face in Face::ALL {
            if graph.outgoing(pos, face) {
                queue.push_front(face.offset(pos));
            }
        }
    }

    for pos in graph.bounds() {
        if graph.is_scaffolding(pos) {
            // Same exemption as the local pass.
            continue;
        }
        if !reachable.contains(&pos) {
            return Err(ValidationError::UnreachableFromExterior(pos));
        }
    }
    Ok(())
}
