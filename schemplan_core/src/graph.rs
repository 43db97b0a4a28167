// Placement dependency graph over a schematic.
//
// The analyzer never touches the grid directly — it queries an abstract
// capability set: per-position scaffolding classification and three
// per-(position, face) support predicates. `PlacementGraph` is that seam;
// `SchematicGraph` is the standard backing, deriving every predicate from a
// `Schematic` plus a `RuleSet`. Alternate backings (procedural rule
// evaluation, sparse regions, test predicate tables) implement the same
// trait without the analyzer changing.
//
// The predicate families are two views of one physical relation:
// `outgoing(pos, f)` and `incoming(f.offset(pos), f.opposite())` must
// agree. `SchematicGraph` guarantees this by deriving both sides from the
// same profile lookups; `find_symmetry_violation()` checks it for any
// backing and is used in tests.
//
// See also: `analyzer.rs` for the two prevalidation passes, `config.rs`
// for the rule table the predicates read.

use crate::config::RuleSet;
use crate::schematic::Schematic;
use crate::types::{Face, VoxelPos};

/// Abstract placement-support queries over a bounded voxel region.
pub trait PlacementGraph {
    /// Every position in the region, exhaustively and without duplicates.
    /// Iteration order is unconstrained.
    fn bounds(&self) -> impl Iterator<Item = VoxelPos> + '_;

    /// Scaffolding positions are never placed and are skipped by both
    /// validation passes.
    fn is_scaffolding(&self, pos: VoxelPos) -> bool;

    /// True if an already-placed neighbor in direction `face` — interior to
    /// the region — would support placing `pos`.
    fn incoming(&self, pos: VoxelPos, face: Face) -> bool;

    /// Superset of `incoming`: also true when the would-be supporting
    /// neighbor in direction `face` lies outside the region's bounds (open
    /// space counts as support).
    fn incoming_permit_exterior(&self, pos: VoxelPos, face: Face) -> bool;

    /// True if placing `pos` supports placing the neighbor at
    /// `face.offset(pos)`.
    fn outgoing(&self, pos: VoxelPos, face: Face) -> bool;
}

/// The standard graph backing: a dense schematic interpreted through a
/// placement rule table.
pub struct SchematicGraph<'a> {
    schematic: &'a Schematic,
    rules: &'a RuleSet,
}

impl<'a> SchematicGraph<'a> {
    pub fn new(schematic: &'a Schematic, rules: &'a RuleSet) -> Self {
        Self { schematic, rules }
    }

    /// Is the cell at `pos` a structural block that, once placed, offers
    /// support to its neighbors?
    fn offers_support(&self, pos: VoxelPos) -> bool {
        match self.rules.profile(self.schematic.get(pos)) {
            Some(profile) => !profile.scaffolding && profile.supports_neighbors,
            None => false,
        }
    }

    /// Does the cell at `pos` accept attachment via `face`? False for
    /// scaffolding and for kinds without a profile.
    fn accepts_via(&self, pos: VoxelPos, face: Face) -> bool {
        match self.rules.profile(self.schematic.get(pos)) {
            Some(profile) => !profile.scaffolding && profile.can_attach_via(face),
            None => false,
        }
    }
}

impl PlacementGraph for SchematicGraph<'_> {
    fn bounds(&self) -> impl Iterator<Item = VoxelPos> + '_ {
        self.schematic.positions()
    }

    fn is_scaffolding(&self, pos: VoxelPos) -> bool {
        match self.rules.profile(self.schematic.get(pos)) {
            Some(profile) => profile.scaffolding,
            None => true,
        }
    }

    fn incoming(&self, pos: VoxelPos, face: Face) -> bool {
        if !self.accepts_via(pos, face) {
            return false;
        }
        let neighbor = face.offset(pos);
        self.schematic.in_bounds(neighbor) && self.offers_support(neighbor)
    }

    fn incoming_permit_exterior(&self, pos: VoxelPos, face: Face) -> bool {
        if !self.accepts_via(pos, face) {
            return false;
        }
        let neighbor = face.offset(pos);
        // Outside the region counts as open, placeable-against space.
        !self.schematic.in_bounds(neighbor) || self.offers_support(neighbor)
    }

    fn outgoing(&self, pos: VoxelPos, face: Face) -> bool {
        if !self.offers_support(pos) {
            return false;
        }
        let neighbor = face.offset(pos);
        self.schematic.in_bounds(neighbor) && self.accepts_via(neighbor, face.opposite())
    }
}

/// Search for a pair where the two predicate families disagree:
/// `outgoing(pos, f) != incoming(f.offset(pos), f.opposite())` with both
/// ends in bounds. Returns the first offending `(pos, face)`, or `None` if
/// the graph is consistent.
///
/// The analyzer assumes consistency and never calls this; it exists for
/// debugging custom graph backings and is exercised by tests.
pub fn find_symmetry_violation<G: PlacementGraph>(graph: &G) -> Option<(VoxelPos, Face)> {
    let in_bounds: std::collections::BTreeSet<VoxelPos> = graph.bounds().collect();
    for pos in graph.bounds() {
        for face in Face::ALL {
            let neighbor = face.offset(pos);
            if !in_bounds.contains(&neighbor) {
                continue;
            }
            if graph.outgoing(pos, face) != graph.incoming(neighbor, face.opposite()) {
                return Some((pos, face));
            }
        }
    }
    None
}
