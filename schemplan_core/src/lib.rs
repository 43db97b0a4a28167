// schemplan_core — build-order prevalidation for voxel schematics.
//
// Before an order solver ever runs, this crate answers one question: does
// the schematic admit *any* valid build order under physical placement
// constraints? Two fast passes — local support and exterior reachability —
// either accept the schematic or reject it with an error naming the exact
// offending position, so users see "(x, y, z) cannot be placed" instead of
// a solver's generic "no solution".
//
// Module overview:
// - `types.rs`:     VoxelPos, Face (6 axis directions), BlockKind.
// - `schematic.rs`: Dense 3D voxel grid — the structure to be built.
// - `config.rs`:    RuleSet / PlacementProfile — data-driven placement rules.
// - `graph.rs`:     PlacementGraph trait + the rule-driven SchematicGraph backing.
// - `analyzer.rs`:  The two prevalidation passes and `prevalidate()`.
// - `error.rs`:     ValidationError — the two located failure kinds.
//
// The companion binary crate `schemplan_cli` wraps this library for the
// command line. This crate stays silent (no printing, no logging) and holds
// no global state; every validation pass is a pure function of its graph.
//
// **Determinism.** Pass/fail outcomes are independent of iteration and
// traversal order; keyed configuration uses `BTreeMap`; the only hash
// container is a membership set whose ordering is never observed.

pub mod analyzer;
pub mod config;
pub mod error;
pub mod graph;
pub mod schematic;
pub mod types;

pub use analyzer::{check_exterior_reachability, check_local_support, prevalidate};
pub use config::{PlacementProfile, RuleSet};
pub use error::ValidationError;
pub use graph::{PlacementGraph, SchematicGraph, find_symmetry_violation};
pub use schematic::Schematic;
pub use types::{BlockKind, Face, VoxelPos};
