// Data-driven placement rules.
//
// All placement behavior lives here in `RuleSet`, loadable from JSON. The
// graph logic never hardcodes per-kind behavior — it reads from the rule
// table. This lets callers model unusual block palettes (sideways-only
// attachment, unsupportable decorations) without recompilation.
//
// A `PlacementProfile` answers three questions about a block kind:
// which of its own faces may rest against an already-placed neighbor
// (`attach_faces`), whether neighbors may in turn rest against it once it
// is down (`supports_neighbors`), and whether it is scaffolding — never
// actually placed and skipped by validation (`scaffolding`).
//
// A kind with no profile entry is treated as scaffolding. That can only
// exempt a cell, never fail one.
//
// See also: `graph.rs` for the predicates derived from these profiles,
// `types.rs` for `BlockKind` and `Face`.
//
// **Determinism:** profiles are keyed in a `BTreeMap` so iteration and
// serialization order are stable across runs.

use crate::types::{BlockKind, Face};
use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};
use std::collections::BTreeMap;

/// Placement behavior for one block kind.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementProfile {
    /// Faces of this block that may rest against a neighbor. A block is
    /// placeable from direction `f` only if `f` is listed here and the
    /// neighbor at `f` offers support.
    pub attach_faces: SmallVec<[Face; 6]>,
    /// Whether neighbors may be placed against this block once it is down.
    pub supports_neighbors: bool,
    /// Scaffolding cells are never placed and are skipped by validation.
    pub scaffolding: bool,
}

impl PlacementProfile {
    /// Does this profile allow attaching via the given face?
    pub fn can_attach_via(&self, face: Face) -> bool {
        self.attach_faces.contains(&face)
    }
}

/// The complete placement rule table, keyed by block kind.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    pub profiles: BTreeMap<BlockKind, PlacementProfile>,
}

impl RuleSet {
    /// Look up the profile for a kind. `None` means the kind is unknown to
    /// this rule set and is treated as scaffolding by the graph.
    pub fn profile(&self, kind: BlockKind) -> Option<&PlacementProfile> {
        self.profiles.get(&kind)
    }

    /// Parse a rule set from a JSON string.
    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

impl Default for RuleSet {
    /// The standard rules:
    /// - `Air`: scaffolding.
    /// - `Solid`: attaches via any face, supports neighbors.
    /// - `Fixture`: rests on the block below or one of the four walls,
    ///   supports nothing.
    /// - `Hanging`: attaches only to the block above, supports nothing.
    /// - `Loose`: rests only on the block below, supports neighbors.
    fn default() -> Self {
        let mut profiles = BTreeMap::new();
        profiles.insert(
            BlockKind::Air,
            PlacementProfile {
                attach_faces: smallvec![],
                supports_neighbors: false,
                scaffolding: true,
            },
        );
        profiles.insert(
            BlockKind::Solid,
            PlacementProfile {
                attach_faces: SmallVec::from_slice(&Face::ALL),
                supports_neighbors: true,
                scaffolding: false,
            },
        );
        profiles.insert(
            BlockKind::Fixture,
            PlacementProfile {
                attach_faces: smallvec![
                    Face::NegY,
                    Face::PosX,
                    Face::NegX,
                    Face::PosZ,
                    Face::NegZ
                ],
                supports_neighbors: false,
                scaffolding: false,
            },
        );
        profiles.insert(
            BlockKind::Hanging,
            PlacementProfile {
                attach_faces: smallvec![Face::PosY],
                supports_neighbors: false,
                scaffolding: false,
            },
        );
        profiles.insert(
            BlockKind::Loose,
            PlacementProfile {
                attach_faces: smallvec![Face::NegY],
                supports_neighbors: true,
                scaffolding: false,
            },
        );
        Self { profiles }
    }
}
