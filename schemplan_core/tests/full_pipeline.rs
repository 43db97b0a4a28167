// End-to-end prevalidation scenarios.
//
// Each test builds a real `Schematic`, interprets it through the default
// (or a custom) `RuleSet` via `SchematicGraph`, and runs the same passes
// the CLI runs. These exercise the full path: grid → rule table → graph
// predicates → analyzer, including the JSON forms a user would feed in.

use schemplan_core::{
    BlockKind, Face, RuleSet, Schematic, SchematicGraph, ValidationError, VoxelPos,
    check_exterior_reachability, check_local_support, find_symmetry_violation, prevalidate,
};

/// A vertical column of solids at (cx, 0..height, cz).
fn column(schem: &mut Schematic, cx: i32, cz: i32, height: i32) {
    for y in 0..height {
        schem.set(VoxelPos::new(cx, y, cz), BlockKind::Solid);
    }
}

// ---------------------------------------------------------------------------
// Accepting schematics
// ---------------------------------------------------------------------------

#[test]
fn empty_schematic_passes() {
    let schem = Schematic::new(4, 4, 4);
    let rules = RuleSet::default();
    assert_eq!(prevalidate(&SchematicGraph::new(&schem, &rules)), Ok(()));
}

#[test]
fn tower_passes() {
    let mut schem = Schematic::new(3, 4, 3);
    column(&mut schem, 1, 1, 4);
    let rules = RuleSet::default();
    assert_eq!(prevalidate(&SchematicGraph::new(&schem, &rules)), Ok(()));
}

#[test]
fn full_cube_passes() {
    // Even the center of a solid cube is reachable: the closure works
    // inward from the boundary faces.
    let mut schem = Schematic::new(3, 3, 3);
    for pos in schem.positions().collect::<Vec<_>>() {
        schem.set(pos, BlockKind::Solid);
    }
    let rules = RuleSet::default();
    assert_eq!(prevalidate(&SchematicGraph::new(&schem, &rules)), Ok(()));
}

#[test]
fn sealed_air_pocket_is_fine() {
    // A hollow cube: the enclosed air cell is scaffolding and is not
    // required to be placeable or reachable.
    let mut schem = Schematic::new(3, 3, 3);
    for pos in schem.positions().collect::<Vec<_>>() {
        schem.set(pos, BlockKind::Solid);
    }
    schem.set(VoxelPos::new(1, 1, 1), BlockKind::Air);
    let rules = RuleSet::default();
    assert_eq!(prevalidate(&SchematicGraph::new(&schem, &rules)), Ok(()));
}

#[test]
fn fixture_on_tower_wall_passes() {
    let mut schem = Schematic::new(3, 4, 3);
    column(&mut schem, 1, 1, 4);
    // Wall-mounted fixture: its -X face rests against the column.
    schem.set(VoxelPos::new(2, 2, 1), BlockKind::Fixture);
    let rules = RuleSet::default();
    assert_eq!(prevalidate(&SchematicGraph::new(&schem, &rules)), Ok(()));
}

#[test]
fn hanging_under_arm_passes() {
    let mut schem = Schematic::new(4, 4, 3);
    // Column, a one-block arm off its top, and a hanging block beneath
    // the arm.
    column(&mut schem, 1, 1, 4);
    schem.set(VoxelPos::new(2, 3, 1), BlockKind::Solid);
    schem.set(VoxelPos::new(2, 2, 1), BlockKind::Hanging);
    let rules = RuleSet::default();
    assert_eq!(prevalidate(&SchematicGraph::new(&schem, &rules)), Ok(()));
}

#[test]
fn loose_on_column_passes() {
    let mut schem = Schematic::new(3, 4, 3);
    column(&mut schem, 1, 1, 3);
    schem.set(VoxelPos::new(1, 3, 1), BlockKind::Loose);
    let rules = RuleSet::default();
    assert_eq!(prevalidate(&SchematicGraph::new(&schem, &rules)), Ok(()));
}

// ---------------------------------------------------------------------------
// Rejected schematics
// ---------------------------------------------------------------------------

#[test]
fn single_block_in_interior_fails_local_support() {
    // One solid with nothing but interior air around it: no face has
    // interior support. (It IS exterior-reachable if it sat at the
    // boundary — see the independence test below.)
    let mut schem = Schematic::new(3, 3, 3);
    schem.set(VoxelPos::new(1, 1, 1), BlockKind::Solid);
    let rules = RuleSet::default();
    assert_eq!(
        prevalidate(&SchematicGraph::new(&schem, &rules)),
        Err(ValidationError::UnsupportedFromAnySide(VoxelPos::new(1, 1, 1)))
    );
}

#[test]
fn floating_pair_fails_reachability_only() {
    // Two adjacent solids floating mid-air: each supports the other, so
    // the local pass is satisfied — but no placement chain from the
    // exterior ever reaches them.
    let mut schem = Schematic::new(5, 5, 5);
    schem.set(VoxelPos::new(2, 2, 1), BlockKind::Solid);
    schem.set(VoxelPos::new(2, 2, 2), BlockKind::Solid);
    let rules = RuleSet::default();
    let graph = SchematicGraph::new(&schem, &rules);

    assert_eq!(check_local_support(&graph), Ok(()));
    // Flat iteration order (x inner, z mid, y outer) reaches (2,2,1) first.
    assert_eq!(
        check_exterior_reachability(&graph),
        Err(ValidationError::UnreachableFromExterior(VoxelPos::new(2, 2, 1)))
    );
}

#[test]
fn hanging_chain_fails_local_support() {
    // Hangings cannot support further hangings under the standard rules:
    // the second link has no attachable support.
    let mut schem = Schematic::new(3, 4, 3);
    schem.set(VoxelPos::new(1, 3, 1), BlockKind::Solid);
    schem.set(VoxelPos::new(1, 2, 1), BlockKind::Hanging);
    schem.set(VoxelPos::new(1, 1, 1), BlockKind::Hanging);
    let rules = RuleSet::default();
    assert_eq!(
        prevalidate(&SchematicGraph::new(&schem, &rules)),
        Err(ValidationError::UnsupportedFromAnySide(VoxelPos::new(1, 1, 1)))
    );
}

#[test]
fn loose_beside_column_fails_local_support() {
    // Loose blocks attach only downward; a side neighbor is not enough.
    let mut schem = Schematic::new(4, 4, 4);
    column(&mut schem, 1, 1, 3);
    schem.set(VoxelPos::new(2, 2, 1), BlockKind::Loose);
    let rules = RuleSet::default();
    assert_eq!(
        prevalidate(&SchematicGraph::new(&schem, &rules)),
        Err(ValidationError::UnsupportedFromAnySide(VoxelPos::new(2, 2, 1)))
    );
}

#[test]
fn first_violation_follows_flat_order() {
    // Two independent violations: the reported one is whichever the
    // flat-order sweep meets first.
    let mut schem = Schematic::new(5, 5, 5);
    schem.set(VoxelPos::new(3, 2, 3), BlockKind::Solid);
    schem.set(VoxelPos::new(1, 1, 1), BlockKind::Solid);
    let rules = RuleSet::default();
    assert_eq!(
        check_local_support(&SchematicGraph::new(&schem, &rules)),
        Err(ValidationError::UnsupportedFromAnySide(VoxelPos::new(1, 1, 1)))
    );
}

// ---------------------------------------------------------------------------
// The two passes are independent
// ---------------------------------------------------------------------------

#[test]
fn boundary_block_fails_local_but_is_reachable() {
    // A 1x1x1 schematic holding one solid: every neighbor is exterior, so
    // there is no interior support (local fails) — yet the block is
    // directly placeable from outside (reachability passes).
    let mut schem = Schematic::new(1, 1, 1);
    schem.set(VoxelPos::new(0, 0, 0), BlockKind::Solid);
    let rules = RuleSet::default();
    let graph = SchematicGraph::new(&schem, &rules);

    assert_eq!(
        check_local_support(&graph),
        Err(ValidationError::UnsupportedFromAnySide(VoxelPos::new(0, 0, 0)))
    );
    assert_eq!(check_exterior_reachability(&graph), Ok(()));
}

// ---------------------------------------------------------------------------
// Repair and re-validation
// ---------------------------------------------------------------------------

#[test]
fn adding_support_column_repairs_floating_pair() {
    let mut schem = Schematic::new(5, 5, 5);
    schem.set(VoxelPos::new(2, 2, 1), BlockKind::Solid);
    schem.set(VoxelPos::new(2, 2, 2), BlockKind::Solid);
    let rules = RuleSet::default();
    assert!(prevalidate(&SchematicGraph::new(&schem, &rules)).is_err());

    // A column from the floor up to the pair gives the closure a way in.
    column(&mut schem, 2, 1, 2);
    assert_eq!(prevalidate(&SchematicGraph::new(&schem, &rules)), Ok(()));
}

// ---------------------------------------------------------------------------
// Graph consistency and serialized inputs
// ---------------------------------------------------------------------------

#[test]
fn schematic_graph_edges_are_symmetric() {
    let mut schem = Schematic::new(4, 5, 4);
    column(&mut schem, 1, 1, 4);
    schem.set(VoxelPos::new(2, 2, 1), BlockKind::Fixture);
    schem.set(VoxelPos::new(1, 4, 1), BlockKind::Loose);
    schem.set(VoxelPos::new(2, 3, 1), BlockKind::Hanging);
    let rules = RuleSet::default();
    let graph = SchematicGraph::new(&schem, &rules);
    assert_eq!(find_symmetry_violation(&graph), None);
}

#[test]
fn json_loaded_schematic_validates_like_the_original() {
    let mut schem = Schematic::new(3, 4, 3);
    column(&mut schem, 1, 1, 4);
    schem.set(VoxelPos::new(2, 2, 1), BlockKind::Fixture);

    let json = serde_json::to_string(&schem).unwrap();
    let loaded: Schematic = serde_json::from_str(&json).unwrap();
    assert!(loaded.is_well_formed());

    let rules = RuleSet::default();
    assert_eq!(
        prevalidate(&SchematicGraph::new(&schem, &rules)),
        prevalidate(&SchematicGraph::new(&loaded, &rules))
    );
}

#[test]
fn custom_rules_change_the_verdict() {
    // A palette variant with no ceiling-mount: solids may rest on the
    // floor or against walls, but never attach to the block above them.
    let json = r#"{
        "profiles": {
            "Air": { "attach_faces": [], "supports_neighbors": false, "scaffolding": true },
            "Solid": { "attach_faces": ["NegY","PosX","NegX","PosZ","NegZ"], "supports_neighbors": true, "scaffolding": false }
        }
    }"#;
    let no_ceiling = RuleSet::from_json_str(json).unwrap();
    let standard = RuleSet::default();

    // Footprint pair, column, two-block arm, and a pendant solid whose
    // only neighbor is the arm block above it.
    let mut schem = Schematic::new(5, 5, 5);
    schem.set(VoxelPos::new(1, 0, 1), BlockKind::Solid);
    schem.set(VoxelPos::new(2, 0, 1), BlockKind::Solid);
    column(&mut schem, 1, 1, 4);
    schem.set(VoxelPos::new(2, 3, 1), BlockKind::Solid);
    schem.set(VoxelPos::new(3, 3, 1), BlockKind::Solid);
    schem.set(VoxelPos::new(3, 2, 1), BlockKind::Solid);

    // Standard rules: the pendant hangs off the arm above it.
    assert_eq!(prevalidate(&SchematicGraph::new(&schem, &standard)), Ok(()));
    // Without ceiling-mount the pendant has no support left.
    assert_eq!(
        prevalidate(&SchematicGraph::new(&schem, &no_ceiling)),
        Err(ValidationError::UnsupportedFromAnySide(VoxelPos::new(3, 2, 1)))
    );
}

#[test]
fn face_model_agrees_with_grid_adjacency() {
    // The graph's neighbor arithmetic and the grid's bounds agree: walking
    // any face off a boundary cell leaves the region.
    let schem = Schematic::new(2, 2, 2);
    for pos in schem.positions() {
        for face in Face::ALL {
            let neighbor = face.offset(pos);
            let back = face.opposite().offset(neighbor);
            assert_eq!(back, pos);
        }
    }
}
