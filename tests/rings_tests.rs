// Host-side tests for layer grouping and angular offsets.

use orbit_core::*;
use std::f32::consts::{FRAC_PI_2, PI, TAU};

fn spec(id: &str, layer: &str) -> EntitySpec {
    EntitySpec::new(id, id, "#61DAFB", layer, SizeClass::Medium)
}

#[test]
fn offsets_are_evenly_spaced_within_each_layer() {
    let specs = reference_catalog();
    let catalog = Catalog::from_specs(&specs).expect("reference catalog is valid");
    for layer in ["inner", "middle", "outer"] {
        let members: Vec<&Entity> = catalog
            .entities()
            .iter()
            .filter(|e| e.layer == layer)
            .collect();
        let n = members.len();
        assert!(n > 0, "layer {layer} should have members");
        for (k, e) in members.iter().enumerate() {
            assert_eq!(e.layer_index, k);
            let expected = TAU * k as f32 / n as f32;
            assert!(
                (e.offset - expected).abs() < 1e-6,
                "{} in {layer}: offset {} expected {}",
                e.id,
                e.offset,
                expected
            );
        }
    }
}

#[test]
fn four_members_land_on_quarter_turns() {
    let specs: Vec<EntitySpec> = ["a", "b", "c", "d"].iter().map(|id| spec(id, "inner")).collect();
    let catalog = Catalog::from_specs(&specs).unwrap();
    let offsets: Vec<f32> = catalog.entities().iter().map(|e| e.offset).collect();
    let expected = [0.0, FRAC_PI_2, PI, 3.0 * FRAC_PI_2];
    for (got, want) in offsets.iter().zip(expected) {
        assert!((got - want).abs() < 1e-6, "offset {got} expected {want}");
    }
}

#[test]
fn interleaved_layers_count_independently() {
    let specs = vec![
        spec("a", "inner"),
        spec("b", "outer"),
        spec("c", "inner"),
        spec("d", "outer"),
        spec("e", "outer"),
    ];
    let catalog = Catalog::from_specs(&specs).unwrap();
    let by_id = |id: &str| catalog.get(id).unwrap().clone();
    assert_eq!(by_id("c").layer_index, 1);
    assert!((by_id("c").offset - PI).abs() < 1e-6);
    assert_eq!(by_id("e").layer_index, 2);
    assert!((by_id("e").offset - 2.0 * TAU / 3.0).abs() < 1e-6);
}

#[test]
fn offset_assignment_is_idempotent() {
    let specs = reference_catalog();
    let first = Catalog::from_specs(&specs).unwrap();
    let second = Catalog::from_specs(&specs).unwrap();
    for (a, b) in first.entities().iter().zip(second.entities()) {
        assert_eq!(a.offset.to_bits(), b.offset.to_bits());
    }

    let mut again: Vec<Entity> = first.entities().to_vec();
    assign_offsets(&mut again);
    for (a, b) in first.entities().iter().zip(&again) {
        assert_eq!(a.offset.to_bits(), b.offset.to_bits());
        assert_eq!(a.layer_index, b.layer_index);
    }
}

#[test]
fn angular_offset_handles_empty_layer() {
    assert_eq!(angular_offset(0, 0), 0.0);
    assert_eq!(angular_offset(3, 0), 0.0);
}

#[test]
fn ring_assignment_keeps_config_order_and_membership() {
    let specs = vec![spec("a", "outer"), spec("b", "inner"), spec("c", "outer")];
    let catalog = Catalog::from_specs(&specs).unwrap();
    let assignment = RingAssignment::new(&catalog, &default_rings()).unwrap();

    let ids: Vec<&str> = assignment.rings().iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["inner", "middle", "outer"]);
    assert_eq!(assignment.rings()[0].members.as_slice(), &[1]);
    assert!(assignment.rings()[1].is_empty());
    assert_eq!(assignment.rings()[2].members.as_slice(), &[0, 2]);

    let ring = assignment.ring_for(2).unwrap();
    assert_eq!(ring.id, "outer");
    assert!((ring.radius - 6.0).abs() < 1e-6);
}

#[test]
fn ring_assignment_rejects_unknown_layer() {
    let specs = vec![spec("a", "inner"), spec("rogue", "kuiper")];
    let catalog = Catalog::from_specs(&specs).unwrap();
    let err = RingAssignment::new(&catalog, &default_rings()).unwrap_err();
    assert_eq!(
        err,
        EngineError::UnknownLayer {
            id: "rogue".to_string(),
            layer: "kuiper".to_string()
        }
    );
}

#[test]
fn ring_period_matches_speed() {
    let specs = vec![spec("a", "inner")];
    let catalog = Catalog::from_specs(&specs).unwrap();
    let assignment = RingAssignment::new(&catalog, &default_rings()).unwrap();
    let inner = &assignment.rings()[0];
    let period = inner.period().unwrap();
    assert!((period - TAU / 0.3).abs() < 1e-4);

    let still = vec![RingSpec::new("inner", 2.0, 0.0)];
    let assignment = RingAssignment::new(&catalog, &still).unwrap();
    assert!(assignment.rings()[0].period().is_none());
}

#[test]
fn summaries_report_member_counts() {
    let catalog = Catalog::from_specs(&reference_catalog()).unwrap();
    let assignment = RingAssignment::new(&catalog, &default_rings()).unwrap();
    let counts: Vec<(String, usize)> = assignment
        .summaries()
        .into_iter()
        .map(|s| (s.id, s.members))
        .collect();
    assert_eq!(
        counts,
        vec![
            ("inner".to_string(), 6),
            ("middle".to_string(), 7),
            ("outer".to_string(), 17)
        ]
    );
}
