// Host-side tests for the engine facade and per-frame aggregation.

use orbit_core::*;
use std::cell::RefCell;
use std::f32::consts::FRAC_PI_2;
use std::rc::Rc;

fn four_on_one_ring() -> Vec<EntitySpec> {
    ["a", "b", "c", "d"]
        .iter()
        .map(|id| EntitySpec::new(id, id, "#3178C6", "inner", SizeClass::Large))
        .collect()
}

fn ring_config() -> EngineConfig {
    EngineConfig {
        rings: vec![RingSpec::new("inner", 3.0, 0.3)],
        ..EngineConfig::rings()
    }
}

#[test]
fn four_entities_on_one_ring_at_time_zero() {
    let mut engine = Engine::new(&four_on_one_ring(), ring_config()).unwrap();
    let snap = engine.tick(0.0);
    let expected = [("a", 3.0, 0.0), ("b", 0.0, 3.0), ("c", -3.0, 0.0), ("d", 0.0, -3.0)];
    for (k, (id, x, z)) in expected.iter().enumerate() {
        let e = snap.get(id).unwrap();
        assert!((e.transform.position.x - x).abs() < 1e-5, "{id}");
        assert!((e.transform.position.z - z).abs() < 1e-5, "{id}");
        let bob = 0.3 * (k as f32 * FRAC_PI_2 + k as f32).sin();
        assert!((e.transform.position.y - bob).abs() < 1e-5, "{id}");
    }
}

#[test]
fn empty_catalog_gives_empty_snapshot() {
    let mut engine = Engine::new(&[], EngineConfig::rings()).unwrap();
    let snap = engine.tick(1.0);
    assert!(snap.is_empty());
    assert!(snap.instances.is_empty());
    assert!(snap.edges.is_empty());
    assert_eq!(snap.frame, 1);

    let mut galaxy = Engine::new(&[], EngineConfig::galaxy()).unwrap();
    assert!(galaxy.tick(1.0).is_empty());
}

#[test]
fn output_depends_on_time_not_tick_count() {
    let specs = reference_catalog();
    let mut direct = Engine::new(&specs, EngineConfig::rings()).unwrap();
    let mut stepped = Engine::new(&specs, EngineConfig::rings()).unwrap();
    for step in 0..300 {
        stepped.tick(step as f64 / 60.0);
    }
    let a = direct.tick(5.0);
    let a_entities: Vec<Transform> = a.entities.iter().map(|e| e.transform).collect();
    let a_particles = a.particles.positions().to_vec();
    let b = stepped.tick(5.0);
    for (x, y) in a_entities.iter().zip(b.entities.iter().map(|e| e.transform)) {
        assert_eq!(*x, y);
    }
    for (p, q) in a_particles.iter().zip(b.particles.positions()) {
        assert!((*p - *q).length() < 1e-5);
    }
    assert_eq!(b.frame, 301);
}

#[test]
fn time_never_runs_backwards() {
    let mut engine = Engine::new(&four_on_one_ring(), ring_config()).unwrap();
    let ahead = engine.tick(2.0).entities[0].transform;
    let snap = engine.tick(1.0);
    assert_eq!(snap.time, 2.0);
    assert_eq!(snap.entities[0].transform, ahead);
    let snap = engine.tick(f64::NAN);
    assert_eq!(snap.time, 2.0);
}

#[test]
fn hovered_entity_is_emphasised_in_snapshot() {
    let mut engine = Engine::new(&reference_catalog(), EngineConfig::rings()).unwrap();
    engine.enter("React");
    engine.enter("Python");
    let snap = engine.tick(0.5);
    let hot = snap.get("Python").unwrap();
    assert!(hot.emphasis.tooltip);
    assert!(hot.emphasis.scale > 1.0);
    let cold = snap.get("React").unwrap();
    assert!(!cold.emphasis.tooltip);
    assert_eq!(cold.emphasis.scale, 1.0);
    let tooltips = snap.entities.iter().filter(|e| e.emphasis.tooltip).count();
    assert_eq!(tooltips, 1);

    let idx = engine.catalog().index_of("Python").unwrap();
    let snap = engine.snapshot();
    assert_eq!(snap.hovered, Some(idx));
    assert_eq!(snap.instances[idx].highlight, 1.0);
}

#[test]
fn caption_follows_hover_sequence() {
    let mut engine = Engine::new(&reference_catalog(), EngineConfig::rings()).unwrap();
    let caption = Rc::new(RefCell::new(None::<String>));
    let sink = caption.clone();
    engine.subscribe(Box::new(move |label: Option<&str>| {
        *sink.borrow_mut() = label.map(str::to_string);
    }));
    engine.enter("React");
    engine.enter("Git");
    assert_eq!(caption.borrow().as_deref(), Some("Git"));
    assert_eq!(engine.hovered_label(), Some("Git"));
    assert_eq!(engine.hovered_id(), Some("Git"));
    engine.leave("Git");
    assert_eq!(*caption.borrow(), None);
    assert_eq!(engine.hover_state(), HoverState::Idle);
}

#[test]
fn teardown_detaches_listeners() {
    let mut engine = Engine::new(&reference_catalog(), EngineConfig::rings()).unwrap();
    let hits = Rc::new(RefCell::new(0u32));
    let sink = hits.clone();
    engine.subscribe(Box::new(move |_: Option<&str>| *sink.borrow_mut() += 1));
    engine.enter("React");
    engine.tick(0.1);
    engine.tick(0.2);
    let stats = engine.teardown();
    assert_eq!(stats.frames, 2);
    assert_eq!(stats.last_time, 0.2);
    assert_eq!(stats.listeners_detached, 1);
    assert_eq!(*hits.borrow(), 1);
    // the closure was dropped with the engine
    assert_eq!(Rc::strong_count(&hits), 1);
}

#[test]
fn instance_records_mirror_entity_frames() {
    let mut engine = Engine::new(&reference_catalog(), EngineConfig::rings()).unwrap();
    let snap = engine.tick(3.25);
    assert_eq!(snap.instances.len(), snap.entities.len());
    for (rec, ef) in snap.instances.iter().zip(&snap.entities) {
        assert_eq!(rec.position, ef.transform.position.to_array());
        assert_eq!(rec.rotation_y, ef.transform.rotation.y);
        assert_eq!(rec.scale, ef.emphasis.scale);
    }
    assert_eq!(snap.instance_floats().len(), snap.instances.len() * 10);
    assert_eq!(snap.instance_bytes().len(), snap.instances.len() * 40);
    assert_eq!(
        snap.instances[0].color,
        parse_color_hex("#61DAFB").unwrap()
    );
}

#[test]
fn anchor_rotates_with_time() {
    let mut engine = Engine::new(&four_on_one_ring(), ring_config()).unwrap();
    let snap = engine.tick(10.0);
    assert!((snap.anchor_rotation.y - 2.0).abs() < 1e-5);
}

#[test]
fn galaxy_layout_is_reproducible_from_seed() {
    let specs = reference_catalog();
    let config = EngineConfig::galaxy().with_seed(SeedPolicy::Fixed(1234));
    let mut a = Engine::new(&specs, config.clone()).unwrap();
    let mut b = Engine::new(&specs, config).unwrap();
    assert_eq!(a.edges(), b.edges());
    assert_eq!(a.seed(), 1234);
    let pa: Vec<Transform> = a.tick(2.0).entities.iter().map(|e| e.transform).collect();
    let pb: Vec<Transform> = b.tick(2.0).entities.iter().map(|e| e.transform).collect();
    assert_eq!(pa, pb);
    assert_eq!(a.snapshot().particles.positions(), b.snapshot().particles.positions());
}

#[test]
fn galaxy_edges_follow_their_endpoints() {
    let specs = reference_catalog();
    let config = EngineConfig {
        graph: ProximityParams {
            distance_threshold: 2.5,
            keep_probability: 1.0,
        },
        ..EngineConfig::galaxy()
    };
    let mut engine = Engine::new(&specs, config).unwrap();
    assert_eq!(engine.strategy(), LayoutStrategy::Sphere);
    assert!(engine.rings().is_empty());
    let snap = engine.tick(4.0);
    assert!(!snap.edges.is_empty());
    for edge in &snap.edges {
        assert_eq!(edge.start, snap.entities[edge.a].transform.position);
        assert_eq!(edge.end, snap.entities[edge.b].transform.position);
    }
}

#[test]
fn galaxy_ignores_ring_tags() {
    let specs = vec![EntitySpec::new("x", "X", "#FFFFFF", "anything", SizeClass::Small)];
    assert!(Engine::new(&specs, EngineConfig::galaxy()).is_ok());
    assert!(matches!(
        Engine::new(&specs, EngineConfig::rings()),
        Err(EngineError::UnknownLayer { .. })
    ));
}

#[test]
fn ring_legend_lists_configured_rings() {
    let engine = Engine::new(&reference_catalog(), EngineConfig::rings()).unwrap();
    let legend = engine.rings();
    assert_eq!(legend.len(), 3);
    assert_eq!(legend.iter().map(|r| r.members).sum::<usize>(), 30);
}

#[test]
fn galaxy_legend_groups_skills_by_category() {
    let engine = Engine::new(&galaxy_catalog(), EngineConfig::galaxy()).unwrap();
    let legend = engine.legend();
    let rows: Vec<(&str, usize)> = legend.iter().map(|r| (r.id.as_str(), r.members)).collect();
    assert_eq!(
        rows,
        vec![("Frontend", 11), ("Backend", 6), ("Languages", 4), ("Tools", 9)]
    );
    assert_eq!(legend[0].color_rgb, parse_color_hex("#06B6D4").unwrap());
    assert_eq!(legend[1].color_rgb, parse_color_hex("#EC4899").unwrap());
    for entity in engine.catalog().entities() {
        let row = legend.iter().find(|r| r.id == entity.layer).unwrap();
        assert_eq!(entity.color_rgb, row.color_rgb, "{}", entity.id);
    }
}

#[test]
fn ring_catalog_legend_follows_layer_tags() {
    let engine = Engine::new(&reference_catalog(), EngineConfig::rings()).unwrap();
    let counts: Vec<(String, usize)> = engine
        .legend()
        .into_iter()
        .map(|r| (r.id, r.members))
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

#[test]
fn edges_resolve_to_entity_ids() {
    let config = EngineConfig {
        graph: ProximityParams {
            distance_threshold: 2.5,
            keep_probability: 1.0,
        },
        ..EngineConfig::galaxy()
    };
    let mut engine = Engine::new(&galaxy_catalog(), config).unwrap();
    let pairs: Vec<(String, String)> = engine
        .edge_ids()
        .into_iter()
        .map(|(a, b)| (a.to_string(), b.to_string()))
        .collect();
    assert!(!pairs.is_empty());
    assert_eq!(pairs.len(), engine.edges().len());
    for (edge, (a, b)) in engine.edges().iter().zip(&pairs) {
        assert_eq!(engine.catalog().entities()[edge.a].id, *a);
        assert_eq!(engine.catalog().entities()[edge.b].id, *b);
        assert_ne!(a, b);
    }

    let snap = engine.tick(1.0);
    for (edge, (a, b)) in snap.edges.iter().zip(&pairs) {
        assert_eq!(snap.edge_ids(edge), Some((a.as_str(), b.as_str())));
    }
}
