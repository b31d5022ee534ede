use std::cell::RefCell;
use std::rc::Rc;
use std::thread;
use std::time::Duration;

use anyhow::Context;
use glam::Vec3;
use instant::Instant;
use orbit_core::{
    galaxy_catalog, reference_catalog, Engine, EngineConfig, FrameSnapshot, LayoutStrategy,
    SeedPolicy,
};

const FRAME_RATE: f64 = 60.0;
const DEFAULT_SECONDS: f64 = 5.0;
/// Seconds each entity stays hovered during the pointer sweep.
const HOVER_DWELL: f64 = 0.5;
/// Frames between logged summaries.
const REPORT_EVERY: u64 = 60;

#[derive(Debug)]
struct RunOptions {
    config: EngineConfig,
    seconds: f64,
}

fn options_from_env() -> anyhow::Result<RunOptions> {
    let mut config = match std::env::var("ORBIT_LAYOUT").ok().as_deref() {
        None | Some("") | Some("rings") => EngineConfig::rings(),
        Some("galaxy") | Some("sphere") => EngineConfig::galaxy(),
        Some(other) => anyhow::bail!("ORBIT_LAYOUT must be `rings` or `galaxy`, got `{other}`"),
    };
    match std::env::var("ORBIT_SEED").ok().as_deref() {
        None | Some("") => {}
        Some("random") => config.seed = SeedPolicy::Entropy,
        Some(raw) => {
            let seed = raw
                .parse::<u64>()
                .with_context(|| format!("ORBIT_SEED `{raw}` is not a u64 or `random`"))?;
            config.seed = SeedPolicy::Fixed(seed);
        }
    }
    let seconds = match std::env::var("ORBIT_SECONDS").ok().as_deref() {
        None | Some("") => DEFAULT_SECONDS,
        Some(raw) => raw
            .parse::<f64>()
            .ok()
            .filter(|s| s.is_finite() && *s >= 0.0)
            .with_context(|| format!("ORBIT_SECONDS `{raw}` is not a non-negative number"))?,
    };
    Ok(RunOptions { config, seconds })
}

/// Mean position and the furthest entity distance from the origin.
fn extent(snap: &FrameSnapshot) -> (Vec3, f32) {
    if snap.is_empty() {
        return (Vec3::ZERO, 0.0);
    }
    let mut sum = Vec3::ZERO;
    let mut reach = 0.0f32;
    for e in &snap.entities {
        sum += e.transform.position;
        reach = reach.max(e.transform.position.length());
    }
    (sum / snap.len() as f32, reach)
}

fn run() -> anyhow::Result<()> {
    let RunOptions { config, seconds } = options_from_env()?;
    let catalog = match config.layout {
        LayoutStrategy::Rings => reference_catalog(),
        LayoutStrategy::Sphere => galaxy_catalog(),
    };
    let mut engine = Engine::new(&catalog, config).context("building engine")?;

    // Stand-in for the page caption: remember the most recent label change.
    let caption: Rc<RefCell<Option<String>>> = Rc::new(RefCell::new(None));
    {
        let caption = Rc::clone(&caption);
        engine.subscribe(Box::new(move |label: Option<&str>| {
            log::info!("caption -> {}", label.unwrap_or("<hidden>"));
            *caption.borrow_mut() = label.map(str::to_string);
        }));
    }

    for ring in engine.rings() {
        log::info!(
            "ring `{}` r={:.2} w={:.2} members={}",
            ring.id,
            ring.radius,
            ring.angular_speed,
            ring.members
        );
    }

    for row in engine.legend() {
        let [r, g, b] = row.color_rgb;
        log::info!(
            "legend `{}` rgb=({:.2}, {:.2}, {:.2}) members={}",
            row.id,
            r,
            g,
            b,
            row.members
        );
    }

    let ids: Vec<String> = engine
        .catalog()
        .entities()
        .iter()
        .map(|e| e.id.clone())
        .collect();
    let frame_budget = Duration::from_secs_f64(1.0 / FRAME_RATE);
    let total_frames = (seconds * FRAME_RATE).round() as u64;
    let start = Instant::now();
    let mut swept: Option<usize> = None;

    for frame in 0..total_frames {
        let frame_start = Instant::now();
        let t = start.elapsed().as_secs_f64();

        // Scripted pointer sweep: glide from one badge to the next.
        if !ids.is_empty() {
            let target = (t / HOVER_DWELL) as usize % ids.len();
            if swept != Some(target) {
                if let Some(prev) = swept {
                    engine.leave(&ids[prev]);
                }
                engine.enter(&ids[target]);
                swept = Some(target);
            }
        }

        let snap = engine.tick(t);
        if frame % REPORT_EVERY == 0 {
            let (centroid, reach) = extent(snap);
            let hovered = snap
                .hovered
                .and_then(|i| snap.entities.get(i))
                .map(|e| (e.id.as_str(), e.emphasis.scale, e.emphasis.glow));
            log::info!(
                "t={:.2}s frame={} centroid=({:.2}, {:.2}, {:.2}) reach={:.2} edges={} hovered={:?}",
                snap.time,
                snap.frame,
                centroid.x,
                centroid.y,
                centroid.z,
                reach,
                snap.edges.len(),
                hovered
            );
        }

        if let Some(rest) = frame_budget.checked_sub(frame_start.elapsed()) {
            thread::sleep(rest);
        }
    }

    engine.reset_hover();
    let stats = engine.teardown();
    log::info!(
        "done: {} frames over {:.2}s, last caption {:?}",
        stats.frames,
        stats.last_time,
        caption.borrow()
    );
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(e) = run() {
        log::error!("orbit-native failed: {e:#}");
        std::process::exit(1);
    }
}
