use std::f32::consts::PI;

// Shared layout/motion tuning constants used by both web and native frontends.

// Default rings (radius in world units, angular speed in rad/s)
pub const INNER_RING: (&str, f32, f32) = ("inner", 3.0, 0.3);
pub const MIDDLE_RING: (&str, f32, f32) = ("middle", 4.5, 0.2);
pub const OUTER_RING: (&str, f32, f32) = ("outer", 6.0, 0.15);

// Ring motion
pub const BOB_AMPLITUDE: f32 = 0.3; // vertical float of an orbiting badge
pub const RING_SPIN_RATE: f32 = 1.2; // badge self-rotation, rad/s
pub const ANCHOR_SPIN_RATE: f32 = 0.2; // reactor core rotation, rad/s

// Galaxy (sphere shell) layout
pub const SPHERE_BASE_RADIUS: f32 = 3.0;
pub const SPHERE_RADIUS_JITTER: f32 = 1.5; // radius drawn from [base, base + jitter)
pub const SPHERE_DRIFT: f32 = 0.06; // vertical drift amplitude of a galaxy orb
pub const SPHERE_SPIN_RATE: f32 = 0.6; // orb self-rotation, rad/s

// Proximity graph
pub const EDGE_DISTANCE_THRESHOLD: f32 = 2.5;
pub const EDGE_KEEP_PROBABILITY: f32 = 0.3;
pub const EDGE_SOFT_LIMIT_POINTS: usize = 128; // O(N^2) pair scan warns above this

// Ambient particles, ring mode
pub const RING_PARTICLE_COUNT: usize = 300;
pub const RING_PARTICLE_MIN_RADIUS: f32 = 1.0;
pub const RING_PARTICLE_MAX_RADIUS: f32 = 9.0;
pub const RING_PARTICLE_ROTATION: f32 = 0.05; // field azimuth, rad/s
pub const RING_PARTICLE_DRIFT: f32 = 0.6;

// Ambient particles, galaxy mode
pub const GALAXY_PARTICLE_COUNT: usize = 200;
pub const GALAXY_PARTICLE_MIN_RADIUS: f32 = 8.0;
pub const GALAXY_PARTICLE_MAX_RADIUS: f32 = 12.0;
pub const GALAXY_PARTICLE_ROTATION: f32 = 0.02;
pub const GALAXY_PARTICLE_DRIFT: f32 = 0.0;

// Badge sizes per size class (base, hovered), in CSS pixels
pub const LARGE_BADGE_PX: (f32, f32) = (70.0, 90.0);
pub const MEDIUM_BADGE_PX: (f32, f32) = (55.0, 70.0);
pub const SMALL_BADGE_PX: (f32, f32) = (45.0, 60.0);

// Galaxy orb radius (idle, hovered), in world units
pub const ORB_RADIUS: (f32, f32) = (0.18, 0.25);

// Emphasis
pub const RING_GLOW: (f32, f32) = (0.5, 0.9); // (idle, hovered)
pub const ORB_GLOW: (f32, f32) = (0.5, 1.5); // emissive intensity
pub const IDLE_TILT: [f32; 2] = [5.0 * PI / 180.0, 5.0 * PI / 180.0]; // about x, y
pub const HOVER_TILT: [f32; 2] = [10.0 * PI / 180.0, 15.0 * PI / 180.0];

// Randomness
pub const DEFAULT_SEED: u64 = 42;
pub const SEED_MIX: u64 = 0x9E37_79B9_7F4A_7C15; // golden-ratio stream mixing
