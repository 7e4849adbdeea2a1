//! Layout constants for the procedural cake. Units are the base mesh's local units
//! (before the base scale is applied).

// ── Base ─────────────────────────────────────────────────────

pub const BASE_NODE: &str = "cake";
pub const BASE_RADIUS: f32 = 1.1;
pub const BASE_HEIGHT: f32 = 0.5;
pub const BASE_SEGMENTS: u32 = 48;
/// Uniform scale applied to the base; height is additionally multiplied by inches / 6
pub const BASE_SCALE: f32 = 0.35;
pub const BASE_ROUGHNESS: f32 = 0.9;

// ── Filling ──────────────────────────────────────────────────

pub const FILLING_GROUP: &str = "filling";
/// Top of the base (half height) plus a small lift
pub const FILLING_TOP_Y: f32 = BASE_HEIGHT / 2.0 + 0.01;
pub const DISC_HEIGHT: f32 = 0.03;
pub const DISC_SEGMENTS: u32 = 64;
pub const DISC_ROUGHNESS: f32 = 0.85;

pub const DRIP_COUNT: usize = 14;
/// Angular jitter bound (radians), applied as U(-j, j)
pub const DRIP_JITTER: f32 = 0.1;
pub const DRIP_MIN_LENGTH: f32 = 0.14;
pub const DRIP_LENGTH_RANGE: f32 = 0.26;
pub const DRIP_MIN_TOP_RADIUS: f32 = 0.04;
pub const DRIP_TOP_RADIUS_RANGE: f32 = 0.02;
/// bottom radius = top radius * taper
pub const DRIP_TAPER: f32 = 0.6;
/// Slightly inside the disc edge
pub const DRIP_RIM_RADIUS: f32 = 1.095;
pub const DRIP_SEGMENTS: u32 = 12;
pub const DRIP_ROUGHNESS: f32 = 0.9;

// ── Toppings ─────────────────────────────────────────────────

pub const TOPPINGS_GROUP: &str = "toppings";
pub const TOPPING_TOP_Y: f32 = BASE_HEIGHT / 2.0 + 0.015;

pub const SPRINKLE_COUNT: usize = 70;
pub const SPRINKLE_SCATTER_RADIUS: f32 = 1.0;
pub const SPRINKLE_SIZE: [f32; 3] = [0.02, 0.08, 0.02];
pub const SPRINKLE_LIFT: f32 = 0.02;
pub const SPRINKLE_ROUGHNESS: f32 = 0.85;

pub const NUT_COUNT: usize = 28;
pub const NUT_SCATTER_RADIUS: f32 = 0.9;
pub const NUT_MIN_RADIUS: f32 = 0.05;
pub const NUT_RADIUS_RANGE: f32 = 0.03;
pub const NUT_SEGMENTS: u32 = 10;
pub const NUT_LIFT: f32 = 0.01;
pub const NUT_ROUGHNESS: f32 = 0.9;

pub const CREAM_DOLLOPS: usize = 12;
pub const CREAM_RING_RADIUS: f32 = 0.95;
pub const CREAM_DOLLOP_RADIUS: f32 = 0.1;
pub const CREAM_SEGMENTS: u32 = 12;
pub const CREAM_LIFT: f32 = 0.05;
pub const CREAM_ROUGHNESS: f32 = 0.9;

// ── Icing (color transition element) ─────────────────────────

pub const ICING_NODE: &str = "icing";
pub const ICING_HEIGHT: f32 = 0.06;
pub const ICING_START_Y: f32 = 1.2;
pub const ICING_END_Y: f32 = FILLING_TOP_Y;
pub const ICING_START_SCALE: f32 = 0.6;
pub const ICING_END_SCALE: f32 = 1.0;

// ── Tiered preview ───────────────────────────────────────────

pub const PREVIEW_NODE: &str = "preview";
pub const PREVIEW_TIERS: usize = 3;
pub const TIER_HEIGHT: f32 = 0.22;
/// Triangle tiers are this much taller
pub const TRIANGLE_TIER_STRETCH: f32 = 1.2;
/// Cone height relative to the tier height
pub const TRIANGLE_CONE_STRETCH: f32 = 1.1;
pub const TIER_RADIUS: f32 = 0.9;
/// Per-tier shrink of the top radius. Triangles shrink from the first tier on.
pub const TIER_SHRINK: f32 = 0.2;
pub const TRIANGLE_TIER_SHRINK: f32 = 0.25;
/// Bottom radius = top radius + flare
pub const TIER_FLARE: f32 = 0.03;
pub const TRIANGLE_TIER_FLARE: f32 = 0.05;
pub const TIER_BOTTOM_Y: f32 = -0.33;
pub const TIER_GAP: f32 = 0.02;
pub const TIER_SEGMENTS: u32 = 48;
pub const HEART_TIER_SEGMENTS: (u32, u32) = (24, 16);
pub const TIER_ROUGHNESS: f32 = 0.8;
pub const TIER_METALNESS: f32 = 0.05;

pub const PEARL_BASE_COUNT: usize = 16;
pub const PEARL_COUNT_STEP: usize = 4;
pub const PEARL_RING_SCALE: f32 = 1.02;
pub const SQUARE_PEARL_RING_SCALE: f32 = 1.05;
pub const PEARL_RADIUS: f32 = 0.02;
pub const PEARL_SEGMENTS: (u32, u32) = (12, 10);
/// Pearl ring height as a fraction of the tier height above its center
pub const PEARL_LIFT: f32 = 0.35;
pub const PEARL_ROUGHNESS: f32 = 0.2;
pub const PEARL_METALNESS: f32 = 0.6;

pub const RIBBON_NODE: &str = "ribbon";
pub const RIBBON_RADIUS: f32 = 0.45;
pub const RIBBON_TUBE: f32 = 0.03;
pub const RIBBON_SEGMENTS: (u32, u32) = (12, 64);
/// Ribbon sits on the middle tier, lifted by this fraction of the tier height
pub const RIBBON_LIFT: f32 = 0.1;
pub const RIBBON_COLOR: [u8; 3] = [0xFF, 0xD5, 0x4F];
pub const RIBBON_ROUGHNESS: f32 = 0.3;
pub const RIBBON_METALNESS: f32 = 0.4;

/// Idle spin per frame
pub const PREVIEW_SPIN: f32 = 0.015;
/// Seconds per frame for the wobble clock
pub const PREVIEW_FRAME_SECONDS: f32 = 1.0 / 60.0;
pub const WOBBLE_YAW: f32 = 0.05;
pub const WOBBLE_SCALE: f32 = 0.01;
