/// Page wiring, lighting and interaction constants for the web frontend.
///
/// Motion and layout tuning lives in `gallery_core::constants`; the values
/// here only matter to the DOM, WebAudio and WebGPU layers.
// Element ids expected in index.html
pub const CANVAS_ID: &str = "app-canvas";
pub const OVERLAY_ID: &str = "start-overlay";
pub const EXPLORE_BUTTON_ID: &str = "explore-button";
pub const MUTE_TOGGLE_ID: &str = "mute-toggle";
pub const LABELS_ID: &str = "labels";

// Overlay
pub const INTRO_TIMEOUT_MS: i32 = 10_000; // auto-dismiss if the user never clicks
pub const MUTED_GLYPH: &str = "\u{1F507}";
pub const UNMUTED_GLYPH: &str = "\u{1F50A}";

// Picking
pub const CLICK_SLOP_PX: f32 = 4.0; // CSS pixels a press may travel and still count as a click

// Background music
pub const BACKGROUND_MUSIC_URL: &str = "/sounds/background.mp3";
pub const MUSIC_VOLUME: f64 = 0.4;

// Hit sound (synthesized)
pub const HIT_FREQUENCY_HZ: f32 = 660.0;
pub const HIT_DROP_HZ: f32 = 220.0; // pitch falls by this much over the hit
pub const HIT_LEVEL: f32 = 0.3;
pub const HIT_DURATION_SEC: f64 = 0.25;

// Lighting
pub const CLEAR_COLOR_SRGB: [f32; 3] = [0.0196, 0.0196, 0.0627]; // #050510
pub const AMBIENT_INTENSITY: f32 = 0.4;
pub const SUN_POSITION: [f32; 3] = [10.0, 15.0, 10.0];
pub const SUN_INTENSITY: f32 = 1.5;
pub const POINT_POSITION: [f32; 3] = [-10.0, -10.0, -10.0];
pub const POINT_COLOR_SRGB: [f32; 3] = [0.314, 0.388, 1.0]; // #5063ff
pub const POINT_INTENSITY: f32 = 0.5;
