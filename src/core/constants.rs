// View tuning constants shared by the tracker and its tests.

// Drag/zoom response
pub const ROTATION_DAMPING: f32 = 0.1; // fraction of the target gap closed per frame
pub const DRAG_DEGREES_PER_PX: f32 = 0.5;
pub const WHEEL_ZOOM_PER_UNIT: f32 = 0.001; // additive scale change per wheel deltaY unit
pub const SCALE_MIN: f32 = 0.5;
pub const SCALE_MAX: f32 = 2.0;
pub const SCALE_INITIAL: f32 = 1.0;

// Scene projection
pub const PERSPECTIVE_PX: f32 = 2000.0;
pub const SCENE_CLASS: &str = "scene-container";

// Heart particles
pub const HEART_CLASS: &str = "heart-particle";
pub const HEART_GLYPH: &str = "\u{2764}";
pub const HEART_COLOR: &str = "#ff4d8b";
pub const HEART_FONT_PX_MIN: f32 = 10.0;
pub const HEART_FONT_PX_SPAN: f32 = 20.0;
pub const HEART_START_Y: f32 = -50.0;
pub const HEART_FALL_OVERSHOOT: f32 = 100.0; // px below the viewport before restarting
pub const HEART_PEAK_OPACITY: f32 = 0.7;
pub const HEART_DELAY_MAX_SEC: f32 = 10.0;
pub const HEART_DURATION_MIN_SEC: f32 = 5.0;
pub const HEART_DURATION_SPAN_SEC: f32 = 5.0;
pub const HEART_DRIFT_PX: f32 = 50.0; // +/- horizontal drift over one flight
pub const HEART_TILT_DEG: f32 = 30.0; // +/- starting rotation

// Floating messages
pub const MESSAGE_CLASS: &str = "floating-message";
pub const DEPTH_LAYERS: [f32; 5] = [-1000.0, -500.0, 0.0, 500.0, 1000.0];
pub const MESSAGE_BASE_FONT_PX: f32 = 24.0;
pub const MESSAGE_MIN_FONT_PX: f32 = 12.0;
pub const MESSAGE_DEPTH_SCALE_DIVISOR: f32 = 2000.0;
pub const MESSAGE_BLUR_DIVISOR: f32 = 4000.0;
pub const MESSAGE_MIN_OPACITY: f32 = 0.3;
pub const MESSAGE_START_Y: f32 = -50.0;
pub const MESSAGE_FALL_OVERSHOOT: f32 = 100.0;
pub const MESSAGE_DRIFT_PX: f32 = 50.0;
pub const MESSAGE_FADE_IN_SEC: f32 = 0.5;
pub const MESSAGE_TINT_SEC: f32 = 2.0;
pub const MESSAGE_FADE_OUT_SEC: f32 = 0.5;
pub const MESSAGE_FALL_MIN_SEC: f32 = 8.0;
pub const MESSAGE_FALL_SPAN_SEC: f32 = 5.0;
pub const MESSAGE_REPEAT_DELAY_MAX_SEC: f32 = 2.0;

// Palette (linear mix between these drives the message tint)
pub const WHITE_RGB: [u8; 3] = [0xff, 0xff, 0xff];
pub const PINK_RGB: [u8; 3] = [0xff, 0x69, 0xb4];
