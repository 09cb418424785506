use super::constants::*;
use glam::{Vec2, Vec2Swizzles};

/// Tuning for a tracked view. `Default` yields the stock constants.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewConfig {
    pub damping: f32,
    pub drag_sensitivity: f32,
    pub wheel_zoom_rate: f32,
    pub scale_min: f32,
    pub scale_max: f32,
    pub perspective_px: f32,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            damping: ROTATION_DAMPING,
            drag_sensitivity: DRAG_DEGREES_PER_PX,
            wheel_zoom_rate: WHEEL_ZOOM_PER_UNIT,
            scale_min: SCALE_MIN,
            scale_max: SCALE_MAX,
            perspective_px: PERSPECTIVE_PX,
        }
    }
}

/// Rotation/zoom state driven by pointer input and smoothed once per frame.
///
/// Rotations are in degrees with `x` = pitch and `y` = yaw. Horizontal pointer
/// motion drives yaw and vertical motion drives pitch.
#[derive(Clone, Debug)]
pub struct ViewState {
    pub config: ViewConfig,
    target_rotation: Vec2,
    current_rotation: Vec2,
    scale: f32,
    dragging: bool,
    drag_anchor: Vec2,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(ViewConfig::default())
    }
}

impl ViewState {
    pub fn new(config: ViewConfig) -> Self {
        Self {
            config,
            target_rotation: Vec2::ZERO,
            current_rotation: Vec2::ZERO,
            scale: clamp_scale(SCALE_INITIAL, config.scale_min, config.scale_max),
            dragging: false,
            drag_anchor: Vec2::ZERO,
        }
    }

    #[inline]
    pub fn target_rotation(&self) -> Vec2 {
        self.target_rotation
    }

    #[inline]
    pub fn current_rotation(&self) -> Vec2 {
        self.current_rotation
    }

    #[inline]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Begin a drag. The anchor is offset by the current target so the next
    /// move continues from the present orientation.
    pub fn press(&mut self, pointer: Vec2) {
        self.dragging = true;
        self.drag_anchor = pointer - self.target_rotation.yx();
    }

    /// Returns true when the target rotation changed.
    pub fn pointer_move(&mut self, pointer: Vec2) -> bool {
        if !self.dragging {
            return false;
        }
        let delta = (pointer - self.drag_anchor) * self.config.drag_sensitivity;
        self.target_rotation = delta.yx();
        true
    }

    pub fn release(&mut self) {
        self.dragging = false;
    }

    pub fn leave(&mut self) {
        self.release();
    }

    /// Additive zoom, saturating at the configured bounds.
    pub fn wheel(&mut self, delta_y: f32) {
        let next = self.scale - delta_y * self.config.wheel_zoom_rate;
        self.scale = clamp_scale(next, self.config.scale_min, self.config.scale_max);
    }

    /// Advance the smoothing by one frame.
    pub fn step(&mut self) {
        let k = self.config.damping;
        self.current_rotation.x = damp_toward(self.current_rotation.x, self.target_rotation.x, k);
        self.current_rotation.y = damp_toward(self.current_rotation.y, self.target_rotation.y, k);
    }

    /// CSS transform for the scene element at the current frame.
    pub fn transform_css(&self) -> String {
        // Adding 0.0 turns -0.0 into 0.0 so a resting view prints `0`, not `-0`.
        format!(
            "perspective({}px) rotateX({}deg) rotateY({}deg) scale({})",
            self.config.perspective_px,
            -self.current_rotation.x + 0.0,
            self.current_rotation.y + 0.0,
            self.scale
        )
    }
}

#[inline]
pub fn clamp_scale(scale: f32, min: f32, max: f32) -> f32 {
    scale.max(min).min(max)
}

#[inline]
pub fn damp_toward(current: f32, target: f32, factor: f32) -> f32 {
    current + (target - current) * factor
}
