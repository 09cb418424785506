use super::constants::*;
use super::timeline::{css_rgb, mix_rgb, Ease, Prop, Props, Timeline};
use rand::Rng;

/// Static styling derived from a message's depth layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DepthLayer {
    pub depth: f32,
    pub font_px: f32,
    pub z_index: i32,
    pub blur_px: f32,
    pub peak_opacity: f32,
    pub start_y: f32,
    pub base_repeat_delay: f32,
}

impl DepthLayer {
    pub fn new(depth: f32) -> Self {
        let scale = 1.0 + depth / MESSAGE_DEPTH_SCALE_DIVISOR; // further back is smaller
        Self {
            depth,
            font_px: (MESSAGE_BASE_FONT_PX * scale).max(MESSAGE_MIN_FONT_PX),
            z_index: depth.floor() as i32,
            blur_px: depth.abs() / MESSAGE_BLUR_DIVISOR,
            peak_opacity: (1.0 - (depth / 1000.0).abs()).max(MESSAGE_MIN_OPACITY),
            start_y: MESSAGE_START_Y - (depth / 2.0).abs(),
            base_repeat_delay: depth.abs() / 1000.0,
        }
    }
}

pub fn depth_layers() -> impl Iterator<Item = DepthLayer> {
    DEPTH_LAYERS.iter().copied().map(DepthLayer::new)
}

/// Random parameters for one fall of a message.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MessageCycle {
    pub start_x: f32,
    pub end_x: f32,
    pub fall_sec: f32,
}

impl MessageCycle {
    pub fn random<R: Rng + ?Sized>(rng: &mut R, container_width: f32) -> Self {
        let start_x = rng.gen::<f32>() * container_width.max(0.0);
        Self::from_start(rng, start_x)
    }

    pub fn from_start<R: Rng + ?Sized>(rng: &mut R, start_x: f32) -> Self {
        Self {
            start_x,
            end_x: start_x + rng.gen::<f32>() * 2.0 * MESSAGE_DRIFT_PX - MESSAGE_DRIFT_PX,
            fall_sec: MESSAGE_FALL_MIN_SEC + rng.gen::<f32>() * MESSAGE_FALL_SPAN_SEC,
        }
    }

    /// Fade in, tint to pink, fall and fade out.
    pub fn timeline(&self, layer: &DepthLayer, container_height: f32) -> Timeline {
        Timeline::new(Props {
            opacity: 0.0,
            x: self.start_x,
            y: layer.start_y,
            tint: 0.0,
            rotation: 0.0,
        })
        .to(
            Prop::Opacity,
            layer.peak_opacity,
            MESSAGE_FADE_IN_SEC,
            Ease::Power2InOut,
            0.0,
        )
        .to(Prop::Tint, 1.0, MESSAGE_TINT_SEC, Ease::Power2InOut, -0.5)
        .to(
            Prop::Y,
            container_height + MESSAGE_FALL_OVERSHOOT,
            self.fall_sec,
            Ease::None,
            -2.0,
        )
        .to(Prop::X, self.end_x, self.fall_sec, Ease::None, -self.fall_sec)
        .to(Prop::Opacity, 0.0, MESSAGE_FADE_OUT_SEC, Ease::Power2In, -1.0)
    }
}

/// Looping animation of one message element.
///
/// Every repeat replays the first cycle unchanged. Between repeats the element
/// rests invisible at the top, parked at a random x.
#[derive(Clone, Debug)]
pub struct MessageAnim {
    pub layer: DepthLayer,
    pub repeat_delay: f32,
    timeline: Timeline,
    elapsed: f32,
    resting: Option<Props>,
}

impl MessageAnim {
    pub fn new<R: Rng + ?Sized>(
        rng: &mut R,
        layer: DepthLayer,
        container_width: f32,
        container_height: f32,
    ) -> Self {
        let cycle = MessageCycle::random(rng, container_width);
        let jitter = rng.gen::<f32>() * MESSAGE_REPEAT_DELAY_MAX_SEC;
        Self {
            repeat_delay: jitter + layer.base_repeat_delay,
            timeline: cycle.timeline(&layer, container_height),
            layer,
            elapsed: 0.0,
            resting: None,
        }
    }

    /// Values at the current position without advancing.
    pub fn current(&self) -> Props {
        self.resting
            .unwrap_or_else(|| self.timeline.sample(self.elapsed))
    }

    /// Length of one loop iteration including the rest between falls.
    #[cfg(test)]
    pub fn period(&self) -> f32 {
        self.timeline.duration() + self.repeat_delay
    }

    pub fn advance<R: Rng + ?Sized>(
        &mut self,
        dt_sec: f32,
        rng: &mut R,
        container_width: f32,
    ) -> Props {
        self.elapsed += dt_sec.max(0.0);
        loop {
            let active = self.timeline.duration();
            if self.elapsed < active {
                return self.timeline.sample(self.elapsed);
            }
            let reset = *self.resting.get_or_insert_with(|| Props {
                opacity: 0.0,
                x: rng.gen::<f32>() * container_width.max(0.0),
                y: self.layer.start_y,
                tint: 0.0,
                rotation: 0.0,
            });
            if self.elapsed < active + self.repeat_delay {
                return reset;
            }
            self.elapsed -= active + self.repeat_delay;
            self.resting = None;
        }
    }
}

/// Text color for a tint in [0, 1].
pub fn tint_color(tint: f32) -> String {
    css_rgb(mix_rgb(WHITE_RGB, PINK_RGB, tint))
}

/// Glow shadow for a tint in [0, 1]; the inner halo follows the text color.
pub fn tint_shadow(tint: f32) -> String {
    let inner = tint_color(tint);
    let pink = css_rgb(PINK_RGB);
    format!("0 0 20px {inner}, 0 0 30px {pink}, 0 0 40px {pink}")
}
