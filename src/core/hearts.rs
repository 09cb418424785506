use super::constants::*;
use super::timeline::{Ease, Prop, Props, Timeline};
use rand::Rng;

/// Fixed per-heart styling chosen once at spawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeartStyle {
    pub font_px: f32,
    pub left_percent: f32,
}

impl HeartStyle {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            font_px: HEART_FONT_PX_MIN + rng.gen::<f32>() * HEART_FONT_PX_SPAN,
            left_percent: rng.gen::<f32>() * 100.0,
        }
    }
}

/// One fall from above the viewport to below it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeartFlight {
    pub delay_sec: f32,
    pub duration_sec: f32,
    pub start_rotation: f32,
    pub end_rotation: f32,
    pub drift_x: f32,
    pub fall_to_y: f32,
}

impl HeartFlight {
    pub fn random<R: Rng + ?Sized>(rng: &mut R, viewport_height: f32) -> Self {
        Self {
            duration_sec: HEART_DURATION_MIN_SEC + rng.gen::<f32>() * HEART_DURATION_SPAN_SEC,
            delay_sec: rng.gen::<f32>() * HEART_DELAY_MAX_SEC,
            start_rotation: rng.gen::<f32>() * 2.0 * HEART_TILT_DEG - HEART_TILT_DEG,
            drift_x: rng.gen::<f32>() * 2.0 * HEART_DRIFT_PX - HEART_DRIFT_PX,
            end_rotation: rng.gen::<f32>() * 360.0,
            fall_to_y: viewport_height + HEART_FALL_OVERSHOOT,
        }
    }

    pub fn timeline(&self) -> Timeline {
        let d = self.duration_sec;
        Timeline::new(Props {
            opacity: 0.0,
            x: 0.0,
            y: HEART_START_Y,
            tint: 0.0,
            rotation: self.start_rotation,
        })
        .to(Prop::Y, self.fall_to_y, d, Ease::None, self.delay_sec)
        .to(Prop::X, self.drift_x, d, Ease::None, -d)
        .to(Prop::Opacity, HEART_PEAK_OPACITY, d, Ease::None, -d)
        .to(Prop::Rotation, self.end_rotation, d, Ease::None, -d)
    }
}

/// Running animation of a single heart; restarts with a fresh flight when
/// the current one completes.
#[derive(Clone, Debug)]
pub struct HeartAnim {
    pub flight: HeartFlight,
    timeline: Timeline,
    elapsed: f32,
}

impl HeartAnim {
    pub fn new(flight: HeartFlight) -> Self {
        Self {
            timeline: flight.timeline(),
            flight,
            elapsed: 0.0,
        }
    }

    #[inline]
    pub fn current(&self) -> Props {
        self.timeline.sample(self.elapsed)
    }

    pub fn advance<R: Rng + ?Sized>(
        &mut self,
        dt_sec: f32,
        rng: &mut R,
        viewport_height: f32,
    ) -> Props {
        self.elapsed += dt_sec.max(0.0);
        while self.elapsed >= self.timeline.duration() {
            self.elapsed -= self.timeline.duration();
            self.flight = HeartFlight::random(rng, viewport_height);
            self.timeline = self.flight.timeline();
        }
        self.timeline.sample(self.elapsed)
    }
}
