use smallvec::SmallVec;

/// Easing curves available to timeline phases.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ease {
    None,
    Power2In,
    Power2InOut,
}

impl Ease {
    /// Map linear progress in [0, 1] to eased progress in [0, 1].
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::None => t,
            // power2 curves are cubic; power1 would be quadratic
            Ease::Power2In => t * t * t,
            Ease::Power2InOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u * u / 2.0
                }
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Prop {
    Opacity,
    X,
    Y,
    Tint,
    Rotation,
}

/// Animatable values of one element. `tint` is 0 for white and 1 for pink.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Props {
    pub opacity: f32,
    pub x: f32,
    pub y: f32,
    pub tint: f32,
    pub rotation: f32,
}

impl Props {
    #[inline]
    pub fn get(&self, prop: Prop) -> f32 {
        match prop {
            Prop::Opacity => self.opacity,
            Prop::X => self.x,
            Prop::Y => self.y,
            Prop::Tint => self.tint,
            Prop::Rotation => self.rotation,
        }
    }

    #[inline]
    pub fn set(&mut self, prop: Prop, value: f32) {
        match prop {
            Prop::Opacity => self.opacity = value,
            Prop::X => self.x = value,
            Prop::Y => self.y = value,
            Prop::Tint => self.tint = value,
            Prop::Rotation => self.rotation = value,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Phase {
    pub prop: Prop,
    pub start: f32,
    pub duration: f32,
    pub to: f32,
    pub ease: Ease,
}

impl Phase {
    #[inline]
    pub fn end(&self) -> f32 {
        self.start + self.duration
    }
}

/// Finite sequence of timed property phases.
///
/// Each phase starts relative to the end of the phase appended before it, so
/// a negative offset overlaps the two. Phases on the same property take their
/// from-value from whatever the earlier phases left behind.
#[derive(Clone, Debug)]
pub struct Timeline {
    initial: Props,
    phases: SmallVec<[Phase; 6]>,
    cursor: f32,
}

impl Timeline {
    pub fn new(initial: Props) -> Self {
        Self {
            initial,
            phases: SmallVec::new(),
            cursor: 0.0,
        }
    }

    /// Append a phase tweening `prop` to `to`. `offset` is seconds relative
    /// to the end of the previous phase; the start never goes below zero.
    pub fn to(mut self, prop: Prop, to: f32, duration: f32, ease: Ease, offset: f32) -> Self {
        let start = (self.cursor + offset).max(0.0);
        let duration = duration.max(0.0);
        self.phases.push(Phase {
            prop,
            start,
            duration,
            to,
            ease,
        });
        self.cursor = start + duration;
        self
    }

    /// Instant jump of `prop` to `value`, placed like [`Timeline::to`].
    #[cfg(test)]
    pub fn set(self, prop: Prop, value: f32, offset: f32) -> Self {
        self.to(prop, value, 0.0, Ease::None, offset)
    }

    #[cfg(test)]
    pub fn initial(&self) -> Props {
        self.initial
    }

    #[cfg(test)]
    pub fn phases(&self) -> &[Phase] {
        &self.phases
    }

    pub fn duration(&self) -> f32 {
        self.phases.iter().map(Phase::end).fold(0.0, f32::max)
    }

    /// Values at `t` seconds after the timeline started.
    pub fn sample(&self, t: f32) -> Props {
        let t = t.clamp(0.0, self.duration());
        let mut settled = self.initial;
        let mut out = self.initial;
        for p in &self.phases {
            let from = settled.get(p.prop);
            settled.set(p.prop, p.to);
            if t < p.start {
                continue;
            }
            let value = if p.duration <= 0.0 || t >= p.end() {
                p.to
            } else {
                let k = p.ease.apply((t - p.start) / p.duration);
                from + (p.to - from) * k
            };
            out.set(p.prop, value);
        }
        out
    }

    /// Values once every phase has completed.
    #[cfg(test)]
    pub fn final_props(&self) -> Props {
        self.sample(self.duration())
    }
}

/// Linear RGB mix between two colors.
pub fn mix_rgb(a: [u8; 3], b: [u8; 3], t: f32) -> [u8; 3] {
    let t = t.clamp(0.0, 1.0);
    let mut out = [0u8; 3];
    for i in 0..3 {
        let v = a[i] as f32 + (b[i] as f32 - a[i] as f32) * t;
        out[i] = v.round().clamp(0.0, 255.0) as u8;
    }
    out
}

#[inline]
pub fn css_rgb(rgb: [u8; 3]) -> String {
    format!("rgb({}, {}, {})", rgb[0], rgb[1], rgb[2])
}
