/// Whether the owner of a repeating frame task is still around.
pub trait Liveness {
    fn is_alive(&self) -> bool;
}

/// Shared flag; clones observe the same cancellation.
#[cfg(test)]
#[derive(Clone, Debug, Default)]
pub struct CancelToken(std::rc::Rc<std::cell::Cell<bool>>);

#[cfg(test)]
impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

#[cfg(test)]
impl Liveness for CancelToken {
    fn is_alive(&self) -> bool {
        !self.is_cancelled()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    Stop,
}

/// A body run once per display frame until its liveness source reports dead.
///
/// Liveness is checked before the body on every tick. After the first dead
/// check the task is stopped for good and drops both the body and the
/// liveness source, releasing whatever they captured.
pub struct FrameTask<L, F> {
    parts: Option<(L, F)>,
    ticks: u64,
}

impl<L, F> FrameTask<L, F>
where
    L: Liveness,
    F: FnMut(f32),
{
    pub fn new(liveness: L, body: F) -> Self {
        Self {
            parts: Some((liveness, body)),
            ticks: 0,
        }
    }

    pub fn tick(&mut self, dt_sec: f32) -> TickOutcome {
        let Some((liveness, body)) = self.parts.as_mut() else {
            return TickOutcome::Stop;
        };
        if !liveness.is_alive() {
            self.parts = None;
            return TickOutcome::Stop;
        }
        body(dt_sec);
        self.ticks += 1;
        TickOutcome::Continue
    }

    #[inline]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    #[cfg(test)]
    pub fn is_stopped(&self) -> bool {
        self.parts.is_none()
    }
}
