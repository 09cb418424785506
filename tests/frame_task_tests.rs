// Host-side tests for frame-task termination.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod frame_task {
        include!("../src/core/frame_task.rs");
    }
    pub mod view {
        include!("../src/core/view.rs");
    }
}

use crate::core::frame_task::*;
use crate::core::view::ViewState;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn runs_body_while_alive() {
    let token = CancelToken::new();
    let hits = Rc::new(RefCell::new(0u32));
    let h = hits.clone();
    let mut task = FrameTask::new(token.clone(), move |_dt| *h.borrow_mut() += 1);
    for _ in 0..5 {
        assert_eq!(task.tick(0.016), TickOutcome::Continue);
    }
    assert_eq!(*hits.borrow(), 5);
    assert_eq!(task.ticks(), 5);
    assert!(!task.is_stopped());
}

#[test]
fn detach_before_next_frame_suppresses_further_writes() {
    let token = CancelToken::new();
    let writes: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
    let state = Rc::new(RefCell::new(ViewState::default()));
    {
        let mut s = state.borrow_mut();
        s.press(Vec2::ZERO);
        s.pointer_move(Vec2::new(100.0, 0.0));
    }
    let w = writes.clone();
    let s = state.clone();
    let mut task = FrameTask::new(token.clone(), move |_dt| {
        let mut st = s.borrow_mut();
        st.step();
        w.borrow_mut().push(st.transform_css());
    });

    task.tick(0.016);
    task.tick(0.016);
    assert_eq!(writes.borrow().len(), 2);

    token.cancel();
    assert_eq!(task.tick(0.016), TickOutcome::Stop);
    assert_eq!(writes.borrow().len(), 2);
    assert!(task.is_stopped());
}

#[test]
fn stopped_task_never_resumes() {
    let alive = Rc::new(RefCell::new(true));
    struct Flag(Rc<RefCell<bool>>);
    impl Liveness for Flag {
        fn is_alive(&self) -> bool {
            *self.0.borrow()
        }
    }
    let mut ran = 0;
    let mut task = FrameTask::new(Flag(alive.clone()), |_dt| ran += 1);
    assert_eq!(task.tick(0.0), TickOutcome::Continue);
    *alive.borrow_mut() = false;
    assert_eq!(task.tick(0.0), TickOutcome::Stop);
    *alive.borrow_mut() = true;
    assert_eq!(task.tick(0.0), TickOutcome::Stop);
    assert_eq!(task.ticks(), 1);
    drop(task);
    assert_eq!(ran, 1);
}

#[test]
fn cancelled_before_first_frame_never_runs() {
    let token = CancelToken::new();
    token.cancel();
    let mut task = FrameTask::new(token, |_dt: f32| panic!("body must not run"));
    assert_eq!(task.tick(0.016), TickOutcome::Stop);
}

#[test]
fn tokens_are_independent_per_owner() {
    let a = CancelToken::new();
    let b = CancelToken::new();
    let a2 = a.clone();
    a.cancel();
    assert!(a2.is_cancelled());
    assert!(!b.is_cancelled());
    assert!(b.is_alive());
}

#[test]
fn stopping_releases_captured_state() {
    let token = CancelToken::new();
    let anims = Rc::new(RefCell::new(vec![0.0_f32; 8]));
    let a = anims.clone();
    let mut task = FrameTask::new(token.clone(), move |dt| {
        for v in a.borrow_mut().iter_mut() {
            *v += dt;
        }
    });
    task.tick(0.5);
    assert_eq!(Rc::strong_count(&anims), 2);

    token.cancel();
    assert_eq!(task.tick(0.5), TickOutcome::Stop);
    assert_eq!(Rc::strong_count(&anims), 1);
    assert_eq!(anims.borrow()[0], 0.5);
}
