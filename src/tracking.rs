use crate::core::constants::SCENE_CLASS;
use crate::core::{ViewConfig, ViewState};
use crate::dom;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Handle to a tracked container. Read-only view onto its state.
#[wasm_bindgen]
pub struct Tracker {
    state: Rc<RefCell<ViewState>>,
}

#[wasm_bindgen]
impl Tracker {
    #[wasm_bindgen(getter)]
    pub fn rotation_x(&self) -> f32 {
        self.state.borrow().current_rotation().x
    }

    #[wasm_bindgen(getter)]
    pub fn rotation_y(&self) -> f32 {
        self.state.borrow().current_rotation().y
    }

    #[wasm_bindgen(getter)]
    pub fn target_rotation_x(&self) -> f32 {
        self.state.borrow().target_rotation().x
    }

    #[wasm_bindgen(getter)]
    pub fn target_rotation_y(&self) -> f32 {
        self.state.borrow().target_rotation().y
    }

    #[wasm_bindgen(getter)]
    pub fn scale(&self) -> f32 {
        self.state.borrow().scale()
    }

    #[wasm_bindgen(getter)]
    pub fn dragging(&self) -> bool {
        self.state.borrow().is_dragging()
    }
}

#[inline]
fn client_pos(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

fn listen(
    target: &web::HtmlElement,
    kind: &str,
    passive: bool,
    mut handler: impl FnMut(&web::Event) + 'static,
) {
    let closure = Closure::wrap(Box::new(move |ev: web::Event| handler(&ev)) as Box<dyn FnMut(_)>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(passive);
    _ = target.add_event_listener_with_callback_and_add_event_listener_options(
        kind,
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}

fn wire_mouse(container: &web::HtmlElement, state: &Rc<RefCell<ViewState>>) {
    let s = state.clone();
    listen(container, "mousedown", true, move |ev| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        s.borrow_mut().press(client_pos(ev));
    });

    let s = state.clone();
    listen(container, "mousemove", true, move |ev| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        s.borrow_mut().pointer_move(client_pos(ev));
    });

    let s = state.clone();
    listen(container, "mouseup", true, move |_| s.borrow_mut().release());

    let s = state.clone();
    listen(container, "mouseleave", true, move |_| s.borrow_mut().leave());
}

fn wire_wheel(container: &web::HtmlElement, state: &Rc<RefCell<ViewState>>) {
    let s = state.clone();
    listen(container, "wheel", false, move |ev| {
        let Some(ev) = ev.dyn_ref::<web::WheelEvent>() else {
            return;
        };
        ev.prevent_default();
        s.borrow_mut().wheel(ev.delta_y() as f32);
    });
}

/// Wire input on `container` and start writing the scene transform each frame.
pub fn attach(container: &web::HtmlElement, config: ViewConfig) -> Tracker {
    let state = Rc::new(RefCell::new(ViewState::new(config)));
    wire_mouse(container, &state);
    wire_wheel(container, &state);

    let s = state.clone();
    let root: web::Element = container.clone().into();
    let scene_root = root.clone();
    crate::frame::start_loop("tracking", dom::Connected(root), move |_dt| {
        let transform = {
            let mut st = s.borrow_mut();
            st.step();
            st.transform_css()
        };
        // The scene may be created after attach, so look it up every frame.
        if let Some(scene) = dom::find_by_class(&scene_root, SCENE_CLASS) {
            dom::set_style(&scene, "transform", &transform);
        }
    });
    log::info!("[tracking] attached ({:?})", config);
    Tracker { state }
}
