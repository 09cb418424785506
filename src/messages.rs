use crate::core::constants::*;
use crate::core::{depth_layers, tint_color, tint_shadow, DepthLayer, MessageAnim, Props};
use crate::dom;
use rand::rngs::StdRng;
use rand::SeedableRng;
use web_sys as web;

fn spawn_message(
    document: &web::Document,
    scene: &web::HtmlElement,
    text: &str,
    layer: &DepthLayer,
) -> anyhow::Result<web::HtmlElement> {
    let el = dom::create_div(document, MESSAGE_CLASS)?;
    el.set_inner_text(text);
    dom::set_styles(
        &el,
        &[
            ("position", "absolute"),
            ("color", tint_color(0.0).as_str()),
            ("font-size", format!("{}px", layer.font_px).as_str()),
            ("font-weight", "bold"),
            ("text-shadow", tint_shadow(0.0).as_str()),
            ("white-space", "nowrap"),
            ("opacity", "0"),
            ("z-index", layer.z_index.to_string().as_str()),
            ("transform", format!("translateZ({}px)", layer.depth).as_str()),
            ("pointer-events", "none"),
            ("filter", format!("blur({}px)", layer.blur_px).as_str()),
            ("transform-style", "preserve-3d"),
            ("perspective", "1000px"),
        ],
    );
    dom::append(scene, &el)?;
    Ok(el)
}

fn apply(el: &web::HtmlElement, depth: f32, p: &Props) {
    dom::set_styles(
        el,
        &[
            (
                "transform",
                format!("translate3d({}px, {}px, {}px)", p.x, p.y, depth).as_str(),
            ),
            ("opacity", p.opacity.to_string().as_str()),
            ("color", tint_color(p.tint).as_str()),
            ("text-shadow", tint_shadow(p.tint).as_str()),
        ],
    );
}

/// Build the scene element and one looping element per message and depth layer.
///
/// Elements come back message-major: all layers of the first message, then
/// the next message.
pub fn create(
    container: &web::HtmlElement,
    messages: &[String],
) -> anyhow::Result<Vec<web::HtmlElement>> {
    let document = dom::window_document()?;
    let scene = dom::create_div(&document, SCENE_CLASS)?;
    dom::set_style(&scene, "transform-style", "preserve-3d");
    dom::append(container, &scene)?;

    let width = container.client_width() as f32;
    let height = container.client_height() as f32;
    let mut rng = StdRng::from_entropy();

    let mut elements = Vec::new();
    let mut anims = Vec::new();
    for text in messages {
        for layer in depth_layers() {
            let el = spawn_message(&document, &scene, text, &layer)?;
            let anim = MessageAnim::new(&mut rng, layer, width, height);
            apply(&el, layer.depth, &anim.current());
            elements.push(el.clone());
            anims.push((el, anim));
        }
    }

    let root: web::Element = container.clone().into();
    let sizing = container.clone();
    crate::frame::start_loop("messages", dom::Connected(root), move |dt| {
        let width = sizing.client_width() as f32;
        for (el, anim) in anims.iter_mut() {
            let props = anim.advance(dt, &mut rng, width);
            apply(el, anim.layer.depth, &props);
        }
    });
    log::info!(
        "[messages] spawned {} elements for {} messages",
        elements.len(),
        messages.len()
    );
    Ok(elements)
}
