use crate::core::constants::*;
use crate::core::{HeartAnim, HeartFlight, HeartStyle, Props};
use crate::dom;
use rand::rngs::StdRng;
use rand::SeedableRng;
use web_sys as web;

fn spawn_heart<R: rand::Rng>(
    document: &web::Document,
    container: &web::HtmlElement,
    rng: &mut R,
) -> anyhow::Result<web::HtmlElement> {
    let heart = dom::create_div(document, HEART_CLASS)?;
    heart.set_text_content(Some(HEART_GLYPH));
    let style = HeartStyle::random(rng);
    dom::set_styles(
        &heart,
        &[
            ("position", "absolute"),
            ("color", HEART_COLOR),
            ("font-size", format!("{}px", style.font_px).as_str()),
            ("opacity", "0"),
            ("left", format!("{}%", style.left_percent).as_str()),
            ("top", format!("{}px", HEART_START_Y).as_str()),
            ("z-index", "1"),
            ("pointer-events", "none"),
        ],
    );
    dom::append(container, &heart)?;
    Ok(heart)
}

fn apply(heart: &web::HtmlElement, p: &Props) {
    let transform = format!("translate({}px, {}px) rotate({}deg)", p.x, p.y, p.rotation);
    dom::set_style(heart, "transform", &transform);
    dom::set_style(heart, "opacity", &p.opacity.to_string());
}

/// Spawn `count` hearts inside `container` and start their shared loop.
pub fn create(
    container: &web::HtmlElement,
    count: usize,
) -> anyhow::Result<Vec<web::HtmlElement>> {
    let document = dom::window_document()?;
    let mut rng = StdRng::from_entropy();
    let viewport_h = dom::viewport_height();

    let mut hearts = Vec::with_capacity(count);
    let mut anims = Vec::with_capacity(count);
    for _ in 0..count {
        let heart = spawn_heart(&document, container, &mut rng)?;
        let anim = HeartAnim::new(HeartFlight::random(&mut rng, viewport_h));
        apply(&heart, &anim.current());
        hearts.push(heart.clone());
        anims.push((heart, anim));
    }

    let root: web::Element = container.clone().into();
    crate::frame::start_loop("hearts", dom::Connected(root), move |dt| {
        let viewport_h = dom::viewport_height();
        for (heart, anim) in anims.iter_mut() {
            let props = anim.advance(dt, &mut rng, viewport_h);
            apply(heart, &props);
        }
    });
    log::info!("[hearts] spawned {}", count);
    Ok(hearts)
}
