use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

use crate::utils::scheduler::{BrowserScheduler, Scheduler};
use crate::widgets::matrix::{MatrixRain, GLYPH_FILL, TRAIL_FILL};

#[derive(Properties, PartialEq, Clone)]
pub struct MatrixCanvasProps {
    pub tick_ms: u32,
    pub font_size: f64,
}

fn viewport_size() -> (f64, f64) {
    web_sys::window()
        .map(|w| {
            let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            (width, height)
        })
        .unwrap_or((0.0, 0.0))
}

fn fit_canvas(canvas: &HtmlCanvasElement, rain: &mut MatrixRain) -> (f64, f64) {
    let (width, height) = viewport_size();
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
    rain.resize(width, height);
    (width, height)
}

#[allow(deprecated)]
fn draw(ctx: &CanvasRenderingContext2d, rain: &mut MatrixRain, rng: &mut StdRng, width: f64, height: f64) {
    ctx.set_fill_style(&JsValue::from_str(TRAIL_FILL));
    ctx.fill_rect(0.0, 0.0, width, height);
    ctx.set_fill_style(&JsValue::from_str(GLYPH_FILL));
    ctx.set_font(&format!("{}px monospace", rain.font_size()));
    for glyph in rain.frame(rng) {
        let _ = ctx.fill_text(&glyph.ch.to_string(), glyph.x, glyph.y);
    }
}

/// Full-viewport falling glyph background.
#[function_component]
pub fn MatrixCanvas(props: &MatrixCanvasProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        let props = props.clone();
        use_effect_with_deps(
            move |_| {
                let mut guards = None;
                let context = canvas_ref.cast::<HtmlCanvasElement>().and_then(|canvas| {
                    let ctx = canvas
                        .get_context("2d")
                        .ok()
                        .flatten()?
                        .dyn_into::<CanvasRenderingContext2d>()
                        .ok()?;
                    Some((canvas, ctx))
                });
                if let Some((canvas, ctx)) = context {
                    let mut rain = MatrixRain::new(0.0, 0.0, props.font_size);
                    let size = Rc::new(RefCell::new(fit_canvas(&canvas, &mut rain)));
                    let rain = Rc::new(RefCell::new(rain));

                    let resize = web_sys::window().map(|window| {
                        let canvas = canvas.clone();
                        let rain = rain.clone();
                        let size = size.clone();
                        EventListener::new(&window, "resize", move |_| {
                            *size.borrow_mut() = fit_canvas(&canvas, &mut rain.borrow_mut());
                        })
                    });

                    let mut rng = StdRng::from_entropy();
                    let ticker = BrowserScheduler.repeat(
                        props.tick_ms,
                        Box::new(move || {
                            let (width, height) = *size.borrow();
                            draw(&ctx, &mut rain.borrow_mut(), &mut rng, width, height);
                        }),
                    );
                    guards = Some((ticker, resize));
                } else {
                    log::warn!("Matrix canvas has no 2d context");
                }
                move || {
                    if let Some((ticker, resize)) = guards {
                        ticker.cancel();
                        drop(resize);
                    }
                }
            },
            (),
        );
    }

    html! {
        <canvas id="matrixCanvas" class="matrix-canvas" ref={canvas_ref} aria-hidden="true"></canvas>
    }
}
