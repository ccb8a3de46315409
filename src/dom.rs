use crate::core::Bounds;
use wasm_bindgen::JsCast;
use web_sys as web;

pub const BACKDROP_CANVAS_ID: &str = "backdrop-canvas";

const BACKDROP_STYLE: &str = "position:fixed;top:0;left:0;width:100%;height:100%;\
                              pointer-events:none;z-index:-1";

#[inline]
pub fn window_document() -> Option<(web::Window, web::Document)> {
    let window = web::window()?;
    let document = window.document()?;
    Some((window, document))
}

/// Current viewport size in CSS pixels.
pub fn viewport_bounds(window: &web::Window) -> Bounds {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    Bounds::new(width as f32, height as f32)
}

pub fn sync_canvas_size(canvas: &web::HtmlCanvasElement, bounds: Bounds) {
    canvas.set_width(bounds.width as u32);
    canvas.set_height(bounds.height as u32);
}

/// Find `#backdrop-canvas` or create it as the first child of `<body>`.
///
/// Returns the canvas and whether it was created here.
pub fn backdrop_canvas(document: &web::Document) -> anyhow::Result<(web::HtmlCanvasElement, bool)> {
    if let Some(el) = document.get_element_by_id(BACKDROP_CANVAS_ID) {
        let canvas = el
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| anyhow::anyhow!("#{} is not a canvas: {:?}", BACKDROP_CANVAS_ID, e))?;
        apply_backdrop_style(&canvas);
        return Ok((canvas, false));
    }
    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("no document body"))?;
    let canvas = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    canvas.set_id(BACKDROP_CANVAS_ID);
    _ = canvas.set_attribute("aria-hidden", "true");
    apply_backdrop_style(&canvas);
    body.prepend_with_node_1(&canvas)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok((canvas, true))
}

#[inline]
fn apply_backdrop_style(canvas: &web::HtmlCanvasElement) {
    canvas.style().set_css_text(BACKDROP_STYLE);
}

/// The canvas 2D context, or `None` if the host cannot provide one.
pub fn context_2d(canvas: &web::HtmlCanvasElement) -> Option<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<web::CanvasRenderingContext2d>().ok())
}
