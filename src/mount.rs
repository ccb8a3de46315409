use crate::core::{FieldConfig, ParticleField, Scene};
use crate::dom;
use crate::events::{self, Listener, ListenerWiring};
use crate::frame::FrameLoop;
use crate::painter::CanvasPainter;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// A mounted particle field backdrop.
///
/// Owns everything it registered with the page; [`Backdrop::unmount`]
/// (or dropping the handle) releases it all in one step.
pub struct Backdrop {
    scene: Rc<RefCell<Scene>>,
    frame_loop: FrameLoop,
    listeners: Vec<Listener>,
    canvas: web::HtmlCanvasElement,
    owns_canvas: bool,
    mounted: bool,
}

impl Backdrop {
    /// Mount behind the page content.
    ///
    /// Returns `Ok(None)` without allocating or scheduling anything when
    /// the canvas has no 2D context.
    pub fn mount(config: &FieldConfig) -> anyhow::Result<Option<Self>> {
        let (window, document) =
            dom::window_document().ok_or_else(|| anyhow::anyhow!("no window/document"))?;
        let (canvas, owns_canvas) = dom::backdrop_canvas(&document)?;

        let Some(ctx) = dom::context_2d(&canvas) else {
            log::warn!("[mount] no 2d context; backdrop disabled");
            if owns_canvas {
                canvas.remove();
            }
            return Ok(None);
        };

        let started = start_scene(config, window, document, &canvas, ctx);
        let (scene, listeners, frame_loop) = match started {
            Ok(parts) => parts,
            Err(e) => {
                if owns_canvas {
                    canvas.remove();
                }
                return Err(e);
            }
        };

        Ok(Some(Self {
            scene,
            frame_loop,
            listeners,
            canvas,
            owns_canvas,
            mounted: true,
        }))
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn frames(&self) -> u64 {
        self.scene.borrow().frames()
    }

    /// Cancel the pending frame, detach every listener and stop the scene.
    /// Idempotent.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        self.frame_loop.cancel();
        for l in self.listeners.drain(..) {
            l.detach();
        }
        self.scene.borrow_mut().teardown();
        if self.owns_canvas {
            self.canvas.remove();
        }
        log::info!("[mount] unmounted");
    }
}

impl Drop for Backdrop {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// Build the field, attach listeners and start the loop. Nothing is left
/// registered with the page when this fails.
fn start_scene(
    config: &FieldConfig,
    window: web::Window,
    document: web::Document,
    canvas: &web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
) -> anyhow::Result<(Rc<RefCell<Scene>>, Vec<Listener>, FrameLoop)> {
    let bounds = dom::viewport_bounds(&window);
    dom::sync_canvas_size(canvas, bounds);

    let seed = js_sys::Date::now() as u64;
    let field = ParticleField::new(config, bounds, seed)?;
    log::info!(
        "[mount] {}x{} particles={} ornaments={}",
        bounds.width,
        bounds.height,
        field.particles().len(),
        field.ornaments().len()
    );
    let scene = Rc::new(RefCell::new(Scene::new(field)));

    let listeners = events::wire_scene_listeners(&ListenerWiring {
        window: window.clone(),
        document,
        canvas: canvas.clone(),
        scene: scene.clone(),
    })?;
    let frame_loop = FrameLoop::start(window, scene.clone(), CanvasPainter::new(ctx));
    Ok((scene, listeners, frame_loop))
}
