use crate::core::Scene;
use crate::painter::CanvasPainter;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// A `requestAnimationFrame` loop that can be stopped.
///
/// The tick closure reschedules itself while the scene stays live. The
/// pending request id is tracked so [`FrameLoop::cancel`] can withdraw it.
pub struct FrameLoop {
    window: web::Window,
    tick: TickSlot,
    pending: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
    pub fn start(window: web::Window, scene: Rc<RefCell<Scene>>, mut painter: CanvasPainter) -> Self {
        let tick: TickSlot = Rc::new(RefCell::new(None));
        let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

        let tick_clone = tick.clone();
        let pending_tick = pending.clone();
        let window_tick = window.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            pending_tick.set(None);
            if !scene.borrow_mut().tick(&mut painter) {
                return;
            }
            schedule(&window_tick, &tick_clone, &pending_tick);
        }) as Box<dyn FnMut()>));

        schedule(&window, &tick, &pending);
        Self {
            window,
            tick,
            pending,
        }
    }

    /// Withdraw the pending frame and release the tick closure. Idempotent.
    pub fn cancel(&self) {
        if let Some(id) = self.pending.take() {
            _ = self.window.cancel_animation_frame(id);
        }
        // Dropping the closure also breaks its self-referencing Rc cycle.
        self.tick.borrow_mut().take();
    }
}

fn schedule(window: &web::Window, tick: &TickSlot, pending: &Cell<Option<i32>>) {
    if let Some(cb) = tick.borrow().as_ref() {
        match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => pending.set(Some(id)),
            Err(e) => log::error!("[frame] requestAnimationFrame failed: {:?}", e),
        }
    }
}
