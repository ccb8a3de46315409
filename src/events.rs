use crate::core::{InputEvent, Scene};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A DOM listener that stays removable: it owns its closure instead of
/// leaking it.
pub struct Listener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn attach(
        target: web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("add {} listener: {:?}", kind, e))?;
        Ok(Self {
            target,
            kind,
            closure,
        })
    }

    pub fn detach(self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}

pub struct ListenerWiring {
    pub window: web::Window,
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub scene: Rc<RefCell<Scene>>,
}

type WireFn = fn(&ListenerWiring) -> anyhow::Result<Listener>;

/// Pointer move / leave and viewport resize, all feeding the scene.
///
/// All or nothing: if one listener fails to attach, the ones already
/// attached are removed again.
pub fn wire_scene_listeners(w: &ListenerWiring) -> anyhow::Result<Vec<Listener>> {
    let wires: [WireFn; 3] = [wire_pointermove, wire_pointerleave, wire_resize];
    let mut listeners = Vec::with_capacity(wires.len());
    for wire in wires {
        match wire(w) {
            Ok(l) => listeners.push(l),
            Err(e) => {
                listeners.into_iter().for_each(Listener::detach);
                return Err(e);
            }
        }
    }
    Ok(listeners)
}

fn wire_pointermove(w: &ListenerWiring) -> anyhow::Result<Listener> {
    let scene = w.scene.clone();
    Listener::attach(w.window.clone().into(), "mousemove", move |ev: web::Event| {
        if let Some(ev) = ev.dyn_ref::<web::MouseEvent>() {
            scene.borrow_mut().handle(InputEvent::PointerMove {
                x: ev.client_x() as f32,
                y: ev.client_y() as f32,
            });
        }
    })
}

fn wire_pointerleave(w: &ListenerWiring) -> anyhow::Result<Listener> {
    let scene = w.scene.clone();
    Listener::attach(w.document.clone().into(), "mouseleave", move |_ev: web::Event| {
        scene.borrow_mut().handle(InputEvent::PointerLeave);
    })
}

fn wire_resize(w: &ListenerWiring) -> anyhow::Result<Listener> {
    let scene = w.scene.clone();
    let window = w.window.clone();
    let canvas = w.canvas.clone();
    Listener::attach(w.window.clone().into(), "resize", move |_ev: web::Event| {
        let bounds = dom::viewport_bounds(&window);
        if scene.borrow_mut().handle(InputEvent::Resize {
            width: bounds.width,
            height: bounds.height,
        }) {
            dom::sync_canvas_size(&canvas, bounds);
        }
    })
}
