//! Animated particle field backdrop for a portfolio page.
//!
//! `core` holds the simulation and builds on any target. The browser
//! binding (canvas painter, DOM listeners, frame loop) is `wasm32` only.

pub mod core;

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod mount;
#[cfg(target_arch = "wasm32")]
mod painter;

#[cfg(target_arch = "wasm32")]
pub use web_entry::*;

#[cfg(target_arch = "wasm32")]
mod web_entry {
    use crate::core::FieldConfig;
    use crate::mount::Backdrop;
    use std::cell::RefCell;
    use wasm_bindgen::prelude::*;

    // Handle to the page's backdrop so JS can unmount it; the field state
    // itself lives inside the Backdrop.
    thread_local! {
        static MOUNTED: RefCell<Option<Backdrop>> = const { RefCell::new(None) };
    }

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();
        log::info!("portfolio-backdrop starting");
        mount();
        Ok(())
    }

    /// Mount the backdrop if it is not mounted yet. Returns whether a
    /// backdrop is running afterwards.
    #[wasm_bindgen]
    pub fn mount() -> bool {
        MOUNTED.with(|slot| {
            let mut slot = slot.borrow_mut();
            if slot.is_some() {
                return true;
            }
            match Backdrop::mount(&FieldConfig::default()) {
                Ok(backdrop) => {
                    *slot = backdrop;
                    slot.is_some()
                }
                Err(e) => {
                    log::error!("[mount] failed: {:?}", e);
                    false
                }
            }
        })
    }

    #[wasm_bindgen]
    pub fn unmount() {
        // Take the handle out first so Drop runs outside the borrow.
        let backdrop = MOUNTED.with(|slot| slot.borrow_mut().take());
        if let Some(mut b) = backdrop {
            b.unmount();
        }
    }

    #[wasm_bindgen]
    pub fn is_mounted() -> bool {
        MOUNTED.with(|slot| slot.borrow().as_ref().is_some_and(Backdrop::is_mounted))
    }

    #[wasm_bindgen]
    pub fn frame_count() -> f64 {
        MOUNTED.with(|slot| slot.borrow().as_ref().map_or(0.0, |b| b.frames() as f64))
    }
}
