use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::window;

use crate::error::FxError;

/// Call `step` once per animation frame until it returns `false`.
pub fn run_frames<F>(mut step: F) -> Result<(), FxError>
where
    F: FnMut() -> bool + 'static,
{
    // `f` holds the frame closure so it can re-schedule itself. Taking it
    // out of the cell on the last frame breaks the Rc cycle.
    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !step() {
            f.borrow_mut().take();
            return;
        }
        let scheduled = match (window(), f.borrow().as_ref()) {
            (Some(win), Some(cb)) => win
                .request_animation_frame(cb.as_ref().unchecked_ref())
                .is_ok(),
            _ => false,
        };
        if !scheduled {
            log::warn!("animation frame could not be scheduled");
            f.borrow_mut().take();
        }
    }) as Box<dyn FnMut()>));

    let win = window().ok_or(FxError::MissingElement("window"))?;
    let first = win.request_animation_frame(
        g.borrow()
            .as_ref()
            .ok_or(FxError::Js("frame closure missing".into()))?
            .as_ref()
            .unchecked_ref(),
    );
    if let Err(err) = first {
        g.borrow_mut().take();
        return Err(err.into());
    }
    Ok(())
}
