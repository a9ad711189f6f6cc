use crate::overlay::Modal;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Escape closes whichever modal is open; closing resets its button and
/// input through `Modal::close`.
pub fn wire_global_keydown(super_modal: Modal, reset_modal: Modal) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                if ev.key() == "Escape" {
                    if super_modal.is_open() {
                        super_modal.close();
                    }
                    if reset_modal.is_open() {
                        reset_modal.close();
                    }
                }
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
