use crate::input::{client_to_canvas_px, PointerState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

fn write_pointer(
    canvas: &web::HtmlCanvasElement,
    pointer: &Rc<RefCell<PointerState>>,
    client_x: f32,
    client_y: f32,
) {
    let rect = canvas.get_bounding_client_rect();
    let pos = client_to_canvas_px(
        client_x,
        client_y,
        rect.left() as f32,
        rect.top() as f32,
        rect.width() as f32,
        rect.height() as f32,
        canvas.width() as f32,
        canvas.height() as f32,
    );
    let mut ps = pointer.borrow_mut();
    ps.x = pos.x;
    ps.y = pos.y;
}

/// Window-level pointermove; covers the mouse and most touch input.
pub fn wire_pointermove(canvas: &web::HtmlCanvasElement, pointer: &Rc<RefCell<PointerState>>) {
    let canvas = canvas.clone();
    let pointer = pointer.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        write_pointer(&canvas, &pointer, ev.client_x() as f32, ev.client_y() as f32);
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Window-level touchmove; tracks the first touch and keeps the page from
/// scrolling under it.
pub fn wire_touchmove(canvas: &web::HtmlCanvasElement, pointer: &Rc<RefCell<PointerState>>) {
    let canvas = canvas.clone();
    let pointer = pointer.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        if let Some(touch) = ev.touches().get(0) {
            ev.prevent_default();
            write_pointer(
                &canvas,
                &pointer,
                touch.client_x() as f32,
                touch.client_y() as f32,
            );
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
