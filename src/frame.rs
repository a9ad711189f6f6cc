use crate::input::PointerState;
use crate::particle::{FieldConfig, Particle};
use crate::render;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything a frame reads or writes, owned in one place and passed into
/// the tick by reference; nothing animation-related lives in ambient state.
pub struct FrameContext {
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
    pub particles: Rc<RefCell<Vec<Particle>>>,
    pub field: Rc<RefCell<FieldConfig>>,
    pub pointer: Rc<RefCell<PointerState>>,
    pub clock: u64,
}

impl FrameContext {
    pub fn frame(&mut self) {
        self.clock += 1;
        let width = self.canvas.width() as f64;
        let height = self.canvas.height() as f64;

        render::trail_fill(&self.ctx, width, height);

        // one pointer read per frame; the listeners overwrite in between
        let pointer = self.pointer.borrow().as_vec2();
        let cfg = *self.field.borrow();
        let mut particles = self.particles.borrow_mut();
        for p in particles.iter_mut() {
            p.update(self.clock as f64, &cfg, pointer);
        }

        render::draw_connections(&self.ctx, &particles, &cfg);
        render::draw_points(&self.ctx, &particles, &cfg);
    }
}

/// Stop handle for the animation loop. Once stopped, no further frame is
/// scheduled and the closure chain ends.
pub struct FrameLoop {
    running: Rc<Cell<bool>>,
}

impl FrameLoop {
    pub fn stop(&self) {
        self.running.set(false);
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> FrameLoop {
    let running = Rc::new(Cell::new(true));
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let running_tick = running.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !running_tick.get() {
            return;
        }
        frame_ctx.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
    FrameLoop { running }
}
