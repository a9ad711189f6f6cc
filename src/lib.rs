#![cfg(target_arch = "wasm32")]
use crate::input::PointerState;
use crate::particle::{FieldConfig, Particle};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

// pure logic is public; the DOM wiring stays internal
pub mod auth;
pub mod constants;
mod dom;
mod events;
mod flows;
mod frame;
pub mod input;
pub mod notify;
mod overlay;
pub mod particle;
mod render;

/// Resync the canvas backing store and reseed the field from scratch on
/// every viewport resize; no particle state survives a resize.
fn wire_field_resize(
    canvas: &web::HtmlCanvasElement,
    field: Rc<RefCell<FieldConfig>>,
    particles: Rc<RefCell<Vec<Particle>>>,
    rng: Rc<RefCell<StdRng>>,
) {
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
        let cfg = FieldConfig::for_width(dom::viewport_width()).scaled(dom::device_pixel_ratio());
        *field.borrow_mut() = cfg;
        *particles.borrow_mut() = particle::seed_field(
            canvas_resize.width() as f32,
            canvas_resize.height() as f32,
            &cfg,
            &mut *rng.borrow_mut(),
        );
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("dart-login starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {e:?}");
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id("bg-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #bg-canvas"))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!(format!("{e:?}")))?;
    let ctx = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!(format!("{e:?}")))?
        .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!(format!("{e:?}")))?;

    dom::sync_canvas_backing_size(&canvas);

    let rng = Rc::new(RefCell::new(StdRng::from_entropy()));
    let field = Rc::new(RefCell::new(
        FieldConfig::for_width(dom::viewport_width()).scaled(dom::device_pixel_ratio()),
    ));
    let particles = {
        let cfg = *field.borrow();
        Rc::new(RefCell::new(particle::seed_field(
            canvas.width() as f32,
            canvas.height() as f32,
            &cfg,
            &mut *rng.borrow_mut(),
        )))
    };
    wire_field_resize(&canvas, field.clone(), particles.clone(), rng);

    let pointer = Rc::new(RefCell::new(PointerState::default()));
    events::wire_pointermove(&canvas, &pointer);
    events::wire_touchmove(&canvas, &pointer);

    let notifier = flows::Notifier::new(document.clone());
    let super_modal = overlay::Modal::new(
        document.clone(),
        "super-modal",
        "passkey",
        "super-btn",
        auth::PasskeyPhase::Idle.label(),
    );
    let reset_modal = overlay::Modal::new(
        document.clone(),
        "reset-modal",
        "reset-input",
        "reset-btn",
        auth::ResetPhase::Idle.label(),
    );

    flows::wire_login(&document, notifier.clone());
    flows::wire_super_user(&document, super_modal.clone(), notifier.clone());
    flows::wire_password_reset(&document, reset_modal.clone(), notifier);
    flows::wire_modal_controls(
        &document,
        &super_modal,
        "super-link",
        "super-cancel",
        "super-content",
    );
    flows::wire_modal_controls(
        &document,
        &reset_modal,
        "forgot-link",
        "reset-cancel",
        "reset-content",
    );
    events::wire_global_keydown(super_modal, reset_modal);

    let particle_count = particles.borrow().len();
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        canvas,
        ctx,
        particles,
        field,
        pointer,
        clock: 0,
    }));
    wire_teardown(frame::start_loop(frame_ctx));

    log::info!("login screen ready ({particle_count} particles)");
    Ok(())
}

/// Release the redraw loop when the page goes away; the flow timers guard
/// themselves through the modal generations.
fn wire_teardown(animation: frame::FrameLoop) {
    let closure = Closure::wrap(Box::new(move || {
        animation.stop();
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
