use crate::auth::{self, LoginPhase, PasskeyPhase, ResetPhase};
use crate::constants::{
    LOGIN_DELAY_MS, NOTICE_TTL_MS, REJECT_DELAY_MS, SEND_DELAY_MS, SETTLE_DELAY_MS,
    VERIFY_DELAY_MS,
};
use crate::dom;
use crate::notify::{Level, NotificationQueue};
use crate::overlay::Modal;
use gloo_timers::future::TimeoutFuture;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// Renders the notification queue into `#notices` and expires each entry
/// after its lifetime.
#[derive(Clone)]
pub struct Notifier {
    document: web::Document,
    queue: Rc<RefCell<NotificationQueue>>,
}

impl Notifier {
    pub fn new(document: web::Document) -> Self {
        Self {
            document,
            queue: Rc::new(RefCell::new(NotificationQueue::new())),
        }
    }

    pub fn show(&self, message: impl Into<String>, level: Level) {
        let id = self
            .queue
            .borrow_mut()
            .push(js_sys::Date::now() as u64, message, level);
        self.render();
        let this = self.clone();
        spawn_local(async move {
            TimeoutFuture::new(NOTICE_TTL_MS).await;
            {
                let mut queue = this.queue.borrow_mut();
                queue.remove(id);
                log::debug!("[notice] expired {id}, {} remaining", queue.len());
            }
            this.render();
        });
    }

    fn render(&self) {
        let Some(container) = self.document.get_element_by_id("notices") else {
            return;
        };
        container.set_inner_html("");
        let queue = self.queue.borrow();
        if queue.is_empty() {
            return;
        }
        for n in queue.iter() {
            if let Ok(el) = self.document.create_element("div") {
                el.set_class_name(&format!("notification {}", n.level.css_class()));
                el.set_text_content(Some(&n.message));
                _ = container.append_child(&el);
            }
        }
    }
}

/// Login: no failure path; any non-empty pair is "granted" after the fake
/// round-trip.
pub fn wire_login(document: &web::Document, notifier: Notifier) {
    let doc = document.clone();
    dom::add_submit_listener(document, "login-form", move || {
        let username = dom::input_value(&doc, "username");
        let password = dom::input_value(&doc, "password");
        if !auth::login_submittable(&username, &password) {
            return;
        }
        dom::set_text(&doc, "login-btn", LoginPhase::Submitting.label());
        let doc = doc.clone();
        let notifier = notifier.clone();
        spawn_local(async move {
            TimeoutFuture::new(LOGIN_DELAY_MS).await;
            log::info!("[login] mock sign-in for {username}");
            notifier.show(
                format!("Welcome to Kluger DART, {username}! System access granted."),
                Level::Success,
            );
            dom::set_text(&doc, "login-btn", LoginPhase::Idle.label());
        });
    });
}

pub fn wire_super_user(document: &web::Document, modal: Modal, notifier: Notifier) {
    dom::add_submit_listener(document, "super-form", move || {
        let passkey = modal.input_value();
        if passkey.is_empty() {
            return;
        }
        let phase = PasskeyPhase::Verifying;
        modal.set_button(phase.label(), phase.tone());
        let generation = modal.generation();
        let modal = modal.clone();
        let notifier = notifier.clone();
        spawn_local(async move {
            TimeoutFuture::new(VERIFY_DELAY_MS).await;
            if !modal.generation_is(generation) {
                return;
            }
            match auth::verify_passkey(&passkey) {
                PasskeyPhase::Granted => {
                    let phase = PasskeyPhase::Granted;
                    modal.set_button(phase.label(), phase.tone());
                    TimeoutFuture::new(SETTLE_DELAY_MS).await;
                    if !modal.generation_is(generation) {
                        return;
                    }
                    log::info!("[super-user] passkey accepted");
                    notifier.show(
                        "Super User Access Granted! Welcome to Kluger DART Advanced Systems.",
                        Level::Success,
                    );
                    modal.close();
                }
                _ => {
                    let phase = PasskeyPhase::Invalid;
                    modal.set_button(phase.label(), phase.tone());
                    TimeoutFuture::new(REJECT_DELAY_MS).await;
                    if !modal.generation_is(generation) {
                        return;
                    }
                    modal.clear_input();
                    let idle = PasskeyPhase::Idle;
                    modal.set_button(idle.label(), idle.tone());
                }
            }
        });
    });
}

pub fn wire_password_reset(document: &web::Document, modal: Modal, notifier: Notifier) {
    dom::add_submit_listener(document, "reset-form", move || {
        let target = modal.input_value();
        if target.is_empty() {
            return;
        }
        let phase = ResetPhase::Sending;
        modal.set_button(phase.label(), phase.tone());
        let generation = modal.generation();
        let modal = modal.clone();
        let notifier = notifier.clone();
        spawn_local(async move {
            TimeoutFuture::new(SEND_DELAY_MS).await;
            if !modal.generation_is(generation) {
                return;
            }
            match auth::verify_reset_target(&target) {
                ResetPhase::Sent => {
                    let phase = ResetPhase::Sent;
                    modal.set_button(phase.label(), phase.tone());
                    TimeoutFuture::new(SETTLE_DELAY_MS).await;
                    if !modal.generation_is(generation) {
                        return;
                    }
                    log::info!("[reset] mock reset link for {target}");
                    notifier.show(
                        format!(
                            "Password reset instructions have been sent to {target}. \
                             Please check your email."
                        ),
                        Level::Success,
                    );
                    modal.close();
                }
                _ => {
                    let phase = ResetPhase::NotFound;
                    modal.set_button(phase.label(), phase.tone());
                    TimeoutFuture::new(REJECT_DELAY_MS).await;
                    if !modal.generation_is(generation) {
                        return;
                    }
                    modal.clear_input();
                    let idle = ResetPhase::Idle;
                    modal.set_button(idle.label(), idle.tone());
                }
            }
        });
    });
}

/// Opener link, cancel button, backdrop click-to-close; clicks inside the
/// content box stay there.
pub fn wire_modal_controls(
    document: &web::Document,
    modal: &Modal,
    open_link_id: &str,
    cancel_id: &str,
    content_id: &str,
) {
    {
        let m = modal.clone();
        dom::add_click_listener(document, open_link_id, move || m.open());
    }
    {
        let m = modal.clone();
        dom::add_click_listener(document, cancel_id, move || m.close());
    }
    {
        let m = modal.clone();
        dom::add_click_listener(document, modal.backdrop_id(), move || m.close());
    }
    dom::stop_click_propagation(document, content_id);
}
