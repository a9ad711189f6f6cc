use crate::dom;
use std::cell::Cell;
use std::rc::Rc;
use web_sys as web;

#[inline]
pub fn show(document: &web::Document, element_id: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let cl = el.class_list();
        _ = cl.remove_1("hidden");
        // fallback for environments without the CSS class
        _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide(document: &web::Document, element_id: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let cl = el.class_list();
        _ = cl.add_1("hidden");
        // fallback
        _ = el.set_attribute("style", "display:none");
    }
}

#[inline]
fn element_hidden(el: &web::Element) -> bool {
    if el.class_list().contains("hidden") {
        return true;
    }
    el.get_attribute("style")
        .map(|s| s.contains("display:none"))
        .unwrap_or(false)
}

/// Handle over one modal: its backdrop, the single input it captures, and
/// the submit button whose label tracks the flow phase.
///
/// Closing bumps the generation counter; flow tasks capture the value at
/// submit time and drop their pending updates once it moves on.
#[derive(Clone)]
pub struct Modal {
    document: web::Document,
    backdrop_id: &'static str,
    input_id: &'static str,
    button_id: &'static str,
    idle_label: &'static str,
    generation: Rc<Cell<u64>>,
}

impl Modal {
    pub fn new(
        document: web::Document,
        backdrop_id: &'static str,
        input_id: &'static str,
        button_id: &'static str,
        idle_label: &'static str,
    ) -> Self {
        Self {
            document,
            backdrop_id,
            input_id,
            button_id,
            idle_label,
            generation: Rc::new(Cell::new(0)),
        }
    }

    pub fn backdrop_id(&self) -> &'static str {
        self.backdrop_id
    }

    pub fn open(&self) {
        show(&self.document, self.backdrop_id);
        dom::focus(&self.document, self.input_id);
    }

    /// Hide, clear the input, put the button back to its idle face, and
    /// invalidate any in-flight flow task.
    pub fn close(&self) {
        hide(&self.document, self.backdrop_id);
        self.clear_input();
        self.set_button(self.idle_label, "primary");
        self.generation.set(self.generation.get() + 1);
    }

    pub fn is_open(&self) -> bool {
        self.document
            .get_element_by_id(self.backdrop_id)
            .map(|el| !element_hidden(&el))
            .unwrap_or(false)
    }

    pub fn set_button(&self, label: &str, tone: &str) {
        dom::set_text(&self.document, self.button_id, label);
        dom::set_class(&self.document, self.button_id, &format!("modal-btn {tone}"));
    }

    pub fn input_value(&self) -> String {
        dom::input_value(&self.document, self.input_id)
    }

    pub fn clear_input(&self) {
        dom::set_input_value(&self.document, self.input_id, "");
    }

    pub fn generation(&self) -> u64 {
        self.generation.get()
    }

    pub fn generation_is(&self, generation: u64) -> bool {
        self.generation.get() == generation
    }
}
