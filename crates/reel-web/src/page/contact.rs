//! Contact page: blur validation and the simulated submission.

use std::{cell::RefCell, rc::Rc};

use gloo_events::{EventListener, EventListenerOptions};
use gloo_timers::callback::Timeout;
use log::{info, warn};
use reel_core::{
    chrome::PageChrome,
    contact::{
        ContactForm, FAILURE_ALERT, FieldKind, FormStep, SEND_DELAY_MS, SENDING_LABEL,
        validate_field,
    },
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlButtonElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement,
};

use super::chrome::{MountedChrome, mount_chrome};
use crate::platform::{clock::now_ms, dom};

const VALID_BORDER: &str = "#04e3b2";
const INVALID_BORDER: &str = "#ff4444";
const NEUTRAL_BORDER: &str = "rgba(255, 255, 255, 0.1)";
const SUCCESS_CLASS: &str = "show";

pub struct MountedContact {
    _chrome: MountedChrome,
    _listeners: Vec<EventListener>,
}

pub fn mount_contact(document: &Document) -> Result<Option<MountedContact>, JsValue> {
    let Some(form) = dom::by_id::<HtmlFormElement>(document, "contactForm") else {
        return Ok(None);
    };

    let chrome = mount_chrome(document, PageChrome::contact())?;
    let mut attached = validation_listeners(document)?;
    let button = form
        .query_selector(".submit-btn")?
        .and_then(|button| button.dyn_into::<HtmlButtonElement>().ok());
    let Some(button) = button else {
        warn!("contact: no submit button, submission disabled");
        return Ok(Some(MountedContact {
            _chrome: chrome,
            _listeners: attached,
        }));
    };

    let submission = Submission {
        state: Rc::new(RefCell::new(ContactForm::default())),
        document: document.clone(),
        form: form.clone(),
        button,
        success: dom::by_id(document, "formSuccess"),
    };
    attached.push(EventListener::new_with_options(
        &form,
        "submit",
        EventListenerOptions::enable_prevent_default(),
        move |event| {
            event.prevent_default();
            submission.start();
        },
    ));

    Ok(Some(MountedContact {
        _chrome: chrome,
        _listeners: attached,
    }))
}

#[derive(Clone)]
struct Submission {
    state: Rc<RefCell<ContactForm>>,
    document: Document,
    form: HtmlFormElement,
    button: HtmlButtonElement,
    success: Option<Element>,
}

impl Submission {
    fn start(&self) {
        if !self.state.borrow_mut().submit(now_ms()) {
            return;
        }
        let original_label = self.button.inner_html();
        self.button.set_disabled(true);
        self.button.set_inner_html(SENDING_LABEL);

        let submission = self.clone();
        Timeout::new(SEND_DELAY_MS as u32, move || {
            submission.finish(original_label);
        })
        .forget();
    }

    fn finish(&self, original_label: String) {
        let step = self.state.borrow_mut().tick(now_ms());
        match (step, &self.success) {
            (FormStep::Sent, Some(success)) => {
                dom::set_style(&self.form, "display", "none");
                dom::set_class(success, SUCCESS_CLASS, true);
                info!(
                    "contact: form submitted name={:?} email={:?} phone={:?} message_len={}",
                    self.field("name"),
                    self.field("email"),
                    self.field("phone"),
                    self.field("message").map_or(0, |message| message.len()),
                );
            }
            _ => self.fail(original_label),
        }
    }

    fn fail(&self, original_label: String) {
        self.state.borrow_mut().fail();
        if let Some(window) = web_sys::window()
            && let Err(err) = window.alert_with_message(FAILURE_ALERT)
        {
            warn!("contact: alert failed: {:?}", err);
        }
        self.button.set_disabled(false);
        self.button.set_inner_html(&original_label);
    }

    fn field(&self, id: &str) -> Option<String> {
        dom::by_id::<Element>(&self.document, id).and_then(|element| field_value(&element))
    }
}

fn field_value(element: &Element) -> Option<String> {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    element
        .dyn_ref::<HtmlTextAreaElement>()
        .map(HtmlTextAreaElement::value)
}

fn validation_listeners(document: &Document) -> Result<Vec<EventListener>, JsValue> {
    let mut attached = Vec::new();
    for field in dom::query_all_in(document, ".contact-form input, .contact-form textarea")? {
        let target = field.clone();
        attached.push(EventListener::new(&field, "blur", move |_| {
            let value = field_value(&target).unwrap_or_default();
            let required = target.has_attribute("required");
            let input_type = target.get_attribute("type").unwrap_or_default();
            let kind = FieldKind::from_input_type(&input_type);
            let border = match validate_field(&value, required, kind) {
                Ok(()) => VALID_BORDER,
                Err(_) => INVALID_BORDER,
            };
            dom::set_style(&target, "border-color", border);
        }));

        let target = field.clone();
        attached.push(EventListener::new(&field, "focus", move |_| {
            dom::set_style(&target, "border-color", NEUTRAL_BORDER);
        }));
    }
    Ok(attached)
}
