use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, FormData, HtmlFormElement, ScrollLogicalPosition};
use yew::prelude::*;

use crate::analytics::Gtag;
use crate::forms::fields::FieldValues;
use crate::forms::kind::FormKind;
use crate::forms::outcome::Notice;
use crate::forms::pipeline::SubmissionPipeline;
use crate::forms::surface::{FormSurface, LockState};
use crate::forms::transport::{Endpoint, GlooTransport};
use crate::i18n::use_language;
use crate::viewport;

/// A rendered `<form>` seen through the pipeline's capabilities.
#[derive(Clone)]
struct DomSurface {
    kind: FormKind,
    form_ref: NodeRef,
    message_ref: NodeRef,
    lock: UseStateHandle<LockState>,
    /// Mirrors `lock` without waiting for a render.
    in_flight: Rc<RefCell<bool>>,
    notice: UseStateHandle<Option<Notice>>,
    dismiss: Rc<RefCell<Option<Timeout>>>,
}

impl DomSurface {
    fn form(&self) -> Option<HtmlFormElement> {
        self.form_ref.cast::<HtmlFormElement>()
    }

    /// The contact form posts wherever its markup says; the expert form has
    /// a fixed function endpoint.
    fn endpoint(&self) -> Endpoint {
        let fallback = self.kind.default_endpoint();
        match (self.kind, self.form()) {
            (FormKind::Contact, Some(form)) => Endpoint::from_markup(
                fallback,
                form.get_attribute("action").as_deref(),
                &form.action(),
                form.get_attribute("method").as_deref(),
            ),
            _ => fallback,
        }
    }
}

impl FormSurface for DomSurface {
    fn read_field_values(&self) -> FieldValues {
        self.form()
            .and_then(|form| FormData::new_with_form(&form).ok())
            .map(|data| FieldValues::from_form_data(&data, self.kind.field_names()))
            .unwrap_or_default()
    }

    fn set_lock_state(&self, state: LockState) {
        *self.in_flight.borrow_mut() = state.is_engaged();
        self.lock.set(state);
    }

    fn show_outcome(&self, notice: &Notice) {
        self.notice.set(Some(notice.clone()));

        // The message region is only laid out after the next render.
        let message_ref = self.message_ref.clone();
        Timeout::new(0, move || {
            if let Some(message) = message_ref.cast::<Element>() {
                viewport::smooth_scroll_to(&message, ScrollLogicalPosition::Nearest);
            }
        })
        .forget();

        // A newer message cancels the pending hide of an older one.
        let hide = notice.dismiss_after_ms.map(|delay| {
            let notice = self.notice.clone();
            Timeout::new(delay, move || notice.set(None))
        });
        *self.dismiss.borrow_mut() = hide;
    }

    fn reset_fields(&self) {
        if let Some(form) = self.form() {
            form.reset();
        }
    }
}

pub struct SubmissionHandle {
    pub form_ref: NodeRef,
    pub message_ref: NodeRef,
    pub onsubmit: Callback<SubmitEvent>,
    /// `Some(label)` while a request is in flight.
    pub sending: Option<&'static str>,
    pub notice: Option<Notice>,
}

/// Wires a form of `kind` to the submission pipeline.
#[hook]
pub fn use_submission(kind: FormKind) -> SubmissionHandle {
    let language = use_language();
    let form_ref = use_node_ref();
    let message_ref = use_node_ref();
    let lock = use_state(|| LockState::Released);
    let notice = use_state(|| None::<Notice>);
    let in_flight = use_mut_ref(|| false);
    let dismiss = use_mut_ref(|| None::<Timeout>);

    let surface = DomSurface {
        kind,
        form_ref: form_ref.clone(),
        message_ref: message_ref.clone(),
        lock: lock.clone(),
        in_flight,
        notice: notice.clone(),
        dismiss,
    };

    let onsubmit = Callback::from(move |e: SubmitEvent| {
        e.prevent_default();
        if *surface.in_flight.borrow() {
            log::debug!("{} form already sending, submit ignored", kind);
            return;
        }
        let surface = surface.clone();
        spawn_local(async move {
            let pipeline = SubmissionPipeline::new(kind, language, surface.endpoint(), GlooTransport, Gtag);
            pipeline.submit(&surface).await;
        });
    });

    let sending = match *lock {
        LockState::Engaged { label } => Some(label),
        LockState::Released => None,
    };

    SubmissionHandle {
        form_ref,
        message_ref,
        onsubmit,
        sending,
        notice: (*notice).clone(),
    }
}

#[derive(Properties, PartialEq)]
pub struct FormMessageProps {
    pub message_ref: NodeRef,
    pub notice: Option<Notice>,
}

#[function_component(FormMessage)]
pub fn form_message(props: &FormMessageProps) -> Html {
    match &props.notice {
        Some(notice) => html! {
            <div ref={props.message_ref.clone()}
                 class={classes!("form-message", notice.category.css_class())}
                 style="display: block;">
                {notice.text}
            </div>
        },
        None => html! {
            <div ref={props.message_ref.clone()} class="form-message" style="display: none;"></div>
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct SubmitButtonProps {
    pub sending: Option<&'static str>,
    pub children: Children,
}

#[function_component(SubmitButton)]
pub fn submit_button(props: &SubmitButtonProps) -> Html {
    html! {
        <button type="submit" class="btn btn-primary btn-full" disabled={props.sending.is_some()}>
            {
                if let Some(label) = props.sending {
                    html! { <><i class="fas fa-spinner fa-spin"></i>{" "}{label}</> }
                } else {
                    html! { <>{ for props.children.iter() }</> }
                }
            }
        </button>
    }
}
