use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, Element};
use yew::prelude::*;
use yew_router::prelude::*;

mod analytics;
mod config;
mod i18n;
mod translations;
mod viewport;
mod forms {
    pub mod dom;
    pub mod error;
    pub mod fields;
    pub mod kind;
    pub mod outcome;
    pub mod phase;
    pub mod pipeline;
    pub mod surface;
    pub mod transport;
    pub mod validation;
}
mod components {
    pub mod contact_form;
    pub mod counter;
    pub mod cta;
    pub mod expert_form;
    pub mod footer;
    pub mod language;
    pub mod nav;
    pub mod reveal;
    pub mod scroll_top;
    pub mod testimonials;
}
mod pages {
    pub mod join;
    pub mod landing;
}

use components::{
    footer::Footer,
    language::LanguageNotice,
    nav::Nav,
    scroll_top::ScrollTopButton,
};
use i18n::{BrowserStorage, Language, LanguageContext, LanguagePreference};
use pages::{join::Join, landing::Landing};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/bli-expert")]
    Join,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        }
        Route::Join => {
            info!("Rendering Join page");
            html! { <Join /> }
        }
        Route::NotFound => {
            info!("Unknown route, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

/// Reports every click on a `.btn`, wherever it sits in the page.
#[hook]
fn use_button_tracking() {
    use_effect_with_deps(
        move |_| {
            let document = window().and_then(|w| w.document());
            let listener = Closure::wrap(Box::new(move |e: web_sys::Event| {
                let button = e
                    .target()
                    .and_then(|t| t.dyn_into::<Element>().ok())
                    .and_then(|el| el.closest(".btn").ok().flatten());
                if let Some(button) = button {
                    let label = button.text_content().unwrap_or_default();
                    analytics::track("Button", "click", label.trim());
                }
            }) as Box<dyn FnMut(web_sys::Event)>);

            if let Some(document) = &document {
                let _ = document.add_event_listener_with_callback("click", listener.as_ref().unchecked_ref());
            }

            move || {
                if let Some(document) = &document {
                    let _ = document.remove_event_listener_with_callback("click", listener.as_ref().unchecked_ref());
                }
            }
        },
        (),
    );
}

#[function_component]
fn App() -> Html {
    let preference = use_mut_ref(|| LanguagePreference::load(BrowserStorage));
    let language = use_state(|| preference.borrow().current());
    let changed_to = use_state(|| None::<Language>);
    let notice_timer: Rc<RefCell<Option<Timeout>>> = use_mut_ref(|| None);

    use_effect_with_deps(
        move |language| {
            i18n::set_document_language(*language);
            || ()
        },
        *language,
    );

    use_button_tracking();

    use_effect_with_deps(
        move |_| {
            Timeout::new(config::PAGE_LOADED_DELAY_MS, viewport::mark_page_loaded).forget();
            || ()
        },
        (),
    );

    let toggle = {
        let language = language.clone();
        let changed_to = changed_to.clone();
        Callback::from(move |_: ()| {
            let next = preference.borrow_mut().toggle();
            info!("Language switched to {}", next.code());
            language.set(next);
            changed_to.set(Some(next));

            let changed_to = changed_to.clone();
            *notice_timer.borrow_mut() = Some(Timeout::new(config::LANGUAGE_NOTICE_MS, move || {
                changed_to.set(None);
            }));

            analytics::track("Language", "toggle", next.code());
        })
    };

    let context = LanguageContext {
        language: *language,
        toggle,
    };

    html! {
        <ContextProvider<LanguageContext> {context}>
            <BrowserRouter>
                <Nav />
                <Switch<Route> render={switch} />
                <Footer />
                <ScrollTopButton />
                <LanguageNotice changed_to={*changed_to} />
            </BrowserRouter>
        </ContextProvider<LanguageContext>>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
