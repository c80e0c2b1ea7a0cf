use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, Node};
use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use crate::components::cta::SectionLink;
use crate::components::language::LanguageToggle;
use crate::i18n::use_language;
use crate::viewport;
use crate::Route;

const SECTION_LINKS: &[(&str, &str)] = &[
    ("home", "nav_home"),
    ("services", "nav_services"),
    ("process", "nav_process"),
    ("results", "nav_results"),
    ("about", "nav_about"),
    ("contact", "nav_contact"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let language = use_language();
    let menu_open = use_state(|| false);
    let active = use_state(|| None::<String>);
    let header_ref = use_node_ref();
    let (_, scroll_y) = use_window_scroll();

    // Highlight the section under the reading line; keep the last one
    // between sections.
    {
        let active = active.clone();
        use_effect_with_deps(
            move |scroll_y| {
                let sections = viewport::page_sections();
                if let Some(id) = viewport::active_section(&sections, *scroll_y) {
                    if active.as_deref() != Some(id) {
                        active.set(Some(id.to_string()));
                    }
                }
                || ()
            },
            scroll_y,
        );
    }

    // Clicks anywhere outside the header close the mobile menu.
    {
        let menu_open = menu_open.clone();
        let header_ref = header_ref.clone();
        use_effect_with_deps(
            move |_| {
                let document = window().and_then(|w| w.document());
                let listener = Closure::wrap(Box::new(move |e: web_sys::Event| {
                    let target = e.target().and_then(|t| t.dyn_into::<Node>().ok());
                    let inside = header_ref
                        .cast::<Node>()
                        .map(|header| header.contains(target.as_ref()))
                        .unwrap_or(false);
                    if !inside {
                        menu_open.set(false);
                    }
                }) as Box<dyn FnMut(web_sys::Event)>);

                if let Some(document) = &document {
                    let _ = document.add_event_listener_with_callback("click", listener.as_ref().unchecked_ref());
                }

                move || {
                    if let Some(document) = &document {
                        let _ = document
                            .remove_event_listener_with_callback("click", listener.as_ref().unchecked_ref());
                    }
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: ()| menu_open.set(false))
    };
    let close_on_route = {
        let close_menu = close_menu.clone();
        Callback::from(move |_: MouseEvent| close_menu.emit(()))
    };

    html! {
        <header id="header" ref={header_ref}
                class={classes!("header", viewport::header_scrolled(scroll_y).then_some("scrolled"))}>
            <nav class="container nav">
                <Link<Route> to={Route::Home} classes="logo">{"Company Doktor"}</Link<Route>>
                <ul id="navMenu" class={classes!("nav-menu", (*menu_open).then_some("active"))}>
                    {
                        for SECTION_LINKS.iter().map(|(id, tag)| {
                            let class = classes!("nav-link", (active.as_deref() == Some(*id)).then_some("active"));
                            html! {
                                <li>
                                    <SectionLink target={*id} {class} onnavigate={close_menu.clone()}>
                                        {language.text(*tag)}
                                    </SectionLink>
                                </li>
                            }
                        })
                    }
                    <li onclick={close_on_route}>
                        <Link<Route> to={Route::Join} classes="nav-link">{language.text("nav_join")}</Link<Route>>
                    </li>
                </ul>
                <div class="nav-actions">
                    <LanguageToggle />
                    <SectionLink target="contact" class={classes!("btn", "btn-primary", "nav-cta")}>
                        {language.text("nav_cta")}
                    </SectionLink>
                    <button id="mobileMenuToggle" class="mobile-menu-toggle" onclick={toggle_menu}>
                        <i class={classes!("fas", if *menu_open { "fa-times" } else { "fa-bars" })}></i>
                    </button>
                </div>
            </nav>
        </header>
    }
}
