use web_sys::Element;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::analytics;
use crate::components::contact_form::ContactForm;
use crate::components::counter::ResultCounter;
use crate::components::cta::{SectionLink, SectionQuery};
use crate::components::reveal::Reveal;
use crate::components::testimonials::Testimonials;
use crate::i18n::use_language;
use crate::viewport;

const PROBLEMS: &[(&str, &str, &str)] = &[
    ("fa-chart-line", "problem_1_title", "problem_1_text"),
    ("fa-coins", "problem_2_title", "problem_2_text"),
    ("fa-user-clock", "problem_3_title", "problem_3_text"),
];

const SERVICES: &[(&str, &str, &str)] = &[
    ("fa-stethoscope", "service_1_title", "service_1_text"),
    ("fa-file-invoice-dollar", "service_2_title", "service_2_text"),
    ("fa-sitemap", "service_3_title", "service_3_text"),
];

const PROCESS_STEPS: &[&str] = &["process_1", "process_2", "process_3", "process_4"];

// (target, suffix, label)
const RESULTS: &[(u32, &str, &str)] = &[
    (150, "+", "result_1_label"),
    (35, "%", "result_2_label"),
    (40, "+", "result_3_label"),
];

const VALUES: &[&str] = &["value_1", "value_2", "value_3"];

#[function_component(Landing)]
pub fn landing() -> Html {
    let language = use_language();
    let t = |tag: &'static str| language.text(tag);

    // Arriving from another page with `?section=` lands on that section,
    // otherwise on the top.
    let requested = yew_router::hooks::use_location()
        .and_then(|location| location.query::<SectionQuery>().ok())
        .and_then(|query| query.selector());
    {
        use_effect_with_deps(
            move |requested| {
                let scrolled = requested
                    .as_deref()
                    .map(viewport::smooth_scroll_to_selector)
                    .unwrap_or(false);
                if !scrolled {
                    if let Some(window) = web_sys::window() {
                        window.scroll_to_with_x_and_y(0.0, 0.0);
                    }
                }
                || ()
            },
            requested,
        );
    }

    let scroll_to_problems = Callback::from(|_: MouseEvent| {
        viewport::smooth_scroll_to_selector(".problem-section");
    });

    html! {
        <main class="landing">
            <section id="home" class="hero">
                <div class="container hero-content">
                    <span class="hero-badge">{t("hero_badge")}</span>
                    <h1 class="hero-title">{t("hero_title")}</h1>
                    <p class="hero-subtitle">{t("hero_subtitle")}</p>
                    <div class="hero-buttons">
                        <SectionLink target="contact" class={classes!("btn", "btn-primary")}>
                            {t("hero_cta1")}
                        </SectionLink>
                        <SectionLink target="services" class={classes!("btn", "btn-secondary")}>
                            {t("hero_cta2")}
                        </SectionLink>
                    </div>
                    <div class="hero-stats">
                        <div class="stat"><span class="stat-number">{"150+"}</span><span class="stat-label">{t("hero_stat1")}</span></div>
                        <div class="stat"><span class="stat-number">{"25"}</span><span class="stat-label">{t("hero_stat2")}</span></div>
                        <div class="stat"><span class="stat-number">{"98%"}</span><span class="stat-label">{t("hero_stat3")}</span></div>
                    </div>
                </div>
                <div class="scroll-indicator" onclick={scroll_to_problems}>
                    <i class="fas fa-chevron-down"></i>
                </div>
            </section>

            <section id="problem" class="problem-section">
                <div class="container">
                    <h2 class="section-title">{t("problem_title")}</h2>
                    <div class="problem-grid">
                        { for PROBLEMS.iter().enumerate().map(|(index, (icon, title, text))| html! {
                            <Reveal class={classes!("problem-card")} {index}>
                                <i class={classes!("fas", *icon)}></i>
                                <h3>{t(*title)}</h3>
                                <p>{t(*text)}</p>
                            </Reveal>
                        }) }
                    </div>
                </div>
            </section>

            <section id="services" class="services-section">
                <div class="container">
                    <h2 class="section-title">{t("services_title")}</h2>
                    <div class="services-grid">
                        { for SERVICES.iter().enumerate().map(|(index, (icon, title, text))| {
                            let title_text = t(*title);
                            let onclick = Callback::from(move |_: MouseEvent| {
                                analytics::track("Service", "view", title_text);
                            });
                            html! {
                                <Reveal class={classes!("service-card")} {index} {onclick}>
                                    <i class={classes!("fas", *icon)}></i>
                                    <h3>{title_text}</h3>
                                    <p>{t(*text)}</p>
                                </Reveal>
                            }
                        }) }
                    </div>
                </div>
            </section>

            <section id="process" class="process-section">
                <div class="container">
                    <h2 class="section-title">{t("process_title")}</h2>
                    <div class="process-steps">
                        { for PROCESS_STEPS.iter().enumerate().map(|(index, step)| html! {
                            <Reveal class={classes!("process-step")} {index}>
                                <span class="step-number">{index + 1}</span>
                                <p>{t(*step)}</p>
                            </Reveal>
                        }) }
                    </div>
                </div>
            </section>

            <ResultsSection />

            <Testimonials />

            <section id="about" class="about-section">
                <div class="container about-content">
                    <div class="about-text">
                        <h2 class="section-title">{t("about_title")}</h2>
                        <p>{t("about_text")}</p>
                        <ul class="values">
                            { for VALUES.iter().enumerate().map(|(index, value)| html! {
                                <li>
                                    <Reveal class={classes!("value-item")} {index}>
                                        <i class="fas fa-check"></i>{" "}{t(*value)}
                                    </Reveal>
                                </li>
                            }) }
                        </ul>
                    </div>
                    <img class="about-image" src="/assets/team.jpg" alt="Company Doktor" loading="lazy" />
                </div>
            </section>

            <section id="contact" class="contact-section">
                <div class="container">
                    <h2 class="section-title">{t("contact_title")}</h2>
                    <p class="section-subtitle">{t("contact_subtitle")}</p>
                    <ContactForm />
                </div>
            </section>
        </main>
    }
}

/// Counters start the first time the whole section is on screen.
#[function_component(ResultsSection)]
fn results_section() -> Html {
    let language = use_language();
    let section_ref = use_node_ref();
    let started = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();

    {
        let section_ref = section_ref.clone();
        let started = started.clone();
        use_effect_with_deps(
            move |_| {
                if !*started {
                    if let Some(section) = section_ref.cast::<Element>() {
                        if viewport::is_in_viewport(&section) {
                            started.set(true);
                        }
                    }
                }
                || ()
            },
            scroll_y,
        );
    }

    html! {
        <section id="results" class="results-section" ref={section_ref}>
            <div class="container">
                <h2 class="section-title">{language.text("results_title")}</h2>
                <div class="results-grid">
                    { for RESULTS.iter().map(|(target, suffix, label)| html! {
                        <div class="result-item">
                            <ResultCounter target={*target} start={*started} suffix={*suffix} />
                            <span class="result-label">{language.text(*label)}</span>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
