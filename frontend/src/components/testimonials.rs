use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::reveal::Reveal;
use crate::i18n::use_language;
use crate::viewport;

const TESTIMONIALS: &[(&str, &str)] = &[
    ("testimonial_1_text", "testimonial_1_author"),
    ("testimonial_2_text", "testimonial_2_author"),
    ("testimonial_3_text", "testimonial_3_author"),
];

const CAROUSEL_GRID: &str =
    "display: flex; overflow-x: auto; scroll-snap-type: x mandatory; gap: 1rem; scroll-behavior: smooth;";
const CAROUSEL_CARD: &str = "min-width: 85%; scroll-snap-align: center;";

/// Cards in a grid, or a swipeable row on narrow screens.
#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let language = use_language();
    let (width, _) = use_window_size();
    let carousel = viewport::carousel_layout(width, TESTIMONIALS.len());

    html! {
        <section id="testimonials" class="testimonials-section">
            <div class="container">
                <h2 class="section-title">{language.text("testimonials_title")}</h2>
                <div class="testimonials-grid" style={carousel.then_some(CAROUSEL_GRID)}>
                    { for TESTIMONIALS.iter().enumerate().map(|(index, (text, author))| html! {
                        <Reveal class={classes!("testimonial-card")} {index} style={carousel.then_some(CAROUSEL_CARD)}>
                            <p class="testimonial-text">{language.text(*text)}</p>
                            <p class="testimonial-author">{language.text(*author)}</p>
                        </Reveal>
                    }) }
                </div>
            </div>
        </section>
    }
}
