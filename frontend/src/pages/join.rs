use yew::prelude::*;

use crate::components::expert_form::ExpertApplicationForm;
use crate::i18n::use_language;

#[function_component(Join)]
pub fn join() -> Html {
    let language = use_language();

    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <main class="join-page">
            <section id="join" class="join-section">
                <div class="container narrow">
                    <h1 class="section-title">{language.text("join_title")}</h1>
                    <p class="section-subtitle">{language.text("join_subtitle")}</p>
                    <ExpertApplicationForm />
                </div>
            </section>
        </main>
    }
}
