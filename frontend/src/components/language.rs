use yew::prelude::*;

use crate::i18n::{Language, LanguageContext};

#[function_component(LanguageToggle)]
pub fn language_toggle() -> Html {
    let ctx = use_context::<LanguageContext>();
    let Some(ctx) = ctx else {
        return html! {};
    };
    let onclick = {
        let toggle = ctx.toggle.clone();
        Callback::from(move |_: MouseEvent| toggle.emit(()))
    };

    html! {
        <button id="languageToggle" class="language-toggle" title={ctx.language.text("lang_toggle_title")} {onclick}>
            <i class="fas fa-globe"></i>
            <span>{ctx.language.toggle_label()}</span>
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct LanguageNoticeProps {
    /// The language just switched to, while the notice is up.
    pub changed_to: Option<Language>,
}

#[function_component(LanguageNotice)]
pub fn language_notice(props: &LanguageNoticeProps) -> Html {
    match props.changed_to {
        Some(language) => html! {
            <div class="language-notification show">
                <i class="fas fa-check-circle"></i>{" "}{language.text("lang_changed")}
            </div>
        },
        None => html! {},
    }
}
