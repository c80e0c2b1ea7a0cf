use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::i18n::use_language;
use crate::viewport;

#[function_component(ScrollTopButton)]
pub fn scroll_top_button() -> Html {
    let language = use_language();
    let (_, scroll_y) = use_window_scroll();
    let onclick = Callback::from(|_: MouseEvent| viewport::scroll_to_top());

    html! {
        <button id="scrollTop"
                class={classes!("scroll-top", viewport::scroll_top_visible(scroll_y).then_some("visible"))}
                title={language.text("scroll_top_title")}
                {onclick}>
            <i class="fas fa-arrow-up"></i>
        </button>
    }
}
