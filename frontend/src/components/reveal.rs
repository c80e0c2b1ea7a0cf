use gloo_timers::callback::Timeout;
use web_sys::Element;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::viewport;

/// Delay between neighbouring cards entering the viewport together.
pub const STAGGER_MS: u32 = 100;
const FRAME_MS: u32 = 16;

const HIDDEN_STYLE: &str =
    "opacity: 0; transform: translateY(30px); transition: opacity 0.6s ease, transform 0.6s ease;";
const SHOWN_STYLE: &str =
    "opacity: 1; transform: translateY(0); transition: opacity 0.6s ease, transform 0.6s ease;";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Stage {
    /// Not seen yet, rendered as plain markup.
    Static,
    /// Seen, waiting for its stagger slot.
    Scheduled,
    /// Hidden with the transition armed.
    Primed,
    Shown,
}

pub fn reveal_delay_ms(index: usize) -> u32 {
    index as u32 * STAGGER_MS
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    /// Position among its siblings, drives the stagger.
    #[prop_or_default]
    pub index: usize,
    #[prop_or_default]
    pub style: Option<&'static str>,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub children: Children,
}

/// A card that fades up the first time it is fully on screen.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let stage = use_state(|| Stage::Static);
    let (_, scroll_y) = use_window_scroll();

    {
        let node = node.clone();
        let stage = stage.clone();
        let index = props.index;
        use_effect_with_deps(
            move |_| {
                if *stage == Stage::Static {
                    if let Some(element) = node.cast::<Element>() {
                        if viewport::is_in_viewport(&element) {
                            stage.set(Stage::Scheduled);
                            let stage = stage.clone();
                            Timeout::new(reveal_delay_ms(index), move || {
                                stage.set(Stage::Primed);
                                let stage = stage.clone();
                                Timeout::new(FRAME_MS, move || stage.set(Stage::Shown)).forget();
                            })
                            .forget();
                        }
                    }
                }
                || ()
            },
            scroll_y,
        );
    }

    let stage_style = match *stage {
        Stage::Static | Stage::Scheduled => None,
        Stage::Primed => Some(HIDDEN_STYLE),
        Stage::Shown => Some(SHOWN_STYLE),
    };
    let style = match (props.style, stage_style) {
        (Some(base), Some(stage)) => Some(format!("{} {}", base, stage)),
        (base, stage) => base.or(stage).map(str::to_string),
    };

    html! {
        <div ref={node}
             class={classes!(props.class.clone(), (*stage == Stage::Shown).then_some("animated"))}
             {style}
             onclick={props.onclick.clone()}>
            { for props.children.iter() }
        </div>
    }
}
