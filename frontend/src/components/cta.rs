use serde::{Deserialize, Serialize};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::viewport;
use crate::Route;

/// Query carried to the landing page when a section link is followed from
/// another route, e.g. `/?section=contact`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionQuery {
    pub section: Option<String>,
}

impl SectionQuery {
    pub fn new(target: &str) -> Self {
        Self {
            section: Some(target.to_string()),
        }
    }

    /// CSS selector of the requested section. Only plain element ids are
    /// accepted so the value can be handed to `querySelector` as is.
    pub fn selector(&self) -> Option<String> {
        let id = self.section.as_deref()?;
        let plain = !id.is_empty()
            && id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        plain.then(|| format!("#{}", id))
    }
}

#[derive(Properties, PartialEq)]
pub struct SectionLinkProps {
    /// Element id on the landing page, without `#`.
    pub target: &'static str,
    #[prop_or_default]
    pub class: Classes,
    /// Called after scrolling, e.g. to close the mobile menu.
    #[prop_or_default]
    pub onnavigate: Option<Callback<()>>,
    #[prop_or_default]
    pub children: Children,
}

/// An in-page anchor that scrolls smoothly. From another route it goes
/// back to the landing page, which scrolls to the section once mounted.
#[function_component(SectionLink)]
pub fn section_link(props: &SectionLinkProps) -> Html {
    let navigator = use_navigator();
    let onclick = {
        let target = props.target;
        let onnavigate = props.onnavigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if !viewport::smooth_scroll_to_selector(&format!("#{}", target)) {
                if let Some(navigator) = &navigator {
                    if let Err(e) = navigator.push_with_query(&Route::Home, &SectionQuery::new(target)) {
                        log::warn!("Could not navigate to #{}: {:?}", target, e);
                        navigator.push(&Route::Home);
                    }
                }
            }
            if let Some(onnavigate) = &onnavigate {
                onnavigate.emit(());
            }
        })
    };

    html! {
        <a href={format!("/#{}", props.target)} class={props.class.clone()} {onclick}>
            { for props.children.iter() }
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requested_section_becomes_selector() {
        assert_eq!(SectionQuery::new("contact").selector(), Some("#contact".to_string()));
        assert_eq!(SectionQuery::new("problem-section").selector(), Some("#problem-section".to_string()));
    }

    #[test]
    fn no_section_means_top_of_page() {
        assert_eq!(SectionQuery::default().selector(), None);
        assert_eq!(SectionQuery::new("").selector(), None);
    }

    #[test]
    fn selector_syntax_is_refused() {
        for hostile in ["a b", "x,y", "#contact", "c\"]"] {
            assert_eq!(SectionQuery::new(hostile).selector(), None, "{hostile}");
        }
    }
}
