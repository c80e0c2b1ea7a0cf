use chrono::Datelike;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::cta::SectionLink;
use crate::i18n::use_language;
use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    let language = use_language();
    let year = chrono::Local::now().year();

    html! {
        <footer class="footer">
            <div class="container footer-content">
                <div class="footer-brand">
                    <span class="logo">{"Company Doktor"}</span>
                </div>
                <ul class="footer-links">
                    <li><SectionLink target="services">{language.text("nav_services")}</SectionLink></li>
                    <li><SectionLink target="about">{language.text("nav_about")}</SectionLink></li>
                    <li><SectionLink target="contact">{language.text("nav_contact")}</SectionLink></li>
                    <li><Link<Route> to={Route::Join}>{language.text("nav_join")}</Link<Route>></li>
                </ul>
                <p class="footer-copy">{format!("© {} Company Doktor. {}", year, language.text("footer_rights"))}</p>
            </div>
        </footer>
    }
}
