use yew::prelude::*;

use crate::config;
use crate::forms::dom::{use_submission, FormMessage, SubmitButton};
use crate::forms::kind::FormKind;
use crate::i18n::use_language;

const SERVICE_OPTIONS: &[(&str, &str)] = &[
    ("strategi", "form_service_strategy"),
    ("ekonomi", "form_service_finance"),
    ("organisation", "form_service_organisation"),
    ("annat", "form_service_other"),
];

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let language = use_language();
    let submission = use_submission(FormKind::Contact);
    let t = |tag: &'static str| language.text(tag);

    html! {
        <form id="contactForm" class="contact-form"
              ref={submission.form_ref.clone()}
              action={config::CONTACT_FORM_ACTION}
              method={config::CONTACT_FORM_METHOD}
              novalidate=true
              onsubmit={submission.onsubmit.clone()}>
            <div class="form-row">
                <div class="form-group">
                    <label for="contact-name">{t("form_name")}</label>
                    <input type="text" id="contact-name" name="name" autocomplete="name" />
                </div>
                <div class="form-group">
                    <label for="contact-company">{t("form_company")}</label>
                    <input type="text" id="contact-company" name="company" autocomplete="organization" />
                </div>
            </div>
            <div class="form-row">
                <div class="form-group">
                    <label for="contact-email">{t("form_email")}</label>
                    <input type="email" id="contact-email" name="email" autocomplete="email" />
                </div>
                <div class="form-group">
                    <label for="contact-phone">{t("form_phone")}</label>
                    <input type="tel" id="contact-phone" name="phone" autocomplete="tel" />
                </div>
            </div>
            <div class="form-group">
                <label for="contact-service">{t("form_service")}</label>
                <select id="contact-service" name="service">
                    <option value="">{"-"}</option>
                    { for SERVICE_OPTIONS.iter().map(|(value, tag)| html! {
                        <option value={*value}>{t(*tag)}</option>
                    }) }
                </select>
            </div>
            <div class="form-group">
                <label for="contact-message">{t("form_message")}</label>
                <textarea id="contact-message" name="message" rows="5"></textarea>
            </div>
            <div class="form-group checkbox-group">
                <label>
                    <input type="checkbox" name="consent" />
                    {" "}{t("form_consent")}
                </label>
            </div>
            <SubmitButton sending={submission.sending}>
                <i class="fas fa-paper-plane"></i>{" "}{t("form_submit")}
            </SubmitButton>
            <FormMessage message_ref={submission.message_ref.clone()} notice={submission.notice.clone()} />
        </form>
    }
}
