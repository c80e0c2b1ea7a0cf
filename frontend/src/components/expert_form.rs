use yew::prelude::*;

use crate::config;
use crate::forms::dom::{use_submission, FormMessage, SubmitButton};
use crate::forms::kind::FormKind;
use crate::i18n::use_language;

const EXPERTISE_OPTIONS: &[(&str, &str)] = &[
    ("strategi", "form_service_strategy"),
    ("ekonomi", "form_service_finance"),
    ("organisation", "form_service_organisation"),
    ("annat", "form_service_other"),
];

#[function_component(ExpertApplicationForm)]
pub fn expert_application_form() -> Html {
    let language = use_language();
    let submission = use_submission(FormKind::ExpertApplication);
    let t = |tag: &'static str| language.text(tag);
    let accept = format!(".pdf,{}", config::CV_MEDIA_TYPE);

    html! {
        <form id="expertForm" class="expert-form"
              ref={submission.form_ref.clone()}
              novalidate=true
              onsubmit={submission.onsubmit.clone()}>
            <div class="form-row">
                <div class="form-group">
                    <label for="expert-name">{t("form_name")}</label>
                    <input type="text" id="expert-name" name="name" autocomplete="name" />
                </div>
                <div class="form-group">
                    <label for="expert-email">{t("form_email")}</label>
                    <input type="email" id="expert-email" name="email" autocomplete="email" />
                </div>
            </div>
            <div class="form-row">
                <div class="form-group">
                    <label for="expert-phone">{format!("{} *", t("form_phone"))}</label>
                    <input type="tel" id="expert-phone" name="phone" autocomplete="tel" />
                </div>
                <div class="form-group">
                    <label for="expert-linkedin">{t("form_linkedin")}</label>
                    <input type="url" id="expert-linkedin" name="linkedin" placeholder="https://linkedin.com/in/..." />
                </div>
            </div>
            <div class="form-row">
                <div class="form-group">
                    <label for="expert-expertise">{t("form_expertise")}</label>
                    <select id="expert-expertise" name="expertise">
                        <option value="">{"-"}</option>
                        { for EXPERTISE_OPTIONS.iter().map(|(value, tag)| html! {
                            <option value={*value}>{t(*tag)}</option>
                        }) }
                    </select>
                </div>
                <div class="form-group">
                    <label for="expert-experience">{t("form_experience")}</label>
                    <input type="number" id="expert-experience" name="experience" min="0" max="60" />
                </div>
            </div>
            <div class="form-group">
                <label for="expert-message">{t("form_motivation")}</label>
                <textarea id="expert-message" name="message" rows="5"></textarea>
            </div>
            <div class="form-group">
                <label for="expert-cv">{t("form_cv")}</label>
                <input type="file" id="expert-cv" name="cv" accept={accept} />
            </div>
            <div class="form-group checkbox-group">
                <label>
                    <input type="checkbox" name="gdpr-consent" />
                    {" "}{t("form_gdpr")}
                </label>
                <label>
                    <input type="checkbox" name="newsletter" />
                    {" "}{t("form_newsletter")}
                </label>
            </div>
            <SubmitButton sending={submission.sending}>
                <i class="fas fa-user-plus"></i>{" "}{t("form_apply")}
            </SubmitButton>
            <FormMessage message_ref={submission.message_ref.clone()} notice={submission.notice.clone()} />
        </form>
    }
}
