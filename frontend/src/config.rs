//! Endpoints, limits and delays used across the landing page.

#[cfg(debug_assertions)]
pub fn get_functions_url() -> &'static str {
    "http://localhost:8888"  // netlify dev
}

#[cfg(not(debug_assertions))]
pub fn get_functions_url() -> &'static str {
    ""  // Same origin in production
}

/// Declared `action` of the contact form. Formspree accepts multipart posts
/// and answers with an empty or JSON body.
pub const CONTACT_FORM_ACTION: &str = "https://formspree.io/f/companydoktor";
pub const CONTACT_FORM_METHOD: &str = "post";

pub const EXPERT_APPLICATION_PATH: &str = "/.netlify/functions/expert-application";

pub const MAX_CV_BYTES: u64 = 5 * 1024 * 1024;
pub const CV_MEDIA_TYPE: &str = "application/pdf";

pub const CONTACT_DISMISS_MS: u32 = 5_000;
pub const EXPERT_DISMISS_MS: u32 = 10_000;

pub const LANGUAGE_STORAGE_KEY: &str = "language";
pub const LANGUAGE_NOTICE_MS: u32 = 2_000;
pub const PAGE_LOADED_DELAY_MS: u32 = 100;

pub const CONVERSION_SEND_TO: &str = "AW-XXXXXXXXX/XXXXXXXXXXXXXX";
pub const CONVERSION_CURRENCY: &str = "SEK";

pub fn expert_application_url() -> String {
    format!("{}{}", get_functions_url(), EXPERT_APPLICATION_PATH)
}
