use crate::i18n::Language;

// (tag, svenska, english)
const ENTRIES: &[(&str, &str, &str)] = &[
    // Navigation
    ("nav_home", "Hem", "Home"),
    ("nav_services", "Tjänster", "Services"),
    ("nav_process", "Process", "Process"),
    ("nav_results", "Resultat", "Results"),
    ("nav_about", "Om oss", "About"),
    ("nav_join", "Bli expert", "Join us"),
    ("nav_contact", "Kontakt", "Contact"),
    ("nav_cta", "Boka konsultation", "Book a consultation"),
    // Hero
    ("hero_badge", "Företagsläkare för svenska SME", "Business doctors for Swedish SMEs"),
    ("hero_title", "Vi ställer diagnos och botar ditt företag", "We diagnose and cure your business"),
    (
        "hero_subtitle",
        "Erfarna experter som hittar orsaken bakom stagnerande tillväxt, svag lönsamhet och tröga processer.",
        "Experienced experts who find the cause behind stalled growth, weak margins and slow processes.",
    ),
    ("hero_stat1", "Företag hjälpta", "Companies helped"),
    ("hero_stat2", "Års erfarenhet", "Years of experience"),
    ("hero_stat3", "Nöjda kunder", "Satisfied clients"),
    ("hero_cta1", "Boka gratis diagnos", "Book a free diagnosis"),
    ("hero_cta2", "Våra tjänster", "Our services"),
    // Problem
    ("problem_title", "Känner du igen symptomen?", "Do you recognise the symptoms?"),
    ("problem_1_title", "Tillväxten har stannat", "Growth has stalled"),
    ("problem_1_text", "Försäljningen står still trots att ni jobbar hårdare än någonsin.", "Sales are flat although you work harder than ever."),
    ("problem_2_title", "Lönsamheten sviktar", "Margins are slipping"),
    ("problem_2_text", "Kostnaderna växer snabbare än intäkterna.", "Costs are growing faster than revenue."),
    ("problem_3_title", "Allt hänger på dig", "Everything depends on you"),
    ("problem_3_text", "Verksamheten stannar när du tar ledigt.", "The business stops when you take time off."),
    // Services
    ("services_title", "Våra behandlingar", "Our treatments"),
    ("service_1_title", "Strategisk diagnos", "Strategic diagnosis"),
    ("service_1_text", "En genomlysning av affären, marknaden och organisationen.", "A review of the business, the market and the organisation."),
    ("service_2_title", "Ekonomisk rehabilitering", "Financial rehabilitation"),
    ("service_2_text", "Kassaflöde, prissättning och kostnadskontroll.", "Cash flow, pricing and cost control."),
    ("service_3_title", "Organisationsutveckling", "Organisational development"),
    ("service_3_text", "Tydliga roller, processer och ledarskap.", "Clear roles, processes and leadership."),
    // Process
    ("process_title", "Så går det till", "How it works"),
    ("process_1", "Kostnadsfri första konsultation", "Free first consultation"),
    ("process_2", "Diagnos och åtgärdsplan", "Diagnosis and action plan"),
    ("process_3", "Behandling med rätt expert", "Treatment with the right expert"),
    ("process_4", "Uppföljning av resultat", "Follow-up on results"),
    // Results
    ("results_title", "Resultat som syns", "Results that show"),
    ("result_1_label", "Genomförda uppdrag", "Completed engagements"),
    ("result_2_label", "Procent ökad lönsamhet i snitt", "Percent average margin increase"),
    ("result_3_label", "Anslutna experter", "Affiliated experts"),
    // Testimonials
    ("testimonials_title", "Vad våra kunder säger", "What our clients say"),
    (
        "testimonial_1_text",
        "På tre månader vände vi förlust till vinst. Diagnosen var obekväm men helt rätt.",
        "Within three months we turned a loss into a profit. The diagnosis was uncomfortable but spot on.",
    ),
    ("testimonial_1_author", "VD, tillverkande företag", "CEO, manufacturing company"),
    (
        "testimonial_2_text",
        "Äntligen kan jag ta semester utan att telefonen ringer varje timme.",
        "I can finally take a holiday without the phone ringing every hour.",
    ),
    ("testimonial_2_author", "Grundare, konsultbolag", "Founder, consultancy"),
    (
        "testimonial_3_text",
        "Konkreta råd, ingen PowerPoint-konsultering.",
        "Concrete advice, no slideware consulting.",
    ),
    ("testimonial_3_author", "Ekonomichef, handelsföretag", "CFO, retail company"),
    // About
    ("about_title", "Om Company Doktor", "About Company Doktor"),
    (
        "about_text",
        "Vi är ett nätverk av seniora specialister som har drivit, räddat och utvecklat företag själva.",
        "We are a network of senior specialists who have run, rescued and grown companies themselves.",
    ),
    ("value_1", "Ärlighet framför bekvämlighet", "Honesty over comfort"),
    ("value_2", "Mätbara resultat", "Measurable results"),
    ("value_3", "Erfarenhet från verkligheten", "Real-world experience"),
    // Contact form
    ("contact_title", "Boka en kostnadsfri diagnos", "Book a free diagnosis"),
    ("contact_subtitle", "Berätta kort om ert läge så hör vi av oss.", "Tell us briefly about your situation and we will be in touch."),
    ("form_name", "Namn *", "Name *"),
    ("form_company", "Företag *", "Company *"),
    ("form_email", "E-post *", "Email *"),
    ("form_phone", "Telefon", "Phone"),
    ("form_service", "Vad behöver ni hjälp med?", "What do you need help with?"),
    ("form_service_strategy", "Strategi", "Strategy"),
    ("form_service_finance", "Ekonomi", "Finance"),
    ("form_service_organisation", "Organisation", "Organisation"),
    ("form_service_other", "Annat", "Other"),
    ("form_message", "Meddelande *", "Message *"),
    ("form_consent", "Jag godkänner att mina uppgifter behandlas enligt integritetspolicyn. *", "I agree to my data being processed according to the privacy policy. *"),
    ("form_submit", "Skicka förfrågan", "Send request"),
    ("form_sending", "Skickar...", "Sending..."),
    // Expert application
    ("join_title", "Bli expert hos Company Doktor", "Become a Company Doktor expert"),
    ("join_subtitle", "Har du lång erfarenhet av att utveckla företag? Ansök nedan.", "Do you have long experience of developing companies? Apply below."),
    ("form_linkedin", "LinkedIn-profil", "LinkedIn profile"),
    ("form_expertise", "Expertområde *", "Area of expertise *"),
    ("form_experience", "Antal års erfarenhet *", "Years of experience *"),
    ("form_motivation", "Varför vill du bli expert? *", "Why do you want to join? *"),
    ("form_cv", "CV (PDF, max 5MB) *", "CV (PDF, max 5MB) *"),
    ("form_gdpr", "Jag godkänner att Company Doktor sparar min ansökan. *", "I agree that Company Doktor stores my application. *"),
    ("form_newsletter", "Jag vill få nyhetsbrev", "I want to receive the newsletter"),
    ("form_apply", "Skicka ansökan", "Submit application"),
    ("form_applying", "Skickar ansökan...", "Submitting application..."),
    // Form outcomes
    ("form_missing_fields", "Vänligen fyll i alla obligatoriska fält.", "Please fill in all required fields."),
    ("form_invalid_email", "Vänligen ange en giltig e-postadress.", "Please enter a valid email address."),
    ("form_cv_missing", "Vänligen ladda upp ditt CV.", "Please upload your CV."),
    ("form_cv_too_large", "CV-filen får inte vara större än 5MB.", "The CV file must not be larger than 5MB."),
    ("form_cv_not_pdf", "CV:t måste vara i PDF-format.", "The CV must be a PDF."),
    (
        "contact_success",
        "Tack för din förfrågan! Vi återkommer inom 24 timmar.",
        "Thank you for your request! We will get back to you within 24 hours.",
    ),
    (
        "contact_error",
        "Ett fel uppstod. Vänligen försök igen eller kontakta oss direkt.",
        "Something went wrong. Please try again or contact us directly.",
    ),
    (
        "expert_success",
        "Tack för din ansökan! Vi har mottagit din ansökan och återkommer inom 5 arbetsdagar. Kolla din inkorg (och skräppost) för bekräftelsemail.",
        "Thank you for your application! We have received it and will get back to you within 5 working days. Check your inbox (and spam folder) for a confirmation email.",
    ),
    (
        "expert_error",
        "Ett fel uppstod vid skickandet. Vänligen försök igen eller kontakta oss direkt på info@keeada.com",
        "Something went wrong while sending. Please try again or contact us directly at info@keeada.com",
    ),
    // Chrome
    ("lang_toggle_title", "Switch to English", "Byt till Svenska"),
    ("lang_changed", "🌍 Språk ändrat till Svenska", "🌍 Language changed to English"),
    ("scroll_top_title", "Till toppen", "Back to top"),
    ("footer_rights", "Alla rättigheter förbehållna.", "All rights reserved."),
];

/// Looks up `tag` for `language`, `None` when the tag is unknown.
pub fn lookup(language: Language, tag: &str) -> Option<&'static str> {
    ENTRIES
        .iter()
        .find(|(key, _, _)| *key == tag)
        .map(|(_, sv, en)| match language {
            Language::Sv => *sv,
            Language::En => *en,
        })
}

/// Text for `tag`, falling back to the Swedish text and then to the tag itself.
pub fn text(language: Language, tag: &'static str) -> &'static str {
    lookup(language, tag)
        .or_else(|| lookup(Language::Sv, tag))
        .unwrap_or(tag)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn tags_are_unique() {
        let mut seen = HashSet::new();
        for (tag, _, _) in ENTRIES {
            assert!(seen.insert(*tag), "duplicate tag {tag}");
        }
    }

    #[test]
    fn every_tag_has_both_languages() {
        for (tag, sv, en) in ENTRIES {
            assert!(!sv.is_empty(), "{tag} has no Swedish text");
            assert!(!en.is_empty(), "{tag} has no English text");
        }
    }

    #[test]
    fn lookup_switches_with_language() {
        assert_eq!(lookup(Language::Sv, "nav_contact"), Some("Kontakt"));
        assert_eq!(lookup(Language::En, "nav_contact"), Some("Contact"));
        assert_eq!(lookup(Language::En, "no_such_tag"), None);
    }

    #[test]
    fn unknown_tag_falls_back_to_itself() {
        assert_eq!(text(Language::En, "hero_missing"), "hero_missing");
        assert_eq!(text(Language::En, "form_submit"), "Send request");
    }
}
