use crate::content::Language;
use crate::foundation::util::text::{capitalize_full_name, generate_initials};
use crate::foundation::util::time::pacific_date;
use crate::signature::SignatureChange;

/// Everything the user has entered in one form session.
///
/// Discarded and rebuilt empty after a successful submission; a failed
/// submission leaves it untouched for retry.
#[derive(Debug, Clone, PartialEq)]
pub struct WaiverForm {
    pub language: Language,
    pub full_name: String,
    pub initials: String,
    pub minor_names: String,
    pub signature_date: String,
    pub waiver_acknowledged: bool,
    pub agreement_acknowledged: bool,
    pub signature: Option<String>,
    /// Bumped on reset; the signature pad watches it and wipes itself.
    pub clear_trigger: u64,
}

impl WaiverForm {
    pub fn new(language: Language) -> Self {
        WaiverForm {
            language,
            full_name: String::new(),
            initials: String::new(),
            minor_names: String::new(),
            signature_date: pacific_date(),
            waiver_acknowledged: false,
            agreement_acknowledged: false,
            signature: None,
            clear_trigger: 0,
        }
    }

    /// Tidies the name when the field loses focus. Initials are derived
    /// automatically only when the user has not typed any and the name
    /// has more than one word.
    pub fn full_name_blur(&mut self) {
        let trimmed = self.full_name.trim();
        if trimmed.is_empty() {
            return;
        }
        self.full_name = capitalize_full_name(trimmed);
        if self.initials.trim().is_empty() && self.full_name.split_whitespace().count() > 1 {
            self.initials = generate_initials(&self.full_name);
        }
    }

    pub fn set_initials(&mut self, initials: &str) {
        self.initials = initials.to_uppercase();
    }

    pub fn apply_signature_change(&mut self, change: SignatureChange) {
        self.signature = match change {
            SignatureChange::Signed(data_url) => Some(data_url),
            SignatureChange::Cleared => None,
        };
    }

    /// Clears every field back to a fresh session and tells the pad to
    /// wipe itself by advancing the clear trigger.
    pub fn reset(&mut self) {
        let language = self.language;
        let trigger = self.clear_trigger;
        *self = WaiverForm::new(language);
        self.clear_trigger = trigger.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_form_defaults_to_todays_date() {
        let form = WaiverForm::new(Language::En);
        assert_eq!(form.signature_date, pacific_date());
        assert!(form.full_name.is_empty());
        assert!(form.signature.is_none());
    }

    #[test]
    fn test_blur_capitalizes_and_derives_initials() {
        let mut form = WaiverForm::new(Language::En);
        form.full_name = "john doe".to_string();
        form.full_name_blur();
        assert_eq!(form.full_name, "John Doe");
        assert_eq!(form.initials, "JD");
    }

    #[test]
    fn test_blur_keeps_user_entered_initials() {
        let mut form = WaiverForm::new(Language::En);
        form.full_name = "mary jane watson".to_string();
        form.initials = "MW".to_string();
        form.full_name_blur();
        assert_eq!(form.full_name, "Mary Jane Watson");
        assert_eq!(form.initials, "MW");
    }

    #[test]
    fn test_blur_skips_initials_for_single_word() {
        let mut form = WaiverForm::new(Language::En);
        form.full_name = "madonna".to_string();
        form.full_name_blur();
        assert_eq!(form.full_name, "Madonna");
        assert!(form.initials.is_empty());
    }

    #[test]
    fn test_initials_are_uppercased() {
        let mut form = WaiverForm::new(Language::En);
        form.set_initials("jd");
        assert_eq!(form.initials, "JD");
    }

    #[test]
    fn test_signature_change_round_trip() {
        let mut form = WaiverForm::new(Language::En);
        form.apply_signature_change(SignatureChange::Signed("data:image/png;base64,AAAA".to_string()));
        assert!(form.signature.is_some());
        form.apply_signature_change(SignatureChange::Cleared);
        assert!(form.signature.is_none());
    }

    #[test]
    fn test_reset_clears_fields_and_bumps_trigger() {
        let mut form = WaiverForm::new(Language::Es);
        form.full_name = "John Doe".to_string();
        form.waiver_acknowledged = true;
        form.signature = Some("data:image/png;base64,AAAA".to_string());
        form.reset();
        assert!(form.full_name.is_empty());
        assert!(!form.waiver_acknowledged);
        assert!(form.signature.is_none());
        assert_eq!(form.language, Language::Es);
        assert_eq!(form.clear_trigger, 1);
    }
}
