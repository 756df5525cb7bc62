use crate::content::{translations, Translations};
use crate::form::state::WaiverForm;

/// The first form requirement a submission attempt fails on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationField {
    FullName,
    Initials,
    WaiverAcknowledgment,
    AgreementAcknowledgment,
    Signature,
}

impl ValidationField {
    pub fn warning(self, t: &'static Translations) -> &'static str {
        match self {
            ValidationField::FullName => t.validation_full_name,
            ValidationField::Initials => t.validation_initials,
            ValidationField::WaiverAcknowledgment => t.validation_waiver,
            ValidationField::AgreementAcknowledgment => t.validation_agreement,
            ValidationField::Signature => t.validation_signature,
        }
    }
}

/// Fail-fast completeness check. The first violation wins; later fields
/// are not inspected.
pub fn validate(form: &WaiverForm) -> Result<(), ValidationField> {
    if form.full_name.trim().is_empty() {
        return Err(ValidationField::FullName);
    }
    if form.initials.trim().is_empty() {
        return Err(ValidationField::Initials);
    }
    if !form.waiver_acknowledged {
        return Err(ValidationField::WaiverAcknowledgment);
    }
    if !form.agreement_acknowledged {
        return Err(ValidationField::AgreementAcknowledgment);
    }
    if form.signature.is_none() {
        return Err(ValidationField::Signature);
    }
    Ok(())
}

/// Convenience for hosts that only need the localized warning text.
pub fn first_warning(form: &WaiverForm) -> Option<&'static str> {
    validate(form).err().map(|field| field.warning(translations(form.language)))
}
