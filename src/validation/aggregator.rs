//! Form-level validation pass

use super::validators;
use crate::state::{FieldId, FileField, NumericInput, RegistrationForm};
use std::collections::BTreeMap;

/// Per-field validation messages from the last pass.
///
/// A field is present iff its current value fails its rule; the map is
/// rebuilt from scratch on every pass, never patched incrementally.
pub type ErrorMap = BTreeMap<FieldId, String>;

/// Run every field rule against the form and collect the failures.
///
/// Rules are applied independently; a failure in one field never hides
/// a failure in another. Deterministic and idempotent for a given form.
pub fn validate(form: &RegistrationForm) -> ErrorMap {
    let mut errors = ErrorMap::new();

    // Personal info
    if !validators::required_field(&form.full_name) {
        errors.insert(FieldId::FullName, "Full name is required".to_string());
    }
    if !validators::mobile_number(&form.mobile_number) {
        errors.insert(
            FieldId::MobileNumber,
            "Valid 10-digit mobile number is required".to_string(),
        );
    }
    if !validators::email(&form.email) {
        errors.insert(FieldId::Email, "Valid email address is required".to_string());
    }
    if !validators::bar_council_number(&form.bar_council_number) {
        errors.insert(
            FieldId::BarCouncilNumber,
            "Valid Bar Council Registration Number is required".to_string(),
        );
    }
    if !validators::required_number(&form.experience_years) {
        errors.insert(
            FieldId::ExperienceYears,
            "Years of experience is required".to_string(),
        );
    }
    // Consultation fee is optional but must be numeric when given
    if !matches!(
        NumericInput::parse(&form.consultation_fee),
        NumericInput::Empty | NumericInput::Valid(_)
    ) {
        errors.insert(
            FieldId::ConsultationFee,
            "Consultation fee must be a valid number".to_string(),
        );
    }

    // Professional info
    if !validators::non_empty_set(&form.practicing_courts) {
        errors.insert(
            FieldId::PracticingCourts,
            "Select at least one practicing court".to_string(),
        );
    }
    if !validators::non_empty_set(&form.specializations) {
        errors.insert(
            FieldId::Specializations,
            "Select at least one area of specialization".to_string(),
        );
    }
    if !validators::required_field(&form.city) {
        errors.insert(FieldId::City, "City is required".to_string());
    }
    if !validators::required_field(&form.state) {
        errors.insert(FieldId::State, "State is required".to_string());
    }

    // Documents
    if !validators::file(form.file(FileField::BarIdProof), true) {
        errors.insert(
            FieldId::BarIdProof,
            "Bar Council ID proof is required (max 5MB)".to_string(),
        );
    }
    if !validators::file(form.file(FileField::ProfilePicture), false) {
        errors.insert(
            FieldId::ProfilePicture,
            "Profile picture must be less than 5MB".to_string(),
        );
    }

    // Availability
    if !validators::non_empty_set(&form.available_days) {
        errors.insert(
            FieldId::AvailableDays,
            "Select at least one available day".to_string(),
        );
    }
    if !validators::non_empty_set(&form.available_time_slots) {
        errors.insert(
            FieldId::AvailableTimeSlots,
            "Select at least one available time slot".to_string(),
        );
    }
    if !form.consent_profile_visibility {
        errors.insert(
            FieldId::ConsentProfileVisibility,
            "You must consent to profile visibility".to_string(),
        );
    }

    // Account
    if !validators::password(&form.password) {
        errors.insert(
            FieldId::Password,
            "Password must contain at least 8 characters, including letters, numbers, and special characters"
                .to_string(),
        );
    }
    if form.password != form.confirm_password {
        errors.insert(
            FieldId::ConfirmPassword,
            "Passwords do not match".to_string(),
        );
    }
    if !form.agree_to_terms {
        errors.insert(
            FieldId::AgreeToTerms,
            "You must agree to the terms and conditions".to_string(),
        );
    }

    errors
}

/// The form may be submitted iff no rule failed.
pub fn is_valid(errors: &ErrorMap) -> bool {
    errors.is_empty()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::state::{FileAttachment, FormAction, SetField, TextField};
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    /// A form that passes every rule, for tests to knock fields out of.
    pub(crate) fn valid_form() -> RegistrationForm {
        let mut form = RegistrationForm::new();
        form.full_name = "Asha Rao".to_string();
        form.mobile_number = "9876543210".to_string();
        form.email = "new@example.com".to_string();
        form.bar_council_number = "MH/1234/2015".to_string();
        form.experience_years = "12".to_string();
        form.consultation_fee = "500".to_string();
        form.practicing_courts.insert("High Court".to_string());
        form.specializations.insert("Criminal Law".to_string());
        form.city = "Pune".to_string();
        form.state = "Maharashtra".to_string();
        form.languages.insert("Marathi".to_string());
        form.available_days.insert("Monday".to_string());
        form.available_time_slots
            .insert("Morning (9AM-12PM)".to_string());
        form.consent_profile_visibility = true;
        form.password = "Abcdef1!".to_string();
        form.confirm_password = "Abcdef1!".to_string();
        form.agree_to_terms = true;
        form.bar_id_proof = Some(FileAttachment::new(
            PathBuf::from("proof.pdf"),
            2 * 1024 * 1024,
        ));
        form
    }

    #[test]
    fn test_valid_form_produces_empty_map() {
        let errors = validate(&valid_form());
        assert_eq!(errors, ErrorMap::new());
        assert!(is_valid(&errors));
    }

    #[test]
    fn test_idempotent_on_unchanged_state() {
        let mut form = valid_form();
        form.email = "not-an-email".to_string();
        form.practicing_courts.clear();

        let first = validate(&form);
        let second = validate(&form);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_form_fails_every_required_rule() {
        let errors = validate(&RegistrationForm::new());
        for id in [
            FieldId::FullName,
            FieldId::MobileNumber,
            FieldId::Email,
            FieldId::BarCouncilNumber,
            FieldId::ExperienceYears,
            FieldId::PracticingCourts,
            FieldId::Specializations,
            FieldId::City,
            FieldId::State,
            FieldId::BarIdProof,
            FieldId::AvailableDays,
            FieldId::AvailableTimeSlots,
            FieldId::ConsentProfileVisibility,
            FieldId::Password,
            FieldId::AgreeToTerms,
        ] {
            assert!(errors.contains_key(&id), "expected error for {id:?}");
        }
        // Optional fields stay clean on an empty form
        assert!(!errors.contains_key(&FieldId::ConsultationFee));
        assert!(!errors.contains_key(&FieldId::ProfilePicture));
        assert!(!errors.contains_key(&FieldId::OngoingCases));
    }

    #[test]
    fn test_no_short_circuit_between_fields() {
        let mut form = valid_form();
        form.practicing_courts.clear();
        form.specializations.clear();

        let errors = validate(&form);
        assert_eq!(
            errors.get(&FieldId::PracticingCourts).map(String::as_str),
            Some("Select at least one practicing court")
        );
        assert_eq!(
            errors.get(&FieldId::Specializations).map(String::as_str),
            Some("Select at least one area of specialization")
        );
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_consultation_fee_optional_but_numeric() {
        let mut form = valid_form();
        form.consultation_fee = String::new();
        assert!(is_valid(&validate(&form)));

        form.consultation_fee = "five hundred".to_string();
        let errors = validate(&form);
        assert_eq!(
            errors.get(&FieldId::ConsultationFee).map(String::as_str),
            Some("Consultation fee must be a valid number")
        );
    }

    #[test]
    fn test_oversized_proof_rejected() {
        let mut form = valid_form();
        form.bar_id_proof = Some(FileAttachment::new(
            PathBuf::from("proof.pdf"),
            6 * 1024 * 1024,
        ));
        let errors = validate(&form);
        assert!(errors.contains_key(&FieldId::BarIdProof));
    }

    #[test]
    fn test_oversized_optional_picture_rejected() {
        let mut form = valid_form();
        form.profile_picture = Some(FileAttachment::new(
            PathBuf::from("photo.png"),
            6 * 1024 * 1024,
        ));
        let errors = validate(&form);
        assert_eq!(
            errors.get(&FieldId::ProfilePicture).map(String::as_str),
            Some("Profile picture must be less than 5MB")
        );
    }

    #[test]
    fn test_weak_password_flagged_independently_of_match() {
        let mut form = valid_form();
        // Matching but only 7 characters
        form.password = "abc123!".to_string();
        form.confirm_password = "abc123!".to_string();

        let errors = validate(&form);
        assert!(errors.contains_key(&FieldId::Password));
        assert!(!errors.contains_key(&FieldId::ConfirmPassword));
    }

    #[test]
    fn test_password_mismatch_flagged() {
        let mut form = valid_form();
        form.confirm_password = "Abcdef1?".to_string();
        let errors = validate(&form);
        assert_eq!(
            errors.get(&FieldId::ConfirmPassword).map(String::as_str),
            Some("Passwords do not match")
        );
    }

    #[test]
    fn test_validation_through_reducer_updates() {
        // Mutating via the transition function keeps the aggregator in step
        let mut form = valid_form();
        form.apply(FormAction::SetText(TextField::Email, "broken".to_string()));
        assert!(validate(&form).contains_key(&FieldId::Email));

        form.apply(FormAction::SetText(
            TextField::Email,
            "fixed@example.com".to_string(),
        ));
        form.apply(FormAction::ToggleOption(
            SetField::Languages,
            "Hindi".to_string(),
        ));
        assert!(is_valid(&validate(&form)));
    }
}
