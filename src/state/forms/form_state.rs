//! Registration form state and its reducer

use super::field::{FileAttachment, FileField, FlagField, SetField, TextField};
use serde::Serialize;
use std::collections::BTreeSet;

/// A single state transition on the form.
///
/// Every mutation the UI can perform is one of these variants, applied
/// through [`RegistrationForm::apply`]. Field/value mismatches (toggling
/// an option on a text field, say) cannot be expressed.
#[derive(Debug, Clone, PartialEq)]
pub enum FormAction {
    SetText(TextField, String),
    PushChar(TextField, char),
    PopChar(TextField),
    ToggleOption(SetField, String),
    ToggleFlag(FlagField),
    AttachFile(FileField, FileAttachment),
    ClearFile(FileField),
}

/// All data collected by the registration form.
///
/// Owned by the application state for the lifetime of the page session;
/// mutated exclusively through [`RegistrationForm::apply`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistrationForm {
    // Basic information
    pub full_name: String,
    pub mobile_number: String,
    pub email: String,
    pub bar_council_number: String,
    pub experience_years: String,
    pub consultation_fee: String,
    pub practicing_courts: BTreeSet<String>,
    pub specializations: BTreeSet<String>,
    pub city: String,
    pub state: String,
    pub languages: BTreeSet<String>,

    // Detailed experience (free text, never validated)
    pub ongoing_cases: String,
    pub notable_cases: String,
    pub awards: String,
    pub publications: String,

    // Availability
    pub virtual_consultation: bool,
    pub in_person_meeting: bool,
    pub available_days: BTreeSet<String>,
    pub available_time_slots: BTreeSet<String>,
    pub consent_profile_visibility: bool,

    // Account
    pub password: String,
    pub confirm_password: String,
    pub agree_to_terms: bool,

    // Documents
    pub bar_id_proof: Option<FileAttachment>,
    pub profile_picture: Option<FileAttachment>,
}

impl RegistrationForm {
    /// Fresh form with the platform defaults (both consultation modes
    /// offered until the advocate opts out).
    pub fn new() -> Self {
        Self {
            virtual_consultation: true,
            in_person_meeting: true,
            ..Default::default()
        }
    }

    /// The single transition function: `(state, action) -> state`.
    pub fn apply(&mut self, action: FormAction) {
        match action {
            FormAction::SetText(field, value) => *self.text_mut(field) = value,
            FormAction::PushChar(field, c) => self.text_mut(field).push(c),
            FormAction::PopChar(field) => {
                self.text_mut(field).pop();
            }
            FormAction::ToggleOption(field, option) => {
                let set = self.options_mut(field);
                if !set.remove(&option) {
                    set.insert(option);
                }
            }
            FormAction::ToggleFlag(field) => {
                let flag = self.flag_mut(field);
                *flag = !*flag;
            }
            FormAction::AttachFile(field, attachment) => {
                *self.file_mut(field) = Some(attachment);
            }
            FormAction::ClearFile(field) => *self.file_mut(field) = None,
        }
    }

    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::FullName => &self.full_name,
            TextField::MobileNumber => &self.mobile_number,
            TextField::Email => &self.email,
            TextField::BarCouncilNumber => &self.bar_council_number,
            TextField::ExperienceYears => &self.experience_years,
            TextField::ConsultationFee => &self.consultation_fee,
            TextField::City => &self.city,
            TextField::State => &self.state,
            TextField::OngoingCases => &self.ongoing_cases,
            TextField::NotableCases => &self.notable_cases,
            TextField::Awards => &self.awards,
            TextField::Publications => &self.publications,
            TextField::Password => &self.password,
            TextField::ConfirmPassword => &self.confirm_password,
        }
    }

    fn text_mut(&mut self, field: TextField) -> &mut String {
        match field {
            TextField::FullName => &mut self.full_name,
            TextField::MobileNumber => &mut self.mobile_number,
            TextField::Email => &mut self.email,
            TextField::BarCouncilNumber => &mut self.bar_council_number,
            TextField::ExperienceYears => &mut self.experience_years,
            TextField::ConsultationFee => &mut self.consultation_fee,
            TextField::City => &mut self.city,
            TextField::State => &mut self.state,
            TextField::OngoingCases => &mut self.ongoing_cases,
            TextField::NotableCases => &mut self.notable_cases,
            TextField::Awards => &mut self.awards,
            TextField::Publications => &mut self.publications,
            TextField::Password => &mut self.password,
            TextField::ConfirmPassword => &mut self.confirm_password,
        }
    }

    pub fn options(&self, field: SetField) -> &BTreeSet<String> {
        match field {
            SetField::PracticingCourts => &self.practicing_courts,
            SetField::Specializations => &self.specializations,
            SetField::Languages => &self.languages,
            SetField::AvailableDays => &self.available_days,
            SetField::AvailableTimeSlots => &self.available_time_slots,
        }
    }

    fn options_mut(&mut self, field: SetField) -> &mut BTreeSet<String> {
        match field {
            SetField::PracticingCourts => &mut self.practicing_courts,
            SetField::Specializations => &mut self.specializations,
            SetField::Languages => &mut self.languages,
            SetField::AvailableDays => &mut self.available_days,
            SetField::AvailableTimeSlots => &mut self.available_time_slots,
        }
    }

    pub fn flag(&self, field: FlagField) -> bool {
        match field {
            FlagField::VirtualConsultation => self.virtual_consultation,
            FlagField::InPersonMeeting => self.in_person_meeting,
            FlagField::ConsentProfileVisibility => self.consent_profile_visibility,
            FlagField::AgreeToTerms => self.agree_to_terms,
        }
    }

    fn flag_mut(&mut self, field: FlagField) -> &mut bool {
        match field {
            FlagField::VirtualConsultation => &mut self.virtual_consultation,
            FlagField::InPersonMeeting => &mut self.in_person_meeting,
            FlagField::ConsentProfileVisibility => &mut self.consent_profile_visibility,
            FlagField::AgreeToTerms => &mut self.agree_to_terms,
        }
    }

    pub fn file(&self, field: FileField) -> Option<&FileAttachment> {
        match field {
            FileField::BarIdProof => self.bar_id_proof.as_ref(),
            FileField::ProfilePicture => self.profile_picture.as_ref(),
        }
    }

    fn file_mut(&mut self, field: FileField) -> &mut Option<FileAttachment> {
        match field {
            FileField::BarIdProof => &mut self.bar_id_proof,
            FileField::ProfilePicture => &mut self.profile_picture,
        }
    }

    /// Flatten the form into the payload the registration service accepts.
    pub fn to_application(&self) -> AdvocateApplication {
        AdvocateApplication {
            full_name: self.full_name.clone(),
            mobile_number: self.mobile_number.clone(),
            email: self.email.clone(),
            bar_council_number: self.bar_council_number.clone(),
            experience_years: self.experience_years.clone(),
            consultation_fee: self.consultation_fee.clone(),
            practicing_courts: self.practicing_courts.iter().cloned().collect(),
            specializations: self.specializations.iter().cloned().collect(),
            city: self.city.clone(),
            state: self.state.clone(),
            languages: self.languages.iter().cloned().collect(),
            ongoing_cases: self.ongoing_cases.clone(),
            notable_cases: self.notable_cases.clone(),
            awards: self.awards.clone(),
            publications: self.publications.clone(),
            virtual_consultation: self.virtual_consultation,
            in_person_meeting: self.in_person_meeting,
            available_days: self.available_days.iter().cloned().collect(),
            available_time_slots: self.available_time_slots.iter().cloned().collect(),
            password: self.password.clone(),
            bar_id_proof: self.bar_id_proof.clone(),
            profile_picture: self.profile_picture.clone(),
        }
    }
}

/// Flattened registration record submitted to the backend.
#[derive(Debug, Clone, Serialize)]
pub struct AdvocateApplication {
    pub full_name: String,
    pub mobile_number: String,
    pub email: String,
    pub bar_council_number: String,
    pub experience_years: String,
    pub consultation_fee: String,
    pub practicing_courts: Vec<String>,
    pub specializations: Vec<String>,
    pub city: String,
    pub state: String,
    pub languages: Vec<String>,
    pub ongoing_cases: String,
    pub notable_cases: String,
    pub awards: String,
    pub publications: String,
    pub virtual_consultation: bool,
    pub in_person_meeting: bool,
    pub available_days: Vec<String>,
    pub available_time_slots: Vec<String>,
    pub password: String,
    pub bar_id_proof: Option<FileAttachment>,
    pub profile_picture: Option<FileAttachment>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    mod reducer {
        use super::*;

        #[test]
        fn test_new_defaults_consultation_modes_on() {
            let form = RegistrationForm::new();
            assert!(form.virtual_consultation);
            assert!(form.in_person_meeting);
            assert!(!form.agree_to_terms);
            assert!(!form.consent_profile_visibility);
        }

        #[test]
        fn test_set_text_replaces_value() {
            let mut form = RegistrationForm::new();
            form.apply(FormAction::SetText(
                TextField::FullName,
                "Asha Rao".to_string(),
            ));
            assert_eq!(form.full_name, "Asha Rao");
        }

        #[test]
        fn test_push_and_pop_char() {
            let mut form = RegistrationForm::new();
            form.apply(FormAction::PushChar(TextField::City, 'P'));
            form.apply(FormAction::PushChar(TextField::City, 'u'));
            form.apply(FormAction::PushChar(TextField::City, 'x'));
            form.apply(FormAction::PopChar(TextField::City));
            assert_eq!(form.city, "Pu");
        }

        #[test]
        fn test_pop_char_on_empty_is_noop() {
            let mut form = RegistrationForm::new();
            form.apply(FormAction::PopChar(TextField::Email));
            assert_eq!(form.email, "");
        }

        #[test]
        fn test_toggle_option_adds_then_removes() {
            let mut form = RegistrationForm::new();
            form.apply(FormAction::ToggleOption(
                SetField::PracticingCourts,
                "High Court".to_string(),
            ));
            assert!(form.practicing_courts.contains("High Court"));

            form.apply(FormAction::ToggleOption(
                SetField::PracticingCourts,
                "High Court".to_string(),
            ));
            assert!(form.practicing_courts.is_empty());
        }

        #[test]
        fn test_toggle_option_is_set_semantics() {
            let mut form = RegistrationForm::new();
            form.apply(FormAction::ToggleOption(
                SetField::Languages,
                "Hindi".to_string(),
            ));
            form.apply(FormAction::ToggleOption(
                SetField::Languages,
                "English".to_string(),
            ));
            assert_eq!(form.languages.len(), 2);
        }

        #[test]
        fn test_toggle_flag() {
            let mut form = RegistrationForm::new();
            form.apply(FormAction::ToggleFlag(FlagField::AgreeToTerms));
            assert!(form.agree_to_terms);
            form.apply(FormAction::ToggleFlag(FlagField::AgreeToTerms));
            assert!(!form.agree_to_terms);
        }

        #[test]
        fn test_attach_and_clear_file() {
            let mut form = RegistrationForm::new();
            let attachment = FileAttachment::new(PathBuf::from("/tmp/proof.pdf"), 2048);
            form.apply(FormAction::AttachFile(
                FileField::BarIdProof,
                attachment.clone(),
            ));
            assert_eq!(form.bar_id_proof, Some(attachment));
            assert!(form.profile_picture.is_none());

            form.apply(FormAction::ClearFile(FileField::BarIdProof));
            assert!(form.bar_id_proof.is_none());
        }

        #[test]
        fn test_attach_replaces_previous_file() {
            let mut form = RegistrationForm::new();
            form.apply(FormAction::AttachFile(
                FileField::ProfilePicture,
                FileAttachment::new(PathBuf::from("old.png"), 10),
            ));
            form.apply(FormAction::AttachFile(
                FileField::ProfilePicture,
                FileAttachment::new(PathBuf::from("new.png"), 20),
            ));
            assert_eq!(form.profile_picture.unwrap().file_name, "new.png");
        }
    }

    mod application_payload {
        use super::*;

        #[test]
        fn test_to_application_flattens_sets_in_order() {
            let mut form = RegistrationForm::new();
            form.apply(FormAction::ToggleOption(
                SetField::Specializations,
                "Tax Law".to_string(),
            ));
            form.apply(FormAction::ToggleOption(
                SetField::Specializations,
                "Criminal Law".to_string(),
            ));
            let application = form.to_application();
            // BTreeSet iteration keeps the payload deterministic
            assert_eq!(
                application.specializations,
                vec!["Criminal Law".to_string(), "Tax Law".to_string()]
            );
        }

        #[test]
        fn test_to_application_carries_files() {
            let mut form = RegistrationForm::new();
            form.apply(FormAction::AttachFile(
                FileField::BarIdProof,
                FileAttachment::new(PathBuf::from("proof.jpg"), 100),
            ));
            let application = form.to_application();
            assert_eq!(application.bar_id_proof.unwrap().file_name, "proof.jpg");
            assert!(application.profile_picture.is_none());
        }

        #[test]
        fn test_application_serializes_without_paths() {
            let mut form = RegistrationForm::new();
            form.apply(FormAction::AttachFile(
                FileField::BarIdProof,
                FileAttachment::new(PathBuf::from("/home/a/proof.jpg"), 100),
            ));
            let json = serde_json::to_string(&form.to_application()).unwrap();
            assert!(json.contains("proof.jpg"));
            assert!(!json.contains("/home/a"));
        }
    }
}
