//! Application state definitions

use super::forms::{FileField, FlagField, RegistrationForm, SetField, TextField};
use super::options;
use super::submission::{SubmissionResult, SubmissionState};
use crate::validation::ErrorMap;

/// One focusable control on a section screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldSlot {
    /// Single-line text input
    Text(TextField),
    /// Multi-line text input
    Multiline(TextField),
    /// Masked text input
    Secret(TextField),
    /// Single choice from a closed list
    Select(TextField, &'static [&'static str]),
    /// Multi-select checkbox list
    Options(SetField, &'static [&'static str]),
    /// Boolean toggle
    Flag(FlagField),
    /// Document path input + attachment slot
    File(FileField),
    /// The submit button on the final section
    Submit,
}

impl FieldSlot {
    /// The validated field behind this control, if any.
    pub fn field_id(self) -> Option<crate::state::FieldId> {
        match self {
            Self::Text(f) | Self::Multiline(f) | Self::Secret(f) | Self::Select(f, _) => {
                Some(f.id())
            }
            Self::Options(f, _) => Some(f.id()),
            Self::Flag(f) => Some(f.id()),
            Self::File(f) => Some(f.id()),
            Self::Submit => None,
        }
    }
}

const PERSONAL_SLOTS: &[FieldSlot] = &[
    FieldSlot::Text(TextField::FullName),
    FieldSlot::Text(TextField::MobileNumber),
    FieldSlot::Text(TextField::Email),
    FieldSlot::Text(TextField::BarCouncilNumber),
    FieldSlot::Text(TextField::ExperienceYears),
    FieldSlot::Text(TextField::ConsultationFee),
];

const PROFESSIONAL_SLOTS: &[FieldSlot] = &[
    FieldSlot::Options(SetField::PracticingCourts, options::COURTS),
    FieldSlot::Options(SetField::Specializations, options::SPECIALIZATIONS),
    FieldSlot::Text(TextField::City),
    FieldSlot::Select(TextField::State, options::INDIAN_STATES),
    FieldSlot::Options(SetField::Languages, options::LANGUAGES),
];

const EXPERIENCE_SLOTS: &[FieldSlot] = &[
    FieldSlot::Multiline(TextField::OngoingCases),
    FieldSlot::Multiline(TextField::NotableCases),
    FieldSlot::Multiline(TextField::Awards),
    FieldSlot::Multiline(TextField::Publications),
];

const AVAILABILITY_SLOTS: &[FieldSlot] = &[
    FieldSlot::Flag(FlagField::VirtualConsultation),
    FieldSlot::Flag(FlagField::InPersonMeeting),
    FieldSlot::Options(SetField::AvailableDays, options::DAYS),
    FieldSlot::Options(SetField::AvailableTimeSlots, options::TIME_SLOTS),
    FieldSlot::Flag(FlagField::ConsentProfileVisibility),
];

const DOCUMENT_SLOTS: &[FieldSlot] = &[
    FieldSlot::File(FileField::BarIdProof),
    FieldSlot::File(FileField::ProfilePicture),
];

const ACCOUNT_SLOTS: &[FieldSlot] = &[
    FieldSlot::Secret(TextField::Password),
    FieldSlot::Secret(TextField::ConfirmPassword),
    FieldSlot::Flag(FlagField::AgreeToTerms),
    FieldSlot::Submit,
];

/// The six sections of the registration form, shown one per screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Personal,
    Professional,
    Experience,
    Availability,
    Documents,
    Account,
}

impl Section {
    pub const ALL: &'static [Section] = &[
        Self::Personal,
        Self::Professional,
        Self::Experience,
        Self::Availability,
        Self::Documents,
        Self::Account,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Personal => "Personal Info",
            Self::Professional => "Professional Info",
            Self::Experience => "Experience",
            Self::Availability => "Availability",
            Self::Documents => "Documents",
            Self::Account => "Account",
        }
    }

    pub fn slots(self) -> &'static [FieldSlot] {
        match self {
            Self::Personal => PERSONAL_SLOTS,
            Self::Professional => PROFESSIONAL_SLOTS,
            Self::Experience => EXPERIENCE_SLOTS,
            Self::Availability => AVAILABILITY_SLOTS,
            Self::Documents => DOCUMENT_SLOTS,
            Self::Account => ACCOUNT_SLOTS,
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::Personal => Self::Professional,
            Self::Professional => Self::Experience,
            Self::Experience => Self::Availability,
            Self::Availability => Self::Documents,
            Self::Documents => Self::Account,
            Self::Account => Self::Personal,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Personal => Self::Account,
            Self::Professional => Self::Personal,
            Self::Experience => Self::Professional,
            Self::Availability => Self::Experience,
            Self::Documents => Self::Availability,
            Self::Account => Self::Documents,
        }
    }
}

/// Top-level mutable state for the registration session.
#[derive(Debug, Default)]
pub struct AppState {
    pub form: RegistrationForm,
    /// Per-field messages from the last validation pass
    pub errors: ErrorMap,
    /// Set after the first failed submit; from then on every form action
    /// re-runs validation
    pub live_validation: bool,
    pub submission: SubmissionState,
    pub last_result: Option<SubmissionResult>,
    pub section: Section,
    pub active_field: usize,
    /// Cursor inside the option list of a focused multi-select/select slot
    pub option_cursor: usize,
    /// Path being typed for the bar ID proof attachment
    pub bar_id_proof_input: String,
    /// Path being typed for the profile picture attachment
    pub profile_picture_input: String,
    pub status_message: Option<String>,
    pub should_quit: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            form: RegistrationForm::new(),
            ..Default::default()
        }
    }

    pub fn active_slot(&self) -> FieldSlot {
        let slots = self.section.slots();
        slots[self.active_field.min(slots.len() - 1)]
    }

    pub fn next_field(&mut self) {
        let count = self.section.slots().len();
        self.active_field = (self.active_field + 1) % count;
        self.option_cursor = 0;
    }

    pub fn prev_field(&mut self) {
        let count = self.section.slots().len();
        self.active_field = (self.active_field + count - 1) % count;
        self.option_cursor = 0;
    }

    pub fn next_section(&mut self) {
        self.section = self.section.next();
        self.active_field = 0;
        self.option_cursor = 0;
    }

    pub fn prev_section(&mut self) {
        self.section = self.section.prev();
        self.active_field = 0;
        self.option_cursor = 0;
    }

    pub fn error_for(&self, id: crate::state::FieldId) -> Option<&str> {
        self.errors.get(&id).map(String::as_str)
    }

    pub fn file_input(&self, field: FileField) -> &str {
        match field {
            FileField::BarIdProof => &self.bar_id_proof_input,
            FileField::ProfilePicture => &self.profile_picture_input,
        }
    }

    pub fn file_input_mut(&mut self, field: FileField) -> &mut String {
        match field {
            FileField::BarIdProof => &mut self.bar_id_proof_input,
            FileField::ProfilePicture => &mut self.profile_picture_input,
        }
    }
}
