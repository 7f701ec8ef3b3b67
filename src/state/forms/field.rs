//! Form field identifiers and value objects

use serde::Serialize;
use std::path::PathBuf;

/// Closed enumeration of every field on the registration form.
///
/// Validation errors are keyed by this type, so a typo in a field name is a
/// compile error rather than a silently missing error message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldId {
    FullName,
    MobileNumber,
    Email,
    BarCouncilNumber,
    ExperienceYears,
    ConsultationFee,
    PracticingCourts,
    Specializations,
    City,
    State,
    Languages,
    OngoingCases,
    NotableCases,
    Awards,
    Publications,
    VirtualConsultation,
    InPersonMeeting,
    AvailableDays,
    AvailableTimeSlots,
    ConsentProfileVisibility,
    Password,
    ConfirmPassword,
    AgreeToTerms,
    BarIdProof,
    ProfilePicture,
}

/// Free-text fields (single or multi line).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    FullName,
    MobileNumber,
    Email,
    BarCouncilNumber,
    ExperienceYears,
    ConsultationFee,
    City,
    State,
    OngoingCases,
    NotableCases,
    Awards,
    Publications,
    Password,
    ConfirmPassword,
}

impl TextField {
    pub fn label(self) -> &'static str {
        match self {
            Self::FullName => "Full Name",
            Self::MobileNumber => "Mobile Number",
            Self::Email => "Email Address",
            Self::BarCouncilNumber => "Bar Council Registration Number",
            Self::ExperienceYears => "Years of Experience",
            Self::ConsultationFee => "Consultation Fee (optional)",
            Self::City => "City",
            Self::State => "State",
            Self::OngoingCases => "Ongoing Cases",
            Self::NotableCases => "Notable Cases",
            Self::Awards => "Awards & Recognition",
            Self::Publications => "Publications",
            Self::Password => "Password",
            Self::ConfirmPassword => "Confirm Password",
        }
    }

    pub fn id(self) -> FieldId {
        match self {
            Self::FullName => FieldId::FullName,
            Self::MobileNumber => FieldId::MobileNumber,
            Self::Email => FieldId::Email,
            Self::BarCouncilNumber => FieldId::BarCouncilNumber,
            Self::ExperienceYears => FieldId::ExperienceYears,
            Self::ConsultationFee => FieldId::ConsultationFee,
            Self::City => FieldId::City,
            Self::State => FieldId::State,
            Self::OngoingCases => FieldId::OngoingCases,
            Self::NotableCases => FieldId::NotableCases,
            Self::Awards => FieldId::Awards,
            Self::Publications => FieldId::Publications,
            Self::Password => FieldId::Password,
            Self::ConfirmPassword => FieldId::ConfirmPassword,
        }
    }
}

/// Multi-select fields backed by a set of option labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetField {
    PracticingCourts,
    Specializations,
    Languages,
    AvailableDays,
    AvailableTimeSlots,
}

impl SetField {
    pub fn label(self) -> &'static str {
        match self {
            Self::PracticingCourts => "Practicing Courts",
            Self::Specializations => "Areas of Specialization",
            Self::Languages => "Languages Spoken",
            Self::AvailableDays => "Available Days",
            Self::AvailableTimeSlots => "Available Time Slots",
        }
    }

    pub fn id(self) -> FieldId {
        match self {
            Self::PracticingCourts => FieldId::PracticingCourts,
            Self::Specializations => FieldId::Specializations,
            Self::Languages => FieldId::Languages,
            Self::AvailableDays => FieldId::AvailableDays,
            Self::AvailableTimeSlots => FieldId::AvailableTimeSlots,
        }
    }
}

/// Boolean consent/availability toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagField {
    VirtualConsultation,
    InPersonMeeting,
    ConsentProfileVisibility,
    AgreeToTerms,
}

impl FlagField {
    pub fn label(self) -> &'static str {
        match self {
            Self::VirtualConsultation => "Available for Virtual Consultation",
            Self::InPersonMeeting => "Available for In-Person Meetings",
            Self::ConsentProfileVisibility => "I consent to my profile being visible to clients",
            Self::AgreeToTerms => "I agree to the Terms and Conditions",
        }
    }

    pub fn id(self) -> FieldId {
        match self {
            Self::VirtualConsultation => FieldId::VirtualConsultation,
            Self::InPersonMeeting => FieldId::InPersonMeeting,
            Self::ConsentProfileVisibility => FieldId::ConsentProfileVisibility,
            Self::AgreeToTerms => FieldId::AgreeToTerms,
        }
    }
}

/// Document upload slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileField {
    BarIdProof,
    ProfilePicture,
}

impl FileField {
    pub fn label(self) -> &'static str {
        match self {
            Self::BarIdProof => "Bar Council ID Proof (.jpg/.png/.pdf, max 5MB)",
            Self::ProfilePicture => "Profile Picture (.jpg/.png, max 5MB, optional)",
        }
    }

    pub fn id(self) -> FieldId {
        match self {
            Self::BarIdProof => FieldId::BarIdProof,
            Self::ProfilePicture => FieldId::ProfilePicture,
        }
    }

    /// Accepted file extensions (lowercase), matching the platform's
    /// upload policy: documents may be images or PDFs, the profile
    /// picture must be an image.
    pub fn accepted_extensions(self) -> &'static [&'static str] {
        match self {
            Self::BarIdProof => &["jpg", "jpeg", "png", "pdf"],
            Self::ProfilePicture => &["jpg", "jpeg", "png"],
        }
    }
}

/// Handle to an attached document.
///
/// Only the name and byte size are recorded; file content is never read
/// or uploaded by this client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileAttachment {
    pub file_name: String,
    #[serde(skip)]
    pub path: PathBuf,
    pub size_bytes: u64,
}

impl FileAttachment {
    pub fn new(path: PathBuf, size_bytes: u64) -> Self {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            file_name,
            path,
            size_bytes,
        }
    }

    /// Whether the file extension is on the accepted list for `field`.
    pub fn extension_allowed(&self, field: FileField) -> bool {
        let ext = self
            .path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        field.accepted_extensions().contains(&ext.as_str())
    }
}

/// A numeric text input resolved exactly once at validation time.
///
/// Raw form values stay strings; this classifies them instead of
/// scattering parse calls through the validation rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericInput {
    Empty,
    Valid(i64),
    Invalid,
}

impl NumericInput {
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::Empty;
        }
        match trimmed.parse::<i64>() {
            Ok(n) => Self::Valid(n),
            Err(_) => Self::Invalid,
        }
    }
}
