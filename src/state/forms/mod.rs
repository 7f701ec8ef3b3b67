//! Form domain layer
//!
//! Type-safe field identifiers, the registration form itself, and the
//! reducer-style transition function the UI drives it through.

mod field;
mod form_state;

pub use field::{
    FieldId, FileAttachment, FileField, FlagField, NumericInput, SetField, TextField,
};
pub use form_state::{AdvocateApplication, FormAction, RegistrationForm};
