//! Validation core: pure field validators and the form-level aggregator

mod aggregator;
pub mod validators;

pub use aggregator::{is_valid, validate, ErrorMap};

#[cfg(test)]
pub(crate) use aggregator::tests::valid_form;
