//! Pure field validators
//!
//! Every function here is synchronous, side-effect free, and total over
//! its input: no I/O, no shared state, testable with literal values.

use crate::state::{FileAttachment, NumericInput};
use std::collections::BTreeSet;

/// Maximum accepted document size: 5 MiB.
pub const MAX_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;

/// Characters that satisfy the password special-character requirement.
pub const PASSWORD_SPECIALS: &str = "@$!%*#?&";

/// A required text field: non-empty once trimmed.
pub fn required_field(value: &str) -> bool {
    !value.trim().is_empty()
}

/// A required numeric field: non-empty and a base-10 integer.
pub fn required_number(value: &str) -> bool {
    matches!(NumericInput::parse(value), NumericInput::Valid(_))
}

/// Email shape check: `local@domain.tld` where no part contains
/// whitespace or an extra `@`.
pub fn email(value: &str) -> bool {
    let mut parts = value.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || local.chars().any(char::is_whitespace) {
        return false;
    }
    let Some(dot) = domain.rfind('.') else {
        return false;
    };
    let (host, tld) = (&domain[..dot], &domain[dot + 1..]);
    !host.is_empty()
        && !tld.is_empty()
        && !domain.chars().any(char::is_whitespace)
}

/// Indian mobile number: exactly 10 ASCII digits.
pub fn mobile_number(value: &str) -> bool {
    value.len() == 10 && value.chars().all(|c| c.is_ascii_digit())
}

/// Password strength: at least 8 characters including a letter, a digit,
/// and one of [`PASSWORD_SPECIALS`].
pub fn password(value: &str) -> bool {
    value.chars().count() >= 8
        && value.chars().any(|c| c.is_ascii_alphabetic())
        && value.chars().any(|c| c.is_ascii_digit())
        && value.chars().any(|c| PASSWORD_SPECIALS.contains(c))
}

/// Bar Council registration number.
///
/// TODO: replace with the real Bar Council format once the regulatory
/// specification is available; length >= 4 is a stand-in.
pub fn bar_council_number(value: &str) -> bool {
    value.len() >= 4
}

/// A required multi-select: at least one option chosen.
pub fn non_empty_set(values: &BTreeSet<String>) -> bool {
    !values.is_empty()
}

/// Document attachment: must exist when required, and never exceed
/// [`MAX_FILE_SIZE_BYTES`]. An absent optional attachment passes.
pub fn file(attachment: Option<&FileAttachment>, required: bool) -> bool {
    match attachment {
        None => !required,
        Some(f) => f.size_bytes <= MAX_FILE_SIZE_BYTES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn attachment(size_bytes: u64) -> FileAttachment {
        FileAttachment::new(PathBuf::from("proof.pdf"), size_bytes)
    }

    mod required_field {
        use super::super::*;

        #[test]
        fn test_rejects_empty_and_whitespace() {
            assert!(!required_field(""));
            assert!(!required_field("   "));
            assert!(!required_field("\t\n"));
        }

        #[test]
        fn test_accepts_text() {
            assert!(required_field("Asha Rao"));
            assert!(required_field(" x "));
        }
    }

    mod required_number {
        use super::super::*;

        #[test]
        fn test_rejects_empty_and_non_numeric() {
            assert!(!required_number(""));
            assert!(!required_number("  "));
            assert!(!required_number("ten"));
            assert!(!required_number("3.5"));
        }

        #[test]
        fn test_accepts_integers() {
            assert!(required_number("0"));
            assert!(required_number("12"));
            assert!(required_number(" 500 "));
        }
    }

    mod email {
        use super::super::*;

        #[test]
        fn test_accepts_plain_addresses() {
            assert!(email("new@example.com"));
            assert!(email("a.b+c@mail.example.org"));
        }

        #[test]
        fn test_rejects_missing_parts() {
            assert!(!email(""));
            assert!(!email("no-at-sign.com"));
            assert!(!email("@example.com"));
            assert!(!email("user@"));
            assert!(!email("user@nodot"));
            assert!(!email("user@.com"));
            assert!(!email("user@domain."));
        }

        #[test]
        fn test_rejects_whitespace_and_double_at() {
            assert!(!email("a b@example.com"));
            assert!(!email("a@b@example.com"));
            assert!(!email("a@exa mple.com"));
        }
    }

    mod mobile_number {
        use super::super::*;

        #[test]
        fn test_accepts_ten_digits() {
            assert!(mobile_number("9876543210"));
            assert!(mobile_number("0000000000"));
        }

        #[test]
        fn test_rejects_everything_else() {
            assert!(!mobile_number(""));
            assert!(!mobile_number("987654321"));
            assert!(!mobile_number("98765432100"));
            assert!(!mobile_number("98765 4321"));
            assert!(!mobile_number("98765o4321"));
            assert!(!mobile_number("+919876543"));
        }
    }

    mod password {
        use super::super::*;

        #[test]
        fn test_accepts_strong_password() {
            assert!(password("Abcdef1!"));
            assert!(password("p4ssw0rd&extra"));
        }

        #[test]
        fn test_rejects_short() {
            // All classes present but only 7 characters
            assert!(!password("abc123!"));
        }

        #[test]
        fn test_rejects_missing_character_class() {
            assert!(!password("abcdefgh1")); // no special
            assert!(!password("abcdefg!")); // no digit
            assert!(!password("1234567!")); // no letter
        }

        #[test]
        fn test_special_set_is_exact() {
            // '^' is not in the accepted special set
            assert!(!password("Abcdef1^"));
            for c in PASSWORD_SPECIALS.chars() {
                assert!(password(&format!("Abcdef1{c}")));
            }
        }
    }

    mod bar_council_number {
        use super::super::*;

        #[test]
        fn test_length_threshold() {
            assert!(!bar_council_number(""));
            assert!(!bar_council_number("BAR"));
            assert!(bar_council_number("BAR1"));
            assert!(bar_council_number("MH/1234/2015"));
        }
    }

    mod sets_and_files {
        use super::*;
        use std::collections::BTreeSet;

        #[test]
        fn test_non_empty_set() {
            let mut set = BTreeSet::new();
            assert!(!non_empty_set(&set));
            set.insert("High Court".to_string());
            assert!(non_empty_set(&set));
        }

        #[test]
        fn test_required_file_must_be_present() {
            assert!(!file(None, true));
            assert!(file(None, false));
        }

        #[test]
        fn test_file_size_limit_is_5_mib() {
            assert!(file(Some(&attachment(2 * 1024 * 1024)), true));
            assert!(file(Some(&attachment(MAX_FILE_SIZE_BYTES)), true));
            assert!(!file(Some(&attachment(MAX_FILE_SIZE_BYTES + 1)), true));
            assert!(!file(Some(&attachment(6 * 1024 * 1024)), false));
        }
    }
}
