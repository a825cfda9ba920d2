//! Phone number normalization rules.

use arogya_messaging::error::MessagingError;
use arogya_messaging::phone::normalize;

#[test]
fn bare_ten_digits_default_to_india() {
    assert_eq!(normalize("9876543210").unwrap(), "+919876543210");
    assert_eq!(normalize("98765 43210").unwrap(), "+919876543210");
}

#[test]
fn twelve_digits_with_country_code_pass_through() {
    assert_eq!(normalize("919876543210").unwrap(), "+919876543210");
    assert_eq!(normalize("+91 98765-43210").unwrap(), "+919876543210");
}

#[test]
fn north_american_numbers_keep_their_code() {
    assert_eq!(normalize("16182681153").unwrap(), "+16182681153");
    assert_eq!(normalize("+1 (618) 268-1153").unwrap(), "+16182681153");
}

#[test]
fn other_country_codes_are_left_alone() {
    assert_eq!(normalize("+442071838750").unwrap(), "+442071838750");
}

#[test]
fn formatting_is_stripped() {
    assert_eq!(normalize("(987) 654-3210").unwrap(), "+919876543210");
}

#[test]
fn short_numbers_are_rejected() {
    for bad in ["", "12345", "98765-4321"] {
        assert!(
            matches!(normalize(bad), Err(MessagingError::InvalidPhone(_))),
            "{bad:?} should be rejected"
        );
    }
}
