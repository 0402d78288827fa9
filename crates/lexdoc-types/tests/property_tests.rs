//! Property-based tests for the masking and label helpers.
//!
//! The helpers are total functions: any input must come back formatted or
//! untouched, never panic.

use lexdoc_types::format::{
    mask_cnpj, mask_cpf, mask_person_document, mask_phone, status_label,
};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // ============================================================
    // Totality
    // ============================================================

    #[test]
    fn masking_never_panics_on_arbitrary_input(input in ".*") {
        let _ = mask_cpf(&input);
        let _ = mask_cnpj(&input);
        let _ = mask_phone(&input);
        let _ = mask_person_document(&input);
        let _ = status_label(&input);
    }

    #[test]
    fn non_conforming_input_is_returned_unchanged(input in "[a-zA-Z ]{0,20}") {
        prop_assert_eq!(mask_cpf(&input), input.clone());
        prop_assert_eq!(mask_cnpj(&input), input.clone());
        prop_assert_eq!(mask_phone(&input), input.clone());
        prop_assert_eq!(mask_person_document(&input), input);
    }

    // ============================================================
    // Formatting shape
    // ============================================================

    #[test]
    fn cpf_masks_preserve_all_digits(digits in "[0-9]{11}") {
        let masked = mask_cpf(&digits);
        let back: String = masked.chars().filter(|c| c.is_ascii_digit()).collect();
        prop_assert_eq!(back, digits);
        prop_assert_eq!(masked.len(), 14);
    }

    #[test]
    fn cnpj_masks_preserve_all_digits(digits in "[0-9]{14}") {
        let masked = mask_cnpj(&digits);
        let back: String = masked.chars().filter(|c| c.is_ascii_digit()).collect();
        prop_assert_eq!(back, digits);
        prop_assert_eq!(masked.len(), 18);
    }

    #[test]
    fn person_document_picks_the_right_mask(digits in "[0-9]{11}|[0-9]{14}") {
        let masked = mask_person_document(&digits);
        if digits.len() == 11 {
            prop_assert_eq!(masked, mask_cpf(&digits));
        } else {
            prop_assert_eq!(masked, mask_cnpj(&digits));
        }
    }

    #[test]
    fn phone_masks_start_with_area_code(digits in "[0-9]{10,11}") {
        let masked = mask_phone(&digits);
        prop_assert!(masked.starts_with('('));
        prop_assert!(masked.contains(") "));
        prop_assert!(masked.contains('-'));
    }

    // ============================================================
    // Labels
    // ============================================================

    #[test]
    fn unknown_statuses_pass_through(status in "[a-z_]{1,20}") {
        let known = [
            "generated",
            "pending_revision",
            "under_revision",
            "approved",
            "awaiting_signature",
            "signed",
            "finalized",
        ];
        prop_assume!(!known.contains(&status.as_str()));
        prop_assert_eq!(status_label(&status), status);
    }
}
