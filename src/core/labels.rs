//! Captions that depend on the selected target language.

use crate::core::constants::HINGLISH_LANGUAGE_CODE;

const HINGLISH_LABEL: &str = "Hinglish Version (Easy to understand)";
const ROMANIZED_LABEL: &str = "Pronunciation in English Script";
const HINGLISH_HELPER: &str =
    "This version uses a mix of Hindi and English words for better understanding";
const ROMANIZED_HELPER: &str = "This shows how to pronounce the text in English script";

fn is_hinglish_target(target_code: &str) -> bool {
    target_code == HINGLISH_LANGUAGE_CODE
}

/// Caption for the transliteration field.
pub fn pronunciation_label(target_code: &str) -> &'static str {
    if is_hinglish_target(target_code) {
        HINGLISH_LABEL
    } else {
        ROMANIZED_LABEL
    }
}

/// Explanatory line shown under the transliteration field.
pub fn pronunciation_helper_text(target_code: &str) -> &'static str {
    if is_hinglish_target(target_code) {
        HINGLISH_HELPER
    } else {
        ROMANIZED_HELPER
    }
}
