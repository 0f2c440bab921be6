//! Label canonicalization
//!
//! Turns a raw label into its canonical name in five stages:
//!
//! 1. Full Unicode case folding
//! 2. Canonical decomposition (NFD)
//! 3. Removal of nonspacing marks (general category Mn)
//! 4. Canonical composition (NFC)
//! 5. Removal of everything that is not a letter (general category L)
//!
//! Every stage is a total `&str -> String` function, so any Unicode input
//! produces a (possibly empty) result.

use unicode_casefold::UnicodeCaseFold;
use unicode_general_category::{get_general_category, GeneralCategory};
use unicode_normalization::UnicodeNormalization;

/// Canonicalize a raw label.
///
/// ```
/// use namefold_core::canonicalize;
///
/// assert_eq!(canonicalize("España"), "espana");
/// assert_eq!(canonicalize("SPAIN!"), "spain");
/// assert_eq!(canonicalize("123"), "");
/// ```
pub fn canonicalize(raw: &str) -> String {
    let folded = fold_case(raw);
    let decomposed = decompose(&folded);
    let unmarked = strip_nonspacing_marks(&decomposed);
    let recomposed = recompose(&unmarked);
    retain_letters(&recomposed)
}

/// Full Unicode case folding (`ß` becomes `ss`, `ς` becomes `σ`).
pub fn fold_case(s: &str) -> String {
    s.chars().case_fold().collect()
}

/// Canonical decomposition, separating base letters from combining marks.
pub fn decompose(s: &str) -> String {
    s.nfd().collect()
}

pub fn strip_nonspacing_marks(s: &str) -> String {
    s.chars().filter(|c| !is_nonspacing_mark(*c)).collect()
}

/// Canonical composition.
pub fn recompose(s: &str) -> String {
    s.nfc().collect()
}

/// Drop punctuation, digits, symbols, whitespace and any remaining marks.
pub fn retain_letters(s: &str) -> String {
    s.chars().filter(|c| is_letter(*c)).collect()
}

pub fn is_nonspacing_mark(c: char) -> bool {
    matches!(get_general_category(c), GeneralCategory::NonspacingMark)
}

/// Whether `c` is in one of the letter categories (Lu, Ll, Lt, Lm, Lo).
pub fn is_letter(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}
