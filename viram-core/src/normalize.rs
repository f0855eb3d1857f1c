//! Rewrites legacy Malayalam chillu spellings to their atomic codepoints.
//!
//! Before Unicode 5.1 a chillu was spelled as consonant + virama + ZWJ;
//! modern text uses dedicated atomic letters (U+0D7A..U+0D7F). Hyphenation
//! expects the modern forms, so callers run this rewrite first. Two `ന്റ്`
//! idioms misspelled with an atomic ൻ are folded back to their canonical
//! spelling at the same time.

/// Ordered literal replacements. The chillu rewrites run first so the ൻ
/// produced by them is seen by the `ന്റ്` fixups below.
const REPLACEMENTS: &[(&str, &str)] = &[
    ("ന്\u{200D}", "ൻ"),
    ("ര്\u{200D}", "ർ"),
    ("ള്\u{200D}", "ൾ"),
    ("ണ്\u{200D}", "ൺ"),
    ("ല്\u{200D}", "ൽ"),
    ("ക്\u{200D}", "ൿ"),
    ("ൻ്റ്", "ന്റ്"),
    ("ൻറ്", "ന്റ്"),
];

/// Returns `text` with every legacy chillu spelling replaced.
///
/// Pure input→output; text in other scripts passes through untouched.
pub fn normalize_chillu(text: &str) -> String {
    let mut text = text.to_owned();
    for (legacy, modern) in REPLACEMENTS {
        text = text.replace(legacy, modern);
    }
    text
}
