//! Syllable-boundary hyphenation for Tamil, Odia, Telugu, Kannada and
//! Malayalam text.
//!
//! Break points are inferred purely from Unicode codepoint classification:
//! no dictionary, no language model, no script detection. The five scripts'
//! codepoint ranges are merged per semantic class, so mixed-script input is
//! handled uniformly and anything outside those ranges passes through
//! unmodified.
//!
//! # Architecture
//!
//! - **Classification tables** ([`tables`]): per-script codepoint ranges
//!   mapped to semantic classes, merged into union membership tests.
//! - **Syllable matcher**: three ordered alternative syllable forms built
//!   from the union classes.
//! - **Break pipeline** ([`hyphenate`]): insert a marker before every
//!   syllable, then strip it wherever a break is unwanted; the default
//!   marker finalizes to soft hyphens (U+00AD).
//! - **Chillu normalizer** ([`normalize`]): rewrites legacy Malayalam
//!   chillu spellings to their atomic codepoints, meant to run before
//!   hyphenation.
//!
//! # Example
//!
//! ```rust
//! use viram_core::{hyphenate, Hyphenator};
//!
//! // The default marker finalizes to soft hyphens
//! assert_eq!(hyphenate("മലയാളം"), "മല\u{00AD}യാളം");
//!
//! // A visible marker stays in the output instead
//! let visible = Hyphenator::with_marker('-');
//! assert_eq!(visible.hyphenate("തിരുവനന്തപുരം"), "തിരു-വ-ന-ന്ത-പുരം");
//! ```

pub mod hyphenate;
pub mod normalize;
mod syllable;
pub mod tables;

pub use hyphenate::{hyphenate, Hyphenator, DEFAULT_MARKER, SOFT_HYPHEN, ZERO_WIDTH_SPACE};
pub use normalize::normalize_chillu;
pub use tables::{classify, CharacterClass, ClassRange, Script, NUKTA_PLACEHOLDER, ZWJ, ZWNJ};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_surface_round_trip() {
        // Normalization feeds hyphenation: the legacy chillu becomes the
        // atomic one and a single-letter word stays unbroken.
        let normalized = normalize_chillu("ന്\u{200D}");
        assert_eq!(normalized, "ൻ");
        assert_eq!(hyphenate(&normalized), "ൻ");
    }

    #[test]
    fn test_classify_is_exported() {
        let classes = classify('ക');
        assert!(classes.contains(&(Script::Malayalam, CharacterClass::Consonant)));
    }
}
