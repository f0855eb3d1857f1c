//! Codepoint classification tables for the five supported scripts.
//!
//! Each script's Unicode block is carved into semantic classes (independent
//! vowel, consonant, matra, virama, ...) as one flat table of inclusive
//! ranges. For matching, the per-script ranges of a class are merged into a
//! single membership test, so the syllable matcher never needs to know which
//! script a codepoint came from, and mixed-script text is handled for free.
//!
//! A handful of script-agnostic codepoints (ZWNJ, ZWJ and a placeholder
//! combining mark) participate in several classes without belonging to any
//! script; they are folded into the union tests rather than the table.

use smallvec::SmallVec;

/// Zero width non-joiner.
pub const ZWNJ: char = '\u{200C}';

/// Zero width joiner.
pub const ZWJ: char = '\u{200D}';

/// Combining diaeresis, temporarily standing in for a nukta codepoint that
/// has not been assigned yet. Swap this constant once it is.
pub const NUKTA_PLACEHOLDER: char = '\u{0324}';

/// Scripts whose Unicode blocks the classifier knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Script {
    Tamil,
    Odia,
    Telugu,
    Kannada,
    Malayalam,
}

/// Semantic role a codepoint plays inside a written syllable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    /// A vowel letter that starts a syllable on its own.
    IndependentVowel,
    /// Anusvara, visarga and similar marks carried by a vowel.
    VowelModifier,
    /// A consonant letter, including Malayalam atomic chillu forms.
    Consonant,
    /// A nukta-style diacritic carried by a consonant.
    ConsonantModifier,
    /// A dependent vowel sign attached to a consonant.
    Matra,
    /// The sign that kills a consonant's inherent vowel.
    Virama,
    /// The word-forming superset, used only for boundary detection.
    Word,
}

/// An inclusive codepoint range carrying its script and class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassRange {
    pub script: Script,
    pub class: CharacterClass,
    pub start: u32,
    pub end: u32,
}

const fn range(script: Script, class: CharacterClass, start: u32, end: u32) -> ClassRange {
    ClassRange {
        script,
        class,
        start,
        end,
    }
}

use CharacterClass::*;
use Script::*;

/// Every (script, class) range the classifier knows about.
///
/// Within one (script, class) pair the ranges are disjoint by construction.
/// Across scripts they never collide either, since the scripts occupy
/// disjoint Unicode blocks; a codepoint may still land in several classes of
/// its own script (the Odia and Telugu viramas double as vowel modifiers,
/// and `Word` overlaps everything).
pub(crate) const RANGES: &[ClassRange] = &[
    // Independent vowels
    range(Tamil, IndependentVowel, 0x0B85, 0x0B94),
    range(Odia, IndependentVowel, 0x0B05, 0x0B14),
    range(Odia, IndependentVowel, 0x0B60, 0x0B61),
    range(Telugu, IndependentVowel, 0x0C05, 0x0C14),
    range(Telugu, IndependentVowel, 0x0C60, 0x0C61),
    range(Kannada, IndependentVowel, 0x0C85, 0x0C94),
    range(Kannada, IndependentVowel, 0x0CE0, 0x0CE1),
    range(Malayalam, IndependentVowel, 0x0D05, 0x0D14),
    range(Malayalam, IndependentVowel, 0x0D60, 0x0D61),
    // Vowel modifiers and stress marks
    range(Tamil, VowelModifier, 0x0B82, 0x0B82),
    range(Odia, VowelModifier, 0x0B01, 0x0B03),
    range(Odia, VowelModifier, 0x0B4D, 0x0B4D),
    range(Telugu, VowelModifier, 0x0C01, 0x0C03),
    range(Telugu, VowelModifier, 0x0C4D, 0x0C4D),
    range(Kannada, VowelModifier, 0x0C82, 0x0C83),
    range(Kannada, VowelModifier, 0x0CBD, 0x0CBD),
    range(Malayalam, VowelModifier, 0x0D02, 0x0D03),
    range(Malayalam, VowelModifier, 0x0D3D, 0x0D3D),
    // Consonants
    range(Tamil, Consonant, 0x0B95, 0x0BB9),
    range(Odia, Consonant, 0x0B15, 0x0B39),
    range(Odia, Consonant, 0x0B5C, 0x0B5D),
    range(Odia, Consonant, 0x0B5F, 0x0B5F),
    range(Odia, Consonant, 0x0B70, 0x0B71),
    range(Telugu, Consonant, 0x0C15, 0x0C39),
    range(Telugu, Consonant, 0x0C58, 0x0C59),
    range(Kannada, Consonant, 0x0C95, 0x0CB9),
    range(Kannada, Consonant, 0x0CDE, 0x0CDE),
    range(Malayalam, Consonant, 0x0D15, 0x0D39),
    // Historic chillu letters count as consonants
    range(Malayalam, Consonant, 0x0D7A, 0x0D7F),
    // Consonant modifiers (nuktas)
    range(Odia, ConsonantModifier, 0x0B3C, 0x0B3C),
    range(Kannada, ConsonantModifier, 0x0CBC, 0x0CBC),
    // Matras
    range(Tamil, Matra, 0x0BBC, 0x0BCC),
    range(Tamil, Matra, 0x0BD7, 0x0BD7),
    range(Odia, Matra, 0x0B3E, 0x0B4C),
    range(Odia, Matra, 0x0B56, 0x0B57),
    range(Odia, Matra, 0x0B62, 0x0B63),
    range(Telugu, Matra, 0x0C3E, 0x0C4C),
    range(Telugu, Matra, 0x0C55, 0x0C56),
    range(Telugu, Matra, 0x0C62, 0x0C63),
    range(Kannada, Matra, 0x0CBE, 0x0CCC),
    range(Kannada, Matra, 0x0CD5, 0x0CD6),
    range(Kannada, Matra, 0x0CE2, 0x0CE3),
    range(Malayalam, Matra, 0x0D3E, 0x0D4C),
    range(Malayalam, Matra, 0x0D57, 0x0D57),
    range(Malayalam, Matra, 0x0D62, 0x0D63),
    // Viramas
    range(Tamil, Virama, 0x0BCD, 0x0BCD),
    range(Odia, Virama, 0x0B4D, 0x0B4D),
    range(Telugu, Virama, 0x0C4D, 0x0C4D),
    range(Kannada, Virama, 0x0CCD, 0x0CCD),
    range(Malayalam, Virama, 0x0D4D, 0x0D4D),
    // Word-forming ranges
    range(Tamil, Word, 0x0B81, 0x0BE3),
    range(Odia, Word, 0x0B01, 0x0B63),
    range(Odia, Word, 0x0B70, 0x0B71),
    range(Telugu, Word, 0x0C01, 0x0C63),
    range(Telugu, Word, 0x0C7F, 0x0C7F),
    range(Kannada, Word, 0x0C81, 0x0CE3),
    range(Kannada, Word, 0x0CF1, 0x0CF2),
    range(Malayalam, Word, 0x0D01, 0x0D63),
    range(Malayalam, Word, 0x0D7A, 0x0D7F),
];

/// All `(script, class)` table entries whose range contains `c`.
///
/// Script-agnostic codepoints (ZWNJ, ZWJ, [`NUKTA_PLACEHOLDER`]) carry no
/// script and therefore classify to the empty set here, even though the
/// union membership tests accept them.
pub fn classify(c: char) -> SmallVec<[(Script, CharacterClass); 4]> {
    let cp = c as u32;
    RANGES
        .iter()
        .filter(|r| r.start <= cp && cp <= r.end)
        .map(|r| (r.script, r.class))
        .collect()
}

fn in_class(c: char, class: CharacterClass) -> bool {
    let cp = c as u32;
    RANGES
        .iter()
        .any(|r| r.class == class && r.start <= cp && cp <= r.end)
}

pub(crate) fn is_consonant(c: char) -> bool {
    in_class(c, Consonant)
}

pub(crate) fn is_consonant_modifier(c: char) -> bool {
    c == NUKTA_PLACEHOLDER || in_class(c, ConsonantModifier)
}

pub(crate) fn is_virama(c: char) -> bool {
    in_class(c, Virama)
}

/// Invisible marks that may follow a virama inside a consonant cluster.
pub(crate) fn is_cluster_joiner(c: char) -> bool {
    c == ZWNJ || c == ZWJ || c == NUKTA_PLACEHOLDER
}

pub(crate) fn is_independent_vowel(c: char) -> bool {
    in_class(c, IndependentVowel)
}

pub(crate) fn is_vowel_modifier(c: char) -> bool {
    c == NUKTA_PLACEHOLDER || in_class(c, VowelModifier)
}

/// Vowel material that may close a live syllable: matras plus the vowel
/// modifiers. The Odia and Telugu viramas are vowel modifiers too, so a
/// word-final dead consonant in those scripts is swallowed here.
pub(crate) fn is_matra_or_vowel_modifier(c: char) -> bool {
    c == NUKTA_PLACEHOLDER || in_class(c, Matra) || in_class(c, VowelModifier)
}

pub(crate) fn is_word_char(c: char) -> bool {
    is_cluster_joiner(c) || in_class(c, Word)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classes_of(c: char) -> Vec<(Script, CharacterClass)> {
        classify(c).into_iter().collect()
    }

    #[test]
    fn test_malayalam_consonant_block() {
        assert!(classes_of('\u{0D15}').contains(&(Malayalam, Consonant))); // ക
        assert!(classes_of('\u{0D39}').contains(&(Malayalam, Consonant))); // ഹ
        // Atomic chillu forms are consonants as well
        for cp in 0x0D7A..=0x0D7F {
            let c = char::from_u32(cp).unwrap();
            assert!(classes_of(c).contains(&(Malayalam, Consonant)), "U+{cp:04X}");
        }
    }

    #[test]
    fn test_malayalam_vowel_and_sign_ranges() {
        assert!(classes_of('\u{0D05}').contains(&(Malayalam, IndependentVowel))); // അ
        assert!(classes_of('\u{0D14}').contains(&(Malayalam, IndependentVowel))); // ഔ
        assert!(classes_of('\u{0D60}').contains(&(Malayalam, IndependentVowel)));
        assert!(classes_of('\u{0D3E}').contains(&(Malayalam, Matra))); // ാ
        assert!(classes_of('\u{0D57}').contains(&(Malayalam, Matra)));
        assert!(classes_of('\u{0D4D}').contains(&(Malayalam, Virama)));
        assert!(classes_of('\u{0D02}').contains(&(Malayalam, VowelModifier))); // anusvara
    }

    #[test]
    fn test_odia_virama_is_also_a_vowel_modifier() {
        let classes = classes_of('\u{0B4D}');
        assert!(classes.contains(&(Odia, Virama)));
        assert!(classes.contains(&(Odia, VowelModifier)));
    }

    #[test]
    fn test_telugu_virama_is_also_a_vowel_modifier() {
        let classes = classes_of('\u{0C4D}');
        assert!(classes.contains(&(Telugu, Virama)));
        assert!(classes.contains(&(Telugu, VowelModifier)));
    }

    #[test]
    fn test_script_letters_are_word_forming() {
        for c in ['க', 'ଓ', 'త', 'ಕ', 'മ', '\u{0D7F}'] {
            assert!(is_word_char(c), "{c:?}");
        }
    }

    #[test]
    fn test_outside_codepoints_classify_to_nothing() {
        for c in ['a', 'Z', '0', ' ', '.', '=', '-', '\u{00AD}', 'あ', '\u{0A15}'] {
            assert!(classify(c).is_empty(), "{c:?}");
            assert!(!is_word_char(c), "{c:?}");
        }
    }

    #[test]
    fn test_script_agnostic_marks() {
        // Not in the table...
        assert!(classify(ZWNJ).is_empty());
        assert!(classify(ZWJ).is_empty());
        assert!(classify(NUKTA_PLACEHOLDER).is_empty());
        // ...but accepted by the union tests
        assert!(is_cluster_joiner(ZWNJ));
        assert!(is_cluster_joiner(ZWJ));
        assert!(is_consonant_modifier(NUKTA_PLACEHOLDER));
        assert!(is_vowel_modifier(NUKTA_PLACEHOLDER));
        assert!(is_word_char(ZWJ));
    }

    #[test]
    fn test_ranges_within_a_class_and_script_are_disjoint() {
        for (i, a) in RANGES.iter().enumerate() {
            assert!(a.start <= a.end);
            for b in &RANGES[i + 1..] {
                if a.script == b.script && a.class == b.class {
                    assert!(
                        a.end < b.start || b.end < a.start,
                        "overlapping ranges for {:?}/{:?}",
                        a.script,
                        a.class
                    );
                }
            }
        }
    }
}
