//! The break-insertion pipeline.
//!
//! Hyphenation runs as a fixed sequence of pure text→text passes over one
//! buffer: strip old separators, put a marker before every syllable, then
//! peel markers back off wherever a break is not wanted (word-initial
//! position, too close to either end of a word, in front of a chillu).
//! Finally the default marker is rewritten to a soft hyphen.
//!
//! Every pass scans the way a regex substitution does: a match consumes its
//! span and scanning resumes right after it; on failure the scan advances by
//! one character.

use crate::syllable::{is_non_word, match_syllable, match_syllable_before_boundary};

/// The internal break marker inserted between syllables.
///
/// The reset pass strips this literal from the input and the finalize pass
/// rewrites it to [`SOFT_HYPHEN`], both regardless of the marker configured
/// on the [`Hyphenator`]. A caller-supplied marker therefore survives in the
/// output untouched, while stray `=` in the input are always removed.
pub const DEFAULT_MARKER: char = '=';

/// The invisible, reflow-aware hyphenation point emitted by default.
pub const SOFT_HYPHEN: char = '\u{00AD}';

/// Stripped by the reset pass alongside old markers and soft hyphens.
pub const ZERO_WIDTH_SPACE: char = '\u{200B}';

const MALAYALAM_VIRAMA: char = '\u{0D4D}';

/// Consonants whose `virama + ZWJ` spelling is a pre-Unicode-5.1 chillu.
const LEGACY_CHILLU_BASES: [char; 6] = ['ണ', 'ന', 'ര', 'ല', 'ള', 'ക'];

fn is_atomic_chillu(c: char) -> bool {
    ('\u{0D7A}'..='\u{0D7F}').contains(&c)
}

/// Inserts break points at syllable boundaries.
///
/// The default configuration marks breaks with soft hyphens; a visible
/// marker can be chosen instead, in which case it is left in the output
/// as-is (see [`DEFAULT_MARKER`] for the asymmetry this implies).
#[derive(Debug, Clone, Copy)]
pub struct Hyphenator {
    marker: char,
}

impl Default for Hyphenator {
    fn default() -> Self {
        Self::new()
    }
}

impl Hyphenator {
    /// Creates a hyphenator emitting soft hyphens.
    pub fn new() -> Self {
        Self {
            marker: DEFAULT_MARKER,
        }
    }

    /// Creates a hyphenator that leaves `marker` visible at break points.
    pub fn with_marker(marker: char) -> Self {
        Self { marker }
    }

    /// The configured marker character.
    pub fn marker(&self) -> char {
        self.marker
    }

    /// Runs the full pipeline over `text`.
    ///
    /// Total for any input: text with no recognizable syllables comes back
    /// unchanged (modulo the reset pass), and repeated application with the
    /// default marker is idempotent.
    pub fn hyphenate(&self, text: &str) -> String {
        let chars: Vec<char> = text
            .chars()
            .filter(|&c| c != DEFAULT_MARKER && c != ZERO_WIDTH_SPACE && c != SOFT_HYPHEN)
            .collect();
        let chars = insert_breaks(&chars, self.marker);
        let chars = strip_word_initial(&chars, self.marker);
        let chars = strip_after_first_syllable(&chars, self.marker);
        let chars = strip_before_last_syllable(&chars, self.marker);
        let chars = protect_atomic_chillu(&chars, self.marker);
        let chars = protect_legacy_chillu(&chars, self.marker);
        chars
            .into_iter()
            .map(|c| if c == DEFAULT_MARKER { SOFT_HYPHEN } else { c })
            .collect()
    }
}

/// Hyphenates with the default configuration (soft hyphens).
pub fn hyphenate(text: &str) -> String {
    Hyphenator::new().hyphenate(text)
}

/// Puts a marker before every non-overlapping, leftmost syllable match.
fn insert_breaks(chars: &[char], marker: char) -> Vec<char> {
    let mut out = Vec::with_capacity(chars.len() + chars.len() / 2);
    let mut pos = 0;
    while pos < chars.len() {
        if let Some(end) = match_syllable(chars, pos, marker) {
            out.push(marker);
            out.extend_from_slice(&chars[pos..end]);
            pos = end;
        } else {
            out.push(chars[pos]);
            pos += 1;
        }
    }
    out
}

/// A word's first syllable is never preceded by a break: drop markers that
/// sit right after a non-word character or at the start of text.
fn strip_word_initial(chars: &[char], marker: char) -> Vec<char> {
    let mut out = Vec::with_capacity(chars.len());
    let mut pos = 0;
    while pos < chars.len() {
        if is_non_word(chars[pos], marker) && chars.get(pos + 1) == Some(&marker) {
            out.push(chars[pos]);
            pos += 2;
            continue;
        }
        if pos == 0 && chars[0] == marker {
            pos = 1;
            continue;
        }
        out.push(chars[pos]);
        pos += 1;
    }
    out
}

/// At least two syllables must precede a retained break: drop the marker in
/// every (word start, one syllable, marker) sequence.
fn strip_after_first_syllable(chars: &[char], marker: char) -> Vec<char> {
    let mut out = Vec::with_capacity(chars.len());
    let mut pos = 0;
    while pos < chars.len() {
        if is_non_word(chars[pos], marker) {
            if let Some(end) = match_syllable(chars, pos + 1, marker) {
                if chars.get(end) == Some(&marker) {
                    out.extend_from_slice(&chars[pos..end]);
                    pos = end + 1;
                    continue;
                }
            }
        } else if pos == 0 {
            if let Some(end) = match_syllable(chars, 0, marker) {
                if chars.get(end) == Some(&marker) {
                    out.extend_from_slice(&chars[..end]);
                    pos = end + 1;
                    continue;
                }
            }
        }
        out.push(chars[pos]);
        pos += 1;
    }
    out
}

/// Mirror of [`strip_after_first_syllable`]: at least two syllables must
/// follow a retained break, so a (marker, one syllable, word end) sequence
/// loses its marker.
fn strip_before_last_syllable(chars: &[char], marker: char) -> Vec<char> {
    let mut out = Vec::with_capacity(chars.len());
    let mut pos = 0;
    while pos < chars.len() {
        if chars[pos] == marker {
            if let Some(end) = match_syllable_before_boundary(chars, pos + 1, marker) {
                if end == chars.len() {
                    out.extend_from_slice(&chars[pos + 1..end]);
                    pos = end;
                } else {
                    out.extend_from_slice(&chars[pos + 1..=end]);
                    pos = end + 1;
                }
                continue;
            }
        }
        out.push(chars[pos]);
        pos += 1;
    }
    out
}

/// Atomic chillu letters are indivisible word-final forms: no break may
/// separate one from the cluster before it.
fn protect_atomic_chillu(chars: &[char], marker: char) -> Vec<char> {
    let mut out = Vec::with_capacity(chars.len());
    let mut pos = 0;
    while pos < chars.len() {
        if chars[pos] == marker && chars.get(pos + 1).copied().is_some_and(is_atomic_chillu) {
            pos += 1;
            continue;
        }
        out.push(chars[pos]);
        pos += 1;
    }
    out
}

/// The pre-Unicode-5.1 chillu spelling (consonant + virama + ZWJ) needs the
/// same protection as the atomic forms.
fn protect_legacy_chillu(chars: &[char], marker: char) -> Vec<char> {
    let mut out = Vec::with_capacity(chars.len());
    let mut pos = 0;
    while pos < chars.len() {
        let legacy_follows = chars[pos] == marker
            && pos + 3 < chars.len()
            && LEGACY_CHILLU_BASES.contains(&chars[pos + 1])
            && chars[pos + 2] == MALAYALAM_VIRAMA
            && chars[pos + 3] == crate::tables::ZWJ;
        if legacy_follows {
            pos += 1;
            continue;
        }
        out.push(chars[pos]);
        pos += 1;
    }
    out
}
