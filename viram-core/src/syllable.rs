//! Syllable recognition.
//!
//! A syllable is matched by one of three forms, tried in a fixed order at
//! each scan position:
//!
//! 1. **Cluster form**: `(unit virama joiners*)* unit (matra|vmod)*`, the
//!    ordinary live syllable: a chain of dead consonant units ending in a
//!    live unit with optional vowel signs.
//! 2. **Dead-final form**: the same chain but ending dead (virama last),
//!    valid only when an actual non-word character follows.
//! 3. **Vowel form**: an independent vowel with optional vowel modifiers.
//!
//! A "unit" is one consonant plus any consonant modifiers. Repetition is
//! greedy; the cluster form gives back at most its final `unit + virama`
//! group when no live unit follows it, which is the only give-back that can
//! ever succeed (everything shorter re-exposes word-forming codepoints).

use crate::hyphenate::DEFAULT_MARKER;
use crate::tables::{
    is_cluster_joiner, is_consonant, is_consonant_modifier, is_independent_vowel,
    is_matra_or_vowel_modifier, is_virama, is_vowel_modifier, is_word_char,
};

/// A character that terminates a word: anything outside the word-forming
/// ranges that is neither the default marker literal nor the active marker.
pub(crate) fn is_non_word(c: char, marker: char) -> bool {
    !is_word_char(c) && c != DEFAULT_MARKER && c != marker
}

/// End of the consonant unit starting at `start`: one consonant plus any
/// trailing consonant modifiers.
fn consonant_unit(chars: &[char], start: usize) -> Option<usize> {
    if !is_consonant(*chars.get(start)?) {
        return None;
    }
    let mut end = start + 1;
    while chars.get(end).is_some_and(|&c| is_consonant_modifier(c)) {
        end += 1;
    }
    Some(end)
}

fn trailing_vowel_signs(chars: &[char], mut end: usize) -> usize {
    while chars.get(end).is_some_and(|&c| is_matra_or_vowel_modifier(c)) {
        end += 1;
    }
    end
}

/// Cluster form. Matches at every consonant: a chain that runs out of
/// consonants after a virama releases its last group and closes on that
/// group's unit instead (re-consuming the virama in scripts where it doubles
/// as a vowel modifier).
fn cluster_form(chars: &[char], start: usize) -> Option<usize> {
    let mut pos = start;
    let mut released = None; // unit end of the last committed cluster group
    while let Some(unit_end) = consonant_unit(chars, pos) {
        if chars.get(unit_end).is_some_and(|&c| is_virama(c)) {
            let mut group_end = unit_end + 1;
            while chars.get(group_end).is_some_and(|&c| is_cluster_joiner(c)) {
                group_end += 1;
            }
            released = Some(unit_end);
            pos = group_end;
        } else {
            return Some(trailing_vowel_signs(chars, unit_end));
        }
    }
    released.map(|unit_end| trailing_vowel_signs(chars, unit_end))
}

/// Dead-final form: cluster groups only, the last one ending in virama and
/// joiners, with a non-word character right after. End of text does not
/// qualify; the lookahead wants an actual character.
fn dead_final_form(chars: &[char], start: usize, marker: char) -> Option<usize> {
    let mut pos = start;
    let mut groups = 0usize;
    while let Some(unit_end) = consonant_unit(chars, pos) {
        if !chars.get(unit_end).is_some_and(|&c| is_virama(c)) {
            return None; // a live unit cannot close the dead-consonant shape
        }
        let mut group_end = unit_end + 1;
        while chars.get(group_end).is_some_and(|&c| is_cluster_joiner(c)) {
            group_end += 1;
        }
        groups += 1;
        pos = group_end;
    }
    if groups == 0 {
        return None;
    }
    match chars.get(pos) {
        Some(&c) if is_non_word(c, marker) => Some(pos),
        _ => None,
    }
}

/// Vowel form: one independent vowel plus any vowel modifiers.
fn vowel_form(chars: &[char], start: usize) -> Option<usize> {
    if !is_independent_vowel(*chars.get(start)?) {
        return None;
    }
    let mut end = start + 1;
    while chars.get(end).is_some_and(|&c| is_vowel_modifier(c)) {
        end += 1;
    }
    Some(end)
}

/// End of the syllable starting at `start`, first form wins.
///
/// The cluster form matches at every consonant, so in a plain scan the
/// dead-final form never decides; it exists for callers that impose a
/// trailing context (see [`match_syllable_before_boundary`]).
pub(crate) fn match_syllable(chars: &[char], start: usize, marker: char) -> Option<usize> {
    cluster_form(chars, start)
        .or_else(|| dead_final_form(chars, start, marker))
        .or_else(|| vowel_form(chars, start))
}

/// Variant for passes that require a non-word character or the end of text
/// right after the syllable.
///
/// Tries the cluster form's greedy end first; when a word-forming character
/// follows it (for example a dangling virama), falls through to the
/// dead-final form, whose own lookahead is exactly the required trailing
/// context, and finally to the vowel form.
pub(crate) fn match_syllable_before_boundary(
    chars: &[char],
    start: usize,
    marker: char,
) -> Option<usize> {
    if let Some(end) = cluster_form(chars, start) {
        if end == chars.len() || is_non_word(chars[end], marker) {
            return Some(end);
        }
        return dead_final_form(chars, start, marker);
    }
    if let Some(end) = vowel_form(chars, start) {
        if end == chars.len() || is_non_word(chars[end], marker) {
            return Some(end);
        }
    }
    None
}
