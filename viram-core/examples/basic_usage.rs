//! Basic usage of the viram-core library.
//!
//! Run with: cargo run --example basic_usage

use viram_core::{classify, hyphenate, normalize_chillu, Hyphenator};

fn main() {
    // Soft hyphens are invisible, so show them as a dot here.
    let word = "തിരുവനന്തപുരം";
    println!("{} -> {}", word, hyphenate(word).replace('\u{00AD}', "·"));

    // A visible marker instead of soft hyphens.
    let visible = Hyphenator::with_marker('-');
    println!("{}", visible.hyphenate("ബോവർനെഗെസ്"));

    // Legacy chillu spellings are normalized before hyphenating.
    let legacy = "അവന്\u{200D}";
    println!("{} -> {}", legacy, hyphenate(&normalize_chillu(legacy)));

    // Codepoint classification is exposed for reuse.
    println!("{:?} -> {:?}", 'ക', classify('ക'));
}
