//! Command implementations

pub mod hyphenate;

pub use hyphenate::HyphenateArgs;
