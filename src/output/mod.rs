//! Robust decoding of captured process output.

mod normalizer;

pub use normalizer::{codec_from_label, normalize};
