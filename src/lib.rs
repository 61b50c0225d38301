pub mod config;
pub mod core;
pub mod ocr;

pub use crate::core::{translate_to_ancient, translate_to_english, Direction, Script, Translations, Translator};
pub use crate::ocr::{OcrError, TextExtractor};
