//! 변환 코어: 문자 테이블, 치환 코덱, 브라흐미 결합 코덱, 통합 변환기

pub mod brahmi;
pub mod registry;
pub mod script;
pub mod substitution;
pub mod tables;
pub mod translator;

pub use brahmi::{decode_brahmi, encode_brahmi, BrahmiToken};
pub use registry::{registry, ScriptRegistry};
pub use script::{Direction, Script};
pub use substitution::{decode_simple, encode_simple};
pub use tables::{BrahmiTable, SubstitutionTable};
pub use translator::{translate_to_ancient, translate_to_english, ImageTranslation, Translations, Translator};
