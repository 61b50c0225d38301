//! 영문 <-> 고대 문자 통합 변환기

use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

use crate::core::brahmi::{decode_brahmi, encode_brahmi};
use crate::core::registry::{registry, ScriptRegistry};
use crate::core::script::{Direction, Script};
use crate::core::substitution::{decode_simple, encode_simple};
use crate::ocr::{OcrError, TextExtractor};

/// 문자 체계별 변환 결과 (Script 선언 순서로 정렬)
pub type Translations = BTreeMap<Script, String>;

/// 이미지 추출 + 변환 결과
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageTranslation {
    /// OCR로 추출한 원문
    pub extracted_text: String,
    pub translations: Translations,
}

/// 변환기
///
/// 레지스트리를 읽기 전용으로 빌려 쓰며, 호출 간 상태를 유지하지 않습니다.
#[derive(Debug, Clone)]
pub struct Translator<'a> {
    registry: &'a ScriptRegistry,
    /// 출력할 문자 체계
    scripts: Vec<Script>,
}

impl<'a> Translator<'a> {
    /// 전체 문자 체계로 변환하는 변환기 생성
    pub fn new(registry: &'a ScriptRegistry) -> Self {
        Self {
            registry,
            scripts: Script::ALL.to_vec(),
        }
    }

    /// 출력할 문자 체계 지정 (중복 제거, 빈 목록이면 전체)
    pub fn with_scripts(mut self, scripts: &[Script]) -> Self {
        let mut selected: Vec<Script> = scripts.to_vec();
        selected.sort();
        selected.dedup();
        self.scripts = if selected.is_empty() {
            Script::ALL.to_vec()
        } else {
            selected
        };
        self
    }

    pub fn scripts(&self) -> &[Script] {
        &self.scripts
    }

    /// 한 문자 체계로 인코딩
    pub fn encode(&self, script: Script, text: &str) -> String {
        match self.registry.table(script) {
            Some(table) => encode_simple(text, table.forward()),
            None => encode_brahmi(text, self.registry.brahmi()),
        }
    }

    /// 한 문자 체계에서 디코딩
    pub fn decode(&self, script: Script, text: &str) -> String {
        match self.registry.table(script) {
            Some(table) => decode_simple(text, table.reverse()),
            None => decode_brahmi(text, self.registry.brahmi()),
        }
    }

    pub fn translate(&self, text: &str, direction: Direction) -> Translations {
        log::debug!(
            "변환 요청: {:?}, {}글자, 문자 체계 {}개",
            direction,
            text.chars().count(),
            self.scripts.len()
        );
        self.scripts
            .iter()
            .map(|&script| {
                let output = match direction {
                    Direction::ToAncient => self.encode(script, text),
                    Direction::ToEnglish => self.decode(script, text),
                };
                (script, output)
            })
            .collect()
    }

    /// 영문 -> 선택된 모든 고대 문자
    pub fn translate_to_ancient(&self, text: &str) -> Translations {
        self.translate(text, Direction::ToAncient)
    }

    /// 고대 문자 -> 영문 (문자 체계별 해석)
    pub fn translate_to_english(&self, text: &str) -> Translations {
        self.translate(text, Direction::ToEnglish)
    }

    /// 이미지에서 텍스트를 추출한 뒤 고대 문자로 변환
    /// 추출 실패는 호출자에게 그대로 전달
    pub fn translate_image(
        &self,
        extractor: &dyn TextExtractor,
        image: &Path,
    ) -> Result<ImageTranslation, OcrError> {
        let extracted_text = extractor.extract_text(image)?;
        log::debug!("이미지 텍스트 추출 완료: {:?}", extracted_text);
        let translations = self.translate_to_ancient(&extracted_text);
        Ok(ImageTranslation {
            extracted_text,
            translations,
        })
    }
}

/// 기본 레지스트리로 영문 -> 전체 고대 문자 변환
pub fn translate_to_ancient(text: &str) -> Translations {
    Translator::new(registry()).translate_to_ancient(text)
}

/// 기본 레지스트리로 고대 문자 -> 영문 변환
pub fn translate_to_english(text: &str) -> Translations {
    Translator::new(registry()).translate_to_english(text)
}
