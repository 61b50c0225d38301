//! tesseract 명령행 도구를 이용한 텍스트 추출

use std::io::ErrorKind;
use std::path::Path;
use std::process::Command;

use super::{ImageFormat, OcrError, TextExtractor};

/// 기본 인식 언어
pub const DEFAULT_LANGUAGE: &str = "eng";
/// 기본 실행 파일 이름 (PATH에서 검색)
pub const DEFAULT_PROGRAM: &str = "tesseract";

/// `tesseract <image> stdout -l <lang>` 실행기
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TesseractExtractor {
    program: String,
    language: String,
}

impl Default for TesseractExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TesseractExtractor {
    pub fn new() -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }

    /// 실행 파일 경로 설정
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// 인식 언어 설정 (tesseract 언어 코드)
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn language(&self) -> &str {
        &self.language
    }
}

impl TextExtractor for TesseractExtractor {
    fn extract_text(&self, image: &Path) -> Result<String, OcrError> {
        let format = ImageFormat::from_path(image)?;
        // 엔진 실행 전에 파일 존재 확인 -> Io 에러로 구분
        std::fs::metadata(image)?;

        log::debug!(
            "OCR 실행: {} {} ({:?}, lang={})",
            self.program,
            image.display(),
            format,
            self.language
        );

        let output = Command::new(&self.program)
            .arg(image)
            .arg("stdout")
            .arg("-l")
            .arg(&self.language)
            .output()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound | ErrorKind::PermissionDenied => {
                    OcrError::EngineUnavailable(format!("{}: {}", self.program, e))
                }
                _ => OcrError::Io(e),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            log::warn!("OCR 실패 ({}): {}", output.status, stderr);
            return Err(OcrError::UnreadableImage(stderr));
        }

        Ok(clean_engine_output(&String::from_utf8_lossy(&output.stdout)))
    }
}

/// 엔진이 덧붙이는 끝 공백/개행/폼피드(\x0c) 제거
fn clean_engine_output(raw: &str) -> String {
    raw.trim_end().to_string()
}
