//! 이미지 -> 텍스트 추출 (OCR)
//!
//! 변환 코어는 추출된 문자열만 받습니다. 추출 실패는 호출자가 처리합니다.
//!
//! # 사용 예시
//!
//! ```no_run
//! use ancient_names::core::registry;
//! use ancient_names::core::Translator;
//! use ancient_names::ocr::TesseractExtractor;
//! use std::path::Path;
//!
//! let extractor = TesseractExtractor::new();
//! let result = Translator::new(registry())
//!     .translate_image(&extractor, Path::new("inscription.png"))
//!     .unwrap();
//! println!("{}", result.extracted_text);
//! ```

mod tesseract;

pub use tesseract::{TesseractExtractor, DEFAULT_LANGUAGE, DEFAULT_PROGRAM};

use std::path::Path;

/// OCR 추출 에러
#[derive(Debug)]
pub enum OcrError {
    /// 파일 읽기 실패
    Io(std::io::Error),
    /// 지원하지 않는 이미지 형식 (확장자)
    UnsupportedFormat(String),
    /// OCR 엔진 실행 파일을 찾을 수 없음
    EngineUnavailable(String),
    /// 엔진이 이미지를 읽지 못함
    UnreadableImage(String),
}

impl std::fmt::Display for OcrError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OcrError::Io(e) => write!(f, "파일 읽기 오류: {}", e),
            OcrError::UnsupportedFormat(s) => {
                write!(f, "지원하지 않는 이미지 형식: {} (png, jpg, jpeg만 가능)", s)
            }
            OcrError::EngineUnavailable(s) => write!(f, "OCR 엔진을 실행할 수 없음: {}", s),
            OcrError::UnreadableImage(s) => write!(f, "이미지에서 텍스트를 읽지 못함: {}", s),
        }
    }
}

impl std::error::Error for OcrError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OcrError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for OcrError {
    fn from(e: std::io::Error) -> Self {
        OcrError::Io(e)
    }
}

/// 지원 이미지 형식
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
}

impl ImageFormat {
    /// 확장자로 형식 판별 (대소문자 무시)
    pub fn from_path(path: &Path) -> Result<Self, OcrError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "png" => Ok(ImageFormat::Png),
            "jpg" | "jpeg" => Ok(ImageFormat::Jpeg),
            _ => Err(OcrError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// 이미지에서 텍스트를 추출하는 외부 협력자
pub trait TextExtractor {
    fn extract_text(&self, image: &Path) -> Result<String, OcrError>;
}
