//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::{Direction, Script};
use crate::ocr::{TesseractExtractor, DEFAULT_LANGUAGE, DEFAULT_PROGRAM};

/// 변환기 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TranslatorConfig {
    /// 출력할 문자 체계 (비어 있으면 전체)
    #[serde(default = "default_scripts")]
    pub scripts: Vec<Script>,
    /// 기본 변환 방향
    #[serde(default)]
    pub direction: Direction,
    /// OCR 인식 언어 (tesseract 언어 코드)
    #[serde(default = "default_ocr_language")]
    pub ocr_language: String,
    /// tesseract 실행 파일 경로
    #[serde(default = "default_tesseract_path")]
    pub tesseract_path: String,
}

fn default_scripts() -> Vec<Script> {
    Script::ALL.to_vec()
}

fn default_ocr_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

fn default_tesseract_path() -> String {
    DEFAULT_PROGRAM.to_string()
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            scripts: default_scripts(),
            direction: Direction::default(),
            ocr_language: default_ocr_language(),
            tesseract_path: default_tesseract_path(),
        }
    }
}

impl TranslatorConfig {
    /// 설정값으로 OCR 추출기 생성
    pub fn extractor(&self) -> TesseractExtractor {
        TesseractExtractor::new()
            .with_program(self.tesseract_path.clone())
            .with_language(self.ocr_language.clone())
    }
}

/// 설정 파일 경로: ~/.config/ancient-names/config.json
pub fn config_path() -> PathBuf {
    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
        .unwrap_or_else(|| {
            // HOME 미설정이거나 유효하지 않으면 /var/tmp 폴백
            PathBuf::from("/var/tmp")
        });
    home.join(".config")
        .join("ancient-names")
        .join("config.json")
}

/// 기본 경로에서 설정 로드
pub fn load_config() -> TranslatorConfig {
    load_config_from(&config_path())
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config_from(path: &Path) -> TranslatorConfig {
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("설정 파일 파싱 실패, 기본값 사용 ({}): {}", path.display(), e);
            TranslatorConfig::default()
        }),
        Err(_) => TranslatorConfig::default(),
    }
}

/// 기본 경로에 설정 저장
pub fn save_config(config: &TranslatorConfig) -> Result<PathBuf, String> {
    let path = config_path();
    save_config_to(config, &path)?;
    Ok(path)
}

/// 설정 파일 저장
pub fn save_config_to(config: &TranslatorConfig, path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("설정 디렉토리 생성 실패: {}", e))?;
    }
    let json = serde_json::to_string_pretty(config).map_err(|e| format!("직렬화 실패: {}", e))?;
    fs::write(path, json).map_err(|e| format!("설정 파일 저장 실패: {}", e))?;
    Ok(())
}
