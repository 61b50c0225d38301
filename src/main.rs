//! ancient-names - 영문 이름 <-> 고대 문자 변환기

use ancient_names::config::{load_config, load_config_from, save_config, save_config_to, TranslatorConfig};
use ancient_names::core::{registry, Direction, Script, Translations, Translator};
use clap::Parser;
use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "ancient-names",
    version,
    about = "Translate names between English and Brahmi, Tamil, Hebrew, Aramaic, Greek and Latin"
)]
struct Cli {
    /// 변환할 텍스트 (없으면 표준 입력에서 한 줄씩 읽음)
    text: Vec<String>,

    /// 고대 문자 -> 영문
    #[arg(long, conflicts_with = "to_ancient")]
    to_english: bool,

    /// 영문 -> 고대 문자 (설정 파일의 방향을 무시)
    #[arg(long)]
    to_ancient: bool,

    /// 출력할 문자 체계 (반복 가능, 예: --script brahmi --script greek)
    #[arg(short, long = "script", value_name = "SCRIPT")]
    scripts: Vec<Script>,

    /// 이미지에서 텍스트를 추출해 변환 (png, jpg, jpeg)
    #[arg(long, value_name = "PATH", conflicts_with = "text")]
    image: Option<PathBuf>,

    /// JSON으로 출력
    #[arg(long)]
    json: bool,

    /// 설정 파일 경로
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// 기본 설정 파일을 생성하고 종료
    #[arg(long)]
    init_config: bool,
}

impl Cli {
    fn direction(&self, config: &TranslatorConfig) -> Direction {
        if self.to_english {
            Direction::ToEnglish
        } else if self.to_ancient {
            Direction::ToAncient
        } else {
            config.direction
        }
    }
}

fn main() -> ExitCode {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if cli.init_config {
        return init_config(cli.config.as_ref());
    }

    // 설정 로드
    let config = match &cli.config {
        Some(path) => load_config_from(path),
        None => load_config(),
    };

    let scripts = if cli.scripts.is_empty() {
        &config.scripts
    } else {
        &cli.scripts
    };
    let translator = Translator::new(registry()).with_scripts(scripts);
    let direction = cli.direction(&config);

    if let Some(image) = &cli.image {
        let extractor = config.extractor();
        return match translator.translate_image(&extractor, image) {
            Ok(result) => {
                if cli.json {
                    print_json(&result);
                } else {
                    println!("Extracted Text: {}", result.extracted_text);
                    print_translations(&result.translations, Direction::ToAncient);
                }
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("[ERROR] {}", e);
                ExitCode::FAILURE
            }
        };
    }

    if !cli.text.is_empty() {
        let text = cli.text.join(" ");
        emit(&translator.translate(&text, direction), direction, cli.json);
        return ExitCode::SUCCESS;
    }

    // 표준 입력 한 줄씩 변환
    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                eprintln!("[ERROR] 표준 입력 읽기 실패: {}", e);
                return ExitCode::FAILURE;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        emit(&translator.translate(&line, direction), direction, cli.json);
    }

    ExitCode::SUCCESS
}

fn init_config(path: Option<&PathBuf>) -> ExitCode {
    let config = TranslatorConfig::default();
    let result = match path {
        Some(path) => save_config_to(&config, path).map(|_| path.clone()),
        None => save_config(&config),
    };
    match result {
        Ok(path) => {
            println!("설정 파일 생성: {}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("[ERROR] {}", e);
            ExitCode::FAILURE
        }
    }
}

fn emit(translations: &Translations, direction: Direction, json: bool) {
    if json {
        print_json(translations);
    } else {
        print_translations(translations, direction);
    }
}

fn print_translations(translations: &Translations, direction: Direction) {
    for (script, output) in translations {
        match direction {
            Direction::ToAncient => println!("{}: {}", script, output),
            Direction::ToEnglish => println!("From {}: {}", script, output),
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string(value) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("[ERROR] JSON 직렬화 실패: {}", e),
    }
}
