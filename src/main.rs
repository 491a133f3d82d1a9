//! slip39-dots - SLIP39 단어 ↔ 12점 금속 백업 패턴 변환 CLI

mod cli;

use std::error::Error;
use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;

use cli::{Cli, Commands};
use slip39_dots::config::{load_config, Slip39DotsConfig};
use slip39_dots::wordlist::{
    BatchConversionResult, BatchRow, ConversionResult, WordConverter, Wordlist,
};
use slip39_dots::{validate_binary, PatternCodec};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // 설정 로드 (로그 필터 기본값이 설정에 있으므로 로깅보다 먼저)
    let config = load_config();

    // 로깅 초기화 (RUST_LOG 우선)
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_filter.as_str()),
    )
    .init();

    match run(&cli, &config) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, config: &Slip39DotsConfig) -> Result<ExitCode, Box<dyn Error>> {
    let wordlist_path = cli
        .wordlist
        .clone()
        .unwrap_or_else(|| config.wordlist_path.clone());

    match &cli.command {
        Commands::Convert { words } => {
            let converter = WordConverter::new(Wordlist::load(&wordlist_path)?);
            let mnemonic = words.join(" ");
            let result = converter.convert_with_validation(&mnemonic);

            if cli.json {
                print_json(&result)?;
            } else {
                // 실패한 단어도 입력 위치 그대로 한 줄씩
                for line in batch_lines(&result, config.show_binary) {
                    println!("{}", line);
                }
                println!(
                    "{} words, {} converted, {} errors",
                    result.word_count,
                    result.patterns.len(),
                    result.errors.len()
                );
            }

            Ok(exit_code(result.is_valid))
        }
        Commands::Index { index } => {
            let pattern = PatternCodec::from_index(*index)?;
            let word = optional_word(&wordlist_path, pattern.index());
            let result = ConversionResult::new(word.unwrap_or_default(), &pattern);

            if cli.json {
                print_json(&result)?;
            } else {
                print_conversion(1, &result, config.show_binary);
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Decode { dots } => {
            let pattern = PatternCodec::from_dots(dots)?;
            let word = optional_word(&wordlist_path, pattern.index());
            let result = ConversionResult::new(word.unwrap_or_default(), &pattern);

            if cli.json {
                print_json(&result)?;
            } else {
                print_conversion(1, &result, config.show_binary);
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Validate { binary } => {
            let result = validate_binary(binary);

            if cli.json {
                print_json(&result)?;
            } else if let Some(error) = &result.error {
                match result.index {
                    Some(index) => println!("invalid: {} (value {})", error, index),
                    None => println!("invalid: {}", error),
                }
            } else if let Some(index) = result.index {
                println!("valid: index {}", index);
            }
            Ok(exit_code(result.is_valid))
        }
    }
}

/// 단어 목록이 있으면 인덱스의 단어 조회 (없으면 인덱스만 표시)
fn optional_word(path: &str, index: u16) -> Option<String> {
    match Wordlist::load(path) {
        Ok(wordlist) => wordlist.word(index).map(str::to_string),
        Err(e) => {
            log::debug!("단어 목록 없이 진행: {}", e);
            None
        }
    }
}

fn print_conversion(position: usize, result: &ConversionResult, show_binary: bool) {
    println!("{}", format_conversion(position, result, show_binary));
}

/// 변환 결과 한 줄
fn format_conversion(position: usize, result: &ConversionResult, show_binary: bool) -> String {
    if show_binary {
        format!(
            "{:>2}. {:<12} {:>4}  {}  {}",
            position,
            result.word,
            result.index,
            result.binary,
            result.display_dots()
        )
    } else {
        format!(
            "{:>2}. {:<12} {:>4}  {}",
            position,
            result.word,
            result.index,
            result.display_dots()
        )
    }
}

/// 일괄 변환 결과를 입력 위치 순서대로 한 줄씩
fn batch_lines(result: &BatchConversionResult, show_binary: bool) -> Vec<String> {
    result
        .rows()
        .into_iter()
        .map(|row| match row {
            BatchRow::Converted { position, result } => {
                format_conversion(position, result, show_binary)
            }
            BatchRow::Failed(error) => {
                format!("{:>2}. {:<12} {}", error.position, error.word, error.error)
            }
        })
        .collect()
}

fn print_json<T: Serialize>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn exit_code(is_valid: bool) -> ExitCode {
    if is_valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
