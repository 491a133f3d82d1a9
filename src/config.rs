//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// slip39-dots 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Slip39DotsConfig {
    /// 단어 목록 JSON 파일 경로
    #[serde(default = "default_wordlist_path")]
    pub wordlist_path: String,
    /// 텍스트 출력에 이진 문자열 표시 여부
    #[serde(default = "default_show_binary")]
    pub show_binary: bool,
    /// env_logger 필터 (RUST_LOG가 없을 때 사용)
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_wordlist_path() -> String {
    "wordlist.json".to_string()
}

fn default_show_binary() -> bool {
    true
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for Slip39DotsConfig {
    fn default() -> Self {
        Self {
            wordlist_path: default_wordlist_path(),
            show_binary: default_show_binary(),
            log_filter: default_log_filter(),
        }
    }
}

/// 설정 파일 경로: ~/.config/slip39-dots/config.json
pub fn config_path() -> PathBuf {
    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
        .unwrap_or_else(|| {
            // HOME 미설정이거나 유효하지 않으면 /var/tmp 폴백
            PathBuf::from("/var/tmp")
        });
    home.join(".config").join("slip39-dots").join("config.json")
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config() -> Slip39DotsConfig {
    load_config_from(&config_path())
}

/// 지정한 경로에서 설정 로드
pub fn load_config_from(path: &Path) -> Slip39DotsConfig {
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("설정 파일 파싱 실패, 기본값 사용: {}", e);
            Slip39DotsConfig::default()
        }),
        Err(_) => Slip39DotsConfig::default(),
    }
}

/// 설정 파일 저장
pub fn save_config(config: &Slip39DotsConfig) -> Result<(), String> {
    save_config_to(config, &config_path())
}

/// 지정한 경로에 설정 저장
pub fn save_config_to(config: &Slip39DotsConfig, path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("설정 디렉토리 생성 실패: {}", e))?;
    }
    let json = serde_json::to_string_pretty(config).map_err(|e| format!("직렬화 실패: {}", e))?;
    fs::write(path, json).map_err(|e| format!("설정 파일 저장 실패: {}", e))?;
    Ok(())
}
