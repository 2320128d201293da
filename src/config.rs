use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::hydro::{FluidConstants, PlantInputs};
use crate::i18n;

/// 기본 설정 파일 경로.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// auto / en-us / ko-kr
    pub language: String,
    /// 외부 언어팩 디렉터리
    pub language_pack_dir: Option<String>,
    /// GUI 창 투명도(0.3~1.0)
    pub window_alpha: f32,
    /// 유체 물성. 물 이외의 유체로 일반화할 때 바꾼다.
    pub fluid: FluidConstants,
    /// 폼 초기값
    pub defaults: PlantInputs,
    #[serde(skip)]
    path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            language_pack_dir: None,
            window_alpha: 1.0,
            fluid: FluidConstants::WATER,
            defaults: PlantInputs::default(),
            path: None,
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("config parse error: {0}")]
    Deserialize(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("config serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// ./config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    load_or_create(Path::new(DEFAULT_CONFIG_PATH))
}

/// 지정한 경로의 설정을 로드한다. 파일이 없으면 기본값으로 만들어 저장한다.
pub fn load_or_create(path: &Path) -> Result<Config, ConfigError> {
    let mut cfg = if path.exists() {
        let content = fs::read_to_string(path)?;
        let mut cfg: Config = toml::from_str(&content)?;
        cfg.sanitize();
        info!(path = %path.display(), "config loaded");
        cfg
    } else {
        let cfg = Config::default();
        save_config(&cfg, path)?;
        cfg
    };
    cfg.path = Some(path.to_path_buf());
    Ok(cfg)
}

fn save_config(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write(path, content)?;
    info!(path = %path.display(), "config saved");
    Ok(())
}

impl Config {
    /// 로드한 경로(없으면 ./config.toml)에 설정을 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = self
            .path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
        save_config(self, &path)
    }

    /// CLI 언어 인자를 우선해 실제 언어 코드를 정한다. 저장된 `language`는 바꾸지 않는다.
    pub fn resolved_language(&self, cli_lang: &str) -> String {
        i18n::resolve_language(cli_lang, Some(self.language.as_str()))
    }

    /// 사용자가 손으로 고친 값이 입력 범위를 벗어나면 내장 기본값으로 되돌린다.
    pub fn sanitize(&mut self) {
        if let Err(err) = self.defaults.validate() {
            warn!(%err, "invalid input defaults in config, using built-in defaults");
            self.defaults = PlantInputs::default();
        }
        if !self.fluid.is_physical() {
            warn!(fluid = ?self.fluid, "non-physical fluid constants in config, using water");
            self.fluid = FluidConstants::WATER;
        }
        self.window_alpha = if self.window_alpha.is_nan() {
            1.0
        } else {
            self.window_alpha.clamp(0.3, 1.0)
        };
    }
}
