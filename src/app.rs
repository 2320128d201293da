use thiserror::Error;

use crate::config::{Config, ConfigError};
use crate::conversion::ConversionError;
use crate::hydro::InputError;
use crate::i18n::{self, Translator};
use crate::report::ReportError;
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 파일/콘솔 입출력 오류
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    /// 단위 변환 오류
    #[error("unit conversion error: {0}")]
    Conversion(#[from] ConversionError),
    /// 입력 범위 오류
    #[error("invalid input: {0}")]
    Input(#[from] InputError),
    /// 보고서 저장 오류
    #[error("report error: {0}")]
    Report(#[from] ReportError),
}

/// CLI 대화형 메인 루프를 실행한다.
pub fn run(config: &mut Config, tr: &mut Translator) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu(tr)? {
            MenuChoice::Plant => ui_cli::handle_plant(tr, config)?,
            MenuChoice::UnitConversion => ui_cli::handle_unit_conversion(tr)?,
            MenuChoice::Notes => ui_cli::handle_notes(tr),
            MenuChoice::Settings => {
                if ui_cli::handle_settings(tr, config)? {
                    config.save()?;
                    let lang = config.resolved_language("auto");
                    *tr = Translator::new_with_pack(&lang, config.language_pack_dir.as_deref());
                    println!("{}", tr.t(i18n::keys::SETTINGS_SAVED));
                }
            }
            MenuChoice::Exit => {
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}
