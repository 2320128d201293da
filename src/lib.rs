//! 핵심 계산 로직을 라이브러리로 분리하여 CLI와 GUI가 같은 코드를 쓰도록 한다.

pub mod app;
pub mod config;
pub mod conversion;
pub mod hydro;
pub mod i18n;
pub mod logging;
pub mod quantity;
pub mod report;
pub mod ui_cli;
pub mod units;
