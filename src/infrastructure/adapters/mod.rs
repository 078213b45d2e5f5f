//! 애플리케이션 포트를 실제 인프라 구현체로 연결하는 어댑터 계층.

mod settings_repository;
mod width_probe;

pub use settings_repository::JsonSettingsRepository;
pub use width_probe::TerminalWidthProbe;
