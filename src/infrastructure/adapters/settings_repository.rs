//! 설정 저장소 포트 구현 어댑터.

use anyhow::Result;

use crate::application::ports::{LoadedSettings, SettingsRepository};
use crate::infrastructure::settings;

/// JSON 파일 기반 설정 저장소 어댑터.
pub struct JsonSettingsRepository;

impl SettingsRepository for JsonSettingsRepository {
    fn load(&self) -> Result<LoadedSettings> {
        settings::load_merged_settings()
    }
}
