//! 적용 중인 설정 해석 결과를 점검하는 유스케이스.

use std::collections::BTreeMap;

use anyhow::Result;
use serde::Serialize;

use crate::application::ports::{LoadedSettings, SettingsRepository, WidthProbe};
use crate::application::resolver::SettingsResolver;
use crate::domain::setting::SettingKey;

/// 설정 점검 뷰 모델(JSON 직렬화용).
#[derive(Debug, Clone, Serialize)]
pub struct SettingsInspection {
    pub searched_paths: Vec<String>,
    pub loaded_paths: Vec<String>,
    pub file_data: BTreeMap<String, String>,
    pub effective: EffectiveSettings,
}

/// 계층 우선순위를 통과한 최종 값과 출처.
#[derive(Debug, Clone, Serialize)]
pub struct EffectiveSettings {
    pub report_width: u32,
    pub report_width_source: String,
    pub report_width_default: u32,
}

/// 현재 적용 중인 설정 해석 결과를 사람이 읽기 쉬운 JSON으로 반환한다.
pub struct InspectSettingsUseCase<'a> {
    pub settings_repo: &'a dyn SettingsRepository,
    pub width_probe: &'a dyn WidthProbe,
}

impl<'a> InspectSettingsUseCase<'a> {
    /// CLI 토큰까지 반영한 설정 점검 결과 문자열을 생성한다.
    /// 파일 계층 로딩 실패는 점검을 막지 않는다(빈 계층으로 표시).
    pub fn execute(&self, args: &[String]) -> Result<String> {
        let loaded = self.settings_repo.load().unwrap_or_else(|err| {
            tracing::debug!("settings inspection: file layer unavailable: {err:#}");
            LoadedSettings::default()
        });

        let mut resolver = SettingsResolver::from_args(args, self.settings_repo, self.width_probe);
        let inspection = SettingsInspection {
            searched_paths: display_paths(&loaded.searched_paths),
            loaded_paths: display_paths(&loaded.loaded_paths),
            file_data: loaded.data,
            effective: EffectiveSettings {
                report_width: resolver.get(SettingKey::ReportWidth),
                report_width_source: resolver.source(SettingKey::ReportWidth).label().to_string(),
                report_width_default: SettingKey::ReportWidth.default_value(),
            },
        };

        Ok(serde_json::to_string_pretty(&inspection)?)
    }
}

fn display_paths(paths: &[std::path::PathBuf]) -> Vec<String> {
    paths.iter().map(|p| p.display().to_string()).collect()
}
