//! 애플리케이션 조립(composition root) 모듈.

use crate::application::resolver::SettingsResolver;
use crate::application::usecases::inspect_settings::InspectSettingsUseCase;
use crate::infrastructure::adapters::{JsonSettingsRepository, TerminalWidthProbe};

/// 실행 시점 의존성을 한 곳에서 조립하는 컨테이너.
pub struct AppComposition {
    settings_repo: JsonSettingsRepository,
    width_probe: TerminalWidthProbe,
}

impl Default for AppComposition {
    fn default() -> Self {
        Self {
            settings_repo: JsonSettingsRepository,
            width_probe: TerminalWidthProbe,
        }
    }
}

impl AppComposition {
    /// 설정 점검 유스케이스를 생성한다.
    pub fn inspect_settings_usecase(&self) -> InspectSettingsUseCase<'_> {
        InspectSettingsUseCase {
            settings_repo: &self.settings_repo,
            width_probe: &self.width_probe,
        }
    }

    /// CLI 토큰을 반영한 설정 리졸버를 생성한다.
    /// 임베딩 코드가 파일/터미널 계층을 그대로 쓰면서 값을 조회할 때 사용한다.
    pub fn settings_resolver(&self, args: &[String]) -> SettingsResolver<'_> {
        SettingsResolver::from_args(args, &self.settings_repo, &self.width_probe)
    }
}
