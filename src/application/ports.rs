//! 애플리케이션 계층이 의존하는 포트(추상 인터페이스) 모음.

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::Result;

/// 병합이 끝난 영속 설정 데이터와 출처 경로.
#[derive(Debug, Clone, Default)]
pub struct LoadedSettings {
    /// snake_case 키 -> 원시 문자열 값.
    pub data: BTreeMap<String, String>,
    /// 탐색한 모든 후보 경로(우선순위 오름차순).
    pub searched_paths: Vec<PathBuf>,
    /// 실제로 읽어 병합한 경로.
    pub loaded_paths: Vec<PathBuf>,
}

/// 영속 설정(파일 계층) 로딩을 담당하는 저장소 포트.
pub trait SettingsRepository: Send + Sync {
    fn load(&self) -> Result<LoadedSettings>;
}

/// `auto` 센티널이 참조하는 환경 폭 탐지 포트.
/// 탐지 불가(비대화형 컨텍스트, 감지 실패)면 `None`을 반환한다.
pub trait WidthProbe: Send + Sync {
    fn probe_width(&self) -> Option<u32>;
}
