//! 계층형 우선순위로 설정 값을 해석하는 리졸버.
//!
//! 우선순위: 명시 `set` > CLI 인자 > 영속 파일 > 컴파일 기본값.
//! 상위 계층에 값이 있으면 하위 계층은 조회하지 않는다.

use std::collections::BTreeMap;

use crate::application::ports::{SettingsRepository, WidthProbe};
use crate::domain::raw::RawValue;
use crate::domain::setting::{CoercedWidth, SettingKey, coerce_width};

/// 설정 값이 확정된 출처 계층.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceLayer {
    ExplicitOverride,
    CommandLine,
    PersistedFile,
    CompiledDefault,
}

impl SourceLayer {
    /// 진단 출력용 축약 라벨.
    pub fn label(self) -> &'static str {
        match self {
            SourceLayer::ExplicitOverride => "override",
            SourceLayer::CommandLine => "cli",
            SourceLayer::PersistedFile => "file",
            SourceLayer::CompiledDefault => "default",
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Resolved {
    value: u32,
    source: SourceLayer,
}

/// 설정 키 하나의 계층 상태.
#[derive(Debug, Clone, Copy, Default)]
struct SettingSlot {
    /// CLI 스캔에서 확보한 값(첫 출현만 인정).
    cli: Option<u32>,
    /// 확정이 끝난 캐시. 명시 `set`은 여기에 바로 기록된다.
    resolved: Option<Resolved>,
}

/// 인스턴스 단위 설정 리졸버.
/// 전역/정적 상태를 공유하지 않으므로 한 프로세스 안의 인스턴스들은 서로 독립이다.
pub struct SettingsResolver<'a> {
    settings_repo: &'a dyn SettingsRepository,
    width_probe: &'a dyn WidthProbe,
    report_width: SettingSlot,
    /// 파일 계층 데이터. 최초 접근 시 한 번만 로딩한다.
    file_data: Option<BTreeMap<String, String>>,
    /// 환경 폭 탐지 결과. 리졸버 수명 동안 재탐지하지 않는다.
    probe_cache: Option<Option<u32>>,
}

impl<'a> SettingsResolver<'a> {
    pub fn new(settings_repo: &'a dyn SettingsRepository, width_probe: &'a dyn WidthProbe) -> Self {
        Self {
            settings_repo,
            width_probe,
            report_width: SettingSlot::default(),
            file_data: None,
            probe_cache: None,
        }
    }

    /// CLI 토큰을 한 번 스캔해 리졸버를 생성한다.
    pub fn from_args(
        args: &[String],
        settings_repo: &'a dyn SettingsRepository,
        width_probe: &'a dyn WidthProbe,
    ) -> Self {
        let mut resolver = Self::new(settings_repo, width_probe);
        resolver.scan_args(args);
        resolver
    }

    /// 인식 가능한 `--<name>=<value>` 장형 플래그를 수집한다.
    /// 같은 플래그의 반복 출현은 첫 값만 인정하고, 나머지 토큰은 건드리지 않는다.
    fn scan_args(&mut self, args: &[String]) {
        for token in args {
            let Some(rest) = token.strip_prefix("--") else {
                continue;
            };
            let Some((name, value)) = rest.split_once('=') else {
                continue;
            };
            let Some(key) = SettingKey::from_long_flag(name) else {
                continue;
            };
            if self.slot(key).cli.is_some() {
                continue;
            }

            let width = self.coerce(key, &RawValue::from(value));
            self.slot_mut(key).cli = Some(width);
        }
    }

    /// 우선순위에 따라 확정된 설정 값을 반환한다. 결과는 캐시되어 반복 조회가 멱등이다.
    pub fn get(&mut self, key: SettingKey) -> u32 {
        if let Some(resolved) = self.slot(key).resolved {
            return resolved.value;
        }

        let resolved = self.resolve(key);
        self.slot_mut(key).resolved = Some(resolved);
        resolved.value
    }

    /// 값이 확정된 출처 계층을 반환한다(진단용). 미확정이면 먼저 확정한다.
    pub fn source(&mut self, key: SettingKey) -> SourceLayer {
        self.get(key);
        match self.slot(key).resolved {
            Some(resolved) => resolved.source,
            None => SourceLayer::CompiledDefault,
        }
    }

    /// 임의 입력을 강제 변환해 명시 오버라이드로 저장한다.
    /// 이후 모든 조회에서 CLI/파일 계층보다 우선한다.
    pub fn set(&mut self, key: SettingKey, value: impl Into<RawValue>) {
        let width = self.coerce(key, &value.into());
        self.slot_mut(key).resolved = Some(Resolved {
            value: width,
            source: SourceLayer::ExplicitOverride,
        });
    }

    /// 리포트 폭 전용 타입드 접근자.
    pub fn report_width(&mut self) -> u32 {
        self.get(SettingKey::ReportWidth)
    }

    fn resolve(&mut self, key: SettingKey) -> Resolved {
        if let Some(width) = self.slot(key).cli {
            return Resolved {
                value: width,
                source: SourceLayer::CommandLine,
            };
        }

        if let Some(raw) = self.file_value(key) {
            let width = self.coerce(key, &RawValue::Str(raw));
            return Resolved {
                value: width,
                source: SourceLayer::PersistedFile,
            };
        }

        Resolved {
            value: key.default_value(),
            source: SourceLayer::CompiledDefault,
        }
    }

    /// 파일 계층은 최초 접근 시 한 번만 로딩한다. 로딩 실패는 "계층 없음"으로 취급한다.
    fn file_value(&mut self, key: SettingKey) -> Option<String> {
        if self.file_data.is_none() {
            let data = match self.settings_repo.load() {
                Ok(loaded) => loaded.data,
                Err(err) => {
                    tracing::debug!("settings file layer unavailable: {err:#}");
                    BTreeMap::new()
                }
            };
            self.file_data = Some(data);
        }

        self.file_data
            .as_ref()
            .and_then(|data| data.get(key.file_key()).cloned())
    }

    /// 강제 변환 정책을 적용하고 `auto`/무효 입력을 확정 값으로 수렴시킨다.
    fn coerce(&mut self, key: SettingKey, raw: &RawValue) -> u32 {
        match coerce_width(raw) {
            CoercedWidth::Fixed(width) => width,
            CoercedWidth::Auto => self.probed_width().unwrap_or_else(|| key.default_value()),
            CoercedWidth::Unusable => key.default_value(),
        }
    }

    fn probed_width(&mut self) -> Option<u32> {
        if let Some(cached) = self.probe_cache {
            return cached;
        }

        let width = self.width_probe.probe_width().filter(|w| *w > 0);
        self.probe_cache = Some(width);
        width
    }

    fn slot(&self, key: SettingKey) -> &SettingSlot {
        match key {
            SettingKey::ReportWidth => &self.report_width,
        }
    }

    fn slot_mut(&mut self, key: SettingKey) -> &mut SettingSlot {
        match key {
            SettingKey::ReportWidth => &mut self.report_width,
        }
    }
}
