//! 설정 키 레지스트리와 폭(width) 계열 설정의 강제 변환 정책.

use super::raw::RawValue;

/// 리포트 폭의 컴파일 타임 기본값(컬럼 수).
/// 다른 컴포넌트가 "미설정" 판별에 쓸 수 있도록 공개 계약의 일부다.
pub const DEFAULT_REPORT_WIDTH: u32 = 80;

/// 인식 가능한 설정 키 목록.
/// 동적 프로퍼티 접근 대신 열거형 디스패치로 키별 정책을 고정한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingKey {
    ReportWidth,
}

impl SettingKey {
    pub const ALL: &'static [SettingKey] = &[SettingKey::ReportWidth];

    /// CLI 장형 플래그 이름(`--` 접두사 제외).
    pub fn long_flag(self) -> &'static str {
        match self {
            SettingKey::ReportWidth => "report-width",
        }
    }

    /// 영속 설정 파일의 snake_case 키.
    pub fn file_key(self) -> &'static str {
        match self {
            SettingKey::ReportWidth => "report_width",
        }
    }

    /// 컴파일 타임 기본값.
    pub fn default_value(self) -> u32 {
        match self {
            SettingKey::ReportWidth => DEFAULT_REPORT_WIDTH,
        }
    }

    /// 장형 플래그 이름으로 키를 역조회한다.
    pub fn from_long_flag(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|key| key.long_flag() == name)
    }
}

/// 폭 입력의 강제 변환 결과.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoercedWidth {
    /// 양의 정수로 확정된 값.
    Fixed(u32),
    /// 환경 탐지가 필요한 `auto` 센티널.
    Auto,
    /// 의미 있는 값이 아님. 호출 측이 기본값으로 대체한다.
    Unusable,
}

/// 원시 입력을 폭 도메인 값으로 강제 변환하는 전함수.
///
/// 실패를 에러로 올리지 않고 `Unusable`로 수렴시킨다.
/// - `"auto"`(대소문자 구분)는 환경 탐지 대상으로 표시한다.
/// - 빈 문자열/널/불리언/실수는 "값 없음"으로 취급한다.
/// - 문자열은 선행 `-` 하나를 제외하면 십진 숫자만 인정한다(`"50.25"`는 무효).
/// - 정수는 절댓값을 취한다(음수는 거부가 아니라 정규화).
/// - 0과 도메인 범위를 벗어나는 크기는 저장할 수 없는 값으로 취급한다.
pub fn coerce_width(raw: &RawValue) -> CoercedWidth {
    match raw {
        RawValue::Str(s) if s == "auto" => CoercedWidth::Auto,
        RawValue::Str(s) => coerce_width_str(s),
        RawValue::Int(n) => match u32::try_from(n.unsigned_abs()) {
            Ok(width) if width > 0 => CoercedWidth::Fixed(width),
            _ => CoercedWidth::Unusable,
        },
        RawValue::Float(_) | RawValue::Bool(_) | RawValue::Null => CoercedWidth::Unusable,
    }
}

fn coerce_width_str(s: &str) -> CoercedWidth {
    let digits = s.strip_prefix('-').unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return CoercedWidth::Unusable;
    }

    match digits.parse::<u32>() {
        Ok(width) if width > 0 => CoercedWidth::Fixed(width),
        // 0 또는 범위 초과.
        _ => CoercedWidth::Unusable,
    }
}
