//! lintpilot 라이브러리 루트.
//! Clean Architecture + DDD 계층을 외부에 노출한다.

use anyhow::Result;

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interface;

use interface::cli::AppComposition;

/// 설정 점검 JSON 출력용 함수.
pub fn inspect_settings_pretty_json(args: &[String]) -> Result<String> {
    let composition = AppComposition::default();
    composition.inspect_settings_usecase().execute(args)
}
