//! 영속 설정(JSON) 로딩/병합 모듈.
//! 여러 경로의 설정 파일을 우선순위대로 병합하고, 진단용 출처 경로를 함께 제공한다.

mod loader;

pub use loader::settings_paths;
pub(crate) use loader::load_merged_settings;
