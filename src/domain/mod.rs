//! Domain layer
//! 설정 도메인 규칙(원시 입력 표현/강제 변환 정책)을 외부 의존성 없이 표현한다.

pub mod raw;
pub mod setting;
