//! # Core Module
//!
//! 계층 전반에서 공유되는 핵심 타입을 제공합니다.
//!
//! ### [`errors`] - 내부 에러 처리
//! - **AppError**: 협력 객체(검증기, 유스케이스, 저장소)의 실패 표현
//! - **ErrorContext**: 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
//!
//! 의존성은 전역 레지스트리 없이 생성자 인자로 명시적으로 주입됩니다.
//! 조립은 `main.rs` 한 곳에서만 이루어집니다.

pub mod errors;

pub use errors::*;
