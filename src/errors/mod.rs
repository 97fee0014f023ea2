//! HTTP 경계 에러 모듈
//!
//! 회원가입 파이프라인이 400/500 응답 본문으로 돌려주는 에러 값을 제공합니다.
//! 내부 장애 표현은 [`crate::core::errors::AppError`]를 참고하세요.

pub mod http_error;

pub use http_error::HttpError;
