//! 도메인 모델 모듈
//!
//! 유스케이스 경계를 넘나드는 값 객체를 정의합니다.

pub mod account;

pub use account::AccountModel;
