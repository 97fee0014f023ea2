//! 이메일 검증 어댑터
//!
//! [`EmailValidator`] 능력을 `validator` 크레이트의 이메일 검증에 연결합니다.
//! 판단은 전적으로 라이브러리에 맡기고, 결과를 가공하지 않습니다.

use validator::ValidateEmail;

use crate::core::errors::AppError;
use crate::domain::protocols::EmailValidator;

/// `validator` 크레이트 기반 이메일 검증기
#[derive(Debug, Default, Clone, Copy)]
pub struct EmailValidatorAdapter;

impl EmailValidatorAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl EmailValidator for EmailValidatorAdapter {
    fn is_valid(&self, email: &str) -> Result<bool, AppError> {
        Ok(email.validate_email())
    }
}
