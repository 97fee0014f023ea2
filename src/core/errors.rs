//! # Infrastructure Error System
//!
//! 캡슐화된 협력 객체(이메일 검증기, 계정 생성 유스케이스, 암호화기, 저장소)가
//! 실패를 알릴 때 사용하는 내부 에러 타입입니다.
//!
//! 이 에러는 **절대** 클라이언트에게 그대로 전달되지 않습니다.
//! 컨트롤러 경계에서 모두 [`HttpError::ServerError`](crate::errors::HttpError)로
//! 정규화되고, 원본 메시지는 로그에만 남습니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, ErrorContext};
//!
//! async fn store(&self, account: AddAccountModel) -> Result<AccountModel, AppError> {
//!     let result = self.collection()
//!         .insert_one(&document)
//!         .await
//!         .map_err(|e| AppError::DatabaseError(e.to_string()))?;
//!
//!     let hashed = bcrypt::hash(&account.pwd, cost).context("비밀번호 해싱 실패")?;
//!     // ...
//! }
//! ```

use thiserror::Error;

/// 애플리케이션 내부 에러 타입
///
/// 협력 객체 계층에서 발생할 수 있는 실패를 분류합니다.
/// 어떤 변형이든 HTTP 경계에서는 500 응답 하나로 수렴합니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 비밀번호 해싱 등 암호화 관련 에러
    #[error("Encryption error: {0}")]
    EncryptionError(String),

    /// 외부 검증 라이브러리 에러
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 내부 서버 에러
    #[error("Internal server error: {0}")]
    InternalError(String),
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}
