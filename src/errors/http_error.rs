//! 클라이언트에게 노출되는 에러 값
//!
//! 회원가입 요청이 거절될 때 응답 본문에 담기는 세 가지 에러를 정의합니다.
//! 각 변형은 불변의 종단 값이며, 생성된 이후 변경되지 않습니다.
//!
//! | 변형 | 메시지 | 상태 코드 |
//! |------|--------|-----------|
//! | `MissingParam(field)` | `Missing param: {field}` | 400 |
//! | `InvalidParam(field)` | `Invalid param: {field}` | 400 |
//! | `ServerError` | `Internal server error` | 500 |
//!
//! ## 직렬화 형식
//!
//! ```json
//! {
//!   "error": "missing_param",
//!   "message": "Missing param: email"
//! }
//! ```

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use thiserror::Error;

/// 응답 본문으로 사용되는 에러 값
///
/// 동등성은 종류와 필드 이름으로 판단합니다. `ServerError`는 종류만 비교합니다.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HttpError {
    /// 필수 필드가 없거나 비어 있음
    #[error("Missing param: {0}")]
    MissingParam(String),

    /// 필드 값이 규칙을 위반함
    #[error("Invalid param: {0}")]
    InvalidParam(String),

    /// 내부 장애. 원인 정보는 절대 담지 않습니다.
    #[error("Internal server error")]
    ServerError,
}

impl HttpError {
    pub fn missing_param(field: impl Into<String>) -> Self {
        HttpError::MissingParam(field.into())
    }

    pub fn invalid_param(field: impl Into<String>) -> Self {
        HttpError::InvalidParam(field.into())
    }

    /// 직렬화 시 `error` 필드에 들어가는 종류 식별자
    pub fn kind(&self) -> &'static str {
        match self {
            HttpError::MissingParam(_) => "missing_param",
            HttpError::InvalidParam(_) => "invalid_param",
            HttpError::ServerError => "server_error",
        }
    }

    /// 에러가 가리키는 필드 이름 (`ServerError`는 None)
    pub fn field(&self) -> Option<&str> {
        match self {
            HttpError::MissingParam(field) | HttpError::InvalidParam(field) => Some(field),
            HttpError::ServerError => None,
        }
    }
}

impl Serialize for HttpError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("HttpError", 2)?;
        state.serialize_field("error", self.kind())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_messages() {
        assert_eq!(HttpError::missing_param("email").to_string(), "Missing param: email");
        assert_eq!(
            HttpError::invalid_param("pwdConfirmation").to_string(),
            "Invalid param: pwdConfirmation"
        );
        assert_eq!(HttpError::ServerError.to_string(), "Internal server error");
    }

    #[test]
    fn test_equality_by_kind_and_field() {
        assert_eq!(HttpError::missing_param("name"), HttpError::missing_param("name"));
        assert_ne!(HttpError::missing_param("name"), HttpError::missing_param("email"));
        assert_ne!(HttpError::missing_param("email"), HttpError::invalid_param("email"));
        assert_eq!(HttpError::ServerError, HttpError::ServerError);
    }

    #[test]
    fn test_field_accessor() {
        assert_eq!(HttpError::invalid_param("email").field(), Some("email"));
        assert_eq!(HttpError::ServerError.field(), None);
    }

    #[test]
    fn test_serialization_shape() {
        let value = serde_json::to_value(HttpError::missing_param("pwd")).unwrap();
        assert_eq!(
            value,
            json!({ "error": "missing_param", "message": "Missing param: pwd" })
        );

        let value = serde_json::to_value(HttpError::ServerError).unwrap();
        assert_eq!(
            value,
            json!({ "error": "server_error", "message": "Internal server error" })
        );
    }
}
