//! HTTP 요청/응답 프로토콜
//!
//! 전송 계층과 무관한 요청/응답 봉투(envelope)를 정의합니다.
//! actix-web 타입과의 변환은 핸들러 어댑터에서만 일어납니다.
//!
//! ```text
//! HttpRequest { body: {"name": ..., "email": ..., ...} }
//!            │
//!            ▼  Controller::exec
//! HttpResponse { statusCode: 200 | 400 | 500, body: Account | Error }
//! ```

use serde::Serialize;
use serde_json::Value;

use crate::domain::models::AccountModel;
use crate::errors::HttpError;

/// 이미 파싱된 요청
///
/// 본문 스키마는 강제하지 않습니다. 필드 존재 여부 검사는 컨트롤러의 몫입니다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HttpRequest {
    pub body: Option<Value>,
}

impl HttpRequest {
    pub fn new(body: Value) -> Self {
        Self { body: Some(body) }
    }

    /// 본문이 없는 요청
    pub fn empty() -> Self {
        Self::default()
    }

    /// 본문에서 문자열 필드를 꺼냅니다.
    ///
    /// 필드가 없거나, 문자열이 아니거나, 빈 문자열이면 `None`입니다.
    pub fn param(&self, field: &str) -> Option<&str> {
        self.body
            .as_ref()?
            .get(field)?
            .as_str()
            .filter(|value| !value.is_empty())
    }
}

/// 응답 본문
///
/// 생성된 계정 또는 에러 값, 둘 중 하나입니다.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResponseBody {
    Account(AccountModel),
    Error(HttpError),
}

/// 상태 코드와 본문으로 구성된 응답 봉투
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpResponse {
    pub status_code: u16,
    pub body: ResponseBody,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    /// 본문이 에러 값이면 참조를 반환합니다.
    pub fn error(&self) -> Option<&HttpError> {
        match &self.body {
            ResponseBody::Error(error) => Some(error),
            ResponseBody::Account(_) => None,
        }
    }
}
