//! 응답 봉투 생성 헬퍼
//!
//! 부수 효과가 없는 순수 생성 함수들입니다. 상태 코드와 본문 종류의 대응
//! (400 ↔ 필드 에러, 200 ↔ 계정, 500 ↔ ServerError)은 이 함수들로만 만들어집니다.

use crate::domain::models::AccountModel;
use crate::domain::protocols::{HttpResponse, ResponseBody};
use crate::errors::HttpError;

/// `{ statusCode: 400, body: error }`
pub fn bad_request(error: HttpError) -> HttpResponse {
    HttpResponse {
        status_code: 400,
        body: ResponseBody::Error(error),
    }
}

/// `{ statusCode: 200, body: account }`
pub fn ok(account: AccountModel) -> HttpResponse {
    HttpResponse {
        status_code: 200,
        body: ResponseBody::Account(account),
    }
}

/// `{ statusCode: 500, body: ServerError }`
pub fn server_error() -> HttpResponse {
    HttpResponse {
        status_code: 500,
        body: ResponseBody::Error(HttpError::ServerError),
    }
}
