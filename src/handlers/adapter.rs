//! actix-web 라우트 어댑터
//!
//! 전송 계층(actix-web)과 [`Controller`] 사이의 변환만 담당합니다.
//!
//! - 요청: 원시 본문 바이트 → JSON → [`HttpRequest`]
//!   (본문이 비었거나 JSON이 아니면 본문 없는 요청으로 취급)
//! - 응답: [`HttpResponse`]의 `statusCode` → HTTP 상태, `body` → JSON 본문

use actix_web::http::StatusCode;
use actix_web::HttpResponse as ActixResponse;
use log::debug;
use serde_json::Value;

use crate::domain::protocols::{Controller, HttpRequest, HttpResponse};

/// 원시 본문을 컨트롤러에 전달하고 결과를 actix 응답으로 변환합니다.
pub async fn adapt_route(controller: &dyn Controller, body: &[u8]) -> ActixResponse {
    let request = parse_request(body);
    let response = controller.exec(request).await;

    into_actix_response(response)
}

/// 요청 본문을 해석합니다. 실패해도 에러를 내지 않고 본문 없는 요청을 만듭니다.
pub fn parse_request(body: &[u8]) -> HttpRequest {
    if body.is_empty() {
        return HttpRequest::empty();
    }

    match serde_json::from_slice::<Value>(body) {
        Ok(value) => HttpRequest::new(value),
        Err(e) => {
            debug!("요청 본문 JSON 파싱 실패: {}", e);
            HttpRequest::empty()
        }
    }
}

pub fn into_actix_response(response: HttpResponse) -> ActixResponse {
    let status = StatusCode::from_u16(response.status_code)
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    ActixResponse::build(status).json(response.body)
}
