//! 프로토콜 모듈
//!
//! 컨트롤러 계층이 의존하는 인터페이스를 모아둡니다.
//!
//! - [`http`] - 전송 계층과 무관한 요청/응답 봉투
//! - [`controller`] - `exec(request) -> response` 계약
//! - [`email_validator`] - 이메일 형식 검증 능력

pub mod controller;
pub mod email_validator;
pub mod http;

pub use controller::Controller;
pub use email_validator::EmailValidator;
pub use http::{HttpRequest, HttpResponse, ResponseBody};
