//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 컨트롤러 계층입니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   actix-web (routes)                           ← Transport
//! └─────────────────────┬───────────────────────┘
//!                       │ web::Bytes / HttpResponse
//! ┌─────────────────────▼───────────────────────┐
//!   adapter - 전송 타입 ↔ HttpRequest/HttpResponse
//! ├─────────────────────────────────────────────┤
//!   signup  - SignUpController (검증 + 위임)      ← Controller
//! ├─────────────────────────────────────────────┤
//!   EmailValidator / AddAccount (주입된 능력)      ← Protocols / Use cases
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 모듈 구성
//!
//! - **`signup`**: 회원가입 컨트롤러와 `POST /api/signup` 엔드포인트
//! - **`helpers`**: `bad_request`, `ok`, `server_error` 응답 생성 함수
//! - **`adapter`**: actix-web 요청/응답과 프로토콜 타입 간 변환
//!
//! ## 설정 예제
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//! use crate::handlers::signup::SignUpController;
//!
//! let controller = web::Data::new(SignUpController::new(email_validator, add_account));
//!
//! App::new()
//!     .app_data(controller.clone())
//!     .configure(configure_all_routes)
//! ```

pub mod adapter;
pub mod helpers;
pub mod signup;
