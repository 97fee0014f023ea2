//! 회원가입 서비스 백엔드
//!
//! 컨트롤러 / 유스케이스 / 프로토콜 계층으로 나뉜 계정 생성 엔드포인트입니다.
//! 입력 검증, 필드 간 일관성 검사, 계정 생성 위임, 결과의 응답 봉투 변환을 담당합니다.
//!
//! # Features
//!
//! - **회원가입 파이프라인**: 필수 필드 → 비밀번호 확인 → 이메일 형식 → 계정 생성
//! - **일관된 응답 봉투**: `{ statusCode, body }` (200 / 400 / 500)
//! - **장애 격리**: 협력 객체의 에러와 panic을 모두 500 응답으로 정규화
//! - **생성자 주입**: 전역 레지스트리 없이 `Arc<dyn Trait>`로 능력 주입
//! - **저장소 선택**: MongoDB 또는 메모리
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← actix-web 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← SignUpController (검증 + 응답 봉투)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← DbAddAccount (해싱 + 저장 위임)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← MongoDB / InMemory
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use signup_service_backend::domain::protocols::{Controller, HttpRequest};
//! use signup_service_backend::handlers::signup::SignUpController;
//! use signup_service_backend::repositories::accounts::InMemoryAccountRepository;
//! use signup_service_backend::services::accounts::{BcryptAdapter, DbAddAccount};
//! use signup_service_backend::utils::email_validator_adapter::EmailValidatorAdapter;
//!
//! let add_account = DbAddAccount::new(
//!     Arc::new(BcryptAdapter::new(12)),
//!     Arc::new(InMemoryAccountRepository::new()),
//! );
//! let controller = SignUpController::new(
//!     Arc::new(EmailValidatorAdapter::new()),
//!     Arc::new(add_account),
//! );
//!
//! let response = controller.exec(HttpRequest::new(body)).await;
//! ```

pub mod config;
pub mod core;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod utils;
