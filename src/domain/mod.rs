//! # Domain Layer
//!
//! 회원가입 파이프라인의 계약과 값 객체를 정의하는 계층입니다.
//! 이 계층은 actix-web, MongoDB 등 구체적인 인프라에 의존하지 않습니다.
//!
//! ```text
//! domain/
//! ├── models/      ← AccountModel (유스케이스 결과)
//! ├── protocols/   ← HttpRequest/HttpResponse, Controller, EmailValidator
//! └── usecases/    ← AddAccount, AddAccountModel
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::domain::protocols::{Controller, HttpRequest};
//!
//! let response = controller.exec(HttpRequest::new(body)).await;
//! assert_eq!(response.status_code, 200);
//! ```

pub mod models;
pub mod protocols;
pub mod usecases;

pub use models::*;
pub use protocols::*;
pub use usecases::*;
