//! 공통 유틸리티 모듈
//!
//! 외부 라이브러리를 도메인 프로토콜에 맞춰 감싸는 어댑터를 제공합니다.
//!
//! # Modules
//!
//! - [`email_validator_adapter`] - `validator` 크레이트 기반 [`EmailValidator`] 구현
//!
//! [`EmailValidator`]: crate::domain::protocols::EmailValidator
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::email_validator_adapter::EmailValidatorAdapter;
//!
//! let validator = EmailValidatorAdapter::new();
//! assert!(validator.is_valid("user@example.com")?);
//! ```

pub mod email_validator_adapter;
