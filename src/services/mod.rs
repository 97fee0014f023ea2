//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 도메인 유스케이스 trait의 구체 구현을 제공합니다.
//! 모든 의존성은 생성자 인자로 주입됩니다.
//!
//! # Features
//!
//! - 계정 생성 (비밀번호 해싱 + 저장)
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::accounts::DbAddAccount;
//!
//! let add_account = DbAddAccount::new(encrypter, repository);
//! ```

pub mod accounts;
