//! 계정 생성 서비스 모듈
//!
//! [`AddAccount`](crate::domain::usecases::AddAccount) 유스케이스의 구현과
//! 그 구현이 의존하는 하위 능력을 제공합니다.
//!
//! # Security
//!
//! - bcrypt 비밀번호 해싱 (평문 비밀번호는 저장되지 않음)
//! - `AddAccountModel`의 Debug 출력에서 비밀번호 마스킹
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::services::accounts::{BcryptAdapter, DbAddAccount};
//! use crate::repositories::accounts::InMemoryAccountRepository;
//!
//! let add_account = DbAddAccount::new(
//!     Arc::new(BcryptAdapter::from_config()),
//!     Arc::new(InMemoryAccountRepository::new()),
//! );
//! let account = add_account.add(model).await?;
//! ```

pub mod bcrypt_adapter;
pub mod db_add_account;
pub mod protocols;

pub use bcrypt_adapter::BcryptAdapter;
pub use db_add_account::DbAddAccount;
pub use protocols::{AddAccountRepository, Encrypter};
