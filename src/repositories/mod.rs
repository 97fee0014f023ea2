//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 계정 저장 방식은 `ACCOUNT_STORE` 설정으로 선택합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::accounts::InMemoryAccountRepository;
//!
//! let repo = InMemoryAccountRepository::new();
//! let account = repo.add(model).await?;
//! ```

pub mod accounts;
