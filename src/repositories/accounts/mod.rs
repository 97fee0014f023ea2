//! 계정 리포지토리 모듈
//!
//! [`AddAccountRepository`](crate::services::accounts::AddAccountRepository) 구현체를 제공합니다.
//!
//! - [`MongoAccountRepository`] - MongoDB `accounts` 컬렉션
//! - [`InMemoryAccountRepository`] - 프로세스 메모리 (개발/테스트)

pub mod in_memory_account_repo;
pub mod mongo_account_repo;

pub use in_memory_account_repo::InMemoryAccountRepository;
pub use mongo_account_repo::MongoAccountRepository;
