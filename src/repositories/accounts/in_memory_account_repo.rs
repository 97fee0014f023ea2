//! 메모리 기반 계정 리포지토리
//!
//! 개발 환경과 테스트에서 사용합니다. 프로세스가 종료되면 데이터도 사라집니다.

use std::sync::RwLock;

use async_trait::async_trait;
use uuid::Uuid;

use crate::core::errors::{AppError, ErrorContext};
use crate::domain::models::AccountModel;
use crate::domain::usecases::AddAccountModel;
use crate::services::accounts::protocols::AddAccountRepository;

#[derive(Default)]
pub struct InMemoryAccountRepository {
    accounts: RwLock<Vec<AccountModel>>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 저장된 계정 수
    pub fn len(&self) -> Result<usize, AppError> {
        let accounts = self
            .accounts
            .read()
            .context("계정 저장소 잠금 실패")?;
        Ok(accounts.len())
    }

    pub fn is_empty(&self) -> Result<bool, AppError> {
        Ok(self.len()? == 0)
    }

    pub fn find_by_email(&self, email: &str) -> Result<Option<AccountModel>, AppError> {
        let accounts = self
            .accounts
            .read()
            .context("계정 저장소 잠금 실패")?;
        Ok(accounts.iter().find(|account| account.email == email).cloned())
    }
}

#[async_trait]
impl AddAccountRepository for InMemoryAccountRepository {
    async fn add(&self, account: AddAccountModel) -> Result<AccountModel, AppError> {
        let created = AccountModel {
            id: Uuid::new_v4().to_string(),
            name: account.name,
            email: account.email,
            pwd: account.pwd,
        };

        self.accounts
            .write()
            .context("계정 저장소 잠금 실패")?
            .push(created.clone());

        Ok(created)
    }
}
