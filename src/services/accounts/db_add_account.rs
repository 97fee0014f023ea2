//! # 계정 생성 서비스 구현
//!
//! [`AddAccount`] 유스케이스의 기본 구현입니다.
//!
//! ## 처리 과정
//!
//! ```text
//! AddAccountModel { name, email, pwd }
//!        │
//!        ▼  Encrypter::encrypt(pwd)          ← bcrypt
//! AddAccountModel { name, email, pwd: hash }
//!        │
//!        ▼  AddAccountRepository::add        ← MongoDB / 메모리
//! AccountModel { id, name, email, pwd: hash }
//! ```
//!
//! 어느 단계의 에러든 가공 없이 그대로 호출자에게 전파됩니다.

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;

use crate::core::errors::AppError;
use crate::domain::models::AccountModel;
use crate::domain::usecases::{AddAccount, AddAccountModel};
use crate::services::accounts::protocols::{AddAccountRepository, Encrypter};

/// 비밀번호를 해싱한 뒤 저장소에 계정을 기록하는 유스케이스
pub struct DbAddAccount {
    encrypter: Arc<dyn Encrypter>,
    repository: Arc<dyn AddAccountRepository>,
}

impl DbAddAccount {
    pub fn new(encrypter: Arc<dyn Encrypter>, repository: Arc<dyn AddAccountRepository>) -> Self {
        Self {
            encrypter,
            repository,
        }
    }
}

#[async_trait]
impl AddAccount for DbAddAccount {
    async fn add(&self, account: AddAccountModel) -> Result<AccountModel, AppError> {
        let start_time = Instant::now();

        let hashed_pwd = self.encrypter.encrypt(&account.pwd).await?;
        log::debug!("Password hashing took: {:?}", start_time.elapsed());

        let created = self
            .repository
            .add(AddAccountModel {
                pwd: hashed_pwd,
                ..account
            })
            .await?;

        log::info!("Total account creation took: {:?}", start_time.elapsed());
        Ok(created)
    }
}
