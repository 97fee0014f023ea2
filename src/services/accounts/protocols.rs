//! 계정 생성 유스케이스가 의존하는 하위 능력

use async_trait::async_trait;

use crate::core::errors::AppError;
use crate::domain::models::AccountModel;
use crate::domain::usecases::AddAccountModel;

#[cfg(test)]
use mockall::automock;

/// 값을 단방향으로 암호화(해싱)하는 능력
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Encrypter: Send + Sync {
    async fn encrypt(&self, value: &str) -> Result<String, AppError>;
}

/// 계정을 저장하고 ID가 할당된 결과를 돌려주는 저장소
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AddAccountRepository: Send + Sync {
    async fn add(&self, account: AddAccountModel) -> Result<AccountModel, AppError>;
}
