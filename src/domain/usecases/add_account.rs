//! 계정 생성 유스케이스 계약
//!
//! 컨트롤러가 의존하는 계정 생성 능력을 trait으로 추상화합니다.
//! 영속화 방식은 구현체의 책임이며, 컨트롤러는 결과 계정 또는 실패만 관찰합니다.

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::core::errors::AppError;
use crate::domain::models::AccountModel;

#[cfg(test)]
use mockall::automock;

/// 계정 생성 입력값
///
/// 비밀번호 확인 필드는 컨트롤러 경계에서 버려지므로 여기에 존재하지 않습니다.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddAccountModel {
    pub name: String,
    pub email: String,
    pub pwd: String,
}

// 로그에 비밀번호가 찍히지 않도록 직접 구현
impl fmt::Debug for AddAccountModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AddAccountModel")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("pwd", &"***")
            .finish()
    }
}

/// 계정 생성 능력
///
/// 실패는 `Err(AppError)`로 알리며, 호출자(컨트롤러)가 500 응답으로 변환합니다.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AddAccount: Send + Sync {
    /// 새 계정을 만들고 저장된 결과를 반환합니다.
    async fn add(&self, account: AddAccountModel) -> Result<AccountModel, AppError>;
}
