//! # MongoDB 계정 리포지토리
//!
//! `accounts` 컬렉션에 계정을 기록합니다.
//!
//! - **컬렉션명**: `accounts`
//! - **ID**: MongoDB가 할당한 `ObjectId`의 16진수 문자열

use std::sync::Arc;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use mongodb::Collection;
use serde::{Deserialize, Serialize};

use crate::core::errors::AppError;
use crate::db::Database;
use crate::domain::models::AccountModel;
use crate::domain::usecases::AddAccountModel;
use crate::services::accounts::protocols::AddAccountRepository;

pub const ACCOUNTS_COLLECTION: &str = "accounts";

/// `accounts` 컬렉션에 저장되는 문서
#[derive(Debug, Clone, Serialize, Deserialize)]
struct AccountDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    name: String,
    email: String,
    pwd: String,
}

impl From<AddAccountModel> for AccountDocument {
    fn from(account: AddAccountModel) -> Self {
        Self {
            id: None,
            name: account.name,
            email: account.email,
            pwd: account.pwd,
        }
    }
}

/// MongoDB 기반 계정 저장소
pub struct MongoAccountRepository {
    db: Arc<Database>,
}

impl MongoAccountRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<AccountDocument> {
        self.db.get_database().collection(ACCOUNTS_COLLECTION)
    }
}

#[async_trait]
impl AddAccountRepository for MongoAccountRepository {
    async fn add(&self, account: AddAccountModel) -> Result<AccountModel, AppError> {
        let document = AccountDocument::from(account);

        let result = self
            .collection()
            .insert_one(&document)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::DatabaseError("삽입된 문서의 ID가 ObjectId가 아닙니다".to_string())
        })?;

        Ok(AccountModel {
            id: id.to_hex(),
            name: document.name,
            email: document.email,
            pwd: document.pwd,
        })
    }
}
