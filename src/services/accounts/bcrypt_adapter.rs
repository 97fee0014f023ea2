//! bcrypt 기반 [`Encrypter`] 구현
//!
//! - **적응형 해시**: cost가 높을수록 무차별 대입 비용 증가
//! - **솔트 자동 생성**: 같은 비밀번호도 매번 다른 해시
//! - **환경별 cost**: [`PasswordConfig::bcrypt_cost`] 참고

use async_trait::async_trait;
use bcrypt::hash;

use crate::config::PasswordConfig;
use crate::core::errors::AppError;
use crate::services::accounts::protocols::Encrypter;

pub struct BcryptAdapter {
    cost: u32,
}

impl BcryptAdapter {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// 현재 환경 설정의 cost로 생성합니다.
    pub fn from_config() -> Self {
        Self::new(PasswordConfig::bcrypt_cost())
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

#[async_trait]
impl Encrypter for BcryptAdapter {
    async fn encrypt(&self, value: &str) -> Result<String, AppError> {
        hash(value, self.cost)
            .map_err(|e| AppError::EncryptionError(format!("비밀번호 해싱 실패: {}", e)))
    }
}
