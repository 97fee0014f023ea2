//! 데이터 및 서버 설정 관리 모듈
//!
//! 실행 환경, 서버 바인딩, 비밀번호 해싱, 계정 저장소 관련 설정을 관리합니다.

use std::env;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경 - 빠른 개발을 위한 설정
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경 - 최고 수준의 보안 및 성능
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 또는 `NODE_ENV` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        let name = env::var("ENVIRONMENT")
            .or_else(|_| env::var("NODE_ENV"))
            .unwrap_or_else(|_| "production".to_string());

        Self::from_str(&name)
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// 패스워드 해싱 설정
pub struct PasswordConfig;

impl PasswordConfig {
    /// 현재 환경에 맞는 bcrypt cost를 반환합니다.
    ///
    /// `BCRYPT_COST`가 4-15 범위의 숫자면 그 값을, 아니면 환경별 기본값을 사용합니다.
    ///
    /// # Environment Defaults
    ///
    /// - Development/Test: 4 (빠른 처리)
    /// - Staging: 10 (중간 보안)
    /// - Production: 12 (고보안)
    pub fn bcrypt_cost() -> u32 {
        Self::parse_cost(env::var("BCRYPT_COST").ok().as_deref())
            .unwrap_or_else(|| Self::bcrypt_cost_for_env(&Environment::current()))
    }

    /// 특정 환경에 대한 bcrypt cost를 반환합니다.
    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development => 4,
            Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }

    fn parse_cost(raw: Option<&str>) -> Option<u32> {
        raw?.parse::<u32>()
            .ok()
            .filter(|cost| (4..=15).contains(cost))
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트를 반환합니다. 기본값: 8080
    ///
    /// # Environment Variables
    ///
    /// - `PORT`: 커스텀 포트 설정
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080)
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다. 기본값: "127.0.0.1"
    ///
    /// # Environment Variables
    ///
    /// - `HOST`: 커스텀 호스트 설정
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
    }

    /// actix 워커 스레드 수. 기본값: 4
    pub fn workers() -> usize {
        env::var("SERVER_WORKERS")
            .ok()
            .and_then(|value| value.parse().ok())
            .filter(|workers| *workers > 0)
            .unwrap_or(4)
    }

    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// MongoDB 연결 설정
pub struct DatabaseConfig;

impl DatabaseConfig {
    /// `MONGODB_URI` (기본값: "mongodb://localhost:27017")
    pub fn uri() -> String {
        env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
    }

    /// `DATABASE_NAME` (기본값: "signup_dev")
    pub fn database_name() -> String {
        env::var("DATABASE_NAME").unwrap_or_else(|_| "signup_dev".to_string())
    }
}

/// 계정 저장소 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountStore {
    /// 프로세스 메모리 (재시작 시 소멸)
    Memory,
    /// MongoDB `accounts` 컬렉션
    MongoDb,
}

impl AccountStore {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountStore::Memory => "memory",
            AccountStore::MongoDb => "mongodb",
        }
    }
}

/// 계정 저장소 선택 설정
pub struct AccountStoreConfig;

impl AccountStoreConfig {
    /// 사용할 저장소를 반환합니다.
    ///
    /// `ACCOUNT_STORE`가 `memory` 또는 `mongodb`면 그 값을 따르고,
    /// 없거나 알 수 없는 값이면 환경별 기본값을 사용합니다.
    pub fn kind() -> AccountStore {
        let raw = env::var("ACCOUNT_STORE").ok();
        Self::resolve(raw.as_deref(), &Environment::current())
    }

    /// 명시값과 실행 환경으로 저장소를 결정합니다.
    ///
    /// - Development/Test: `Memory`
    /// - Staging/Production: `MongoDb`
    pub fn resolve(raw: Option<&str>, env: &Environment) -> AccountStore {
        match raw.map(|value| value.trim().to_lowercase()).as_deref() {
            Some("memory") | Some("in_memory") => AccountStore::Memory,
            Some("mongodb") | Some("mongo") => AccountStore::MongoDb,
            _ => match env {
                Environment::Development | Environment::Test => AccountStore::Memory,
                Environment::Staging | Environment::Production => AccountStore::MongoDb,
            },
        }
    }
}
