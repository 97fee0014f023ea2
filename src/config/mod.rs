//! # Configuration Module
//!
//! 환경 변수 기반 설정을 타입이 있는 접근자로 제공합니다.
//! `main.rs`가 시작 시 `PROFILE`에 맞는 `.env` 파일을 먼저 로드합니다.
//!
//! ## 환경 변수
//!
//! ```bash
//! # 실행 환경 (development, test, staging, production)
//! export ENVIRONMENT="development"
//!
//! # 서버 설정
//! export HOST="127.0.0.1"
//! export PORT="8080"
//! export SERVER_WORKERS="4"
//!
//! # 계정 저장소 (memory, mongodb)
//! export ACCOUNT_STORE="mongodb"
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="signup_dev"
//!
//! # 보안 설정
//! export BCRYPT_COST="12"          # 4-15 범위
//! ```

pub mod data_config;

pub use data_config::*;
