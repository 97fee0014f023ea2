//! 회원가입 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 회원가입 파이프라인을 조립합니다.
//! 계정 저장소(MongoDB 또는 메모리)를 선택하고 `POST /api/signup`을 제공합니다.

use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use signup_service_backend::config::{AccountStore, AccountStoreConfig, ServerConfig};
use signup_service_backend::db::Database;
use signup_service_backend::handlers::signup::SignUpController;
use signup_service_backend::repositories::accounts::{InMemoryAccountRepository, MongoAccountRepository};
use signup_service_backend::routes::configure_all_routes;
use signup_service_backend::services::accounts::{AddAccountRepository, BcryptAdapter, DbAddAccount};
use signup_service_backend::utils::email_validator_adapter::EmailValidatorAdapter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 회원가입 서비스 시작중...");

    let repository = initialize_account_store().await?;
    let controller = web::Data::new(build_signup_controller(repository));

    info!("✅ 회원가입 컨트롤러 조립 완료");

    // HTTP 서버 시작
    start_http_server(controller).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(controller: web::Data<SignUpController>) -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();
    let workers = ServerConfig::workers();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 Signup: POST http://{}/api/signup", bind_address);

    HttpServer::new(move || {
        // CORS 설정
        let cors = configure_cors();

        App::new()
            .app_data(controller.clone())
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())

            // 라우트 설정
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .workers(workers)
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// # Examples
///
/// ```bash
/// PROFILE=prod cargo run
/// ```
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
///
/// ```bash
/// RUST_LOG=signup_service_backend=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// 설정에 따라 계정 저장소를 생성합니다
///
/// `ACCOUNT_STORE=mongodb`이면 MongoDB에 연결하고, 실패하면 서버를 시작하지 않습니다.
async fn initialize_account_store() -> std::io::Result<Arc<dyn AddAccountRepository>> {
    let store = AccountStoreConfig::kind();
    info!("📦 계정 저장소: {}", store.as_str());

    match store {
        AccountStore::Memory => Ok(Arc::new(InMemoryAccountRepository::new())),
        AccountStore::MongoDb => {
            info!("📡 데이터베이스 연결 중...");

            let database = Database::from_config().await.map_err(|e| {
                error!("❌ 데이터베이스 연결 실패: {}", e);
                std::io::Error::other(e.to_string())
            })?;

            Ok(Arc::new(MongoAccountRepository::new(Arc::new(database))))
        }
    }
}

/// 회원가입 컨트롤러와 협력 객체들을 조립합니다
fn build_signup_controller(repository: Arc<dyn AddAccountRepository>) -> SignUpController {
    let encrypter = Arc::new(BcryptAdapter::from_config());
    info!("🔐 bcrypt cost: {}", encrypter.cost());

    let add_account = DbAddAccount::new(encrypter, repository);

    SignUpController::new(Arc::new(EmailValidatorAdapter::new()), Arc::new(add_account))
}

/// CORS 설정을 구성합니다
///
/// # Allowed Origins
///
/// * `http://localhost:3000` - 프론트엔드 개발 서버
/// * `http://localhost:8080` - 자체 서버
/// * `127.0.0.1` 동등한 주소들
fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .max_age(3600)
}
