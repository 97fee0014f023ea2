//! # Route Configuration
//!
//! 애플리케이션의 모든 HTTP 라우트를 등록합니다.
//!
//! | 메서드 | 경로 | 핸들러 |
//! |--------|------|--------|
//! | `GET` | `/health` | [`health_check`] |
//! | `POST` | `/api/signup` | [`handlers::signup::signup`] |
//!
//! 핸들러가 사용하는 [`SignUpController`](crate::handlers::signup::SignUpController)는
//! `App::app_data`로 먼저 등록되어 있어야 합니다.

use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::handlers;

/// 모든 라우트를 설정합니다
///
/// # Examples
///
/// ```rust,ignore
/// use actix_web::{web, App};
///
/// let app = App::new()
///     .app_data(web::Data::new(controller))
///     .configure(configure_all_routes);
/// ```
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check);

    configure_signup_routes(cfg);
}

/// 회원가입 라우트를 설정합니다
///
/// - `POST /api/signup` - 계정 생성 (인증 불필요)
///
/// ```bash
/// curl -X POST http://localhost:8080/api/signup \
///   -H "Content-Type: application/json" \
///   -d '{"name":"Jane","email":"jane@example.com","pwd":"1234@56","pwdConfirmation":"1234@56"}'
/// ```
fn configure_signup_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api").service(handlers::signup::signup));
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```json
/// {
///   "status": "healthy",
///   "service": "signup_service",
///   "version": "0.1.0",
///   "timestamp": "2024-01-01T00:00:00+00:00"
/// }
/// ```
#[actix_web::get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "signup_service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
