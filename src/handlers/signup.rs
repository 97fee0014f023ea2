//! # Signup Handler
//!
//! 회원가입 요청을 처리하는 컨트롤러와 actix-web 엔드포인트입니다.
//!
//! ## 처리 순서
//!
//! 앞 단계가 실패하면 이후 단계는 실행되지 않습니다. 순서는 고정입니다.
//!
//! 1. **필수 필드 검사**: `name`, `email`, `pwd`, `pwdConfirmation` 순서로 확인하고
//!    처음 비어 있는 필드를 `MissingParam`으로 보고 (400)
//! 2. **비밀번호 확인**: `pwd`와 `pwdConfirmation`이 정확히 같지 않으면
//!    `InvalidParam("pwdConfirmation")` (400)
//! 3. **이메일 형식**: 검증기가 false를 반환하면 `InvalidParam("email")` (400)
//! 4. **계정 생성**: `{name, email, pwd}`만 유스케이스에 전달
//! 5. **성공**: 생성된 계정을 그대로 200 응답 본문에 담음
//!
//! 검증기나 유스케이스가 `Err`를 반환하거나 처리 중 panic이 발생하면
//! 원인과 상관없이 `ServerError` (500)로 응답합니다. 재시도는 하지 않습니다.
//!
//! ## 엔드포인트
//!
//! | 메서드 | 경로 | 설명 |
//! |--------|------|------|
//! | `POST` | `/api/signup` | 새 계정 생성 |
//!
//! ```bash
//! curl -X POST http://localhost:8080/api/signup \
//!   -H "Content-Type: application/json" \
//!   -d '{
//!     "name": "Jane Doe",
//!     "email": "jane@example.com",
//!     "pwd": "1234@56",
//!     "pwdConfirmation": "1234@56"
//!   }'
//! ```

use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use actix_web::{post, web, HttpResponse as ActixResponse};
use async_trait::async_trait;
use futures_util::FutureExt;
use log::{error, info, warn};

use crate::core::errors::AppError;
use crate::domain::protocols::{Controller, EmailValidator, HttpRequest, HttpResponse};
use crate::domain::usecases::{AddAccount, AddAccountModel};
use crate::errors::HttpError;
use crate::handlers::adapter::adapt_route;
use crate::handlers::helpers::{bad_request, ok, server_error};

/// 검사 순서대로 나열한 필수 필드
///
/// 여러 필드가 동시에 비어 있을 때 어떤 필드를 보고할지 이 순서가 결정합니다.
pub const REQUIRED_FIELDS: [&str; 4] = ["name", "email", "pwd", "pwdConfirmation"];

/// 회원가입 컨트롤러
///
/// 주입받은 두 능력에 대한 참조 외에는 상태를 갖지 않으므로,
/// 하나의 인스턴스를 여러 워커에서 동시에 사용해도 안전합니다.
pub struct SignUpController {
    email_validator: Arc<dyn EmailValidator>,
    add_account: Arc<dyn AddAccount>,
}

impl SignUpController {
    pub fn new(email_validator: Arc<dyn EmailValidator>, add_account: Arc<dyn AddAccount>) -> Self {
        Self {
            email_validator,
            add_account,
        }
    }

    async fn handle(&self, request: HttpRequest) -> Result<HttpResponse, AppError> {
        let [name, email, pwd, pwd_confirmation] = match required_params(&request) {
            Ok(values) => values,
            Err(rejection) => {
                warn!("회원가입 요청 거절: {}", rejection);
                return Ok(bad_request(rejection));
            }
        };

        if pwd != pwd_confirmation {
            warn!("회원가입 요청 거절: 비밀번호 확인 불일치");
            return Ok(bad_request(HttpError::invalid_param("pwdConfirmation")));
        }

        if !self.email_validator.is_valid(email)? {
            warn!("회원가입 요청 거절: 이메일 형식 오류");
            return Ok(bad_request(HttpError::invalid_param("email")));
        }

        let account = self
            .add_account
            .add(AddAccountModel {
                name: name.to_string(),
                email: email.to_string(),
                pwd: pwd.to_string(),
            })
            .await?;

        info!("✅ 계정 생성 완료: {}", account.id);
        Ok(ok(account))
    }
}

#[async_trait]
impl Controller for SignUpController {
    async fn exec(&self, request: HttpRequest) -> HttpResponse {
        match AssertUnwindSafe(self.handle(request)).catch_unwind().await {
            Ok(Ok(response)) => response,
            Ok(Err(e)) => {
                error!("❌ 회원가입 처리 실패: {}", e);
                server_error()
            }
            Err(_) => {
                error!("❌ 회원가입 처리 중 panic 발생");
                server_error()
            }
        }
    }
}

/// 필수 필드를 순서대로 꺼냅니다. 처음 비어 있는 필드에서 멈춥니다.
fn required_params(request: &HttpRequest) -> Result<[&str; 4], HttpError> {
    let mut values = [""; 4];

    for (slot, field) in values.iter_mut().zip(REQUIRED_FIELDS) {
        *slot = request
            .param(field)
            .ok_or_else(|| HttpError::missing_param(field))?;
    }

    Ok(values)
}

/// 회원가입 엔드포인트
///
/// 요청 본문을 JSON으로 해석해 [`SignUpController`]에 넘기고,
/// 응답 봉투의 `statusCode`를 HTTP 상태로, `body`를 JSON 본문으로 돌려줍니다.
///
/// # 응답
///
/// ## 성공 (200 OK)
/// ```json
/// {
///   "id": "665f1f77bcf86cd799439011",
///   "name": "Jane Doe",
///   "email": "jane@example.com",
///   "pwd": "$2b$12$..."
/// }
/// ```
///
/// ## 필드 누락 (400 Bad Request)
/// ```json
/// {
///   "error": "missing_param",
///   "message": "Missing param: email"
/// }
/// ```
///
/// ## 내부 장애 (500 Internal Server Error)
/// ```json
/// {
///   "error": "server_error",
///   "message": "Internal server error"
/// }
/// ```
#[post("/signup")]
pub async fn signup(
    controller: web::Data<SignUpController>,
    body: web::Bytes,
) -> ActixResponse {
    adapt_route(controller.get_ref(), &body).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::AccountModel;
    use crate::domain::protocols::email_validator::MockEmailValidator;
    use crate::domain::protocols::ResponseBody;
    use crate::domain::usecases::add_account::MockAddAccount;
    use serde_json::{json, Value};

    fn make_sut(validator: MockEmailValidator, add_account: MockAddAccount) -> SignUpController {
        SignUpController::new(Arc::new(validator), Arc::new(add_account))
    }

    fn valid_body() -> Value {
        json!({
            "name": "any_name",
            "email": "any_email@mail.com",
            "pwd": "1234@56",
            "pwdConfirmation": "1234@56"
        })
    }

    fn body_without(fields: &[&str]) -> Value {
        let mut body = valid_body();
        let object = body.as_object_mut().unwrap();
        for field in fields {
            object.remove(*field);
        }
        body
    }

    fn untouched_validator() -> MockEmailValidator {
        let mut validator = MockEmailValidator::new();
        validator.expect_is_valid().never();
        validator
    }

    fn untouched_add_account() -> MockAddAccount {
        let mut add_account = MockAddAccount::new();
        add_account.expect_add().never();
        add_account
    }

    fn accepting_validator() -> MockEmailValidator {
        let mut validator = MockEmailValidator::new();
        validator.expect_is_valid().returning(|_| Ok(true));
        validator
    }

    fn stored_account() -> AccountModel {
        AccountModel {
            id: "valid_id".to_string(),
            name: "any_name".to_string(),
            email: "any_email@mail.com".to_string(),
            pwd: "hashed_pwd".to_string(),
        }
    }

    #[actix_web::test]
    async fn test_returns_400_for_each_missing_field() {
        for field in REQUIRED_FIELDS {
            let sut = make_sut(untouched_validator(), untouched_add_account());

            let response = sut.exec(HttpRequest::new(body_without(&[field]))).await;

            assert_eq!(response.status_code, 400, "field: {}", field);
            assert_eq!(
                response.body,
                ResponseBody::Error(HttpError::missing_param(field))
            );
        }
    }

    #[actix_web::test]
    async fn test_empty_string_counts_as_missing() {
        let sut = make_sut(untouched_validator(), untouched_add_account());
        let mut body = valid_body();
        body["email"] = json!("");

        let response = sut.exec(HttpRequest::new(body)).await;

        assert_eq!(response.status_code, 400);
        assert_eq!(response.error(), Some(&HttpError::missing_param("email")));
    }

    #[actix_web::test]
    async fn test_reports_first_missing_field_in_order() {
        let sut = make_sut(untouched_validator(), untouched_add_account());

        let response = sut
            .exec(HttpRequest::new(body_without(&["pwdConfirmation", "email", "pwd"])))
            .await;
        assert_eq!(response.error(), Some(&HttpError::missing_param("email")));

        let response = sut
            .exec(HttpRequest::new(body_without(&["pwdConfirmation", "pwd"])))
            .await;
        assert_eq!(response.error(), Some(&HttpError::missing_param("pwd")));

        let response = sut.exec(HttpRequest::empty()).await;
        assert_eq!(response.status_code, 400);
        assert_eq!(response.error(), Some(&HttpError::missing_param("name")));
    }

    #[actix_web::test]
    async fn test_returns_400_if_password_confirmation_fails() {
        let sut = make_sut(untouched_validator(), untouched_add_account());
        let mut body = valid_body();
        body["pwdConfirmation"] = json!("1234");

        let response = sut.exec(HttpRequest::new(body)).await;

        assert_eq!(response.status_code, 400);
        assert_eq!(
            response.body,
            ResponseBody::Error(HttpError::invalid_param("pwdConfirmation"))
        );
    }

    #[actix_web::test]
    async fn test_confirmation_mismatch_is_checked_before_email_format() {
        let sut = make_sut(untouched_validator(), untouched_add_account());
        let mut body = valid_body();
        body["email"] = json!("invalid_email@");
        body["pwdConfirmation"] = json!("1234");

        let response = sut.exec(HttpRequest::new(body)).await;

        assert_eq!(response.error(), Some(&HttpError::invalid_param("pwdConfirmation")));
    }

    #[actix_web::test]
    async fn test_returns_400_if_email_is_invalid() {
        let mut validator = MockEmailValidator::new();
        validator.expect_is_valid().times(1).returning(|_| Ok(false));
        let sut = make_sut(validator, untouched_add_account());
        let mut body = valid_body();
        body["email"] = json!("invalid_email@");

        let response = sut.exec(HttpRequest::new(body)).await;

        assert_eq!(response.status_code, 400);
        assert_eq!(
            response.body,
            ResponseBody::Error(HttpError::invalid_param("email"))
        );
    }

    #[actix_web::test]
    async fn test_calls_email_validator_with_correct_email() {
        let mut validator = MockEmailValidator::new();
        validator
            .expect_is_valid()
            .withf(|email: &str| email == "any_email@mail.com")
            .times(1)
            .returning(|_| Ok(true));
        let mut add_account = MockAddAccount::new();
        add_account.expect_add().returning(|_| Ok(stored_account()));
        let sut = make_sut(validator, add_account);

        let response = sut.exec(HttpRequest::new(valid_body())).await;

        assert_eq!(response.status_code, 200);
    }

    #[actix_web::test]
    async fn test_calls_add_account_without_confirmation() {
        let mut add_account = MockAddAccount::new();
        add_account
            .expect_add()
            .withf(|account: &AddAccountModel| {
                *account
                    == AddAccountModel {
                        name: "any_name".to_string(),
                        email: "any_email@mail.com".to_string(),
                        pwd: "1234@56".to_string(),
                    }
            })
            .times(1)
            .returning(|_| Ok(stored_account()));
        let sut = make_sut(accepting_validator(), add_account);

        sut.exec(HttpRequest::new(valid_body())).await;
    }

    #[actix_web::test]
    async fn test_returns_500_if_email_validator_fails() {
        let mut validator = MockEmailValidator::new();
        validator
            .expect_is_valid()
            .returning(|_| Err(AppError::ValidationError("validator crashed".to_string())));
        let sut = make_sut(validator, untouched_add_account());

        let response = sut.exec(HttpRequest::new(valid_body())).await;

        assert_eq!(response.status_code, 500);
        assert_eq!(response.body, ResponseBody::Error(HttpError::ServerError));
    }

    #[actix_web::test]
    async fn test_returns_500_if_add_account_fails() {
        let mut add_account = MockAddAccount::new();
        add_account
            .expect_add()
            .returning(|_| Err(AppError::DatabaseError("connection reset".to_string())));
        let sut = make_sut(accepting_validator(), add_account);

        let response = sut.exec(HttpRequest::new(valid_body())).await;

        assert_eq!(response.status_code, 500);
        assert_eq!(response.body, ResponseBody::Error(HttpError::ServerError));
        assert_eq!(
            serde_json::to_value(&response.body).unwrap()["message"],
            "Internal server error"
        );
    }

    struct PanickingAddAccount;

    #[async_trait]
    impl AddAccount for PanickingAddAccount {
        async fn add(&self, _account: AddAccountModel) -> Result<AccountModel, AppError> {
            panic!("unexpected fault")
        }
    }

    #[actix_web::test]
    async fn test_returns_500_if_add_account_panics() {
        let sut = SignUpController::new(
            Arc::new(accepting_validator()),
            Arc::new(PanickingAddAccount),
        );

        let response = sut.exec(HttpRequest::new(valid_body())).await;

        assert_eq!(response.status_code, 500);
        assert_eq!(response.error(), Some(&HttpError::ServerError));
    }

    #[actix_web::test]
    async fn test_returns_200_with_account_unmodified() {
        let mut add_account = MockAddAccount::new();
        add_account.expect_add().returning(|_| Ok(stored_account()));
        let sut = make_sut(accepting_validator(), add_account);

        let response = sut.exec(HttpRequest::new(valid_body())).await;

        assert_eq!(response.status_code, 200);
        assert_eq!(response.body, ResponseBody::Account(stored_account()));
    }

    #[actix_web::test]
    async fn test_repeated_invalid_request_yields_identical_responses() {
        let sut = make_sut(untouched_validator(), untouched_add_account());
        let request = HttpRequest::new(body_without(&["pwd"]));

        let first = sut.exec(request.clone()).await;
        let second = sut.exec(request).await;

        assert_eq!(first, second);
        assert_eq!(first.error(), Some(&HttpError::missing_param("pwd")));
    }
}
