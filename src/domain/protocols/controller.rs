use async_trait::async_trait;

use super::http::{HttpRequest, HttpResponse};

/// 요청 하나를 받아 응답 하나를 돌려주는 컨트롤러
///
/// 구현체는 어떤 경우에도 실패를 호출자에게 전파하지 않아야 합니다.
/// 모든 결과는 상태 코드가 담긴 [`HttpResponse`]로 표현됩니다.
#[async_trait]
pub trait Controller: Send + Sync {
    async fn exec(&self, request: HttpRequest) -> HttpResponse;
}
