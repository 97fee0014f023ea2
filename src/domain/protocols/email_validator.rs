use crate::core::errors::AppError;

#[cfg(test)]
use mockall::automock;

/// 이메일 형식 검증 능력
///
/// 검증 알고리즘은 구현체의 책임입니다. 검증기 자체가 실패하면 `Err`를 반환하고,
/// 컨트롤러는 이를 500 응답으로 변환합니다.
#[cfg_attr(test, automock)]
pub trait EmailValidator: Send + Sync {
    fn is_valid(&self, email: &str) -> Result<bool, AppError>;
}
