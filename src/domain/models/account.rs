//! Account Model
//!
//! 계정 생성 유스케이스가 돌려주는 계정 표현입니다.
//! 컨트롤러는 이 값을 검사하거나 변환하지 않고 200 응답 본문으로 그대로 전달합니다.

use serde::{Deserialize, Serialize};

/// 저장이 완료된 계정
///
/// `pwd`는 평문이 아니라 암호화기를 거친 해시 값입니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountModel {
    /// 저장소가 할당한 고유 ID
    pub id: String,
    pub name: String,
    pub email: String,
    /// 해시된 비밀번호
    pub pwd: String,
}
