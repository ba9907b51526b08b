//! User Entity Implementation
//!
//! 사용자 엔티티와 페이지 단위 조회 결과를 정의합니다.
//! 같은 구조체가 JSON 요청/응답 본문, 필드 검증, 저장소 행 매핑에 모두 사용됩니다.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// 사용자 엔티티
///
/// `id`와 타임스탬프는 저장소가 관리합니다. 요청 본문에 포함되어도 쓰기 연산에서는 무시됩니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, sqlx::FromRow)]
pub struct User {
    /// 저장소가 삽입 시 할당하는 식별자
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// 사용자 이름 (필수, 최소 3자)
    #[serde(default)]
    #[validate(length(min = 3, message = "name must be at least 3 characters"))]
    pub name: String,
    /// 주소. 위치 조회 시 지오코딩 쿼리로 사용됨
    #[serde(default)]
    pub address: String,
    /// 생년월일 (`YYYY-MM-DD`)
    #[serde(default, rename = "dob")]
    #[sqlx(rename = "dob")]
    pub date_of_birth: Option<NaiveDate>,
    /// 생성 시간
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    /// 수정 시간
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
}

impl User {
    pub fn new(name: impl Into<String>, address: impl Into<String>, date_of_birth: NaiveDate) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            date_of_birth: Some(date_of_birth),
            ..Self::default()
        }
    }
}

/// 이름 검색 결과 한 페이지
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserList {
    pub data: Vec<User>,
    /// 실제로 적용된 페이지 크기
    pub size: i64,
    /// 요청된 건너뛰기 수
    pub offset: i64,
}
