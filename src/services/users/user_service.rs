//! # 사용자 관리 서비스 구현
//!
//! 핸들러와 리포지토리 사이의 애플리케이션 계층입니다.
//! 현재 비즈니스 규칙은 없으며 모든 연산을 리포지토리에 그대로 위임합니다.
//! 입력 검증은 핸들러, 영속화와 지오코딩은 리포지토리가 담당합니다.
//!
//! ```text
//! Handler ──▶ UserService ──▶ dyn UserRepository ──▶ SQLite / Geocoding API
//! ```
//!
//! ## 의존성 주입
//!
//! 리포지토리는 생성자로 주입됩니다. 테스트에서는 `MockUserRepository`를 넘겨
//! 저장소 없이 서비스와 핸들러를 검증할 수 있습니다.

use std::sync::Arc;
use crate::{
    core::errors::AppResult,
    domain::{
        entities::users::{User, UserList},
        models::location::Location,
    },
    repositories::users::user_repo::UserRepository,
};

/// 사용자 관리 서비스
#[derive(Clone)]
pub struct UserService {
    user_repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    /// 새 사용자를 등록하고 할당된 ID를 반환합니다.
    pub async fn create(&self, user: &User) -> AppResult<i64> {
        self.user_repo.insert(user).await
    }

    /// 사용자 정보를 덮어씁니다.
    pub async fn update(&self, id: i64, user: &User) -> AppResult<()> {
        self.user_repo.update(id, user).await
    }

    pub async fn get(&self, id: i64) -> AppResult<User> {
        self.user_repo.get(id).await
    }

    /// 이름으로 사용자를 페이지 조회합니다. `size`가 0이면 기본 페이지 크기가 적용됩니다.
    pub async fn find(&self, name: &str, size: i64, offset: i64) -> AppResult<UserList> {
        self.user_repo.find(name, size, offset).await
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.user_repo.delete(id).await
    }

    /// 사용자 주소의 지오코딩 결과를 조회합니다.
    pub async fn get_location(&self, id: i64) -> AppResult<Location> {
        self.user_repo.get_location(id).await
    }
}
