//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 리포지토리는 서비스가 의존하는 trait과 `sqlx` 기반 구현체로 구성됩니다.
//! 구현체는 시작 시점에 한 번 생성되어 `Arc<dyn Trait>`로 서비스에 주입됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use users_api::repositories::users::{SqlUserRepository, UserRepository};
//!
//! let repo: Arc<dyn UserRepository> = Arc::new(SqlUserRepository::new(database, map_client, token));
//! let user = repo.get(1).await?;
//! ```

pub mod users;
