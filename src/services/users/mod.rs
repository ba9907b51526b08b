//! 사용자 관리 서비스 모듈
//!
//! 사용자 CRUD와 위치 조회를 리포지토리에 위임하는 [`UserService`]를 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use users_api::services::users::UserService;
//!
//! let user_service = UserService::new(Arc::new(user_repo));
//! let user = user_service.get(1).await?;
//! ```

pub mod user_service;

pub use user_service::UserService;
