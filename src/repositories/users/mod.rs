//! 사용자 데이터 액세스 계층
//!
//! [`UserRepository`] trait과 SQLite 구현체 [`SqlUserRepository`]를 제공합니다.

pub mod user_repo;

pub use user_repo::{SqlUserRepository, UserRepository, DEFAULT_PAGE_SIZE};
