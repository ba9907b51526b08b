//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 리포지토리 trait 객체를 생성자로 주입받으며,
//! 시작 시점에 한 번 생성되어 `web::Data`로 핸들러에 공유됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use users_api::services::users::UserService;
//!
//! let user_service = web::Data::new(UserService::new(user_repo));
//! ```

pub mod users;
