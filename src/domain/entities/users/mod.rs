//! Users Entity Module
//!
//! 사용자 도메인의 핵심 엔티티들을 정의하는 모듈입니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use users_api::domain::entities::users::User;
//! use validator::Validate;
//!
//! let user = User::new("John", "5th avenue", dob);
//! user.validate()?;
//! ```

pub mod user;

pub use user::{User, UserList};
