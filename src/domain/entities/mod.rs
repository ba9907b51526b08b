//! # Domain Entities
//!
//! 관계형 저장소에 영속되는 핵심 비즈니스 객체들입니다.
//!
//! - [`users::User`] - 사용자 엔티티 (`users` 테이블의 한 행)
//! - [`users::UserList`] - 이름 검색 결과 페이지 (영속되지 않음)

pub mod users;
