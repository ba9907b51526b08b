//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 모듈로, 엔티티와 외부 시스템 모델을 담당합니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities      - 영속되는 핵심 객체 (User) 와 조회 결과 (UserList)
//! └── Models        - 외부 시스템 통합 모델 (지오코딩 Location)
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB, Clients)
//! ```
//!
//! ### [`entities`] - 핵심 도메인 엔티티
//!
//! `User`는 JSON 요청/응답, `validator` 필드 검증, `sqlx` 행 매핑을 하나의 구조체로 처리합니다.
//! 이름은 최소 3자여야 하며, 이 규칙은 저장소 쓰기 전에 핸들러에서 검증됩니다.
//!
//! ### [`models`] - 외부 시스템 모델
//!
//! 지오코딩 프로바이더 응답을 그대로 역직렬화한 `Location`입니다.

pub mod entities;
pub mod models;
