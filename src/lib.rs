//! 사용자 관리 API 서버
//!
//! 사용자 엔티티를 HTTP로 노출하고 관계형 저장소(SQLite)에 영속화하며,
//! 외부 지오코딩 API로 사용자 주소의 위치 정보를 조회하는 CRUD 리소스 서버입니다.
//!
//! # Features
//!
//! - **사용자 관리**: 생성, 조회, 수정, 삭제
//! - **이름 검색**: `size`/`offset` 페이지 조회 (기본 페이지 크기 20)
//! - **위치 조회**: 주소 → 좌표 지오코딩 (Mapbox 호환 프로바이더)
//! - **명시적 DI**: 시작 시 한 번 생성한 값을 생성자로 주입
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← /health, /v{version}/users
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 파싱, 검증, 에러 → 상태 코드
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 리포지토리 위임
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← SQL 쿼리, NotFound 매핑
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐     ┌─────────────────┐
//! │     SQLite      │     │  Geocoding API  │
//! └─────────────────┘     └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use users_api::repositories::users::SqlUserRepository;
//! use users_api::services::users::UserService;
//!
//! let repo = SqlUserRepository::new(database, Arc::new(map_client), token);
//! let user_service = UserService::new(Arc::new(repo));
//! let page = user_service.find("Jhon", 0, 0).await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod clients;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod routes;
pub mod handlers;
pub mod middlewares;
