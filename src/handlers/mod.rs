//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (API Client, curl)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - 파싱, 검증, 응답 매핑       ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 리포지토리 위임                    ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - SQLite, 지오코딩 API           ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! 서비스는 `web::Data<UserService>`로 주입됩니다. 핸들러는 `Result<HttpResponse, AppError>`를
//! 반환하고, 에러는 `AppError`의 `ResponseError` 구현이 HTTP 응답으로 변환합니다.
//!
//! - [`users`]: 사용자 CRUD와 위치 조회 엔드포인트
//! - [`params`]: 경로/쿼리 파라미터 파싱과 필드 검증 헬퍼

pub mod params;
pub mod users;
