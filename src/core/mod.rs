//! # Core Module
//!
//! 계층 전체가 공유하는 핵심 타입을 제공합니다.
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입 정의
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현으로 상태 코드와 응답 본문 매핑
//! - **자동 변환**: thiserror 기반 에러 메시지 관리

pub mod errors;
