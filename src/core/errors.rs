//! # Application Error Handling System
//!
//! 백엔드 서비스를 위한 통합 에러 처리 시스템입니다.
//! 리포지토리와 클라이언트 어댑터가 반환한 에러는 서비스를 그대로 통과하고,
//! 핸들러에서 [`actix_web::ResponseError`] 구현을 통해 HTTP 응답으로 한 번만 변환됩니다.
//!
//! ## 상태 코드 매핑
//!
//! | 에러 | 상태 코드 | `code` |
//! |------|-----------|--------|
//! | `ValidationError` | 400 | `INVALID_PARAMS` |
//! | `InvalidParameter` | 400 | `INVALID_PARAMS` |
//! | `NotFound` | 404 | `NOT_FOUND` |
//! | `DatabaseError` | 500 | `INTERNAL_SERVER_ERROR` |
//! | `ExternalServiceError` | 500 | `INTERNAL_SERVER_ERROR` |
//! | `InternalError` | 500 | `INTERNAL_SERVER_ERROR` |
//! | `Timeout` | 503 | `TIMEOUT` |
//!
//! ## 응답 형식
//!
//! ```json
//! {
//!   "code": "NOT_FOUND",
//!   "messages": ["user with id=999999 not found"]
//! }
//! ```

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const ERROR_CODE_INVALID_PARAMS: &str = "INVALID_PARAMS";
pub const ERROR_CODE_NOT_FOUND: &str = "NOT_FOUND";
pub const ERROR_CODE_INTERNAL_SERVER_ERROR: &str = "INTERNAL_SERVER_ERROR";
pub const ERROR_CODE_TIMEOUT: &str = "TIMEOUT";

/// 애플리케이션 전역 에러 타입
#[derive(Error, Debug)]
pub enum AppError {
    /// 입력값 검증 에러
    ///
    /// 클라이언트가 보낸 엔티티가 필드 검증 규칙을 만족하지 않을 때 발생합니다.
    /// 저장소에 접근하기 전에 반환됩니다.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 경로/쿼리 파라미터 또는 요청 본문 파싱 실패
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// 리소스 찾을 수 없음 에러
    ///
    /// 조회 대상이 없거나, 삭제 시 영향받은 행이 없을 때 발생합니다.
    #[error("Not found: {0}")]
    NotFound(String),

    /// 저장소가 연산을 거부했거나 실행할 수 없는 경우
    ///
    /// # 발생 시나리오
    /// - 컬럼 제약 조건 위반 (최대 길이, NOT NULL)
    /// - 커넥션 풀 고갈, 연결 끊김
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 외부 서비스 에러
    ///
    /// 지오코딩 프로바이더 호출이 완료되지 못했거나(전송 실패),
    /// 2xx 외의 상태 코드 또는 해석할 수 없는 응답을 받은 경우입니다.
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 내부 서버 에러
    #[error("Internal server error: {0}")]
    InternalError(String),

    /// 요청 처리 시간이 설정된 상한을 넘은 경우
    ///
    /// 요청 타임아웃 미들웨어가 진행 중인 핸들러를 중단하고 반환합니다.
    #[error("Request timeout: {0}")]
    Timeout(String),
}

/// 에러 응답 본문
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub code: String,
    pub messages: Vec<String>,
}

impl AppError {
    /// 응답 본문의 `code` 필드 값
    pub fn code(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) | AppError::InvalidParameter(_) => ERROR_CODE_INVALID_PARAMS,
            AppError::NotFound(_) => ERROR_CODE_NOT_FOUND,
            AppError::Timeout(_) => ERROR_CODE_TIMEOUT,
            _ => ERROR_CODE_INTERNAL_SERVER_ERROR,
        }
    }

    /// 응답 본문의 `messages` 필드 값
    ///
    /// 4xx 에러는 원인 메시지만, 5xx 에러는 에러 분류를 포함한 전체 메시지를 전달합니다.
    pub fn messages(&self) -> Vec<String> {
        match self {
            AppError::ValidationError(msg)
            | AppError::InvalidParameter(msg)
            | AppError::NotFound(msg)
            | AppError::Timeout(msg) => vec![msg.clone()],
            _ => vec![self.to_string()],
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) | AppError::InvalidParameter(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Timeout(_) => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 예상하지 못한 5xx 에러는 여기서 한 번만 로그로 남깁니다.
    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            log::error!("❌ 요청 처리 실패: {}", self);
        }

        HttpResponse::build(status).json(ErrorResponse {
            code: self.code().to_string(),
            messages: self.messages(),
        })
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    async fn body_of(error: AppError) -> (StatusCode, ErrorResponse) {
        let response = error.error_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body()).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[actix_web::test]
    async fn test_validation_error_response() {
        let (status, body) = body_of(AppError::ValidationError("name too short".to_string())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.code, "INVALID_PARAMS");
        assert_eq!(body.messages, vec!["name too short".to_string()]);
    }

    #[actix_web::test]
    async fn test_invalid_parameter_response() {
        let (status, body) = body_of(AppError::InvalidParameter("The size is invalid".to_string())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.code, "INVALID_PARAMS");
    }

    #[actix_web::test]
    async fn test_not_found_error_response() {
        let (status, body) = body_of(AppError::NotFound("user with id=7 not found".to_string())).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.code, "NOT_FOUND");
        assert_eq!(body.messages, vec!["user with id=7 not found".to_string()]);
    }

    #[actix_web::test]
    async fn test_server_errors_map_to_500() {
        for error in [
            AppError::DatabaseError("disk I/O error".to_string()),
            AppError::ExternalServiceError("timeout".to_string()),
            AppError::InternalError("boom".to_string()),
        ] {
            let expected_message = error.to_string();
            let (status, body) = body_of(error).await;

            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(body.code, "INTERNAL_SERVER_ERROR");
            assert_eq!(body.messages, vec![expected_message]);
        }
    }

    #[actix_web::test]
    async fn test_timeout_maps_to_503() {
        let (status, body) = body_of(AppError::Timeout("response timeout exceeded".to_string())).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body.code, "TIMEOUT");
        assert_eq!(body.messages, vec!["response timeout exceeded".to_string()]);
    }
}
