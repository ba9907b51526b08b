//! # REST 클라이언트 어댑터
//!
//! 외부 HTTP API로 단일 GET 요청을 보내는 어댑터입니다.
//! 지오코딩 프로바이더 호출에 사용되며, 재시도 없이 설정된 타임아웃 한 번만 적용합니다.
//!
//! 응답 상태 코드는 판단하지 않습니다. 2xx 여부의 해석은 호출하는 리포지토리의 몫입니다.

use std::collections::HashMap;
use std::time::Duration;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use crate::core::errors::{AppError, AppResult};

/// 외부 API 응답 (상태 코드와 원문 본문)
#[derive(Debug, Clone, PartialEq)]
pub struct RestResponse {
    pub status: StatusCode,
    pub body: String,
}

impl RestResponse {
    /// `[200, 300)` 범위의 상태 코드인지 확인
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

/// 외부 REST API 호출 추상화
///
/// 리포지토리는 구체 타입 대신 이 trait에 의존하므로 테스트에서 대역으로 교체할 수 있습니다.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RestClient: Send + Sync {
    /// `base_url + path`로 GET 요청을 보냅니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ExternalServiceError` - 본문 직렬화 실패, DNS/연결 실패, 타임아웃
    async fn get(
        &self,
        path: &str,
        headers: HashMap<String, String>,
        body: Option<serde_json::Value>,
    ) -> AppResult<RestResponse>;
}

/// `reqwest` 기반 [`RestClient`] 구현체
pub struct RestProvider {
    base_url: String,
    client: reqwest::Client,
}

impl RestProvider {
    /// 기본 URL과 요청 타임아웃(밀리초)으로 클라이언트를 생성합니다.
    pub fn new(base_url: impl Into<String>, timeout_ms: u64) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .map_err(|e| AppError::InternalError(format!("HTTP 클라이언트 생성 실패: {}", e)))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }
}

#[async_trait]
impl RestClient for RestProvider {
    async fn get(
        &self,
        path: &str,
        headers: HashMap<String, String>,
        body: Option<serde_json::Value>,
    ) -> AppResult<RestResponse> {
        let mut request = self.client.get(format!("{}{}", self.base_url, path));

        for (key, value) in &headers {
            request = request.header(key.as_str(), value.as_str());
        }

        if let Some(body) = body {
            let payload = serde_json::to_vec(&body).map_err(|e| {
                AppError::ExternalServiceError(format!("can't marshal body: {}, err: {}", body, e))
            })?;
            request = request.header(CONTENT_TYPE, "application/json").body(payload);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("request to {} failed: {}", path, e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("reading response from {} failed: {}", path, e)))?;

        Ok(RestResponse { status, body })
    }
}
