//! 요청 파라미터 파싱 헬퍼
//!
//! actix 추출기는 경로/쿼리 값을 문자열로만 받고, 정수 변환과 필수값 검사는 여기서 수행합니다.
//! 실패 시 필드별 메시지를 담은 [`AppError::InvalidParameter`]를 반환하므로
//! 응답은 항상 `{code: "INVALID_PARAMS", messages: [...]}` 형식이 됩니다.

use serde::Deserialize;
use validator::{Validate, ValidationErrors};
use crate::core::errors::{AppError, AppResult};

pub const ERROR_MESSAGE_ID_INVALID: &str = "The id is invalid";
pub const ERROR_MESSAGE_SIZE_INVALID: &str = "The size is invalid";
pub const ERROR_MESSAGE_OFFSET_INVALID: &str = "The offset is invalid";
pub const ERROR_MESSAGE_NAME_MANDATORY: &str = "name is mandatory";

/// `/v{version}/users`
#[derive(Debug, Deserialize)]
pub struct VersionPath {
    pub version: String,
}

/// `/v{version}/users/{id}`
#[derive(Debug, Deserialize)]
pub struct UserPath {
    pub version: String,
    pub id: String,
}

impl UserPath {
    pub fn user_id(&self) -> AppResult<i64> {
        self.id
            .trim()
            .parse::<i64>()
            .map_err(|_| AppError::InvalidParameter(ERROR_MESSAGE_ID_INVALID.to_string()))
    }
}

/// 사용자 검색 쿼리 (`?name=&size=&offset=`)
///
/// 정수 파싱 실패를 필드별 메시지로 보고하기 위해 모든 값을 문자열로 받습니다.
#[derive(Debug, Default, Deserialize)]
pub struct FindUsersQuery {
    pub name: Option<String>,
    pub size: Option<String>,
    pub offset: Option<String>,
}

impl FindUsersQuery {
    /// 필수 파라미터 `name`. 빈 문자열도 누락으로 취급합니다.
    pub fn name(&self) -> AppResult<&str> {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => Ok(name),
            _ => Err(AppError::InvalidParameter(ERROR_MESSAGE_NAME_MANDATORY.to_string())),
        }
    }

    pub fn size(&self) -> AppResult<i64> {
        int_param(self.size.as_deref(), 0, ERROR_MESSAGE_SIZE_INVALID)
    }

    pub fn offset(&self) -> AppResult<i64> {
        int_param(self.offset.as_deref(), 0, ERROR_MESSAGE_OFFSET_INVALID)
    }
}

/// 정수 쿼리 파라미터. 없거나 비어 있으면 `default`
fn int_param(raw: Option<&str>, default: i64, message: &str) -> AppResult<i64> {
    match raw {
        None | Some("") => Ok(default),
        Some(value) => value
            .parse::<i64>()
            .map_err(|_| AppError::InvalidParameter(message.to_string())),
    }
}

/// 필드 검증을 수행하고 실패 시 `ValidationError`로 변환합니다.
pub fn validate<T: Validate>(payload: &T) -> AppResult<()> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(validation_message(&e)))
}

/// `field: message` 형식으로 필드 에러를 평탄화 (필드명 순)
fn validation_message(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| error.code.to_string());
                format!("{}: {}", field, message)
            })
        })
        .collect::<Vec<_>>()
        .join(", ")
}
