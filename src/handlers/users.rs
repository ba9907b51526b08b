//! # User Management HTTP Handlers
//!
//! 사용자 리소스의 HTTP 엔드포인트입니다. 모든 핸들러는 같은 흐름을 따릅니다.
//!
//! ```text
//! 경로/쿼리 파싱 ──▶ 필드 검증 ──▶ UserService 호출 ──▶ 응답 매핑
//!      │                │                                  │
//!      └── 400 ─────────┘                 AppError ──▶ ResponseError (400/404/500)
//! ```
//!
//! | 메서드 | 경로 | 설명 | 성공 |
//! |--------|------|------|------|
//! | `POST` | `/v{version}/users` | 사용자 생성 | 201 + `Location` 헤더 |
//! | `GET` | `/v{version}/users/{id}` | 사용자 조회 | 200 + 본문 |
//! | `PUT` | `/v{version}/users/{id}` | 사용자 수정 | 200 (본문 없음) |
//! | `DELETE` | `/v{version}/users/{id}` | 사용자 삭제 | 200 (본문 없음) |
//! | `GET` | `/v{version}/users?name=&size=&offset=` | 이름 검색 | 200 + 목록 |
//! | `GET` | `/v{version}/users/{id}/locations` | 주소 지오코딩 | 200 + 위치 |
//!
//! 에러 응답 변환은 [`AppError`]의 `ResponseError` 구현이 한 곳에서 담당하며,
//! 500 계열 에러의 로깅도 그곳에서 이루어집니다.

use actix_web::http::header;
use actix_web::{delete, get, post, put, web, HttpResponse};
use crate::core::errors::AppError;
use crate::domain::entities::users::User;
use crate::handlers::params::{self, FindUsersQuery, UserPath, VersionPath};
use crate::services::users::UserService;

/// 사용자 생성 핸들러
///
/// # Request Body
///
/// ```json
/// { "name": "John", "address": "5th avenue", "dob": "1991-01-10" }
/// ```
///
/// # Response
///
/// - `201 Created`, `Location: /v1/users/{id}`
/// - `400 Bad Request`: 본문 해석 실패 또는 이름이 3자 미만
/// - `500 Internal Server Error`: 저장소 에러 (컬럼 길이 초과 포함)
#[post("")]
pub async fn create_user(
    user_service: web::Data<UserService>,
    path: web::Path<VersionPath>,
    payload: web::Json<User>,
) -> Result<HttpResponse, AppError> {
    params::validate(&*payload)?;

    let id = user_service.create(&payload).await?;

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/v{}/users/{}", path.version, id)))
        .finish())
}

/// 사용자 수정 핸들러
///
/// 대상 행이 없어도 200을 반환합니다. 존재 여부가 필요하면 먼저 조회해야 합니다.
#[put("/{id}")]
pub async fn update_user(
    user_service: web::Data<UserService>,
    path: web::Path<UserPath>,
    payload: web::Json<User>,
) -> Result<HttpResponse, AppError> {
    let id = path.user_id()?;
    params::validate(&*payload)?;

    user_service.update(id, &payload).await?;

    Ok(HttpResponse::Ok().finish())
}

#[get("/{id}")]
pub async fn get_user(
    user_service: web::Data<UserService>,
    path: web::Path<UserPath>,
) -> Result<HttpResponse, AppError> {
    let id = path.user_id()?;

    let user = user_service.get(id).await?;

    Ok(HttpResponse::Ok().json(user))
}

/// 이름 검색 핸들러
///
/// `name`은 필수입니다. `size`/`offset`이 없으면 0으로 전달되고,
/// `size` 0은 리포지토리에서 기본 페이지 크기(20)로 바뀝니다.
#[get("")]
pub async fn find_users(
    user_service: web::Data<UserService>,
    query: web::Query<FindUsersQuery>,
) -> Result<HttpResponse, AppError> {
    let name = query.name()?;
    let size = query.size()?;
    let offset = query.offset()?;

    let users = user_service.find(name, size, offset).await?;

    Ok(HttpResponse::Ok().json(users))
}

#[delete("/{id}")]
pub async fn delete_user(
    user_service: web::Data<UserService>,
    path: web::Path<UserPath>,
) -> Result<HttpResponse, AppError> {
    let id = path.user_id()?;

    user_service.delete(id).await?;

    Ok(HttpResponse::Ok().finish())
}

/// 사용자 주소 지오코딩 핸들러
///
/// 사용자가 없으면 404, 프로바이더 실패(2xx 외 응답, 해석 불가 응답, 타임아웃)는 500입니다.
#[get("/{id}/locations")]
pub async fn get_user_location(
    user_service: web::Data<UserService>,
    path: web::Path<UserPath>,
) -> Result<HttpResponse, AppError> {
    let id = path.user_id()?;

    let location = user_service.get_location(id).await?;

    Ok(HttpResponse::Ok().json(location))
}
