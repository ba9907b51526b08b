//! 라우트 등록
//!
//! 헬스 체크와 사용자 API 스코프를 등록합니다. 본문/쿼리/경로 추출기의 해석 실패는
//! 다른 에러와 같은 `{code, messages}` 형식의 400 응답으로 변환됩니다.

use actix_web::{error, web, HttpRequest, HttpResponse};
use serde_json::json;
use crate::config::ServerConfig;
use crate::core::errors::AppError;
use crate::handlers;

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check);

    configure_user_routes(cfg);
}

/// `/v{version}/users` 스코프를 등록합니다.
///
/// `web::Data<UserService>`가 앱 데이터로 등록되어 있어야 합니다.
pub fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/v{version}/users")
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .app_data(web::QueryConfig::default().error_handler(query_error_handler))
            .app_data(web::PathConfig::default().error_handler(path_error_handler))
            .service(handlers::users::create_user)
            .service(handlers::users::find_users)
            .service(handlers::users::get_user_location)
            .service(handlers::users::get_user)
            .service(handlers::users::update_user)
            .service(handlers::users::delete_user),
    );
}

fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::InvalidParameter(err.to_string()).into()
}

fn query_error_handler(err: error::QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::InvalidParameter(err.to_string()).into()
}

fn path_error_handler(err: error::PathError, _req: &HttpRequest) -> actix_web::Error {
    AppError::InvalidParameter(err.to_string()).into()
}

#[actix_web::get("/health")]
async fn health_check(server: Option<web::Data<ServerConfig>>) -> HttpResponse {
    let name = server
        .map(|config| config.name.clone())
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string());

    HttpResponse::Ok().json(json!({
        "name": name,
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
