//! 미들웨어 모듈
//!
//! ActixWeb 요청 처리 파이프라인에서 사용되는 미들웨어들을 제공합니다.
//!
//! # 제공 미들웨어
//!
//! ### 요청 타임아웃 (RequestTimeout)
//! - 요청 하나의 처리 시간 상한 적용
//! - 상한을 넘으면 진행 중인 핸들러를 중단하고 503 `{code: "TIMEOUT", messages}` 응답
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::App;
//! use users_api::middlewares::RequestTimeout;
//!
//! App::new()
//!     .wrap(RequestTimeout::new(Duration::from_secs(10)))
//!     .configure(configure_all_routes)
//! ```

pub mod request_timeout;

pub use request_timeout::RequestTimeout;
