//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 [`AppConfig`]로 한 번에 읽어들인 뒤,
//! 전역 조회 없이 각 컴포넌트의 생성자에 명시적으로 주입합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 서버, 데이터베이스, 지도 API, Rate Limit 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//! export SERVER_NAME="users-api"
//!
//! # 데이터베이스
//! export DATABASE_URL="sqlite://users.db"
//!
//! # 지오코딩 API
//! export MAP_API_BASE_URL="https://api.mapbox.com"
//! export MAP_API_TOKEN="pk.your-token"
//! export MAP_API_TIMEOUT_MS="3000"
//!
//! # 실행 환경 (development, test, staging, production)
//! export ENVIRONMENT="development"
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use users_api::config::AppConfig;
//!
//! let config = AppConfig::from_env();
//! println!("Server will bind to {}", config.server.bind_address());
//! ```

pub mod data_config;

pub use data_config::*;
