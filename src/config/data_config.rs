//! 서버, 데이터베이스, 외부 API 설정 관리 모듈
//!
//! 모든 설정값은 프로세스 시작 시 [`AppConfig::from_env`]로 한 번만 읽고,
//! 이후에는 각 컴포넌트의 생성자에 값으로 전달합니다.

use std::env;
use std::str::FromStr;
use std::time::Duration;
use log::warn;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경 - 빠른 개발을 위한 설정
    Development,
    /// 테스트 환경 - 스키마 초기화 및 시드 데이터 적재
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// `ENVIRONMENT` 환경 변수에서 실행 환경을 감지합니다.
    ///
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        Self::from_name(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// # Arguments
    ///
    /// * `s` - 환경 이름 문자열 (대소문자 무관)
    ///
    /// # Returns
    ///
    /// 해당하는 Environment 값. 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_name(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// 서버 바인딩 설정
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// 바인딩할 호스트 주소. 기본값: "0.0.0.0"
    pub host: String,
    /// 바인딩할 포트. 기본값: 8080
    pub port: u16,
    /// 헬스체크 응답에 노출되는 서비스 이름
    pub name: String,
    /// actix 워커 스레드 수
    pub workers: usize,
    /// CORS 허용 Origin 목록
    pub allowed_origins: Vec<String>,
    /// 요청 하나의 처리 상한 (밀리초). 넘으면 503 `TIMEOUT`. 기본값: 10000
    pub request_timeout_ms: u64,
    /// 요청 헤더 수신 상한 (밀리초). 기본값: 15000
    pub client_request_timeout_ms: u64,
    /// 연결 종료 대기 상한 (밀리초). 기본값: 5000
    pub client_disconnect_timeout_ms: u64,
}

impl ServerConfig {
    /// 환경 변수에서 서버 설정을 읽습니다.
    ///
    /// # Environment Variables
    ///
    /// - `HOST`, `PORT`, `SERVER_NAME`, `SERVER_WORKERS`
    /// - `CORS_ALLOWED_ORIGINS`: 쉼표로 구분된 Origin 목록
    /// - `REQUEST_TIMEOUT_MS`, `CLIENT_REQUEST_TIMEOUT_MS`, `CLIENT_DISCONNECT_TIMEOUT_MS`
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: parse_var("PORT", 8080),
            name: env::var("SERVER_NAME").unwrap_or_else(|_| "users-api".to_string()),
            workers: parse_var("SERVER_WORKERS", 4),
            allowed_origins: split_list(
                &env::var("CORS_ALLOWED_ORIGINS")
                    .unwrap_or_else(|_| "http://localhost:3000,http://127.0.0.1:3000".to_string()),
            ),
            request_timeout_ms: parse_var("REQUEST_TIMEOUT_MS", 10_000),
            client_request_timeout_ms: parse_var("CLIENT_REQUEST_TIMEOUT_MS", 15_000),
            client_disconnect_timeout_ms: parse_var("CLIENT_DISCONNECT_TIMEOUT_MS", 5_000),
        }
    }

    /// `host:port` 형태의 바인딩 주소
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

/// 관계형 저장소 연결 설정
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// sqlx 연결 URL (예: `sqlite://users.db`)
    pub url: String,
    /// 커넥션 풀 최대 크기
    pub max_connections: u32,
}

impl DatabaseConfig {
    pub fn from_env() -> Self {
        Self {
            url: env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://users.db".to_string()),
            max_connections: parse_var("DATABASE_MAX_CONNECTIONS", 5),
        }
    }
}

/// 지오코딩(지도) API 클라이언트 설정
#[derive(Debug, Clone)]
pub struct MapClientConfig {
    /// 프로바이더 기본 URL
    pub base_url: String,
    /// `access_token` 쿼리 파라미터로 전달되는 토큰
    pub token: String,
    /// 요청 단위 타임아웃 (밀리초)
    pub timeout_ms: u64,
}

impl MapClientConfig {
    pub fn from_env() -> Self {
        Self {
            base_url: env::var("MAP_API_BASE_URL")
                .unwrap_or_else(|_| "https://api.mapbox.com".to_string()),
            token: env::var("MAP_API_TOKEN").unwrap_or_default(),
            timeout_ms: parse_var("MAP_API_TIMEOUT_MS", 3000),
        }
    }
}

/// Rate Limiting 설정
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    /// 환경변수에서 Rate Limiting 설정을 로드합니다
    ///
    /// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
    /// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
    pub fn from_env() -> Self {
        Self {
            per_second: parse_var("RATE_LIMIT_PER_SECOND", 100),
            burst_size: parse_var("RATE_LIMIT_BURST_SIZE", 200),
        }
    }
}

/// 애플리케이션 전체 설정
///
/// 시작 시 한 번 생성되어 `main`에서 각 컴포넌트 생성자로 분배됩니다.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub map_client: MapClientConfig,
    pub rate_limit: RateLimitConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            environment: Environment::current(),
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            map_client: MapClientConfig::from_env(),
            rate_limit: RateLimitConfig::from_env(),
        }
    }
}

/// 환경 변수를 읽어 파싱하고, 없거나 잘못된 값이면 기본값을 사용합니다.
fn parse_var<T>(key: &str, default: T) -> T
where
    T: FromStr + std::fmt::Display,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => parse_or_default(key, &raw, default),
        Err(_) => default,
    }
}

fn parse_or_default<T>(key: &str, raw: &str, default: T) -> T
where
    T: FromStr + std::fmt::Display,
    T::Err: std::fmt::Display,
{
    raw.trim().parse::<T>().unwrap_or_else(|e| {
        warn!("{} 파싱 실패: {}. 기본값 {} 사용", key, e, default);
        default
    })
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
