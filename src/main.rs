use std::io;
use std::sync::Arc;
use std::time::Duration;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use users_api::clients::RestProvider;
use users_api::config::{AppConfig, ServerConfig};
use users_api::db::Database;
use users_api::middlewares::RequestTimeout;
use users_api::repositories::users::SqlUserRepository;
use users_api::routes::configure_all_routes;
use users_api::services::users::UserService;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 사용자 API 서버 시작중...");

    let config = AppConfig::from_env();
    info!("환경: {:?}", config.environment);

    // 저장소 연결과 스키마 준비는 실패 시 프로세스를 종료
    let database = initialize_database(&config).await?;

    let map_client = RestProvider::new(&config.map_client.base_url, config.map_client.timeout_ms)
        .map_err(|e| io::Error::other(e.to_string()))?;
    let user_repo = SqlUserRepository::new(database, Arc::new(map_client), config.map_client.token.clone());
    let user_service = web::Data::new(UserService::new(Arc::new(user_repo)));

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(config, user_service).await
}

async fn start_http_server(config: AppConfig, user_service: web::Data<UserService>) -> io::Result<()> {
    let bind_address = config.server.bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(config.rate_limit.per_second)
        .burst_size(config.rate_limit.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| io::Error::other("잘못된 Rate Limiting 설정"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        config.rate_limit.per_second,
        config.rate_limit.burst_size
    );

    info!("⏱️ 요청 처리 상한: {:?}", config.server.request_timeout());

    let server_config = web::Data::new(config.server.clone());
    let workers = config.server.workers;

    HttpServer::new(move || {
        let cors = configure_cors(&server_config);

        App::new()
            // 핸들러에 가장 가까운 미들웨어: 처리 시간 상한
            .wrap(RequestTimeout::new(server_config.request_timeout()))
            .wrap(Governor::new(&governor_conf))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(server_config.clone())
            .app_data(user_service.clone())
            .configure(configure_all_routes)
    })
        .client_request_timeout(Duration::from_millis(config.server.client_request_timeout_ms))
        .client_disconnect_timeout(Duration::from_millis(config.server.client_disconnect_timeout_ms))
        .bind(bind_address)?
        .workers(workers)
        .run()
        .await
}

fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

async fn initialize_database(config: &AppConfig) -> io::Result<Database> {
    info!("📡 데이터베이스 연결 중...");

    let database = Database::connect(&config.database).await.map_err(|e| {
        error!("❌ 데이터베이스 연결 실패: {}", e);
        io::Error::other(e.to_string())
    })?;

    database
        .prepare_schema(&config.environment)
        .await
        .map_err(|e| {
            error!("❌ 스키마 준비 실패: {}", e);
            io::Error::other(e.to_string())
        })?;

    Ok(database)
}

fn configure_cors(server: &ServerConfig) -> Cors {
    let cors = server
        .allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin));

    cors
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .expose_headers(vec![header::LOCATION])
        .max_age(3600)
}
