//! Database Connection Management Module
//!
//! 관계형 저장소(SQLite) 연결 관리를 담당하는 모듈입니다.
//! `sqlx` 커넥션 풀은 여러 요청에서 동시에 사용해도 안전하므로
//! 애플리케이션 레벨의 잠금 없이 리포지토리들이 공유합니다.
//!
//! # 환경 변수 설정
//!
//! ```bash
//! # SQLite 연결 URL (파일이 없으면 생성됨)
//! export DATABASE_URL="sqlite://users.db"
//! export DATABASE_MAX_CONNECTIONS="5"
//! ```
//!
//! # 스키마 준비
//!
//! 마이그레이션 프레임워크 없이 [`Database::prepare_schema`]가 테이블을 준비합니다.
//! 테스트 환경에서는 테이블을 재생성하고 시드 데이터를 적재합니다.

use std::str::FromStr;
use chrono::NaiveDate;
use log::info;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use crate::config::{DatabaseConfig, Environment};

const CREATE_USERS_TABLE_SQL: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL CHECK (length(name) <= 48),
        address TEXT NOT NULL CHECK (length(address) <= 256),
        dob DATE NOT NULL,
        created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
        updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
    )
"#;

const CREATE_USERS_NAME_INDEX_SQL: &str =
    "CREATE INDEX IF NOT EXISTS idx_users_name ON users (name ASC)";

const DROP_USERS_TABLE_SQL: &str = "DROP TABLE IF EXISTS users";

const SEED_USER_SQL: &str = "INSERT INTO users (name, address, dob) VALUES (?, ?, ?)";

const SEED_USER_COUNT: usize = 8;

/// 관계형 저장소 연결 래퍼
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// 새 데이터베이스 커넥션 풀을 생성하고 연결을 검증합니다.
    ///
    /// ## 사용 예제
    /// ```rust,ignore
    /// let database = Database::connect(&config.database).await?;
    /// ```
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(&config.url)?.create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(options)
            .await?;

        // 연결 테스트
        sqlx::query("SELECT 1").execute(&pool).await?;

        info!("✅ 데이터베이스 연결 성공: {}", config.url);

        Ok(Self { pool })
    }

    /// 리포지토리에서 쿼리를 실행할 커넥션 풀
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// 실행 환경에 맞게 `users` 테이블을 준비합니다.
    ///
    /// - `Test`: 테이블 삭제 → 재생성 → 시드 사용자 적재
    /// - 그 외: 테이블과 인덱스가 없을 때만 생성 (여러 번 실행해도 안전)
    pub async fn prepare_schema(&self, environment: &Environment) -> Result<(), sqlx::Error> {
        if *environment == Environment::Test {
            sqlx::query(DROP_USERS_TABLE_SQL).execute(&self.pool).await?;
        }

        sqlx::query(CREATE_USERS_TABLE_SQL).execute(&self.pool).await?;
        sqlx::query(CREATE_USERS_NAME_INDEX_SQL).execute(&self.pool).await?;

        if *environment == Environment::Test {
            self.seed_users().await?;
        }

        info!("📦 users 테이블 준비 완료 ({:?})", environment);
        Ok(())
    }

    async fn seed_users(&self) -> Result<(), sqlx::Error> {
        let dob = NaiveDate::from_ymd_opt(1991, 1, 10);

        for _ in 0..SEED_USER_COUNT {
            sqlx::query(SEED_USER_SQL)
                .bind("Jhon")
                .bind("5th avenue")
                .bind(dob)
                .execute(&self.pool)
                .await?;
        }

        Ok(())
    }
}

/// 테스트용 인메모리 데이터베이스
///
/// `:memory:` 데이터베이스는 커넥션마다 별개이므로 커넥션 하나만 유지합니다.
#[cfg(test)]
pub(crate) async fn in_memory(environment: &Environment) -> Database {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    let database = Database { pool };
    database.prepare_schema(environment).await.unwrap();
    database
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn count_users(database: &Database) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(database.pool())
            .await
            .unwrap()
    }

    #[actix_web::test]
    async fn test_test_environment_seeds_fixture_users() {
        let database = in_memory(&Environment::Test).await;

        assert_eq!(count_users(&database).await, SEED_USER_COUNT as i64);
    }

    #[actix_web::test]
    async fn test_prepare_schema_is_idempotent() {
        let database = in_memory(&Environment::Development).await;

        database.prepare_schema(&Environment::Development).await.unwrap();
        database.prepare_schema(&Environment::Production).await.unwrap();

        assert_eq!(count_users(&database).await, 0);
    }

    #[actix_web::test]
    async fn test_test_environment_resets_existing_rows() {
        let database = in_memory(&Environment::Test).await;

        database.prepare_schema(&Environment::Test).await.unwrap();

        assert_eq!(count_users(&database).await, SEED_USER_COUNT as i64);
    }
}
