//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층을 담당하는 리포지토리입니다.
//! 타입이 지정된 연산을 파라미터 바인딩 쿼리로 변환하고, 저장소의 "행 없음" 상황을
//! 도메인 `NotFound` 에러로 매핑합니다.
//!
//! ## 특징
//!
//! - **파라미터 바인딩**: 모든 값은 `?` 플레이스홀더로 전달
//! - **NotFound 매핑**: 단건 조회 미스, 삭제 시 영향받은 행 없음
//! - **위치 조회**: 사용자 주소를 지오코딩 프로바이더에 위임

use std::collections::HashMap;
use std::sync::Arc;
use async_trait::async_trait;
use log::error;
use sqlx::SqlitePool;
use crate::{
    clients::rest_client::RestClient,
    core::errors::{AppError, AppResult},
    db::Database,
    domain::{
        entities::users::{User, UserList},
        models::location::Location,
    },
};

const INSERT_USER_SQL: &str = "INSERT INTO users (name, address, dob) VALUES (?, ?, ?)";
const GET_USER_SQL: &str =
    "SELECT id, name, address, dob, created_at, updated_at FROM users WHERE id = ?";
const UPDATE_USER_SQL: &str =
    "UPDATE users SET name = ?, address = ?, dob = ?, updated_at = CURRENT_TIMESTAMP WHERE id = ?";
const FIND_USERS_SQL: &str = "SELECT id, name, address, dob, created_at, updated_at FROM users \
                              WHERE name = ? ORDER BY id ASC LIMIT ? OFFSET ?";
const DELETE_USER_SQL: &str = "DELETE FROM users WHERE id = ?";

const LOCATION_PATH: &str = "/geocoding/v5/mapbox.places";

/// `size`가 0으로 요청되었을 때 적용되는 페이지 크기
pub const DEFAULT_PAGE_SIZE: i64 = 20;

fn user_not_found(id: i64) -> AppError {
    AppError::NotFound(format!("user with id={} not found", id))
}

/// 사용자 데이터 액세스 연산
///
/// 서비스는 이 trait에만 의존하므로 같은 연산 집합을 구현한 어떤 타입이든
/// (테스트 대역 포함) 구체 리포지토리를 대신할 수 있습니다.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 새 사용자를 저장하고 저장소가 할당한 ID를 반환합니다.
    async fn insert(&self, user: &User) -> AppResult<i64>;

    /// `id` 행의 이름/주소/생년월일을 덮어씁니다.
    ///
    /// 일치하는 행이 없어도 `NotFound`를 반환하지 않습니다.
    async fn update(&self, id: i64, user: &User) -> AppResult<()>;

    /// ID로 사용자 한 명을 조회합니다.
    async fn get(&self, id: i64) -> AppResult<User>;

    /// 이름이 정확히 일치하는 사용자를 페이지 단위로 조회합니다.
    async fn find(&self, name: &str, size: i64, offset: i64) -> AppResult<UserList>;

    /// 사용자를 물리적으로 삭제합니다.
    async fn delete(&self, id: i64) -> AppResult<()>;

    /// 사용자 주소를 지오코딩한 위치 정보를 조회합니다.
    async fn get_location(&self, id: i64) -> AppResult<Location>;
}

/// SQLite 기반 사용자 리포지토리
///
/// ## 에러 처리
///
/// - **NotFound**: `get`/`get_location`에서 행이 없을 때, `delete`에서 삭제된 행이 없을 때
/// - **DatabaseError**: 제약 조건 위반, 커넥션 오류 등 저장소 실패
/// - **ExternalServiceError**: 지오코딩 호출 실패, 2xx 외 응답, 응답 해석 실패
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let repo = SqlUserRepository::new(database, Arc::new(map_client), config.map_client.token);
///
/// let id = repo.insert(&User::new("John", "5th avenue", dob)).await?;
/// let user = repo.get(id).await?;
/// let page = repo.find("John", 0, 0).await?; // size 0 → 20
/// ```
pub struct SqlUserRepository {
    /// 요청 간에 공유되는 커넥션 풀
    pool: SqlitePool,

    /// 지오코딩 프로바이더 클라이언트
    map_client: Arc<dyn RestClient>,

    /// 프로바이더 `access_token`
    map_token: String,
}

impl SqlUserRepository {
    pub fn new(database: Database, map_client: Arc<dyn RestClient>, map_token: impl Into<String>) -> Self {
        Self {
            pool: database.pool().clone(),
            map_client,
            map_token: map_token.into(),
        }
    }
}

#[async_trait]
impl UserRepository for SqlUserRepository {
    async fn insert(&self, user: &User) -> AppResult<i64> {
        let result = sqlx::query(INSERT_USER_SQL)
            .bind(&user.name)
            .bind(&user.address)
            .bind(user.date_of_birth)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("error while creating user: {}", e)))?;

        Ok(result.last_insert_rowid())
    }

    async fn update(&self, id: i64, user: &User) -> AppResult<()> {
        // TODO: 영향받은 행이 0이면 NotFound를 반환할지 API 소비자와 합의 필요 (delete와 비대칭)
        sqlx::query(UPDATE_USER_SQL)
            .bind(&user.name)
            .bind(&user.address)
            .bind(user.date_of_birth)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("error while updating user {}: {}", id, e)))?;

        Ok(())
    }

    async fn get(&self, id: i64) -> AppResult<User> {
        sqlx::query_as::<_, User>(GET_USER_SQL)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .ok_or_else(|| user_not_found(id))
    }

    async fn find(&self, name: &str, size: i64, offset: i64) -> AppResult<UserList> {
        let size = if size == 0 { DEFAULT_PAGE_SIZE } else { size };

        let data = sqlx::query_as::<_, User>(FIND_USERS_SQL)
            .bind(name)
            .bind(size)
            .bind(offset)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(UserList { data, size, offset })
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query(DELETE_USER_SQL)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if result.rows_affected() < 1 {
            return Err(user_not_found(id));
        }

        Ok(())
    }

    async fn get_location(&self, id: i64) -> AppResult<Location> {
        let user = self.get(id).await?;

        let resource = format!("{}/{}.json", LOCATION_PATH, urlencoding::encode(&user.address));
        let path = format!("{}?access_token={}", resource, urlencoding::encode(&self.map_token));

        let response = self.map_client.get(&path, HashMap::new(), None).await?;

        if !response.is_success() {
            error!(
                "unexpected status from geocoding provider path: {}, status: {}, response: {}",
                resource, response.status, response.body
            );
            return Err(AppError::ExternalServiceError(format!(
                "unexpected status {} from geocoding provider",
                response.status
            )));
        }

        serde_json::from_str::<Location>(&response.body).map_err(|e| {
            error!(
                "error while unmarshalling response path: {}, error: {} - response: {}",
                resource, e, response.body
            );
            AppError::ExternalServiceError(format!("invalid geocoding response: {}", e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use reqwest::StatusCode;
    use crate::clients::rest_client::{MockRestClient, RestResponse};
    use crate::config::Environment;
    use crate::db;

    const LOCATION_BODY: &str = r#"{
        "type": "FeatureCollection",
        "query": ["5th", "avenue"],
        "features": [{
            "id": "address.1",
            "type": "Feature",
            "place_type": ["address"],
            "text": "5th Avenue",
            "place_name": "5th Avenue, New York",
            "center": [-73.97, 40.77],
            "geometry": {"type": "Point", "coordinates": [-73.97, 40.77]},
            "context": [{"id": "place.1", "wikidata": "Q60", "text": "New York"}]
        }]
    }"#;

    fn dob() -> NaiveDate {
        NaiveDate::from_ymd_opt(1991, 1, 10).unwrap()
    }

    async fn repository_with(map_client: MockRestClient) -> SqlUserRepository {
        let database = db::in_memory(&Environment::Development).await;
        SqlUserRepository::new(database, Arc::new(map_client), "token")
    }

    async fn repository() -> SqlUserRepository {
        repository_with(MockRestClient::new()).await
    }

    fn respond(status: StatusCode, body: &'static str) -> MockRestClient {
        let mut client = MockRestClient::new();
        client
            .expect_get()
            .times(1)
            .returning(move |_, _, _| Ok(RestResponse { status, body: body.to_string() }));
        client
    }

    #[actix_web::test]
    async fn test_insert_then_get_round_trip() {
        let repo = repository().await;
        let user = User::new("John", "5th avenue", dob());

        let id = repo.insert(&user).await.unwrap();
        let stored = repo.get(id).await.unwrap();

        assert!(id > 0);
        assert_eq!(stored.id, Some(id));
        assert_eq!(stored.name, user.name);
        assert_eq!(stored.address, user.address);
        assert_eq!(stored.date_of_birth, user.date_of_birth);
        assert!(stored.created_at.is_some());
        assert!(stored.updated_at.is_some());
    }

    #[actix_web::test]
    async fn test_insert_name_too_long_is_database_error() {
        let repo = repository().await;
        let user = User::new("test1".repeat(10), "address", dob());

        let result = repo.insert(&user).await;

        assert!(matches!(result, Err(AppError::DatabaseError(_))));
    }

    #[actix_web::test]
    async fn test_insert_without_dob_is_database_error() {
        let repo = repository().await;
        let user = User {
            name: "John".to_string(),
            ..User::default()
        };

        assert!(matches!(repo.insert(&user).await, Err(AppError::DatabaseError(_))));
    }

    #[actix_web::test]
    async fn test_update_overwrites_fields_and_keeps_id() {
        let repo = repository().await;
        let id = repo.insert(&User::new("John", "5th avenue", dob())).await.unwrap();
        let new_dob = NaiveDate::from_ymd_opt(1985, 6, 1).unwrap();

        repo.update(id, &User::new("Johnny", "Broadway", new_dob)).await.unwrap();
        let stored = repo.get(id).await.unwrap();

        assert_eq!(stored.id, Some(id));
        assert_eq!(stored.name, "Johnny");
        assert_eq!(stored.address, "Broadway");
        assert_eq!(stored.date_of_birth, Some(new_dob));
    }

    #[actix_web::test]
    async fn test_update_unknown_id_is_not_reported() {
        let repo = repository().await;

        let result = repo.update(999_999, &User::new("John", "5th avenue", dob())).await;

        assert!(result.is_ok());
    }

    #[actix_web::test]
    async fn test_update_violating_column_width_is_database_error() {
        let repo = repository().await;
        let id = repo.insert(&User::new("John", "5th avenue", dob())).await.unwrap();

        let result = repo.update(id, &User::new("test1".repeat(10), "address", dob())).await;

        assert!(matches!(result, Err(AppError::DatabaseError(_))));
    }

    #[actix_web::test]
    async fn test_get_unknown_id_is_not_found() {
        let repo = repository().await;

        match repo.get(999_999).await {
            Err(AppError::NotFound(msg)) => assert_eq!(msg, "user with id=999999 not found"),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[actix_web::test]
    async fn test_delete_removes_row() {
        let repo = repository().await;
        let id = repo.insert(&User::new("John", "5th avenue", dob())).await.unwrap();

        repo.delete(id).await.unwrap();

        assert!(matches!(repo.get(id).await, Err(AppError::NotFound(_))));
        assert!(matches!(repo.delete(id).await, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_delete_unknown_id_is_not_found() {
        let repo = repository().await;

        assert!(matches!(repo.delete(999_999).await, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_find_defaults_size_to_twenty() {
        let repo = repository().await;
        for _ in 0..25 {
            repo.insert(&User::new("Jhon", "5th avenue", dob())).await.unwrap();
        }

        let page = repo.find("Jhon", 0, 0).await.unwrap();

        assert_eq!(page.size, DEFAULT_PAGE_SIZE);
        assert_eq!(page.offset, 0);
        assert_eq!(page.data.len(), 20);
    }

    #[actix_web::test]
    async fn test_find_filters_by_exact_name() {
        let repo = repository().await;
        repo.insert(&User::new("Jhon", "5th avenue", dob())).await.unwrap();
        repo.insert(&User::new("Jhonny", "5th avenue", dob())).await.unwrap();
        repo.insert(&User::new("Mary", "Broadway", dob())).await.unwrap();

        let page = repo.find("Jhon", 10, 0).await.unwrap();

        assert_eq!(page.data.len(), 1);
        assert!(page.data.iter().all(|user| user.name == "Jhon"));
    }

    #[actix_web::test]
    async fn test_find_pages_are_contiguous() {
        let repo = repository().await;
        for i in 0..6 {
            repo.insert(&User::new("Jhon", format!("street {}", i), dob())).await.unwrap();
        }

        let window = repo.find("Jhon", 3, 2).await.unwrap();
        let prefix = repo.find("Jhon", 5, 0).await.unwrap();

        assert_eq!(window.data.len(), 3);
        assert_eq!(window.size, 3);
        assert_eq!(window.offset, 2);
        assert_eq!(window.data.as_slice(), &prefix.data[2..5]);
    }

    #[actix_web::test]
    async fn test_find_negative_size_returns_every_match() {
        let database = db::in_memory(&Environment::Test).await;
        let repo = SqlUserRepository::new(database, Arc::new(MockRestClient::new()), "token");
        repo.insert(&User::new("Mary", "Broadway", dob())).await.unwrap();

        let page = repo.find("Jhon", -1, 0).await.unwrap();

        assert_eq!(page.size, -1);
        assert_eq!(page.data.len(), 8);
        assert!(page.data.iter().all(|user| user.name == "Jhon"));
    }

    #[actix_web::test]
    async fn test_find_past_the_end_is_empty() {
        let repo = repository().await;
        repo.insert(&User::new("Jhon", "5th avenue", dob())).await.unwrap();

        let page = repo.find("Jhon", 5, 10).await.unwrap();

        assert!(page.data.is_empty());
        assert_eq!(page.offset, 10);
    }

    #[actix_web::test]
    async fn test_get_location_geocodes_user_address() {
        let mut client = MockRestClient::new();
        client
            .expect_get()
            .withf(|path, headers, body| {
                path == "/geocoding/v5/mapbox.places/5th%20avenue.json?access_token=token"
                    && headers.is_empty()
                    && body.is_none()
            })
            .times(1)
            .returning(|_, _, _| {
                Ok(RestResponse {
                    status: StatusCode::OK,
                    body: LOCATION_BODY.to_string(),
                })
            });
        let repo = repository_with(client).await;
        let id = repo.insert(&User::new("John", "5th avenue", dob())).await.unwrap();

        let location = repo.get_location(id).await.unwrap();

        assert_eq!(location.kind, "FeatureCollection");
        assert_eq!(location.features.len(), 1);
        assert_eq!(location.features[0].center, vec![-73.97, 40.77]);
    }

    #[actix_web::test]
    async fn test_get_location_unknown_user_is_not_found_without_calling_provider() {
        let mut client = MockRestClient::new();
        client.expect_get().times(0);
        let repo = repository_with(client).await;

        assert!(matches!(repo.get_location(999_999).await, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_get_location_non_success_status_is_generic_failure() {
        let repo = repository_with(respond(StatusCode::UNAUTHORIZED, "Not Authorized")).await;
        let id = repo.insert(&User::new("John", "5th avenue", dob())).await.unwrap();

        let result = repo.get_location(id).await;

        assert!(matches!(result, Err(AppError::ExternalServiceError(_))));
    }

    #[actix_web::test]
    async fn test_get_location_provider_not_found_is_not_domain_not_found() {
        let repo = repository_with(respond(StatusCode::NOT_FOUND, "{}")).await;
        let id = repo.insert(&User::new("John", "5th avenue", dob())).await.unwrap();

        let result = repo.get_location(id).await;

        assert!(matches!(result, Err(AppError::ExternalServiceError(_))));
    }

    #[actix_web::test]
    async fn test_get_location_undecodable_body_is_generic_failure() {
        let repo = repository_with(respond(StatusCode::OK, "<html>oops</html>")).await;
        let id = repo.insert(&User::new("John", "5th avenue", dob())).await.unwrap();

        let result = repo.get_location(id).await;

        assert!(matches!(result, Err(AppError::ExternalServiceError(_))));
    }

    #[actix_web::test]
    async fn test_get_location_transport_failure_propagates() {
        let mut client = MockRestClient::new();
        client
            .expect_get()
            .returning(|_, _, _| Err(AppError::ExternalServiceError("timeout".to_string())));
        let repo = repository_with(client).await;
        let id = repo.insert(&User::new("John", "5th avenue", dob())).await.unwrap();

        match repo.get_location(id).await {
            Err(AppError::ExternalServiceError(msg)) => assert_eq!(msg, "timeout"),
            other => panic!("expected ExternalServiceError, got {:?}", other),
        }
    }
}
