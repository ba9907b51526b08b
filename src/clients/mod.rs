//! 외부 HTTP API 클라이언트 모듈
//!
//! [`rest_client::RestClient`] trait과 `reqwest` 기반 구현체 [`rest_client::RestProvider`]를 제공합니다.
//! 지오코딩 프로바이더 호출에 사용됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use users_api::clients::rest_client::{RestClient, RestProvider};
//!
//! let client = RestProvider::new("https://api.mapbox.com", 3000)?;
//! let response = client.get("/geocoding/v5/mapbox.places/home.json?access_token=..", HashMap::new(), None).await?;
//! ```

pub mod rest_client;

pub use rest_client::{RestClient, RestProvider, RestResponse};
