//! # External System Models
//!
//! 외부 시스템 응답을 표현하는 모델들입니다. 영속되지 않으며
//! 요청 하나가 소유하고 끝나면 버려집니다.
//!
//! - [`location`] - 지오코딩 프로바이더의 장소 조회 결과

pub mod location;

pub use location::{Context, Feature, FeatureProperties, Geometry, Location};
