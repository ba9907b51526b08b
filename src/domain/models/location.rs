//! 지오코딩 프로바이더 응답 모델
//!
//! Mapbox Geocoding API(`/geocoding/v5/mapbox.places/{query}.json`)의 응답 형식을 따릅니다.
//! 요청 단위로 생성되어 그대로 클라이언트에 전달되며, 저장하거나 캐시하지 않습니다.

use serde::{Deserialize, Serialize};

/// 주소 → 좌표 조회 결과 (GeoJSON FeatureCollection)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(rename = "type")]
    pub kind: String,
    /// 프로바이더가 해석한 쿼리 토큰
    #[serde(default)]
    pub query: Vec<String>,
    /// 관련도 순으로 정렬된 장소 후보
    #[serde(default)]
    pub features: Vec<Feature>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribution: Option<String>,
}

/// 장소 후보 하나
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    /// 장소 분류 (예: `address`, `poi`, `place`)
    #[serde(default)]
    pub place_type: Vec<String>,
    #[serde(default)]
    pub relevance: f64,
    #[serde(default)]
    pub properties: FeatureProperties,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub place_name: String,
    /// `[minX, minY, maxX, maxY]`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bbox: Option<Vec<f64>>,
    /// `[longitude, latitude]`
    #[serde(default)]
    pub center: Vec<f64>,
    pub geometry: Geometry,
    /// 이 장소를 포함하는 상위 지역 목록 (가까운 순)
    #[serde(default)]
    pub context: Vec<Context>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accuracy: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wikidata: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_code: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    #[serde(rename = "type")]
    pub kind: String,
    pub coordinates: Vec<f64>,
}

/// 상위 지역 (이웃, 우편번호, 도시, 국가 등)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Context {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wikidata: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_code: Option<String>,
    #[serde(default)]
    pub text: String,
}
