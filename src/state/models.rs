//! Domain models and their GeoJSON wire representation
//!
//! The backend serves properties as GeoJSON Features (point geometry plus a
//! `properties` attribute bag) and portfolios as plain JSON objects.

use serde::{Deserialize, Serialize};

/// A longitude/latitude pair representing a map pin position.
///
/// Valid range is longitude [-180, 180], latitude [-90, 90]; producing
/// out-of-range values is a caller error caught by form validation, not here.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Location {
    pub longitude: f64,
    pub latitude: f64,
}

impl Location {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }
}

/// A property in the portfolio risk register.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    /// Backend primary key; `None` until the property is created.
    pub id: Option<i64>,
    pub portfolio: i64,
    pub name: String,
    pub address: String,
    pub zip_code: String,
    pub city: String,
    pub location: Location,
    pub estimated_value: i64,
    pub relevant_risks: u32,
    pub handled_risks: u32,
    pub total_financial_risk: i64,
}

/// A named grouping of properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub id: i64,
    pub name: String,
}

/// GeoJSON point geometry; coordinates are `[longitude, latitude]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Geometry {
    #[serde(rename = "type")]
    pub kind: String,
    pub coordinates: [f64; 2],
}

/// Attribute bag carried under `properties` in a Feature.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyAttributes {
    pub portfolio: i64,
    pub name: String,
    pub address: String,
    pub zip_code: String,
    pub city: String,
    pub estimated_value: i64,
    pub relevant_risks: u32,
    pub handled_risks: u32,
    pub total_financial_risk: i64,
}

/// A single GeoJSON Feature as sent/received by `/api/properties/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub geometry: Geometry,
    pub properties: PropertyAttributes,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    pub kind: String,
    pub features: Vec<Feature>,
}

impl Property {
    pub fn to_feature(&self) -> Feature {
        Feature {
            kind: "Feature".to_string(),
            id: self.id,
            geometry: Geometry {
                kind: "Point".to_string(),
                coordinates: [self.location.longitude, self.location.latitude],
            },
            properties: PropertyAttributes {
                portfolio: self.portfolio,
                name: self.name.clone(),
                address: self.address.clone(),
                zip_code: self.zip_code.clone(),
                city: self.city.clone(),
                estimated_value: self.estimated_value,
                relevant_risks: self.relevant_risks,
                handled_risks: self.handled_risks,
                total_financial_risk: self.total_financial_risk,
            },
        }
    }

    pub fn from_feature(feature: Feature) -> Self {
        let [longitude, latitude] = feature.geometry.coordinates;
        Self {
            id: feature.id,
            portfolio: feature.properties.portfolio,
            name: feature.properties.name,
            address: feature.properties.address,
            zip_code: feature.properties.zip_code,
            city: feature.properties.city,
            location: Location {
                longitude,
                latitude,
            },
            estimated_value: feature.properties.estimated_value,
            relevant_risks: feature.properties.relevant_risks,
            handled_risks: feature.properties.handled_risks,
            total_financial_risk: feature.properties.total_financial_risk,
        }
    }
}
