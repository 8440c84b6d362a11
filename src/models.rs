// Data structures shared across the site: the vehicle listing record and
// the committed search criteria.

use serde::{Deserialize, Serialize};

/// One vehicle record in the dataset. Loaded once at startup from the
/// bundled JSON and never mutated afterwards.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct VehicleListing {
    pub id: u32,
    pub image: String,
    /// Currency-formatted display string, e.g. "£17,495".
    pub price: String,
    pub make: String,
    pub model: String,
    pub specification: String,
    pub year: String,
    pub body_type: String,
    pub mileage: String,
    pub engine_size: String,
    pub horsepower: String,
    pub transmission: String,
    pub fuel_type: String,
    pub history: String,
    pub location: String,
    pub finance_price: String,
}

impl VehicleListing {
    /// Numeric value of the display price: strips the currency symbol and
    /// thousands separators, keeps digits and the decimal point. Returns
    /// None when nothing parseable remains.
    pub fn numeric_price(&self) -> Option<f64> {
        let cleaned: String = self
            .price
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.')
            .collect();
        if cleaned.is_empty() {
            return None;
        }
        cleaned.parse::<f64>().ok().filter(|p| p.is_finite() && *p >= 0.0)
    }

    /// The eight fields keyword search runs against. make, model, location
    /// and history are deliberately not part of keyword matching.
    pub fn keyword_fields(&self) -> [&str; 8] {
        [
            &self.year,
            &self.body_type,
            &self.mileage,
            &self.engine_size,
            &self.horsepower,
            &self.transmission,
            &self.fuel_type,
            &self.specification,
        ]
    }
}

// The committed set of search constraints, packaged by the search form on
// submit and replaced wholesale on every submission. Empty strings mean
// "no constraint"; absent bounds mean unconstrained.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    #[serde(default)]
    pub keyword: String,
    #[serde(default)]
    pub make: String,
    #[serde(default)]
    pub model: String,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

impl FilterCriteria {
    pub fn has_price_bounds(&self) -> bool {
        self.min_price.is_some() || self.max_price.is_some()
    }
}
