//! Shapes returned by the analytics endpoints.

use serde::Deserialize;

use super::de;

/// One row of `/analytics/trips`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TripRecord {
    #[serde(rename = "VendorID", deserialize_with = "de::integer")]
    pub vendor_id: u32,
    #[serde(rename = "tpep_pickup_datetime", default)]
    pub pickup_datetime: Option<String>,
    #[serde(rename = "tpep_dropoff_datetime", default)]
    pub dropoff_datetime: Option<String>,
    #[serde(rename = "PULocationID", default, deserialize_with = "de::optional_integer")]
    pub pickup_location_id: Option<u32>,
    #[serde(rename = "DOLocationID", default, deserialize_with = "de::optional_integer")]
    pub dropoff_location_id: Option<u32>,
    #[serde(default)]
    pub pickup_zone: Option<String>,
    #[serde(default)]
    pub pickup_borough: Option<String>,
    #[serde(default)]
    pub dropoff_zone: Option<String>,
    #[serde(default)]
    pub dropoff_borough: Option<String>,
    #[serde(default, deserialize_with = "de::optional_integer")]
    pub passenger_count: Option<u32>,
    /// Miles.
    #[serde(default, deserialize_with = "de::optional_number")]
    pub trip_distance: Option<f64>,
    /// Minutes, computed upstream.
    #[serde(default, deserialize_with = "de::optional_number")]
    pub trip_duration: Option<f64>,
    /// Miles per hour, computed upstream.
    #[serde(default, deserialize_with = "de::optional_number")]
    pub trip_speed: Option<f64>,
    #[serde(deserialize_with = "de::number")]
    pub fare_amount: f64,
    #[serde(default, deserialize_with = "de::optional_number")]
    pub fare_per_mile: Option<f64>,
    #[serde(default, deserialize_with = "de::optional_number")]
    pub total_amount: Option<f64>,
}

impl TripRecord {
    pub fn total(&self) -> f64 {
        self.total_amount.unwrap_or(self.fare_amount)
    }

    pub fn pickup_label(&self) -> Option<String> {
        location_label(
            self.pickup_zone.as_deref(),
            self.pickup_borough.as_deref(),
            self.pickup_location_id,
        )
    }

    pub fn dropoff_label(&self) -> Option<String> {
        location_label(
            self.dropoff_zone.as_deref(),
            self.dropoff_borough.as_deref(),
            self.dropoff_location_id,
        )
    }
}

/// `Zone, Borough` when the zone resolved, else the numeric location id.
fn location_label(zone: Option<&str>, borough: Option<&str>, id: Option<u32>) -> Option<String> {
    match (zone.filter(|z| !z.is_empty()), borough.filter(|b| !b.is_empty())) {
        (Some(zone), Some(borough)) => Some(format!("{zone}, {borough}")),
        (Some(zone), None) => Some(zone.to_string()),
        (None, _) => id.map(|id| id.to_string()),
    }
}

/// One row of `/analytics/price-summary`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FareSummary {
    #[serde(rename = "VendorID", deserialize_with = "de::integer")]
    pub vendor_id: u32,
    #[serde(deserialize_with = "de::number")]
    pub min_price: f64,
    #[serde(deserialize_with = "de::number")]
    pub avg_price: f64,
    #[serde(deserialize_with = "de::number")]
    pub max_price: f64,
}
