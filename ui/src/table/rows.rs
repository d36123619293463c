use crate::core::format::{self, format_decimal, format_money, format_optional, format_timestamp};
use crate::data::TripRecord;

/// Display strings for one trip, shared by the table and the card list.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRow {
    pub vendor_id: u32,
    pub pickup: String,
    pub dropoff: String,
    pub pickup_zone: String,
    pub dropoff_zone: String,
    pub passengers: String,
    pub distance: String,
    pub duration: String,
    pub speed: String,
    pub fare: String,
    pub per_mile: String,
    pub total: String,
}

impl TripRow {
    pub fn from_record(trip: &TripRecord) -> Self {
        Self {
            vendor_id: trip.vendor_id,
            pickup: format_timestamp(trip.pickup_datetime.as_deref()),
            dropoff: format_timestamp(trip.dropoff_datetime.as_deref()),
            pickup_zone: format_optional(trip.pickup_label()),
            dropoff_zone: format_optional(trip.dropoff_label()),
            passengers: format_optional(trip.passenger_count),
            distance: format_decimal(trip.trip_distance, 2),
            duration: format_optional(trip.trip_duration),
            speed: format_decimal(trip.trip_speed, 1),
            fare: format_money(Some(trip.fare_amount)),
            per_mile: format_money(trip.fare_per_mile),
            total: format_money(Some(trip.total())),
        }
    }

    pub fn vendor_badge(&self) -> String {
        format!("V{}", self.vendor_id)
    }

    pub fn vendor_class(&self) -> String {
        format!("vendor-badge vendor-{}", self.vendor_id)
    }

    /// `$4.02/mi`, or the placeholder.
    pub fn per_mile_rate(&self) -> String {
        if self.per_mile == format::EMPTY {
            self.per_mile.clone()
        } else {
            format!("{}/mi", self.per_mile)
        }
    }
}
