//! Compact card list for narrow viewports.
//!
//! Built as markup and injected into the list container, so every
//! interpolated value goes through `escape_html`. Zone and borough names come
//! straight from the database.

use crate::core::format::escape_html;
use crate::t;

use super::TripRow;

pub fn render_card_list(rows: &[TripRow]) -> String {
    if rows.is_empty() {
        return String::new();
    }

    let labels = CardLabels::localized();
    rows.iter().map(|row| render_card(row, &labels)).collect()
}

struct CardLabels {
    from: String,
    to: String,
    passengers: String,
    distance: String,
    duration: String,
    speed: String,
    fare: String,
    total: String,
}

impl CardLabels {
    fn localized() -> Self {
        Self {
            from: t!("card-from"),
            to: t!("card-to"),
            passengers: t!("card-passengers"),
            distance: t!("card-distance"),
            duration: t!("card-duration"),
            speed: t!("card-speed"),
            fare: t!("card-fare"),
            total: t!("card-total"),
        }
    }
}

fn render_card(row: &TripRow, labels: &CardLabels) -> String {
    let e = escape_html;
    format!(
        r#"<article class="small-item">
  <header class="si-header">
    <span class="{badge_class}">{badge}</span>
    <div class="si-times">
      <div class="si-pick">{pickup}</div>
      <div class="si-drop">{dropoff}</div>
    </div>
  </header>
  <div class="si-body">
    <div class="si-row"><strong>{from_label}</strong> <span>{from}</span></div>
    <div class="si-row"><strong>{to_label}</strong> <span>{to}</span></div>
    <div class="si-row si-meta">
      <span>{passengers_label}: {passengers}</span>
      <span>{distance_label}: {distance} mi</span>
      <span>{duration_label}: {duration} min</span>
      <span>{speed_label}: {speed} mph</span>
    </div>
  </div>
  <footer class="si-footer">
    <div class="si-fare">{fare_label}: <span class="fare">{fare}</span></div>
    <div class="si-total">{total_label}: <span class="fare">{total}</span></div>
    <div class="si-permile">{per_mile}</div>
  </footer>
</article>
"#,
        badge_class = e(&row.vendor_class()),
        badge = e(&row.vendor_badge()),
        pickup = e(&row.pickup),
        dropoff = e(&row.dropoff),
        from_label = e(&labels.from),
        from = e(&row.pickup_zone),
        to_label = e(&labels.to),
        to = e(&row.dropoff_zone),
        passengers_label = e(&labels.passengers),
        passengers = e(&row.passengers),
        distance_label = e(&labels.distance),
        distance = e(&row.distance),
        duration_label = e(&labels.duration),
        duration = e(&row.duration),
        speed_label = e(&labels.speed),
        speed = e(&row.speed),
        fare_label = e(&labels.fare),
        fare = e(&row.fare),
        total_label = e(&labels.total),
        total = e(&row.total),
        per_mile = e(&row.per_mile_rate()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::TripRecord;

    #[test]
    fn zone_names_are_escaped() {
        let trip = TripRecord {
            vendor_id: 1,
            pickup_zone: Some("<script>alert('x')</script>".into()),
            pickup_borough: Some("Queens & \"Co\"".into()),
            fare_amount: 10.0,
            ..TripRecord::default()
        };
        let markup = render_card_list(&[TripRow::from_record(&trip)]);

        assert!(!markup.contains("<script>"));
        assert!(markup.contains("&lt;script&gt;alert(&#039;x&#039;)&lt;/script&gt;"));
        assert!(markup.contains("Queens &amp; &quot;Co&quot;"));
    }

    #[test]
    fn card_lists_fares_and_rate() {
        let trip = TripRecord {
            vendor_id: 2,
            trip_distance: Some(2.0),
            fare_amount: 12.5,
            fare_per_mile: Some(6.25),
            ..TripRecord::default()
        };
        let markup = render_card_list(&[TripRow::from_record(&trip)]);

        assert_eq!(markup.matches("<article class=\"small-item\">").count(), 1);
        assert!(markup.contains("vendor-badge vendor-2"));
        assert!(markup.contains("Distance: 2.00 mi"));
        assert!(markup.contains("Fare: <span class=\"fare\">$12.50</span>"));
        assert!(markup.contains("Total: <span class=\"fare\">$12.50</span>"));
        assert!(markup.contains("$6.25/mi"));
    }

    #[test]
    fn empty_rows_render_nothing() {
        assert_eq!(render_card_list(&[]), "");
    }
}
