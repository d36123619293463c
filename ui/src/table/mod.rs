//! Trip table and compact card list.

mod cards;
mod rows;

pub use cards::render_card_list;
pub use rows::TripRow;

use crate::core::dom::DomTarget;
use crate::data::TripRecord;
use crate::t;

/// What the status region currently says.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Loading,
    Empty,
    Error,
}

impl Status {
    pub fn message(self) -> String {
        match self {
            Status::Loading => t!("status-loading"),
            Status::Empty => t!("status-empty"),
            Status::Error => t!("status-error"),
        }
    }
}

pub fn show_status(dom: &mut impl DomTarget, status: Option<Status>) {
    dom.set_status(status.map(Status::message).as_deref());
}

/// Previous rows stay visible while the next load is in flight.
pub fn show_loading(dom: &mut impl DomTarget) -> Status {
    show_status(dom, Some(Status::Loading));
    Status::Loading
}

/// Error banner. Rows from the previous successful load stay in place, so the
/// table is only hidden when it has nothing to show.
pub fn show_error(dom: &mut impl DomTarget) -> Status {
    show_status(dom, Some(Status::Error));
    let has_rows = dom.has_rows();
    dom.set_table_visible(has_rows);
    Status::Error
}

pub fn render_trips(dom: &mut impl DomTarget, trips: &[TripRecord]) -> Option<Status> {
    if trips.is_empty() {
        dom.replace_rows(Vec::new());
        dom.replace_card_list(String::new());
        show_status(dom, Some(Status::Empty));
        dom.set_table_visible(false);
        return Some(Status::Empty);
    }

    let rows: Vec<TripRow> = trips.iter().map(TripRow::from_record).collect();
    show_status(dom, None);
    dom.set_table_visible(true);
    dom.replace_card_list(render_card_list(&rows));
    dom.replace_rows(rows);
    None
}

/// Rebuild the card list markup in the current language. Table rows carry no
/// translated text and are left alone.
pub fn refresh_cards(dom: &mut impl DomTarget, trips: &[TripRecord]) {
    let rows: Vec<TripRow> = trips.iter().map(TripRow::from_record).collect();
    dom.replace_card_list(render_card_list(&rows));
}
