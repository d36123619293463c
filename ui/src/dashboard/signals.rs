use dioxus::prelude::*;

use crate::core::dom::{DomTarget, ZoneSelect};
use crate::core::platform;
use crate::table::TripRow;
use crate::theme::Theme;

/// Page regions backed by signals; the view renders straight from these.
///
/// Zone lists hold only the fetched names. The "any zone" placeholder is part
/// of the markup.
#[derive(Clone, Copy, PartialEq)]
pub struct DashboardSignals {
    pub theme: Signal<Theme>,
    pub toggle_label: Signal<String>,
    pub status: Signal<Option<String>>,
    pub table_visible: Signal<bool>,
    pub rows: Signal<Vec<TripRow>>,
    pub card_list: Signal<String>,
    pub from_zones: Signal<Vec<String>>,
    pub to_zones: Signal<Vec<String>>,
}

pub fn use_dashboard_signals() -> DashboardSignals {
    DashboardSignals {
        theme: use_signal(Theme::default),
        toggle_label: use_signal(String::new),
        status: use_signal(|| None),
        table_visible: use_signal(|| true),
        rows: use_signal(Vec::new),
        card_list: use_signal(String::new),
        from_zones: use_signal(Vec::new),
        to_zones: use_signal(Vec::new),
    }
}

impl DomTarget for DashboardSignals {
    fn set_theme_attribute(&mut self, theme: Theme) {
        platform::apply_document_theme(theme);
        self.theme.set(theme);
    }

    fn set_toggle_label(&mut self, label: &str) {
        self.toggle_label.set(label.to_string());
    }

    fn set_status(&mut self, message: Option<&str>) {
        self.status.set(message.map(str::to_string));
    }

    fn set_table_visible(&mut self, visible: bool) {
        self.table_visible.set(visible);
    }

    fn replace_rows(&mut self, rows: Vec<TripRow>) {
        self.rows.set(rows);
    }

    fn replace_card_list(&mut self, markup: String) {
        self.card_list.set(markup);
    }

    fn replace_zone_options(&mut self, select: ZoneSelect, zones: &[String]) {
        match select {
            ZoneSelect::From => self.from_zones.set(zones.to_vec()),
            ZoneSelect::To => self.to_zones.set(zones.to_vec()),
        }
    }

    fn has_rows(&self) -> bool {
        !self.rows.peek().is_empty()
    }
}
