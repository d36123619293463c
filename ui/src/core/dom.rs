//! The page regions the pipeline writes to.
//!
//! Renderers never touch the document directly; they go through `DomTarget`.
//! The dashboard view implements it with signals, tests use `MemoryDom`.

use crate::table::TripRow;
use crate::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneSelect {
    From,
    To,
}

pub trait DomTarget {
    fn set_theme_attribute(&mut self, theme: Theme);
    fn set_toggle_label(&mut self, label: &str);
    /// `None` hides the status region.
    fn set_status(&mut self, message: Option<&str>);
    fn set_table_visible(&mut self, visible: bool);
    fn replace_rows(&mut self, rows: Vec<TripRow>);
    fn replace_card_list(&mut self, markup: String);
    /// Replace every option after the placeholder.
    fn replace_zone_options(&mut self, select: ZoneSelect, zones: &[String]);
    fn has_rows(&self) -> bool;
}

/// Placeholder kept at the head of both zone selects.
pub const ANY_ZONE: &str = "";

/// In-memory page used by tests and non-browser previews.
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryDom {
    pub theme_attribute: Option<Theme>,
    pub toggle_label: String,
    pub status: Option<String>,
    pub table_visible: bool,
    pub rows: Vec<TripRow>,
    pub card_list: String,
    /// Option values, placeholder first.
    pub from_zone_options: Vec<String>,
    pub to_zone_options: Vec<String>,
}

impl Default for MemoryDom {
    fn default() -> Self {
        Self {
            theme_attribute: None,
            toggle_label: String::new(),
            status: None,
            table_visible: true,
            rows: Vec::new(),
            card_list: String::new(),
            from_zone_options: vec![ANY_ZONE.to_string()],
            to_zone_options: vec![ANY_ZONE.to_string()],
        }
    }
}

impl MemoryDom {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DomTarget for MemoryDom {
    fn set_theme_attribute(&mut self, theme: Theme) {
        self.theme_attribute = Some(theme);
    }

    fn set_toggle_label(&mut self, label: &str) {
        self.toggle_label = label.to_string();
    }

    fn set_status(&mut self, message: Option<&str>) {
        self.status = message.map(str::to_string);
    }

    fn set_table_visible(&mut self, visible: bool) {
        self.table_visible = visible;
    }

    fn replace_rows(&mut self, rows: Vec<TripRow>) {
        self.rows = rows;
    }

    fn replace_card_list(&mut self, markup: String) {
        self.card_list = markup;
    }

    fn replace_zone_options(&mut self, select: ZoneSelect, zones: &[String]) {
        let options = match select {
            ZoneSelect::From => &mut self.from_zone_options,
            ZoneSelect::To => &mut self.to_zone_options,
        };
        options.truncate(1);
        options.extend(zones.iter().cloned());
    }

    fn has_rows(&self) -> bool {
        !self.rows.is_empty()
    }
}
