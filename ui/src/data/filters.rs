//! Filter controls to query string.

/// Active query constraints, read from the filter controls at apply time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub vendor: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub from_zone: Option<String>,
    pub to_zone: Option<String>,
}

impl FilterState {
    /// Build from raw control values; empty strings mean "unset".
    ///
    /// Values pass through unvalidated, the server decides what a bad price is.
    pub fn from_controls(
        vendor: &str,
        min_price: &str,
        max_price: &str,
        from_zone: &str,
        to_zone: &str,
    ) -> Self {
        Self {
            vendor: non_empty(vendor),
            min_price: non_empty(min_price),
            max_price: non_empty(max_price),
            from_zone: non_empty(from_zone),
            to_zone: non_empty(to_zone),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pairs().next().is_none()
    }

    /// Set parameters in fixed key order.
    pub fn pairs(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("vendor", &self.vendor),
            ("min_price", &self.min_price),
            ("max_price", &self.max_price),
            ("from_zone", &self.from_zone),
            ("to_zone", &self.to_zone),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.as_deref().map(|v| (key, v)))
    }

    /// Form-encoded query string without the leading `?`. Empty when nothing is set.
    pub fn to_query(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in self.pairs() {
            serializer.append_pair(key, value);
        }
        serializer.finish()
    }
}

fn non_empty(raw: &str) -> Option<String> {
    (!raw.is_empty()).then(|| raw.to_string())
}
