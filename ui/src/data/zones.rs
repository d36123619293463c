//! Distinct zone names for the from/to selects.

use crate::core::config::ZONES_PATH;
use crate::core::dom::{DomTarget, ZoneSelect};

use super::{DataFetcher, FetchError, Transport};

pub struct ZoneDirectory;

impl ZoneDirectory {
    /// Fetch the zone list. A response that is valid JSON but not an array
    /// yields an empty list rather than an error.
    pub async fn load<T: Transport>(fetcher: &DataFetcher<T>) -> Result<Vec<String>, FetchError> {
        Ok(Self::fetch_list(fetcher).await?.unwrap_or_default())
    }

    async fn fetch_list<T: Transport>(
        fetcher: &DataFetcher<T>,
    ) -> Result<Option<Vec<String>>, FetchError> {
        let url = fetcher.config().endpoint(ZONES_PATH);
        let value: serde_json::Value = fetcher.get_json(url).await?;

        match value {
            serde_json::Value::Array(items) => Ok(Some(
                items
                    .into_iter()
                    .filter_map(|item| match item {
                        serde_json::Value::String(zone) => Some(zone),
                        _ => None,
                    })
                    .collect(),
            )),
            other => {
                tracing::debug!(kind = json_kind(&other), "zones response is not an array");
                Ok(None)
            }
        }
    }

    pub fn populate(dom: &mut impl DomTarget, zones: &[String]) {
        dom.replace_zone_options(ZoneSelect::From, zones);
        dom.replace_zone_options(ZoneSelect::To, zones);
    }

    /// Load and populate; failures are logged and leave the selects as they were.
    pub async fn load_into<T: Transport>(fetcher: &DataFetcher<T>, dom: &mut impl DomTarget) {
        if let Some(zones) = Self::fetch_logged(fetcher).await {
            Self::populate(dom, &zones);
        }
    }

    /// The list to populate with, or `None` when the selects should be left
    /// alone (fetch failed or the response was not an array).
    pub async fn fetch_logged<T: Transport>(fetcher: &DataFetcher<T>) -> Option<Vec<String>> {
        match Self::fetch_list(fetcher).await {
            Ok(zones) => zones,
            Err(err) => {
                tracing::debug!(%err, "could not load zones");
                None
            }
        }
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::DashboardConfig;
    use crate::core::dom::MemoryDom;
    use futures::executor::block_on;

    struct Fixed(Result<&'static str, FetchError>);

    impl Transport for Fixed {
        async fn get(&self, url: &str) -> Result<String, FetchError> {
            assert_eq!(url, "/analytics/zones");
            self.0.clone().map(str::to_string)
        }
    }

    fn fetcher(response: Result<&'static str, FetchError>) -> DataFetcher<Fixed> {
        DataFetcher::new(Fixed(response), DashboardConfig::default())
    }

    #[test]
    fn zones_fill_both_selects() {
        let mut dom = MemoryDom::new();
        block_on(ZoneDirectory::load_into(
            &fetcher(Ok(r#"["Airports","Boro Zone","Yellow Zone"]"#)),
            &mut dom,
        ));

        assert_eq!(dom.from_zone_options.len(), 4);
        assert_eq!(dom.from_zone_options, dom.to_zone_options);
        assert_eq!(dom.to_zone_options[0], "");
        assert_eq!(dom.to_zone_options[3], "Yellow Zone");
    }

    #[test]
    fn non_array_response_is_ignored() {
        let zones = block_on(ZoneDirectory::load(&fetcher(Ok(r#"{"error":"db down"}"#)))).unwrap();
        assert!(zones.is_empty());
    }

    #[test]
    fn failure_leaves_existing_options() {
        let mut dom = MemoryDom::new();
        ZoneDirectory::populate(&mut dom, &["EWR".to_string()]);

        block_on(ZoneDirectory::load_into(
            &fetcher(Err(FetchError::Network {
                url: "/analytics/zones".into(),
                message: "offline".into(),
            })),
            &mut dom,
        ));

        assert_eq!(dom.from_zone_options, vec!["".to_string(), "EWR".to_string()]);
    }
}
