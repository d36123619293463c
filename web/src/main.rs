use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use ui::core::config::DashboardConfig;
use ui::{i18n, Dashboard};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
}

/// Shared theme, inlined so the page is styled without a separate asset request.
const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("logger already initialised: {err}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    i18n::init();

    let lang = use_signal(i18n::current_language);
    use_context_provider(|| lang);
    use_context_provider(DashboardConfig::from_env);

    rsx! {
        document::Title { "Fareview" }
        document::Style { "{THEME_CSS}" }

        Router::<Route> {}
    }
}

#[component]
fn Home() -> Element {
    rsx! {
        Dashboard {}
    }
}
