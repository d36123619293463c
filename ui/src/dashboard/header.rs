use dioxus::prelude::*;

use crate::i18n;
use crate::t;

/// Brand, theme toggle and locale switcher.
///
/// The language selector writes the optional `Signal<String>` language-code
/// context the platform crate provides, so views that read it re-render with
/// fresh `t!` lookups. `on_language` fires after a successful switch so text
/// held in signals can be rewritten too.
#[component]
pub fn AppHeader(
    toggle_label: String,
    on_toggle: EventHandler<()>,
    on_language: EventHandler<()>,
) -> Element {
    i18n::init();

    let mut current_lang = use_signal(i18n::current_language);
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();

    let on_change = move |evt: dioxus::events::FormEvent| {
        let val = evt.value();
        match i18n::set_language(&val) {
            Ok(()) => {
                current_lang.set(val.clone());
                if let Some(mut code) = lang_code_ctx {
                    code.set(val);
                }
                on_language.call(());
            }
            Err(err) => tracing::warn!(%err, lang = %val, "could not switch language"),
        }
    };

    rsx! {
        header { id: "header", class: "header",
            div { style: "display:none", "{_lang_marker}" }
            div { class: "header__inner",
                div { class: "header__brand",
                    span { class: "header__brand-mark", {t!("brand")} }
                    span { class: "header__brand-subtitle", {t!("tagline")} }
                }

                div { class: "header__actions",
                    button {
                        id: "theme-toggle",
                        class: "button button--ghost",
                        r#type: "button",
                        onclick: move |_| on_toggle.call(()),
                        "{toggle_label}"
                    }

                    if show_switcher {
                        div { class: "header__locale",
                            label {
                                class: "visually-hidden",
                                r#for: "locale-select",
                                {t!("header-language-label")}
                            }
                            select {
                                id: "locale-select",
                                value: "{current_lang()}",
                                oninput: on_change,
                                for code in langs().iter() {
                                    option { key: "{code}", value: "{code}", "{code}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
