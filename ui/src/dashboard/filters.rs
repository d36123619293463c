use dioxus::prelude::*;

use crate::data::FilterState;
use crate::t;

#[component]
pub fn FilterForm(
    from_zones: Signal<Vec<String>>,
    to_zones: Signal<Vec<String>>,
    on_apply: EventHandler<FilterState>,
) -> Element {
    let mut vendor = use_signal(String::new);
    let mut min_price = use_signal(String::new);
    let mut max_price = use_signal(String::new);
    let mut from_zone = use_signal(String::new);
    let mut to_zone = use_signal(String::new);

    let apply = move |_: MouseEvent| {
        let filters = FilterState::from_controls(
            &vendor.read(),
            &min_price.read(),
            &max_price.read(),
            &from_zone.read(),
            &to_zone.read(),
        );
        on_apply.call(filters);
    };

    let any_zone = t!("filter-any-zone");

    rsx! {
        section { class: "filters", aria_label: t!("filter-heading"),
            div { class: "filters__field",
                label { r#for: "vendor", {t!("filter-vendor")} }
                select {
                    id: "vendor",
                    value: "{vendor}",
                    oninput: move |evt| vendor.set(evt.value()),
                    option { value: "", {t!("filter-all-vendors")} }
                    option { value: "1", {t!("chart-vendor", id = 1)} }
                    option { value: "2", {t!("chart-vendor", id = 2)} }
                }
            }
            div { class: "filters__field",
                label { r#for: "min_price", {t!("filter-min-price")} }
                input {
                    id: "min_price",
                    r#type: "number",
                    step: "0.01",
                    placeholder: "0",
                    value: "{min_price}",
                    oninput: move |evt| min_price.set(evt.value()),
                }
            }
            div { class: "filters__field",
                label { r#for: "max_price", {t!("filter-max-price")} }
                input {
                    id: "max_price",
                    r#type: "number",
                    step: "0.01",
                    placeholder: "100",
                    value: "{max_price}",
                    oninput: move |evt| max_price.set(evt.value()),
                }
            }
            div { class: "filters__field",
                label { r#for: "from_zone", {t!("filter-from-zone")} }
                select {
                    id: "from_zone",
                    value: "{from_zone}",
                    oninput: move |evt| from_zone.set(evt.value()),
                    option { value: "", "{any_zone}" }
                    for zone in from_zones.read().iter() {
                        option { key: "{zone}", value: "{zone}", "{zone}" }
                    }
                }
            }
            div { class: "filters__field",
                label { r#for: "to_zone", {t!("filter-to-zone")} }
                select {
                    id: "to_zone",
                    value: "{to_zone}",
                    oninput: move |evt| to_zone.set(evt.value()),
                    option { value: "", "{any_zone}" }
                    for zone in to_zones.read().iter() {
                        option { key: "{zone}", value: "{zone}", "{zone}" }
                    }
                }
            }
            button {
                id: "applyFilters",
                class: "button button--primary",
                r#type: "button",
                onclick: apply,
                {t!("filter-apply")}
            }
        }
    }
}
