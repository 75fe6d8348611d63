use dioxus::prelude::*;

/// Named icon slot; glyphs are supplied by the stylesheet.
#[component]
pub fn Icon(#[props(into)] name: String, #[props(into)] class: Option<String>) -> Element {
    let class = class.map_or_else(|| "icon".to_string(), |extra| format!("icon {extra}"));
    rsx! {
        span { class, "data-icon": "{name}", aria_hidden: "true" }
    }
}
