use dioxus::prelude::*;

#[component]
pub fn Card(#[props(default)] class: String, children: Element) -> Element {
    rsx! {
        div { class: "card card--enter {class}", {children} }
    }
}

#[component]
pub fn CardTitle(children: Element) -> Element {
    rsx! {
        div { class: "card-title", {children} }
    }
}

/// Placeholder card shown while the dashboard is loading.
#[component]
pub fn CardSkeleton(#[props(default)] class: String, #[props(default = 250)] height: u32) -> Element {
    rsx! {
        div { class: "card skeleton {class}",
            div { class: "card-title skeleton-text", style: "width: 40%" }
            div { class: "skeleton-block", style: "height: {height}px" }
        }
    }
}
