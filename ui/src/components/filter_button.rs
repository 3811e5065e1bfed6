use dioxus::prelude::*;

#[component]
pub fn FilterButton(onclick: EventHandler<MouseEvent>, children: Element) -> Element {
    rsx! {
        button {
            r#type: "button",
            class: "filter-button",
            onclick: move |evt| onclick.call(evt),
            {children}
        }
    }
}
