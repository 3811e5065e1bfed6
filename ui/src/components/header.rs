use dioxus::prelude::*;

#[component]
pub fn DashboardHeader(
    title: String,
    subtitle: Option<String>,
    #[props(default)] loading: bool,
) -> Element {
    let subtitle = subtitle.filter(|_| !loading);

    rsx! {
        div { class: "header header--enter",
            h1 { "{title}" }
            if loading {
                p { class: "skeleton-text header__placeholder" }
            }
            if let Some(subtitle) = subtitle {
                p { "{subtitle}" }
            }
        }
    }
}
