use dioxus::prelude::*;

use crate::core::format;

#[derive(Debug, Clone, PartialEq)]
pub struct TooltipEntry {
    pub name: String,
    pub value: i64,
    pub color: &'static str,
}

impl TooltipEntry {
    pub fn text(&self) -> String {
        format!("{}: {}", self.name, format::format_number(self.value))
    }
}

/// Floating value box shown while a chart element is hovered.
#[component]
pub fn ChartTooltip(label: Option<String>, entries: Vec<TooltipEntry>) -> Element {
    if entries.is_empty() {
        return rsx! {};
    }

    rsx! {
        div { class: "chart-tooltip", role: "tooltip",
            if let Some(label) = label {
                p { class: "chart-tooltip__label", "{label}" }
            }
            for entry in entries {
                p {
                    key: "{entry.name}",
                    class: "chart-tooltip__entry",
                    style: "color: {entry.color}",
                    {entry.text()}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_text_groups_thousands() {
        let entry = TooltipEntry {
            name: "Sales".into(),
            value: 4_000,
            color: "#8884d8",
        };
        assert_eq!(entry.text(), "Sales: 4,000");
    }
}
