use dioxus::prelude::*;

/// Full-height page background with a centered content column.
#[component]
pub fn PageFrame(children: Element) -> Element {
    rsx! {
        div { class: "page-frame",
            div { class: "page-column",
                {children}
            }
        }
    }
}
