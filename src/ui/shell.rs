use dioxus::prelude::*;

use crate::util::version::{version_label, APP_NAME};

#[component]
pub fn Shell(children: Element) -> Element {
    let version = version_label();

    rsx! {
        div { class: "shell",
            header { class: "shell-header",
                h1 { class: "shell-title", "{APP_NAME}" }
                span { class: "shell-version", "{version}" }
            }
            main { class: "shell-main",
                {children}
            }
        }
    }
}
