use dioxus::prelude::*;

use crate::domain::{parse_cargo_count, CargoManifest, CargoRarity};

#[derive(Clone, Copy, Debug, PartialEq)]
enum CargoEdit {
    Set(u32),
    Increment,
    Decrement,
}

/// One row per rarity: typed count plus -/+ steppers. Emits the whole
/// updated manifest on every change.
#[component]
pub fn CargoInput(manifest: CargoManifest, on_change: EventHandler<CargoManifest>) -> Element {
    rsx! {
        div { class: "cargo-input",
            for rarity in CargoRarity::ALL {
                CargoRow {
                    key: "{rarity.key()}",
                    rarity,
                    count: manifest.get(rarity),
                    on_edit: move |edit: CargoEdit| {
                        let mut next = manifest;
                        match edit {
                            CargoEdit::Set(count) => next.set(rarity, count),
                            CargoEdit::Increment => next.increment(rarity),
                            CargoEdit::Decrement => next.decrement(rarity),
                        }
                        on_change.call(next);
                    },
                }
            }
        }
    }
}

#[component]
fn CargoRow(rarity: CargoRarity, count: u32, on_edit: EventHandler<CargoEdit>) -> Element {
    let color = rarity.color();
    let label = rarity.label();

    rsx! {
        div {
            class: "cargo-row",
            style: "border-color: {color};",
            span { class: "cargo-row-label", style: "color: {color};", "{label}" }
            input {
                r#type: "number",
                min: "0",
                value: "{count}",
                oninput: move |evt| on_edit.call(CargoEdit::Set(parse_cargo_count(&evt.value()))),
            }
            div { class: "cargo-row-buttons",
                button { onclick: move |_| on_edit.call(CargoEdit::Decrement), "-" }
                button { onclick: move |_| on_edit.call(CargoEdit::Increment), "+" }
            }
        }
    }
}
