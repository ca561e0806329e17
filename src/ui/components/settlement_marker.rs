use dioxus::prelude::*;

use crate::domain::{MarkerRole, ScreenPoint};

#[derive(Clone, PartialEq)]
pub struct MarkerView {
    pub id: String,
    pub name: String,
    pub tooltip: String,
    pub position: ScreenPoint,
    pub role: MarkerRole,
}

#[component]
pub fn SettlementMarker(marker: MarkerView, on_select: EventHandler<String>) -> Element {
    let color = marker.role.color();
    let left = marker.position.x;
    let top = marker.position.y;
    let id = marker.id.clone();

    rsx! {
        div {
            class: "map-marker",
            style: "left: {left}px; top: {top}px; background-color: {color};",
            title: "{marker.tooltip}",
            onclick: move |_| on_select.call(id.clone()),
            "{marker.name}"
        }
    }
}
