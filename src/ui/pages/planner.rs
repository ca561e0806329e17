use dioxus::prelude::*;
use tracing::debug;

use crate::{
    app::{persist_user_state, StoreSignal},
    domain::{
        fit_map_to_viewport, profit::CURRENCY_GLYPH, AppState, CargoManifest, MapTransform,
        Settlement,
    },
    ui::components::{
        cargo_input::CargoInput,
        settlement_marker::{MarkerView, SettlementMarker},
        toast::ToastMessage,
        travel_plan::{TravelPlan, TravelPlanView},
    },
    util::assets,
};

#[component]
pub fn PlannerPage() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let store = use_context::<StoreSignal>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let markers = state.with(build_markers);
    let plan = state.with(build_travel_plan);
    let manifest = state.with(|st| st.cargo);
    let map_size = state.with(|st| st.map_size);
    let panel_open = state.with(|st| st.cargo_panel_open);

    let panel_class = if panel_open { "cargo-panel" } else { "cargo-panel closed" };
    let toggle_label = if panel_open { "←" } else { "→" };
    let frame_style = format!("width: {}px; height: {}px;", map_size.width, map_size.height);

    let on_select = move |id: String| {
        state.with_mut(|st| st.choose_settlement(&id));
        persist_user_state(&state, store, toasts);
    };

    let on_cargo_change = move |next: CargoManifest| {
        state.with_mut(|st| st.cargo = next);
        persist_user_state(&state, store, toasts);
    };

    let on_clear = move |_| {
        state.with_mut(|st| st.selection.clear());
        persist_user_state(&state, store, toasts);
    };

    rsx! {
        div { class: "planner",
            div { class: "{panel_class}",
                h3 { "Cargo Load" }
                CargoInput { manifest, on_change: on_cargo_change }
            }
            button {
                class: "panel-toggle",
                onclick: move |_| state.with_mut(|st| st.cargo_panel_open = !st.cargo_panel_open),
                "{toggle_label}"
            }
            div {
                class: "map-area",
                onresize: move |evt| {
                    let Ok(area) = evt.data().get_content_box_size() else {
                        return;
                    };
                    let fitted = fit_map_to_viewport(area.width, area.height);
                    if fitted.width > 0.0 && fitted.height > 0.0 && fitted != state.peek().map_size {
                        debug!(width = fitted.width, height = fitted.height, "map resized");
                        state.with_mut(|st| st.map_size = fitted);
                    }
                },
                div { class: "map-frame", style: "{frame_style}",
                    img { src: assets::map_data_uri(), alt: "Map" }
                    for marker in markers {
                        SettlementMarker { key: "{marker.id}", marker, on_select }
                    }
                }
                if let Some(plan) = plan {
                    TravelPlan { plan, on_clear }
                }
            }
        }
    }
}

/// Marker positions for the current map size.
fn build_markers(state: &AppState) -> Vec<MarkerView> {
    let transform = MapTransform::new(state.map_size);
    state
        .registry
        .iter()
        .map(|settlement| MarkerView {
            id: settlement.id.clone(),
            name: settlement.name.clone(),
            tooltip: marker_tooltip(settlement),
            position: transform.to_screen(&settlement.display_point()),
            role: state.selection.role_of(&settlement.id),
        })
        .collect()
}

/// Name, description and the local buy/sell quote per rarity.
fn marker_tooltip(settlement: &Settlement) -> String {
    let mut lines = vec![settlement.name.clone()];
    lines.extend(settlement.description.clone());
    lines.extend(settlement.trade.iter().map(|(rarity, price)| {
        format!("{}: buy {:.0}{CURRENCY_GLYPH} / sell {:.0}{CURRENCY_GLYPH}", rarity.label(), price.buy, price.sell)
    }));
    lines.join("\n")
}

fn build_travel_plan(state: &AppState) -> Option<TravelPlanView> {
    let estimate = state.route_estimate()?;
    let source = state.selection.source()?;
    let destination = state.selection.destination()?;
    Some(TravelPlanView {
        from: source.name.clone(),
        to: destination.name.clone(),
        distance: estimate.distance_label(),
        profit: estimate.profit_label(),
    })
}
