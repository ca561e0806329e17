use dioxus::prelude::*;

#[derive(Clone, PartialEq)]
pub struct TravelPlanView {
    pub from: String,
    pub to: String,
    pub distance: String,
    pub profit: String,
}

#[component]
pub fn TravelPlan(plan: TravelPlanView, on_clear: EventHandler<()>) -> Element {
    rsx! {
        div { class: "travel-info",
            h3 { "Travel Plan" }
            p { "From: {plan.from}" }
            p { "To: {plan.to}" }
            p { class: "distance", "Distance: {plan.distance}" }
            p { class: "profit", "Profit: {plan.profit}" }
            button { onclick: move |_| on_clear.call(()), "Clear Selection" }
        }
    }
}
