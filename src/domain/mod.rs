//! Route math and selection state. Nothing in here touches storage or UI.

pub mod app_state;
pub mod cargo;
pub mod distance;
pub mod entities;
pub mod geometry;
pub mod map_transform;
pub mod profit;
pub mod registry;
pub mod trade_route;

#[allow(unused_imports)]
pub use app_state::{AppState, MarkerRole, PersistedState, RouteSelection};
#[allow(unused_imports)]
pub use cargo::{parse_cargo_count, CargoManifest, CargoRarity};
#[allow(unused_imports)]
pub use distance::{distance_km, format_distance, raw_distance};
#[allow(unused_imports)]
pub use entities::{CargoPrice, Settlement, SettlementId, TradeManifest};
#[allow(unused_imports)]
pub use geometry::{MapSize, ScreenPoint, WorldPoint};
#[allow(unused_imports)]
pub use map_transform::{fit_map_to_viewport, transform_coordinates, MapTransform};
#[allow(unused_imports)]
pub use profit::{estimate_profit, format_profit};
#[allow(unused_imports)]
pub use registry::Registry;
#[allow(unused_imports)]
pub use trade_route::RouteEstimate;
