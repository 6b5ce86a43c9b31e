mod highlight;
mod places;
mod shares;
mod shipping;

pub use highlight::bold_matches;
pub use places::{rank_restaurants, PlacesService};
pub use shares::{output_file_name, ShareService};
pub use shipping::{billable_weight_kg, haversine_km, price_shipment, resolve_city, ShippingService};
