//! ==============================================================================
//! components/mod.rs - UI Components
//! ==============================================================================

mod page_card;
mod tabs;
mod vendor;
mod shipment;
mod temperature;
mod blockchain;

pub use tabs::TabNav;
pub use vendor::VendorDashboard;
pub use shipment::ShipmentDashboard;
pub use temperature::TemperatureAlerts;
pub use blockchain::BlockchainAnalytics;
