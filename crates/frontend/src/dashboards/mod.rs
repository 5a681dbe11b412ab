pub mod d100_fleet_overview;

pub use d100_fleet_overview::ui::FleetOverviewDashboard;
