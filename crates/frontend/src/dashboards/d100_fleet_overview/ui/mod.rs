mod dashboard;

pub use dashboard::FleetOverviewDashboard;
