pub mod d100_fleet_overview;
