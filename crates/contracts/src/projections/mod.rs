pub mod p101_yard_check;
pub mod p102_idle_assets;
pub mod p103_moving_assets;
pub mod p104_accrued_distance;
