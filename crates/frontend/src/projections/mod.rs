pub mod p101_yard_check;
pub mod p102_idle_assets;
pub mod p103_moving_assets;
pub mod p104_accrued_distance;

use crate::shared::filter_state::ViewSchema;

/// One schema per view, in menu order
pub fn view_schemas() -> Vec<ViewSchema> {
    vec![
        p101_yard_check::ui::list::schema(),
        p102_idle_assets::ui::list::schema(),
        p103_moving_assets::ui::list::schema(),
        p104_accrued_distance::ui::list::schema(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::filter_state::ViewKind;

    #[test]
    fn test_every_view_has_a_schema() {
        let kinds: Vec<ViewKind> = view_schemas().iter().map(|s| s.kind).collect();
        assert_eq!(kinds, ViewKind::ALL.to_vec());
    }
}
