//! Tab titles, keyed like the tabs themselves

use crate::shared::filter_state::ViewKind;

pub const OVERVIEW_TAB: &str = "d100_fleet_overview";

/// Human readable title for a tab key; unknown keys fall back to a generic
/// title
pub fn tab_label_for_key(key: &str) -> &'static str {
    if key == OVERVIEW_TAB {
        return "Fleet overview";
    }
    ViewKind::from_name(key)
        .map(|kind| kind.title())
        .unwrap_or("Unknown page")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_keys_use_view_titles() {
        for kind in ViewKind::ALL {
            assert_eq!(tab_label_for_key(kind.name()), kind.title());
        }
        assert_eq!(tab_label_for_key(OVERVIEW_TAB), "Fleet overview");
        assert_eq!(tab_label_for_key("a001_connection_1c"), "Unknown page");
    }
}
