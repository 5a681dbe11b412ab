pub mod async_multi_select;
pub mod date_range_picker;
pub mod error_banner;
pub mod filter_field;
pub mod filter_panel;
pub mod pagination_controls;
pub mod pinned_filter_bar;
pub mod sortable_header_cell;
