//! Per-view filter state: values, recent selections, pins and paging.
//!
//! One generic [`store::FilterStore`] is configured by a
//! [`schema::ViewSchema`]; [`handle::ViewStore`] puts it into a signal for
//! components, [`handle::ViewStores`] holds one per view for the app.

pub mod equality;
pub mod handle;
pub mod persistence;
pub mod schema;
pub mod store;

pub use handle::{use_view_store, ViewStore, ViewStores};
pub use schema::{FieldKind, FieldSchema, ViewKind, ViewSchema};
pub use store::{FilterStore, Pagination};
