//! Per-view filter schema: which fields exist, their shape and defaults,
//! and the paging policy of the view.

use contracts::shared::filters::{FieldPath, FilterCategory, FilterSet, FilterValue, SortSpec, TaggedId};

use crate::shared::option_resolver::source::OptionSource;

/// Views that own a filter store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKind {
    YardCheck,
    IdleAssets,
    MovingAssets,
    AccruedDistance,
}

impl ViewKind {
    pub const ALL: [ViewKind; 4] = [
        ViewKind::YardCheck,
        ViewKind::IdleAssets,
        ViewKind::MovingAssets,
        ViewKind::AccruedDistance,
    ];

    /// Stable name used in storage keys and API paths
    pub fn name(&self) -> &'static str {
        match self {
            ViewKind::YardCheck => "yard-check",
            ViewKind::IdleAssets => "idle-assets",
            ViewKind::MovingAssets => "moving-assets",
            ViewKind::AccruedDistance => "accrued-distance",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ViewKind::YardCheck => "Yard Check",
            ViewKind::IdleAssets => "Idle Assets",
            ViewKind::MovingAssets => "Moving Assets",
            ViewKind::AccruedDistance => "Accrued Distance",
        }
    }

    pub fn from_name(name: &str) -> Option<ViewKind> {
        ViewKind::ALL.into_iter().find(|v| v.name() == name)
    }

    pub fn list_path(&self) -> String {
        format!("/api/{}/list", self.name())
    }
}

/// Shape of a filter leaf and how it is edited
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    /// Multiple tagged ids, stored as `FilterValue::Ids`
    MultiSelect {
        source: OptionSource,
        max_selected: Option<usize>,
        permanent_ids: Vec<String>,
    },
    /// One code out of a fixed list, stored as `FilterValue::Text`
    Select { options: Vec<TaggedId> },
    Text,
    Number,
    Toggle,
    DateRange,
}

impl FieldKind {
    pub fn multi_select(source: OptionSource) -> Self {
        FieldKind::MultiSelect {
            source,
            max_selected: None,
            permanent_ids: Vec::new(),
        }
    }

    /// `Null` is accepted by every kind and means "not filtering"
    pub fn accepts(&self, value: &FilterValue) -> bool {
        match (self, value) {
            (_, FilterValue::Null) => true,
            (FieldKind::MultiSelect { .. }, FilterValue::Ids(_)) => true,
            (FieldKind::Select { .. }, FilterValue::Text(_)) => true,
            (FieldKind::Text, FilterValue::Text(_)) => true,
            (FieldKind::Number, FilterValue::Number(_)) => true,
            (FieldKind::Toggle, FilterValue::Bool(_)) => true,
            (FieldKind::DateRange, FilterValue::DateRange(_)) => true,
            _ => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldSchema {
    pub category: FilterCategory,
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub default: FilterValue,
}

impl FieldSchema {
    pub fn new(category: FilterCategory, name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            category,
            name,
            label,
            kind,
            default: FilterValue::Null,
        }
    }

    pub fn with_default(mut self, value: FilterValue) -> Self {
        self.default = value;
        self
    }

    pub fn path(&self) -> FieldPath {
        FieldPath::new(self.category, self.name)
    }
}

/// Configuration of one view's store
#[derive(Debug, Clone, PartialEq)]
pub struct ViewSchema {
    pub kind: ViewKind,
    /// Bumped whenever the persisted shape changes; older documents are discarded
    pub version: u32,
    pub fields: Vec<FieldSchema>,
    pub reset_page_on_filter_change: bool,
    pub default_page_size: usize,
    pub default_sort: Option<SortSpec>,
    pub default_pinned: Vec<FieldPath>,
    pub filter_bar_visible: bool,
}

impl ViewSchema {
    pub fn new(kind: ViewKind) -> Self {
        Self {
            kind,
            version: 1,
            fields: Vec::new(),
            reset_page_on_filter_change: true,
            default_page_size: 50,
            default_sort: None,
            default_pinned: Vec::new(),
            filter_bar_visible: true,
        }
    }

    pub fn version(mut self, version: u32) -> Self {
        self.version = version;
        self
    }

    pub fn field(mut self, field: FieldSchema) -> Self {
        self.fields.push(field);
        self
    }

    pub fn reset_page_on_filter_change(mut self, reset: bool) -> Self {
        self.reset_page_on_filter_change = reset;
        self
    }

    pub fn page_size(mut self, size: usize) -> Self {
        self.default_page_size = size;
        self
    }

    pub fn sort(mut self, sort: SortSpec) -> Self {
        self.default_sort = Some(sort);
        self
    }

    pub fn pinned(mut self, category: FilterCategory, field: &str) -> Self {
        self.default_pinned.push(FieldPath::new(category, field));
        self
    }

    pub fn find(&self, category: FilterCategory, field: &str) -> Option<&FieldSchema> {
        self.fields
            .iter()
            .find(|f| f.category == category && f.name == field)
    }

    pub fn fields_in(&self, category: FilterCategory) -> impl Iterator<Item = &FieldSchema> + '_ {
        self.fields.iter().filter(move |f| f.category == category)
    }

    /// Categories that have at least one field, in canonical order
    pub fn categories(&self) -> Vec<FilterCategory> {
        FilterCategory::ALL
            .into_iter()
            .filter(|c| self.fields.iter().any(|f| f.category == *c))
            .collect()
    }

    pub fn default_filters(&self) -> FilterSet {
        let mut set = FilterSet::new();
        for f in &self.fields {
            set.set(f.category, f.name, f.default.clone());
        }
        set
    }

    pub fn empty_filters(&self) -> FilterSet {
        let mut set = FilterSet::new();
        for f in &self.fields {
            set.set(f.category, f.name, FilterValue::Null);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_names() {
        for kind in ViewKind::ALL {
            assert_eq!(ViewKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(ViewKind::IdleAssets.list_path(), "/api/idle-assets/list");
    }

    #[test]
    fn test_kind_accepts() {
        assert!(FieldKind::Number.accepts(&FilterValue::Number(3.0)));
        assert!(FieldKind::Number.accepts(&FilterValue::Null));
        assert!(!FieldKind::Number.accepts(&FilterValue::Text("3".into())));
        assert!(!FieldKind::Toggle.accepts(&FilterValue::Ids(vec![])));
    }

    #[test]
    fn test_default_filters_cover_every_field() {
        let schema = ViewSchema::new(ViewKind::IdleAssets)
            .field(FieldSchema::new(FilterCategory::Operational, "min_idle_days", "Min idle days", FieldKind::Number)
                .with_default(FilterValue::Number(2.0)))
            .field(FieldSchema::new(FilterCategory::Sensor, "door_open", "Door open", FieldKind::Toggle));
        let defaults = schema.default_filters();
        assert_eq!(
            defaults.get(FilterCategory::Operational, "min_idle_days"),
            Some(&FilterValue::Number(2.0))
        );
        assert_eq!(defaults.get(FilterCategory::Sensor, "door_open"), Some(&FilterValue::Null));
        assert_eq!(schema.categories(), vec![FilterCategory::Sensor, FilterCategory::Operational]);
    }
}
