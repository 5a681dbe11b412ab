use crate::shared::icons::icon;
use leptos::prelude::*;

/// `(current page + 1) / total pages (total rows)`, page is 0-indexed
pub fn page_summary(page: usize, total_pages: usize, total_count: usize) -> String {
    format!("{} / {} ({})", page + 1, total_pages.max(1), total_count)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageNav {
    First,
    Previous,
    Next,
    Last,
}

impl PageNav {
    const ALL: [PageNav; 4] = [PageNav::First, PageNav::Previous, PageNav::Next, PageNav::Last];

    fn icon(&self) -> &'static str {
        match self {
            PageNav::First => "chevrons-left",
            PageNav::Previous => "chevron-left",
            PageNav::Next => "chevron-right",
            PageNav::Last => "chevrons-right",
        }
    }

    fn title(&self) -> &'static str {
        match self {
            PageNav::First => "First page",
            PageNav::Previous => "Previous page",
            PageNav::Next => "Next page",
            PageNav::Last => "Last page",
        }
    }

    /// Page this button leads to, `None` when it would not move
    pub fn target(&self, page: usize, total_pages: usize) -> Option<usize> {
        let last = total_pages.saturating_sub(1);
        let target = match self {
            PageNav::First => 0,
            PageNav::Previous => page.checked_sub(1)?,
            PageNav::Next => (page + 1).min(last),
            PageNav::Last => last,
        };
        (target != page).then_some(target)
    }
}

/// Page size picked in the select; zero and non-numbers are rejected
pub fn parse_page_size(raw: &str) -> Option<usize> {
    raw.trim().parse::<usize>().ok().filter(|size| *size > 0)
}

/// First/prev/next/last buttons, page summary and page size select
#[component]
pub fn PaginationControls(
    /// Current page (0-indexed)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Total count of rows across all pages
    #[prop(into)]
    total_count: Signal<usize>,

    /// Current page size
    #[prop(into)]
    page_size: Signal<usize>,

    /// Called with the 0-indexed page to show
    on_page_change: Callback<usize>,

    /// Called with the newly selected page size
    on_page_size_change: Callback<usize>,

    /// Sizes offered in the select, from `filters.page_size_options`
    page_size_options: Vec<usize>,
) -> impl IntoView {
    let target = move |nav: PageNav| nav.target(current_page.get(), total_pages.get());

    let button = move |nav: PageNav| {
        view! {
            <button
                class="pagination-btn"
                title=nav.title()
                disabled=move || target(nav).is_none()
                on:click=move |_| {
                    if let Some(page) = target(nav) {
                        on_page_change.run(page);
                    }
                }
            >
                {icon(nav.icon())}
            </button>
        }
    };

    let [first, previous, next, last] = PageNav::ALL.map(button);

    view! {
        <div class="pagination-controls">
            {first}
            {previous}
            <span class="pagination-info">
                {move || page_summary(current_page.get(), total_pages.get(), total_count.get())}
            </span>
            {next}
            {last}
            <select
                class="page-size-select"
                prop:value=move || page_size.get().to_string()
                on:change=move |ev| {
                    let raw = event_target_value(&ev);
                    match parse_page_size(&raw) {
                        Some(size) => on_page_size_change.run(size),
                        None => log::warn!("Ignoring page size {:?}", raw),
                    }
                }
            >
                {page_size_options
                    .into_iter()
                    .map(|size| {
                        view! {
                            <option value=size.to_string() selected=move || page_size.get() == size>
                                {size}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_summary_never_shows_zero_pages() {
        assert_eq!(page_summary(0, 0, 0), "1 / 1 (0)");
        assert_eq!(page_summary(2, 5, 230), "3 / 5 (230)");
    }

    #[test]
    fn test_parse_page_size() {
        assert_eq!(parse_page_size("100"), Some(100));
        assert_eq!(parse_page_size(" 25 "), Some(25));
        assert_eq!(parse_page_size("0"), None);
        assert_eq!(parse_page_size("all"), None);
    }

    #[test]
    fn test_nav_targets() {
        assert_eq!(PageNav::First.target(3, 5), Some(0));
        assert_eq!(PageNav::Previous.target(3, 5), Some(2));
        assert_eq!(PageNav::Next.target(3, 5), Some(4));
        assert_eq!(PageNav::Last.target(3, 5), Some(4));

        assert_eq!(PageNav::First.target(0, 5), None);
        assert_eq!(PageNav::Previous.target(0, 5), None);
        assert_eq!(PageNav::Next.target(4, 5), None);
        assert_eq!(PageNav::Last.target(0, 0), None);
        assert_eq!(PageNav::Next.target(0, 1), None);
    }
}
