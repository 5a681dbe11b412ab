use chrono::{Datelike, Duration, NaiveDate, Utc};
use contracts::shared::filters::DateRange;
use leptos::prelude::*;
use thaw::*;

const DATE_FORMAT: &str = "%Y-%m-%d";

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok()
}

fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(DATE_FORMAT).to_string()).unwrap_or_default()
}

/// First and last day of the month containing `date`
pub fn month_bounds(date: NaiveDate) -> DateRange {
    let start = date.with_day(1);
    let next_month = if date.month() == 12 {
        NaiveDate::from_ymd_opt(date.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(date.year(), date.month() + 1, 1)
    };
    DateRange {
        from: start,
        to: next_month.map(|d| d - Duration::days(1)),
    }
}

/// `days` days back from `today`, inclusive
pub fn trailing_days(today: NaiveDate, days: i64) -> DateRange {
    DateRange {
        from: Some(today - Duration::days(days - 1)),
        to: Some(today),
    }
}

/// Two native date inputs plus quick presets, edits a [`DateRange`] leaf
#[component]
pub fn DateRangePicker(
    #[prop(into)] value: Signal<DateRange>,
    on_change: Callback<DateRange>,
) -> impl IntoView {
    let on_from_change = move |raw: String| {
        let mut range = value.get_untracked();
        range.from = parse_date(&raw);
        on_change.run(range);
    };
    let on_to_change = move |raw: String| {
        let mut range = value.get_untracked();
        range.to = parse_date(&raw);
        on_change.run(range);
    };

    view! {
        <div class="date-range-picker">
            <input
                type="date"
                class="date-range-picker__input"
                prop:value=move || format_date(value.get().from)
                on:change=move |ev| on_from_change(event_target_value(&ev))
            />
            <span class="date-range-picker__separator">"–"</span>
            <input
                type="date"
                class="date-range-picker__input"
                prop:value=move || format_date(value.get().to)
                on:change=move |ev| on_to_change(event_target_value(&ev))
            />
            <div class="date-range-picker__presets">
                <Button
                    size=ButtonSize::Small
                    on_click=move |_| on_change.run(trailing_days(Utc::now().date_naive(), 7))
                >
                    "7d"
                </Button>
                <Button
                    size=ButtonSize::Small
                    on_click=move |_| on_change.run(month_bounds(Utc::now().date_naive()))
                >
                    "Month"
                </Button>
                <Button
                    size=ButtonSize::Small
                    on_click=move |_| on_change.run(DateRange::default())
                >
                    "Any"
                </Button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_month_bounds_december() {
        let range = month_bounds(d(2024, 12, 17));
        assert_eq!(range.from, Some(d(2024, 12, 1)));
        assert_eq!(range.to, Some(d(2024, 12, 31)));
    }

    #[test]
    fn test_month_bounds_leap_february() {
        let range = month_bounds(d(2024, 2, 10));
        assert_eq!(range.to, Some(d(2024, 2, 29)));
    }

    #[test]
    fn test_trailing_days_inclusive() {
        let range = trailing_days(d(2024, 3, 7), 7);
        assert_eq!(range.from, Some(d(2024, 3, 1)));
        assert_eq!(range.to, Some(d(2024, 3, 7)));
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        assert_eq!(parse_date("2024-03-07"), Some(d(2024, 3, 7)));
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("07.03.2024"), None);
    }
}
