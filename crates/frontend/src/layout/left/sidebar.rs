//! Sidebar with collapsible menu groups

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_labels::OVERVIEW_TAB;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::filter_state::ViewKind;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (id, label, icon)
}

fn view_icon(kind: ViewKind) -> &'static str {
    match kind {
        ViewKind::YardCheck => "yard",
        ViewKind::IdleAssets => "idle",
        ViewKind::MovingAssets => "moving",
        ViewKind::AccruedDistance => "distance",
    }
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "dashboards",
            label: "Dashboards",
            icon: "dashboard",
            items: vec![(OVERVIEW_TAB, tab_label_for_key(OVERVIEW_TAB), "dashboard")],
        },
        MenuGroup {
            id: "views",
            label: "Views",
            icon: "filter",
            items: ViewKind::ALL
                .iter()
                .map(|kind| (kind.name(), kind.title(), view_icon(*kind)))
                .collect(),
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let expanded_groups = RwSignal::new(vec!["dashboards".to_string(), "views".to_string()]);

    view! {
        <div class="app-sidebar__content">
            {get_menu_groups()
                .into_iter()
                .map(|group| {
                    let group_id = group.id.to_string();
                    let group_id_for_exp = group_id.clone();
                    let group_id_for_show = group_id.clone();
                    let items = group.items;

                    view! {
                        <div>
                            <div
                                class="app-sidebar__item"
                                style:padding-left="12px"
                                on:click=move |_| {
                                    let gid = group_id.clone();
                                    expanded_groups.update(move |ids| {
                                        if let Some(pos) = ids.iter().position(|x| x == &gid) {
                                            ids.remove(pos);
                                        } else {
                                            ids.push(gid);
                                        }
                                    });
                                }
                            >
                                <div class="app-sidebar__item-content">
                                    {icon(group.icon)}
                                    <span>{group.label}</span>
                                </div>
                                <div
                                    class="app-sidebar__chevron"
                                    class:app-sidebar__chevron--expanded=move || {
                                        expanded_groups.with(|ids| ids.contains(&group_id_for_exp))
                                    }
                                >
                                    {icon("chevron-right")}
                                </div>
                            </div>

                            <Show when=move || expanded_groups.with(|ids| ids.contains(&group_id_for_show))>
                                <div class="app-sidebar__children">
                                    {items
                                        .iter()
                                        .map(|(id, label, icon_name)| {
                                            let (id, label, icon_name) = (*id, *label, *icon_name);
                                            view! {
                                                <div
                                                    class="app-sidebar__item"
                                                    class:app-sidebar__item--active=move || {
                                                        ctx.active.with(|a| a.as_deref() == Some(id))
                                                    }
                                                    style:padding-left="10px"
                                                    on:click=move |_| ctx.open_tab(id, label)
                                                >
                                                    <div class="app-sidebar__item-content">
                                                        {icon(icon_name)}
                                                        <span>{label}</span>
                                                    </div>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </Show>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_view_has_a_menu_entry() {
        let groups = get_menu_groups();
        let ids: Vec<&str> = groups.iter().flat_map(|g| g.items.iter().map(|i| i.0)).collect();
        for kind in ViewKind::ALL {
            assert!(ids.contains(&kind.name()), "{} missing", kind.name());
        }
        assert!(ids.contains(&OVERVIEW_TAB));
    }
}
