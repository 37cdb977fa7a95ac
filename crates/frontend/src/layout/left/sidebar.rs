//! Sidebar: the entity pages grouped by area, each opening its list tab.

use contracts::system::permissions::Module;
use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::registry::list_key;
use crate::shared::icons::icon;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    modules: &'static [Module],
}

const MENU_GROUPS: &[MenuGroup] = &[
    MenuGroup {
        id: "structure",
        label: "Structure",
        modules: &[Module::Organizations, Module::Centers],
    },
    MenuGroup {
        id: "academics",
        label: "Academics",
        modules: &[
            Module::Courses,
            Module::Cohorts,
            Module::Students,
            Module::Enrollments,
        ],
    },
    MenuGroup {
        id: "admissions",
        label: "Admissions",
        modules: &[Module::Enquiries, Module::Feedback],
    },
    MenuGroup {
        id: "system",
        label: "System",
        modules: &[Module::AuditLogs],
    },
];

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    // Все группы раскрыты по умолчанию
    let collapsed = RwSignal::new(Vec::<&'static str>::new());

    view! {
        <div class="app-sidebar__content">
            {MENU_GROUPS
                .iter()
                .map(|group| {
                    let group_id = group.id;
                    let is_expanded = move || collapsed.with(|c| !c.contains(&group_id));
                    view! {
                        <div>
                            <div
                                class="app-sidebar__item app-sidebar__item--group"
                                style:padding-left="12px"
                                on:click=move |_| {
                                    collapsed.update(|items| {
                                        if let Some(pos) = items.iter().position(|x| *x == group_id) {
                                            items.remove(pos);
                                        } else {
                                            items.push(group_id);
                                        }
                                    });
                                }
                            >
                                <div class="app-sidebar__item-content">
                                    <span>{group.label}</span>
                                </div>
                                <div
                                    class="app-sidebar__chevron"
                                    class:app-sidebar__chevron--expanded=is_expanded
                                >
                                    {icon("chevron-right")}
                                </div>
                            </div>
                            <Show when=is_expanded>
                                <div class="app-sidebar__children">
                                    {group
                                        .modules
                                        .iter()
                                        .map(|module| {
                                            let module = *module;
                                            let key = StoredValue::new(list_key(module));
                                            view! {
                                                <div
                                                    class="app-sidebar__item"
                                                    class:app-sidebar__item--active=move || {
                                                        ctx.active.with(|active| {
                                                            key.with_value(|k| active.as_deref() == Some(k.as_str()))
                                                        })
                                                    }
                                                    style:padding-left="10px"
                                                    on:click=move |_| {
                                                        key.with_value(|k| ctx.open_tab(k, module.label()))
                                                    }
                                                >
                                                    <div class="app-sidebar__item-content">
                                                        {icon(module.as_str())}
                                                        <span>{module.label()}</span>
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
