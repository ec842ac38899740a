use crate::layout::global_context::use_ui;
use crate::layout::Section;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Sidebar(current: RwSignal<Section>) -> impl IntoView {
    let ui = use_ui();

    let class = move || {
        let mut class = String::from("sidebar");
        if ui.sidebar_open.get() {
            class.push_str(" sidebar--open");
        }
        if ui.sidebar_collapsed.get() {
            class.push_str(" sidebar--collapsed");
        }
        class
    };

    view! {
        <aside class=class>
            <nav class="sidebar__nav">
                {Section::all()
                    .into_iter()
                    .map(|section| {
                        view! {
                            <button
                                class=move || if current.get() == section { "sidebar__item sidebar__item--active" } else { "sidebar__item" }
                                on:click=move |_| {
                                    current.set(section);
                                    ui.set_sidebar_open(false);
                                }
                            >
                                {icon(section.icon())}
                                <span class="sidebar__label">{section.label()}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
        </aside>
        <Show when=move || ui.sidebar_open.get()>
            <div class="sidebar-backdrop" on:click=move |_| ui.set_sidebar_open(false)></div>
        </Show>
    }
}
