use crate::domain::inventory::use_inventory;
use crate::shared::format::{format_qty, format_rupiah};
use contracts::dashboards::d400_inventory::dto::{ActivityDirection, DashboardStats};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance, Card};

#[component]
fn StatCard(label: &'static str, #[prop(into)] value: Signal<String>) -> impl IntoView {
    view! {
        <Card>
            <div class="stat-card">
                <span class="stat-card__label">{label}</span>
                <span class="stat-card__value">{move || value.get()}</span>
            </div>
        </Card>
    }
}

#[component]
pub fn InventoryDashboard() -> impl IntoView {
    let inventory = use_inventory();

    let reload = {
        let inventory = inventory.clone();
        move || {
            let inventory = inventory.clone();
            spawn_local(async move { inventory.fetch_all_dashboard_data().await });
        }
    };
    reload();

    let stats = inventory.stats;
    let stat = move |f: fn(&DashboardStats) -> String| {
        Signal::derive(move || {
            stats.with(|s| s.data.as_ref().map(f).unwrap_or_else(|| "-".to_string()))
        })
    };
    let loading = inventory.is_loading_dashboard;
    let low_stock = inventory.low_stock;
    let top_used = inventory.top_used;
    let recent = inventory.recent_activities;

    view! {
        <div class="page">
            <div class="page__header">
                <h1 class="page__title">"Dashboard"</h1>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || loading.get())
                    on_click=move |_| reload()
                >
                    "Muat ulang"
                </Button>
            </div>

            <div class="stat-grid">
                <StatCard label="Total Barang" value=stat(|s| s.total_barang.to_string()) />
                <StatCard label="Nilai Inventaris" value=stat(|s| format_rupiah(s.total_nilai_inventaris)) />
                <StatCard label="Barang Masuk" value=stat(|s| s.total_barang_masuk.to_string()) />
                <StatCard label="Barang Keluar" value=stat(|s| s.total_barang_keluar.to_string()) />
                <StatCard label="Stok Rendah" value=stat(|s| s.barang_stok_rendah.to_string()) />
            </div>

            <div class="dashboard-grid">
                <Card>
                    <h3>"Stok Menipis"</h3>
                    <Show
                        when=move || low_stock.with(|s| !s.is_empty())
                        fallback=|| view! { <p class="muted">"Semua stok aman"</p> }
                    >
                        <ul class="plain-list">
                            {move || low_stock.with(|s| s.items.iter().map(|b| {
                                let line = format!("{}: {} (min. {})", b.name, format_qty(b.stok, &b.satuan), b.stok_minimum);
                                view! { <li>{line}</li> }
                            }).collect_view())}
                        </ul>
                    </Show>
                </Card>

                <Card>
                    <h3>"Paling Sering Dipakai"</h3>
                    <ul class="plain-list">
                        {move || top_used.with(|s| s.data.clone().unwrap_or_default().into_iter().map(|item| {
                            view! { <li>{item.name}" · "{item.value}</li> }
                        }).collect_view())}
                    </ul>
                </Card>

                <Card>
                    <h3>"Aktivitas Terakhir"</h3>
                    <ul class="plain-list">
                        {move || recent.with(|s| s.data.clone().unwrap_or_default().into_iter().map(|a| {
                            let sign = match a.direction {
                                ActivityDirection::Masuk => "+",
                                ActivityDirection::Keluar => "-",
                            };
                            let line = format!("{} {}{}", a.barang, sign, format_qty(a.jumlah, &a.satuan));
                            view! { <li>{line}</li> }
                        }).collect_view())}
                    </ul>
                </Card>
            </div>
        </div>
    }
}
