use crate::domain::inventory::use_inventory;
use crate::shared::format::{format_qty, format_rupiah};
use contracts::domain::a002_barang::aggregate::BarangFilter;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{
    Button, ButtonAppearance, Input, Table, TableBody, TableCell, TableCellLayout, TableHeader,
    TableHeaderCell, TableRow,
};

#[component]
pub fn BarangList() -> impl IntoView {
    let inventory = use_inventory();
    let search_query = RwSignal::new(String::new());

    let load = {
        let inventory = inventory.clone();
        move || {
            let search = search_query.get_untracked().trim().to_string();
            let filter = BarangFilter {
                search: (!search.is_empty()).then_some(search),
                ..Default::default()
            };
            let inventory = inventory.clone();
            spawn_local(async move { inventory.fetch_barang(filter).await });
        }
    };
    load();

    let barang = inventory.barang;
    let loading = inventory.is_loading;

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Daftar Barang"</h1>
                </div>
                <div class="page__header-right">
                    <div style="width: 300px;">
                        <Input value=search_query placeholder="Cari nama barang..." />
                    </div>
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| load()>
                        "Cari"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <Show
                    when=move || !(loading.get() && barang.with(|s| s.is_empty()))
                    fallback=|| view! { <p class="muted">"Memuat..."</p> }
                >
                    <Show
                        when=move || barang.with(|s| !s.is_empty())
                        fallback=|| view! { <p class="muted">"Belum ada barang"</p> }
                    >
                        <Table>
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell min_width=200.0>"Nama"</TableHeaderCell>
                                    <TableHeaderCell>"Kategori"</TableHeaderCell>
                                    <TableHeaderCell>"Stok"</TableHeaderCell>
                                    <TableHeaderCell>"Harga"</TableHeaderCell>
                                    <TableHeaderCell>"Lokasi"</TableHeaderCell>
                                    <TableHeaderCell>"Status"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {move || barang.with(|s| s.items.clone()).into_iter().map(|b| {
                                    let status = b.stok_status();
                                    let status_class = if status.is_low() { "badge badge--warning" } else { "badge" };
                                    view! {
                                        <TableRow>
                                            <TableCell><TableCellLayout>{b.name}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{b.kategori.name}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{format_qty(b.stok, &b.satuan)}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{format_rupiah(b.harga_per_unit)}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{b.lokasi}</TableCellLayout></TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span class=status_class>{status.display_name()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }).collect_view()}
                            </TableBody>
                        </Table>
                        {move || barang.with(|s| s.pagination.as_ref().map(|p| {
                            view! { <p class="muted">{format!("Halaman {} dari {} ({} barang)", p.page, p.total_pages, p.total)}</p> }
                        }))}
                    </Show>
                </Show>
            </div>
        </div>
    }
}
