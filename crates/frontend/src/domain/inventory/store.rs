//! Inventory store.
//!
//! Every list is replaced wholesale by the server's answer; a failed read
//! keeps the previous list. Writes never patch local state: once the server
//! accepts a write, the lists named by [`Mutation::affected`] are re-read
//! with the filter they were last loaded with.
//!
//! Overlapping reads of the same list are not sequenced. Whichever response
//! arrives last overwrites the list.

use contracts::dashboards::d400_inventory::dto::{
    ChartData, DashboardStats, KategoriDistribution, RecentActivity, TopUsedItem,
};
use contracts::domain::a001_kategori::aggregate::{CreateKategoriDto, Kategori, UpdateKategoriDto};
use contracts::domain::a002_barang::aggregate::{
    Barang, BarangFilter, CreateBarangDto, UpdateBarangDto,
};
use contracts::domain::a003_transaksi_masuk::aggregate::{
    CreateTransaksiMasukDto, TransaksiMasuk, TransaksiMasukFilter,
};
use contracts::domain::a004_transaksi_keluar::aggregate::{
    CreateTransaksiKeluarDto, TransaksiKeluar, TransaksiKeluarFilter,
};
use contracts::shared::Ack;
use leptos::prelude::*;
use std::future::Future;

use super::invalidation::{Mutation, Slice};
use crate::dashboards::d400_inventory::api as dashboard_api;
use crate::dashboards::d400_inventory::api::{RECENT_ACTIVITY_LIMIT, TOP_USED_LIMIT};
use crate::domain::a001_kategori::api as kategori_api;
use crate::domain::a002_barang::api as barang_api;
use crate::domain::a003_transaksi_masuk::api as masuk_api;
use crate::domain::a004_transaksi_keluar::api as keluar_api;
use crate::shared::gateway::{ApiError, Gateway, Page};
use crate::shared::state::{DataSlice, ListSlice};
use crate::shared::toast::ToastService;

#[derive(Clone)]
pub struct InventoryStore {
    pub barang: RwSignal<ListSlice<Barang, BarangFilter>>,
    pub kategori: RwSignal<ListSlice<Kategori, ()>>,
    pub transaksi_masuk: RwSignal<ListSlice<TransaksiMasuk, TransaksiMasukFilter>>,
    pub transaksi_keluar: RwSignal<ListSlice<TransaksiKeluar, TransaksiKeluarFilter>>,
    pub low_stock: RwSignal<ListSlice<Barang, ()>>,

    pub stats: RwSignal<DataSlice<DashboardStats>>,
    pub chart_data: RwSignal<DataSlice<Vec<ChartData>>>,
    pub distribution: RwSignal<DataSlice<Vec<KategoriDistribution>>>,
    pub top_used: RwSignal<DataSlice<Vec<TopUsedItem>>>,
    pub recent_activities: RwSignal<DataSlice<Vec<RecentActivity>>>,

    /// A write is in flight
    pub is_loading: RwSignal<bool>,
    pub is_loading_dashboard: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,

    gateway: Gateway,
    toasts: ToastService,
}

impl InventoryStore {
    pub fn new(gateway: Gateway, toasts: ToastService) -> Self {
        Self {
            barang: RwSignal::new(ListSlice::default()),
            kategori: RwSignal::new(ListSlice::default()),
            transaksi_masuk: RwSignal::new(ListSlice::default()),
            transaksi_keluar: RwSignal::new(ListSlice::default()),
            low_stock: RwSignal::new(ListSlice::default()),
            stats: RwSignal::new(DataSlice::default()),
            chart_data: RwSignal::new(DataSlice::default()),
            distribution: RwSignal::new(DataSlice::default()),
            top_used: RwSignal::new(DataSlice::default()),
            recent_activities: RwSignal::new(DataSlice::default()),
            is_loading: RwSignal::new(false),
            is_loading_dashboard: RwSignal::new(false),
            error: RwSignal::new(None),
            gateway,
            toasts,
        }
    }

    pub fn clear_error(&self) {
        self.error.set(None);
    }

    fn begin<T, F>(&self, slice: RwSignal<ListSlice<T, F>>, filter: F)
    where
        T: Send + Sync + 'static,
        F: Send + Sync + 'static,
    {
        slice.update(|s| s.begin(filter));
        self.error.set(None);
    }

    /// Store a list read; `notify` raises a toast on failure
    fn settle<T, F>(
        &self,
        slice: RwSignal<ListSlice<T, F>>,
        result: Result<Page<T>, ApiError>,
        what: &str,
        notify: bool,
    ) where
        T: Send + Sync + 'static,
        F: Send + Sync + 'static,
    {
        match result {
            Ok(page) => slice.update(|s| s.fill(page)),
            Err(e) => {
                log::error!("Failed to fetch {}: {}", what, e);
                slice.update(|s| s.fail());
                self.error.set(Some(e.message.clone()));
                if notify {
                    self.toasts.error(e.message);
                }
            }
        }
    }

    /// Dashboard widgets only log and record the error
    fn settle_data<T>(&self, slice: RwSignal<DataSlice<T>>, result: Result<T, ApiError>, what: &str)
    where
        T: Send + Sync + 'static,
    {
        match result {
            Ok(data) => slice.update(|s| s.fill(data)),
            Err(e) => {
                log::error!("Failed to fetch {}: {}", what, e);
                slice.update(|s| s.fail());
                self.error.set(Some(e.message));
            }
        }
    }

    // Kategori

    pub async fn fetch_kategori(&self) {
        self.begin(self.kategori, ());
        let result = kategori_api::fetch_kategori(&self.gateway)
            .await
            .map(|items| Page {
                items,
                pagination: None,
            });
        self.settle(self.kategori, result, "kategori", true);
    }

    pub async fn add_kategori(&self, dto: CreateKategoriDto) -> bool {
        let call = kategori_api::create_kategori(&self.gateway, &dto);
        self.mutate(Mutation::AddKategori, call).await
    }

    pub async fn update_kategori(&self, id: i64, dto: UpdateKategoriDto) -> bool {
        let call = kategori_api::update_kategori(&self.gateway, id, &dto);
        self.mutate(Mutation::UpdateKategori, call).await
    }

    /// The server refuses to delete a category that still has items
    pub async fn delete_kategori(&self, id: i64) -> bool {
        let call = kategori_api::delete_kategori(&self.gateway, id);
        self.mutate(Mutation::DeleteKategori, call).await
    }

    // Barang

    pub async fn fetch_barang(&self, filter: BarangFilter) {
        self.begin(self.barang, filter.clone());
        let result = barang_api::fetch_barang(&self.gateway, &filter).await;
        self.settle(self.barang, result, "barang", true);
    }

    /// Detail read; does not touch the list
    pub async fn fetch_barang_by_id(&self, id: i64) -> Option<Barang> {
        match barang_api::fetch_barang_by_id(&self.gateway, id).await {
            Ok(barang) => Some(barang),
            Err(e) => {
                log::warn!("Failed to fetch barang {}: {}", id, e);
                self.toasts.error(e.message);
                None
            }
        }
    }

    pub async fn add_barang(&self, dto: CreateBarangDto) -> bool {
        let call = barang_api::create_barang(&self.gateway, &dto);
        self.mutate(Mutation::AddBarang, call).await
    }

    pub async fn update_barang(&self, id: i64, dto: UpdateBarangDto) -> bool {
        let call = barang_api::update_barang(&self.gateway, id, &dto);
        self.mutate(Mutation::UpdateBarang, call).await
    }

    pub async fn delete_barang(&self, id: i64) -> bool {
        let call = barang_api::delete_barang(&self.gateway, id);
        self.mutate(Mutation::DeleteBarang, call).await
    }

    pub async fn fetch_low_stock_items(&self) {
        self.low_stock.update(|s| s.begin(()));
        let result = barang_api::fetch_low_stock(&self.gateway)
            .await
            .map(|items| Page {
                items,
                pagination: None,
            });
        self.settle(self.low_stock, result, "low stock items", false);
    }

    /// UI hint for the stock-out form: `true` when `jumlah` is above the
    /// last stock value this client saw. The server has the final word.
    pub fn exceeds_known_stock(&self, barang_id: i64, jumlah: u32) -> bool {
        let known = self
            .barang
            .with_untracked(|s| s.items.iter().find(|b| b.id == barang_id).map(|b| b.stok))
            .or_else(|| {
                self.low_stock.with_untracked(|s| {
                    s.items.iter().find(|b| b.id == barang_id).map(|b| b.stok)
                })
            });
        matches!(known, Some(stok) if jumlah > stok)
    }

    // Transaksi masuk / keluar

    pub async fn fetch_transaksi_masuk(&self, filter: TransaksiMasukFilter) {
        self.begin(self.transaksi_masuk, filter.clone());
        let result = masuk_api::fetch_transaksi_masuk(&self.gateway, &filter).await;
        self.settle(self.transaksi_masuk, result, "transaksi masuk", true);
    }

    pub async fn add_transaksi_masuk(&self, dto: CreateTransaksiMasukDto) -> bool {
        let call = masuk_api::create_transaksi_masuk(&self.gateway, &dto);
        self.mutate(Mutation::AddTransaksiMasuk, call).await
    }

    pub async fn fetch_transaksi_keluar(&self, filter: TransaksiKeluarFilter) {
        self.begin(self.transaksi_keluar, filter.clone());
        let result = keluar_api::fetch_transaksi_keluar(&self.gateway, &filter).await;
        self.settle(self.transaksi_keluar, result, "transaksi keluar", true);
    }

    /// Sent even when [`Self::exceeds_known_stock`] says otherwise
    pub async fn add_transaksi_keluar(&self, dto: CreateTransaksiKeluarDto) -> bool {
        if self.exceeds_known_stock(dto.barang_id, dto.jumlah) {
            log::debug!(
                "Stock-out of {} for barang {} exceeds known stock",
                dto.jumlah,
                dto.barang_id
            );
        }
        let call = keluar_api::create_transaksi_keluar(&self.gateway, &dto);
        self.mutate(Mutation::AddTransaksiKeluar, call).await
    }

    // Dashboard

    pub async fn fetch_dashboard_stats(&self) {
        self.stats.update(|s| s.begin());
        let result = dashboard_api::fetch_stats(&self.gateway).await;
        self.settle_data(self.stats, result, "dashboard stats");
    }

    pub async fn fetch_chart_data(&self, year: Option<i32>) {
        self.chart_data.update(|s| s.begin());
        let result = dashboard_api::fetch_chart_data(&self.gateway, year).await;
        self.settle_data(self.chart_data, result, "chart data");
    }

    pub async fn fetch_kategori_distribution(&self) {
        self.distribution.update(|s| s.begin());
        let result = dashboard_api::fetch_kategori_distribution(&self.gateway).await;
        self.settle_data(self.distribution, result, "kategori distribution");
    }

    pub async fn fetch_top_used_items(&self, limit: u32) {
        self.top_used.update(|s| s.begin());
        let result = dashboard_api::fetch_top_used(&self.gateway, limit).await;
        self.settle_data(self.top_used, result, "top used items");
    }

    pub async fn fetch_recent_activities(&self, limit: u32) {
        self.recent_activities.update(|s| s.begin());
        let result = dashboard_api::fetch_recent_activities(&self.gateway, limit).await;
        self.settle_data(self.recent_activities, result, "recent activities");
    }

    /// All dashboard widgets at once. One failing widget does not stop
    /// the others.
    pub async fn fetch_all_dashboard_data(&self) {
        self.is_loading_dashboard.set(true);
        futures::join!(
            self.fetch_dashboard_stats(),
            self.fetch_chart_data(None),
            self.fetch_kategori_distribution(),
            self.fetch_top_used_items(TOP_USED_LIMIT),
            self.fetch_recent_activities(RECENT_ACTIVITY_LIMIT),
            self.fetch_low_stock_items(),
        );
        self.is_loading_dashboard.set(false);
    }

    // Writes

    async fn mutate<Fut>(&self, mutation: Mutation, call: Fut) -> bool
    where
        Fut: Future<Output = Result<Ack, ApiError>>,
    {
        self.is_loading.set(true);
        self.error.set(None);
        match call.await {
            Ok(_) => {
                self.invalidate(mutation).await;
                self.is_loading.set(false);
                self.toasts.success(mutation.success_message());
                true
            }
            Err(e) => {
                log::warn!("{:?} failed: {}", mutation, e);
                self.is_loading.set(false);
                self.error.set(Some(e.message.clone()));
                self.toasts.error(e.message);
                false
            }
        }
    }

    /// Re-read every list the mutation touched. A failed re-read is
    /// reported by the fetch itself and does not undo the write.
    async fn invalidate(&self, mutation: Mutation) {
        for slice in mutation.affected() {
            self.refetch(*slice).await;
        }
    }

    async fn refetch(&self, slice: Slice) {
        match slice {
            Slice::Barang => {
                let filter = self.barang.with_untracked(|s| s.filter.clone());
                self.fetch_barang(filter).await;
            }
            Slice::Kategori => self.fetch_kategori().await,
            Slice::TransaksiMasuk => {
                let filter = self.transaksi_masuk.with_untracked(|s| s.filter.clone());
                self.fetch_transaksi_masuk(filter).await;
            }
            Slice::TransaksiKeluar => {
                let filter = self.transaksi_keluar.with_untracked(|s| s.filter.clone());
                self.fetch_transaksi_keluar(filter).await;
            }
        }
    }
}

pub fn use_inventory() -> InventoryStore {
    use_context::<InventoryStore>().expect("InventoryStore not provided")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::gateway::{HttpResponse, Method, TransportError};
    use crate::shared::navigation::LOGIN_PATH;
    use crate::shared::testing::*;
    use crate::shared::toast::ToastKind;
    use crate::system::auth::storage::SessionStorage;
    use chrono::NaiveDate;
    use contracts::enums::{AlasanKeluar, Kondisi};
    use futures::executor::{block_on, LocalPool};
    use futures::task::LocalSpawnExt;
    use serde_json::json;

    fn setup(h: &Harness) -> (InventoryStore, ToastService) {
        let toasts = ToastService::new();
        (InventoryStore::new(gateway_with(h), toasts), toasts)
    }

    fn names(store: &InventoryStore) -> Vec<String> {
        store
            .barang
            .with_untracked(|s| s.items.iter().map(|b| b.name.clone()).collect())
    }

    #[test]
    fn test_fetch_barang_replaces_list_and_pagination() {
        let owner = Owner::new();
        owner.set();
        let h = Harness::signed_in("tok");
        let (store, _) = setup(&h);
        h.transport.on(
            Method::Get,
            "/barang",
            200,
            json!({
                "success": true,
                "message": "OK",
                "data": [barang_json(1, "Beras", 50), barang_json(2, "Minyak", 4)],
                "pagination": { "page": 1, "limit": 10, "total": 2, "totalPages": 1 }
            }),
        );

        block_on(store.fetch_barang(BarangFilter::default()));

        let slice = store.barang.get_untracked();
        assert_eq!(slice.items.len(), 2);
        assert_eq!(slice.pagination.unwrap().total_pages, 1);
        assert!(!slice.is_loading);
        assert!(slice.items[1].stok_status().is_low());
    }

    #[test]
    fn test_fetch_failure_keeps_stale_list() {
        let owner = Owner::new();
        owner.set();
        let h = Harness::signed_in("tok");
        let (store, toasts) = setup(&h);
        h.transport
            .on(Method::Get, "/barang", 200, ok(json!([barang_json(1, "Beras", 50)])));
        h.transport.on(Method::Get, "/barang", 500, fail("Database error"));

        block_on(store.fetch_barang(BarangFilter::default()));
        block_on(store.fetch_barang(BarangFilter {
            search: Some("ber".into()),
            ..Default::default()
        }));

        assert_eq!(names(&store), vec!["Beras"]);
        assert_eq!(store.error.get_untracked().as_deref(), Some("Database error"));
        assert_eq!(toasts.current().last().unwrap().kind, ToastKind::Error);
    }

    #[test]
    fn test_create_gula_sends_payload_and_refetches() {
        let owner = Owner::new();
        owner.set();
        let h = Harness::signed_in("tok");
        let (store, toasts) = setup(&h);
        h.transport
            .on(Method::Get, "/barang", 200, ok(json!([barang_json(1, "Beras", 50)])));
        h.transport.on(
            Method::Get,
            "/barang",
            200,
            ok(json!([barang_json(1, "Beras", 50), barang_json(9, "Gula", 10)])),
        );
        h.transport.on(
            Method::Post,
            "/barang",
            201,
            ok(json!({ "barang": barang_json(9, "Gula", 10) })),
        );
        block_on(store.fetch_barang(BarangFilter::default()));

        let dto = CreateBarangDto {
            name: "Gula".into(),
            kategori_id: 3,
            satuan: "kg".into(),
            stok: Some(10),
            stok_minimum: Some(5),
            harga_per_unit: Some(15000),
            lokasi: "Gudang Utama".into(),
            kondisi: Some(Kondisi::Baik),
            tanggal_kadaluarsa: None,
            catatan: None,
        };
        assert!(block_on(store.add_barang(dto)));

        assert_eq!(
            h.transport.body_of_last(Method::Post, "/barang"),
            Some(json!({
                "name": "Gula",
                "kategoriId": 3,
                "satuan": "kg",
                "stok": 10,
                "stokMinimum": 5,
                "hargaPerUnit": 15000,
                "lokasi": "Gudang Utama",
                "kondisi": "baik"
            }))
        );
        assert_eq!(names(&store), vec!["Beras", "Gula"]);
        assert!(!store.is_loading.get_untracked());
        assert_eq!(toasts.current().last().unwrap().message, "Barang berhasil ditambahkan");
    }

    #[test]
    fn test_refetch_reuses_current_filter() {
        let owner = Owner::new();
        owner.set();
        let h = Harness::signed_in("tok");
        let (store, _) = setup(&h);
        h.transport.on(Method::Get, "/barang", 200, ok(json!([])));
        h.transport.on(Method::Delete, "/barang/4", 200, ack());

        block_on(store.fetch_barang(BarangFilter {
            kategori_id: Some(2),
            page: Some(3),
            ..Default::default()
        }));
        assert!(block_on(store.delete_barang(4)));

        let reads = h.transport.requests_to(Method::Get, "/barang");
        assert_eq!(reads.len(), 2);
        assert_eq!(reads[0].url, reads[1].url);
        assert!(reads[1].url.ends_with("/barang?kategoriId=2&page=3"));
    }

    fn kategori_names(store: &InventoryStore) -> Vec<String> {
        store
            .kategori
            .with_untracked(|s| s.items.iter().map(|k| k.name.clone()).collect())
    }

    #[test]
    fn test_add_kategori_refetches_categories() {
        let owner = Owner::new();
        owner.set();
        let h = Harness::signed_in("tok");
        let (store, toasts) = setup(&h);
        h.transport.on(
            Method::Get,
            "/kategori",
            200,
            ok(json!({ "kategori": [kategori_json(1, "Bumbu")] })),
        );
        h.transport.on(
            Method::Get,
            "/kategori",
            200,
            ok(json!({ "kategori": [kategori_json(1, "Bumbu"), kategori_json(2, "Minuman")] })),
        );
        h.transport.on(Method::Post, "/kategori", 201, ack());
        block_on(store.fetch_kategori());

        let dto = CreateKategoriDto {
            name: "Minuman".into(),
            description: None,
        };
        assert!(block_on(store.add_kategori(dto)));

        assert_eq!(
            h.transport.body_of_last(Method::Post, "/kategori"),
            Some(json!({ "name": "Minuman" }))
        );
        assert_eq!(kategori_names(&store), vec!["Bumbu", "Minuman"]);
        assert_eq!(h.transport.count(Method::Get, "/kategori"), 2);
        assert_eq!(h.transport.count(Method::Get, "/barang"), 0);
        assert_eq!(toasts.current().last().unwrap().message, "Kategori berhasil ditambahkan");
    }

    #[test]
    fn test_update_kategori_refetches_categories() {
        let owner = Owner::new();
        owner.set();
        let h = Harness::signed_in("tok");
        let (store, toasts) = setup(&h);
        h.transport.on(
            Method::Get,
            "/kategori",
            200,
            ok(json!({ "kategori": [kategori_json(1, "Bumbu")] })),
        );
        h.transport.on(
            Method::Get,
            "/kategori",
            200,
            ok(json!({ "kategori": [kategori_json(1, "Bumbu Dapur")] })),
        );
        h.transport.on(Method::Put, "/kategori/1", 200, ack());
        block_on(store.fetch_kategori());

        let dto = UpdateKategoriDto {
            name: Some("Bumbu Dapur".into()),
            description: None,
        };
        assert!(block_on(store.update_kategori(1, dto)));

        assert_eq!(
            h.transport.body_of_last(Method::Put, "/kategori/1"),
            Some(json!({ "name": "Bumbu Dapur" }))
        );
        assert_eq!(kategori_names(&store), vec!["Bumbu Dapur"]);
        assert!(!store.is_loading.get_untracked());
        assert_eq!(toasts.current().last().unwrap().message, "Kategori berhasil diperbarui");
    }

    #[test]
    fn test_failed_mutation_leaves_slice_and_clears_loading() {
        let owner = Owner::new();
        owner.set();
        let h = Harness::signed_in("tok");
        let (store, _) = setup(&h);
        h.transport.on(
            Method::Get,
            "/kategori",
            200,
            ok(json!({ "kategori": [kategori_json(1, "Bumbu")] })),
        );
        h.transport.on(
            Method::Delete,
            "/kategori/1",
            400,
            fail("Kategori masih memiliki barang"),
        );
        block_on(store.fetch_kategori());
        let before = store.kategori.get_untracked();

        assert!(!block_on(store.delete_kategori(1)));

        assert_eq!(store.kategori.get_untracked(), before);
        assert!(!store.is_loading.get_untracked());
        assert_eq!(
            store.error.get_untracked().as_deref(),
            Some("Kategori masih memiliki barang")
        );
        assert_eq!(h.transport.count(Method::Get, "/kategori"), 1);
    }

    #[test]
    fn test_stock_in_refetches_transactions_then_items() {
        let owner = Owner::new();
        owner.set();
        let h = Harness::signed_in("tok");
        let (store, _) = setup(&h);
        h.transport.on(Method::Post, "/transaksi-masuk", 201, ack());
        h.transport.on(Method::Get, "/transaksi-masuk", 200, ok(json!([])));
        h.transport
            .on(Method::Get, "/barang", 200, ok(json!([barang_json(1, "Beras", 70)])));

        let dto = CreateTransaksiMasukDto {
            barang_id: 1,
            jumlah: 20,
            tanggal: NaiveDate::from_ymd_opt(2025, 2, 3).unwrap(),
            supplier: "CV Sumber Pangan".into(),
            catatan: None,
        };
        assert!(block_on(store.add_transaksi_masuk(dto)));

        let paths: Vec<String> = h
            .transport
            .requests()
            .iter()
            .map(|r| format!("{} {}", r.method.as_str(), r.url))
            .collect();
        assert_eq!(
            paths,
            vec![
                "POST http://api.test/transaksi-masuk",
                "GET http://api.test/transaksi-masuk",
                "GET http://api.test/barang",
            ]
        );
        assert_eq!(store.barang.get_untracked().items[0].stok, 70);
    }

    #[test]
    fn test_stock_out_above_known_stock_is_still_sent() {
        let owner = Owner::new();
        owner.set();
        let h = Harness::signed_in("tok");
        let (store, toasts) = setup(&h);
        h.transport
            .on(Method::Get, "/barang", 200, ok(json!([barang_json(1, "Beras", 3)])));
        h.transport.on(
            Method::Post,
            "/transaksi-keluar",
            400,
            fail("Stok tidak mencukupi. Stok tersedia: 3 kg"),
        );
        block_on(store.fetch_barang(BarangFilter::default()));
        let before = store.barang.get_untracked().items;

        assert!(store.exceeds_known_stock(1, 10));
        let dto = CreateTransaksiKeluarDto {
            barang_id: 1,
            jumlah: 10,
            tanggal: NaiveDate::from_ymd_opt(2025, 2, 3).unwrap(),
            alasan: AlasanKeluar::PemakaianHarian,
            catatan: None,
        };
        assert!(!block_on(store.add_transaksi_keluar(dto)));

        assert_eq!(h.transport.count(Method::Post, "/transaksi-keluar"), 1);
        assert_eq!(
            h.transport.body_of_last(Method::Post, "/transaksi-keluar").unwrap()["alasan"],
            json!("Pemakaian harian")
        );
        assert_eq!(
            store.error.get_untracked().as_deref(),
            Some("Stok tidak mencukupi. Stok tersedia: 3 kg")
        );
        assert_eq!(
            toasts.current().last().unwrap().message,
            "Stok tidak mencukupi. Stok tersedia: 3 kg"
        );
        assert_eq!(store.barang.get_untracked().items, before);
        assert_eq!(h.transport.count(Method::Get, "/barang"), 1);
    }

    #[test]
    fn test_exceeds_known_stock_unknown_item() {
        let owner = Owner::new();
        owner.set();
        let h = Harness::anonymous();
        let (store, _) = setup(&h);
        assert!(!store.exceeds_known_stock(42, 1_000));
    }

    #[test]
    fn test_dashboard_failures_are_isolated() {
        let owner = Owner::new();
        owner.set();
        let h = Harness::signed_in("tok");
        let (store, toasts) = setup(&h);
        h.transport.on(Method::Get, "/dashboard/stats", 200, ok(stats_json(42)));
        h.transport.on(
            Method::Get,
            "/dashboard/chart-data",
            200,
            ok(json!({ "chartData": [{ "name": "Jan", "masuk": 10, "keluar": 4 }] })),
        );
        h.transport.on_fail(
            Method::Get,
            "/dashboard/kategori-distribution",
            TransportError::Timeout(30_000),
        );
        h.transport.on(
            Method::Get,
            "/dashboard/top-used",
            200,
            ok(json!({ "items": [{ "name": "Beras", "value": 120 }] })),
        );
        h.transport.on(
            Method::Get,
            "/dashboard/recent-activities",
            500,
            fail("Query gagal"),
        );
        h.transport.on(
            Method::Get,
            "/barang/low-stock",
            200,
            ok(json!({ "barang": [barang_json(2, "Minyak", 4)] })),
        );

        block_on(store.fetch_all_dashboard_data());

        assert_eq!(store.stats.get_untracked().data.unwrap().total_barang, 42);
        assert_eq!(store.chart_data.get_untracked().data.unwrap()[0].masuk, 10);
        assert!(store.distribution.get_untracked().data.is_none());
        assert_eq!(store.top_used.get_untracked().data.unwrap()[0].value, 120);
        assert!(store.recent_activities.get_untracked().data.is_none());
        assert_eq!(store.low_stock.get_untracked().items.len(), 1);
        assert!(!store.is_loading_dashboard.get_untracked());
        assert!(store.error.get_untracked().is_some());
        assert!(toasts.current().is_empty());

        let top = h.transport.requests_to(Method::Get, "/dashboard/top-used");
        assert!(top[0].url.ends_with("?limit=8"));
        let recent = h.transport.requests_to(Method::Get, "/dashboard/recent-activities");
        assert!(recent[0].url.ends_with("?limit=5"));
    }

    #[test]
    fn test_unauthorized_from_inventory_clears_session() {
        let owner = Owner::new();
        owner.set();
        let h = Harness::signed_in("revoked");
        let (store, _) = setup(&h);
        h.transport.on(Method::Get, "/kategori", 401, fail("Token tidak valid"));

        block_on(store.fetch_kategori());

        assert!(h.session.load().is_none());
        assert_eq!(h.navigator.redirects(), vec![LOGIN_PATH.to_string()]);
    }

    /// Known race: overlapping reads of one list are applied in arrival
    /// order, not request order.
    #[test]
    fn test_overlapping_fetches_last_response_wins() {
        let owner = Owner::new();
        owner.set();
        let h = Harness::signed_in("tok");
        let (store, _) = setup(&h);
        let first = h.transport.on_deferred(Method::Get, "/barang");
        let second = h.transport.on_deferred(Method::Get, "/barang");

        let mut pool = LocalPool::new();
        let spawner = pool.spawner();
        let s1 = store.clone();
        spawner
            .spawn_local(async move {
                s1.fetch_barang(BarangFilter {
                    kondisi: Some(Kondisi::Baik),
                    ..Default::default()
                })
                .await
            })
            .unwrap();
        let s2 = store.clone();
        spawner
            .spawn_local(async move {
                s2.fetch_barang(BarangFilter {
                    kondisi: Some(Kondisi::Rusak),
                    ..Default::default()
                })
                .await
            })
            .unwrap();
        pool.run_until_stalled();
        assert_eq!(h.transport.count(Method::Get, "/barang"), 2);

        let reply = |items: serde_json::Value| {
            Ok(HttpResponse {
                status: 200,
                body: ok(items).to_string(),
            })
        };
        second
            .send(reply(json!([barang_json(5, "Tomat busuk", 2)])))
            .unwrap();
        pool.run_until_stalled();
        assert_eq!(names(&store), vec!["Tomat busuk"]);

        first
            .send(reply(json!([barang_json(1, "Beras", 50)])))
            .unwrap();
        pool.run_until_stalled();

        // The older request resolved last and overwrote the newer result
        assert_eq!(names(&store), vec!["Beras"]);
        assert_eq!(
            store.barang.get_untracked().filter.kondisi,
            Some(Kondisi::Rusak)
        );
    }
}
