pub mod global_context;
pub mod sidebar;
pub mod top_header;

use crate::dashboards::d400_inventory::ui::InventoryDashboard;
use crate::domain::a002_barang::ui::BarangList;
use crate::system::auth::guard::RequireSuperAdmin;
use crate::system::users::UserList;
use leptos::prelude::*;
use top_header::TopHeader;

/// Page shown in the content area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Dashboard,
    Barang,
    Pengguna,
}

impl Section {
    pub fn all() -> [Section; 3] {
        [Section::Dashboard, Section::Barang, Section::Pengguna]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Barang => "Data Barang",
            Section::Pengguna => "Pengguna",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Section::Dashboard => "bar-chart",
            Section::Barang => "package",
            Section::Pengguna => "user",
        }
    }
}

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                   |
/// +------------------------------------------+
/// |  Sidebar  |          Content             |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    let current = RwSignal::new(Section::Dashboard);

    view! {
        <div class="app-layout">
            <TopHeader />
            <div class="app-body">
                <sidebar::Sidebar current=current />
                <main class="app-main">
                    {move || match current.get() {
                        Section::Dashboard => view! { <InventoryDashboard /> }.into_any(),
                        Section::Barang => view! { <BarangList /> }.into_any(),
                        Section::Pengguna => view! {
                            <RequireSuperAdmin>
                                <UserList />
                            </RequireSuperAdmin>
                        }.into_any(),
                    }}
                </main>
            </div>
        </div>
    }
}
