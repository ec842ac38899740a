use super::store::use_users;
use crate::shared::format::format_date;
use contracts::enums::UserStatus;
use contracts::system::users::UserFilter;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{
    Button, ButtonSize, Table, TableBody, TableCell, TableCellLayout, TableHeader,
    TableHeaderCell, TableRow,
};

#[component]
pub fn UserList() -> impl IntoView {
    let users = use_users();
    let state = users.state();

    {
        let users = users.clone();
        spawn_local(async move { users.fetch_users(UserFilter::default()).await });
    }

    view! {
        <div class="page">
            <div class="page__header">
                <h1 class="page__title">"Pengguna"</h1>
            </div>
            <div class="page__content">
                <Show
                    when=move || state.with(|s| s.error.is_none())
                    fallback=move || view! {
                        <p class="error-message">{state.with(|s| s.error.clone().unwrap_or_default())}</p>
                    }
                >
                    {
                        let users = users.clone();
                        view! {
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=180.0>"Nama"</TableHeaderCell>
                                <TableHeaderCell>"Email"</TableHeaderCell>
                                <TableHeaderCell>"Peran"</TableHeaderCell>
                                <TableHeaderCell>"Login terakhir"</TableHeaderCell>
                                <TableHeaderCell>"Status"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {
                                let users = users.clone();
                                move || state.with(|s| s.users.items.clone()).into_iter().map(|u| {
                                    let users = users.clone();
                                    let id = u.id;
                                    let last_login = u.last_login.as_deref().map(format_date).unwrap_or_else(|| "-".to_string());
                                    let status_label = match u.status {
                                        UserStatus::Active => "Aktif",
                                        UserStatus::Inactive => "Nonaktif",
                                    };
                                    view! {
                                        <TableRow>
                                            <TableCell><TableCellLayout>{u.name}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{u.email}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{u.role.display_name()}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{last_login}</TableCellLayout></TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <Button
                                                        size=ButtonSize::Small
                                                        on_click=move |_| {
                                                            let users = users.clone();
                                                            spawn_local(async move {
                                                                users.toggle_status(id).await;
                                                            });
                                                        }
                                                    >
                                                        {status_label}
                                                    </Button>
                                                </TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }).collect_view()
                            }
                        </TableBody>
                    </Table>
                        }
                    }
                </Show>
            </div>
        </div>
    }
}
