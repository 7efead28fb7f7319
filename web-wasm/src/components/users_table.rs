//! ユーザーテーブルコンポーネント
//!
//! 商品テーブルと同じ4状態・同じ部分一致フィルタのセマンティクス

use leptos::prelude::*;
use product_dash_common::{filter_users, User};

use crate::hooks::{use_users, ViewState};

#[component]
pub fn UsersTable() -> impl IntoView {
    let state = use_users();
    let (search_term, set_search_term) = signal(String::new());

    let users = state.users;
    let filtered = Memo::new(move |_| filter_users(&users.get(), &search_term.get()));

    view! {
        {move || {
            let view_state = ViewState::from_parts(
                state.is_loading.get(),
                state.error.get().as_deref(),
                users.get().len(),
            );
            match view_state {
                ViewState::Loading => {
                    view! { <div class="table-message">"Loading users..."</div> }.into_any()
                }
                ViewState::Failed(message) => {
                    view! { <div class="table-message error">{format!("Error: {}", message)}</div> }
                        .into_any()
                }
                ViewState::Empty => {
                    view! { <div class="table-message">"No users available."</div> }.into_any()
                }
                ViewState::Ready => view! {
                    <div class="table-panel">
                        <div class="table-toolbar">
                            <h2>"User List"</h2>
                            <input
                                type="text"
                                class="search-input"
                                placeholder="Search users..."
                                prop:value=move || search_term.get()
                                on:input=move |ev| {
                                    set_search_term.set(event_target_value(&ev));
                                }
                            />
                        </div>

                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Name"</th>
                                    <th>"Username"</th>
                                    <th>"Email"</th>
                                    <th>"City"</th>
                                    <th>"Company"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || filtered.get()
                                    key=|user| user.id
                                    children=move |user| {
                                        view! { <UserRow user=user /> }
                                    }
                                />
                            </tbody>
                        </table>
                    </div>
                }
                .into_any(),
            }
        }}
    }
}

#[component]
fn UserRow(user: User) -> impl IntoView {
    view! {
        <tr>
            <td class="cell-name">{user.name}</td>
            <td>{user.username}</td>
            <td>{user.email}</td>
            <td>{user.address.city}</td>
            <td>{user.company.name}</td>
        </tr>
    }
}
