//! 商品テーブルコンポーネント
//!
//! 検索入力と連動するフィルタ付きテーブル。描画状態は
//! ローディング → エラー → 空 → テーブル の優先順位で排他的に選ぶ。
//! フィルタはクエリ変更のたびに元のコレクション全体へ再適用する。

use leptos::prelude::*;
use product_dash_common::{derive_fields, filter_products, Product};

use crate::hooks::{use_products, ViewState};

#[component]
pub fn ProductsTable() -> impl IntoView {
    let state = use_products();
    let (search_term, set_search_term) = signal(String::new());

    let products = state.products;
    let filtered = Memo::new(move |_| filter_products(&products.get(), &search_term.get()));

    view! {
        {move || {
            let view_state = ViewState::from_parts(
                state.is_loading.get(),
                state.error.get().as_deref(),
                products.get().len(),
            );
            match view_state {
                ViewState::Loading => {
                    view! { <div class="table-message">"Loading products..."</div> }.into_any()
                }
                ViewState::Failed(message) => {
                    view! { <div class="table-message error">{format!("Error: {}", message)}</div> }
                        .into_any()
                }
                ViewState::Empty => {
                    view! { <div class="table-message">"No products available."</div> }.into_any()
                }
                ViewState::Ready => view! {
                    <div class="table-panel">
                        <div class="table-toolbar">
                            <h2>"Product List"</h2>
                            <input
                                type="text"
                                class="search-input"
                                placeholder="Search products..."
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
                                    <th>"Color"</th>
                                    <th>"Price"</th>
                                    <th>"Capacity"</th>
                                    <th>"Generation"</th>
                                    <th>"CPU Model"</th>
                                    <th>"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || filtered.get()
                                    key=|product| product.id.clone()
                                    children=move |product| {
                                        view! { <ProductRow product=product /> }
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
fn ProductRow(product: Product) -> impl IntoView {
    let fields = derive_fields(&product);

    view! {
        <tr>
            <td class="cell-name">{product.name}</td>
            <td>{fields.color}</td>
            <td>{fields.price}</td>
            <td>{fields.capacity}</td>
            <td>{fields.generation}</td>
            <td>{fields.cpu_model}</td>
            <td class="cell-actions">
                <button class="btn btn-small btn-secondary">"Edit"</button>
                <button class="btn btn-small btn-tertiary">"Delete"</button>
            </td>
        </tr>
    }
}
