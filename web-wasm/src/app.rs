//! メインアプリケーションコンポーネント

use leptos::prelude::*;

use crate::components::{header::Header, products_table::ProductsTable, users_table::UsersTable};

/// 画面全体の構成: ヘッダー + 商品テーブル + ユーザーテーブル
///
/// 各テーブルは自分のプロバイダと検索状態を持ち、互いに状態を共有しない。
#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="container">
            <Header />
            <ProductsTable />
            <UsersTable />
        </div>
    }
}
