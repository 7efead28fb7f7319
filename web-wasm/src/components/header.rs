//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Product Dash - 商品・ユーザーダッシュボード"</h1>
        </header>
    }
}
