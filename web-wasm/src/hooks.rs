//! データ取得フック
//!
//! 外部リソースごとに1つのデータプロバイダ。マウント時に1回だけ
//! フェッチし、(records, is_loading, error) の3つの状態を公開する。
//! エラーは種類を区別せずメッセージ文字列に平坦化する。

use leptos::prelude::*;
use product_dash_common::{Product, User};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;

use crate::api;

/// 商品プロバイダの公開状態
#[derive(Clone, Copy)]
pub struct ProductsState {
    pub products: ReadSignal<Vec<Product>>,
    pub is_loading: ReadSignal<bool>,
    pub error: ReadSignal<Option<String>>,
}

/// ユーザープロバイダの公開状態
#[derive(Clone, Copy)]
pub struct UsersState {
    pub users: ReadSignal<Vec<User>>,
    pub is_loading: ReadSignal<bool>,
    pub error: ReadSignal<Option<String>>,
}

/// 商品一覧プロバイダ
///
/// 呼び出し（=マウント）ごとに外部APIを1回だけ読む。
/// 失敗時はコレクションを空のままエラーメッセージだけを立てる。
/// アンマウント後に届いたレスポンスはtry_setで破棄される。
pub fn use_products() -> ProductsState {
    let (products, set_products) = signal(Vec::<Product>::new());
    let (is_loading, set_is_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);

    spawn_local(async move {
        match api::products::fetch_products().await {
            Ok(list) => {
                set_products.try_set(list);
            }
            Err(err) => {
                let message = js_error_message(&err);
                gloo::console::error!("products load failed:", err);
                set_error.try_set(Some(message));
            }
        }
        set_is_loading.try_set(false);
    });

    ProductsState {
        products,
        is_loading,
        error,
    }
}

/// ユーザー一覧プロバイダ
pub fn use_users() -> UsersState {
    let (users, set_users) = signal(Vec::<User>::new());
    let (is_loading, set_is_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);

    spawn_local(async move {
        match api::users::fetch_users().await {
            Ok(list) => {
                set_users.try_set(list);
            }
            Err(err) => {
                let message = js_error_message(&err);
                gloo::console::error!("users load failed:", err);
                set_error.try_set(Some(message));
            }
        }
        set_is_loading.try_set(false);
    });

    UsersState {
        users,
        is_loading,
        error,
    }
}

/// JsValueのエラーを表示用メッセージへ変換
fn js_error_message(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

/// テーブルビューの排他的な描画状態
///
/// 優先順位: ローディング → エラー → 空 → 内容
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Loading,
    Failed(String),
    Empty,
    Ready,
}

impl ViewState {
    pub fn from_parts(is_loading: bool, error: Option<&str>, record_count: usize) -> Self {
        if is_loading {
            ViewState::Loading
        } else if let Some(message) = error {
            ViewState::Failed(message.to_string())
        } else if record_count == 0 {
            ViewState::Empty
        } else {
            ViewState::Ready
        }
    }
}
