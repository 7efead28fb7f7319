//! 商品一覧API連携
//!
//! 固定エンドポイントへの1回のGETで商品コレクションを取得する。
//! リトライもキャンセルも行わない。

use product_dash_common::Product;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

const PRODUCTS_API_URL: &str = "https://api.restful-api.dev/objects";

/// 商品一覧を取得
///
/// # Returns
/// * `Ok(Vec<Product>)` - 取得とデコードに成功
/// * `Err` - 通信失敗、非2xx応答、デコード失敗のいずれか
pub async fn fetch_products() -> Result<Vec<Product>, JsValue> {
    let mut opts = RequestInit::new();
    opts.method("GET");
    opts.mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(PRODUCTS_API_URL, &opts)?;

    let window = web_sys::window().unwrap();
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    if !resp.ok() {
        return Err(JsValue::from_str(&format!("API error: {}", resp.status())));
    }

    let json = JsFuture::from(resp.json()?).await?;
    let products: Vec<Product> = serde_wasm_bindgen::from_value(json)?;

    Ok(products)
}
