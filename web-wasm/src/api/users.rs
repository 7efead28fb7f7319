//! ユーザー一覧API連携

use product_dash_common::User;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

const USERS_API_URL: &str = "https://jsonplaceholder.typicode.com/users";

/// ユーザー一覧を取得
///
/// # Returns
/// * `Ok(Vec<User>)` - 取得とデコードに成功
/// * `Err` - 通信失敗、非2xx応答、デコード失敗のいずれか
pub async fn fetch_users() -> Result<Vec<User>, JsValue> {
    let mut opts = RequestInit::new();
    opts.method("GET");
    opts.mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(USERS_API_URL, &opts)?;

    let window = web_sys::window().unwrap();
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    if !resp.ok() {
        return Err(JsValue::from_str(&format!("API error: {}", resp.status())));
    }

    let json = JsFuture::from(resp.json()?).await?;
    let users: Vec<User> = serde_wasm_bindgen::from_value(json)?;

    Ok(users)
}
