//! 取得レコードの型定義
//!
//! Web(WASM)フロントエンドと共有される型:
//! - Product: 商品エンドポイントのレコード（dataはスキーマ不定のマップ）
//! - User: ユーザーエンドポイントのレコード

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::Result;

/// 商品レコード
///
/// `data` はAPIがそのまま返すフィールドマップで、キーの命名も
/// 大文字小文字も統一されていない（`price`/`Price` など）。
/// スキーマを強制せず、論理属性ごとの候補キーで解決する。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub data: Option<Map<String, Value>>,
}

impl Product {
    /// 候補フィールド名を順に探し、最初に存在した値を文字列で返す
    ///
    /// 値が文字列ならそのまま、数値などは表示形へ変換する。
    /// nullは「存在しない」として次の候補へ進む。
    pub fn field(&self, candidates: &[&str]) -> Option<String> {
        let data = self.data.as_ref()?;
        candidates.iter().find_map(|key| get_string(data, key))
    }
}

fn get_string(map: &Map<String, Value>, key: &str) -> Option<String> {
    let value = map.get(key)?;
    if let Some(s) = value.as_str() {
        return Some(s.to_string());
    }
    if value.is_null() {
        return None;
    }
    Some(value.to_string())
}

/// ユーザーレコード
///
/// 欠損フィールドはデフォルト値で埋める（表示のみで検証はしない）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub address: Address,
    pub company: Company,
}

/// ユーザー住所
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    pub street: String,
    pub suite: String,
    pub city: String,
    pub zipcode: String,
}

/// ユーザー所属会社
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Company {
    pub name: String,
    pub catch_phrase: String,
    pub bs: String,
}

/// JSON文字列から商品一覧をパース
pub fn parse_products(json: &str) -> Result<Vec<Product>> {
    Ok(serde_json::from_str(json)?)
}

/// JSON文字列からユーザー一覧をパース
pub fn parse_users(json: &str) -> Result<Vec<User>> {
    Ok(serde_json::from_str(json)?)
}
