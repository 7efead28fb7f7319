//! 表示用フィールドの正規化
//!
//! APIのフィールド名は命名も大文字小文字も不統一なため、
//! 論理属性ごとの候補キーリストを先勝ちで解決する。
//! 明示フィールドが無い場合は商品名からの推定にフォールバックし、
//! それも無ければ "N/A" を返す。

use regex::Regex;

use crate::types::Product;

/// 色の候補フィールド名（先勝ち）
pub const COLOR_FIELDS: &[&str] = &["color", "Color"];
/// 容量の候補フィールド名（先勝ち）
pub const CAPACITY_FIELDS: &[&str] = &["capacity", "capacity GB", "Capacity"];
/// 価格の候補フィールド名（先勝ち）
pub const PRICE_FIELDS: &[&str] = &["price", "Price"];
/// 世代の候補フィールド名（先勝ち）
pub const GENERATION_FIELDS: &[&str] = &["generation", "Generation"];
/// CPUモデルの候補フィールド名
pub const CPU_MODEL_FIELDS: &[&str] = &["CPU model"];
/// ストラップ色の候補フィールド名
pub const STRAP_COLOUR_FIELDS: &[&str] = &["Strap Colour"];
/// 商品説明の候補フィールド名
pub const DESCRIPTION_FIELDS: &[&str] = &["Description"];

/// 表示用の派生フィールド
///
/// レンダリング時に計算されるだけで永続化はしない
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedFields {
    pub color: String,
    pub capacity: String,
    pub price: String,
    pub generation: String,
    pub cpu_model: String,
}

/// 商品名から色を推定
///
/// 固定語彙の最初の単語一致（大文字小文字無視）を返す。
/// 一致した部分の元の表記を保持する。
pub fn extract_color_from_name(name: &str) -> Option<&str> {
    lazy_static::lazy_static! {
        static ref COLOR_RE: Regex = Regex::new(
            r"(?i)\b(black|white|blue|red|green|gold|silver|purple|brown|cloudy white|elderberry)\b"
        ).unwrap();
    }

    COLOR_RE.find(name).map(|m| m.as_str())
}

/// 商品名から容量を推定
///
/// 整数 + 空白(省略可) + GB/TB の最初の一致を返す（例: "256GB", "1 TB"）
pub fn extract_capacity_from_name(name: &str) -> Option<&str> {
    lazy_static::lazy_static! {
        static ref CAPACITY_RE: Regex = Regex::new(r"(?i)\d+\s?(GB|TB)").unwrap();
    }

    CAPACITY_RE.find(name).map(|m| m.as_str())
}

/// 色を解決
///
/// 優先順位: 明示フィールド → 商品名からの推定 → "N/A"
pub fn resolve_color(product: &Product) -> String {
    product
        .field(COLOR_FIELDS)
        .or_else(|| extract_color_from_name(&product.name).map(str::to_string))
        .unwrap_or_else(|| "N/A".to_string())
}

/// 容量を解決
///
/// 優先順位: 明示フィールド → 商品名からの推定 → "N/A"
pub fn resolve_capacity(product: &Product) -> String {
    product
        .field(CAPACITY_FIELDS)
        .or_else(|| extract_capacity_from_name(&product.name).map(str::to_string))
        .unwrap_or_else(|| "N/A".to_string())
}

/// 価格を表示用にフォーマット
///
/// 小数2桁 + 先頭に通貨記号（例: "$19.50"）。
/// フィールドが無い場合と数値にパースできない場合は "N/A"。
pub fn format_price(product: &Product) -> String {
    product
        .field(PRICE_FIELDS)
        .and_then(|raw| raw.trim().parse::<f64>().ok())
        .map(|value| format!("${:.2}", value))
        .unwrap_or_else(|| "N/A".to_string())
}

/// 1レコード分の派生フィールドを計算
///
/// 副作用なし。同じレコードに2回適用しても同じ結果になる。
pub fn derive_fields(product: &Product) -> DerivedFields {
    DerivedFields {
        color: resolve_color(product),
        capacity: resolve_capacity(product),
        price: format_price(product),
        generation: product
            .field(GENERATION_FIELDS)
            .unwrap_or_else(|| "N/A".to_string()),
        cpu_model: product
            .field(CPU_MODEL_FIELDS)
            .unwrap_or_else(|| "N/A".to_string()),
    }
}
