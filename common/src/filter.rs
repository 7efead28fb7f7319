//! 検索フィルタエンジン
//!
//! レコードごとに検索用の合成テキストを作り、クエリ文字列の
//! 部分一致（大文字小文字無視）で絞り込む。クエリ変更のたびに
//! 元のコレクション全体に対して再計算し、元の順序を保つ。

use crate::normalize::{
    resolve_capacity, resolve_color, CPU_MODEL_FIELDS, DESCRIPTION_FIELDS, GENERATION_FIELDS,
    PRICE_FIELDS, STRAP_COLOUR_FIELDS,
};
use crate::types::{Product, User};

/// 商品1件分の検索対象テキスト
///
/// 商品名、解決済みの色と容量、および価格・世代・CPUモデル・
/// ストラップ色・説明の生フィールド（欠損は空文字）を連結して
/// 小文字化したもの。
pub fn searchable_text(product: &Product) -> String {
    let color = resolve_color(product);
    let capacity = resolve_capacity(product);
    let price = product.field(PRICE_FIELDS).unwrap_or_default();
    let generation = product.field(GENERATION_FIELDS).unwrap_or_default();
    let cpu_model = product.field(CPU_MODEL_FIELDS).unwrap_or_default();
    let strap_colour = product.field(STRAP_COLOUR_FIELDS).unwrap_or_default();
    let description = product.field(DESCRIPTION_FIELDS).unwrap_or_default();

    [
        product.name.as_str(),
        &color,
        &capacity,
        &price,
        &generation,
        &cpu_model,
        &strap_colour,
        &description,
    ]
    .join(" ")
    .to_lowercase()
}

/// 商品一覧をクエリで絞り込む
///
/// 空クエリは全件一致。一致したレコードの相対順序は入力のまま。
/// クエリの前後空白は削らない。
pub fn filter_products(products: &[Product], query: &str) -> Vec<Product> {
    let term = query.to_lowercase();
    products
        .iter()
        .filter(|product| searchable_text(product).contains(&term))
        .cloned()
        .collect()
}

/// ユーザー1件分の検索対象テキスト
pub fn user_searchable_text(user: &User) -> String {
    [
        user.name.as_str(),
        &user.username,
        &user.email,
        &user.company.name,
    ]
    .join(" ")
    .to_lowercase()
}

/// ユーザー一覧をクエリで絞り込む
///
/// 商品側と同じ部分一致セマンティクス
pub fn filter_users(users: &[User], query: &str) -> Vec<User> {
    let term = query.to_lowercase();
    users
        .iter()
        .filter(|user| user_searchable_text(user).contains(&term))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn product(id: &str, name: &str, data: serde_json::Value) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            data: data.as_object().cloned(),
        }
    }

    fn sample_products() -> Vec<Product> {
        vec![
            product("1", "iPhone 12 Gold 64GB", json!({"price": "389.99"})),
            product("2", "Galaxy Z Fold2", json!({"color": "Brown", "price": 689.99})),
            product(
                "3",
                "Beats Studio3",
                json!({"Color": "Blue", "Description": "Wireless noise cancelling headphones"}),
            ),
        ]
    }

    // =============================================
    // searchable_text テスト
    // =============================================

    #[test]
    fn test_searchable_text_contains_resolved_fields() {
        let p = product("1", "iPhone 12 Gold 64GB", json!({"price": "389.99"}));
        let text = searchable_text(&p);

        assert!(text.contains("iphone 12 gold 64gb"));
        assert!(text.contains("gold")); // 名前から解決した色
        assert!(text.contains("64gb")); // 名前から解決した容量
        assert!(text.contains("389.99"));
    }

    #[test]
    fn test_searchable_text_is_lowercase() {
        let p = product("3", "Beats Studio3", json!({"Color": "Blue"}));
        let text = searchable_text(&p);
        assert_eq!(text, text.to_lowercase());
    }

    // =============================================
    // filter_products テスト
    // =============================================

    #[test]
    fn test_filter_empty_query_matches_all() {
        let products = sample_products();
        let filtered = filter_products(&products, "");
        assert_eq!(filtered.len(), products.len());
    }

    #[test]
    fn test_filter_case_insensitive() {
        let products = sample_products();

        let lower = filter_products(&products, "gold");
        let upper = filter_products(&products, "GOLD");
        assert_eq!(lower.len(), 1);
        assert_eq!(lower[0].id, "1");
        assert_eq!(lower, upper);
    }

    #[test]
    fn test_filter_matches_description_field() {
        let products = sample_products();
        let filtered = filter_products(&products, "noise cancelling");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "3");
    }

    #[test]
    fn test_filter_matches_explicit_color_field() {
        let products = sample_products();
        let filtered = filter_products(&products, "brown");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "2");
    }

    #[test]
    fn test_filter_preserves_order() {
        let products = vec![
            product("1", "Red Widget", json!({})),
            product("2", "Plain Widget", json!({})),
            product("3", "Dark Red Widget", json!({})),
        ];

        let filtered = filter_products(&products, "red");
        let ids: Vec<&str> = filtered.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn test_filter_no_match() {
        let products = sample_products();
        let filtered = filter_products(&products, "zzz");
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_filter_does_not_mutate_input() {
        let products = sample_products();
        let before = products.clone();
        let _ = filter_products(&products, "gold");
        assert_eq!(products, before);
    }

    // =============================================
    // filter_users テスト
    // =============================================

    #[test]
    fn test_filter_users_by_email() {
        let users: Vec<User> = serde_json::from_str(
            r#"[
                {"id": 1, "name": "Leanne Graham", "username": "Bret", "email": "Sincere@april.biz"},
                {"id": 2, "name": "Ervin Howell", "username": "Antonette", "email": "Shanna@melissa.tv"}
            ]"#,
        )
        .expect("デシリアライズ失敗");

        let filtered = filter_users(&users, "melissa");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Ervin Howell");

        let all = filter_users(&users, "");
        assert_eq!(all.len(), 2);
    }
}
