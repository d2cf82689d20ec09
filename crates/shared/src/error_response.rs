//! # エラーレスポンス
//!
//! 全エンドポイントで共通のエラーレスポンス構造体を提供する。
//!
//! ## 設計
//!
//! - `ErrorResponse` は純粋なデータ構造（`Serialize` / `Deserialize` のみ）
//! - axum の `IntoResponse` 変換はサービス側の責務（shared に axum 依存を入れない）
//! - 外部契約上、機械可読なエラーコードは HTTP ステータス以外に持たない。
//!   ボディは人間可読な `detail` 文字列のみを運ぶ

use serde::{Deserialize, Serialize};

/// エラーレスポンス
///
/// すべてのエラーは HTTP ステータスと `detail` 文字列の組で表現される。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl ErrorResponse {
    /// エラーレスポンスを作成する
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jsonシリアライズでdetailのみを含む() {
        let error = ErrorResponse::new("Email already registered");
        let json = serde_json::to_value(&error).unwrap();

        assert_eq!(json, serde_json::json!({ "detail": "Email already registered" }));
    }

    #[test]
    fn test_jsonデシリアライズが正しく動作する() {
        let json = r#"{ "detail": "User not found. Please check your username." }"#;
        let error: ErrorResponse = serde_json::from_str(json).unwrap();

        assert_eq!(error.detail, "User not found. Please check your username.");
    }
}
