//! # Account Service 設定
//!
//! 環境変数から Account Service サーバーの設定を読み込む。

use std::env;

/// Account Service サーバーの設定
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// バインドアドレス
    pub host:             String,
    /// ポート番号
    pub port:             u16,
    /// MongoDB 接続 URL
    pub mongodb_url:      String,
    /// データベース名
    pub mongodb_database: String,
}

impl AppConfig {
    /// 環境変数から設定を読み込む
    ///
    /// すべての変数にデフォルト値があるため、未設定でも起動できる。
    /// `PORT` のデフォルトは 8000（旧システムと同じ）。
    pub fn from_env() -> Self {
        Self {
            host:             env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port:             env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .expect("PORT は有効なポート番号である必要があります"),
            mongodb_url:      env::var("MONGODB_URL")
                .unwrap_or_else(|_| "mongodb://localhost:27017/".to_string()),
            mongodb_database: env::var("MONGODB_DATABASE")
                .unwrap_or_else(|_| "user_database".to_string()),
        }
    }
}
