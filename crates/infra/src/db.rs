//! # MongoDB 接続管理
//!
//! ドキュメントストアへのクライアント構築と疎通確認を行う。
//!
//! ## 設計方針
//!
//! - **クライアント共有**: 起動時に一度だけ構築し、アプリケーション全体で共有
//! - **ドライバ任せのプーリング**: 接続プールとスレッド安全性は mongodb
//!   ドライバが管理する。ここでは構築と疎通確認のみを提供する
//! - **明示的なライフサイクル**: グローバル変数は使わず、`main`
//!   が構築したハンドルを各コンポーネントに注入する
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use userhub_infra::db;
//!
//! async fn example() -> Result<(), mongodb::error::Error> {
//!     let client = db::create_client("mongodb://localhost:27017/").await?;
//!     let database = client.database("user_database");
//!     db::ping(&database).await?;
//!     Ok(())
//! }
//! ```

use mongodb::{Client, Database, bson::doc};

/// MongoDB クライアントを作成する
///
/// アプリケーション起動時に一度だけ呼び出し、作成したクライアントを
/// アプリケーション全体で共有する。実際の TCP 接続は遅延確立されるため、
/// この関数の成功は疎通を保証しない（疎通確認は [`ping`] を使う）。
///
/// # 引数
///
/// * `url` - MongoDB 接続 URL（形式: `mongodb://host:port/`）
pub async fn create_client(url: &str) -> Result<Client, mongodb::error::Error> {
    Client::with_uri_str(url).await
}

/// ドキュメントストアへの疎通を確認する
///
/// `ping` コマンドを実行し、サーバーが応答することを確認する。
/// 起動時の接続確認と Readiness Check の両方から呼び出される。
pub async fn ping(database: &Database) -> Result<(), mongodb::error::Error> {
    database.run_command(doc! { "ping": 1 }).await?;
    Ok(())
}
