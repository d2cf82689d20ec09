//! # Account Service サーバー
//!
//! アカウント作成とログイン検証を担当する HTTP API サーバー。
//!
//! ## 役割
//!
//! 2 つのエンドポイントをドキュメントストアへの 2 つのクエリに対応付ける
//! 薄いグルーレイヤー:
//!
//! - **アカウント作成**: メールアドレスの重複チェック後にレコードを挿入
//! - **ログイン検証**: 氏名でレコードを検索し、平文パスワードを照合
//!
//! セッション管理・トークン発行・パスワードハッシュ化は行わない
//! （旧システムの外部契約を踏襲。DESIGN.md 参照）。
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `PORT` | No | ポート番号（デフォルト: `8000`） |
//! | `MONGODB_URL` | No | MongoDB 接続 URL（デフォルト: `mongodb://localhost:27017/`） |
//! | `MONGODB_DATABASE` | No | データベース名（デフォルト: `user_database`） |
//! | `LOG_FORMAT` | No | ログ出力形式（`json` / `pretty`） |
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境
//! cargo run -p userhub-account-service
//!
//! # 本番環境
//! PORT=8000 MONGODB_URL=mongodb://... cargo run -p userhub-account-service --release
//! ```

mod config;
mod error;
mod handler;
mod usecase;

use std::{net::SocketAddr, sync::Arc};

use axum::{
    Router,
    routing::{get, post},
};
use config::AppConfig;
use handler::{
    AccountState,
    ReadinessState,
    create_account,
    health_check,
    login,
    readiness_check,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use userhub_infra::{AccountRepository, MongoAccountRepository, db};
use userhub_shared::{observability::TracingConfig, request_summary::RequestSummaryLayer};
use usecase::AccountUseCaseImpl;

/// Account Service サーバーのエントリーポイント
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    // トレーシング初期化
    let tracing_config = TracingConfig::from_env("account-service");
    userhub_shared::observability::init_tracing(tracing_config);
    let _tracing_guard = tracing::info_span!("app", service = "account-service").entered();

    // 設定読み込み
    let config = AppConfig::from_env();

    tracing::info!(
        "Account Service サーバーを起動します: {}:{}",
        config.host,
        config.port
    );

    // ドキュメントストアクライアントを作成
    let client = db::create_client(&config.mongodb_url)
        .await
        .expect("MongoDB クライアントの作成に失敗しました");
    let database = client.database(&config.mongodb_database);

    // 起動時の疎通確認。失敗してもサーバーは起動する（Readiness Check が検知する）
    match db::ping(&database).await {
        Ok(()) => tracing::info!(
            "ドキュメントストアに接続しました: {}",
            config.mongodb_database
        ),
        Err(e) => tracing::warn!(error = %e, "起動時のドキュメントストア疎通確認に失敗しました"),
    }

    // Readiness Check 用 State
    let readiness_state = Arc::new(ReadinessState {
        database: database.clone(),
    });

    // 依存コンポーネントを初期化（リポジトリはここで一度だけ構築して注入する）
    let account_repo: Arc<dyn AccountRepository> =
        Arc::new(MongoAccountRepository::new(&database));
    let account_usecase = AccountUseCaseImpl::new(account_repo);
    let account_state = Arc::new(AccountState {
        usecase: Arc::new(account_usecase),
    });

    // ルーター構築
    let app = Router::new()
        .route("/health", get(health_check))
        .merge(
            Router::new()
                .route("/health/ready", get(readiness_check))
                .with_state(readiness_state),
        )
        .route("/create-account", post(create_account))
        .route("/login", post(login))
        .with_state(account_state)
        .layer(RequestSummaryLayer)
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .expect("アドレスのパースに失敗しました");

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Account Service サーバーが起動しました: {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
