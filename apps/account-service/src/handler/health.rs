//! # ヘルスチェックハンドラ
//!
//! Account Service の稼働状態を確認するためのエンドポイント。
//!
//! - `/health` — Liveness Check（常に `"healthy"` を返す）
//! - `/health/ready` — Readiness Check（ドキュメントストアへの疎通を確認）
//!
//! レスポンス型は [`userhub_shared::HealthResponse`] /
//! [`userhub_shared::health::ReadinessResponse`] を参照。

use std::{collections::HashMap, sync::Arc, time::Duration};

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use userhub_infra::db;
use userhub_shared::{
    HealthResponse,
    health::{CheckStatus, ReadinessResponse, ReadinessStatus},
};

/// Account Service のヘルスチェックエンドポイント
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status:  "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Readiness Check 用の State
pub struct ReadinessState {
    pub database: mongodb::Database,
}

/// Account Service の Readiness Check エンドポイント
///
/// ドキュメントストアへの疎通を確認する。
/// チェック OK → 200、失敗 → 503。
#[tracing::instrument(skip_all)]
pub async fn readiness_check(State(state): State<Arc<ReadinessState>>) -> impl IntoResponse {
    let database_status = check_database(&state.database).await;

    let mut checks = HashMap::new();
    checks.insert("database".to_string(), database_status.clone());

    let all_ok = matches!(database_status, CheckStatus::Ok);
    let status = if all_ok {
        ReadinessStatus::Ready
    } else {
        ReadinessStatus::NotReady
    };
    let http_status = if all_ok {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (http_status, Json(ReadinessResponse { status, checks }))
}

/// ドキュメントストアへの疎通を ping で確認する（タイムアウト: 5 秒）
async fn check_database(database: &mongodb::Database) -> CheckStatus {
    match tokio::time::timeout(Duration::from_secs(5), db::ping(database)).await {
        Ok(Ok(())) => CheckStatus::Ok,
        Ok(Err(e)) => {
            tracing::warn!(error = %e, "readiness check: mongodb ping failed");
            CheckStatus::Error
        }
        Err(_) => {
            tracing::warn!("readiness check: mongodb ping timed out");
            CheckStatus::Error
        }
    }
}
