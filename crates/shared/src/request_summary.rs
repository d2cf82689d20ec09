//! # リクエストサマリログミドルウェア
//!
//! HTTP リクエスト完了時に、そのリクエストの重要情報を 1 行に集約した
//! サマリログを出力する tower Layer。
//!
//! [Canonical Log Lines パターン](https://brandur.org/canonical-log-lines)
//! に基づき、ログの検索性・集計性を向上させる。
//!
//! ## TraceLayer との責務分離
//!
//! - TraceLayer: スパン作成（method, uri 等）。リクエストスコープのコンテキスト管理
//! - RequestSummaryLayer: リクエスト完了サマリ（status, latency）。1 行で全体像を提供
//!
//! ヘルスチェックパス（`/health` 配下）は出力対象外。

use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
    time::Instant,
};

use http::{Request, Response};
use tower::{Layer, Service};

/// ヘルスチェックパスかどうかを判定する
fn is_health_check_path(path: &str) -> bool {
    path.starts_with("/health")
}

/// リクエストサマリログを出力する Layer
///
/// リクエスト完了時に INFO レベルで `log.type = "summary"` マーカー付きの
/// サマリログを出力する。
#[derive(Clone, Debug)]
pub struct RequestSummaryLayer;

impl<S> Layer<S> for RequestSummaryLayer {
    type Service = RequestSummaryService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        RequestSummaryService { inner }
    }
}

/// [`RequestSummaryLayer`] が生成する Service 実装
#[derive(Clone, Debug)]
pub struct RequestSummaryService<S> {
    inner: S,
}

impl<S, ReqBody, ResBody> Service<Request<ReqBody>> for RequestSummaryService<S>
where
    S: Service<Request<ReqBody>, Response = Response<ResBody>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    S::Error: std::fmt::Display + 'static,
    ReqBody: Send + 'static,
    ResBody: Send + 'static,
{
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;
    type Response = S::Response;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<ReqBody>) -> Self::Future {
        // clone-swap パターン: poll_ready で得た readiness を保持する inner を使う
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);

        let method = req.method().to_string();
        let path = req.uri().path().to_owned();

        // ヘルスチェックはスキップ
        if is_health_check_path(&path) {
            return Box::pin(async move { inner.call(req).await });
        }

        let start = Instant::now();

        Box::pin(async move {
            let result = inner.call(req).await;
            let latency_ms = start.elapsed().as_millis() as u64;

            match &result {
                Ok(response) => {
                    tracing::info!(
                        log.r#type = "summary",
                        http.method = %method,
                        http.path = %path,
                        http.status_code = response.status().as_u16(),
                        http.latency_ms = latency_ms,
                        "リクエスト完了"
                    );
                }
                Err(err) => {
                    tracing::error!(
                        log.r#type = "summary",
                        http.method = %method,
                        http.path = %path,
                        http.latency_ms = latency_ms,
                        error.message = %err,
                        "リクエスト処理エラー"
                    );
                }
            }

            result
        })
    }
}
