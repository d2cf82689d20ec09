//! # Account Service エラー定義
//!
//! Account Service 固有のエラーと、HTTP レスポンスへの変換を定義する。
//!
//! ## ステータスの方針
//!
//! - クライアントが自分で修正できる条件 → 400 Bad Request
//! - サーバー/ストア側の障害 → 500 Internal Server Error
//!
//! `detail` 文字列は旧システムの外部契約をそのまま踏襲しており、
//! 変更してはならない。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use userhub_domain::DomainError;
use userhub_infra::InfraError;
use userhub_shared::ErrorResponse;

/// Account Service で発生するエラー
#[derive(Debug, Error)]
pub enum AccountError {
    /// メールアドレスが登録済み
    #[error("メールアドレスは登録済みです")]
    DuplicateEmail,

    /// ストアが挿入結果の識別子を報告しなかった
    #[error("アカウントの永続化に失敗しました")]
    PersistenceFailure,

    /// 指定された氏名のアカウントが存在しない
    #[error("アカウントが見つかりません")]
    AccountNotFound,

    /// パスワード不一致
    #[error("パスワードが一致しません")]
    InvalidCredentials,

    /// 入力値のバリデーションエラー
    #[error("バリデーションエラー: {0}")]
    Validation(#[from] DomainError),

    /// ドキュメントストアエラー
    #[error("ドキュメントストアエラー: {0}")]
    Infra(#[from] InfraError),
}

impl IntoResponse for AccountError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            AccountError::DuplicateEmail => (
                StatusCode::BAD_REQUEST,
                "Email already registered".to_string(),
            ),
            AccountError::PersistenceFailure => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to insert user data".to_string(),
            ),
            AccountError::AccountNotFound => (
                StatusCode::BAD_REQUEST,
                "User not found. Please check your username.".to_string(),
            ),
            AccountError::InvalidCredentials => (
                StatusCode::BAD_REQUEST,
                "Incorrect password. Please try again.".to_string(),
            ),
            AccountError::Validation(DomainError::Validation(msg)) => {
                (StatusCode::BAD_REQUEST, msg.clone())
            }
            AccountError::Infra(e) => {
                tracing::error!(span_trace = %e.span_trace(), "ドキュメントストアエラー: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Internal Server Error: {e}"),
                )
            }
        };

        (status, Json(ErrorResponse::new(detail))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_重複メールは400になる() {
        let response = AccountError::DuplicateEmail.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_永続化失敗は500になる() {
        let response = AccountError::PersistenceFailure.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_ログイン系エラーは400になる() {
        assert_eq!(
            AccountError::AccountNotFound.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AccountError::InvalidCredentials.into_response().status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_バリデーションエラーは400でメッセージを返す() {
        let err = AccountError::Validation(DomainError::Validation("氏名は必須です".to_string()));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_インフラエラーは500になる() {
        let err = AccountError::Infra(InfraError::unexpected("接続失敗"));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
