//! # アカウントハンドラ
//!
//! Account Service のアカウント関連エンドポイントを提供する。
//!
//! ## エンドポイント
//!
//! - `POST /create-account` - アカウント作成
//! - `POST /login` - ログイン検証
//!
//! ## 外部契約の注意点
//!
//! - リクエストのフィールド名は旧システムの camelCase（`fullName`）を踏襲する
//! - ログインの `username` フィールドはアカウントの氏名（`fullName`）を指す。
//!   別個のユーザー名属性は存在しない（命名の不整合だが互換性のため保持）
//! - 成功時レスポンスの `user_id` はストアが採番した識別子の文字列表現

use std::sync::Arc;

use axum::{Json, extract::State, response::IntoResponse};
use serde::{Deserialize, Serialize};
use userhub_domain::account::NewAccount;

use crate::{error::AccountError, usecase::AccountUseCase};

/// アカウントハンドラの共有状態
pub struct AccountState {
    pub usecase: Arc<dyn AccountUseCase>,
}

// --- リクエスト/レスポンス型 ---

/// アカウント作成リクエスト
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountRequest {
    pub full_name: String,
    pub email:     String,
    pub password:  String,
    pub cnic:      String,
    pub city:      String,
    pub contact:   String,
}

/// アカウント作成レスポンス
#[derive(Debug, Serialize)]
pub struct CreateAccountResponse {
    pub message: String,
    pub user_id: String,
}

/// ログインリクエスト
///
/// `username` はアカウントの氏名（`fullName`）。
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// ログインレスポンス
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message:   String,
    pub user_id:   String,
    #[serde(rename = "fullName")]
    pub full_name: String,
}

// --- ハンドラ ---

/// POST /create-account
///
/// アカウントを作成する。バリデーション → 重複チェック → 挿入の順に進み、
/// 最初に失敗したチェックでエラーレスポンスを返す。
pub async fn create_account(
    State(state): State<Arc<AccountState>>,
    Json(req): Json<CreateAccountRequest>,
) -> Result<impl IntoResponse, AccountError> {
    let new_account = NewAccount::new(
        req.full_name,
        req.email,
        req.password,
        req.cnic,
        req.city,
        req.contact,
    )?;

    // NewAccount の Debug はパスワードをマスクする
    tracing::info!(account = ?new_account, "アカウント作成リクエストを受信しました");

    let id = state.usecase.create_account(new_account).await?;

    Ok(Json(CreateAccountResponse {
        message: "Account created successfully".to_string(),
        user_id: id.into_string(),
    }))
}

/// POST /login
///
/// ログインを検証する。セッションやクッキーは発行せず、
/// 成功時は識別子と氏名のみを返す。
pub async fn login(
    State(state): State<Arc<AccountState>>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, AccountError> {
    tracing::info!(username = %req.username, "ログインリクエストを受信しました");

    let outcome = state.usecase.login(&req.username, &req.password).await?;

    Ok(Json(LoginResponse {
        message:   "Logged in successfully".to_string(),
        user_id:   outcome.id.into_string(),
        full_name: outcome.full_name,
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::{
        Router,
        body::Body,
        http::{Method, Request, StatusCode},
        routing::post,
    };
    use pretty_assertions::assert_eq;
    use tower::ServiceExt;
    use userhub_domain::account::AccountId;

    use super::*;
    use crate::usecase::LoginOutcome;

    // テスト用スタブ
    enum StubBehavior {
        Success,
        DuplicateEmail,
        PersistenceFailure,
        AccountNotFound,
        InvalidCredentials,
    }

    struct StubAccountUseCase {
        behavior: StubBehavior,
    }

    #[async_trait]
    impl AccountUseCase for StubAccountUseCase {
        async fn create_account(
            &self,
            _new_account: NewAccount,
        ) -> Result<AccountId, AccountError> {
            match self.behavior {
                StubBehavior::DuplicateEmail => Err(AccountError::DuplicateEmail),
                StubBehavior::PersistenceFailure => Err(AccountError::PersistenceFailure),
                _ => Ok(AccountId::new("650c5f7e9b1e8a3f4c2d1a00")),
            }
        }

        async fn login(
            &self,
            _username: &str,
            _password: &str,
        ) -> Result<LoginOutcome, AccountError> {
            match self.behavior {
                StubBehavior::AccountNotFound => Err(AccountError::AccountNotFound),
                StubBehavior::InvalidCredentials => Err(AccountError::InvalidCredentials),
                _ => Ok(LoginOutcome {
                    id:        AccountId::new("650c5f7e9b1e8a3f4c2d1a00"),
                    full_name: "Alice Khan".to_string(),
                }),
            }
        }
    }

    fn create_test_app(behavior: StubBehavior) -> Router {
        let state = Arc::new(AccountState {
            usecase: Arc::new(StubAccountUseCase { behavior }),
        });

        Router::new()
            .route("/create-account", post(create_account))
            .route("/login", post(login))
            .with_state(state)
    }

    fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap()
    }

    fn create_account_body() -> serde_json::Value {
        serde_json::json!({
            "fullName": "Alice Khan",
            "email": "alice@example.com",
            "password": "secret123",
            "cnic": "42101-1234567-1",
            "city": "Karachi",
            "contact": "+92-300-1234567"
        })
    }

    async fn response_json(response: axum::response::Response) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    // ===== POST /create-account =====

    #[tokio::test]
    async fn test_create_account_成功() {
        // Given
        let sut = create_test_app(StubBehavior::Success);

        // When
        let response = sut
            .oneshot(post_json("/create-account", create_account_body()))
            .await
            .unwrap();

        // Then
        assert_eq!(response.status(), StatusCode::OK);

        let json = response_json(response).await;
        assert_eq!(json["message"], "Account created successfully");
        assert_eq!(json["user_id"], "650c5f7e9b1e8a3f4c2d1a00");
    }

    #[tokio::test]
    async fn test_create_account_重複メールで400になる() {
        // Given
        let sut = create_test_app(StubBehavior::DuplicateEmail);

        // When
        let response = sut
            .oneshot(post_json("/create-account", create_account_body()))
            .await
            .unwrap();

        // Then
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = response_json(response).await;
        assert_eq!(json["detail"], "Email already registered");
    }

    #[tokio::test]
    async fn test_create_account_永続化失敗で500になる() {
        // Given
        let sut = create_test_app(StubBehavior::PersistenceFailure);

        // When
        let response = sut
            .oneshot(post_json("/create-account", create_account_body()))
            .await
            .unwrap();

        // Then
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json = response_json(response).await;
        assert_eq!(json["detail"], "Failed to insert user data");
    }

    #[tokio::test]
    async fn test_create_account_空の氏名で400になる() {
        // Given
        let sut = create_test_app(StubBehavior::Success);
        let mut body = create_account_body();
        body["fullName"] = serde_json::json!("");

        // When
        let response = sut
            .oneshot(post_json("/create-account", body))
            .await
            .unwrap();

        // Then: バリデーションで弾かれ、ユースケースには到達しない
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    // ===== POST /login =====

    #[tokio::test]
    async fn test_login_成功() {
        // Given
        let sut = create_test_app(StubBehavior::Success);

        let body = serde_json::json!({
            "username": "Alice Khan",
            "password": "secret123"
        });

        // When
        let response = sut.oneshot(post_json("/login", body)).await.unwrap();

        // Then
        assert_eq!(response.status(), StatusCode::OK);

        let json = response_json(response).await;
        assert_eq!(json["message"], "Logged in successfully");
        assert_eq!(json["user_id"], "650c5f7e9b1e8a3f4c2d1a00");
        assert_eq!(json["fullName"], "Alice Khan");
    }

    #[tokio::test]
    async fn test_login_アカウント不在で400になる() {
        // Given
        let sut = create_test_app(StubBehavior::AccountNotFound);

        let body = serde_json::json!({
            "username": "Nobody",
            "password": "secret123"
        });

        // When
        let response = sut.oneshot(post_json("/login", body)).await.unwrap();

        // Then
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = response_json(response).await;
        assert_eq!(json["detail"], "User not found. Please check your username.");
    }

    #[tokio::test]
    async fn test_login_パスワード不一致で400になる() {
        // Given
        let sut = create_test_app(StubBehavior::InvalidCredentials);

        let body = serde_json::json!({
            "username": "Alice Khan",
            "password": "wrongpassword"
        });

        // When
        let response = sut.oneshot(post_json("/login", body)).await.unwrap();

        // Then
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = response_json(response).await;
        assert_eq!(json["detail"], "Incorrect password. Please try again.");
    }
}
