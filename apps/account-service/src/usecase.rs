//! # ユースケース層
//!
//! Account Service のビジネスロジックを実装する。
//!
//! ## 設計方針
//!
//! - **トレイトベースの設計**: テスト可能性のためトレイトを定義
//! - **依存性注入**: リポジトリを外部から注入
//! - **薄いハンドラ**: ハンドラは薄く保ち、ロジックはユースケースに集約

pub mod account;

pub use account::{AccountUseCaseImpl, LoginOutcome};
use async_trait::async_trait;
use userhub_domain::account::{AccountId, NewAccount};

use crate::error::AccountError;

/// アカウントユースケーストレイト
///
/// Account Service のビジネスロジックを定義する。
/// 具体的な実装は `AccountUseCaseImpl` で提供される。
#[async_trait]
pub trait AccountUseCase: Send + Sync {
    /// アカウントを作成する
    ///
    /// ## 戻り値
    ///
    /// - `Ok(AccountId)`: ストアが採番した識別子
    /// - `Err(AccountError)`: 重複メール、永続化失敗、ストアエラー
    async fn create_account(&self, new_account: NewAccount) -> Result<AccountId, AccountError>;

    /// ログインを検証する
    ///
    /// ## 引数
    ///
    /// - `username`: アカウントの氏名（外部 API のフィールド名を踏襲）
    /// - `password`: 平文パスワード
    ///
    /// ## 戻り値
    ///
    /// - `Ok(LoginOutcome)`: 識別子と氏名
    /// - `Err(AccountError)`: アカウント不在、パスワード不一致、ストアエラー
    async fn login(&self, username: &str, password: &str) -> Result<LoginOutcome, AccountError>;
}

/// AccountUseCaseImpl に AccountUseCase トレイトを実装
#[async_trait]
impl AccountUseCase for AccountUseCaseImpl {
    async fn create_account(&self, new_account: NewAccount) -> Result<AccountId, AccountError> {
        self.create_account(new_account).await
    }

    async fn login(&self, username: &str, password: &str) -> Result<LoginOutcome, AccountError> {
        self.login(username, password).await
    }
}
