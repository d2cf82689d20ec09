//! # アカウントユースケース
//!
//! アカウント作成とログイン検証のビジネスロジックを実装する。
//!
//! ## 既知の競合
//!
//! メールアドレスの重複チェック（事前検索）と挿入は別々のストア操作であり、
//! トランザクションではない。同じメールアドレスの作成リクエストが同時に
//! 到達した場合、両方がチェックを通過して重複レコードが生まれうる。
//! これは現行設計で受容された競合であり、ストア側の unique index による
//! 解消案は DESIGN.md に記録している。

use std::sync::Arc;

use userhub_domain::account::{AccountId, NewAccount};
use userhub_infra::AccountRepository;

use crate::error::AccountError;

/// ログイン検証の成功結果
///
/// セッションやトークンは発行しない。成功時に返すのは情報のみ。
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub id:        AccountId,
    pub full_name: String,
}

/// アカウントユースケースの実装
pub struct AccountUseCaseImpl {
    accounts: Arc<dyn AccountRepository>,
}

impl AccountUseCaseImpl {
    /// 新しいユースケースインスタンスを作成
    pub fn new(accounts: Arc<dyn AccountRepository>) -> Self {
        Self { accounts }
    }

    /// アカウントを作成する
    ///
    /// 1. メールアドレスの重複チェック（事前検索）
    /// 2. 挿入し、ストアが採番した識別子を返す
    ///
    /// 挿入は最後のステップであり、失敗時にロールバックすべきものはない。
    pub async fn create_account(
        &self,
        new_account: NewAccount,
    ) -> Result<AccountId, AccountError> {
        let email = new_account.email.as_str();

        if self.accounts.find_by_email(email).await?.is_some() {
            tracing::warn!(email, "登録済みメールアドレスでの作成リクエスト");
            return Err(AccountError::DuplicateEmail);
        }

        match self.accounts.insert(&new_account).await? {
            Some(id) => {
                tracing::info!(account_id = %id, "アカウントを作成しました");
                Ok(id)
            }
            None => {
                tracing::error!("ストアが挿入結果の識別子を報告しませんでした");
                Err(AccountError::PersistenceFailure)
            }
        }
    }

    /// ログインを検証する
    ///
    /// `username` はアカウントの氏名（`fullName`）。照合は保存された平文
    /// パスワードとの完全一致比較で行う（旧システムの契約を踏襲）。
    pub async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<LoginOutcome, AccountError> {
        let Some(account) = self.accounts.find_by_full_name(username).await? else {
            tracing::warn!(username, "アカウントが見つかりません");
            return Err(AccountError::AccountNotFound);
        };

        if account.password != password {
            tracing::warn!(username, "パスワード不一致");
            return Err(AccountError::InvalidCredentials);
        }

        tracing::info!(username, account_id = %account.id, "ログインに成功しました");
        Ok(LoginOutcome {
            id:        account.id,
            full_name: account.full_name,
        })
    }
}
