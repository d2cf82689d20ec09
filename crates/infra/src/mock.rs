//! # テスト用モックリポジトリ
//!
//! ユースケーステストで使用するインメモリモックリポジトリ。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! userhub-infra = { workspace = true, features = ["test-utils"] }
//! ```

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use userhub_domain::account::{Account, AccountId, NewAccount};

use crate::{error::InfraError, repository::AccountRepository};

// ===== MockAccountRepository =====

/// インメモリ実装の AccountRepository
///
/// 実際のドキュメントストアと同様に、挿入時に ObjectId 形式の識別子を
/// 採番する。重複チェックは行わない（本物のストアと同じく、一意性は
/// 呼び出し側の事前検索に委ねられる）。
#[derive(Clone, Default)]
pub struct MockAccountRepository {
    accounts: Arc<Mutex<Vec<Account>>>,
}

impl MockAccountRepository {
    pub fn new() -> Self {
        Self {
            accounts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// 保存済みレコードを直接追加する（テストの前提条件構築用）
    pub fn add_account(&self, account: Account) {
        self.accounts.lock().unwrap().push(account);
    }

    /// 保存済みレコード数を返す
    ///
    /// 「失敗したリクエストがストアを変更しない」ことの検証に使用する。
    pub fn record_count(&self) -> usize {
        self.accounts.lock().unwrap().len()
    }
}

#[async_trait]
impl AccountRepository for MockAccountRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, InfraError> {
        Ok(self
            .accounts
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.email == email)
            .cloned())
    }

    async fn find_by_full_name(&self, full_name: &str) -> Result<Option<Account>, InfraError> {
        Ok(self
            .accounts
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.full_name == full_name)
            .cloned())
    }

    async fn insert(&self, account: &NewAccount) -> Result<Option<AccountId>, InfraError> {
        let id = AccountId::new(ObjectId::new().to_hex());

        self.accounts.lock().unwrap().push(Account {
            id:        id.clone(),
            full_name: account.full_name.as_str().to_string(),
            email:     account.email.as_str().to_string(),
            password:  account.password.as_str().to_string(),
            cnic:      account.cnic.as_str().to_string(),
            city:      account.city.as_str().to_string(),
            contact:   account.contact.as_str().to_string(),
        });

        Ok(Some(id))
    }

    async fn find_by_id(&self, id: &AccountId) -> Result<Option<Account>, InfraError> {
        Ok(self
            .accounts
            .lock()
            .unwrap()
            .iter()
            .find(|a| &a.id == id)
            .cloned())
    }
}
