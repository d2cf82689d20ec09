//! # AccountRepository
//!
//! アカウントレコードの永続化を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **コレクション**: `users` コレクションにアカウントドキュメントを保存
//! - **採番はストア任せ**: `_id`（ObjectId）はドライバ/サーバーが生成し、
//!   アプリケーションは挿入結果から受け取るのみ
//! - **一意性はアプリケーション層**: メールアドレスの重複チェックは
//!   ユースケース層の事前検索で行う（ストア側の unique index は張らない）
//!
//! ## ドキュメント形式
//!
//! 旧システムとの互換のため、フィールド名は camelCase の `fullName` を含む:
//!
//! ```json
//! {
//!   "_id": ObjectId("..."),
//!   "fullName": "Alice Khan",
//!   "email": "alice@example.com",
//!   "password": "secret123",
//!   "cnic": "42101-1234567-1",
//!   "city": "Karachi",
//!   "contact": "+92-300-1234567"
//! }
//! ```

use async_trait::async_trait;
use mongodb::{
    Collection, Database,
    bson::{doc, oid::ObjectId},
};
use serde::{Deserialize, Serialize};
use userhub_domain::account::{Account, AccountId, NewAccount};

use crate::error::InfraError;

/// アカウントドキュメントを保存するコレクション名
const COLLECTION_NAME: &str = "users";

/// ドキュメントストア上のアカウント表現
///
/// `_id` は挿入時には `None`（サーバー採番）、読み出し時には必ず `Some`。
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct AccountDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub(crate) id:        Option<ObjectId>,
    #[serde(rename = "fullName")]
    pub(crate) full_name: String,
    pub(crate) email:     String,
    pub(crate) password:  String,
    pub(crate) cnic:      String,
    pub(crate) city:      String,
    pub(crate) contact:   String,
}

impl AccountDocument {
    /// 作成ペイロードから挿入用ドキュメントを組み立てる
    fn from_new_account(account: &NewAccount) -> Self {
        Self {
            id:        None,
            full_name: account.full_name.as_str().to_string(),
            email:     account.email.as_str().to_string(),
            password:  account.password.as_str().to_string(),
            cnic:      account.cnic.as_str().to_string(),
            city:      account.city.as_str().to_string(),
            contact:   account.contact.as_str().to_string(),
        }
    }

    /// ドキュメントをドメインエンティティに変換する
    ///
    /// 読み出したドキュメントに `_id` がない場合は予期しない状態として
    /// エラーを返す。
    fn into_account(self) -> Result<Account, InfraError> {
        let Some(id) = self.id else {
            return Err(InfraError::unexpected(
                "読み出したアカウントドキュメントに _id がありません",
            ));
        };

        Ok(Account {
            id:        AccountId::new(id.to_hex()),
            full_name: self.full_name,
            email:     self.email,
            password:  self.password,
            cnic:      self.cnic,
            city:      self.city,
            contact:   self.contact,
        })
    }
}

/// アカウントリポジトリトレイト
///
/// アカウントの永続化操作を定義する。
/// インフラ層で具体的な実装を提供し、ユースケース層から利用する。
/// 更新・削除操作は仕様上存在しないため定義しない。
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// メールアドレスでアカウントを検索する
    ///
    /// アカウント作成時の重複チェックに使用する。
    ///
    /// # 戻り値
    ///
    /// - `Ok(Some(account))`: 同じメールアドレスのレコードが存在する
    /// - `Ok(None)`: 存在しない
    /// - `Err(_)`: ストアエラー
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, InfraError>;

    /// 氏名でアカウントを検索する
    ///
    /// ログイン時の照合に使用する。外部 API のフィールド名は `username` だが、
    /// 照合キーはレコードの `fullName` である。
    async fn find_by_full_name(&self, full_name: &str) -> Result<Option<Account>, InfraError>;

    /// アカウントを挿入する
    ///
    /// # 戻り値
    ///
    /// - `Ok(Some(id))`: 挿入に成功し、ストアが識別子を採番した
    /// - `Ok(None)`: ドライバが識別子を報告しなかった（呼び出し側で
    ///   永続化失敗として扱う）
    /// - `Err(_)`: ストアエラー
    async fn insert(&self, account: &NewAccount) -> Result<Option<AccountId>, InfraError>;

    /// 識別子でアカウントを取得する
    ///
    /// 採番された識別子からレコードを引き直す。識別子がこのストアの
    /// 形式でない場合は `Ok(None)` を返す。
    async fn find_by_id(&self, id: &AccountId) -> Result<Option<Account>, InfraError>;
}

/// MongoDB 実装の AccountRepository
#[derive(Debug, Clone)]
pub struct MongoAccountRepository {
    collection: Collection<AccountDocument>,
}

impl MongoAccountRepository {
    /// 新しいリポジトリインスタンスを作成する
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(COLLECTION_NAME),
        }
    }
}

#[async_trait]
impl AccountRepository for MongoAccountRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, InfraError> {
        let document = self
            .collection
            .find_one(doc! { "email": email })
            .await?;

        document.map(AccountDocument::into_account).transpose()
    }

    async fn find_by_full_name(&self, full_name: &str) -> Result<Option<Account>, InfraError> {
        let document = self
            .collection
            .find_one(doc! { "fullName": full_name })
            .await?;

        document.map(AccountDocument::into_account).transpose()
    }

    async fn insert(&self, account: &NewAccount) -> Result<Option<AccountId>, InfraError> {
        let document = AccountDocument::from_new_account(account);
        let result = self.collection.insert_one(&document).await?;

        Ok(result
            .inserted_id
            .as_object_id()
            .map(|oid| AccountId::new(oid.to_hex())))
    }

    async fn find_by_id(&self, id: &AccountId) -> Result<Option<Account>, InfraError> {
        // このストアが採番した識別子は ObjectId の 16 進表現。
        // 形式が異なる識別子はこのストア由来ではないため「存在しない」扱い。
        let Ok(object_id) = ObjectId::parse_str(id.as_str()) else {
            return Ok(None);
        };

        let document = self
            .collection
            .find_one(doc! { "_id": object_id })
            .await?;

        document.map(AccountDocument::into_account).transpose()
    }
}

#[cfg(test)]
mod tests {
    use mongodb::bson;
    use pretty_assertions::assert_eq;
    use userhub_domain::account::NewAccount;

    use super::*;

    fn new_account() -> NewAccount {
        NewAccount::new(
            "Alice Khan",
            "alice@example.com",
            "secret123",
            "42101-1234567-1",
            "Karachi",
            "+92-300-1234567",
        )
        .unwrap()
    }

    #[test]
    fn test_挿入用ドキュメントは_idを含まない() {
        let document = AccountDocument::from_new_account(&new_account());
        let bson_doc = bson::to_document(&document).unwrap();

        // _id はサーバー採番のため、挿入時のドキュメントには現れない
        assert!(!bson_doc.contains_key("_id"));
        assert_eq!(bson_doc.get_str("fullName").unwrap(), "Alice Khan");
        assert_eq!(bson_doc.get_str("email").unwrap(), "alice@example.com");
        assert_eq!(bson_doc.get_str("password").unwrap(), "secret123");
        assert_eq!(bson_doc.get_str("cnic").unwrap(), "42101-1234567-1");
        assert_eq!(bson_doc.get_str("city").unwrap(), "Karachi");
        assert_eq!(bson_doc.get_str("contact").unwrap(), "+92-300-1234567");
    }

    #[test]
    fn test_読み出したドキュメントはエンティティに変換できる() {
        let object_id = ObjectId::new();
        let document = AccountDocument {
            id:        Some(object_id),
            full_name: "Alice Khan".to_string(),
            email:     "alice@example.com".to_string(),
            password:  "secret123".to_string(),
            cnic:      "42101-1234567-1".to_string(),
            city:      "Karachi".to_string(),
            contact:   "+92-300-1234567".to_string(),
        };

        let account = document.into_account().unwrap();

        assert_eq!(account.id.as_str(), object_id.to_hex());
        assert_eq!(account.full_name, "Alice Khan");
        assert_eq!(account.email, "alice@example.com");
    }

    #[test]
    fn test_idのないドキュメントの変換はエラーになる() {
        let document = AccountDocument {
            id:        None,
            full_name: "Alice Khan".to_string(),
            email:     "alice@example.com".to_string(),
            password:  "secret123".to_string(),
            cnic:      "42101-1234567-1".to_string(),
            city:      "Karachi".to_string(),
            contact:   "+92-300-1234567".to_string(),
        };

        assert!(document.into_account().is_err());
    }

    #[test]
    fn test_bsonラウンドトリップでフィールド名が保たれる() {
        let document = AccountDocument::from_new_account(&new_account());
        let bson_doc = bson::to_document(&document).unwrap();
        let restored: AccountDocument = bson::from_document(bson_doc).unwrap();

        assert_eq!(restored.full_name, "Alice Khan");
        assert_eq!(restored.contact, "+92-300-1234567");
        assert!(restored.id.is_none());
    }
}
