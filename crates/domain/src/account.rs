//! # アカウント
//!
//! アカウントエンティティとそれに関連する値オブジェクトを定義する。
//!
//! ## ドメイン用語
//!
//! | 型 | ドメイン用語 | 備考 |
//! |---|------------|------|
//! | [`Account`] | アカウント | ドキュメントストアに保存された 1 ユーザー分のレコード |
//! | [`AccountId`] | アカウント ID | リポジトリが採番する不透明な識別子 |
//! | [`NewAccount`] | 登録リクエスト | バリデーション済みの作成ペイロード |
//!
//! ## 設計方針
//!
//! - **Newtype パターン**: 各属性を値オブジェクトでラップし、型安全性を確保
//! - **生成時バリデーション**: 空文字・文字数超過は値オブジェクトの生成時に弾く
//! - **パスワードは平文**: 旧システムの外部契約を踏襲し、ハッシュ化しない
//!   （既知のセキュリティ上の欠陥として DESIGN.md に記録）
//!
//! ログインの照合キーは `fullName` である点に注意。外部 API のフィールド名は
//! 互換性のため `username` だが、内部では一貫して「氏名による検索」として扱う。
//!
//! ## 使用例
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use userhub_domain::account::NewAccount;
//!
//! let account = NewAccount::new(
//!     "Alice Khan",
//!     "alice@example.com",
//!     "secret123",
//!     "42101-1234567-1",
//!     "Karachi",
//!     "+92-300-1234567",
//! )?;
//!
//! assert_eq!(account.email.as_str(), "alice@example.com");
//! // パスワードは Debug 出力でもマスクされる
//! assert!(format!("{:?}", account).contains("[REDACTED]"));
//! # Ok(())
//! # }
//! ```

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::DomainError;

/// アカウント ID（一意識別子）
///
/// ドキュメントストアが採番した識別子を不透明な文字列として保持する。
/// ドメイン層では生成せず、リポジトリから受け取った値のみを扱う。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display("{_0}")]
pub struct AccountId(String);

impl AccountId {
    /// リポジトリが採番した識別子からアカウント ID を作成する
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// 文字列参照を取得する
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 所有権を持つ文字列に変換する
    pub fn into_string(self) -> String {
        self.0
    }
}

/// メールアドレス（値オブジェクト）
///
/// 生成時にバリデーションを実行し、不正な値の作成を防ぐ。
/// アカウント作成時の一意性チェックのキーとなる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email(String);

impl Email {
    /// メールアドレスを作成する
    ///
    /// # バリデーション
    ///
    /// - 空文字列ではない
    /// - `local@domain` の形式であること
    /// - 最大 255 文字
    ///
    /// # エラー
    ///
    /// バリデーションに失敗した場合は `DomainError::Validation` を返す。
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into().trim().to_string();

        if value.is_empty() {
            return Err(DomainError::Validation(
                "メールアドレスは必須です".to_string(),
            ));
        }

        let Some((local, domain)) = value.split_once('@') else {
            return Err(DomainError::Validation(
                "メールアドレスの形式が不正です".to_string(),
            ));
        };

        if local.is_empty() || domain.is_empty() {
            return Err(DomainError::Validation(
                "メールアドレスの形式が不正です".to_string(),
            ));
        }

        if value.len() > 255 {
            return Err(DomainError::Validation(
                "メールアドレスは255文字以内である必要があります".to_string(),
            ));
        }

        Ok(Self(value))
    }

    /// 文字列参照を取得する
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 所有権を持つ文字列に変換する
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

define_validated_string! {
    /// 氏名（値オブジェクト）
    ///
    /// ログイン時の照合キー。外部 API では `username` という名前で渡される。
    pub struct FullName {
        label: "氏名",
        max_length: 100,
    }
}

define_validated_string! {
    /// 平文パスワード（値オブジェクト）
    ///
    /// 旧システムの契約を踏襲し、保存時もハッシュ化しない。
    /// `Debug` 出力は `[REDACTED]` にマスクされ、`Display` は提供しない。
    pub struct PlainPassword {
        label: "パスワード",
        max_length: 255,
        pii: true,
    }
}

define_validated_string! {
    /// 国民識別番号（CNIC）（値オブジェクト）
    pub struct Cnic {
        label: "CNIC",
        max_length: 32,
    }
}

define_validated_string! {
    /// 都市名（値オブジェクト）
    pub struct City {
        label: "都市名",
        max_length: 100,
    }
}

define_validated_string! {
    /// 連絡先番号（値オブジェクト）
    pub struct ContactNumber {
        label: "連絡先番号",
        max_length: 32,
    }
}

/// アカウント作成ペイロード
///
/// 6 属性すべてがバリデーション済みであることを型で保証する。
/// ID はまだ持たない（リポジトリへの挿入時に採番される）。
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub full_name: FullName,
    pub email:     Email,
    pub password:  PlainPassword,
    pub cnic:      Cnic,
    pub city:      City,
    pub contact:   ContactNumber,
}

impl NewAccount {
    /// 生の入力値からアカウント作成ペイロードを組み立てる
    ///
    /// いずれかの属性のバリデーションに失敗した場合、最初のエラーを返す。
    pub fn new(
        full_name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        cnic: impl Into<String>,
        city: impl Into<String>,
        contact: impl Into<String>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            full_name: FullName::new(full_name)?,
            email:     Email::new(email)?,
            password:  PlainPassword::new(password)?,
            cnic:      Cnic::new(cnic)?,
            city:      City::new(city)?,
            contact:   ContactNumber::new(contact)?,
        })
    }
}

/// アカウントエンティティ（保存済みレコード）
///
/// ドキュメントストアから読み戻した 1 レコードを表す。
/// 読み出し時には再バリデーションを行わないため、属性は生の文字列で保持する。
/// 作成後の更新・削除操作は存在しない（意図したスコープ）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id:        AccountId,
    pub full_name: String,
    pub email:     String,
    pub password:  String,
    pub cnic:      String,
    pub city:      String,
    pub contact:   String,
}
