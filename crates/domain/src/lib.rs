//! # UserHub ドメイン層
//!
//! アカウント管理サービスのドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! - **エンティティ**: 一意の識別子を持つオブジェクト（[`account::Account`]）
//! - **値オブジェクト**: 生成時にバリデーションを実行する Newtype
//!   （[`account::Email`], [`account::FullName`] など）
//! - **ドメインエラー**: ビジネスルール違反を表現するエラー型
//!
//! ## 依存関係の方向
//!
//! ```text
//! app → infra → domain
//! ```
//!
//! ドメイン層はインフラ層（ドキュメントストア、ドライバ）には一切依存しない。
//! アカウント ID はリポジトリが採番した不透明な文字列としてのみ扱う。
//!
//! ## モジュール構成
//!
//! - [`error`] - ドメイン層で発生するエラーの定義
//! - [`account`] - アカウントエンティティと値オブジェクト

#[macro_use]
mod macros;

pub mod account;
pub mod error;

pub use error::DomainError;
