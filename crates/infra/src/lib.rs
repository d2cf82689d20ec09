//! # UserHub インフラ層
//!
//! 外部システムとの接続・通信を担当するインフラストラクチャ層。
//!
//! ## 設計方針
//!
//! このクレートはリポジトリトレイトとその具体的な実装を提供する。
//! ドキュメントストア（MongoDB）の詳細をカプセル化し、ドメイン層を
//! ドライバの変更から保護する。
//!
//! ## 責務
//!
//! - **ドキュメントストア接続**: MongoDB クライアントの構築と疎通確認
//! - **リポジトリ実装**: [`repository::AccountRepository`] の MongoDB 実装
//! - **エラー変換**: ドライバエラーを [`InfraError`] にラップ
//!
//! ## 依存関係
//!
//! ```text
//! app → infra → domain
//! ```
//!
//! ドメイン層はインフラ層に依存しない（依存性逆転の原則）。
//!
//! ## モジュール構成
//!
//! - [`db`] - MongoDB 接続管理
//! - [`error`] - インフラ層エラー定義
//! - [`repository`] - リポジトリトレイトと実装
//! - [`mock`] - テスト用インメモリリポジトリ（`test-utils` feature）

pub mod db;
pub mod error;
#[cfg(any(test, feature = "test-utils"))]
pub mod mock;
pub mod repository;

pub use error::{InfraError, InfraErrorKind};
pub use repository::{AccountRepository, MongoAccountRepository};
