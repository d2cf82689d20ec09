//! # リポジトリ実装
//!
//! ドキュメントストアへの永続化操作をトレイトとして定義し、
//! MongoDB による具体実装を提供する。
//!
//! ## モジュール構成
//!
//! - [`account_repository`] - アカウントの検索・挿入

pub mod account_repository;

pub use account_repository::{AccountRepository, MongoAccountRepository};
