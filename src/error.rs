//! Error Types Module
//!
//! クレート全体で使用する構造化エラー型を定義するモジュール。
//! `thiserror`を使用して、エラーの自動変換とメッセージフォーマットを実現する。

use std::path::PathBuf;
use thiserror::Error;

/// uniseedクレート全体で使用するエラー型
///
/// ワークブックの読み込みから行の処理、JSON/SQLファイルの書き出しまで、
/// パイプライン上で発生するすべてのエラーを統一的に扱います。
/// いずれのエラーも致命的であり、リトライや警告への格下げは行いません。
///
/// # 使用例
///
/// ```rust,no_run
/// use uniseed::{SeedBuilder, UniSeedError};
///
/// let generator = SeedBuilder::new().build().unwrap();
/// match generator.run_file("universiteler.xlsx") {
///     Err(UniSeedError::SheetNotFound { sheet, .. }) => {
///         eprintln!("シートが見つかりません: {}", sheet);
///     }
///     Err(e) => eprintln!("{}", e),
///     Ok(report) => println!("{} universities", report.universities),
/// }
/// ```
#[derive(Error, Debug)]
pub enum UniSeedError {
    /// ワークブックを開けなかったエラー
    ///
    /// ファイルが存在しない、読み込めない、またはcalamineが形式を
    /// 認識できない（破損したファイルなど）場合に発生します。
    #[error("Failed to open workbook '{path}': {source}")]
    FileOpen {
        /// 入力ファイルのパス（リーダーから読み込んだ場合は`<reader>`）
        path: String,
        #[source]
        source: calamine::Error,
    },

    /// 指定されたシートがワークブックに存在しないエラー
    #[error("Sheet '{sheet}' not found (available: {available})")]
    SheetNotFound {
        /// 要求されたシート名
        sheet: String,
        /// ワークブックに含まれるシート名（カンマ区切り）
        available: String,
    },

    /// シートは存在するが、セルデータの読み込みに失敗したエラー
    #[error("Failed to read sheet '{sheet}': {source}")]
    SheetRead {
        sheet: String,
        #[source]
        source: calamine::Error,
    },

    /// 必須列が不足している行を検出したエラー
    ///
    /// `row`はスプレッドシート上の行番号（1始まり、ヘッダーが1行目）です。
    #[error("Malformed row {row}: expected at least {expected} cells, found {found}")]
    MalformedRow {
        row: usize,
        found: usize,
        expected: usize,
    },

    /// 出力ファイルの書き込みに失敗したエラー
    #[error("Failed to write file '{}': {}", .path.display(), .source)]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSONシリアライズのエラー
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O操作中に発生したエラー（入力バッファの読み込みなど）
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// 設定の検証に失敗したエラー
    ///
    /// `SeedBuilder::build()`時に設定を検証し、無効な設定が検出された
    /// 場合に発生します。
    ///
    /// # 例
    ///
    /// ```rust,no_run
    /// use uniseed::{SeedBuilder, UniSeedError};
    ///
    /// let result = SeedBuilder::new().with_sheet_name("").build();
    ///
    /// match result {
    ///     Err(UniSeedError::Config(msg)) => {
    ///         println!("設定エラー: {}", msg);
    ///     }
    ///     _ => {}
    /// }
    /// ```
    #[error("Configuration error: {0}")]
    Config(String),

    /// セキュリティ制限に違反したエラー
    ///
    /// 入力ファイルサイズの上限を超えた場合などに発生します。
    #[error("Security violation: {0}")]
    SecurityViolation(String),
}
