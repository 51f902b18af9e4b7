//! uniseed - University spreadsheet to JSON and SQL seed converter
//!
//! 大学・学部・学科のレコードを含む1枚のスプレッドシートを読み込み、
//! 重複排除された3つのエンティティコレクションに変換して、
//! JSONドキュメントとSQLシードスクリプトとして書き出すクレートです。
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use uniseed::SeedBuilder;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // デフォルト設定（Sheet1、カレントディレクトリへ出力）
//!     let generator = SeedBuilder::new().build()?;
//!
//!     // university.json, faculties.json, departments.json,
//!     // universities.sql, faculties.sql, departments.sql を生成
//!     let report = generator.run_file("universiteler.xlsx")?;
//!     println!("{} universities", report.universities);
//!
//!     Ok(())
//! }
//! ```
//!
//! # In-memory Processing
//!
//! 行がすでにメモリ上にある場合は、`process_rows`で直接`Catalog`を構築できます。
//!
//! ```rust
//! use uniseed::process_rows;
//!
//! # fn main() -> Result<(), uniseed::UniSeedError> {
//! let rows = vec![
//!     vec!["University", "Faculty", "Department", "", "Type", "City"],
//!     vec!["A Uni", "Eng", "CS", "x", "Public", "City1"],
//!     vec!["B Uni", "Eng", "CS", "x", "Private", "City2"],
//! ];
//! let catalog = process_rows(&rows)?;
//!
//! assert_eq!(catalog.universities().len(), 2);
//! assert_eq!(catalog.faculties()[1].code, "eng-b-uni");
//! # Ok(())
//! # }
//! ```

mod api;
mod builder;
mod error;
mod output;
mod parser;
mod processor;
mod security;
mod slug;
mod types;

// 公開API
pub use api::{EmptyTablePolicy, JsonLayout, RecordOrder, SqlQuoting};
pub use builder::{SeedBuilder, SeedGenerator, SeedReport, DEFAULT_SHEET_NAME};
pub use error::UniSeedError;
pub use output::{Artifact, RenderedArtifact};
pub use processor::{process_rows, Catalog, RowProcessor};
pub use slug::{faculty_code, slugify};
pub use types::{Department, Faculty, University, REQUIRED_CELLS};
