//! Builder Module
//!
//! Fluent Builder APIを提供し、`SeedGenerator`インスタンスを段階的に構築する。

use crate::api::{EmptyTablePolicy, JsonLayout, RecordOrder, SqlQuoting};
use crate::error::UniSeedError;
use crate::output::{write_atomic, Artifact, RenderedArtifact};
use crate::parser::WorkbookReader;
use crate::processor::{process_rows, Catalog};
use crate::security::{validate_file_name, SecurityConfig};
use rayon::prelude::*;
use std::collections::{BTreeMap, HashSet};
use std::io::{Read, Seek};
use std::path::{Path, PathBuf};

/// デフォルトのシート名
pub const DEFAULT_SHEET_NAME: &str = "Sheet1";

/// 変換処理の設定を保持する内部構造体
#[derive(Debug, Clone)]
pub(crate) struct SeedConfig {
    /// 読み込むシート名
    pub sheet_name: String,

    /// 出力ディレクトリ
    pub output_dir: PathBuf,

    /// 成果物ごとの出力ファイル名
    pub file_names: BTreeMap<Artifact, String>,

    /// 大学・学部の出力順序
    pub record_order: RecordOrder,

    /// 大学・学部JSONの形式
    pub json_layout: JsonLayout,

    /// SQLリテラルの埋め込み方式
    pub sql_quoting: SqlQuoting,

    /// 空テーブルのSQL出力方式
    pub empty_table_policy: EmptyTablePolicy,

    /// 空白行をスキップするか
    pub skip_blank_rows: bool,

    /// 入力サイズ制限
    pub security: SecurityConfig,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
            output_dir: PathBuf::from("."),
            file_names: Artifact::ALL
                .iter()
                .map(|&artifact| (artifact, artifact.default_file_name().to_string()))
                .collect(),
            record_order: RecordOrder::default(),
            json_layout: JsonLayout::default(),
            sql_quoting: SqlQuoting::default(),
            empty_table_policy: EmptyTablePolicy::default(),
            skip_blank_rows: false,
            security: SecurityConfig::default(),
        }
    }
}

impl SeedConfig {
    fn file_name(&self, artifact: Artifact) -> &str {
        self.file_names
            .get(&artifact)
            .map(String::as_str)
            .unwrap_or_else(|| artifact.default_file_name())
    }
}

/// Fluent Builder APIを提供する構造体
///
/// すべての設定項目にデフォルト値が設定されており、必要な設定のみをオーバーライドできます。
///
/// # 使用例
///
/// ```rust,no_run
/// use uniseed::{RecordOrder, SeedBuilder, SqlQuoting};
///
/// # fn main() -> Result<(), uniseed::UniSeedError> {
/// let generator = SeedBuilder::new()
///     .with_sheet_name("Sheet1")
///     .with_output_dir("seed")
///     .with_record_order(RecordOrder::FirstSeen)
///     .with_sql_quoting(SqlQuoting::Escaped)
///     .build()?;
/// let report = generator.run_file("universiteler.xlsx")?;
/// println!("{} departments", report.departments);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct SeedBuilder {
    /// 内部設定（構築中）
    config: SeedConfig,
}

impl Default for SeedBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SeedBuilder {
    /// デフォルト設定を持つビルダーインスタンスを生成する
    ///
    /// # デフォルト設定
    ///
    /// - シート名: `Sheet1`
    /// - 出力ディレクトリ: カレントディレクトリ
    /// - 出力順序: コード順
    /// - JSON形式: コードをキーとするオブジェクト
    /// - SQLリテラル: エスケープなし
    /// - 空テーブル: `INSERT`文を省略
    /// - 空白行: スキップ
    pub fn new() -> Self {
        Self {
            config: SeedConfig::default(),
        }
    }

    /// 読み込むシート名を指定する
    pub fn with_sheet_name(mut self, name: impl Into<String>) -> Self {
        self.config.sheet_name = name.into();
        self
    }

    /// 出力ディレクトリを指定する
    ///
    /// ディレクトリは事前に存在している必要があります。
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.output_dir = dir.into();
        self
    }

    /// 成果物の出力ファイル名を変更する
    ///
    /// # 使用例
    ///
    /// ```rust,no_run
    /// use uniseed::{Artifact, SeedBuilder};
    ///
    /// let builder = SeedBuilder::new()
    ///     .with_file_name(Artifact::UniversityJson, "universities.json");
    /// ```
    pub fn with_file_name(mut self, artifact: Artifact, name: impl Into<String>) -> Self {
        self.config.file_names.insert(artifact, name.into());
        self
    }

    /// 大学・学部の出力順序を指定する
    pub fn with_record_order(mut self, order: RecordOrder) -> Self {
        self.config.record_order = order;
        self
    }

    /// 大学・学部JSONの形式を指定する
    pub fn with_json_layout(mut self, layout: JsonLayout) -> Self {
        self.config.json_layout = layout;
        self
    }

    /// SQLリテラルの埋め込み方式を指定する
    pub fn with_sql_quoting(mut self, quoting: SqlQuoting) -> Self {
        self.config.sql_quoting = quoting;
        self
    }

    /// 空テーブルのSQL出力方式を指定する
    pub fn with_empty_table_policy(mut self, policy: EmptyTablePolicy) -> Self {
        self.config.empty_table_policy = policy;
        self
    }

    /// すべてのセルが空白のデータ行をスキップするかを指定する
    ///
    /// # 引数
    ///
    /// * `skip: bool`:
    ///   * `true`: 空白行を読み飛ばす
    ///   * `false`: 空白行を`MalformedRow`エラーとして扱う（デフォルト）
    pub fn skip_blank_rows(mut self, skip: bool) -> Self {
        self.config.skip_blank_rows = skip;
        self
    }

    /// 入力ファイルの最大サイズ（バイト）を指定する
    pub fn with_max_input_size(mut self, bytes: u64) -> Self {
        self.config.security.max_input_file_size = bytes;
        self
    }

    /// 設定を検証し、`SeedGenerator`インスタンスを生成する
    ///
    /// # 発生し得るエラー
    ///
    /// * `UniSeedError::Config(String)`: 設定の検証に失敗した場合
    ///   * シート名が空
    ///   * 出力ディレクトリが空
    ///   * ファイル名が空、またはディレクトリ成分を含む
    ///   * 複数の成果物が同じファイル名を持つ
    ///   * 入力サイズ上限が0
    pub fn build(self) -> Result<SeedGenerator, UniSeedError> {
        // 1. シート名の検証
        if self.config.sheet_name.trim().is_empty() {
            return Err(UniSeedError::Config("Sheet name must not be empty".to_string()));
        }

        // 2. 出力先の検証
        if self.config.output_dir.as_os_str().is_empty() {
            return Err(UniSeedError::Config(
                "Output directory must not be empty".to_string(),
            ));
        }

        // 3. ファイル名の検証
        self.validate_file_names()?;

        // 4. サイズ上限の検証
        if self.config.security.max_input_file_size == 0 {
            return Err(UniSeedError::Config(
                "Maximum input size must be greater than zero".to_string(),
            ));
        }

        Ok(SeedGenerator::new(self.config))
    }

    fn validate_file_names(&self) -> Result<(), UniSeedError> {
        let mut seen = HashSet::new();
        for artifact in Artifact::ALL {
            let name = self.config.file_name(artifact);
            validate_file_name(name).map_err(|msg| {
                UniSeedError::Config(format!("Invalid file name for {:?}: {}", artifact, msg))
            })?;
            if !seen.insert(name) {
                return Err(UniSeedError::Config(format!(
                    "Duplicate output file name: '{}'",
                    name
                )));
            }
        }
        Ok(())
    }
}

/// 実行結果のサマリー
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedReport {
    /// 大学の件数
    pub universities: usize,
    /// 学部の件数
    pub faculties: usize,
    /// 学科の件数
    pub departments: usize,
    /// 書き込んだファイル（書き込み順）
    pub files: Vec<PathBuf>,
}

/// 変換処理のファサード
///
/// 読み込み → 行処理 → JSON/SQL書き出しのパイプラインを実行します。
/// 各段階は最初のエラーで中断し、それ以前に書き込まれたファイルはそのまま残ります。
#[derive(Debug)]
pub struct SeedGenerator {
    config: SeedConfig,
}

impl SeedGenerator {
    pub(crate) fn new(config: SeedConfig) -> Self {
        Self { config }
    }

    /// 設定されたシート名
    pub fn sheet_name(&self) -> &str {
        &self.config.sheet_name
    }

    /// 設定された出力ディレクトリ
    pub fn output_dir(&self) -> &Path {
        &self.config.output_dir
    }

    /// 成果物の出力パス
    pub fn output_path(&self, artifact: Artifact) -> PathBuf {
        self.config.output_dir.join(self.config.file_name(artifact))
    }

    /// ワークブックから設定されたシートの行を読み込む
    pub fn read_rows<R: Read + Seek>(&self, input: R) -> Result<Vec<Vec<String>>, UniSeedError> {
        let mut reader = WorkbookReader::open(input, &self.config.security)?;
        reader.read_rows(&self.config.sheet_name, self.config.skip_blank_rows)
    }

    /// ワークブックを読み込み、`Catalog`を構築する
    pub fn load<R: Read + Seek>(&self, input: R) -> Result<Catalog, UniSeedError> {
        let rows = self.read_rows(input)?;
        process_rows(&rows)
    }

    /// パスからワークブックを読み込み、`Catalog`を構築する
    pub fn load_file<P: AsRef<Path>>(&self, path: P) -> Result<Catalog, UniSeedError> {
        let mut reader = WorkbookReader::open_path(path, &self.config.security)?;
        let rows = reader.read_rows(&self.config.sheet_name, self.config.skip_blank_rows)?;
        process_rows(&rows)
    }

    /// 6つの成果物をレンダリングする
    ///
    /// 各成果物は独立しているため並列にレンダリングし、書き込み順で返します。
    pub fn render(&self, catalog: &Catalog) -> Result<Vec<RenderedArtifact>, UniSeedError> {
        Artifact::ALL
            .par_iter()
            .map(|&artifact| {
                let contents = artifact.render(catalog, &self.config)?;
                Ok(RenderedArtifact {
                    artifact,
                    file_name: self.config.file_name(artifact).to_string(),
                    contents,
                })
            })
            .collect()
    }

    /// `Catalog`を出力ディレクトリに書き出す
    ///
    /// ファイルは書き込み順に1つずつアトミックに書き込まれます。
    pub fn write(&self, catalog: &Catalog) -> Result<SeedReport, UniSeedError> {
        let rendered = self.render(catalog)?;

        let mut files = Vec::with_capacity(rendered.len());
        for artifact in &rendered {
            let path = write_atomic(
                &self.config.output_dir,
                &artifact.file_name,
                artifact.contents.as_bytes(),
            )?;
            files.push(path);
        }

        Ok(SeedReport {
            universities: catalog.universities().len(),
            faculties: catalog.faculties().len(),
            departments: catalog.departments().len(),
            files,
        })
    }

    /// リーダーからワークブックを読み込み、すべての成果物を書き出す
    pub fn run<R: Read + Seek>(&self, input: R) -> Result<SeedReport, UniSeedError> {
        let catalog = self.load(input)?;
        self.finish(&catalog)
    }

    /// パスからワークブックを読み込み、すべての成果物を書き出す
    pub fn run_file<P: AsRef<Path>>(&self, path: P) -> Result<SeedReport, UniSeedError> {
        let catalog = self.load_file(path)?;
        self.finish(&catalog)
    }

    fn finish(&self, catalog: &Catalog) -> Result<SeedReport, UniSeedError> {
        let report = self.write(catalog)?;
        log::info!(
            "Generated {} universities, {} faculties, {} departments into {}",
            report.universities,
            report.faculties,
            report.departments,
            self.config.output_dir.display()
        );
        Ok(report)
    }
}
