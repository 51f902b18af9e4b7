//! Workbook Reader
//!
//! calamineを使用してワークブックを開き、名前付きシートを文字列セルの行として取得します。

use calamine::{open_workbook_auto_from_rs, Data, Range, Reader, Sheets};
use std::fs::File;
use std::io::{Cursor, Read, Seek};
use std::path::Path;

use crate::error::UniSeedError;
use crate::parser::cell::cell_text;
use crate::security::SecurityConfig;

/// リーダーから開いた場合のパス表記
const READER_SOURCE: &str = "<reader>";

/// ワークブックリーダー
///
/// calamineのラッパーとして、ワークブックレベルの操作を提供します。
/// 形式（xlsx, xlsm, xls, ods）は自動判定されます。
pub(crate) struct WorkbookReader {
    workbook: Sheets<Cursor<Vec<u8>>>,
    source: String,
}

impl WorkbookReader {
    /// パスからワークブックを開く
    ///
    /// ファイルが存在しない場合も`UniSeedError::FileOpen`を返します。
    pub fn open_path<P: AsRef<Path>>(
        path: P,
        security: &SecurityConfig,
    ) -> Result<Self, UniSeedError> {
        let path = path.as_ref();
        let source = path.display().to_string();

        let file = File::open(path).map_err(|e| UniSeedError::FileOpen {
            path: source.clone(),
            source: calamine::Error::Io(e),
        })?;

        Self::open_named(file, source, security)
    }

    /// 任意のリーダーからワークブックを開く
    pub fn open<R: Read + Seek>(reader: R, security: &SecurityConfig) -> Result<Self, UniSeedError> {
        Self::open_named(reader, READER_SOURCE.to_string(), security)
    }

    fn open_named<R: Read + Seek>(
        mut reader: R,
        source: String,
        security: &SecurityConfig,
    ) -> Result<Self, UniSeedError> {
        // ファイル全体をメモリに読み込む
        // セキュリティ: ファイルサイズ制限を適用
        let mut buffer = Vec::new();
        let bytes_read = reader
            .read_to_end(&mut buffer)
            .map_err(|e| UniSeedError::FileOpen {
                path: source.clone(),
                source: calamine::Error::Io(e),
            })?;

        security
            .check_input_size(bytes_read as u64)
            .map_err(UniSeedError::SecurityViolation)?;

        let workbook =
            open_workbook_auto_from_rs(Cursor::new(buffer)).map_err(|e| UniSeedError::FileOpen {
                path: source.clone(),
                source: e,
            })?;

        log::debug!("Opened workbook {} ({} bytes)", source, bytes_read);

        Ok(Self { workbook, source })
    }

    /// すべてのシート名を取得
    pub fn sheet_names(&self) -> Vec<String> {
        self.workbook.sheet_names()
    }

    /// 名前付きシートを文字列セルの行として読み込む
    ///
    /// # 引数
    ///
    /// * `sheet_name` - 読み込むシート名
    /// * `skip_blank_rows` - すべてのセルが空白の行を除外するか（先頭行は常に保持）
    ///
    /// # 戻り値
    ///
    /// * `Ok(Vec<Vec<String>>)` - シートの行（A1起点の絶対位置）
    /// * `Err(UniSeedError::SheetNotFound)` - シートが存在しない場合
    /// * `Err(UniSeedError::SheetRead)` - シートの解析に失敗した場合
    pub fn read_rows(
        &mut self,
        sheet_name: &str,
        skip_blank_rows: bool,
    ) -> Result<Vec<Vec<String>>, UniSeedError> {
        let names = self.sheet_names();
        if !names.iter().any(|name| name == sheet_name) {
            return Err(UniSeedError::SheetNotFound {
                sheet: sheet_name.to_string(),
                available: names.join(", "),
            });
        }

        let range = self
            .workbook
            .worksheet_range(sheet_name)
            .map_err(|e| UniSeedError::SheetRead {
                sheet: sheet_name.to_string(),
                source: e,
            })?;

        let rows = absolute_rows(&range);
        log::debug!(
            "Read {} rows from sheet '{}' of {}",
            rows.len(),
            sheet_name,
            self.source
        );

        if !skip_blank_rows {
            return Ok(rows);
        }

        let mut kept = Vec::with_capacity(rows.len());
        for (idx, row) in rows.into_iter().enumerate() {
            if idx > 0 && is_blank(&row) {
                log::debug!("Skipping blank row {} in sheet '{}'", idx + 1, sheet_name);
                continue;
            }
            kept.push(row);
        }
        Ok(kept)
    }
}

/// 使用範囲をA1起点の行に展開する
///
/// calamineの範囲は最初の非空セルから始まるため、先頭の空行と空セルを補い、
/// 列インデックスがシート上の列と一致するようにします。
fn absolute_rows(range: &Range<Data>) -> Vec<Vec<String>> {
    let Some((start_row, start_col)) = range.start() else {
        return Vec::new();
    };

    let mut rows: Vec<Vec<String>> = (0..start_row).map(|_| Vec::new()).collect();
    for row in range.rows() {
        let mut cells = Vec::with_capacity(start_col as usize + row.len());
        cells.extend((0..start_col).map(|_| String::new()));
        cells.extend(row.iter().map(cell_text));
        rows.push(cells);
    }
    rows
}

fn is_blank(row: &[String]) -> bool {
    row.iter().all(|cell| cell.trim().is_empty())
}
