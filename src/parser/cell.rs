//! Cell Text Module
//!
//! calamineのセル値を、スプレッドシート上で見える文字列に変換します。

use calamine::{Data, ExcelDateTime};
use chrono::Timelike;

/// セル値を文字列に変換する
///
/// - 文字列: そのまま
/// - 小数部のない数値: 整数表記（`2024.0` → `2024`）
/// - 真偽値: `TRUE` / `FALSE`
/// - 日付: `YYYY-MM-DD`（時刻部分がある場合は`YYYY-MM-DD HH:MM:SS`）
/// - エラー: Excelのエラーリテラル（`#DIV/0!`など）
/// - 空セル: 空文字列
pub(crate) fn cell_text(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => number_text(*f),
        Data::Bool(true) => "TRUE".to_string(),
        Data::Bool(false) => "FALSE".to_string(),
        Data::DateTime(dt) => {
            if dt.is_duration() {
                number_text(dt.as_f64())
            } else {
                date_text(dt)
            }
        }
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Error(e) => e.to_string(),
        Data::Empty => String::new(),
    }
}

fn number_text(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

/// 日付セルを日付文字列に変換する
///
/// 1900年/1904年システムの違いはcalamineが解決します。
/// 日時として表現できない値は数値表記にフォールバックします。
fn date_text(dt: &ExcelDateTime) -> String {
    match dt.as_datetime() {
        Some(datetime) if datetime.num_seconds_from_midnight() == 0 => {
            datetime.format("%Y-%m-%d").to_string()
        }
        Some(datetime) => datetime.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => number_text(dt.as_f64()),
    }
}
