//! Parser Module
//!
//! calamineを使用したワークブック読み込みの実装。
//! シートの各行を文字列セルのシーケンスとして取り出します。

mod cell;
mod workbook;

pub(crate) use workbook::WorkbookReader;
