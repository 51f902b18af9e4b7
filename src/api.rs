//! Public API Types
//!
//! 公開APIで使用する列挙型を定義するモジュール。

/// 大学・学部レコードの出力順序
///
/// 大学と学部はコードで重複排除されるため、JSON/SQLの出力順は
/// この設定によって決まります。学科は常に入力行の順序で出力されます。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum RecordOrder {
    /// コードの辞書順（デフォルト）
    ///
    /// 実行ごとに同一の出力が得られます。
    #[default]
    ByCode,

    /// スプレッドシート上で最初に現れた順
    FirstSeen,
}

/// 大学・学部JSONドキュメントの形式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum JsonLayout {
    /// コードをキーとするオブジェクト（デフォルト）
    ///
    /// # 出力例
    ///
    /// ```json
    /// {
    ///   "a-uni": {
    ///     "code": "a-uni",
    ///     "name": "A Uni",
    ///     "city": "City1",
    ///     "type": "Public"
    ///   }
    /// }
    /// ```
    #[default]
    Keyed,

    /// レコードの配列
    ///
    /// # 出力例
    ///
    /// ```json
    /// [
    ///   {
    ///     "code": "a-uni",
    ///     "name": "A Uni",
    ///     "city": "City1",
    ///     "type": "Public"
    ///   }
    /// ]
    /// ```
    Array,
}

/// SQLリテラルへの文字列埋め込み方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum SqlQuoting {
    /// 値をそのまま`'...'`で囲む（デフォルト）
    ///
    /// 既存のシードスクリプトとバイト単位で同じ出力になります。
    /// 値にアポストロフィが含まれる場合は不正なSQLとなるため、警告ログを出力します。
    #[default]
    Verbatim,

    /// 埋め込まれた`'`を`''`にエスケープする
    Escaped,
}

/// レコードが0件のテーブルのSQL出力方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum EmptyTablePolicy {
    /// `CREATE TABLE`文のみを出力し、`INSERT`文を省略する（デフォルト）
    #[default]
    OmitInsert,

    /// タプルのない`INSERT ... VALUES`と`;`をそのまま出力する
    ///
    /// 構文的に不正なSQLになりますが、既存の出力と互換です。
    Literal,
}
