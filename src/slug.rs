//! Slug Module
//!
//! 表示名からURLセーフな小文字ASCII識別子（スラッグ）を生成するモジュール。
//! 大学・学部コードはすべてこのモジュールで生成されます。

use deunicode::deunicode;
use regex::Regex;
use std::sync::OnceLock;

/// 許可されていない文字の連続にマッチする正規表現
fn non_authorized_chars() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^a-z0-9_-]+").expect("valid slug pattern"))
}

/// 連続したハイフンにマッチする正規表現
fn multiple_dashes() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"-{2,}").expect("valid dash pattern"))
}

/// 音訳前に置換する文字
///
/// 引用符は削除し、各種ダッシュはハイフンに、`&`と`@`は英単語に置き換えます。
fn substitute(c: char) -> Option<&'static str> {
    match c {
        '"' | '\'' | '\u{2019}' => Some(""),
        '\u{2012}' | '\u{2013}' | '\u{2014}' | '\u{2015}' => Some("-"),
        '&' => Some("and"),
        '@' => Some("at"),
        _ => None,
    }
}

/// 表示名をスラッグに変換する
///
/// # 変換規則
///
/// 1. 前後の空白を除去
/// 2. 引用符の削除、ダッシュ・`&`・`@`の置換
/// 3. ASCIIへの音訳（`ü` → `u`, `ı` → `i` など）
/// 4. 小文字化
/// 5. `[a-z0-9_-]`以外の文字の連続を1つの`-`に置換し、連続する`-`をまとめる
/// 6. 先頭・末尾の`-`と`_`を除去
///
/// 同じ入力に対して常に同じ結果を返します。英数字を1文字も含まない名前は
/// 空文字列になります。
///
/// # 使用例
///
/// ```rust
/// use uniseed::slugify;
///
/// assert_eq!(slugify("Boğaziçi Üniversitesi"), "bogazici-universitesi");
/// assert_eq!(slugify("  A Uni  "), "a-uni");
/// ```
pub fn slugify(name: &str) -> String {
    let mut substituted = String::with_capacity(name.len());
    for c in name.trim().chars() {
        match substitute(c) {
            Some(replacement) => substituted.push_str(replacement),
            None => substituted.push(c),
        }
    }

    let ascii = deunicode(&substituted).to_ascii_lowercase();
    let dashed = non_authorized_chars().replace_all(&ascii, "-");
    let collapsed = multiple_dashes().replace_all(&dashed, "-");

    collapsed.trim_matches(|c| c == '-' || c == '_').to_string()
}

/// 学部の複合コードを生成する
///
/// `slug(学部名) + "-" + 大学コード`の形式で、学部コードを大学ごとに名前空間化します。
pub fn faculty_code(faculty_name: &str, university_code: &str) -> String {
    format!("{}-{}", slugify(faculty_name), university_code)
}
