//! Core Type Definitions
//!
//! スプレッドシートから抽出するエンティティ（大学・学部・学科）と、
//! 入力行の列レイアウトを定義するモジュール。

use serde::{Deserialize, Serialize};

/// 大学名の列（0始まり）
pub const UNIVERSITY_COLUMN: usize = 0;
/// 学部名の列
pub const FACULTY_COLUMN: usize = 1;
/// 学科名の列
pub const DEPARTMENT_COLUMN: usize = 2;
// 列3はどのフィールドにも対応しない
/// 大学種別（国立・私立など）の列
pub const TYPE_COLUMN: usize = 4;
/// 大学所在地の列
pub const CITY_COLUMN: usize = 5;

/// 1行に必要な最小セル数
pub const REQUIRED_CELLS: usize = CITY_COLUMN + 1;

/// 大学
///
/// `code`は大学名のスラッグであり、重複排除のキーです。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct University {
    pub code: String,
    pub name: String,
    pub city: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// 学部
///
/// `code`は`slug(学部名) + "-" + 大学コード`の複合コードです。
/// 同名の学部でも大学が異なれば別のエンティティになります。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Faculty {
    pub code: String,
    pub university_code: String,
    pub name: String,
}

/// 学科
///
/// 重複排除キーを持たず、入力行ごとに1件生成されます。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub university_code: String,
    pub faculty_code: String,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_cells_covers_city() {
        assert_eq!(REQUIRED_CELLS, 6);
        assert!(TYPE_COLUMN < REQUIRED_CELLS);
    }

    #[test]
    fn test_university_json_field_names() {
        let university = University {
            code: "a-uni".to_string(),
            name: "A Uni".to_string(),
            city: "City1".to_string(),
            kind: "Public".to_string(),
        };
        let json = serde_json::to_string(&university).unwrap();
        assert_eq!(
            json,
            r#"{"code":"a-uni","name":"A Uni","city":"City1","type":"Public"}"#
        );
    }

    #[test]
    fn test_faculty_and_department_json_field_names() {
        let faculty = Faculty {
            code: "eng-a-uni".to_string(),
            university_code: "a-uni".to_string(),
            name: "Eng".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&faculty).unwrap(),
            r#"{"code":"eng-a-uni","universityCode":"a-uni","name":"Eng"}"#
        );

        let department = Department {
            university_code: "a-uni".to_string(),
            faculty_code: "eng-a-uni".to_string(),
            name: "CS".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&department).unwrap(),
            r#"{"universityCode":"a-uni","facultyCode":"eng-a-uni","name":"CS"}"#
        );
    }
}
