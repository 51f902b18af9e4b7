//! Row Processor Module
//!
//! 非正規化されたスプレッドシート行を、重複排除された大学・学部・学科の
//! コレクションに変換するモジュール。

use std::collections::HashMap;

use crate::api::RecordOrder;
use crate::error::UniSeedError;
use crate::slug::{faculty_code, slugify};
use crate::types::{
    Department, Faculty, University, CITY_COLUMN, DEPARTMENT_COLUMN, FACULTY_COLUMN,
    REQUIRED_CELLS, TYPE_COLUMN, UNIVERSITY_COLUMN,
};

/// 1回の実行で構築される3つのエンティティコレクション
///
/// 大学と学部は最初に現れた順序で保持し、コードによる索引を持ちます。
/// 学科は入力行の順序で保持します。構築後は読み取り専用です。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    universities: Vec<University>,
    university_index: HashMap<String, usize>,
    faculties: Vec<Faculty>,
    faculty_index: HashMap<String, usize>,
    departments: Vec<Department>,
}

impl Catalog {
    /// 大学を最初に現れた順序で返す
    pub fn universities(&self) -> &[University] {
        &self.universities
    }

    /// 学部を最初に現れた順序で返す
    pub fn faculties(&self) -> &[Faculty] {
        &self.faculties
    }

    /// 学科を入力行の順序で返す
    pub fn departments(&self) -> &[Department] {
        &self.departments
    }

    pub fn university(&self, code: &str) -> Option<&University> {
        self.university_index
            .get(code)
            .map(|&idx| &self.universities[idx])
    }

    pub fn faculty(&self, code: &str) -> Option<&Faculty> {
        self.faculty_index.get(code).map(|&idx| &self.faculties[idx])
    }

    /// 指定された順序で大学を返す
    pub fn ordered_universities(&self, order: RecordOrder) -> Vec<&University> {
        let mut universities: Vec<&University> = self.universities.iter().collect();
        if order == RecordOrder::ByCode {
            universities.sort_by(|a, b| a.code.cmp(&b.code));
        }
        universities
    }

    /// 指定された順序で学部を返す
    pub fn ordered_faculties(&self, order: RecordOrder) -> Vec<&Faculty> {
        let mut faculties: Vec<&Faculty> = self.faculties.iter().collect();
        if order == RecordOrder::ByCode {
            faculties.sort_by(|a, b| a.code.cmp(&b.code));
        }
        faculties
    }

    pub fn is_empty(&self) -> bool {
        self.universities.is_empty() && self.faculties.is_empty() && self.departments.is_empty()
    }
}

/// 行プロセッサー
///
/// 行を1つずつ受け取り、`Catalog`を段階的に構築します。
/// インデックス0の行はヘッダーとして常にスキップされます。
///
/// # 使用例
///
/// ```rust
/// use uniseed::RowProcessor;
///
/// # fn main() -> Result<(), uniseed::UniSeedError> {
/// let mut processor = RowProcessor::new();
/// let header = ["University", "Faculty", "Department", "", "Type", "City"];
/// let row = ["A Uni", "Eng", "CS", "x", "Public", "City1"];
/// processor.push_row(0, &header)?;
/// processor.push_row(1, &row)?;
///
/// let catalog = processor.finish();
/// assert_eq!(catalog.universities()[0].code, "a-uni");
/// assert_eq!(catalog.faculties()[0].code, "eng-a-uni");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct RowProcessor {
    catalog: Catalog,
}

impl RowProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    /// 1行を処理する
    ///
    /// # 引数
    ///
    /// * `index` - シート上の行インデックス（0始まり、0はヘッダー）
    /// * `row` - 行のセル
    ///
    /// # 戻り値
    ///
    /// * `Ok(())` - 行の処理に成功した場合（ヘッダー行を含む）
    /// * `Err(UniSeedError::MalformedRow)` - セル数が6未満、またはすべてのセルが空白の場合
    ///   （空白行は`found: 0`として報告）
    pub fn push_row<S: AsRef<str>>(&mut self, index: usize, row: &[S]) -> Result<(), UniSeedError> {
        if index == 0 {
            return Ok(());
        }

        if row.iter().all(|cell| cell.as_ref().trim().is_empty()) {
            return Err(UniSeedError::MalformedRow {
                row: index + 1,
                found: 0,
                expected: REQUIRED_CELLS,
            });
        }

        if row.len() < REQUIRED_CELLS {
            return Err(UniSeedError::MalformedRow {
                row: index + 1,
                found: row.len(),
                expected: REQUIRED_CELLS,
            });
        }

        let university_name = row[UNIVERSITY_COLUMN].as_ref();
        let faculty_name = row[FACULTY_COLUMN].as_ref();
        let department_name = row[DEPARTMENT_COLUMN].as_ref();
        let university_type = row[TYPE_COLUMN].as_ref();
        let university_city = row[CITY_COLUMN].as_ref();

        let university_code = slugify(university_name);
        if university_code.is_empty() {
            log::warn!(
                "Row {}: university name '{}' produces an empty code",
                index + 1,
                university_name
            );
        }
        let faculty_code = faculty_code(faculty_name, &university_code);
        if slugify(faculty_name).is_empty() {
            log::warn!(
                "Row {}: faculty name '{}' produces an empty code",
                index + 1,
                faculty_name
            );
        }

        let catalog = &mut self.catalog;

        if !catalog.university_index.contains_key(&university_code) {
            catalog
                .university_index
                .insert(university_code.clone(), catalog.universities.len());
            catalog.universities.push(University {
                code: university_code.clone(),
                name: university_name.to_string(),
                city: university_city.to_string(),
                kind: university_type.to_string(),
            });
        }

        if !catalog.faculty_index.contains_key(&faculty_code) {
            catalog
                .faculty_index
                .insert(faculty_code.clone(), catalog.faculties.len());
            catalog.faculties.push(Faculty {
                code: faculty_code.clone(),
                university_code: university_code.clone(),
                name: faculty_name.to_string(),
            });
        }

        catalog.departments.push(Department {
            university_code,
            faculty_code,
            name: department_name.to_string(),
        });

        Ok(())
    }

    /// 構築した`Catalog`を返す
    pub fn finish(self) -> Catalog {
        log::debug!(
            "Processed rows into {} universities, {} faculties, {} departments",
            self.catalog.universities.len(),
            self.catalog.faculties.len(),
            self.catalog.departments.len()
        );
        self.catalog
    }
}

/// 行シーケンス全体を処理して`Catalog`を構築する
///
/// 最初の行はヘッダーとしてスキップされます。行が0件または1件の場合は
/// 空の`Catalog`を返します。不正な行を検出した時点で処理を中断します。
pub fn process_rows<S: AsRef<str>>(rows: &[Vec<S>]) -> Result<Catalog, UniSeedError> {
    let mut processor = RowProcessor::new();
    for (index, row) in rows.iter().enumerate() {
        processor.push_row(index, row)?;
    }
    Ok(processor.finish())
}
