//! Boundary Tests for uniseed
//!
//! 空のシート、ヘッダーのみ、列不足、アポストロフィを含む名前などの境界条件を検証する。

use rust_xlsxwriter::*;
use std::fs;
use std::io::Cursor;
use uniseed::{EmptyTablePolicy, SeedBuilder, SqlQuoting, UniSeedError};

// Helper module for generating boundary test fixtures
mod fixtures {
    use super::*;

    /// Generate a workbook whose only sheet has no cells
    pub fn generate_empty_sheet() -> Result<Vec<u8>, XlsxError> {
        let mut workbook = Workbook::new();
        let _worksheet = workbook.add_worksheet();
        Ok(workbook.save_to_buffer()?)
    }

    /// Generate a workbook that only carries the header row
    pub fn generate_header_only() -> Result<Vec<u8>, XlsxError> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        for (col, title) in ["University", "Faculty", "Department", "", "Type", "City"]
            .iter()
            .enumerate()
        {
            worksheet.write_string(0, col as u16, *title)?;
        }
        Ok(workbook.save_to_buffer()?)
    }

    /// Generate a sheet that is only three columns wide
    pub fn generate_narrow_sheet() -> Result<Vec<u8>, XlsxError> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.write_string(0, 0, "University")?;
        worksheet.write_string(0, 1, "Faculty")?;
        worksheet.write_string(0, 2, "Department")?;
        worksheet.write_string(1, 0, "A Uni")?;
        worksheet.write_string(1, 1, "Eng")?;
        worksheet.write_string(1, 2, "CS")?;
        Ok(workbook.save_to_buffer()?)
    }

    /// Generate a sheet with a fully blank row between data rows
    pub fn generate_with_blank_row() -> Result<Vec<u8>, XlsxError> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        let rows: [(u32, [&str; 6]); 3] = [
            (0, ["University", "Faculty", "Department", "", "Type", "City"]),
            (1, ["A Uni", "Eng", "CS", "", "Public", "City1"]),
            (3, ["B Uni", "Eng", "CS", "", "Private", "City2"]),
        ];
        for (row, cells) in rows.iter() {
            for (col, value) in cells.iter().enumerate() {
                if !value.is_empty() {
                    worksheet.write_string(*row, col as u16, *value)?;
                }
            }
        }
        Ok(workbook.save_to_buffer()?)
    }

    /// Generate a sheet whose table starts at B2 instead of A1
    pub fn generate_offset_table() -> Result<Vec<u8>, XlsxError> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        let cells = ["A Uni", "Eng", "CS", "x", "Public", "City1"];
        for (col, value) in cells.iter().enumerate() {
            worksheet.write_string(1, col as u16 + 1, *value)?;
        }
        Ok(workbook.save_to_buffer()?)
    }

    /// Generate a sheet with an apostrophe in a university name
    pub fn generate_apostrophe() -> Result<Vec<u8>, XlsxError> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        let rows = [
            ["University", "Faculty", "Department", "", "Type", "City"],
            ["Saint Mary's", "Arts", "History", "", "Private", "Ankara"],
        ];
        for (row, cells) in rows.iter().enumerate() {
            for (col, value) in cells.iter().enumerate() {
                worksheet.write_string(row as u32, col as u16, *value)?;
            }
        }
        Ok(workbook.save_to_buffer()?)
    }
}

#[test]
fn test_empty_sheet_produces_empty_outputs() {
    let data = fixtures::generate_empty_sheet().unwrap();
    let generator = SeedBuilder::new().build().unwrap();

    let catalog = generator.load(Cursor::new(data)).unwrap();
    assert!(catalog.is_empty());
}

#[test]
fn test_header_only_omit_insert_policy() {
    let data = fixtures::generate_header_only().unwrap();
    let dir = tempfile::tempdir().unwrap();

    let generator = SeedBuilder::new()
        .with_output_dir(dir.path())
        .build()
        .unwrap();
    let report = generator.run(Cursor::new(data)).unwrap();
    assert_eq!(report.universities, 0);
    assert_eq!(report.departments, 0);

    assert_eq!(
        fs::read_to_string(dir.path().join("university.json")).unwrap(),
        "{}"
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("departments.json")).unwrap(),
        "[]"
    );

    for name in ["universities.sql", "faculties.sql", "departments.sql"] {
        let sql = fs::read_to_string(dir.path().join(name)).unwrap();
        assert!(sql.contains("CREATE TABLE"), "{} lacks CREATE TABLE", name);
        assert!(!sql.contains("INSERT"), "{} should omit INSERT", name);
        assert!(sql.ends_with("\t);\n"));
    }
}

#[test]
fn test_header_only_literal_policy() {
    let data = fixtures::generate_header_only().unwrap();
    let dir = tempfile::tempdir().unwrap();

    let generator = SeedBuilder::new()
        .with_output_dir(dir.path())
        .with_empty_table_policy(EmptyTablePolicy::Literal)
        .build()
        .unwrap();
    generator.run(Cursor::new(data)).unwrap();

    let sql = fs::read_to_string(dir.path().join("faculties.sql")).unwrap();
    assert!(sql.ends_with("INSERT INTO faculties (code, name, university_code) VALUES\n;\n"));
}

#[test]
fn test_narrow_sheet_is_malformed() {
    let data = fixtures::generate_narrow_sheet().unwrap();
    let dir = tempfile::tempdir().unwrap();

    let generator = SeedBuilder::new()
        .with_output_dir(dir.path())
        .build()
        .unwrap();

    match generator.run(Cursor::new(data)) {
        Err(UniSeedError::MalformedRow {
            row,
            found,
            expected,
        }) => {
            assert_eq!(row, 2);
            assert_eq!(found, 3);
            assert_eq!(expected, 6);
        }
        other => panic!("Expected MalformedRow error, got {:?}", other),
    }

    // 部分的な出力は生成されない
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_blank_row_is_malformed_by_default() {
    let data = fixtures::generate_with_blank_row().unwrap();
    let dir = tempfile::tempdir().unwrap();

    let generator = SeedBuilder::new()
        .with_output_dir(dir.path())
        .build()
        .unwrap();

    match generator.run(Cursor::new(data)) {
        Err(UniSeedError::MalformedRow { row, found, expected }) => {
            assert_eq!(row, 3);
            assert_eq!(found, 0);
            assert_eq!(expected, 6);
        }
        other => panic!("Expected MalformedRow error, got {:?}", other),
    }

    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_blank_rows_can_be_skipped() {
    let data = fixtures::generate_with_blank_row().unwrap();
    let generator = SeedBuilder::new().skip_blank_rows(true).build().unwrap();

    let rows = generator.read_rows(Cursor::new(data.clone())).unwrap();
    assert_eq!(rows.len(), 3);

    let catalog = generator.load(Cursor::new(data)).unwrap();
    assert_eq!(catalog.departments().len(), 2);
    assert!(catalog.university("").is_none());
}

#[test]
fn test_offset_table_keeps_absolute_columns() {
    let data = fixtures::generate_offset_table().unwrap();
    let generator = SeedBuilder::new().build().unwrap();

    let rows = generator.read_rows(Cursor::new(data)).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1][0], "");
    assert_eq!(rows[1][1], "A Uni");

    // 列Aが空のため列が1つずれて読まれ、列5は"Public"になる
    let catalog = uniseed::process_rows(&rows).unwrap();
    let university = &catalog.universities()[0];
    assert_eq!(university.code, "");
    assert_eq!(university.city, "Public");
}

#[test]
fn test_apostrophe_verbatim_and_escaped() {
    let data = fixtures::generate_apostrophe().unwrap();

    let verbatim_dir = tempfile::tempdir().unwrap();
    SeedBuilder::new()
        .with_output_dir(verbatim_dir.path())
        .build()
        .unwrap()
        .run(Cursor::new(data.clone()))
        .unwrap();
    let sql = fs::read_to_string(verbatim_dir.path().join("universities.sql")).unwrap();
    assert!(sql.contains("('saint-marys', 'Saint Mary's', 'Ankara', 'Private');"));

    let escaped_dir = tempfile::tempdir().unwrap();
    SeedBuilder::new()
        .with_output_dir(escaped_dir.path())
        .with_sql_quoting(SqlQuoting::Escaped)
        .build()
        .unwrap()
        .run(Cursor::new(data))
        .unwrap();
    let sql = fs::read_to_string(escaped_dir.path().join("universities.sql")).unwrap();
    assert!(sql.contains("('saint-marys', 'Saint Mary''s', 'Ankara', 'Private');"));
}

#[test]
fn test_input_size_limit() {
    let data = fixtures::generate_header_only().unwrap();
    let generator = SeedBuilder::new().with_max_input_size(16).build().unwrap();

    let result = generator.load(Cursor::new(data));
    assert!(matches!(result, Err(UniSeedError::SecurityViolation(_))));
}

#[test]
fn test_garbage_input_is_file_open_error() {
    let generator = SeedBuilder::new().build().unwrap();
    let result = generator.load(Cursor::new(b"not a workbook".to_vec()));
    assert!(matches!(result, Err(UniSeedError::FileOpen { .. })));
}
