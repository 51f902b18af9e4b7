//! SQL Writer
//!
//! 固定スキーマの`CREATE TABLE`文と、全レコードを列挙する単一の
//! 複数行`INSERT`文を生成します。

use crate::api::{EmptyTablePolicy, RecordOrder, SqlQuoting};
use crate::processor::Catalog;

/// テーブル定義
///
/// 空白とインデントを含め、既存のシードスクリプトと同一のテキストです。
struct TableSchema {
    create: &'static str,
    insert: &'static str,
}

const UNIVERSITIES: TableSchema = TableSchema {
    create: "\n\tCREATE TABLE universities(\n\
             \t\tid SERIAL,\n\
             \t\tcode TEXT,\n\
             \t\tname TEXT,\n\
             \t\tcity TEXT,\n\
             \t\ttype TEXT,\n\
             \t\t\tUNIQUE(code)\n\
             \t);",
    insert: "\n\tINSERT INTO universities (code, name, city, type) VALUES",
};

const FACULTIES: TableSchema = TableSchema {
    create: "\n\tCREATE TABLE faculties (\n\
             \t\tid SERIAL,\n\
             \t\tcode TEXT,\n\
             \t\tname TEXT,\n\
             \t\tuniversity_code TEXT,\n\
             \t\tUNIQUE(code,university_code),\n\
             \t\tFOREIGN KEY (university_code) REFERENCES universities(code)\n\
             \t);",
    insert: "\n\tINSERT INTO faculties (code, name, university_code) VALUES",
};

const DEPARTMENTS: TableSchema = TableSchema {
    create: "\n\tCREATE TABLE departments (\n\
             \t\tid SERIAL,\n\
             \t\tname TEXT,\n\
             \t\tuniversity_code TEXT,\n\
             \t\tfaculty_code TEXT,\n\
             \t\tFOREIGN KEY (university_code) REFERENCES universities(code),\n\
             \t\tFOREIGN KEY (faculty_code) REFERENCES faculties(code)\n\
             \t);",
    insert: "\n\tINSERT INTO departments ( university_code, faculty_code, name) VALUES",
};

/// 値を単一引用符のSQLリテラルにする
fn literal(value: &str, quoting: SqlQuoting) -> String {
    match quoting {
        SqlQuoting::Verbatim => {
            if value.contains('\'') {
                log::warn!("Value {:?} contains an unescaped quote; the SQL will be invalid", value);
            }
            format!("'{}'", value)
        }
        SqlQuoting::Escaped => format!("'{}'", value.replace('\'', "''")),
    }
}

fn tuple(values: &[&str], quoting: SqlQuoting) -> String {
    let literals: Vec<String> = values.iter().map(|v| literal(v, quoting)).collect();
    format!("({})", literals.join(", "))
}

fn render_table(schema: &TableSchema, tuples: Vec<String>, policy: EmptyTablePolicy) -> String {
    if tuples.is_empty() && policy == EmptyTablePolicy::OmitInsert {
        return format!("{}\n", schema.create);
    }

    format!(
        "{}{}\n{};\n",
        schema.create,
        schema.insert,
        tuples.join(",\n")
    )
}

pub(crate) fn render_universities_sql(
    catalog: &Catalog,
    order: RecordOrder,
    quoting: SqlQuoting,
    policy: EmptyTablePolicy,
) -> String {
    let tuples = catalog
        .ordered_universities(order)
        .into_iter()
        .map(|u| tuple(&[u.code.as_str(), u.name.as_str(), u.city.as_str(), u.kind.as_str()], quoting))
        .collect();
    render_table(&UNIVERSITIES, tuples, policy)
}

pub(crate) fn render_faculties_sql(
    catalog: &Catalog,
    order: RecordOrder,
    quoting: SqlQuoting,
    policy: EmptyTablePolicy,
) -> String {
    let tuples = catalog
        .ordered_faculties(order)
        .into_iter()
        .map(|f| tuple(&[f.code.as_str(), f.name.as_str(), f.university_code.as_str()], quoting))
        .collect();
    render_table(&FACULTIES, tuples, policy)
}

/// 学科は常に入力順
pub(crate) fn render_departments_sql(
    catalog: &Catalog,
    quoting: SqlQuoting,
    policy: EmptyTablePolicy,
) -> String {
    let tuples = catalog
        .departments()
        .iter()
        .map(|d| tuple(&[d.university_code.as_str(), d.faculty_code.as_str(), d.name.as_str()], quoting))
        .collect();
    render_table(&DEPARTMENTS, tuples, policy)
}
