//! Output Module
//!
//! `Catalog`をJSONドキュメントとSQLシードスクリプトに変換し、
//! 出力ディレクトリへアトミックに書き込むモジュール。

mod json;
mod sql;

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::UniSeedError;
use crate::processor::Catalog;

pub(crate) use json::{render_departments_json, render_faculties_json, render_universities_json};
pub(crate) use sql::{render_departments_sql, render_faculties_sql, render_universities_sql};

/// 出力成果物の種類
///
/// 宣言順が書き込み順です。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Artifact {
    /// 大学のJSON（`university.json`）
    UniversityJson,
    /// 学部のJSON（`faculties.json`）
    FacultyJson,
    /// 学科のJSON（`departments.json`）
    DepartmentJson,
    /// 大学のSQL（`universities.sql`）
    UniversitySql,
    /// 学部のSQL（`faculties.sql`）
    FacultySql,
    /// 学科のSQL（`departments.sql`）
    DepartmentSql,
}

impl Artifact {
    /// すべての成果物（書き込み順）
    pub const ALL: [Artifact; 6] = [
        Artifact::UniversityJson,
        Artifact::FacultyJson,
        Artifact::DepartmentJson,
        Artifact::UniversitySql,
        Artifact::FacultySql,
        Artifact::DepartmentSql,
    ];

    /// デフォルトのファイル名
    pub fn default_file_name(self) -> &'static str {
        match self {
            Artifact::UniversityJson => "university.json",
            Artifact::FacultyJson => "faculties.json",
            Artifact::DepartmentJson => "departments.json",
            Artifact::UniversitySql => "universities.sql",
            Artifact::FacultySql => "faculties.sql",
            Artifact::DepartmentSql => "departments.sql",
        }
    }

    pub(crate) fn render(
        self,
        catalog: &Catalog,
        config: &crate::builder::SeedConfig,
    ) -> Result<String, UniSeedError> {
        match self {
            Artifact::UniversityJson => {
                render_universities_json(catalog, config.record_order, config.json_layout)
            }
            Artifact::FacultyJson => {
                render_faculties_json(catalog, config.record_order, config.json_layout)
            }
            Artifact::DepartmentJson => render_departments_json(catalog),
            Artifact::UniversitySql => Ok(render_universities_sql(
                catalog,
                config.record_order,
                config.sql_quoting,
                config.empty_table_policy,
            )),
            Artifact::FacultySql => Ok(render_faculties_sql(
                catalog,
                config.record_order,
                config.sql_quoting,
                config.empty_table_policy,
            )),
            Artifact::DepartmentSql => Ok(render_departments_sql(
                catalog,
                config.sql_quoting,
                config.empty_table_policy,
            )),
        }
    }
}

/// レンダリング済みの成果物
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedArtifact {
    pub artifact: Artifact,
    /// 出力ディレクトリ内のファイル名
    pub file_name: String,
    pub contents: String,
}

/// ファイルをアトミックに書き込む
///
/// 出力先と同じディレクトリに一時ファイルを作成し、書き込み後に
/// 目的のファイル名へ置き換えます。途中で失敗しても既存のファイルは壊れません。
///
/// # 戻り値
///
/// * `Ok(PathBuf)` - 書き込んだファイルのパス
/// * `Err(UniSeedError::FileWrite)` - 一時ファイルの作成、書き込み、置き換えのいずれかに失敗した場合
pub(crate) fn write_atomic(
    dir: &Path,
    file_name: &str,
    contents: &[u8],
) -> Result<PathBuf, UniSeedError> {
    let path = dir.join(file_name);
    let write_error = |source: std::io::Error| UniSeedError::FileWrite {
        path: path.clone(),
        source,
    };

    let mut temp = NamedTempFile::new_in(dir).map_err(write_error)?;
    temp.write_all(contents).map_err(write_error)?;
    temp.flush().map_err(write_error)?;
    temp.persist(&path).map_err(|e| write_error(e.error))?;

    log::debug!("Wrote {} ({} bytes)", path.display(), contents.len());
    Ok(path)
}
