//! JSON Writer
//!
//! エンティティコレクションを2スペースインデントのJSONに変換します。

use serde::ser::{Serialize, Serializer};

use crate::api::{JsonLayout, RecordOrder};
use crate::error::UniSeedError;
use crate::processor::Catalog;

/// コードをキーとするオブジェクトとして、与えられた順序のままシリアライズする
struct Keyed<'a, T>(Vec<(&'a str, &'a T)>);

impl<T: Serialize> Serialize for Keyed<'_, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(code, record)| (code, record)))
    }
}

fn render_records<T: Serialize>(
    records: Vec<(&str, &T)>,
    layout: JsonLayout,
) -> Result<String, UniSeedError> {
    let json = match layout {
        JsonLayout::Keyed => serde_json::to_string_pretty(&Keyed(records))?,
        JsonLayout::Array => {
            let values: Vec<&T> = records.into_iter().map(|(_, record)| record).collect();
            serde_json::to_string_pretty(&values)?
        }
    };
    Ok(json)
}

pub(crate) fn render_universities_json(
    catalog: &Catalog,
    order: RecordOrder,
    layout: JsonLayout,
) -> Result<String, UniSeedError> {
    let records = catalog
        .ordered_universities(order)
        .into_iter()
        .map(|u| (u.code.as_str(), u))
        .collect();
    render_records(records, layout)
}

pub(crate) fn render_faculties_json(
    catalog: &Catalog,
    order: RecordOrder,
    layout: JsonLayout,
) -> Result<String, UniSeedError> {
    let records = catalog
        .ordered_faculties(order)
        .into_iter()
        .map(|f| (f.code.as_str(), f))
        .collect();
    render_records(records, layout)
}

/// 学科は常に入力順の配列（0件なら`[]`）
pub(crate) fn render_departments_json(catalog: &Catalog) -> Result<String, UniSeedError> {
    Ok(serde_json::to_string_pretty(catalog.departments())?)
}
