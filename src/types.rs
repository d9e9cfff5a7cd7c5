//! Wire types for the banks resource.

use serde::Deserialize;

/// A single bank record.
///
/// Returned by the `/banks/{code}` endpoint. All fields are plain strings;
/// when a request narrows the response with a field selection, the omitted
/// fields deserialize to their empty defaults.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bank {
    /// Four-digit bank code (e.g. "0001").
    #[serde(default)]
    pub code: String,
    /// Bank name in kanji.
    #[serde(default)]
    pub name: String,
    /// Name in half-width katakana.
    #[serde(default)]
    pub half_width_kana: String,
    /// Name in full-width katakana.
    #[serde(default)]
    pub full_width_kana: String,
    /// Name in hiragana.
    #[serde(default)]
    pub hiragana: String,
}

/// A paginated page of bank records.
///
/// Models the `/banks` list response. No call path in this crate walks the
/// cursor yet; the type exists so list support can be added without a wire
/// change.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Banks {
    /// The bank records on this page.
    #[serde(rename = "banks", default)]
    pub data: Vec<Bank>,
    /// Number of records on this page.
    #[serde(default)]
    pub size: u32,
    /// Page size limit requested.
    #[serde(default)]
    pub limit: u32,
    /// Whether a following page exists.
    #[serde(default)]
    pub has_next: bool,
    /// Opaque cursor for the following page.
    #[serde(default)]
    pub next_cursor: String,
    /// Whether a preceding page exists.
    #[serde(default)]
    pub has_prev: bool,
    /// Data set version stamp.
    #[serde(default)]
    pub version: String,
}

/// Parameters for GET requests against the banks resource.
///
/// `fields` narrows the response to the named fields server-side; an empty
/// list requests all fields (the server default) and omits the query
/// parameter entirely.
#[derive(Debug, Clone, Default)]
pub struct GetParams {
    /// Field names to request, joined with commas on the wire.
    pub fields: Vec<String>,
}

impl GetParams {
    /// Create a selection for the given fields.
    pub fn with_fields<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bank_deserializes_camel_case_fields() {
        let json = r#"{
            "code": "0001",
            "name": "みずほ銀行",
            "halfWidthKana": "ﾐｽﾞﾎ",
            "fullWidthKana": "ミズホ",
            "hiragana": "みずほ"
        }"#;
        let bank: Bank = serde_json::from_str(json).unwrap();
        assert_eq!(bank.code, "0001");
        assert_eq!(bank.name, "みずほ銀行");
        assert_eq!(bank.half_width_kana, "ﾐｽﾞﾎ");
        assert_eq!(bank.full_width_kana, "ミズホ");
        assert_eq!(bank.hiragana, "みずほ");
    }

    #[test]
    fn test_bank_missing_fields_default_to_empty() {
        let bank: Bank = serde_json::from_str(r#"{"code":"0005"}"#).unwrap();
        assert_eq!(bank.code, "0005");
        assert!(bank.name.is_empty());
        assert!(bank.hiragana.is_empty());
    }

    #[test]
    fn test_banks_page_deserializes_pagination_metadata() {
        let json = r#"{
            "banks": [
                {"code":"0001","name":"みずほ銀行","halfWidthKana":"","fullWidthKana":"","hiragana":""},
                {"code":"0005","name":"三菱ＵＦＪ銀行","halfWidthKana":"","fullWidthKana":"","hiragana":""}
            ],
            "size": 2,
            "limit": 2,
            "hasNext": true,
            "nextCursor": "MDAwNQ==",
            "hasPrev": false,
            "version": "2024-04-01"
        }"#;
        let page: Banks = serde_json::from_str(json).unwrap();
        assert_eq!(page.data.len(), 2);
        assert_eq!(page.data[0].code, "0001");
        assert_eq!(page.size, 2);
        assert!(page.has_next);
        assert!(!page.has_prev);
        assert_eq!(page.next_cursor, "MDAwNQ==");
        assert_eq!(page.version, "2024-04-01");
    }

    #[test]
    fn test_get_params_with_fields() {
        let params = GetParams::with_fields(["code", "name"]);
        assert_eq!(params.fields, vec!["code", "name"]);
        assert!(GetParams::default().fields.is_empty());
    }
}
