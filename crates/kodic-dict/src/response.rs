use serde::Deserialize;

use crate::DictError;

/// Response shape of the dictionary search endpoint. Every level defaults
/// when absent, so a missing field along the path reads as an empty result
/// rather than a decode failure.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    #[serde(default)]
    pub search_result_map: SearchResultMap,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResultMap {
    #[serde(default)]
    pub search_result_list_map: SearchResultListMap,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchResultListMap {
    #[serde(rename = "WORD", default)]
    pub word: WordResult,
}

#[derive(Debug, Default, Deserialize)]
pub struct WordResult {
    #[serde(default)]
    pub items: Vec<Item>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Item {
    #[serde(rename = "meansCollector", default)]
    pub means_collector: Vec<MeansCollector>,
}

#[derive(Debug, Default, Deserialize)]
pub struct MeansCollector {
    #[serde(default)]
    pub means: Vec<Mean>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Mean {
    #[serde(default)]
    pub value: String,
}

impl SearchResponse {
    pub fn parse(body: &[u8]) -> Result<Self, DictError> {
        Ok(serde_json::from_slice(body)?)
    }

    /// Definition fragments of the first item's first means collector.
    /// Further items and collectors hold secondary senses and are
    /// deliberately ignored; the notification shows the primary sense only.
    pub fn first_means(&self) -> Option<Vec<String>> {
        let item = self
            .search_result_map
            .search_result_list_map
            .word
            .items
            .first()?;
        let collector = item.means_collector.first()?;
        Some(collector.means.iter().map(|mean| mean.value.clone()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_RESPONSE: &str = r#"{
        "searchResultMap": {
            "searchResultListMap": {
                "WORD": {
                    "items": [
                        {
                            "meansCollector": [
                                {
                                    "means": [
                                        {"value": "<strong>greeting</strong>"},
                                        {"value": "hi (→ hey)"}
                                    ]
                                },
                                {
                                    "means": [{"value": "secondary sense"}]
                                }
                            ]
                        },
                        {
                            "meansCollector": [
                                {"means": [{"value": "other item"}]}
                            ]
                        }
                    ]
                }
            }
        }
    }"#;

    #[test]
    fn extracts_first_item_first_collector_only() {
        let response = SearchResponse::parse(FULL_RESPONSE.as_bytes()).unwrap();
        assert_eq!(
            response.first_means(),
            Some(vec![
                "<strong>greeting</strong>".to_string(),
                "hi (→ hey)".to_string(),
            ])
        );
    }

    #[test]
    fn empty_items_is_no_result() {
        let body = r#"{"searchResultMap":{"searchResultListMap":{"WORD":{"items":[]}}}}"#;
        let response = SearchResponse::parse(body.as_bytes()).unwrap();
        assert_eq!(response.first_means(), None);
    }

    #[test]
    fn missing_fields_along_the_path_are_no_result() {
        for body in ["{}", r#"{"searchResultMap":{}}"#] {
            let response = SearchResponse::parse(body.as_bytes()).unwrap();
            assert_eq!(response.first_means(), None, "body: {body}");
        }

        let body = r#"{"searchResultMap":{"searchResultListMap":{"WORD":{"items":[{}]}}}}"#;
        let response = SearchResponse::parse(body.as_bytes()).unwrap();
        assert_eq!(response.first_means(), None);
    }

    #[test]
    fn malformed_body_fails_to_parse() {
        assert!(SearchResponse::parse(b"not json").is_err());
        assert!(SearchResponse::parse(b"").is_err());
    }

    #[test]
    fn mean_without_value_defaults_to_empty() {
        let body = r#"{"searchResultMap":{"searchResultListMap":{"WORD":{"items":[
            {"meansCollector":[{"means":[{}]}]}
        ]}}}}"#;
        let response = SearchResponse::parse(body.as_bytes()).unwrap();
        assert_eq!(response.first_means(), Some(vec![String::new()]));
    }
}
