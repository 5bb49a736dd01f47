//! The JSON resource shared by all the API contexts.
use serde::{Deserialize, Serialize};

/// Every JSON reply is one object with only the fields that apply.
///
/// ```json
/// {"table_created": "scores"}
/// ```
#[derive(Serialize, Deserialize, Debug, Default, PartialEq, Eq)]
pub struct Reply {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hello: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tables: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_created: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_deleted: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_answer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub added_user: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Reply {
    #[must_use]
    pub fn error(message: &str) -> Self {
        Self {
            error: Some(message.to_owned()),
            ..Default::default()
        }
    }
}
