use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::page::{HasPage, PageIdentity};

/// A block hit from a Logseq search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    #[serde(deserialize_with = "crate::parsers::deserializers::deserialize_uuid")]
    pub uuid: String,
    pub content: String,
    pub page: PageIdentity,
    #[serde(default)]
    pub html: String,
    #[serde(default)]
    pub format: String,
    #[serde(default)]
    pub marker: String,
    #[serde(default)]
    pub priority: String,
    /// DB graph properties
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Map<String, Value>>,
    /// DB graph tags
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Task status for DB graphs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// A page-content hit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageContent {
    #[serde(deserialize_with = "crate::parsers::deserializers::deserialize_uuid")]
    pub uuid: String,
    pub content: String,
    pub page: PageIdentity,
}

impl HasPage for Block {
    fn page(&self) -> &PageIdentity {
        &self.page
    }
}

impl HasPage for PageContent {
    fn page(&self) -> &PageIdentity {
        &self.page
    }
}
