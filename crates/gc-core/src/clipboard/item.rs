use serde::{Deserialize, Serialize};

use super::CopiedContent;

/// Sequence key of a history item. Keys are assigned in increasing order and
/// never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClipKey(pub u64);

impl ClipKey {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ClipKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ClipKey {
    fn from(key: u64) -> Self {
        Self(key)
    }
}

/// A persisted clipboard history item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardItem {
    pub key: ClipKey,
    pub content: String,
    pub captured_at_ms: i64,
}

impl ClipboardItem {
    pub fn new(key: ClipKey, content: impl Into<String>, captured_at_ms: i64) -> Self {
        Self {
            key,
            content: content.into(),
            captured_at_ms,
        }
    }

    pub fn to_copied_content(&self) -> CopiedContent {
        CopiedContent::new(self.key.get(), self.content.clone())
    }
}

impl From<ClipboardItem> for CopiedContent {
    fn from(item: ClipboardItem) -> Self {
        CopiedContent {
            key: Some(item.key.get().into()),
            value: Some(item.content),
        }
    }
}

impl From<&ClipboardItem> for CopiedContent {
    fn from(item: &ClipboardItem) -> Self {
        item.to_copied_content()
    }
}
