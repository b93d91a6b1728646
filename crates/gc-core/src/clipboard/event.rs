use serde::{Deserialize, Serialize};

use super::{ClipKey, CopiedContent};

/// Change notification emitted whenever the history is modified.
///
/// Serialized as `{"event": "<name>", "payload": {...}}`:
///
/// | event             | payload                                  |
/// |-------------------|------------------------------------------|
/// | `new-content`     | `{"content": {"key": 1, "value": "..."}}` |
/// | `remove-content`  | `{"index": 1}`                           |
/// | `history-cleared` | `{"removed": 3}`                         |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "payload", rename_all = "kebab-case")]
pub enum HistoryEvent {
    NewContent { content: CopiedContent },
    RemoveContent { index: u64 },
    HistoryCleared { removed: usize },
}

impl HistoryEvent {
    pub fn new_content(content: CopiedContent) -> Self {
        HistoryEvent::NewContent { content }
    }

    pub fn removed(key: ClipKey) -> Self {
        HistoryEvent::RemoveContent { index: key.get() }
    }

    pub fn name(&self) -> &'static str {
        match self {
            HistoryEvent::NewContent { .. } => "new-content",
            HistoryEvent::RemoveContent { .. } => "remove-content",
            HistoryEvent::HistoryCleared { .. } => "history-cleared",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn events_serialize_with_kebab_case_names() {
        let new = HistoryEvent::new_content(CopiedContent::new(2, "hi"));
        assert_eq!(
            serde_json::to_value(&new).unwrap(),
            json!({"event": "new-content", "payload": {"content": {"key": 2, "value": "hi"}}})
        );

        let removed = HistoryEvent::removed(ClipKey(1));
        assert_eq!(
            serde_json::to_value(&removed).unwrap(),
            json!({"event": "remove-content", "payload": {"index": 1}})
        );
    }

    #[test]
    fn name_matches_serialized_tag() {
        let events = [
            HistoryEvent::new_content(CopiedContent::default()),
            HistoryEvent::removed(ClipKey(3)),
            HistoryEvent::HistoryCleared { removed: 0 },
        ];
        for event in events {
            let value = serde_json::to_value(&event).unwrap();
            assert_eq!(value["event"], event.name());
        }
    }
}
