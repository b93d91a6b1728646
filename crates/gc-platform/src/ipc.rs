/// Events produced by platform runtime components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformEvent {
    /// The system clipboard now holds different text.
    ClipboardChanged { text: String },
}
