/// Where an observed clipboard change came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardChangeOrigin {
    /// The user copied something; record it.
    LocalCapture,
    /// gclip itself wrote a history item back to the clipboard.
    LocalRestore,
}
