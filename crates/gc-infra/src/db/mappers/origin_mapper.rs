use anyhow::{bail, Result};
use gc_core::ClipboardChangeOrigin;

pub fn origin_to_str(origin: ClipboardChangeOrigin) -> &'static str {
    match origin {
        ClipboardChangeOrigin::LocalCapture => "local_capture",
        ClipboardChangeOrigin::LocalRestore => "local_restore",
    }
}

pub fn origin_from_str(value: &str) -> Result<ClipboardChangeOrigin> {
    match value {
        "local_capture" => Ok(ClipboardChangeOrigin::LocalCapture),
        "local_restore" => Ok(ClipboardChangeOrigin::LocalRestore),
        other => bail!("unknown clipboard change origin: {other}"),
    }
}
