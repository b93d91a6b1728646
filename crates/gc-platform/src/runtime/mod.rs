pub mod watcher;
pub mod watcher_control;

pub use watcher::ClipboardWatcher;
pub use watcher_control::PollingWatcherControl;
