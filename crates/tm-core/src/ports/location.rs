/// Address-bar state (`?viewing-snapshot=...`).
/// 地址栏状态。
pub trait LocationPort: Send + Sync {
    /// Current query string, if any. Read once at startup.
    fn read(&self) -> Option<String>;

    /// Replace the query string without creating a history entry.
    ///
    /// May block (file-backed stores do); callers on an async runtime should
    /// run it on the blocking pool.
    fn replace(&self, query: &str) -> anyhow::Result<()>;
}
