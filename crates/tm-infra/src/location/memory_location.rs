use std::sync::Mutex;

use tm_core::ports::LocationPort;

/// Location kept in memory only. Used when no location file is configured.
#[derive(Default)]
pub struct InMemoryLocation {
    query: Mutex<Option<String>>,
}

impl InMemoryLocation {
    pub fn new(initial: Option<String>) -> Self {
        Self {
            query: Mutex::new(initial),
        }
    }
}

impl LocationPort for InMemoryLocation {
    fn read(&self) -> Option<String> {
        self.query
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn replace(&self, query: &str) -> anyhow::Result<()> {
        *self
            .query
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(query.to_string());
        Ok(())
    }
}
