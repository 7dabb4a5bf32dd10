use super::Store;
use anyhow::Result;
use std::collections::HashMap;

/// In-process store; contents are lost when it is dropped
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, Vec<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for MemoryStore {
    fn get(&self, key: &str) -> Result<Vec<String>> {
        Ok(self.entries.get(key).cloned().unwrap_or_default())
    }

    fn set(&mut self, key: &str, ids: &[String]) -> Result<()> {
        self.entries.insert(key.to_string(), ids.to_vec());
        Ok(())
    }
}
