use super::FavoritesBackend;
use crate::error::{Result, SaarthiError};
use crate::model::PropertyId;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Default)]
struct Inner {
    /// Serialized JSON, to exercise the same round-trip as the file backend.
    data: Option<String>,
    write_count: usize,
}

/// In-memory favorites persistence for tests.
///
/// Clones share the same underlying storage, so a test can keep a handle
/// while handing another to the store and observe writes as they happen.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    inner: Rc<RefCell<Inner>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend whose stored payload is not valid JSON.
    pub fn corrupt() -> Self {
        let backend = Self::new();
        backend.inner.borrow_mut().data = Some("{ not an array".to_string());
        backend
    }

    /// Backend pre-seeded with the given ids (including any duplicates).
    pub fn with_ids(ids: &[PropertyId]) -> Self {
        let backend = Self::new();
        backend.inner.borrow_mut().data = Some(
            serde_json::to_string(ids).expect("ids serialize"),
        );
        backend
    }

    /// Ids currently persisted, decoded from storage.
    pub fn stored(&self) -> Vec<PropertyId> {
        self.inner
            .borrow()
            .data
            .as_deref()
            .and_then(|s| serde_json::from_str(s).ok())
            .unwrap_or_default()
    }

    pub fn write_count(&self) -> usize {
        self.inner.borrow().write_count
    }
}

impl FavoritesBackend for MemoryBackend {
    fn load(&self) -> Result<Vec<PropertyId>> {
        match &self.inner.borrow().data {
            None => Ok(Vec::new()),
            Some(raw) => serde_json::from_str(raw).map_err(SaarthiError::Serialization),
        }
    }

    fn save(&mut self, ids: &[PropertyId]) -> Result<()> {
        let raw = serde_json::to_string(ids).map_err(SaarthiError::Serialization)?;
        let mut inner = self.inner.borrow_mut();
        inner.data = Some(raw);
        inner.write_count += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_storage() {
        let a = MemoryBackend::new();
        let mut b = a.clone();
        b.save(&[2, 4]).unwrap();
        assert_eq!(a.stored(), vec![2, 4]);
        assert_eq!(a.write_count(), 1);
    }

    #[test]
    fn empty_backend_loads_empty() {
        assert!(MemoryBackend::new().load().unwrap().is_empty());
    }

    #[test]
    fn corrupt_backend_errors_on_load() {
        assert!(MemoryBackend::corrupt().load().is_err());
    }
}
