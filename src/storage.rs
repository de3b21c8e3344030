//! Durable local slots.
//!
//! A slot is a single named key holding one serialized value. The cart is the
//! only thing the storefront keeps in one.

use std::{
    fs, io,
    path::{Path, PathBuf},
    sync::{Mutex, PoisonError},
};

use mockall::automock;
use thiserror::Error;

/// Slot key the cart is kept under.
pub const CART_SLOT_KEY: &str = "bobateaCart";

/// Errors raised by slot backends.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing file could not be read or written.
    #[error("slot io error: {0}")]
    Io(#[from] io::Error),
}

/// Read/write access to one durable slot.
#[automock]
pub trait SlotStorage {
    /// Read the slot, returning `None` when nothing has been stored yet.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backend cannot be read.
    fn load(&self) -> Result<Option<String>, StorageError>;

    /// Replace the slot contents.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backend cannot be written.
    fn store(&self, payload: &str) -> Result<(), StorageError>;
}

/// A slot backed by a JSON file in a data directory.
#[derive(Debug, Clone)]
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    /// Slot `key` inside `dir`, stored as `<dir>/<key>.json`.
    pub fn new(dir: impl AsRef<Path>, key: &str) -> Self {
        Self {
            path: dir.as_ref().join(format!("{key}.json")),
        }
    }

    /// The cart slot inside `dir`.
    pub fn cart(dir: impl AsRef<Path>) -> Self {
        Self::new(dir, CART_SLOT_KEY)
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SlotStorage for FileSlot {
    fn load(&self) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(error) => Err(error.into()),
        }
    }

    fn store(&self, payload: &str) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Write beside the target then rename, so a crash never leaves half a cart.
        let tmp = self.path.with_extension("json.tmp");

        fs::write(&tmp, payload)?;
        fs::rename(&tmp, &self.path)?;

        Ok(())
    }
}

/// An in-process slot. Contents are lost when it is dropped.
#[derive(Debug, Default)]
pub struct MemorySlot {
    contents: Mutex<Option<String>>,
}

impl MemorySlot {
    /// An empty slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A slot pre-filled with `payload`.
    pub fn with_contents(payload: impl Into<String>) -> Self {
        Self {
            contents: Mutex::new(Some(payload.into())),
        }
    }

    /// Current contents, if any.
    pub fn contents(&self) -> Option<String> {
        self.contents
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl SlotStorage for MemorySlot {
    fn load(&self) -> Result<Option<String>, StorageError> {
        Ok(self.contents())
    }

    fn store(&self, payload: &str) -> Result<(), StorageError> {
        *self
            .contents
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(payload.to_string());

        Ok(())
    }
}

impl<S: SlotStorage + ?Sized> SlotStorage for &S {
    fn load(&self) -> Result<Option<String>, StorageError> {
        (**self).load()
    }

    fn store(&self, payload: &str) -> Result<(), StorageError> {
        (**self).store(payload)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn file_slot_missing_file_loads_none() -> TestResult {
        let dir = tempfile::tempdir()?;
        let slot = FileSlot::cart(dir.path());

        assert_eq!(slot.load()?, None);

        Ok(())
    }

    #[test]
    fn file_slot_stores_and_loads() -> TestResult {
        let dir = tempfile::tempdir()?;
        let slot = FileSlot::cart(dir.path().join("nested"));

        slot.store("[]")?;

        assert_eq!(slot.load()?, Some("[]".to_string()));
        assert!(slot.path().ends_with("nested/bobateaCart.json"));

        slot.store("[1]")?;

        assert_eq!(slot.load()?, Some("[1]".to_string()));

        Ok(())
    }

    #[test]
    fn file_slot_leaves_no_temp_file() -> TestResult {
        let dir = tempfile::tempdir()?;
        let slot = FileSlot::new(dir.path(), "orders");

        slot.store("{}")?;

        let names: Vec<_> = fs::read_dir(dir.path())?
            .map(|entry| entry.map(|entry| entry.file_name()))
            .collect::<Result<_, _>>()?;

        assert_eq!(names, vec!["orders.json"]);

        Ok(())
    }

    #[test]
    fn file_slot_directory_as_target_errors() -> TestResult {
        let dir = tempfile::tempdir()?;
        fs::create_dir(dir.path().join("cart.json"))?;

        let slot = FileSlot::new(dir.path(), "cart");

        assert!(matches!(slot.load(), Err(StorageError::Io(_))));

        Ok(())
    }

    #[test]
    fn memory_slot_round_trips() -> TestResult {
        let slot = MemorySlot::new();

        assert_eq!(slot.load()?, None);

        slot.store("payload")?;

        assert_eq!(slot.load()?, Some("payload".to_string()));
        assert_eq!(
            MemorySlot::with_contents("seed").contents(),
            Some("seed".to_string())
        );

        Ok(())
    }
}
