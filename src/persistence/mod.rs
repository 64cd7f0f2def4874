//! # Persistence
//!
//! The canteen keeps its whole state in one JSON file. [`DataFile::load`] reads it once
//! at startup and [`DataFile::save`] overwrites it in full when the user saves. There is no
//! journaling: a crash in the middle of a save can leave a truncated file behind.
//!
//! A missing file means a first run and yields empty collections. A file that exists
//! but cannot be parsed is reported as [`PersistenceError::Malformed`] and nothing is
//! loaded; the caller decides whether to stop.

pub mod document;
pub mod error;

pub use document::*;
pub use error::*;

use crate::menu::Menu;
use crate::orders::OrderManager;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File name used when no other path is configured.
pub const DEFAULT_DATA_FILE: &str = "data.json";

/// Where the loaded state came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hydration {
    /// State was read from an existing data file.
    Restored,
    /// No data file existed; the collections start empty.
    Fresh,
}

/// Handle on the canteen's data file.
#[derive(Debug, Clone)]
pub struct DataFile {
    path: PathBuf,
}

impl Default for DataFile {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_FILE)
    }
}

impl DataFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serializes both collections and replaces the file's contents.
    pub fn save(&self, menu: &Menu, orders: &OrderManager) -> Result<(), PersistenceError> {
        let doc = CanteenDocument {
            menu: menu.to_document(),
            order_manager: orders.to_document(),
        };
        let raw = doc.to_json().map_err(PersistenceError::Encode)?;
        fs::write(&self.path, raw).map_err(|source| PersistenceError::Io {
            path: self.path.clone(),
            source,
        })?;
        info!(
            path = %self.path.display(),
            dishes = menu.len(),
            orders = orders.len(),
            "Data saved"
        );
        Ok(())
    }

    /// Reads the file back into a menu and an order book.
    pub fn load(&self) -> Result<(Menu, OrderManager, Hydration), PersistenceError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!(path = %self.path.display(), "No saved data found, starting empty");
                return Ok((Menu::new(), OrderManager::new(), Hydration::Fresh));
            }
            Err(source) => {
                return Err(PersistenceError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        debug!(path = %self.path.display(), bytes = raw.len(), "Read data file");

        let doc = CanteenDocument::from_json(&raw).map_err(|source| PersistenceError::Malformed {
            path: self.path.clone(),
            source,
        })?;
        let menu = Menu::from_document(doc.menu);
        let orders = OrderManager::from_document(doc.order_manager);
        info!(
            path = %self.path.display(),
            dishes = menu.len(),
            orders = orders.len(),
            "Data loaded"
        );
        Ok((menu, orders, Hydration::Restored))
    }
}
