//! # Order Log
//!
//! Append-only JSON-lines file. Each paid order becomes exactly one line:
//! a JSON array with one object per hot dog.
//!
//! ## Write Path
//! ```text
//! CompletedOrder
//!      │
//!      ▼  From<&HotDog>
//! Vec<OrderLogRecord>
//!      │
//!      ▼  serde_json::to_string
//! "[{...},{...}]\n"
//!      │
//!      ▼  OpenOptions::append
//! orders.json
//! ```
//!
//! The file is reopened for every append; no handle is held between orders.

use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use kiosk_core::{CompletedOrder, HotDog, Money};

use crate::error::{StoreError, StoreResult};

// =============================================================================
// Record
// =============================================================================

/// One hot dog as it appears in the log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLogRecord {
    /// Hot dog label ("Classic", "Custom", ...).
    pub name: String,
    /// Display names of the ingredients, in build order.
    pub ingredients: Vec<String>,
    /// Undiscounted price in minor units.
    pub price: Money,
}

impl From<&HotDog> for OrderLogRecord {
    fn from(hotdog: &HotDog) -> Self {
        OrderLogRecord {
            name: hotdog.name().to_string(),
            ingredients: hotdog
                .ingredient_names()
                .into_iter()
                .map(str::to_string)
                .collect(),
            price: hotdog.price(),
        }
    }
}

// =============================================================================
// Log
// =============================================================================

/// Handle to the order log file.
#[derive(Debug, Clone)]
pub struct OrderLog {
    path: PathBuf,
}

impl OrderLog {
    /// Opens (creating if absent) the log at `path`.
    ///
    /// Missing parent directories are created. Existing content is kept.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| StoreError::open(parent, e))?;
        }

        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| StoreError::open(&path, e))?;

        info!(path = %path.display(), "Order log opened");
        Ok(OrderLog { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends `order` as a single line.
    ///
    /// Serialization happens before the file is touched, so a failure never
    /// leaves a partial line behind.
    pub fn append(&self, order: &CompletedOrder) -> StoreResult<()> {
        let records: Vec<OrderLogRecord> =
            order.hotdogs().iter().map(OrderLogRecord::from).collect();

        let mut line = serde_json::to_string(&records)?;
        line.push('\n');

        debug!(
            order_id = %order.id(),
            items = records.len(),
            total = %order.total(),
            "Appending order to log"
        );

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| StoreError::write(&self.path, e))?;

        file.write_all(line.as_bytes())
            .map_err(|e| StoreError::write(&self.path, e))?;

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
