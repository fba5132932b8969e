//! Integration tests for SBOS Store.
//!
//! The storefront is a library, so these tests run fully in-process: each
//! test builds a [`Shop`](sbos_storefront::Shop) over a temporary store
//! directory and drives the whole catalog → checkout → success flow through
//! the public API.
//!
//! # Test Categories
//!
//! - `checkout_flow` - End-to-end order placement
//! - `persistence` - Cart and order history storage across restarts

use sbos_storefront::{Shop, Store, StoreConfig};
use tempfile::TempDir;

/// A shop backed by a temporary store directory.
///
/// The directory lives as long as the context, so a second shop can be
/// opened over the same files to simulate a restart.
pub struct TestShop {
    dir: TempDir,
    /// The shop under test.
    pub shop: Shop,
}

impl TestShop {
    /// Create a shop over a fresh temporary directory.
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        let dir = match TempDir::new() {
            Ok(dir) => dir,
            Err(e) => panic!("tempdir: {e}"),
        };
        let shop = Shop::new(StoreConfig::default(), Store::open(dir.path()));
        Self { dir, shop }
    }

    /// Open a second shop over the same store directory, as a restart would.
    #[must_use]
    pub fn reopen(&self) -> Shop {
        Shop::new(StoreConfig::default(), Store::open(self.dir.path()))
    }

    /// The raw store, for asserting on persisted records.
    #[must_use]
    pub fn store(&self) -> Store {
        Store::open(self.dir.path())
    }

    /// Path of the store directory, for tampering with records directly.
    #[must_use]
    pub fn store_path(&self) -> &std::path::Path {
        self.dir.path()
    }
}

impl Default for TestShop {
    fn default() -> Self {
        Self::new()
    }
}
