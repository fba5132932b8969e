//! Durable local storage for the cart and order history.
//!
//! Two independent JSON records under a store directory: `cart.json` is
//! overwritten on every cart mutation, `orders.json` is an append-only
//! history. Storage is best-effort and never blocks the in-memory flow:
//! missing or corrupt data loads as empty defaults, and write failures are
//! logged and swallowed.

use std::fs;
use std::path::PathBuf;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::cart::Cart;
use crate::order::Order;

const CART_FILE: &str = "cart.json";
const ORDERS_FILE: &str = "orders.json";

/// File-backed store for the current cart and the order history.
#[derive(Debug, Clone)]
pub struct Store {
    dir: PathBuf,
}

impl Store {
    /// Open a store rooted at `dir`, creating the directory if needed.
    ///
    /// Directory creation failure is logged, not fatal; subsequent writes
    /// will fail and be swallowed the same way.
    pub fn open(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        if let Err(e) = fs::create_dir_all(&dir) {
            warn!(dir = %dir.display(), error = %e, "failed to create store directory");
        }
        Self { dir }
    }

    /// Load the current cart, or an empty cart if the record is missing or
    /// corrupt.
    #[must_use]
    pub fn load_cart(&self) -> Cart {
        self.read_or_default(CART_FILE)
    }

    /// Overwrite the current cart record.
    pub fn save_cart(&self, cart: &Cart) {
        self.write_json(CART_FILE, cart);
    }

    /// Load the order history, oldest first, or an empty history if the
    /// record is missing or corrupt.
    #[must_use]
    pub fn load_orders(&self) -> Vec<Order> {
        self.read_or_default(ORDERS_FILE)
    }

    /// Append an order to the history record.
    pub fn append_order(&self, order: &Order) {
        let mut history = self.load_orders();
        history.push(order.clone());
        self.write_json(ORDERS_FILE, &history);
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    fn read_or_default<T: DeserializeOwned + Default>(&self, name: &str) -> T {
        let path = self.path(name);
        if !path.exists() {
            return T::default();
        }
        let data = match fs::read_to_string(&path) {
            Ok(data) => data,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to read store record");
                return T::default();
            }
        };
        match serde_json::from_str(&data) {
            Ok(value) => value,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "corrupt store record, using default");
                T::default()
            }
        }
    }

    fn write_json<T: Serialize>(&self, name: &str, value: &T) {
        let path = self.path(name);
        let data = match serde_json::to_string_pretty(value) {
            Ok(data) => data,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to serialize store record");
                return;
            }
        };
        match fs::write(&path, data) {
            Ok(()) => debug!(path = %path.display(), "store record written"),
            Err(e) => warn!(path = %path.display(), error = %e, "failed to write store record"),
        }
    }
}
