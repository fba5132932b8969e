//! Store configuration.
//!
//! There is no config file; the defaults below are the store's published
//! contact points. Embedders construct a [`StoreConfig`] directly when they
//! need different values (tests do).

use serde::{Deserialize, Serialize};

/// Store-level configuration for checkout hand-off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Display name of the store.
    pub store_name: String,
    /// WhatsApp number in international format, digits only (no "+").
    pub whatsapp_number: String,
    /// Fallback address for order confirmation mail when the customer
    /// leaves their email blank.
    pub store_email: String,
    /// Prefix for generated order references.
    pub order_ref_prefix: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            store_name: "SBOS Store".to_owned(),
            whatsapp_number: "27726589482".to_owned(),
            store_email: "yourstore@example.com".to_owned(),
            order_ref_prefix: "SBOS".to_owned(),
        }
    }
}
