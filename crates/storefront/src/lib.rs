//! SBOS Storefront - catalog, cart, and checkout logic.
//!
//! The storefront core is the order builder: option selection → price
//! computation → cart aggregation → validation → order-record assembly →
//! summary serialization. Rendering, message delivery, and form handling
//! are the embedder's concern; this crate owns the state and the rules.
//!
//! # Modules
//!
//! - [`catalog`] - Static product catalog with option groups
//! - [`selection`] - Typed option selections and extra-choice parsing
//! - [`cart`] - Cart lines and pricing
//! - [`customer`] - Checkout form data and delivery methods
//! - [`totals`] - Derived cart totals
//! - [`checkout`] - Submission validation and order assembly
//! - [`order`] - Immutable order records
//! - [`summary`] - Order summary text rendering
//! - [`notify`] - WhatsApp and mailto link building
//! - [`storage`] - Best-effort local persistence
//! - [`state`] - The [`Shop`](state::Shop) controller and view machine
//! - [`config`] - Store contact configuration

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod customer;
pub mod error;
pub mod notify;
pub mod order;
pub mod selection;
pub mod state;
pub mod storage;
pub mod summary;
pub mod totals;

pub use cart::{Cart, LineItem, compute_line_price};
pub use catalog::{Catalog, Choice, OptionGroup, Product};
pub use checkout::CheckoutError;
pub use config::StoreConfig;
pub use customer::{Address, Customer, DeliveryMethod, PaymentMethod};
pub use error::{Result, ShopError};
pub use order::Order;
pub use selection::{ExtraChoices, ExtraChoicesError, SelectedChoice, Selection};
pub use state::{PlacedOrder, Shop, View};
pub use storage::Store;
pub use totals::Totals;
