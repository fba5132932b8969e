//! Application state owned by a single controller.
//!
//! The whole application state lives in one [`Shop`] owned by the
//! embedder, with every mutation an explicit method, so the full checkout
//! flow is unit-testable without a UI harness.

use sbos_core::{LineId, OrderRef, ProductId, Quantity};
use tracing::info;
use url::Url;

use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::checkout;
use crate::config::StoreConfig;
use crate::customer::Customer;
use crate::error::{Result, ShopError};
use crate::notify;
use crate::order::Order;
use crate::selection::Selection;
use crate::storage::Store;
use crate::summary;
use crate::totals::Totals;

/// Which view the customer is on.
///
/// Catalog and Checkout transition freely between each other; Success is
/// only left through [`Shop::shop_again`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    /// Browsing the catalog.
    Catalog,
    /// Reviewing the cart and entering customer details.
    Checkout,
    /// Order placed.
    Success {
        /// Reference of the order just placed.
        order_ref: OrderRef,
    },
}

/// Everything a caller needs to hand a placed order to the outbound
/// channels: the order record, its summary text, and the two pre-built
/// notification links.
#[derive(Debug, Clone)]
pub struct PlacedOrder {
    /// The immutable order record (already appended to history).
    pub order: Order,
    /// Rendered summary text.
    pub summary: String,
    /// WhatsApp deep link carrying the summary.
    pub whatsapp: Url,
    /// Mail-compose link carrying the summary.
    pub mailto: Url,
}

/// The storefront controller: owns the catalog, cart, customer, current
/// view, and storage handle.
#[derive(Debug)]
pub struct Shop {
    config: StoreConfig,
    store: Store,
    catalog: Catalog,
    cart: Cart,
    customer: Customer,
    view: View,
}

impl Shop {
    /// Create a shop, restoring any persisted cart from the store.
    #[must_use]
    pub fn new(config: StoreConfig, store: Store) -> Self {
        let cart = store.load_cart();
        Self {
            config,
            store,
            catalog: Catalog::seed(),
            cart,
            customer: Customer::default(),
            view: View::Catalog,
        }
    }

    /// The product catalog.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The current cart.
    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The customer record being edited at checkout.
    #[must_use]
    pub const fn customer(&self) -> &Customer {
        &self.customer
    }

    /// Mutable access to the customer record for form edits.
    pub const fn customer_mut(&mut self) -> &mut Customer {
        &mut self.customer
    }

    /// The current view.
    #[must_use]
    pub const fn view(&self) -> &View {
        &self.view
    }

    /// The store configuration.
    #[must_use]
    pub const fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Totals for the current cart and delivery method. Recomputed on every
    /// call; never cached.
    #[must_use]
    pub fn totals(&self) -> Totals {
        Totals::compute(&self.cart, self.customer.delivery_method)
    }

    /// Add a product to the cart with the given selection and quantity.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError::UnknownProduct`] if `product_id` is not in the
    /// catalog.
    pub fn add_to_cart(
        &mut self,
        product_id: &ProductId,
        selection: Selection,
        quantity: Quantity,
    ) -> Result<LineId> {
        let product = self
            .catalog
            .product(product_id)
            .ok_or_else(|| ShopError::UnknownProduct(product_id.to_string()))?
            .clone();
        let line_id = self.cart.add_line(&product, selection, quantity);
        self.store.save_cart(&self.cart);
        Ok(line_id)
    }

    /// Replace a line's quantity. No-op (and no storage write) if the line
    /// does not exist.
    pub fn update_quantity(&mut self, line_id: &LineId, quantity: Quantity) {
        if self.cart.update_quantity(line_id, quantity) {
            self.store.save_cart(&self.cart);
        }
    }

    /// Remove a line. No-op if the line does not exist.
    pub fn remove_line(&mut self, line_id: &LineId) {
        if self.cart.remove_line(line_id) {
            self.store.save_cart(&self.cart);
        }
    }

    /// Empty the cart.
    pub fn clear_cart(&mut self) {
        self.cart.clear();
        self.store.save_cart(&self.cart);
    }

    /// Move to the checkout view. No-op from the success view, which is
    /// only left through [`Self::shop_again`].
    pub fn begin_checkout(&mut self) {
        if !matches!(self.view, View::Success { .. }) {
            self.view = View::Checkout;
        }
    }

    /// Return to the catalog view from checkout.
    pub fn back_to_catalog(&mut self) {
        if self.view == View::Checkout {
            self.view = View::Catalog;
        }
    }

    /// Reset from the success view to a fresh catalog view.
    pub fn shop_again(&mut self) {
        if matches!(self.view, View::Success { .. }) {
            self.view = View::Catalog;
        }
    }

    /// Submit the order.
    ///
    /// Validates the cart and customer, assembles the order, builds both
    /// notification links, appends the order to history, clears the cart,
    /// and transitions to the success view. On any failure nothing is
    /// persisted and the state is unchanged.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure, or [`ShopError::InvalidLink`]
    /// if the store config cannot produce valid notification links.
    pub fn place_order(&mut self) -> Result<PlacedOrder> {
        let order = checkout::place_order(&self.cart, &self.customer, &self.config)?;
        let text = summary::render(&order);

        let whatsapp = notify::whatsapp_link(&self.config.whatsapp_number, &text)?;
        let mail_to = self
            .customer
            .email
            .as_ref()
            .map_or(self.config.store_email.as_str(), |email| email.as_str());
        let mailto = notify::mailto_link(mail_to, &order.reference, &text)?;

        self.store.append_order(&order);
        self.cart.clear();
        self.store.save_cart(&self.cart);
        self.view = View::Success {
            order_ref: order.reference.clone(),
        };
        info!(reference = %order.reference, total = %order.totals.grand_total, "order placed");

        Ok(PlacedOrder {
            order,
            summary: text,
            whatsapp,
            mailto,
        })
    }
}
