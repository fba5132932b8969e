//! Derived cart totals.

use sbos_core::Money;
use serde::{Deserialize, Serialize};

use crate::cart::Cart;
use crate::customer::DeliveryMethod;

/// Cart totals: subtotal, delivery fee, and grand total.
///
/// Derived, never stored on the cart itself; recomputed on demand from the
/// current cart and delivery method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Totals {
    /// Sum of every line's total.
    pub subtotal: Money,
    /// Fixed fee for the chosen delivery method.
    pub delivery: Money,
    /// `subtotal` + `delivery`.
    pub grand_total: Money,
}

impl Totals {
    /// Compute totals for a cart and delivery method.
    #[must_use]
    pub fn compute(cart: &Cart, delivery_method: DeliveryMethod) -> Self {
        let subtotal = cart.subtotal();
        let delivery = delivery_method.fee();
        Self {
            subtotal,
            delivery,
            grand_total: subtotal + delivery,
        }
    }
}
