//! Checkout validation and order assembly.
//!
//! Validation runs synchronously at submission and short-circuits at the
//! first failure. The error display strings are the exact messages shown to
//! the customer; nothing is submitted partially and nothing is retried.

use chrono::Utc;
use sbos_core::OrderRef;
use tracing::debug;

use crate::cart::Cart;
use crate::config::StoreConfig;
use crate::customer::Customer;
use crate::order::Order;
use crate::selection::ExtraChoices;
use crate::totals::Totals;

/// A blocking validation failure at order submission.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckoutError {
    /// The cart has no lines.
    #[error("Your cart is empty.")]
    EmptyCart,
    /// Full name or phone is missing.
    #[error("Please provide your name and phone number.")]
    MissingContactInfo,
    /// A non-pickup delivery is missing required address fields.
    #[error("Please complete the shipping address.")]
    IncompleteAddress,
    /// An extra-choice fabric was selected without supplying choices.
    #[error("Please enter choices for {fabric} fabric.")]
    MissingExtraChoices {
        /// The offending fabric label.
        fabric: String,
    },
    /// More extra choices than allowed were supplied for a fabric.
    #[error("You can enter at most {max} choices for {fabric} fabric.")]
    TooManyExtraChoices {
        /// The offending fabric label.
        fabric: String,
        /// Maximum allowed entries.
        max: usize,
    },
}

/// Validate a cart and customer for submission.
///
/// Checks run in order and stop at the first failure: non-empty cart,
/// contact info, address completeness for non-pickup delivery, then
/// per-line fabric extra choices.
///
/// # Errors
///
/// Returns the first [`CheckoutError`] encountered.
pub fn validate(cart: &Cart, customer: &Customer) -> Result<(), CheckoutError> {
    if cart.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    if !customer.has_contact_info() {
        return Err(CheckoutError::MissingContactInfo);
    }

    if customer.delivery_method.requires_address() && !customer.address.is_complete() {
        return Err(CheckoutError::IncompleteAddress);
    }

    for line in cart.lines() {
        let Some(fabric) = line.selection.choice_for("Fabric") else {
            continue;
        };
        if !fabric.requires_extra_choices() {
            continue;
        }
        // ExtraChoices enforces its bounds at construction, but persisted
        // carts deserialize without re-validation, so submission re-checks.
        match &fabric.extra_choices {
            None => {
                return Err(CheckoutError::MissingExtraChoices {
                    fabric: fabric.label.clone(),
                });
            }
            Some(extras) if extras.entries().is_empty() => {
                return Err(CheckoutError::MissingExtraChoices {
                    fabric: fabric.label.clone(),
                });
            }
            Some(extras) if extras.entries().len() > ExtraChoices::MAX => {
                return Err(CheckoutError::TooManyExtraChoices {
                    fabric: fabric.label.clone(),
                    max: ExtraChoices::MAX,
                });
            }
            Some(_) => {}
        }
    }

    Ok(())
}

/// Validate and assemble an [`Order`] from the current cart and customer.
///
/// The order reference is only generated after validation passes, so a
/// rejected submission never consumes a reference.
///
/// # Errors
///
/// Returns the first [`CheckoutError`] encountered during validation.
pub fn place_order(
    cart: &Cart,
    customer: &Customer,
    config: &StoreConfig,
) -> Result<Order, CheckoutError> {
    validate(cart, customer)?;

    let reference = OrderRef::generate(&config.order_ref_prefix);
    let totals = Totals::compute(cart, customer.delivery_method);
    debug!(reference = %reference, lines = cart.len(), "order assembled");

    Ok(Order {
        reference,
        placed_at: Utc::now(),
        customer: customer.clone(),
        items: cart.lines().to_vec(),
        totals,
    })
}
