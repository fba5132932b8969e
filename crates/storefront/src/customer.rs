//! Customer details captured at checkout.

use core::fmt;

use sbos_core::{Email, Money};
use serde::{Deserialize, Serialize};

/// Fulfillment channel, with an associated fixed delivery fee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryMethod {
    /// Collect in store, no fee.
    #[default]
    Pickup,
    /// Local courier delivery.
    Local,
    /// National courier delivery.
    National,
}

impl DeliveryMethod {
    /// Fixed delivery fee for this method.
    #[must_use]
    pub fn fee(self) -> Money {
        match self {
            Self::Pickup => Money::ZERO,
            Self::Local => Money::from_rands(35),
            Self::National => Money::from_rands(95),
        }
    }

    /// Whether this method requires a shipping address.
    #[must_use]
    pub const fn requires_address(self) -> bool {
        !matches!(self, Self::Pickup)
    }
}

impl fmt::Display for DeliveryMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pickup => write!(f, "pickup"),
            Self::Local => write!(f, "local"),
            Self::National => write!(f, "national"),
        }
    }
}

/// Payment channel the customer intends to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Card payment.
    #[default]
    Card,
    /// Bank transfer.
    Eft,
    /// Cash on collection or delivery.
    Cash,
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Card => write!(f, "card"),
            Self::Eft => write!(f, "eft"),
            Self::Cash => write!(f, "cash"),
        }
    }
}

/// Shipping address, required when the delivery method is not pickup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Address {
    /// First address line.
    pub line1: String,
    /// Second address line (optional, may be blank).
    pub line2: String,
    /// City.
    pub city: String,
    /// Province.
    pub province: String,
    /// Postal code.
    pub postal_code: String,
}

impl Address {
    /// Whether all required fields are filled in. `line2` is optional.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.line1.trim().is_empty()
            && !self.city.trim().is_empty()
            && !self.province.trim().is_empty()
            && !self.postal_code.trim().is_empty()
    }
}

/// Customer details entered on the checkout form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Customer {
    /// Full name, required.
    pub full_name: String,
    /// Email, optional. When absent, order mail goes to the store address.
    pub email: Option<Email>,
    /// Phone number, required.
    pub phone: String,
    /// Fulfillment channel.
    pub delivery_method: DeliveryMethod,
    /// Shipping address, checked only when `delivery_method` needs one.
    pub address: Address,
    /// Intended payment channel.
    pub payment_method: PaymentMethod,
    /// Free-text order notes.
    pub notes: String,
}

impl Customer {
    /// Whether the required contact fields (name and phone) are filled in.
    #[must_use]
    pub fn has_contact_info(&self) -> bool {
        !self.full_name.trim().is_empty() && !self.phone.trim().is_empty()
    }
}
