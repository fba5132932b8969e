//! Shopping cart and line-item pricing.
//!
//! Pricing is deterministic: a line's unit price is the product base price
//! plus the typed fold over its selection's deltas, and its total is always
//! unit price × quantity. Cart mutations re-establish that invariant on the
//! touched line only; everything else is left untouched.

use sbos_core::{LineId, Money, ProductId, Quantity};
use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::selection::Selection;

/// Compute a line's unit price and total from a product, its selection,
/// and a quantity.
///
/// Unit price = base price + sum of selected deltas across all groups;
/// total = unit price × quantity. An unselected group contributes nothing.
#[must_use]
pub fn compute_line_price(
    product: &Product,
    selection: &Selection,
    quantity: Quantity,
) -> (Money, Money) {
    let unit_price = product.base_price + selection.delta_total();
    (unit_price, unit_price * quantity.get())
}

/// One catalog product with a specific option selection and quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Generated line ID.
    pub id: LineId,
    /// Catalog product this line was built from.
    pub product_id: ProductId,
    /// Product name copied at add time.
    pub name: String,
    /// Chosen options.
    pub selection: Selection,
    /// Quantity, at least 1.
    pub quantity: Quantity,
    /// Price for one unit with the selected options.
    pub unit_price: Money,
    /// `unit_price` × `quantity`.
    pub total: Money,
}

impl LineItem {
    /// Build a line item with a freshly generated ID.
    #[must_use]
    pub fn new(product: &Product, selection: Selection, quantity: Quantity) -> Self {
        let (unit_price, total) = compute_line_price(product, &selection, quantity);
        Self {
            id: LineId::generate(),
            product_id: product.id.clone(),
            name: product.name.clone(),
            selection,
            quantity,
            unit_price,
            total,
        }
    }

    /// Replace the quantity and recompute this line's total.
    pub fn set_quantity(&mut self, quantity: Quantity) {
        self.quantity = quantity;
        self.total = self.unit_price * quantity.get();
    }
}

/// An ordered sequence of line items, keyed by generated line ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<LineItem>,
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Append a new line with a freshly generated ID, returning the ID.
    pub fn add_line(
        &mut self,
        product: &Product,
        selection: Selection,
        quantity: Quantity,
    ) -> LineId {
        let line = LineItem::new(product, selection, quantity);
        let id = line.id.clone();
        self.lines.push(line);
        id
    }

    /// Replace a line's quantity and recompute its total.
    ///
    /// Returns `false` (leaving the cart unchanged) if no line has this ID.
    pub fn update_quantity(&mut self, line_id: &LineId, quantity: Quantity) -> bool {
        match self.lines.iter_mut().find(|l| &l.id == line_id) {
            Some(line) => {
                line.set_quantity(quantity);
                true
            }
            None => false,
        }
    }

    /// Remove a line. Returns `false` if no line has this ID.
    pub fn remove_line(&mut self, line_id: &LineId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| &l.id != line_id);
        self.lines.len() != before
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// All lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[LineItem] {
        &self.lines
    }

    /// Look up a line by ID.
    #[must_use]
    pub fn line(&self, line_id: &LineId) -> Option<&LineItem> {
        self.lines.iter().find(|l| &l.id == line_id)
    }

    /// Number of lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of every line's total.
    #[must_use]
    pub fn subtotal(&self) -> Money {
        self.lines.iter().map(|l| l.total).sum()
    }
}
