//! Static product catalog.
//!
//! Catalog entries are immutable: loaded once at startup and never mutated.
//! Each product carries its option groups; a choice's label determines
//! whether it requires customer-supplied extra choices (see
//! [`Choice::requires_extra_choices`]).

use sbos_core::{Money, ProductId};
use serde::{Deserialize, Serialize};

/// Fabric labels that require the customer to supply extra choices.
pub const EXTRA_CHOICE_LABELS: &[&str] = &["Upholstery", "Fleece"];

/// How choices within an option group may be selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SelectionKind {
    /// Exactly one choice per group.
    #[default]
    Single,
}

/// A selectable choice within an option group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    /// Display label (e.g., "Luxury", "Medium (820x540)").
    pub label: String,
    /// Additive price adjustment when this choice is selected.
    pub price_delta: Money,
}

impl Choice {
    /// Create a choice with a whole-rand price delta.
    fn new(label: &str, delta: i64) -> Self {
        Self {
            label: label.to_owned(),
            price_delta: Money::from_rands(delta),
        }
    }

    /// Whether this choice requires customer-supplied extra choices
    /// (e.g., the "Upholstery" and "Fleece" fabrics).
    #[must_use]
    pub fn requires_extra_choices(&self) -> bool {
        EXTRA_CHOICE_LABELS.contains(&self.label.as_str())
    }
}

/// A named axis of configurable choices for a product (e.g., "Fabric").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionGroup {
    /// Group name (e.g., "Type", "Size", "Fabric").
    pub name: String,
    /// How choices in this group are selected.
    pub kind: SelectionKind,
    /// Ordered list of available choices.
    pub choices: Vec<Choice>,
}

impl OptionGroup {
    /// Look up a choice in this group by label.
    #[must_use]
    pub fn choice(&self, label: &str) -> Option<&Choice> {
        self.choices.iter().find(|c| c.label == label)
    }
}

/// An immutable catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Product ID (URL-safe slug).
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Category for catalog grouping.
    pub category: String,
    /// Base price before option deltas.
    pub base_price: Money,
    /// Ordered option groups.
    pub options: Vec<OptionGroup>,
    /// Plain text description.
    pub description: String,
    /// Product image URL.
    pub image: String,
}

impl Product {
    /// Look up an option group by name.
    #[must_use]
    pub fn option_group(&self, name: &str) -> Option<&OptionGroup> {
        self.options.iter().find(|g| g.name == name)
    }
}

/// The store's product catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build the seed catalog shipped with the store.
    #[must_use]
    pub fn seed() -> Self {
        Self {
            products: vec![Product {
                id: ProductId::new("oval-bed-cover"),
                name: "Oval Bed Cover".to_owned(),
                category: "Covers".to_owned(),
                base_price: Money::from_rands(250),
                options: vec![
                    OptionGroup {
                        name: "Type".to_owned(),
                        kind: SelectionKind::Single,
                        choices: vec![Choice::new("Standard", 0), Choice::new("Luxury", 150)],
                    },
                    OptionGroup {
                        name: "Size".to_owned(),
                        kind: SelectionKind::Single,
                        choices: vec![
                            Choice::new("Small (600x400)", 0),
                            Choice::new("Medium (820x540)", 200),
                            Choice::new("Large (1000x640)", 400),
                        ],
                    },
                    OptionGroup {
                        name: "Fabric".to_owned(),
                        kind: SelectionKind::Single,
                        choices: vec![
                            Choice::new("Denim", 0),
                            Choice::new("Canvas", 0),
                            Choice::new("Upholstery", 100),
                            Choice::new("Fleece", 120),
                        ],
                    },
                ],
                description: "High-quality oval bed cover available in Standard or Luxury \
                              finishes, three sizes, and multiple fabric choices."
                    .to_owned(),
                image: "https://via.placeholder.com/600x400.png?text=Oval+Bed+Cover".to_owned(),
            }],
        }
    }

    /// All products in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by ID.
    #[must_use]
    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Distinct categories in catalog order.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for product in &self.products {
            if !categories.contains(&product.category.as_str()) {
                categories.push(&product.category);
            }
        }
        categories
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seed()
    }
}
