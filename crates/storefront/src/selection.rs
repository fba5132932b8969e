//! Option selections for a line item.
//!
//! A [`Selection`] is an explicit ordered list of (group, choice) pairs
//! rather than a permissive map: price computation is a typed fold over the
//! list, and an unselected group simply has no entry. Extra choices for the
//! designated fabrics are parsed once at the data-entry boundary into a
//! structured list (see [`ExtraChoices::parse`]), not re-split downstream.

use core::fmt;

use sbos_core::Money;
use serde::{Deserialize, Serialize};

use crate::catalog::{Choice, OptionGroup};

/// Errors from parsing customer-supplied extra choices.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtraChoicesError {
    /// No choices were supplied.
    #[error("please enter at least one choice")]
    Empty,
    /// Too many choices were supplied.
    #[error("at most {max} choices are allowed, got {found}")]
    TooMany {
        /// Maximum allowed entries.
        max: usize,
        /// Entries found in the input.
        found: usize,
    },
}

/// Customer-supplied sub-choices for an extra-choice fabric.
///
/// Holds between 1 and [`ExtraChoices::MAX`] non-empty entries. The legacy
/// entry format is a free-text field with entries separated by the literal
/// token "OR" ("Red OR Blue OR Green"); [`ExtraChoices::parse`] accepts that
/// format and enforces the invariant at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExtraChoices(Vec<String>);

impl ExtraChoices {
    /// Maximum number of entries.
    pub const MAX: usize = 3;

    /// Build from a structured list of entries.
    ///
    /// Entries are trimmed; blank entries are dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if no non-blank entries remain or there are more
    /// than [`Self::MAX`].
    pub fn new<I, S>(entries: I) -> Result<Self, ExtraChoicesError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries: Vec<String> = entries
            .into_iter()
            .map(Into::into)
            .map(|e| e.trim().to_owned())
            .filter(|e| !e.is_empty())
            .collect();

        if entries.is_empty() {
            return Err(ExtraChoicesError::Empty);
        }
        if entries.len() > Self::MAX {
            return Err(ExtraChoicesError::TooMany {
                max: Self::MAX,
                found: entries.len(),
            });
        }

        Ok(Self(entries))
    }

    /// Parse the legacy "A OR B OR C" free-text format.
    ///
    /// # Errors
    ///
    /// Returns an error if the input yields no entries or more than
    /// [`Self::MAX`].
    pub fn parse(input: &str) -> Result<Self, ExtraChoicesError> {
        Self::new(input.split("OR"))
    }

    /// The individual entries.
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.0
    }
}

impl fmt::Display for ExtraChoices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(" OR "))
    }
}

/// One chosen option: the group it came from, the choice label, its price
/// delta, and any customer-supplied extra choices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedChoice {
    /// Option group name (e.g., "Fabric").
    pub group: String,
    /// Chosen choice label (e.g., "Upholstery").
    pub label: String,
    /// Price delta contributed by this choice.
    pub price_delta: Money,
    /// Extra choices, present only for the designated fabric labels.
    pub extra_choices: Option<ExtraChoices>,
}

impl SelectedChoice {
    /// Build from a catalog choice.
    #[must_use]
    pub fn from_choice(group: &str, choice: &Choice) -> Self {
        Self {
            group: group.to_owned(),
            label: choice.label.clone(),
            price_delta: choice.price_delta,
            extra_choices: None,
        }
    }

    /// Whether this choice's label requires extra choices at checkout.
    #[must_use]
    pub fn requires_extra_choices(&self) -> bool {
        crate::catalog::EXTRA_CHOICE_LABELS.contains(&self.label.as_str())
    }
}

/// Errors from building a [`Selection`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// The label does not name a choice in the group.
    #[error("no choice \"{label}\" in option group \"{group}\"")]
    UnknownChoice {
        /// Group name.
        group: String,
        /// Label that failed to resolve.
        label: String,
    },
}

/// The chosen options for one line item: an ordered list of
/// [`SelectedChoice`] pairs, at most one per option group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Selection(Vec<SelectedChoice>);

impl Selection {
    /// An empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Select a choice from a group by label, replacing any earlier choice
    /// for the same group.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::UnknownChoice`] if `label` does not name a
    /// choice in `group`.
    pub fn select(&mut self, group: &OptionGroup, label: &str) -> Result<(), SelectionError> {
        let choice = group
            .choice(label)
            .ok_or_else(|| SelectionError::UnknownChoice {
                group: group.name.clone(),
                label: label.to_owned(),
            })?;
        self.put(SelectedChoice::from_choice(&group.name, choice));
        Ok(())
    }

    /// Select a choice and attach extra choices to it.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::UnknownChoice`] if `label` does not name a
    /// choice in `group`.
    pub fn select_with_extras(
        &mut self,
        group: &OptionGroup,
        label: &str,
        extras: ExtraChoices,
    ) -> Result<(), SelectionError> {
        let choice = group
            .choice(label)
            .ok_or_else(|| SelectionError::UnknownChoice {
                group: group.name.clone(),
                label: label.to_owned(),
            })?;
        let mut selected = SelectedChoice::from_choice(&group.name, choice);
        selected.extra_choices = Some(extras);
        self.put(selected);
        Ok(())
    }

    /// Insert a selected choice, replacing any existing entry for its group.
    fn put(&mut self, selected: SelectedChoice) {
        if let Some(existing) = self.0.iter_mut().find(|c| c.group == selected.group) {
            *existing = selected;
        } else {
            self.0.push(selected);
        }
    }

    /// All selected choices in selection order.
    #[must_use]
    pub fn choices(&self) -> &[SelectedChoice] {
        &self.0
    }

    /// The selected choice for a group, if any.
    #[must_use]
    pub fn choice_for(&self, group: &str) -> Option<&SelectedChoice> {
        self.0.iter().find(|c| c.group == group)
    }

    /// Sum of all price deltas across the selection.
    #[must_use]
    pub fn delta_total(&self) -> Money {
        self.0.iter().map(|c| c.price_delta).sum()
    }

    /// Whether no choices have been made.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use sbos_core::ProductId;

    use super::*;
    use crate::catalog::Catalog;

    fn fabric_group() -> OptionGroup {
        let catalog = Catalog::seed();
        let Some(product) = catalog.product(&ProductId::new("oval-bed-cover")) else {
            panic!("seed product missing");
        };
        let Some(group) = product.option_group("Fabric") else {
            panic!("Fabric group missing");
        };
        group.clone()
    }

    #[test]
    fn test_parse_three_entries() {
        let Ok(extras) = ExtraChoices::parse("Red OR Blue OR Green") else {
            panic!("three entries should parse");
        };
        assert_eq!(extras.entries(), ["Red", "Blue", "Green"]);
        assert_eq!(extras.to_string(), "Red OR Blue OR Green");
    }

    #[test]
    fn test_parse_four_entries_rejected() {
        assert_eq!(
            ExtraChoices::parse("Red OR Blue OR Green OR Yellow"),
            Err(ExtraChoicesError::TooMany { max: 3, found: 4 })
        );
    }

    #[test]
    fn test_parse_empty_rejected() {
        assert_eq!(ExtraChoices::parse(""), Err(ExtraChoicesError::Empty));
        assert_eq!(ExtraChoices::parse("  OR  "), Err(ExtraChoicesError::Empty));
    }

    #[test]
    fn test_parse_trims_entries() {
        let Ok(extras) = ExtraChoices::parse("  Red OR  Blue ") else {
            panic!("two entries should parse");
        };
        assert_eq!(extras.entries(), ["Red", "Blue"]);
    }

    #[test]
    fn test_select_unknown_label() {
        let group = fabric_group();
        let mut selection = Selection::new();
        assert_eq!(
            selection.select(&group, "Velvet"),
            Err(SelectionError::UnknownChoice {
                group: "Fabric".to_owned(),
                label: "Velvet".to_owned(),
            })
        );
        assert!(selection.is_empty());
    }

    #[test]
    fn test_select_replaces_same_group() {
        let group = fabric_group();
        let mut selection = Selection::new();
        assert!(selection.select(&group, "Denim").is_ok());
        assert!(selection.select(&group, "Fleece").is_ok());

        assert_eq!(selection.choices().len(), 1);
        let Some(chosen) = selection.choice_for("Fabric") else {
            panic!("Fabric choice missing");
        };
        assert_eq!(chosen.label, "Fleece");
        assert_eq!(chosen.price_delta, Money::from_rands(120));
    }

    #[test]
    fn test_delta_total_folds_all_groups() {
        let catalog = Catalog::seed();
        let Some(product) = catalog.product(&ProductId::new("oval-bed-cover")) else {
            panic!("seed product missing");
        };
        let mut selection = Selection::new();
        for (group, label) in [
            ("Type", "Luxury"),
            ("Size", "Medium (820x540)"),
            ("Fabric", "Canvas"),
        ] {
            let Some(group) = product.option_group(group) else {
                panic!("group {group} missing");
            };
            assert!(selection.select(group, label).is_ok());
        }
        assert_eq!(selection.delta_total(), Money::from_rands(350));
    }

    #[test]
    fn test_empty_selection_zero_delta() {
        assert_eq!(Selection::new().delta_total(), Money::ZERO);
    }
}
