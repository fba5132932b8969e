//! Order summary serialization.
//!
//! Renders an [`Order`] as the deterministic plain text handed to the
//! outbound notification channels. The layout matches the store's long-used
//! message format, so changes here change what customers and the store see
//! in WhatsApp and email.

use std::fmt::Write as _;

use crate::order::Order;

/// Render the order summary text.
#[must_use]
pub fn render(order: &Order) -> String {
    let mut text = String::new();
    let customer = &order.customer;

    let _ = writeln!(text, "Order Ref: {}", order.reference);
    let _ = writeln!(text, "Name: {}", customer.full_name);
    let _ = writeln!(text, "Phone: {}", customer.phone);
    if let Some(email) = &customer.email {
        let _ = writeln!(text, "Email: {email}");
    }
    let _ = writeln!(text, "Delivery: {}", customer.delivery_method);
    if customer.delivery_method.requires_address() {
        let a = &customer.address;
        let _ = writeln!(
            text,
            "Address: {}, {}, {}, {}, {}",
            a.line1, a.line2, a.city, a.province, a.postal_code
        );
    }
    let _ = writeln!(text, "Payment: {}", customer.payment_method);
    if !customer.notes.is_empty() {
        let _ = writeln!(text, "Notes: {}", customer.notes);
    }

    let _ = writeln!(text, "--- Items ---");
    for item in &order.items {
        let _ = writeln!(text, "{} × {} ", item.quantity, item.name);
        for choice in item.selection.choices() {
            let label = choice.extra_choices.as_ref().map_or_else(
                || choice.label.clone(),
                |extras| format!("{} [{extras}]", choice.label),
            );
            let _ = writeln!(text, "  • {}: {label}", choice.group);
        }
        let _ = writeln!(
            text,
            "  Unit: {} — Line Total: {}",
            item.unit_price, item.total
        );
    }

    let _ = writeln!(text, "Subtotal: {}", order.totals.subtotal);
    let _ = writeln!(text, "Delivery: {}", order.totals.delivery);
    let _ = writeln!(text, "TOTAL: {}", order.totals.grand_total);

    text
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use sbos_core::{Email, OrderRef, ProductId, Quantity};

    use super::*;
    use crate::cart::Cart;
    use crate::catalog::Catalog;
    use crate::customer::{Address, Customer, DeliveryMethod, PaymentMethod};
    use crate::selection::{ExtraChoices, Selection};
    use crate::totals::Totals;

    fn sample_order(delivery: DeliveryMethod, email: Option<&str>, notes: &str) -> Order {
        let catalog = Catalog::seed();
        let Some(product) = catalog.product(&ProductId::new("oval-bed-cover")) else {
            panic!("seed product missing");
        };

        let mut selection = Selection::new();
        for (group, label) in [("Type", "Luxury"), ("Size", "Medium (820x540)")] {
            let Some(group) = product.option_group(group) else {
                panic!("group {group} missing");
            };
            assert!(selection.select(group, label).is_ok());
        }
        let Some(fabric) = product.option_group("Fabric") else {
            panic!("Fabric group missing");
        };
        let Ok(extras) = ExtraChoices::parse("Red OR Blue") else {
            panic!("extras should parse");
        };
        assert!(
            selection
                .select_with_extras(fabric, "Upholstery", extras)
                .is_ok()
        );

        let mut cart = Cart::new();
        let Ok(qty) = Quantity::new(2) else {
            panic!("quantity 2 is valid");
        };
        cart.add_line(product, selection, qty);

        let customer = Customer {
            full_name: "Thandi Nkosi".to_owned(),
            email: email.and_then(|e| Email::parse(e).ok()),
            phone: "0821234567".to_owned(),
            delivery_method: delivery,
            address: Address {
                line1: "12 Main Rd".to_owned(),
                line2: "Unit 4".to_owned(),
                city: "Cape Town".to_owned(),
                province: "Western Cape".to_owned(),
                postal_code: "8001".to_owned(),
            },
            payment_method: PaymentMethod::Card,
            notes: notes.to_owned(),
        };

        let totals = Totals::compute(&cart, delivery);
        Order {
            reference: OrderRef::from("SBOS-AB12CD34".to_owned()),
            placed_at: Utc
                .with_ymd_and_hms(2025, 6, 1, 12, 0, 0)
                .single()
                .unwrap_or_default(),
            customer,
            items: cart.lines().to_vec(),
            totals,
        }
    }

    #[test]
    fn test_full_summary_layout() {
        let order = sample_order(
            DeliveryMethod::Local,
            Some("thandi@example.com"),
            "Ring the bell",
        );
        let text = render(&order);

        // Upholstery (+100) + Luxury (+150) + Medium (+200) on base 250, qty 2
        let expected = "Order Ref: SBOS-AB12CD34\n\
                        Name: Thandi Nkosi\n\
                        Phone: 0821234567\n\
                        Email: thandi@example.com\n\
                        Delivery: local\n\
                        Address: 12 Main Rd, Unit 4, Cape Town, Western Cape, 8001\n\
                        Payment: card\n\
                        Notes: Ring the bell\n\
                        --- Items ---\n\
                        2 × Oval Bed Cover \n  \
                        • Type: Luxury\n  \
                        • Size: Medium (820x540)\n  \
                        • Fabric: Upholstery [Red OR Blue]\n  \
                        Unit: R700.00 — Line Total: R1,400.00\n\
                        Subtotal: R1,400.00\n\
                        Delivery: R35.00\n\
                        TOTAL: R1,435.00\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_pickup_omits_address() {
        let order = sample_order(DeliveryMethod::Pickup, None, "");
        let text = render(&order);
        assert!(!text.contains("Address:"));
        assert!(!text.contains("Email:"));
        assert!(!text.contains("Notes:"));
        assert!(text.contains("Delivery: pickup\n"));
        assert!(text.contains("Delivery: R0.00\n"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let order = sample_order(DeliveryMethod::National, None, "");
        assert_eq!(render(&order), render(&order));
    }
}
