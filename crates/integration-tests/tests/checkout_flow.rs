//! End-to-end checkout flow: build a selection, add to cart, fill in the
//! customer, place the order, and inspect the hand-off payload.

use sbos_core::{Email, ProductId, Quantity};
use sbos_integration_tests::TestShop;
use sbos_storefront::{
    CheckoutError, DeliveryMethod, ExtraChoices, Selection, ShopError, View,
};

fn product_id() -> ProductId {
    ProductId::new("oval-bed-cover")
}

/// Selection from the worked example: Luxury + Medium + Canvas.
fn luxury_medium_canvas(shop: &sbos_storefront::Shop) -> Selection {
    let Some(product) = shop.catalog().product(&product_id()) else {
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
    selection
}

fn qty(n: u32) -> Quantity {
    match Quantity::new(n) {
        Ok(qty) => qty,
        Err(e) => panic!("quantity {n}: {e}"),
    }
}

#[test]
fn test_full_checkout_to_success() {
    let mut ctx = TestShop::new();
    let selection = luxury_medium_canvas(&ctx.shop);
    let Ok(_) = ctx.shop.add_to_cart(&product_id(), selection, qty(2)) else {
        panic!("add should succeed");
    };

    {
        let customer = ctx.shop.customer_mut();
        customer.full_name = "Thandi Nkosi".to_owned();
        customer.phone = "0821234567".to_owned();
        customer.email = Email::parse("thandi@example.com").ok();
        customer.delivery_method = DeliveryMethod::Local;
        customer.address.line1 = "12 Main Rd".to_owned();
        customer.address.city = "Cape Town".to_owned();
        customer.address.province = "Western Cape".to_owned();
        customer.address.postal_code = "8001".to_owned();
    }

    ctx.shop.begin_checkout();
    assert_eq!(ctx.shop.view(), &View::Checkout);

    // Worked example: unit 600, total 1200, plus local delivery 35
    let totals = ctx.shop.totals();
    assert_eq!(totals.subtotal.display(), "R1,200.00");
    assert_eq!(totals.delivery.display(), "R35.00");
    assert_eq!(totals.grand_total.display(), "R1,235.00");

    let placed = match ctx.shop.place_order() {
        Ok(placed) => placed,
        Err(e) => panic!("order should place: {e}"),
    };

    assert!(placed.order.reference.as_str().starts_with("SBOS-"));
    assert!(placed.summary.starts_with(&format!(
        "Order Ref: {}\nName: Thandi Nkosi\n",
        placed.order.reference
    )));
    assert!(placed.summary.contains("2 × Oval Bed Cover"));
    assert!(placed.summary.ends_with("TOTAL: R1,235.00\n"));

    // Mail goes to the customer's address when one was given
    assert_eq!(placed.mailto.path(), "thandi@example.com");
    assert_eq!(placed.whatsapp.path(), "/27726589482");
    let Some(query) = placed.whatsapp.query() else {
        panic!("whatsapp link should carry a text parameter");
    };
    assert!(query.starts_with("text=Order%20Ref%3A%20SBOS-"));

    // Cart cleared, success view reached, history written
    assert!(ctx.shop.cart().is_empty());
    assert_eq!(
        ctx.shop.view(),
        &View::Success {
            order_ref: placed.order.reference.clone()
        }
    );
    let history = ctx.store().load_orders();
    assert_eq!(history.len(), 1);
    assert_eq!(
        history.first().map(|o| o.reference.clone()),
        Some(placed.order.reference)
    );

    ctx.shop.shop_again();
    assert_eq!(ctx.shop.view(), &View::Catalog);
}

#[test]
fn test_empty_cart_submission_leaves_history_untouched() {
    let mut ctx = TestShop::new();
    {
        let customer = ctx.shop.customer_mut();
        customer.full_name = "Thandi Nkosi".to_owned();
        customer.phone = "0821234567".to_owned();
    }
    ctx.shop.begin_checkout();

    let result = ctx.shop.place_order();
    assert!(matches!(
        result,
        Err(ShopError::Checkout(CheckoutError::EmptyCart))
    ));
    assert!(ctx.store().load_orders().is_empty());
    assert_eq!(ctx.shop.view(), &View::Checkout);
}

#[test]
fn test_extra_choice_fabric_gates_submission() {
    let mut ctx = TestShop::new();
    let Some(product) = ctx.shop.catalog().product(&product_id()) else {
        panic!("seed product missing");
    };
    let product = product.clone();
    let Some(fabric) = product.option_group("Fabric") else {
        panic!("Fabric group missing");
    };

    // Upholstery selected without extra choices
    let mut selection = Selection::new();
    assert!(selection.select(fabric, "Upholstery").is_ok());
    let Ok(line_id) = ctx.shop.add_to_cart(&product_id(), selection, qty(1)) else {
        panic!("add should succeed");
    };
    {
        let customer = ctx.shop.customer_mut();
        customer.full_name = "Thandi Nkosi".to_owned();
        customer.phone = "0821234567".to_owned();
    }

    let result = ctx.shop.place_order();
    assert!(matches!(
        result,
        Err(ShopError::Checkout(CheckoutError::MissingExtraChoices { .. }))
    ));
    assert!(ctx.store().load_orders().is_empty());

    // Replace the line with a compliant one and submit again
    ctx.shop.remove_line(&line_id);
    let mut selection = Selection::new();
    let Ok(extras) = ExtraChoices::parse("Red OR Blue OR Green") else {
        panic!("extras should parse");
    };
    assert!(
        selection
            .select_with_extras(fabric, "Upholstery", extras)
            .is_ok()
    );
    let Ok(_) = ctx.shop.add_to_cart(&product_id(), selection, qty(1)) else {
        panic!("add should succeed");
    };

    let placed = match ctx.shop.place_order() {
        Ok(placed) => placed,
        Err(e) => panic!("order should place: {e}"),
    };
    assert!(placed.summary.contains("Upholstery [Red OR Blue OR Green]"));
}

#[test]
fn test_quantity_boundary_rejects_zero() {
    assert!(Quantity::new(0).is_err());
}
