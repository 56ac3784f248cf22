use std::str::FromStr;

use storefront_db::{
    line_subtotal, normalize_short_name, CampaignType, DiscountType, Order, OrderDetail,
    OrderStatus, ProductQuery,
};

#[test]
fn test_short_name_uppercased() {
    assert_eq!(normalize_short_name("ab"), "AB");
    assert_eq!(normalize_short_name("gRoC"), "GROC");
    assert_eq!(normalize_short_name("VEG"), "VEG");
}

#[test]
fn test_short_name_normalization_idempotent() {
    let once = normalize_short_name("fr1");
    assert_eq!(normalize_short_name(&once), once);
}

#[test]
fn test_subtotal_is_quantity_times_price_rounded() {
    assert_eq!(line_subtotal(3.0, 2.005), 6.015);
    assert_eq!(line_subtotal(2.0, 49.99), 99.98);
    assert_eq!(line_subtotal(0.0, 12.5), 0.0);
    assert_eq!(line_subtotal(1.5, 3.0), 4.5);
}

#[test]
fn test_subtotal_rounds_to_three_digits() {
    assert_eq!(line_subtotal(2.5, 1.999), 4.998);
    assert_eq!(line_subtotal(0.333, 3.0), 0.999);
}

#[test]
fn test_subtotal_stable_for_unchanged_inputs() {
    let first = line_subtotal(7.0, 19.95);
    let second = line_subtotal(7.0, 19.95);
    assert_eq!(first, second);
}

#[test]
fn test_order_status_round_trip() {
    for status in OrderStatus::ALL {
        assert_eq!(OrderStatus::from_str(status.as_str()), Ok(status));
    }
}

#[test]
fn test_order_status_wire_values() {
    assert_eq!(OrderStatus::OrderConfirmed.as_str(), "Order Confirmed");
    assert_eq!(OrderStatus::OutForDelivery.as_str(), "Out for Delivery");
    assert_eq!(
        serde_json::to_string(&OrderStatus::OutForDelivery).unwrap(),
        "\"Out for Delivery\""
    );
}

#[test]
fn test_unknown_order_status_rejected() {
    assert!(OrderStatus::from_str("Shipped").is_err());
    assert!(OrderStatus::from_str("pending").is_err());
    assert!(OrderStatus::from_str("").is_err());
}

#[test]
fn test_campaign_type_round_trip() {
    for kind in CampaignType::ALL {
        assert_eq!(CampaignType::from_str(kind.as_str()), Ok(kind));
    }
    assert_eq!(CampaignType::FlashSale.as_str(), "flash_sale");
    assert_eq!(CampaignType::Bogo.as_str(), "bogo");
    assert!(CampaignType::from_str("weekly").is_err());
}

#[test]
fn test_discount_type_round_trip() {
    for kind in DiscountType::ALL {
        assert_eq!(DiscountType::from_str(kind.as_str()), Ok(kind));
    }
    assert_eq!(DiscountType::FreeShipping.as_str(), "free_shipping");
    assert!(DiscountType::from_str("coupon").is_err());
}

#[test]
fn test_campaign_type_serde_tags() {
    assert_eq!(
        serde_json::to_string(&CampaignType::FlashSale).unwrap(),
        "\"flash_sale\""
    );
    assert_eq!(
        serde_json::to_string(&DiscountType::FixedAmount).unwrap(),
        "\"fixed_amount\""
    );
}

#[test]
fn test_order_status_accessor_parses_stored_string() {
    let order = Order {
        id: 1,
        order_number: "ORD-0001".to_string(),
        customer_id: None,
        email: None,
        address: None,
        mobile: None,
        bill_amount: 120.0,
        discount: 20.0,
        total: 100.0,
        payment_id: None,
        shipment_id: None,
        order_date: None,
        status: Some("Order Confirmed".to_string()),
        transaction_id: None,
    };
    assert_eq!(order.status(), Some(Ok(OrderStatus::OrderConfirmed)));
    assert_eq!(order.to_string(), "ORD-0001");
}

#[test]
fn test_order_detail_display() {
    let line = OrderDetail {
        id: 7,
        order_id: 3,
        product_id: None,
        price: 2.005,
        discount_price: 0.0,
        quantity: 3.0,
        unit: None,
        subtotal: 6.015,
        created_by: None,
        created_at: None,
        updated_by: None,
        updated_at: None,
    };
    assert_eq!(line.to_string(), "order #3 line #7");
}

#[test]
fn test_product_query_defaults_to_no_filters() {
    let query = ProductQuery::default();
    assert!(query.subcategory_id.is_none());
    assert!(query.min_price.is_none());
    assert!(query.max_price.is_none());
    assert!(query.search_term.is_none());
    assert!(query.sort_by.is_none());
    assert!(query.sort_order.is_none());
}
