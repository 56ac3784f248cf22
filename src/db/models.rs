use std::fmt;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::db::schema::{
    campaign_categories, campaign_products, campaigns, categories, common_master, customers,
    feedback, order_details, orders, product, subcategories, type_master, users,
};

/// Order lifecycle states. Stored as the exact display string in `order.status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    #[serde(rename = "Order Confirmed")]
    OrderConfirmed,
    #[serde(rename = "Out for Delivery")]
    OutForDelivery,
    Delivered,
    Cancelled,
    Returned,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 6] = [
        OrderStatus::Pending,
        OrderStatus::OrderConfirmed,
        OrderStatus::OutForDelivery,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
        OrderStatus::Returned,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::OrderConfirmed => "Order Confirmed",
            OrderStatus::OutForDelivery => "Out for Delivery",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
            OrderStatus::Returned => "Returned",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("unknown order status: {s}"))
    }
}

/// Promotion kinds. Stored as the snake_case tag in `campaigns.campaign_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CampaignType {
    Seasonal,
    FlashSale,
    Clearance,
    Bogo,
}

impl CampaignType {
    pub const ALL: [CampaignType; 4] = [
        CampaignType::Seasonal,
        CampaignType::FlashSale,
        CampaignType::Clearance,
        CampaignType::Bogo,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CampaignType::Seasonal => "seasonal",
            CampaignType::FlashSale => "flash_sale",
            CampaignType::Clearance => "clearance",
            CampaignType::Bogo => "bogo",
        }
    }
}

impl fmt::Display for CampaignType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CampaignType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("unknown campaign type: {s}"))
    }
}

/// How a campaign discounts. Stored in `campaigns.discount_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscountType {
    Percentage,
    FixedAmount,
    FreeShipping,
}

impl DiscountType {
    pub const ALL: [DiscountType; 3] = [
        DiscountType::Percentage,
        DiscountType::FixedAmount,
        DiscountType::FreeShipping,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DiscountType::Percentage => "percentage",
            DiscountType::FixedAmount => "fixed_amount",
            DiscountType::FreeShipping => "free_shipping",
        }
    }
}

impl fmt::Display for DiscountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DiscountType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("unknown discount type: {s}"))
    }
}

/// Uppercases a catalog short name. Applied on every category/subcategory
/// save, regardless of the casing supplied by the caller.
pub fn normalize_short_name(short_name: &str) -> String {
    short_name.to_uppercase()
}

/// Line item subtotal: quantity times unit price, rounded to 3 fractional
/// digits. Recomputed on every save; never taken from the caller.
pub fn line_subtotal(quantity: f64, price: f64) -> f64 {
    (quantity * price * 1000.0).round() / 1000.0
}

#[derive(Queryable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = users)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub password: String,
    pub role: String,
}

#[derive(Insertable, Deserialize)]
#[diesel(table_name = users)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub role: String,
}

#[derive(Queryable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = type_master)]
pub struct TypeMaster {
    pub id: i32,
    pub value: String,
    pub ordering: i32,
    pub status: bool,
    pub created_at: NaiveDateTime,
}

impl fmt::Display for TypeMaster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

#[derive(Insertable, Deserialize)]
#[diesel(table_name = type_master)]
pub struct NewTypeMaster {
    pub value: String,
    pub ordering: i32,
    pub status: bool,
}

#[derive(AsChangeset, Deserialize)]
#[diesel(table_name = type_master)]
pub struct UpdateTypeMaster {
    pub value: Option<String>,
    pub ordering: Option<i32>,
    pub status: Option<bool>,
}

/// One row of the shared lookup table; `value_for_id` says which
/// `TypeMaster` family the row belongs to (payment method, shipment
/// method and so on).
#[derive(Queryable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = common_master)]
pub struct CommonMaster {
    pub id: i32,
    pub value: String,
    pub value_for_id: Option<i32>,
    pub ordering: i32,
    pub status: bool,
    pub created_at: NaiveDateTime,
}

impl fmt::Display for CommonMaster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

#[derive(Insertable, Deserialize)]
#[diesel(table_name = common_master)]
pub struct NewCommonMaster {
    pub value: String,
    pub value_for_id: Option<i32>,
    pub ordering: i32,
    pub status: bool,
}

#[derive(AsChangeset, Deserialize)]
#[diesel(table_name = common_master)]
pub struct UpdateCommonMaster {
    pub value: Option<String>,
    pub value_for_id: Option<i32>,
    pub ordering: Option<i32>,
    pub status: Option<bool>,
}

#[derive(Queryable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = customers)]
pub struct Customer {
    pub id: i32,
    pub user_id: i32,
    pub profile_pic: Option<String>,
    pub address: String,
    pub mobile: String,
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "customer #{} ({})", self.id, self.mobile)
    }
}

#[derive(Insertable, Deserialize)]
#[diesel(table_name = customers)]
pub struct NewCustomer {
    pub user_id: i32,
    pub profile_pic: Option<String>,
    pub address: String,
    pub mobile: String,
}

#[derive(AsChangeset, Deserialize)]
#[diesel(table_name = customers)]
pub struct UpdateCustomer {
    pub profile_pic: Option<String>,
    pub address: Option<String>,
    pub mobile: Option<String>,
}

#[derive(Queryable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = categories)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub short_name: String,
    pub description: Option<String>,
    pub category_type_id: Option<i32>,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[derive(Insertable, Deserialize)]
#[diesel(table_name = categories)]
pub struct NewCategory {
    pub name: String,
    pub short_name: String,
    pub description: Option<String>,
    pub category_type_id: Option<i32>,
}

#[derive(AsChangeset, Deserialize)]
#[diesel(table_name = categories)]
pub struct UpdateCategory {
    pub name: Option<String>,
    pub short_name: Option<String>,
    pub description: Option<String>,
    pub category_type_id: Option<i32>,
}

#[derive(Queryable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = subcategories)]
pub struct SubCategory {
    pub id: i32,
    pub category_id: i32,
    pub name: String,
    pub short_name: String,
    pub description: Option<String>,
}

impl fmt::Display for SubCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[derive(Insertable, Deserialize)]
#[diesel(table_name = subcategories)]
pub struct NewSubCategory {
    pub category_id: i32,
    pub name: String,
    pub short_name: String,
    pub description: Option<String>,
}

#[derive(AsChangeset, Deserialize)]
#[diesel(table_name = subcategories)]
pub struct UpdateSubCategory {
    pub category_id: Option<i32>,
    pub name: Option<String>,
    pub short_name: Option<String>,
    pub description: Option<String>,
}

#[derive(Queryable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = product)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub code: String,
    pub product_image: Option<String>,
    pub price: f64,
    pub discount_price: f64,
    pub subcategory_id: Option<i32>,
    pub description: String,
    pub unit: Option<String>,
    pub created_by: Option<i32>,
    pub created_at: Option<NaiveDateTime>,
    pub updated_by: Option<i32>,
    pub updated_at: Option<NaiveDateTime>,
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[derive(Insertable, Deserialize)]
#[diesel(table_name = product)]
pub struct NewProduct {
    pub name: String,
    pub code: String,
    pub product_image: Option<String>,
    pub price: f64,
    pub discount_price: f64,
    pub subcategory_id: Option<i32>,
    pub description: String,
    pub unit: Option<String>,
    pub created_by: Option<i32>,
}

#[derive(AsChangeset, Deserialize)]
#[diesel(table_name = product)]
pub struct UpdateProduct {
    pub name: Option<String>,
    pub code: Option<String>,
    pub product_image: Option<String>,
    pub price: Option<f64>,
    pub discount_price: Option<f64>,
    pub subcategory_id: Option<i32>,
    pub description: Option<String>,
    pub unit: Option<String>,
    pub updated_by: Option<i32>,
}

/// Filtering and sorting options for the product listing.
#[derive(Debug, Default, Deserialize)]
pub struct ProductQuery {
    pub subcategory_id: Option<i32>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub search_term: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

#[derive(Queryable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = orders)]
pub struct Order {
    pub id: i32,
    pub order_number: String,
    pub customer_id: Option<i32>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub mobile: Option<String>,
    pub bill_amount: f64,
    pub discount: f64,
    pub total: f64,
    pub payment_id: Option<i32>,
    pub shipment_id: Option<i32>,
    pub order_date: Option<NaiveDateTime>,
    pub status: Option<String>,
    pub transaction_id: Option<String>,
}

impl Order {
    /// Parsed view of the stored status string, if any. Rows written through
    /// this crate always hold one of the six fixed values.
    pub fn status(&self) -> Option<Result<OrderStatus, String>> {
        self.status.as_deref().map(OrderStatus::from_str)
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.order_number)
    }
}

#[derive(Insertable, Deserialize)]
#[diesel(table_name = orders)]
pub struct NewOrder {
    pub order_number: String,
    pub customer_id: Option<i32>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub mobile: Option<String>,
    pub bill_amount: f64,
    pub discount: f64,
    pub total: f64,
    pub payment_id: Option<i32>,
    pub shipment_id: Option<i32>,
    pub transaction_id: Option<String>,
}

#[derive(AsChangeset, Deserialize)]
#[diesel(table_name = orders)]
pub struct UpdateOrder {
    pub email: Option<String>,
    pub address: Option<String>,
    pub mobile: Option<String>,
    pub bill_amount: Option<f64>,
    pub discount: Option<f64>,
    pub total: Option<f64>,
    pub payment_id: Option<i32>,
    pub shipment_id: Option<i32>,
    pub transaction_id: Option<String>,
}

#[derive(Queryable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = order_details)]
pub struct OrderDetail {
    pub id: i32,
    pub order_id: i32,
    pub product_id: Option<i32>,
    pub price: f64,
    pub discount_price: f64,
    pub quantity: f64,
    pub unit: Option<String>,
    pub subtotal: f64,
    pub created_by: Option<i32>,
    pub created_at: Option<NaiveDateTime>,
    pub updated_by: Option<i32>,
    pub updated_at: Option<NaiveDateTime>,
}

impl fmt::Display for OrderDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "order #{} line #{}", self.order_id, self.id)
    }
}

/// Insert shape for a line item. There is deliberately no `subtotal` field:
/// the repository derives it from `quantity` and `price` at write time.
#[derive(Insertable, Deserialize)]
#[diesel(table_name = order_details)]
pub struct NewOrderDetail {
    pub order_id: i32,
    pub product_id: Option<i32>,
    pub price: f64,
    pub discount_price: f64,
    pub quantity: f64,
    pub unit: Option<String>,
    pub created_by: Option<i32>,
}

#[derive(AsChangeset, Deserialize)]
#[diesel(table_name = order_details)]
pub struct UpdateOrderDetail {
    pub product_id: Option<i32>,
    pub price: Option<f64>,
    pub discount_price: Option<f64>,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
    pub updated_by: Option<i32>,
}

#[derive(Queryable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = feedback)]
pub struct Feedback {
    pub id: i32,
    pub customer_id: Option<i32>,
    pub feedback: String,
    pub ratings: f64,
    pub created_by: Option<i32>,
    pub created_at: Option<NaiveDateTime>,
    pub updated_by: Option<i32>,
    pub updated_at: Option<NaiveDateTime>,
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.feedback)
    }
}

#[derive(Insertable, Deserialize)]
#[diesel(table_name = feedback)]
pub struct NewFeedback {
    pub customer_id: Option<i32>,
    #[diesel(column_name = feedback_text)]
    pub feedback: String,
    /// Falls back to the column default of 5 when omitted.
    pub ratings: Option<f64>,
    pub created_by: Option<i32>,
}

#[derive(AsChangeset, Deserialize)]
#[diesel(table_name = feedback)]
pub struct UpdateFeedback {
    #[diesel(column_name = feedback_text)]
    pub feedback: Option<String>,
    pub ratings: Option<f64>,
    pub updated_by: Option<i32>,
}

#[derive(Queryable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = campaigns)]
pub struct Campaign {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub campaign_type: String,
    pub discount_type: String,
    pub discount_value: BigDecimal,
    pub min_purchase_amount: Option<BigDecimal>,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub is_active: bool,
    pub created_by: Option<i32>,
    pub created_at: Option<NaiveDateTime>,
    pub updated_by: Option<i32>,
    pub updated_at: Option<NaiveDateTime>,
}

impl Campaign {
    pub fn campaign_type(&self) -> Result<CampaignType, String> {
        self.campaign_type.parse()
    }

    pub fn discount_type(&self) -> Result<DiscountType, String> {
        self.discount_type.parse()
    }
}

impl fmt::Display for Campaign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[derive(Insertable)]
#[diesel(table_name = campaigns)]
pub struct NewCampaign {
    pub name: String,
    pub description: Option<String>,
    pub campaign_type: String,
    pub discount_type: String,
    pub discount_value: BigDecimal,
    pub min_purchase_amount: Option<BigDecimal>,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub is_active: bool,
    pub created_by: Option<i32>,
}

#[derive(AsChangeset)]
#[diesel(table_name = campaigns)]
pub struct UpdateCampaign {
    pub name: Option<String>,
    pub description: Option<String>,
    pub campaign_type: Option<String>,
    pub discount_type: Option<String>,
    pub discount_value: Option<BigDecimal>,
    pub min_purchase_amount: Option<BigDecimal>,
    pub start_date: Option<NaiveDateTime>,
    pub end_date: Option<NaiveDateTime>,
    pub is_active: Option<bool>,
    pub updated_by: Option<i32>,
}

#[derive(Queryable, Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = campaign_products)]
pub struct CampaignProduct {
    pub campaign_id: i32,
    pub product_id: i32,
}

#[derive(Queryable, Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = campaign_categories)]
pub struct CampaignCategory {
    pub campaign_id: i32,
    pub category_id: i32,
}
