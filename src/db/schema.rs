diesel::table! {
    users (id) {
        id -> Int4,
        username -> Varchar,
        password -> Varchar,
        role -> Varchar,
    }
}

diesel::table! {
    type_master (id) {
        id -> Int4,
        value -> Varchar,
        ordering -> Int4,
        status -> Bool,
        created_at -> Timestamp,
    }
}

diesel::table! {
    common_master (id) {
        id -> Int4,
        value -> Varchar,
        value_for_id -> Nullable<Int4>,
        ordering -> Int4,
        status -> Bool,
        created_at -> Timestamp,
    }
}

diesel::table! {
    customers (id) {
        id -> Int4,
        user_id -> Int4,
        profile_pic -> Nullable<Varchar>,
        address -> Varchar,
        mobile -> Varchar,
    }
}

diesel::table! {
    categories (id) {
        id -> Int4,
        name -> Varchar,
        short_name -> Varchar,
        description -> Nullable<Varchar>,
        category_type_id -> Nullable<Int4>,
    }
}

diesel::table! {
    subcategories (id) {
        id -> Int4,
        category_id -> Int4,
        name -> Varchar,
        short_name -> Varchar,
        description -> Nullable<Varchar>,
    }
}

diesel::table! {
    product (id) {
        id -> Int4,
        name -> Varchar,
        code -> Varchar,
        product_image -> Nullable<Varchar>,
        price -> Float8,
        discount_price -> Float8,
        subcategory_id -> Nullable<Int4>,
        description -> Varchar,
        unit -> Nullable<Varchar>,
        created_by -> Nullable<Int4>,
        created_at -> Nullable<Timestamp>,
        updated_by -> Nullable<Int4>,
        updated_at -> Nullable<Timestamp>,
    }
}

diesel::table! {
    #[sql_name = "order"]
    orders (id) {
        id -> Int4,
        order_number -> Varchar,
        customer_id -> Nullable<Int4>,
        email -> Nullable<Varchar>,
        address -> Nullable<Varchar>,
        mobile -> Nullable<Varchar>,
        bill_amount -> Float8,
        discount -> Float8,
        total -> Float8,
        payment_id -> Nullable<Int4>,
        shipment_id -> Nullable<Int4>,
        order_date -> Nullable<Timestamp>,
        status -> Nullable<Varchar>,
        transaction_id -> Nullable<Varchar>,
    }
}

diesel::table! {
    order_details (id) {
        id -> Int4,
        order_id -> Int4,
        product_id -> Nullable<Int4>,
        price -> Float8,
        discount_price -> Float8,
        quantity -> Float8,
        unit -> Nullable<Varchar>,
        subtotal -> Float8,
        created_by -> Nullable<Int4>,
        created_at -> Nullable<Timestamp>,
        updated_by -> Nullable<Int4>,
        updated_at -> Nullable<Timestamp>,
    }
}

diesel::table! {
    feedback (id) {
        id -> Int4,
        customer_id -> Nullable<Int4>,
        #[sql_name = "feedback"]
        feedback_text -> Varchar,
        ratings -> Float8,
        created_by -> Nullable<Int4>,
        created_at -> Nullable<Timestamp>,
        updated_by -> Nullable<Int4>,
        updated_at -> Nullable<Timestamp>,
    }
}

diesel::table! {
    campaigns (id) {
        id -> Int4,
        name -> Varchar,
        description -> Nullable<Text>,
        campaign_type -> Varchar,
        discount_type -> Varchar,
        discount_value -> Numeric,
        min_purchase_amount -> Nullable<Numeric>,
        start_date -> Timestamp,
        end_date -> Timestamp,
        is_active -> Bool,
        created_by -> Nullable<Int4>,
        created_at -> Nullable<Timestamp>,
        updated_by -> Nullable<Int4>,
        updated_at -> Nullable<Timestamp>,
    }
}

diesel::table! {
    campaign_products (campaign_id, product_id) {
        campaign_id -> Int4,
        product_id -> Int4,
    }
}

diesel::table! {
    campaign_categories (campaign_id, category_id) {
        campaign_id -> Int4,
        category_id -> Int4,
    }
}

diesel::joinable!(common_master -> type_master (value_for_id));
diesel::joinable!(customers -> users (user_id));
diesel::joinable!(categories -> type_master (category_type_id));
diesel::joinable!(subcategories -> categories (category_id));
diesel::joinable!(product -> subcategories (subcategory_id));
diesel::joinable!(orders -> customers (customer_id));
diesel::joinable!(order_details -> orders (order_id));
diesel::joinable!(order_details -> product (product_id));
diesel::joinable!(feedback -> customers (customer_id));
diesel::joinable!(campaign_products -> campaigns (campaign_id));
diesel::joinable!(campaign_products -> product (product_id));
diesel::joinable!(campaign_categories -> campaigns (campaign_id));
diesel::joinable!(campaign_categories -> categories (category_id));

diesel::allow_tables_to_appear_in_same_query!(
    users,
    type_master,
    common_master,
    customers,
    categories,
    subcategories,
    product,
    orders,
    order_details,
    feedback,
    campaigns,
    campaign_products,
    campaign_categories,
);
