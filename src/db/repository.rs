use chrono::Utc;
use diesel::prelude::*;
use diesel::result::Error;
use log::debug;

use crate::db::models::*;
use crate::db::schema::*;

diesel::sql_function! {
    fn lower(x: diesel::sql_types::Text) -> diesel::sql_types::Text;
}

pub struct UserRepository;

impl UserRepository {
    pub fn create(conn: &mut PgConnection, new_user: NewUser) -> QueryResult<User> {
        diesel::insert_into(users::table)
            .values(&new_user)
            .get_result(conn)
    }

    pub fn get_by_id(conn: &mut PgConnection, id: i32) -> QueryResult<User> {
        users::table.find(id).first(conn)
    }
}

pub struct TypeMasterRepository;

impl TypeMasterRepository {
    pub fn create(conn: &mut PgConnection, new_row: NewTypeMaster) -> QueryResult<TypeMaster> {
        diesel::insert_into(type_master::table)
            .values(&new_row)
            .get_result(conn)
    }

    pub fn get_by_id(conn: &mut PgConnection, id: i32) -> QueryResult<TypeMaster> {
        type_master::table.find(id).first(conn)
    }

    pub fn get_all(conn: &mut PgConnection) -> QueryResult<Vec<TypeMaster>> {
        type_master::table
            .order((type_master::ordering.asc(), type_master::id.asc()))
            .load(conn)
    }

    pub fn update(
        conn: &mut PgConnection,
        id: i32,
        changes: UpdateTypeMaster,
    ) -> QueryResult<TypeMaster> {
        diesel::update(type_master::table.find(id))
            .set(changes)
            .get_result(conn)
    }

    pub fn delete(conn: &mut PgConnection, id: i32) -> QueryResult<usize> {
        diesel::delete(type_master::table.find(id)).execute(conn)
    }
}

pub struct CommonMasterRepository;

impl CommonMasterRepository {
    pub fn create(conn: &mut PgConnection, new_row: NewCommonMaster) -> QueryResult<CommonMaster> {
        diesel::insert_into(common_master::table)
            .values(&new_row)
            .get_result(conn)
    }

    pub fn get_by_id(conn: &mut PgConnection, id: i32) -> QueryResult<CommonMaster> {
        common_master::table.find(id).first(conn)
    }

    /// Looks a row up by its exact value. Absence comes back as `None`,
    /// never as an error.
    pub fn by_value(conn: &mut PgConnection, value: &str) -> QueryResult<Option<CommonMaster>> {
        common_master::table
            .filter(common_master::value.eq(value))
            .order(common_master::id.asc())
            .first(conn)
            .optional()
    }

    pub fn list_for_type(
        conn: &mut PgConnection,
        type_master_id: i32,
    ) -> QueryResult<Vec<CommonMaster>> {
        common_master::table
            .filter(common_master::value_for_id.eq(type_master_id))
            .order((common_master::ordering.asc(), common_master::id.asc()))
            .load(conn)
    }

    pub fn update(
        conn: &mut PgConnection,
        id: i32,
        changes: UpdateCommonMaster,
    ) -> QueryResult<CommonMaster> {
        diesel::update(common_master::table.find(id))
            .set(changes)
            .get_result(conn)
    }

    pub fn delete(conn: &mut PgConnection, id: i32) -> QueryResult<usize> {
        diesel::delete(common_master::table.find(id)).execute(conn)
    }
}

pub struct CustomerRepository;

impl CustomerRepository {
    pub fn create(conn: &mut PgConnection, new_customer: NewCustomer) -> QueryResult<Customer> {
        diesel::insert_into(customers::table)
            .values(&new_customer)
            .get_result(conn)
    }

    pub fn get_by_id(conn: &mut PgConnection, id: i32) -> QueryResult<Customer> {
        customers::table.find(id).first(conn)
    }

    /// The one profile attached to a user account, if it exists yet.
    pub fn get_by_user(conn: &mut PgConnection, user_id: i32) -> QueryResult<Option<Customer>> {
        customers::table
            .filter(customers::user_id.eq(user_id))
            .first(conn)
            .optional()
    }

    pub fn update(
        conn: &mut PgConnection,
        id: i32,
        changes: UpdateCustomer,
    ) -> QueryResult<Customer> {
        diesel::update(customers::table.find(id))
            .set(changes)
            .get_result(conn)
    }

    pub fn delete(conn: &mut PgConnection, id: i32) -> QueryResult<usize> {
        diesel::delete(customers::table.find(id)).execute(conn)
    }
}

pub struct CategoryRepository;

impl CategoryRepository {
    pub fn create(conn: &mut PgConnection, mut new_category: NewCategory) -> QueryResult<Category> {
        new_category.short_name = normalize_short_name(&new_category.short_name);
        diesel::insert_into(categories::table)
            .values(&new_category)
            .get_result(conn)
    }

    pub fn get_by_id(conn: &mut PgConnection, id: i32) -> QueryResult<Category> {
        categories::table.find(id).first(conn)
    }

    pub fn get_all(conn: &mut PgConnection) -> QueryResult<Vec<Category>> {
        categories::table.order(categories::name.asc()).load(conn)
    }

    /// Case-insensitive exact lookup on the trimmed name, returning the most
    /// recently created match or `None`.
    pub fn last_by_name(conn: &mut PgConnection, name: &str) -> QueryResult<Option<Category>> {
        categories::table
            .filter(lower(categories::name).eq(name.trim().to_lowercase()))
            .order(categories::id.desc())
            .first(conn)
            .optional()
    }

    pub fn update(
        conn: &mut PgConnection,
        id: i32,
        mut changes: UpdateCategory,
    ) -> QueryResult<Category> {
        if let Some(short_name) = changes.short_name.take() {
            changes.short_name = Some(normalize_short_name(&short_name));
        }
        diesel::update(categories::table.find(id))
            .set(changes)
            .get_result(conn)
    }

    pub fn delete(conn: &mut PgConnection, id: i32) -> QueryResult<usize> {
        debug!("deleting category {id}; subcategories and products cascade");
        diesel::delete(categories::table.find(id)).execute(conn)
    }

    pub fn subcategories_of(
        conn: &mut PgConnection,
        category_id: i32,
    ) -> QueryResult<Vec<SubCategory>> {
        subcategories::table
            .filter(subcategories::category_id.eq(category_id))
            .order(subcategories::name.asc())
            .load(conn)
    }
}

pub struct SubCategoryRepository;

impl SubCategoryRepository {
    pub fn create(
        conn: &mut PgConnection,
        mut new_subcategory: NewSubCategory,
    ) -> QueryResult<SubCategory> {
        new_subcategory.short_name = normalize_short_name(&new_subcategory.short_name);
        diesel::insert_into(subcategories::table)
            .values(&new_subcategory)
            .get_result(conn)
    }

    pub fn get_by_id(conn: &mut PgConnection, id: i32) -> QueryResult<SubCategory> {
        subcategories::table.find(id).first(conn)
    }

    pub fn get_all(conn: &mut PgConnection) -> QueryResult<Vec<SubCategory>> {
        subcategories::table
            .order(subcategories::name.asc())
            .load(conn)
    }

    pub fn last_by_name(conn: &mut PgConnection, name: &str) -> QueryResult<Option<SubCategory>> {
        subcategories::table
            .filter(lower(subcategories::name).eq(name.trim().to_lowercase()))
            .order(subcategories::id.desc())
            .first(conn)
            .optional()
    }

    pub fn update(
        conn: &mut PgConnection,
        id: i32,
        mut changes: UpdateSubCategory,
    ) -> QueryResult<SubCategory> {
        if let Some(short_name) = changes.short_name.take() {
            changes.short_name = Some(normalize_short_name(&short_name));
        }
        diesel::update(subcategories::table.find(id))
            .set(changes)
            .get_result(conn)
    }

    pub fn delete(conn: &mut PgConnection, id: i32) -> QueryResult<usize> {
        debug!("deleting subcategory {id}; products cascade");
        diesel::delete(subcategories::table.find(id)).execute(conn)
    }

    pub fn products_of(conn: &mut PgConnection, subcategory_id: i32) -> QueryResult<Vec<Product>> {
        product::table
            .filter(product::subcategory_id.eq(subcategory_id))
            .order(product::name.asc())
            .load(conn)
    }
}

pub struct ProductRepository;

impl ProductRepository {
    pub fn create(conn: &mut PgConnection, new_product: NewProduct) -> QueryResult<Product> {
        diesel::insert_into(product::table)
            .values(&new_product)
            .get_result(conn)
    }

    pub fn get_by_id(conn: &mut PgConnection, id: i32) -> QueryResult<Product> {
        product::table.find(id).first(conn)
    }

    pub fn by_code(conn: &mut PgConnection, code: &str) -> QueryResult<Option<Product>> {
        product::table
            .filter(product::code.eq(code))
            .first(conn)
            .optional()
    }

    pub fn update(
        conn: &mut PgConnection,
        id: i32,
        changes: UpdateProduct,
    ) -> QueryResult<Product> {
        diesel::update(product::table.find(id))
            .set((changes, product::updated_at.eq(Utc::now().naive_utc())))
            .get_result(conn)
    }

    pub fn delete(conn: &mut PgConnection, id: i32) -> QueryResult<usize> {
        diesel::delete(product::table.find(id)).execute(conn)
    }

    pub fn get_all(conn: &mut PgConnection, query: &ProductQuery) -> QueryResult<Vec<Product>> {
        let mut stmt = product::table.into_boxed();

        if let Some(subcategory_id) = query.subcategory_id {
            stmt = stmt.filter(product::subcategory_id.eq(subcategory_id));
        }

        if let Some(min) = query.min_price {
            stmt = stmt.filter(product::price.ge(min));
        }

        if let Some(max) = query.max_price {
            stmt = stmt.filter(product::price.le(max));
        }

        if let Some(term) = &query.search_term {
            let pattern = format!("%{}%", term);
            stmt = stmt.filter(
                product::name
                    .ilike(pattern.clone())
                    .or(product::description.ilike(pattern)),
            );
        }

        if let Some(sort) = &query.sort_by {
            let order = query.sort_order.as_deref().unwrap_or("asc");
            stmt = match (sort.as_str(), order) {
                ("name", "asc") => stmt.order(product::name.asc()),
                ("name", "desc") => stmt.order(product::name.desc()),
                ("price", "asc") => stmt.order(product::price.asc()),
                ("price", "desc") => stmt.order(product::price.desc()),
                ("created_at", "asc") => stmt.order(product::created_at.asc()),
                ("created_at", "desc") => stmt.order(product::created_at.desc()),
                _ => stmt.order(product::id.asc()),
            };
        } else {
            stmt = stmt.order(product::id.asc());
        }

        stmt.load(conn)
    }
}

pub struct OrderRepository;

impl OrderRepository {
    pub fn create(
        conn: &mut PgConnection,
        new_order: NewOrder,
        status: Option<OrderStatus>,
    ) -> QueryResult<Order> {
        diesel::insert_into(orders::table)
            .values((
                &new_order,
                orders::status.eq(status.map(|status| status.as_str())),
            ))
            .get_result(conn)
    }

    pub fn get_by_id(conn: &mut PgConnection, id: i32) -> QueryResult<Order> {
        orders::table.find(id).first(conn)
    }

    pub fn by_order_number(
        conn: &mut PgConnection,
        order_number: &str,
    ) -> QueryResult<Option<Order>> {
        orders::table
            .filter(orders::order_number.eq(order_number))
            .first(conn)
            .optional()
    }

    pub fn get_all(
        conn: &mut PgConnection,
        customer_id: Option<i32>,
        status: Option<OrderStatus>,
    ) -> QueryResult<Vec<Order>> {
        let mut stmt = orders::table.into_boxed();

        if let Some(customer_id) = customer_id {
            stmt = stmt.filter(orders::customer_id.eq(customer_id));
        }

        if let Some(status) = status {
            stmt = stmt.filter(orders::status.eq(status.as_str()));
        }

        stmt.order(orders::id.desc()).load(conn)
    }

    pub fn update(conn: &mut PgConnection, id: i32, changes: UpdateOrder) -> QueryResult<Order> {
        diesel::update(orders::table.find(id))
            .set(changes)
            .get_result(conn)
    }

    pub fn set_status(
        conn: &mut PgConnection,
        id: i32,
        status: OrderStatus,
    ) -> QueryResult<Order> {
        diesel::update(orders::table.find(id))
            .set(orders::status.eq(status.as_str()))
            .get_result(conn)
    }

    pub fn delete(conn: &mut PgConnection, id: i32) -> QueryResult<usize> {
        debug!("deleting order {id}; line items cascade");
        diesel::delete(orders::table.find(id)).execute(conn)
    }
}

pub struct OrderDetailsRepository;

impl OrderDetailsRepository {
    /// Inserts a line item. `subtotal` is derived from quantity and price
    /// here; the insert shape carries no subtotal field.
    pub fn create(conn: &mut PgConnection, new_line: NewOrderDetail) -> QueryResult<OrderDetail> {
        let subtotal = line_subtotal(new_line.quantity, new_line.price);
        diesel::insert_into(order_details::table)
            .values((&new_line, order_details::subtotal.eq(subtotal)))
            .get_result(conn)
    }

    pub fn get_by_id(conn: &mut PgConnection, id: i32) -> QueryResult<OrderDetail> {
        order_details::table.find(id).first(conn)
    }

    pub fn for_order(conn: &mut PgConnection, order_id: i32) -> QueryResult<Vec<OrderDetail>> {
        order_details::table
            .filter(order_details::order_id.eq(order_id))
            .order(order_details::id.asc())
            .load(conn)
    }

    /// Updates a line item. The stored subtotal is recomputed from the
    /// effective quantity and price on every save, even when the changeset
    /// touches neither.
    pub fn update(
        conn: &mut PgConnection,
        id: i32,
        changes: UpdateOrderDetail,
    ) -> QueryResult<OrderDetail> {
        let current: OrderDetail = order_details::table.find(id).first(conn)?;
        let quantity = changes.quantity.unwrap_or(current.quantity);
        let price = changes.price.unwrap_or(current.price);
        diesel::update(order_details::table.find(id))
            .set((
                changes,
                order_details::subtotal.eq(line_subtotal(quantity, price)),
                order_details::updated_at.eq(Utc::now().naive_utc()),
            ))
            .get_result(conn)
    }

    pub fn delete(conn: &mut PgConnection, id: i32) -> QueryResult<usize> {
        diesel::delete(order_details::table.find(id)).execute(conn)
    }
}

pub struct FeedbackRepository;

impl FeedbackRepository {
    pub fn create(conn: &mut PgConnection, new_feedback: NewFeedback) -> QueryResult<Feedback> {
        diesel::insert_into(feedback::table)
            .values(&new_feedback)
            .get_result(conn)
    }

    pub fn get_by_id(conn: &mut PgConnection, id: i32) -> QueryResult<Feedback> {
        feedback::table.find(id).first(conn)
    }

    pub fn get_all(conn: &mut PgConnection) -> QueryResult<Vec<Feedback>> {
        feedback::table.order(feedback::id.desc()).load(conn)
    }

    pub fn for_customer(conn: &mut PgConnection, customer_id: i32) -> QueryResult<Vec<Feedback>> {
        feedback::table
            .filter(feedback::customer_id.eq(customer_id))
            .order(feedback::id.desc())
            .load(conn)
    }

    pub fn update(
        conn: &mut PgConnection,
        id: i32,
        changes: UpdateFeedback,
    ) -> QueryResult<Feedback> {
        diesel::update(feedback::table.find(id))
            .set((changes, feedback::updated_at.eq(Utc::now().naive_utc())))
            .get_result(conn)
    }

    pub fn delete(conn: &mut PgConnection, id: i32) -> QueryResult<usize> {
        diesel::delete(feedback::table.find(id)).execute(conn)
    }
}

fn ensure_known_tag<T: std::str::FromStr<Err = String>>(tag: Option<&str>) -> QueryResult<()> {
    if let Some(tag) = tag {
        tag.parse::<T>()
            .map_err(|message| Error::QueryBuilderError(message.into()))?;
    }
    Ok(())
}

pub struct CampaignRepository;

impl CampaignRepository {
    pub fn create(conn: &mut PgConnection, new_campaign: NewCampaign) -> QueryResult<Campaign> {
        ensure_known_tag::<CampaignType>(Some(&new_campaign.campaign_type))?;
        ensure_known_tag::<DiscountType>(Some(&new_campaign.discount_type))?;
        diesel::insert_into(campaigns::table)
            .values(&new_campaign)
            .get_result(conn)
    }

    pub fn get_by_id(conn: &mut PgConnection, id: i32) -> QueryResult<Campaign> {
        campaigns::table.find(id).first(conn)
    }

    pub fn by_name(conn: &mut PgConnection, name: &str) -> QueryResult<Option<Campaign>> {
        campaigns::table
            .filter(campaigns::name.eq(name))
            .first(conn)
            .optional()
    }

    pub fn get_all(conn: &mut PgConnection) -> QueryResult<Vec<Campaign>> {
        campaigns::table.order(campaigns::id.asc()).load(conn)
    }

    /// Campaigns whose active flag is set. Eligibility evaluation against a
    /// cart or order lives outside this crate.
    pub fn currently_active(conn: &mut PgConnection) -> QueryResult<Vec<Campaign>> {
        campaigns::table
            .filter(campaigns::is_active.eq(true))
            .order(campaigns::start_date.desc())
            .load(conn)
    }

    pub fn update(
        conn: &mut PgConnection,
        id: i32,
        changes: UpdateCampaign,
    ) -> QueryResult<Campaign> {
        ensure_known_tag::<CampaignType>(changes.campaign_type.as_deref())?;
        ensure_known_tag::<DiscountType>(changes.discount_type.as_deref())?;
        diesel::update(campaigns::table.find(id))
            .set((changes, campaigns::updated_at.eq(Utc::now().naive_utc())))
            .get_result(conn)
    }

    pub fn delete(conn: &mut PgConnection, id: i32) -> QueryResult<usize> {
        diesel::delete(campaigns::table.find(id)).execute(conn)
    }

    pub fn add_product(
        conn: &mut PgConnection,
        campaign_id: i32,
        product_id: i32,
    ) -> QueryResult<usize> {
        diesel::insert_into(campaign_products::table)
            .values(&CampaignProduct {
                campaign_id,
                product_id,
            })
            .on_conflict((
                campaign_products::campaign_id,
                campaign_products::product_id,
            ))
            .do_nothing()
            .execute(conn)
    }

    pub fn remove_product(
        conn: &mut PgConnection,
        campaign_id: i32,
        product_id: i32,
    ) -> QueryResult<usize> {
        diesel::delete(
            campaign_products::table
                .filter(campaign_products::campaign_id.eq(campaign_id))
                .filter(campaign_products::product_id.eq(product_id)),
        )
        .execute(conn)
    }

    pub fn products_of(conn: &mut PgConnection, campaign_id: i32) -> QueryResult<Vec<Product>> {
        campaign_products::table
            .inner_join(product::table)
            .filter(campaign_products::campaign_id.eq(campaign_id))
            .select(product::all_columns)
            .order(product::name.asc())
            .load(conn)
    }

    pub fn add_category(
        conn: &mut PgConnection,
        campaign_id: i32,
        category_id: i32,
    ) -> QueryResult<usize> {
        diesel::insert_into(campaign_categories::table)
            .values(&CampaignCategory {
                campaign_id,
                category_id,
            })
            .on_conflict((
                campaign_categories::campaign_id,
                campaign_categories::category_id,
            ))
            .do_nothing()
            .execute(conn)
    }

    pub fn remove_category(
        conn: &mut PgConnection,
        campaign_id: i32,
        category_id: i32,
    ) -> QueryResult<usize> {
        diesel::delete(
            campaign_categories::table
                .filter(campaign_categories::campaign_id.eq(campaign_id))
                .filter(campaign_categories::category_id.eq(category_id)),
        )
        .execute(conn)
    }

    pub fn categories_of(conn: &mut PgConnection, campaign_id: i32) -> QueryResult<Vec<Category>> {
        campaign_categories::table
            .inner_join(categories::table)
            .filter(campaign_categories::campaign_id.eq(campaign_id))
            .select(categories::all_columns)
            .order(categories::name.asc())
            .load(conn)
    }
}
