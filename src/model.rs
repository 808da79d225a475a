use chrono::{NaiveDate, NaiveDateTime};

use crate::fake::{round2, FakeContext};
use crate::schema::{TableDef, CUSTOMERS, PRODUCTS, SALES};
use crate::value::Row;

pub const CUSTOMER_ID_MAX: i64 = 10_000_000;
pub const PRODUCT_ID_MAX: i64 = 1_000_000;
pub const SALE_ID_MAX: i64 = 1_000_000_000;

const GENDERS: &[&str] = &["M", "F"];
const MARITAL_STATUSES: &[&str] = &["single", "married", "divorced"];
const EDUCATION_LEVELS: &[&str] = &["high_school", "college", "masters", "phd"];
const PAYMENT_METHODS: &[&str] = &["card", "cash", "online"];
const CHANNELS: &[&str] = &["store", "online"];

/// A generated entity that maps onto one row of its table.
pub trait Record: Sized {
    const TABLE: &'static TableDef;

    fn fake(ctx: &mut FakeContext) -> Self;

    /// Values in `TABLE` column order.
    fn into_row(self) -> Row;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub customer_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub birthdate: NaiveDate,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub postal_code: String,
    pub signup_date: NaiveDate,
    pub last_login: NaiveDateTime,
    pub loyalty_points: i64,
    pub yearly_income: f64,
    pub marital_status: String,
    pub num_children: i32,
    pub education_level: String,
    pub occupation: String,
    pub home_owner: bool,
}

impl Record for Customer {
    const TABLE: &'static TableDef = &CUSTOMERS;

    fn fake(ctx: &mut FakeContext) -> Self {
        Customer {
            customer_id: ctx.between(1..=CUSTOMER_ID_MAX),
            first_name: ctx.first_name(),
            last_name: ctx.last_name(),
            gender: ctx.pick(GENDERS).to_string(),
            birthdate: ctx.date_of_birth(18, 80),
            email: ctx.email(),
            phone: ctx.phone_number(),
            address: ctx.address(),
            city: ctx.city(),
            state: ctx.state(),
            country: ctx.country(),
            postal_code: ctx.postcode(),
            signup_date: ctx.date_within_years(10),
            last_login: ctx.date_time_within_years(1),
            loyalty_points: ctx.between(0..=10_000),
            yearly_income: ctx.between(1000.0..100_000.0),
            marital_status: ctx.pick(MARITAL_STATUSES).to_string(),
            num_children: ctx.between(0..=5),
            education_level: ctx.pick(EDUCATION_LEVELS).to_string(),
            occupation: ctx.job(),
            home_owner: ctx.coin(),
        }
    }

    fn into_row(self) -> Row {
        vec![
            self.customer_id.into(),
            self.first_name.into(),
            self.last_name.into(),
            self.gender.into(),
            self.birthdate.into(),
            self.email.into(),
            self.phone.into(),
            self.address.into(),
            self.city.into(),
            self.state.into(),
            self.country.into(),
            self.postal_code.into(),
            self.signup_date.into(),
            self.last_login.into(),
            self.loyalty_points.into(),
            self.yearly_income.into(),
            self.marital_status.into(),
            self.num_children.into(),
            self.education_level.into(),
            self.occupation.into(),
            self.home_owner.into(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub product_id: i64,
    pub name: String,
    pub category: String,
    pub subcategory: String,
    pub brand: String,
    pub price: f64,
    pub weight: f64,
    pub manufacture_date: NaiveDate,
}

impl Record for Product {
    const TABLE: &'static TableDef = &PRODUCTS;

    fn fake(ctx: &mut FakeContext) -> Self {
        Product {
            product_id: ctx.between(1..=PRODUCT_ID_MAX),
            name: ctx.word(),
            category: ctx.word(),
            subcategory: ctx.word(),
            brand: ctx.company(),
            price: ctx.money(1.0, 1000.0),
            weight: ctx.money(0.1, 10.0),
            manufacture_date: ctx.date_within_years(3),
        }
    }

    fn into_row(self) -> Row {
        vec![
            self.product_id.into(),
            self.name.into(),
            self.category.into(),
            self.subcategory.into(),
            self.brand.into(),
            self.price.into(),
            self.weight.into(),
            self.manufacture_date.into(),
        ]
    }
}

/// Customer and product ids are sampled from the same ranges as the
/// generated entities and never checked against inserted rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Sale {
    pub sale_id: i64,
    pub customer_id: i64,
    pub product_id: i64,
    pub sale_date: NaiveDate,
    pub sale_timestamp: NaiveDateTime,
    pub quantity: i32,
    pub unit_price: f64,
    pub discount: f64,
    /// `unit_price * quantity`; the discount is not applied.
    pub total_price: f64,
    pub payment_method: String,
    pub store_id: i32,
    pub channel: String,
}

impl Record for Sale {
    const TABLE: &'static TableDef = &SALES;

    fn fake(ctx: &mut FakeContext) -> Self {
        let sale_id = ctx.between(1..=SALE_ID_MAX);
        let customer_id = ctx.between(1..=CUSTOMER_ID_MAX);
        let product_id = ctx.between(1..=PRODUCT_ID_MAX);
        let quantity: i32 = ctx.between(1..=10);
        let unit_price = ctx.money(5.0, 1000.0);
        let total_price = round2(unit_price * f64::from(quantity));

        Sale {
            sale_id,
            customer_id,
            product_id,
            sale_date: ctx.date_within_years(1),
            sale_timestamp: ctx.now(),
            quantity,
            unit_price,
            discount: ctx.money(0.0, 0.3),
            total_price,
            payment_method: ctx.pick(PAYMENT_METHODS).to_string(),
            store_id: ctx.between(1..=50),
            channel: ctx.pick(CHANNELS).to_string(),
        }
    }

    fn into_row(self) -> Row {
        vec![
            self.sale_id.into(),
            self.customer_id.into(),
            self.product_id.into(),
            self.sale_date.into(),
            self.sale_timestamp.into(),
            self.quantity.into(),
            self.unit_price.into(),
            self.discount.into(),
            self.total_price.into(),
            self.payment_method.into(),
            self.store_id.into(),
            self.channel.into(),
        ]
    }
}
