#![allow(dead_code)]

use sqlrecord_core::{
    schema::{Field, Model},
    stmt::Type,
    transform, Schema,
};
use std::sync::Arc;

pub fn customer() -> Arc<Model> {
    Model::builder("Customer")
        .field(
            Field::new("customer", Type::Text)
                .column_type("VARCHAR(255) COMMENT \"Customer name override\""),
        )
        .field(
            Field::new("original", Type::Text)
                .key()
                .column_type("VARCHAR(255) COMMENT \"Customer name from order data\""),
        )
        .build()
        .unwrap()
}

fn order_fields() -> Vec<Field> {
    vec![
        Field::new("orderNumber", Type::Text).key(),
        Field::new("orderDate", Type::DateTime).transform(transform::DATETIME),
        Field::new("comments", Type::Text).ignore(),
        Field::new("price", Type::Float),
        Field::new("quantity", Type::Integer),
        Field::new("customer", Type::Text)
            .optional()
            .column_name("customerId")
            .column_type("INT COMMENT \"Customer ID to customer table\"")
            .foreign_key("customer", "original"),
        Field::new("shippedDate", Type::DateTime)
            .optional()
            .transform(transform::DISCARD),
        Field::new("active", Type::Boolean).default(false),
    ]
}

pub fn orders() -> Arc<Model> {
    Model::builder("Orders")
        .fields(order_fields())
        .build()
        .unwrap()
}

pub fn orders_monthly(orders: &Model) -> Arc<Model> {
    Model::extend(orders, "OrdersMonthly")
        .field(Field::new("monthlyDate", Type::DateTime).optional().key())
        .build()
        .unwrap()
}

pub fn schema() -> Schema {
    let orders = orders();
    let monthly = orders_monthly(&orders);

    Schema::builder()
        .model(customer())
        .model(orders)
        .model(monthly)
        .build()
        .unwrap()
}
