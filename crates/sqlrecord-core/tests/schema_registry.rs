mod support;

use sqlrecord_core::{
    schema::{Field, Model},
    stmt::Type,
    Schema,
};

#[test]
fn lookup_by_table_and_type_name() {
    let schema = support::schema();

    assert_eq!(schema.len(), 3);
    assert_eq!(schema.model("orders").unwrap().name(), "Orders");
    assert_eq!(
        schema.model_by_name("OrdersMonthly").unwrap().table_name(),
        "orders_monthly"
    );
    assert!(schema.model("Orders").is_none());

    let tables: Vec<_> = schema.models().map(|m| m.table_name()).collect();
    assert_eq!(tables, ["customer", "orders", "orders_monthly"]);
}

#[test]
fn duplicate_table_is_rejected() {
    let err = Schema::builder()
        .model(support::customer())
        .model(support::customer())
        .build()
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "invalid schema: table `customer` is registered more than once"
    );
}

#[test]
fn foreign_key_to_unknown_table_is_rejected() {
    let err = Schema::builder()
        .model(support::orders())
        .build()
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "invalid schema: Orders: foreign key `customer` references unknown table `customer`"
    );
}

#[test]
fn foreign_key_to_unknown_column_is_rejected() {
    let item = Model::builder("Item")
        .field(Field::new("customer", Type::Text).foreign_key("customer", "nickname"))
        .build()
        .unwrap();

    let err = Schema::builder()
        .model(support::customer())
        .model(item)
        .build()
        .unwrap_err();

    assert!(err.is_invalid_schema());
    assert!(err.to_string().contains("`customer.nickname`"));
}

#[test]
fn foreign_key_to_id_is_accepted() {
    let item = Model::builder("Item")
        .field(Field::new("customer", Type::Integer).foreign_key("customer", "id"))
        .build()
        .unwrap();

    Schema::builder()
        .model(support::customer())
        .model(item)
        .build()
        .unwrap();
}
