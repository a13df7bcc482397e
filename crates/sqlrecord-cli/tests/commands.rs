use pretty_assertions::assert_eq;
use sqlrecord_cli::{SchemaFile, SqlRecordCli};
use sqlrecord_sql::Serializer;

const TABLES: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/tables.toml");
const ROWS: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/rows.json");

fn run(args: &[&str]) -> anyhow::Result<String> {
    let mut out = Vec::new();
    SqlRecordCli::new().parse_from(
        ["sqlrecord", "--schema", TABLES].iter().chain(args),
        &mut out,
    )?;
    Ok(String::from_utf8(out)?)
}

#[test]
fn tables() {
    assert_eq!(
        run(&["tables"]).unwrap(),
        "customer\tCustomer\toriginal\n\
         orders\tOrders\torderNumber\n\
         orders_monthly\tOrdersMonthly\torderNumber, monthlyDate\n"
    );
}

#[test]
fn sql_matches_serializer() {
    let schema = SchemaFile::load(TABLES).unwrap().build().unwrap();
    let orders = schema.model("orders").unwrap();
    let serializer = Serializer::mysql(orders);

    assert_eq!(
        run(&["sql", "orders", "create"]).unwrap(),
        format!("{}\n", serializer.create_table())
    );
    assert_eq!(
        run(&["sql", "Orders", "update"]).unwrap(),
        format!("{}\n", serializer.update().unwrap())
    );
    assert_eq!(
        run(&["sql", "orders", "prune", "--days", "90"]).unwrap(),
        format!("{}\n", serializer.prune(90).unwrap())
    );
}

#[test]
fn sql_positional_with_params() {
    assert_eq!(
        run(&["sql", "customer", "insert", "--style", "positional", "--params"]).unwrap(),
        "INSERT INTO `customer` (`customer`, `original`)\n\
         VALUES (?, ?)\n\
         ON DUPLICATE KEY UPDATE `original` = `original`\n\
         -- params: customer, original\n"
    );
}

#[test]
fn sql_drop_and_delete() {
    assert_eq!(
        run(&["sql", "orders_monthly", "drop"]).unwrap(),
        "DROP TABLE IF EXISTS `orders_monthly`\n"
    );
    assert_eq!(
        run(&["sql", "customer", "delete"]).unwrap(),
        "DELETE FROM `customer`\n"
    );
}

#[test]
fn sql_prune_by_column() {
    let out = run(&["sql", "orders", "prune", "--column", "orderDate"]).unwrap();
    assert!(out.contains("WHERE `orderDate` < CURDATE() - INTERVAL 180 DAY\n"));

    let err = run(&["sql", "orders", "prune", "--column", "price"]).unwrap_err();
    assert!(err.to_string().starts_with("invalid schema:"));
}

#[test]
fn unknown_table() {
    let err = run(&["sql", "invoices", "insert"]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "unknown table `invoices`; declared: customer, orders, orders_monthly"
    );
}

#[test]
fn record_prints_bound_values() {
    let out = run(&[
        "record",
        "orders",
        r#"{"orderNumber": 1, "orderDate": "2023-01-01 09:30:00", "comments": "testing",
            "price": 100.0, "quantity": 10, "customer": "Foo", "shippedDate": "2023-01-02 00:00:00"}"#,
    ])
    .unwrap();

    let params: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(
        params,
        serde_json::json!({
            "orderNumber": "1",
            "orderDate": "2023-01-01 09:30:00",
            "price": 100.0,
            "quantity": 10,
            "customer": "Foo",
            "shippedDate": null,
            "active": false,
        })
    );
}

#[test]
fn record_reports_missing_field() {
    let err = run(&[
        "record",
        "orders",
        r#"{"orderNumber": "A-1", "orderDate": "2023-01-01 09:30:00", "comments": "", "quantity": 1}"#,
    ])
    .unwrap_err();

    assert_eq!(
        err.to_string(),
        "missing required field `price`; input keys: orderNumber, orderDate, comments, quantity"
    );
}

#[test]
fn record_reports_transform_failure() {
    let err = run(&[
        "record",
        "orders",
        r#"{"orderNumber": "A-1", "orderDate": "2023-01-01", "comments": "", "price": 1, "quantity": 1}"#,
    ])
    .unwrap_err();

    assert_eq!(
        err.to_string(),
        "transform `datetime` rejected \"2023-01-01\" for field `orderDate`: \
         no valid date format found for \"2023-01-01\""
    );
}

#[test]
fn expired_lists_ids() {
    let mut out = Vec::new();
    SqlRecordCli::new()
        .parse_from(
            ["sqlrecord", "expired", ROWS, "--today", "2024-01-15"],
            &mut out,
        )
        .unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "2\n3\n");
}

#[test]
fn embedded_schema() {
    let schema = SchemaFile::load(TABLES).unwrap().build().unwrap();
    let cli = SqlRecordCli::with_schema(schema);

    let mut out = Vec::new();
    cli.parse_from(["sqlrecord", "sql", "customer", "drop"], &mut out)
        .unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "DROP TABLE IF EXISTS `customer`\n");
}
