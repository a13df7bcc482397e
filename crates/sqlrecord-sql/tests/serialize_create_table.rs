mod support;

use pretty_assertions::assert_eq;
use sqlrecord_core::{
    schema::{Field, Model},
    stmt::Type,
};
use sqlrecord_sql::Serializer;

#[test]
fn create_orders() {
    let orders = support::orders();
    let stmt = Serializer::mysql(&orders).create_table();

    assert_eq!(
        stmt.sql(),
        "CREATE TABLE IF NOT EXISTS `orders` (\n    \
         `id` INT UNSIGNED NOT NULL AUTO_INCREMENT,\n    \
         `created` DATETIME DEFAULT CURRENT_TIMESTAMP COMMENT 'Time stamp of record creation',\n    \
         `orderNumber` VARCHAR(255),\n    \
         `orderDate` DATETIME,\n    \
         `price` FLOAT(20,4),\n    \
         `quantity` INT,\n    \
         `customerId` INT COMMENT \"Customer ID to customer table\",\n    \
         `shippedDate` DATETIME,\n    \
         `active` BOOLEAN DEFAULT FALSE,\n    \
         UNIQUE (`orderNumber`),\n    \
         PRIMARY KEY (`id`),\n    \
         KEY `orders_idx` (`id`, `orderNumber`)\n\
         ) ENGINE = INNODB"
    );
    assert!(stmt.params().is_empty());
}

#[test]
fn create_extended_model_has_composite_key() {
    let orders = support::orders();
    let monthly = support::orders_monthly(&orders);
    let sql = Serializer::mysql(&monthly).create_table().into_sql();

    assert!(sql.starts_with("CREATE TABLE IF NOT EXISTS `orders_monthly` ("));
    assert!(sql.contains("\n    `monthlyDate` DATETIME,\n"));
    assert!(sql.contains("\n    UNIQUE (`orderNumber`, `monthlyDate`),\n"));
    assert!(sql.contains("\n    KEY `orders_monthly_idx` (`id`, `orderNumber`, `monthlyDate`)\n"));
}

#[test]
fn create_without_key_has_no_unique_constraint() {
    let note = Model::builder("Note")
        .field(Field::new("body", Type::Text))
        .field(Field::new("day", Type::Date).optional())
        .build()
        .unwrap();

    assert_eq!(
        Serializer::mysql(&note).create_table().sql(),
        "CREATE TABLE IF NOT EXISTS `note` (\n    \
         `id` INT UNSIGNED NOT NULL AUTO_INCREMENT,\n    \
         `created` DATETIME DEFAULT CURRENT_TIMESTAMP COMMENT 'Time stamp of record creation',\n    \
         `body` VARCHAR(255),\n    \
         `day` DATE,\n    \
         PRIMARY KEY (`id`),\n    \
         KEY `note_idx` (`id`)\n\
         ) ENGINE = INNODB"
    );
}

#[test]
fn unique_constraint_iff_key() {
    let keyed = support::customer();
    assert!(Serializer::mysql(&keyed)
        .create_table()
        .sql()
        .contains("UNIQUE (`original`)"));

    let keyless = Model::builder("Customer")
        .field(Field::new("original", Type::Text))
        .build()
        .unwrap();
    assert!(!Serializer::mysql(&keyless).create_table().sql().contains("UNIQUE"));
}

#[test]
fn identifiers_are_quoted() {
    let model = Model::builder("Odd")
        .field(Field::new("weird", Type::Integer).column_name("we`ird"))
        .build()
        .unwrap();

    assert!(Serializer::mysql(&model)
        .create_table()
        .sql()
        .contains("`we``ird` INT"));
}
