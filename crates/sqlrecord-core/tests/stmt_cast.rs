use jiff::civil::date;
use sqlrecord_core::stmt::{Type, Value};

#[test]
fn cast_to_text() {
    assert_eq!(Type::Text.cast(&Value::I64(7)), Some(Value::from("7")));
    assert_eq!(Type::Text.cast(&Value::F64(1.5)), Some(Value::from("1.5")));
    assert_eq!(Type::Text.cast(&Value::F64(100.0)), Some(Value::from("100.0")));
    assert_eq!(Type::Text.cast(&Value::Bool(true)), Some(Value::from("true")));
    assert_eq!(
        Type::Text.cast(&Value::DateTime(date(2023, 1, 2).at(3, 4, 5, 0))),
        Some(Value::from("2023-01-02 03:04:05"))
    );
}

#[test]
fn cast_to_integer() {
    assert_eq!(Type::Integer.cast(&Value::from(" 42 ")), Some(Value::I64(42)));
    assert_eq!(Type::Integer.cast(&Value::F64(3.0)), Some(Value::I64(3)));
    assert_eq!(Type::Integer.cast(&Value::F64(3.5)), None);
    assert_eq!(Type::Integer.cast(&Value::Bool(true)), Some(Value::I64(1)));
    assert_eq!(Type::Integer.cast(&Value::from("4.0")), None);
}

#[test]
fn cast_to_integer_rejects_out_of_range_floats() {
    assert_eq!(Type::Integer.cast(&Value::F64(9.223372036854776e18)), None);
    assert_eq!(Type::Integer.cast(&Value::F64(-1e19)), None);
    assert_eq!(Type::Integer.cast(&Value::F64(f64::INFINITY)), None);
    assert_eq!(Type::Integer.cast(&Value::F64(f64::NAN)), None);
    assert_eq!(
        Type::Integer.cast(&Value::F64(-9.223372036854776e18)),
        Some(Value::I64(i64::MIN))
    );
}

#[test]
fn cast_to_float() {
    assert_eq!(Type::Float.cast(&Value::from("100.0")), Some(Value::F64(100.0)));
    assert_eq!(Type::Float.cast(&Value::I64(2)), Some(Value::F64(2.0)));
    assert_eq!(Type::Float.cast(&Value::Bool(false)), None);
}

#[test]
fn cast_to_boolean() {
    for truthy in ["true", "TRUE", "yes", "1", "t", "Y"] {
        assert_eq!(Type::Boolean.cast(&Value::from(truthy)), Some(Value::Bool(true)));
    }
    for falsy in ["false", "No", "0", "f"] {
        assert_eq!(Type::Boolean.cast(&Value::from(falsy)), Some(Value::Bool(false)));
    }
    assert_eq!(Type::Boolean.cast(&Value::from("maybe")), None);
    assert_eq!(Type::Boolean.cast(&Value::I64(2)), None);
}

#[test]
fn cast_to_datetime() {
    let expected = Some(Value::DateTime(date(2023, 1, 1).at(9, 30, 0, 0)));

    assert_eq!(Type::DateTime.cast(&Value::from("2023-01-01 09:30:00")), expected);
    assert_eq!(Type::DateTime.cast(&Value::from("2023-01-01T09:30:00")), expected);
    assert_eq!(
        Type::DateTime.cast(&Value::Date(date(2023, 1, 1))),
        Some(Value::DateTime(date(2023, 1, 1).at(0, 0, 0, 0)))
    );
    assert_eq!(Type::DateTime.cast(&Value::I64(5)), None);
}

#[test]
fn cast_to_date() {
    assert_eq!(
        Type::Date.cast(&Value::from("2023-05-06")),
        Some(Value::Date(date(2023, 5, 6)))
    );
    assert_eq!(
        Type::Date.cast(&Value::DateTime(date(2023, 5, 6).at(7, 8, 9, 0))),
        Some(Value::Date(date(2023, 5, 6)))
    );
    assert_eq!(Type::Date.cast(&Value::from("05/06/2023")), None);
}

#[test]
fn null_is_every_type() {
    for ty in [Type::Text, Type::Integer, Type::Float, Type::Boolean, Type::DateTime, Type::Date] {
        assert!(ty.is_a(&Value::Null));
        assert_eq!(ty.cast(&Value::Null), Some(Value::Null));
    }
}

#[test]
fn type_names() {
    assert_eq!(Type::from_name("datetime"), Some(Type::DateTime));
    assert_eq!(Type::from_name("STR"), Some(Type::Text));
    assert_eq!(Type::from_name("bool"), Some(Type::Boolean));
    assert_eq!(Type::from_name("decimal"), None);
}
