use super::{Model, Schema, CREATED_COLUMN, ID_COLUMN};
use crate::{Error, Result};

use std::collections::HashSet;

impl Model {
    pub(super) fn verify(&self) -> Result<()> {
        if self.table_name().is_empty() {
            return Err(Error::invalid_schema(format!(
                "type name `{}` does not produce a table name",
                self.name()
            )));
        }

        self.verify_field_order()?;
        self.verify_unique_names()?;
        self.verify_sql_flags()?;
        self.verify_defaults()?;
        Ok(())
    }

    /// Required fields must all be declared before the first optional field.
    fn verify_field_order(&self) -> Result<()> {
        let mut optional = None;

        for field in self.fields() {
            match (field.is_required(), optional) {
                (false, None) => optional = Some(&field.name),
                (true, Some(optional)) => {
                    return Err(Error::invalid_schema(format!(
                        "{}: required field `{}` follows optional field `{}`",
                        self.name(),
                        field.name,
                        optional
                    )))
                }
                _ => {}
            }
        }

        Ok(())
    }

    fn verify_unique_names(&self) -> Result<()> {
        let mut names = HashSet::new();
        let mut columns = HashSet::new();

        for field in self.fields() {
            if field.name.is_empty() {
                return Err(Error::invalid_schema(format!(
                    "{}: field names must not be empty",
                    self.name()
                )));
            }

            if !names.insert(field.name.as_str()) {
                return Err(Error::invalid_schema(format!(
                    "{}: duplicate field `{}`",
                    self.name(),
                    field.name
                )));
            }

            if field.ignore {
                continue;
            }

            // MySQL column names are case-insensitive
            let column = field.column().to_lowercase();

            if column == ID_COLUMN || column == CREATED_COLUMN {
                return Err(Error::invalid_schema(format!(
                    "{}: field `{}` uses the reserved column name `{}`",
                    self.name(),
                    field.name,
                    field.column()
                )));
            }

            if !columns.insert(column) {
                return Err(Error::invalid_schema(format!(
                    "{}: duplicate column `{}`",
                    self.name(),
                    field.column()
                )));
            }
        }

        Ok(())
    }

    fn verify_sql_flags(&self) -> Result<()> {
        for field in self.fields().iter().filter(|field| field.ignore) {
            if field.key {
                return Err(Error::invalid_schema(format!(
                    "{}: key field `{}` cannot be ignored",
                    self.name(),
                    field.name
                )));
            }

            if field.foreign_key.is_some() {
                return Err(Error::invalid_schema(format!(
                    "{}: foreign key field `{}` cannot be ignored",
                    self.name(),
                    field.name
                )));
            }
        }

        Ok(())
    }

    /// Defaults are stored without coercion, so they must already have the
    /// field's type. Null is accepted for every type.
    fn verify_defaults(&self) -> Result<()> {
        for field in self.fields() {
            let Some(default) = &field.default else {
                continue;
            };

            if !field.ty.is_a(default) {
                return Err(Error::invalid_schema(format!(
                    "{}: default {} of field `{}` is not a {:?}",
                    self.name(),
                    default,
                    field.name,
                    field.ty
                )));
            }
        }

        Ok(())
    }
}

impl Schema {
    /// Every foreign key must name a registered table and one of its columns.
    pub(super) fn verify(&self) -> Result<()> {
        for model in self.models() {
            for field in model.sql_fields() {
                let Some(fk) = &field.foreign_key else {
                    continue;
                };

                let Some(target) = self.model(&fk.table) else {
                    return Err(Error::invalid_schema(format!(
                        "{}: foreign key `{}` references unknown table `{}`",
                        model.name(),
                        field.name,
                        fk.table
                    )));
                };

                if fk.column != ID_COLUMN && target.field_by_column(&fk.column).is_none() {
                    return Err(Error::invalid_schema(format!(
                        "{}: foreign key `{}` references unknown column `{}.{}`",
                        model.name(),
                        field.name,
                        fk.table,
                        fk.column
                    )));
                }
            }
        }

        Ok(())
    }
}
