use sqlx::error::BoxDynError;
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::{Arguments, FromRow};

use crate::model::product::Product;
use crate::model::sell::Sell;
use crate::model::user::User;

/// Row-mapping capability consumed by [`PgRepository`](super::PgRepository).
///
/// An implementation names its table and columns and knows how to bind its
/// data fields in `DATA_COLUMNS` order. That is all the generic repository
/// needs to run the full CRUD surface for the type.
pub trait Table: for<'r> FromRow<'r, PgRow> + Send + Sync + Unpin + 'static {
    const TABLE: &'static str;
    /// All columns, id first, in row scan order.
    const COLUMNS: &'static [&'static str];
    /// Caller-supplied columns, excluding id and timestamps.
    const DATA_COLUMNS: &'static [&'static str];
    const HAS_CREATED_AT: bool;

    fn id(&self) -> i32;
    /// Push the data fields onto `args` in `DATA_COLUMNS` order.
    fn bind_data(&self, args: &mut PgArguments) -> Result<(), BoxDynError>;
}

impl Table for User {
    const TABLE: &'static str = "users";
    const COLUMNS: &'static [&'static str] =
        &["id", "name", "login", "password", "is_admin", "updated_at"];
    const DATA_COLUMNS: &'static [&'static str] = &["name", "login", "password", "is_admin"];
    const HAS_CREATED_AT: bool = false;

    fn id(&self) -> i32 {
        self.id
    }

    fn bind_data(&self, args: &mut PgArguments) -> Result<(), BoxDynError> {
        args.add(self.name.clone())?;
        args.add(self.login.clone())?;
        args.add(self.password.clone())?;
        args.add(self.is_admin)?;
        Ok(())
    }
}

impl Table for Product {
    const TABLE: &'static str = "products";
    const COLUMNS: &'static [&'static str] = &["id", "name", "price", "created_at", "updated_at"];
    const DATA_COLUMNS: &'static [&'static str] = &["name", "price"];
    const HAS_CREATED_AT: bool = true;

    fn id(&self) -> i32 {
        self.id
    }

    fn bind_data(&self, args: &mut PgArguments) -> Result<(), BoxDynError> {
        args.add(self.name.clone())?;
        args.add(self.price)?;
        Ok(())
    }
}

impl Table for Sell {
    const TABLE: &'static str = "bargains";
    const COLUMNS: &'static [&'static str] = &["id", "user_id", "product_id", "updated_at"];
    const DATA_COLUMNS: &'static [&'static str] = &["user_id", "product_id"];
    const HAS_CREATED_AT: bool = false;

    fn id(&self) -> i32 {
        self.id
    }

    fn bind_data(&self, args: &mut PgArguments) -> Result<(), BoxDynError> {
        args.add(self.user_id)?;
        args.add(self.product_id)?;
        Ok(())
    }
}

fn columns<T: Table>() -> String {
    T::COLUMNS.join(", ")
}

pub(crate) fn insert_sql<T: Table>() -> String {
    let placeholders = (1..=T::DATA_COLUMNS.len())
        .map(|n| format!("${n}"))
        .collect::<Vec<_>>()
        .join(", ");

    let timestamp_columns = if T::HAS_CREATED_AT {
        "created_at, updated_at"
    } else {
        "updated_at"
    };
    let timestamp_values = if T::HAS_CREATED_AT {
        "now(), now()"
    } else {
        "now()"
    };

    format!(
        "INSERT INTO {} ({}, {timestamp_columns}) VALUES ({placeholders}, {timestamp_values}) RETURNING {}",
        T::TABLE,
        T::DATA_COLUMNS.join(", "),
        columns::<T>(),
    )
}

pub(crate) fn update_sql<T: Table>() -> String {
    let assignments = T::DATA_COLUMNS
        .iter()
        .enumerate()
        .map(|(i, column)| format!("{column} = ${}", i + 2))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "UPDATE {} SET {assignments}, updated_at = now() WHERE id = $1 RETURNING {}",
        T::TABLE,
        columns::<T>(),
    )
}

pub(crate) fn select_all_sql<T: Table>() -> String {
    format!("SELECT {} FROM {} ORDER BY id", columns::<T>(), T::TABLE)
}

pub(crate) fn select_by_id_sql<T: Table>() -> String {
    format!(
        "SELECT {} FROM {} WHERE id = $1",
        columns::<T>(),
        T::TABLE
    )
}

pub(crate) fn select_page_sql<T: Table>() -> String {
    format!(
        "SELECT {} FROM {} ORDER BY id LIMIT $1 OFFSET $2",
        columns::<T>(),
        T::TABLE
    )
}

pub(crate) fn select_since_sql<T: Table>() -> String {
    format!(
        "SELECT {} FROM {} WHERE updated_at >= now() - $1::interval ORDER BY id",
        columns::<T>(),
        T::TABLE
    )
}

pub(crate) fn count_sql<T: Table>() -> String {
    format!("SELECT COUNT(*) FROM {}", T::TABLE)
}

pub(crate) fn delete_sql<T: Table>() -> String {
    format!("DELETE FROM {} WHERE id = $1", T::TABLE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_insert_skips_created_at() {
        assert_eq!(
            insert_sql::<User>(),
            "INSERT INTO users (name, login, password, is_admin, updated_at) \
             VALUES ($1, $2, $3, $4, now()) \
             RETURNING id, name, login, password, is_admin, updated_at"
        );
    }

    #[test]
    fn product_insert_stamps_both_timestamps() {
        assert_eq!(
            insert_sql::<Product>(),
            "INSERT INTO products (name, price, created_at, updated_at) \
             VALUES ($1, $2, now(), now()) \
             RETURNING id, name, price, created_at, updated_at"
        );
    }

    #[test]
    fn update_binds_id_first() {
        assert_eq!(
            update_sql::<Sell>(),
            "UPDATE bargains SET user_id = $2, product_id = $3, updated_at = now() \
             WHERE id = $1 \
             RETURNING id, user_id, product_id, updated_at"
        );
    }

    #[test]
    fn page_query_orders_by_id() {
        assert_eq!(
            select_page_sql::<User>(),
            "SELECT id, name, login, password, is_admin, updated_at FROM users \
             ORDER BY id LIMIT $1 OFFSET $2"
        );
    }

    #[test]
    fn interval_query_casts_bound_parameter() {
        assert_eq!(
            select_since_sql::<Sell>(),
            "SELECT id, user_id, product_id, updated_at FROM bargains \
             WHERE updated_at >= now() - $1::interval ORDER BY id"
        );
    }

    #[test]
    fn count_and_delete_target_the_table() {
        assert_eq!(count_sql::<Product>(), "SELECT COUNT(*) FROM products");
        assert_eq!(delete_sql::<Product>(), "DELETE FROM products WHERE id = $1");
    }
}
