use serde::Serialize;
use sqlx::{FromRow, SqlitePool};

/// Product record in the database. Every query below is scoped by `owner_id`,
/// so a record owned by someone else behaves exactly like a missing one.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub quantity: i64,
    pub price: f64,
    #[serde(skip_serializing)]
    pub owner_id: i64,
}

impl Product {
    /// All products owned by `owner_id`, name-ascending.
    pub async fn list_by_owner(db: &SqlitePool, owner_id: i64) -> anyhow::Result<Vec<Product>> {
        let rows = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, quantity, price, owner_id
            FROM products
            WHERE owner_id = ?
            ORDER BY name ASC
            "#,
        )
        .bind(owner_id)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    pub async fn create(
        db: &SqlitePool,
        owner_id: i64,
        name: &str,
        quantity: i64,
        price: f64,
    ) -> anyhow::Result<Product> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (name, quantity, price, owner_id)
            VALUES (?, ?, ?, ?)
            RETURNING id, name, quantity, price, owner_id
            "#,
        )
        .bind(name)
        .bind(quantity)
        .bind(price)
        .bind(owner_id)
        .fetch_one(db)
        .await?;
        Ok(product)
    }

    pub async fn get(db: &SqlitePool, owner_id: i64, id: i64) -> anyhow::Result<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, quantity, price, owner_id
            FROM products
            WHERE id = ? AND owner_id = ?
            "#,
        )
        .bind(id)
        .bind(owner_id)
        .fetch_optional(db)
        .await?;
        Ok(product)
    }

    /// Single-statement update; None means the record is absent or not owned.
    pub async fn update(
        db: &SqlitePool,
        owner_id: i64,
        id: i64,
        name: &str,
        quantity: i64,
        price: f64,
    ) -> anyhow::Result<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            UPDATE products
            SET name = ?, quantity = ?, price = ?
            WHERE id = ? AND owner_id = ?
            RETURNING id, name, quantity, price, owner_id
            "#,
        )
        .bind(name)
        .bind(quantity)
        .bind(price)
        .bind(id)
        .bind(owner_id)
        .fetch_optional(db)
        .await?;
        Ok(product)
    }

    /// Returns false when nothing was deleted (absent or not owned).
    pub async fn delete(db: &SqlitePool, owner_id: i64, id: i64) -> anyhow::Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM products
            WHERE id = ? AND owner_id = ?
            "#,
        )
        .bind(id)
        .bind(owner_id)
        .execute(db)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
