use std::sync::Arc;

use resto_core::ServiceError;
use resto_sql::{Row, SQLStore, Value};

use crate::model::Restaurant;

/// SQL schema for the restaurants table.
///
/// `id` is assigned by SQLite; the service never supplies it.
const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS restaurants (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    name        TEXT NOT NULL,
    description TEXT NOT NULL,
    created_at  TEXT NOT NULL,
    updated_at  TEXT
)
";

/// Persistent storage for restaurants, backed by SQLStore (SQLite).
pub struct RestaurantStore {
    db: Arc<dyn SQLStore>,
}

impl RestaurantStore {
    /// Create a new RestaurantStore and initialise the schema.
    pub fn new(db: Arc<dyn SQLStore>) -> Result<Self, ServiceError> {
        db.exec(SCHEMA, &[])
            .map_err(|e| ServiceError::Storage(format!("restaurant schema init: {e}")))?;
        Ok(Self { db })
    }

    /// Insert a new row and return the generated id.
    pub fn insert(
        &self,
        name: &str,
        description: &str,
        created_at: &str,
    ) -> Result<i64, ServiceError> {
        self.db
            .insert(
                "INSERT INTO restaurants (name, description, created_at) \
                 VALUES (?1, ?2, ?3)",
                &[
                    Value::Text(name.to_string()),
                    Value::Text(description.to_string()),
                    Value::Text(created_at.to_string()),
                ],
            )
            .map_err(|e| ServiceError::Storage(e.to_string()))
    }

    /// Get a restaurant by id.
    pub fn get(&self, id: i64) -> Result<Restaurant, ServiceError> {
        let rows = self
            .db
            .query(
                "SELECT id, name, description, created_at, updated_at \
                 FROM restaurants WHERE id = ?1",
                &[Value::Integer(id)],
            )
            .map_err(|e| ServiceError::Storage(e.to_string()))?;

        let row = rows
            .first()
            .ok_or_else(|| ServiceError::NotFound(format!("restaurant {id}")))?;

        row_to_restaurant(row)
    }

    /// Update a restaurant (full replacement of the mutable columns).
    pub fn update(&self, restaurant: &Restaurant) -> Result<(), ServiceError> {
        let affected = self
            .db
            .exec(
                "UPDATE restaurants SET name = ?1, description = ?2, updated_at = ?3 \
                 WHERE id = ?4",
                &[
                    Value::Text(restaurant.name.clone()),
                    Value::Text(restaurant.description.clone()),
                    match &restaurant.updated_at {
                        Some(s) => Value::Text(s.clone()),
                        None => Value::Null,
                    },
                    Value::Integer(restaurant.id),
                ],
            )
            .map_err(|e| ServiceError::Storage(e.to_string()))?;

        if affected == 0 {
            return Err(ServiceError::NotFound(format!("restaurant {}", restaurant.id)));
        }
        Ok(())
    }

    /// Delete a restaurant by id.
    pub fn delete(&self, id: i64) -> Result<(), ServiceError> {
        let affected = self
            .db
            .exec(
                "DELETE FROM restaurants WHERE id = ?1",
                &[Value::Integer(id)],
            )
            .map_err(|e| ServiceError::Storage(e.to_string()))?;

        if affected == 0 {
            return Err(ServiceError::NotFound(format!("restaurant {id}")));
        }
        Ok(())
    }
}

/// Map a SQL row onto the entity.
fn row_to_restaurant(row: &Row) -> Result<Restaurant, ServiceError> {
    Ok(Restaurant {
        id: row
            .get_i64("id")
            .ok_or_else(|| ServiceError::Internal("missing id column".into()))?,
        name: row
            .get_str("name")
            .ok_or_else(|| ServiceError::Internal("missing name column".into()))?
            .to_string(),
        description: row
            .get_str("description")
            .ok_or_else(|| ServiceError::Internal("missing description column".into()))?
            .to_string(),
        created_at: row
            .get_str("created_at")
            .ok_or_else(|| ServiceError::Internal("missing created_at column".into()))?
            .to_string(),
        updated_at: row.get_str("updated_at").map(|s| s.to_string()),
    })
}
