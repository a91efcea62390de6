use std::sync::Arc;

use resto_core::{ServiceError, now_rfc3339};
use resto_sql::SQLStore;

use crate::model::{CreateRestaurant, Restaurant, UpdateRestaurant};
use crate::store::RestaurantStore;

/// Restaurant service — owns the store and provides the resource operations.
pub struct RestaurantService {
    store: RestaurantStore,
}

impl RestaurantService {
    pub fn new(db: Arc<dyn SQLStore>) -> Result<Self, ServiceError> {
        let store = RestaurantStore::new(db)?;
        Ok(Self { store })
    }

    /// Create a restaurant. The store assigns the id; `created_at` is
    /// stamped here and `updated_at` stays unset until the first edit.
    pub fn create_restaurant(&self, input: CreateRestaurant) -> Result<Restaurant, ServiceError> {
        let now = now_rfc3339();
        let id = self.store.insert(&input.name, &input.description, &now)?;

        Ok(Restaurant {
            id,
            name: input.name,
            description: input.description,
            created_at: now,
            updated_at: None,
        })
    }

    /// Get a restaurant by id.
    pub fn get_restaurant(&self, id: i64) -> Result<Restaurant, ServiceError> {
        self.store.get(id)
    }

    /// Update a restaurant. Only fields present in the body are applied;
    /// `updated_at` is stamped on every successful edit.
    pub fn update_restaurant(
        &self,
        id: i64,
        input: UpdateRestaurant,
    ) -> Result<Restaurant, ServiceError> {
        let mut current = self.store.get(id)?;

        if let Some(name) = input.name {
            current.name = name;
        }
        if let Some(description) = input.description {
            current.description = description;
        }
        current.updated_at = Some(now_rfc3339());

        self.store.update(&current)?;
        Ok(current)
    }

    /// Delete a restaurant by id.
    pub fn delete_restaurant(&self, id: i64) -> Result<(), ServiceError> {
        self.store.delete(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resto_sql::SqliteStore;

    fn test_service() -> RestaurantService {
        let db = Arc::new(SqliteStore::open_in_memory().unwrap());
        RestaurantService::new(db).unwrap()
    }

    #[test]
    fn test_restaurant_crud() {
        let svc = test_service();

        // Create
        let created = svc
            .create_restaurant(CreateRestaurant {
                name: "Chez Nous".to_string(),
                description: "Bistro on the corner".to_string(),
            })
            .unwrap();
        assert!(created.id > 0);
        assert_eq!(created.name, "Chez Nous");
        assert!(!created.created_at.is_empty());
        assert_eq!(created.updated_at, None);

        // Get
        let fetched = svc.get_restaurant(created.id).unwrap();
        assert_eq!(fetched, created);

        // Update
        let updated = svc
            .update_restaurant(
                created.id,
                UpdateRestaurant {
                    name: Some("Chez Vous".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.name, "Chez Vous");
        assert_eq!(updated.description, "Bistro on the corner");
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at.is_some());

        // Delete
        svc.delete_restaurant(created.id).unwrap();
        assert!(svc.get_restaurant(created.id).is_err());
    }

    #[test]
    fn update_preserves_absent_fields() {
        let svc = test_service();
        let created = svc
            .create_restaurant(CreateRestaurant {
                name: "A".to_string(),
                description: "B".to_string(),
            })
            .unwrap();

        svc.update_restaurant(
            created.id,
            UpdateRestaurant {
                description: Some("C".to_string()),
                ..Default::default()
            },
        )
        .unwrap();

        let fetched = svc.get_restaurant(created.id).unwrap();
        assert_eq!(fetched.name, "A");
        assert_eq!(fetched.description, "C");
    }

    #[test]
    fn update_missing_changes_nothing() {
        let svc = test_service();
        let created = svc
            .create_restaurant(CreateRestaurant {
                name: "A".to_string(),
                description: "B".to_string(),
            })
            .unwrap();

        let err = svc.update_restaurant(
            999_999,
            UpdateRestaurant {
                name: Some("C".to_string()),
                ..Default::default()
            },
        );
        assert!(matches!(err, Err(ServiceError::NotFound(_))));

        // The existing record is untouched.
        let fetched = svc.get_restaurant(created.id).unwrap();
        assert_eq!(fetched.name, "A");
        assert_eq!(fetched.updated_at, None);
    }

    #[test]
    fn delete_is_terminal_for_the_id() {
        let svc = test_service();
        let created = svc
            .create_restaurant(CreateRestaurant {
                name: "A".to_string(),
                description: "B".to_string(),
            })
            .unwrap();

        svc.delete_restaurant(created.id).unwrap();
        assert!(matches!(
            svc.delete_restaurant(created.id),
            Err(ServiceError::NotFound(_))
        ));
        assert!(matches!(
            svc.get_restaurant(created.id),
            Err(ServiceError::NotFound(_))
        ));
    }

    #[test]
    fn update_stamps_updated_at() {
        let svc = test_service();
        let created = svc
            .create_restaurant(CreateRestaurant {
                name: "A".to_string(),
                description: "B".to_string(),
            })
            .unwrap();

        std::thread::sleep(std::time::Duration::from_millis(5));

        let updated = svc
            .update_restaurant(
                created.id,
                UpdateRestaurant {
                    name: Some("C".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();

        let stamped = updated.updated_at.expect("updated_at set after edit");
        let created_at = chrono::DateTime::parse_from_rfc3339(&created.created_at).unwrap();
        let updated_at = chrono::DateTime::parse_from_rfc3339(&stamped).unwrap();
        assert!(updated_at > created_at);
    }
}
