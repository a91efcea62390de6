use serde::{Deserialize, Serialize};

/// Restaurant — a dining establishment listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    /// Primary key, assigned by the storage layer. Never taken from client input.
    pub id: i64,

    pub name: String,

    pub description: String,

    /// Set once at creation, server-side.
    pub created_at: String,

    /// Stamped server-side on every successful edit. Absent until the first update.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Client-supplied fields for creating a restaurant.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRestaurant {
    pub name: String,
    pub description: String,
}

/// Partial update body. Absent fields leave the stored value unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRestaurant {
    pub name: Option<String>,
    pub description: Option<String>,
}
