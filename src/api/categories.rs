//! Category Requests
//!
//! CRUD calls against the admin category resource. Every call carries the
//! credential in the `auth-token` header; callers hold the token and never
//! invoke these without one.

use serde::{Deserialize, Serialize};

use super::{decode, ApiClient, ApiError, DataEnvelope, MessageEnvelope, AUTH_HEADER};
use crate::models::Category;

const CATEGORIES_PATH: &str = "/admin/food-menu/categories";

// ========================
// Request / Response Bodies
// ========================

#[derive(Serialize)]
struct CreateCategoryBody<'a> {
    name: &'a str,
}

#[derive(Serialize)]
struct UpdateCategoryBody<'a> {
    name: &'a str,
    id: &'a str,
}

#[derive(Debug, Deserialize)]
struct CreatedEnvelope {
    message: String,
    data: Category,
}

/// Server-confirmed outcome of a create call.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryCreated {
    pub message: String,
    pub category: Category,
}

// ========================
// Requests
// ========================

pub async fn list_categories(api: &ApiClient, token: &str) -> Result<Vec<Category>, ApiError> {
    let res = api
        .http
        .get(api.url(CATEGORIES_PATH))
        .header(AUTH_HEADER, token)
        .send()
        .await?;
    let body: DataEnvelope<Vec<Category>> = decode(res).await?;
    Ok(body.data)
}

/// Create a category. The name goes out as typed; the server owns
/// validation and its rejection message is what the user sees.
pub async fn create_category(
    api: &ApiClient,
    token: &str,
    name: &str,
) -> Result<CategoryCreated, ApiError> {
    let res = api
        .http
        .post(api.url(CATEGORIES_PATH))
        .header(AUTH_HEADER, token)
        .json(&CreateCategoryBody { name })
        .send()
        .await?;
    let body: CreatedEnvelope = decode(res).await?;
    Ok(CategoryCreated {
        message: body.message,
        category: body.data,
    })
}

pub async fn update_category(
    api: &ApiClient,
    token: &str,
    id: &str,
    name: &str,
) -> Result<String, ApiError> {
    let res = api
        .http
        .put(api.url(&format!("{CATEGORIES_PATH}/{id}")))
        .header(AUTH_HEADER, token)
        .json(&UpdateCategoryBody { name, id })
        .send()
        .await?;
    let body: MessageEnvelope = decode(res).await?;
    Ok(body.message)
}

pub async fn delete_category(api: &ApiClient, token: &str, id: &str) -> Result<String, ApiError> {
    let res = api
        .http
        .delete(api.url(&format!("{CATEGORIES_PATH}/{id}")))
        .header(AUTH_HEADER, token)
        .send()
        .await?;
    let body: MessageEnvelope = decode(res).await?;
    Ok(body.message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn category_wire_format_uses_mongo_field_names() {
        let category: Category =
            serde_json::from_value(json!({"_id": "c1", "name": "Drinks", "foodItemsCount": 3}))
                .unwrap();
        assert_eq!(category.id, "c1");
        assert_eq!(category.name, "Drinks");
        assert_eq!(category.item_count, 3);
    }

    #[test]
    fn create_response_omits_the_item_count() {
        // POST only returns { _id, name }; the count defaults to zero.
        let body: CreatedEnvelope = serde_json::from_value(json!({
            "message": "Category added successfully",
            "data": {"_id": "c9", "name": "Drinks"}
        }))
        .unwrap();
        assert_eq!(body.message, "Category added successfully");
        assert_eq!(body.data.item_count, 0);
    }

    #[test]
    fn update_body_carries_both_name_and_id() {
        let body = serde_json::to_value(UpdateCategoryBody {
            name: "Beverages",
            id: "c1",
        })
        .unwrap();
        assert_eq!(body, json!({"name": "Beverages", "id": "c1"}));
    }
}
