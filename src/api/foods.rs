//! Food Catalog Requests
//!
//! Read-only access to the public food item catalog. No credential needed.

use super::{decode, ApiClient, ApiError, DataEnvelope};
use crate::models::FoodItem;

const FOOD_MENU_PATH: &str = "/food-menu";

pub async fn fetch_food_items(api: &ApiClient) -> Result<Vec<FoodItem>, ApiError> {
    let res = api.http.get(api.url(FOOD_MENU_PATH)).send().await?;
    let body: DataEnvelope<Vec<FoodItem>> = decode(res).await?;
    Ok(body.data)
}
