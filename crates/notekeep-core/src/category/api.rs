//! Category endpoints port.

use super::model::{Category, CategoryDraft};
use crate::error::Result;
use async_trait::async_trait;

/// Remote access to the user's categories.
///
/// Every call is authorized with the bearer `token` of the current session.
#[async_trait]
pub trait CategoriesApi: Send + Sync {
    /// Calls `GET /categories`.
    async fn list_categories(&self, token: &str) -> Result<Vec<Category>>;

    /// Calls `POST /categories` and returns the created category.
    async fn create_category(&self, token: &str, draft: &CategoryDraft) -> Result<Category>;
}
