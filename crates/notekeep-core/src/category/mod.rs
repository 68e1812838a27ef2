//! Category domain module.

mod api;
mod model;

pub use api::CategoriesApi;
pub use model::{CATEGORY_COLORS, Category, CategoryDraft};
