//! Blog listing for the signed-in user.

use crate::{
    app_lib::{ApiClient, ApiRequest, AppError, CsrfSource, Transport},
    features::blogs::types::{BlogCategory, BlogSummary, BlogsResponse},
};
use tracing::debug;

pub const BLOGS_PATH: &str = "/api/v1/user/blogs";
const UNKNOWN_ERROR: &str = "Unknown error";
const FETCH_FAILED: &str = "An error occurred while fetching blogs";

pub fn blogs_path(category: BlogCategory) -> String {
    format!("{BLOGS_PATH}?category={}", category.as_str())
}

/// Fetches the blogs in a category. A missing or null `blogs` field is an
/// empty list.
pub async fn fetch_blogs<T: Transport, C: CsrfSource>(
    api: &ApiClient<T, C>,
    category: BlogCategory,
) -> Result<Vec<BlogSummary>, AppError> {
    let response = api.execute(&ApiRequest::get(blogs_path(category))).await?;
    if !response.ok() {
        let message = response.error_message().unwrap_or_else(|| UNKNOWN_ERROR.to_string());
        return Err(AppError::Http {
            status: response.status,
            message,
        });
    }

    let blogs = response.json::<BlogsResponse>()?.blogs.unwrap_or_default();
    debug!(category = category.as_str(), count = blogs.len(), "blogs loaded");
    Ok(blogs)
}

/// Toast text for a failed listing: the server message when it answered,
/// a generic line otherwise.
pub fn toast_message(err: &AppError) -> String {
    match err {
        AppError::Http { message, .. } => message.clone(),
        _ => FETCH_FAILED.to_string(),
    }
}
