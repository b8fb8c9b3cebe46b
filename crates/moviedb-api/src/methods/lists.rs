//! `list/*` endpoints (v3 user lists).

use super::{require_id, session_params};
use crate::client::TmdbClient;
use crate::error::{MovieDbError, Result};
use crate::model::{ListCreated, ListInfo, ListItemStatus, StatusCode};
use crate::params::{Param, QueryParams};
use crate::transport::HttpTransport;
use crate::url::{ApiUrl, Method, SubMethod};

fn list(list_id: &str) -> Result<ApiUrl> {
    Ok(ApiUrl::new(Method::List).id(require_id("list_id", list_id)?))
}

impl<T: HttpTransport> TmdbClient<T> {
    /// Fetches a list with its items.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a blank `list_id`, or an error if the
    /// request fails or the list does not exist.
    pub async fn list_info(&self, list_id: &str, language: Option<&str>) -> Result<ListInfo> {
        let params = QueryParams::new().with_opt(Param::Language, language);
        self.get_resource(list(list_id)?, params).await
    }

    /// Checks whether a movie is on a list.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list_item_status(&self, list_id: &str, movie_id: u64) -> Result<ListItemStatus> {
        let params = QueryParams::new().with(Param::MovieId, movie_id);
        self.get_object(list(list_id)?.sub(SubMethod::ItemStatus), params)
            .await
    }

    /// Creates a list owned by the session user.
    ///
    /// # Errors
    ///
    /// Returns [`MovieDbError::Validation`] without any request when `name`
    /// is blank, or an error if the request fails.
    pub async fn create_list(
        &self,
        session_id: &str,
        name: &str,
        description: &str,
        language: Option<&str>,
    ) -> Result<ListCreated> {
        if name.trim().is_empty() {
            return Err(MovieDbError::validation("list name must not be blank"));
        }
        let mut body = serde_json::json!({
            "name": name,
            "description": description,
        });
        if let (Some(language), Some(object)) = (language, body.as_object_mut()) {
            object.insert(String::from("language"), serde_json::Value::from(language));
        }
        self.post_object(ApiUrl::new(Method::List), session_params(session_id)?, &body)
            .await
    }

    /// Deletes a list.
    ///
    /// # Errors
    ///
    /// Returns an error if the session is blank or the request fails.
    pub async fn delete_list(&self, session_id: &str, list_id: &str) -> Result<StatusCode> {
        self.delete_object(list(list_id)?, session_params(session_id)?)
            .await
    }

    /// Adds a movie to a list.
    ///
    /// # Errors
    ///
    /// Returns an error if the session is blank or the request fails.
    pub async fn add_list_item(
        &self,
        session_id: &str,
        list_id: &str,
        media_id: u64,
    ) -> Result<StatusCode> {
        self.post_object(
            list(list_id)?.sub(SubMethod::AddItem),
            session_params(session_id)?,
            &serde_json::json!({ "media_id": media_id }),
        )
        .await
    }

    /// Removes a movie from a list.
    ///
    /// # Errors
    ///
    /// Returns an error if the session is blank or the request fails.
    pub async fn remove_list_item(
        &self,
        session_id: &str,
        list_id: &str,
        media_id: u64,
    ) -> Result<StatusCode> {
        self.post_object(
            list(list_id)?.sub(SubMethod::RemoveItem),
            session_params(session_id)?,
            &serde_json::json!({ "media_id": media_id }),
        )
        .await
    }

    /// Removes every item from a list.
    ///
    /// # Errors
    ///
    /// Returns an error if the session is blank or the request fails.
    pub async fn clear_list(&self, session_id: &str, list_id: &str) -> Result<StatusCode> {
        let params = session_params(session_id)?.with(Param::Confirm, true);
        self.post_object(
            list(list_id)?.sub(SubMethod::Clear),
            params,
            &serde_json::json!({}),
        )
        .await
    }
}
