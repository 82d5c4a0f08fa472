//! Item Commands
//!
//! HTTP calls for the item endpoints. On wasm32 reqwest goes through `fetch`.

use async_trait::async_trait;
use reqwest::{RequestBuilder, Response};
use serde::{Deserialize, Serialize};

use super::TodoApi;
use crate::error::ApiError;
use crate::models::{Item, ItemDraft, ItemId, OWNER_ID};

// ========================
// Argument Structs
// ========================

#[derive(Debug, Serialize)]
struct CreateItemArgs<'a> {
    title: &'a str,
    body: &'a str,
    #[serde(rename = "userId")]
    owner_id: u32,
}

#[derive(Debug, Serialize)]
struct UpdateItemArgs<'a> {
    id: ItemId,
    title: &'a str,
    body: &'a str,
    #[serde(rename = "userId")]
    owner_id: u32,
}

#[derive(Debug, Deserialize)]
struct CreatedItem {
    id: ItemId,
}

impl<'a> CreateItemArgs<'a> {
    fn new(draft: &'a ItemDraft) -> Self {
        Self {
            title: &draft.title,
            body: draft.body.as_deref().unwrap_or(""),
            owner_id: OWNER_ID,
        }
    }
}

impl<'a> UpdateItemArgs<'a> {
    fn new(item: &'a Item) -> Self {
        Self {
            id: item.id,
            title: &item.title,
            body: item.body.as_deref().unwrap_or(""),
            owner_id: item.owner_id,
        }
    }
}

// ========================
// Client
// ========================

/// Client for the post service rooted at `base_url`
#[derive(Clone, Debug)]
pub struct RestClient {
    http: reqwest::Client,
    base_url: String,
}

impl RestClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn collection_url(&self) -> &str {
        &self.base_url
    }

    fn item_url(&self, id: ItemId) -> String {
        format!("{}/{}", self.base_url, id)
    }
}

fn status_message(status: reqwest::StatusCode) -> String {
    format!("HTTP error! Status: {}", status.as_u16())
}

/// Send and reject non-2xx; both failure kinds map through `wrap`
async fn send(request: RequestBuilder, wrap: fn(String) -> ApiError) -> Result<Response, ApiError> {
    let response = request.send().await.map_err(|e| wrap(e.to_string()))?;
    if !response.status().is_success() {
        return Err(wrap(status_message(response.status())));
    }
    Ok(response)
}

#[async_trait(?Send)]
impl TodoApi for RestClient {
    async fn list(&self) -> Result<Vec<Item>, ApiError> {
        let response = send(self.http.get(self.collection_url()), ApiError::Fetch).await?;
        response.json().await.map_err(|e| ApiError::Fetch(e.to_string()))
    }

    async fn create(&self, draft: &ItemDraft) -> Result<ItemId, ApiError> {
        let request = self.http.post(self.collection_url()).json(&CreateItemArgs::new(draft));
        let response = send(request, ApiError::Create).await?;
        let created: CreatedItem = response.json().await.map_err(|e| ApiError::Create(e.to_string()))?;
        Ok(created.id)
    }

    async fn update(&self, item: &Item) -> Result<(), ApiError> {
        let request = self.http.put(self.item_url(item.id)).json(&UpdateItemArgs::new(item));
        let response = send(request, ApiError::Update).await?;
        // Echo of what we sent; read only for the log.
        if let Ok(echo) = response.text().await {
            log::debug!("update {} echoed: {}", item.id, echo);
        }
        Ok(())
    }

    async fn delete(&self, id: ItemId) -> Result<(), ApiError> {
        send(self.http.delete(self.item_url(id)), ApiError::Delete).await?;
        Ok(())
    }
}
