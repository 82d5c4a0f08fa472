//! Remote Item Service
//!
//! Frontend bindings to the REST post service, behind `TodoApi` so the action
//! handlers can run against an in-memory fake.

mod item;

use async_trait::async_trait;

use crate::error::ApiError;
use crate::models::{Item, ItemDraft, ItemId};

pub use item::RestClient;

/// One request per call: no retry, no timeout beyond the transport's own
#[async_trait(?Send)]
pub trait TodoApi {
    /// GET `/`
    async fn list(&self) -> Result<Vec<Item>, ApiError>;

    /// POST `/`, returns the id assigned by the service
    async fn create(&self, draft: &ItemDraft) -> Result<ItemId, ApiError>;

    /// PUT `/{id}`. The response is not trusted to reflect stored state.
    async fn update(&self, item: &Item) -> Result<(), ApiError>;

    /// DELETE `/{id}`
    async fn delete(&self, id: ItemId) -> Result<(), ApiError>;
}
