//! Shared helpers for router-level tests.
#![allow(dead_code)]

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Method, Request, Response},
    Router,
};
use inventory_api::{
    build_router,
    models::{CreateItemInput, Item, ItemError, UpdateItemInput},
    services::{InMemoryItemService, ItemService},
    AppState, Config,
};
use tower::ServiceExt;

type UpdateFn = dyn Fn(i64, UpdateItemInput) -> Result<Item, ItemError> + Send + Sync;

/// Item service whose update behavior is supplied per test as a closure.
///
/// The other operations answer from an in-memory store, or with `failure`
/// when one is set. Every operation counts as a call.
pub struct StubItemService {
    update_fn: Box<UpdateFn>,
    store: InMemoryItemService,
    failure: Option<ItemError>,
    calls: AtomicUsize,
    last_call: std::sync::Mutex<Option<(i64, UpdateItemInput)>>,
}

impl StubItemService {
    pub fn new<F>(update_fn: F) -> Arc<Self>
    where
        F: Fn(i64, UpdateItemInput) -> Result<Item, ItemError> + Send + Sync + 'static,
    {
        Arc::new(Self::build(Box::new(update_fn), InMemoryItemService::new(), None))
    }

    fn build(
        update_fn: Box<UpdateFn>,
        store: InMemoryItemService,
        failure: Option<ItemError>,
    ) -> Self {
        Self {
            update_fn,
            store,
            failure,
            calls: AtomicUsize::new(0),
            last_call: std::sync::Mutex::new(None),
        }
    }

    /// Echoing stub whose read, create and delete operations see `items`
    pub fn seeded(items: impl IntoIterator<Item = Item>) -> Arc<Self> {
        Arc::new(Self::build(
            Box::new(|id, input| Ok(Item::new(id, input.name.unwrap_or_default()))),
            InMemoryItemService::seed(items),
            None,
        ))
    }

    /// Stub that echoes the id and name back as the updated item
    pub fn echo() -> Arc<Self> {
        Self::new(|id, input| Ok(Item::new(id, input.name.unwrap_or_default())))
    }

    /// Stub whose every operation fails with `err`
    pub fn failing(err: ItemError) -> Arc<Self> {
        let update_err = err.clone();
        Arc::new(Self::build(
            Box::new(move |_, _| Err(update_err.clone())),
            InMemoryItemService::new(),
            Some(err),
        ))
    }

    fn record(&self) -> Result<(), ItemError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_call(&self) -> Option<(i64, UpdateItemInput)> {
        self.last_call.lock().unwrap().clone()
    }
}

#[async_trait]
impl ItemService for StubItemService {
    async fn list_items(&self) -> Result<Vec<Item>, ItemError> {
        self.record()?;
        self.store.list_items().await
    }

    async fn get_item(&self, id: i64) -> Result<Item, ItemError> {
        self.record()?;
        self.store.get_item(id).await
    }

    async fn create_item(&self, input: CreateItemInput) -> Result<Item, ItemError> {
        self.record()?;
        self.store.create_item(input).await
    }

    async fn delete_item(&self, id: i64) -> Result<(), ItemError> {
        self.record()?;
        self.store.delete_item(id).await
    }

    async fn update_item(&self, id: i64, input: UpdateItemInput) -> Result<Item, ItemError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_call.lock().unwrap() = Some((id, input.clone()));
        (self.update_fn)(id, input)
    }
}

pub fn app_with(service: Arc<StubItemService>) -> Router {
    build_router(AppState::new(Config::default(), service))
}

pub fn patch_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::PATCH)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
