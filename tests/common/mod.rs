#![allow(dead_code)]

use std::{
    collections::BTreeMap,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc, Mutex,
    },
};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{HeaderMap, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use product_api::{
    app,
    models::{Page, Product, ProductRequest},
    store::ProductStore,
    AppError, AppState, Result,
};
use rust_decimal::Decimal;
use tower::ServiceExt;

#[derive(Default)]
struct Table {
    next_id: i32,
    rows: BTreeMap<i32, Product>,
}

/// In-memory stand-in for the products table. Ids come from a sequence that
/// `reset` restarts, like `TRUNCATE ... RESTART IDENTITY`.
#[derive(Clone, Default)]
pub struct MemoryStore {
    table: Arc<Mutex<Table>>,
    failing: Arc<AtomicBool>,
}

impl MemoryStore {
    pub fn reset(&self) {
        let mut table = self.table.lock().unwrap();
        table.rows.clear();
        table.next_id = 0;
        self.failing.store(false, Ordering::SeqCst);
    }

    /// Makes every following call fail like a lost connection.
    pub fn fail(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        self.table.lock().unwrap().rows.len()
    }

    fn check(&self) -> Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(AppError::DatabaseError(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl ProductStore for MemoryStore {
    async fn find_by_id(&self, id: i32) -> Result<Option<Product>> {
        self.check()?;
        Ok(self.table.lock().unwrap().rows.get(&id).cloned())
    }

    async fn find_page(&self, page: Page) -> Result<Vec<Product>> {
        self.check()?;
        let table = self.table.lock().unwrap();
        Ok(table
            .rows
            .values()
            .skip(page.start as usize)
            .take(page.count as usize)
            .cloned()
            .collect())
    }

    async fn create(&self, req: &ProductRequest) -> Result<Product> {
        self.check()?;
        let mut table = self.table.lock().unwrap();
        table.next_id += 1;
        let product = Product {
            id: table.next_id,
            name: req.name.clone(),
            price: req.price,
        };
        table.rows.insert(product.id, product.clone());
        Ok(product)
    }

    async fn update(&self, id: i32, req: &ProductRequest) -> Result<Option<Product>> {
        self.check()?;
        let mut table = self.table.lock().unwrap();
        Ok(table.rows.get_mut(&id).map(|product| {
            product.name = req.name.clone();
            product.price = req.price;
            product.clone()
        }))
    }

    async fn delete(&self, id: i32) -> Result<u64> {
        self.check()?;
        let removed = self.table.lock().unwrap().rows.remove(&id);
        Ok(removed.map_or(0, |_| 1))
    }

    async fn ping(&self) -> Result<()> {
        self.check()
    }
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body)
            .unwrap_or_else(|e| panic!("invalid JSON body {:?}: {}", self.body, e))
    }

    pub fn envelope(&self) -> product_api::error::Envelope {
        serde_json::from_str(&self.body)
            .unwrap_or_else(|e| panic!("invalid envelope {:?}: {}", self.body, e))
    }
}

/// One router plus its backing store, built per test.
pub struct TestApp {
    pub store: MemoryStore,
    router: Router,
}

impl TestApp {
    pub fn new() -> Self {
        let store = MemoryStore::default();
        let router = app::router(AppState::new(store.clone()));
        Self { store, router }
    }

    pub fn reset(&self) {
        self.store.reset();
    }

    /// Inserts `count` products named `Product {i}` priced `(i + 1) * 10`.
    pub async fn seed(&self, count: usize) {
        for i in 0..count.max(1) {
            let req = ProductRequest {
                name: format!("Product {}", i),
                price: Decimal::from((i as i64 + 1) * 10),
            };
            self.store.create(&req).await.unwrap();
        }
    }

    pub async fn request(&self, method: &str, uri: &str, body: Option<&str>) -> TestResponse {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
            .unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();

        TestResponse {
            status,
            headers,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }
}
