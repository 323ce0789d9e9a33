//! Shared test helpers and the mock product API.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use stockroom::catalog::{CatalogState, Product};
use stockroom::session::SessionState;
use stockroom::state::AppState;
use stockroom::store::Store;

pub fn product(id: i64, name: &str) -> Product {
    Product {
        id,
        product_name: name.to_string(),
        product_code: format!("P-{id:04}"),
        description: format!("{name} description"),
        price: 9.99,
    }
}

pub fn store_with_catalog(catalog: CatalogState) -> Store {
    Store::new(AppState {
        catalog: Arc::new(catalog),
        session: Arc::new(SessionState::default()),
    })
}

/// Poll `check` until it holds or a 2 second deadline passes.
pub async fn wait_until(what: &str, mut check: impl FnMut() -> bool) {
    let deadline = tokio::time::Instant::now() + Duration::from_secs(2);
    while !check() {
        if tokio::time::Instant::now() >= deadline {
            panic!("timed out waiting for {what}");
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}

pub mod product_api {
    use std::net::SocketAddr;

    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::Router;
    use tokio::net::TcpListener;
    use tokio::sync::watch;

    /// Mock product API serving `GET /products` with a fixed response.
    pub struct ProductApi {
        pub base_url: String,
        shutdown: watch::Sender<bool>,
    }

    impl ProductApi {
        pub async fn start(status: u16, body: &str) -> Self {
            let status = StatusCode::from_u16(status).expect("valid status code");
            let body = body.to_string();
            let app = Router::new().route(
                "/products",
                get(move || {
                    let body = body.clone();
                    async move { (status, [("content-type", "application/json")], body) }
                }),
            );

            let listener = TcpListener::bind("127.0.0.1:0")
                .await
                .expect("bind mock product API");
            let addr: SocketAddr = listener.local_addr().expect("mock API address");
            let (shutdown, mut rx) = watch::channel(false);
            tokio::spawn(async move {
                axum::serve(listener, app)
                    .with_graceful_shutdown(async move {
                        let _ = rx.changed().await;
                    })
                    .await
                    .expect("serve mock product API");
            });

            Self {
                base_url: format!("http://{addr}"),
                shutdown,
            }
        }

        pub fn stop(&self) {
            let _ = self.shutdown.send(true);
        }
    }
}
