//! The external fetch collaborator for the catalog.

use std::future::Future;

use thiserror::Error;

use crate::catalog::product::Product;

pub use reqwest::StatusCode;

/// Errors a product fetch can surface.
///
/// These never cross the effect boundary as errors; the effect layer folds
/// them into a `LoadFail` message.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected status {0} from product API")]
    Status(StatusCode),
}

/// Fetch collaborator contract: one request, the full product list or an
/// error with a message.
pub trait ProductGateway {
    fn fetch_products(&self) -> impl Future<Output = Result<Vec<Product>, GatewayError>> + Send;
}

/// Fetches products from `GET {base_url}/products`.
#[derive(Clone)]
pub struct HttpProductGateway {
    client: reqwest::Client,
    base_url: String,
}

impl HttpProductGateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn products_url(&self) -> String {
        format!("{}/products", self.base_url.trim_end_matches('/'))
    }
}

impl ProductGateway for HttpProductGateway {
    fn fetch_products(&self) -> impl Future<Output = Result<Vec<Product>, GatewayError>> + Send {
        let request = self.client.get(self.products_url());
        async move {
            let response = request.send().await?;
            if !response.status().is_success() {
                return Err(GatewayError::Status(response.status()));
            }
            Ok(response.json::<Vec<Product>>().await?)
        }
    }
}

/// In-memory gateway for offline mode and tests.
#[derive(Clone, Default)]
pub struct FixtureGateway {
    products: Vec<Product>,
}

impl FixtureGateway {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The demo catalog.
    pub fn sample() -> Self {
        let product = |id: i64, name: &str, code: &str, description: &str, price: f64| Product {
            id,
            product_name: name.to_string(),
            product_code: code.to_string(),
            description: description.to_string(),
            price,
        };
        Self::new(vec![
            product(1, "Leaf Rake", "GDN-0011", "Leaf rake with 48-inch wooden handle", 19.95),
            product(2, "Garden Cart", "GDN-0023", "15 gallon capacity rolling garden cart", 32.99),
            product(5, "Hammer", "TBX-0048", "Curved claw steel hammer", 8.90),
            product(8, "Saw", "TBX-0022", "15-inch steel blade hand saw", 11.55),
            product(10, "Video Game Controller", "GMG-0042", "Standard two-button video game controller", 35.95),
        ])
    }
}

impl ProductGateway for FixtureGateway {
    fn fetch_products(&self) -> impl Future<Output = Result<Vec<Product>, GatewayError>> + Send {
        let products = self.products.clone();
        async move { Ok(products) }
    }
}
