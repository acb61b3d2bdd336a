use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub endpoints: Endpoints,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub csrf: CsrfConfig,
}

/// Connection settings for the storefront backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the backend (e.g., "http://localhost:8000").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Backend paths, relative to `api.base_url`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Endpoints {
    #[serde(default = "default_csrf_cookie")]
    pub csrf_cookie: String,
    #[serde(default = "default_products")]
    pub products: String,
    #[serde(default = "default_categories")]
    pub categories: String,
    #[serde(default = "default_create_category")]
    pub create_category: String,
    #[serde(default = "default_order_history")]
    pub order_history: String,
}

/// Product list settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Records requested per page.
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

/// Anti-forgery token names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CsrfConfig {
    /// Cookie the backend stores the token in.
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    /// Header the token is echoed back in.
    #[serde(default = "default_header_name")]
    pub header_name: String,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_csrf_cookie() -> String {
    "/sanctum/csrf-cookie".to_string()
}

fn default_products() -> String {
    "/api/admin/trangsuc".to_string()
}

fn default_categories() -> String {
    "/api/danhmucts".to_string()
}

fn default_create_category() -> String {
    "/api/danhmucts/create".to_string()
}

fn default_order_history() -> String {
    "/api/customer/history".to_string()
}

fn default_per_page() -> u32 {
    10
}

fn default_cookie_name() -> String {
    "XSRF-TOKEN".to_string()
}

fn default_header_name() -> String {
    "X-XSRF-TOKEN".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            csrf_cookie: default_csrf_cookie(),
            products: default_products(),
            categories: default_categories(),
            create_category: default_create_category(),
            order_history: default_order_history(),
        }
    }
}

impl Endpoints {
    /// All configured paths with their config key, for validation.
    pub fn entries(&self) -> [(&'static str, &str); 5] {
        [
            ("csrf_cookie", &self.csrf_cookie),
            ("products", &self.products),
            ("categories", &self.categories),
            ("create_category", &self.create_category),
            ("order_history", &self.order_history),
        ]
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            per_page: default_per_page(),
        }
    }
}

impl Default for CsrfConfig {
    fn default() -> Self {
        Self {
            cookie_name: default_cookie_name(),
            header_name: default_header_name(),
        }
    }
}
