//! Inventory assistant
//!
//! Answers free-text questions through an OpenAI compatible
//! `/chat/completions` endpoint. Each request carries a snapshot of the
//! current stock and the most recent sales as system context.

use std::fmt::Write as _;
use std::time::Duration;

use serde_json::{Value, json};
use shared::models::{Material, Product, Sale};
use sqlx::AnyPool;

use crate::core::config::ChatConfig;
use crate::db::repository;
use crate::utils::validation::{MAX_MESSAGE_LEN, validate_required_text};
use crate::utils::{AppError, AppResult, ErrorCode};

/// Number of recent sales included in the prompt context
const RECENT_SALES_IN_CONTEXT: i64 = 10;

const SYSTEM_PROMPT: &str = "You are an inventory assistant for a furniture workshop. \
Answer questions about stock levels, materials and sales using only the data below. \
Be concise. If the data does not answer the question, say so.";

/// HTTP client for the completion provider
#[derive(Debug, Clone)]
pub struct ChatClient {
    http: reqwest::Client,
    config: ChatConfig,
}

impl ChatClient {
    pub fn new(config: ChatConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;
        Ok(Self { http, config })
    }

    /// Whether an API key is present
    pub fn is_configured(&self) -> bool {
        self.config.api_key.is_some()
    }

    /// Send one system + user exchange and return the assistant's reply
    pub async fn complete(&self, system: &str, message: &str) -> AppResult<String> {
        let api_key = self.config.api_key.as_deref().ok_or_else(|| {
            AppError::with_message(ErrorCode::ChatNotConfigured, "Chat assistant is not configured")
        })?;

        let url = format!("{}/chat/completions", self.config.base_url.trim_end_matches('/'));
        let body = json!({
            "model": self.config.model,
            "messages": [
                { "role": "system", "content": system },
                { "role": "user", "content": message },
            ],
        });

        let resp = self
            .http
            .post(&url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(request_error)?;

        let status = resp.status();
        let payload: Value = resp.json().await.map_err(request_error)?;
        if !status.is_success() {
            tracing::error!(%status, response = %payload, "Chat provider returned an error");
            return Err(AppError::with_message(
                ErrorCode::ChatUpstreamFailed,
                format!("Chat provider returned {status}"),
            ));
        }

        extract_reply(&payload).ok_or_else(|| {
            tracing::error!(response = %payload, "Chat provider response has no message content");
            AppError::new(ErrorCode::ChatUpstreamFailed)
        })
    }
}

fn request_error(err: reqwest::Error) -> AppError {
    tracing::error!(error = %err, "Chat provider request failed");
    if err.is_timeout() {
        AppError::with_message(ErrorCode::TimeoutError, "Chat provider timed out")
    } else if err.is_decode() {
        AppError::with_message(ErrorCode::ChatUpstreamFailed, "Chat provider sent an invalid response")
    } else {
        AppError::network("Chat provider is unreachable")
    }
}

/// `choices[0].message.content` of a completion response
fn extract_reply(payload: &Value) -> Option<String> {
    payload["choices"][0]["message"]["content"]
        .as_str()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Render the inventory snapshot appended to the system prompt
pub fn build_context(products: &[Product], materials: &[Material], sales: &[Sale]) -> String {
    let mut out = String::from("Products:\n");
    for p in products {
        let _ = writeln!(
            out,
            "- {} (SKU {}): {} in stock, price {:.2}",
            p.name, p.sku, p.quantity, p.price
        );
    }

    out.push_str("\nMaterials:\n");
    for m in materials {
        let low = if m.quantity < m.min_stock_level { " [LOW]" } else { "" };
        let _ = writeln!(
            out,
            "- {} (SKU {}): {} {}, min {}{}",
            m.name, m.sku, m.quantity, m.unit, m.min_stock_level, low
        );
    }

    out.push_str("\nRecent sales:\n");
    if sales.is_empty() {
        out.push_str("- none\n");
    }
    for s in sales {
        let product = products
            .iter()
            .find(|p| p.id == s.product_id)
            .map_or("unknown product", |p| p.name.as_str());
        let _ = writeln!(
            out,
            "- Sale #{}: {} x {} for {:.2}",
            s.id, s.quantity, product, s.total_price
        );
    }
    out
}

/// Answer a user question with the current inventory as context
pub async fn answer(pool: &AnyPool, client: &ChatClient, message: &str) -> AppResult<String> {
    validate_required_text(message, "message", MAX_MESSAGE_LEN)?;
    if !client.is_configured() {
        return Err(AppError::with_message(
            ErrorCode::ChatNotConfigured,
            "Chat assistant is not configured",
        ));
    }

    let products = repository::product::find_all(pool).await?;
    let materials = repository::material::find_all(pool).await?;
    let sales = repository::sale::find_recent(pool, RECENT_SALES_IN_CONTEXT).await?;

    let system = format!(
        "{SYSTEM_PROMPT}\n\n{}",
        build_context(&products, &materials, &sales)
    );
    let reply = client.complete(&system, message.trim()).await?;
    tracing::info!(question_len = message.len(), reply_len = reply.len(), "Chat answered");
    Ok(reply)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Json, Router, http::HeaderMap, routing::post};

    fn config(base_url: String, api_key: Option<&str>) -> ChatConfig {
        ChatConfig {
            api_key: api_key.map(str::to_string),
            base_url,
            model: "test-model".into(),
            timeout_ms: 5_000,
        }
    }

    /// Serve `router` on an ephemeral local port and return its base URL
    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    #[test]
    fn test_extract_reply() {
        let payload = json!({"choices": [{"message": {"role": "assistant", "content": " 12 chairs "}}]});
        assert_eq!(extract_reply(&payload).as_deref(), Some("12 chairs"));
        assert!(extract_reply(&json!({"choices": []})).is_none());
        assert!(extract_reply(&json!({"choices": [{"message": {"content": ""}}]})).is_none());
    }

    #[test]
    fn test_build_context() {
        let products = vec![Product {
            id: 1,
            name: "Wall Shelf".into(),
            sku: "PROD-003".into(),
            description: None,
            quantity: 25,
            price: 45.0,
            detected_color: None,
            detected_texture: None,
            detected_dimensions: None,
            last_scanned_at: None,
            predicted_stock: None,
            predicted_demand: None,
        }];
        let materials = vec![Material {
            id: 1,
            name: "Wood Varnish".into(),
            sku: "MAT-VARNISH".into(),
            quantity: 3,
            unit: "liters".into(),
            cost_per_unit: 12.0,
            min_stock_level: 5,
        }];
        let sales = vec![Sale {
            id: 9,
            product_id: 1,
            quantity: 2,
            total_price: 90.0,
            timestamp: 0,
        }];

        let context = build_context(&products, &materials, &sales);
        assert!(context.contains("Wall Shelf (SKU PROD-003): 25 in stock"));
        assert!(context.contains("3 liters, min 5 [LOW]"));
        assert!(context.contains("Sale #9: 2 x Wall Shelf for 90.00"));

        assert!(build_context(&[], &[], &[]).contains("- none"));
    }

    #[tokio::test]
    async fn test_complete_without_key() {
        let client = ChatClient::new(config("http://127.0.0.1:9".into(), None)).unwrap();
        assert!(!client.is_configured());
        let err = client.complete("system", "hello").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ChatNotConfigured);
        assert_eq!(err.http_status(), http::StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_complete_against_local_provider() {
        let router = Router::new().route(
            "/chat/completions",
            post(|headers: HeaderMap, Json(body): Json<Value>| async move {
                let auth = headers
                    .get("authorization")
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default()
                    .to_string();
                let question = body["messages"][1]["content"].as_str().unwrap_or_default().to_string();
                Json(json!({
                    "choices": [{"message": {"role": "assistant", "content": format!("{auth} | {question}")}}]
                }))
            }),
        );
        let base_url = serve(router).await;

        let client = ChatClient::new(config(base_url, Some("sk-test"))).unwrap();
        let reply = client.complete("system", "How many chairs?").await.unwrap();
        assert_eq!(reply, "Bearer sk-test | How many chairs?");
    }

    #[tokio::test]
    async fn test_provider_error_status() {
        let router = Router::new().route(
            "/chat/completions",
            post(|| async {
                (
                    http::StatusCode::UNAUTHORIZED,
                    Json(json!({"error": {"message": "bad key"}})),
                )
            }),
        );
        let base_url = serve(router).await;

        let client = ChatClient::new(config(base_url, Some("sk-wrong"))).unwrap();
        let err = client.complete("system", "hi").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ChatUpstreamFailed);
        assert_eq!(err.http_status(), http::StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn test_unreachable_provider() {
        // Bind then drop to get a port nothing listens on
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = ChatClient::new(config(format!("http://{addr}"), Some("sk-test"))).unwrap();
        let err = client.complete("system", "hi").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NetworkError);
        assert_eq!(err.http_status(), http::StatusCode::SERVICE_UNAVAILABLE);
    }
}
