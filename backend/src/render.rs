//! Response writer shared by all handlers.
//!
//! Values are serialized as pretty-printed JSON (two-space indent) and sent
//! either as-is or wrapped in a small HTML page with syntax highlighting,
//! depending on the configured [`ResponseFormat`].

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use maud::{html, Markup, DOCTYPE};
use serde::Serialize;

use crate::config::ResponseFormat;
use crate::error::Result;

const PRISM_CSS: &str = "https://cdnjs.cloudflare.com/ajax/libs/prism/1.25.0/themes/prism.min.css";
const PRISM_JS: &str = "https://cdnjs.cloudflare.com/ajax/libs/prism/1.25.0/prism.min.js";
const PRISM_JSON_JS: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/prism/1.25.0/components/prism-json.min.js";

const WELCOME: &str = "Welcome to gox.";

const JSON_CONTENT_TYPE: &str = "application/json";
const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";

/// Serialize `value` and write it with the given status.
pub fn render<T: Serialize>(format: ResponseFormat, status: StatusCode, value: &T) -> Result<Response> {
    let json = serde_json::to_string_pretty(value)?;

    let response = match format {
        ResponseFormat::Json => (status, [(header::CONTENT_TYPE, JSON_CONTENT_TYPE)], json).into_response(),
        ResponseFormat::Html => {
            let page = page(html! {
                pre { code class="language-json" { (json) } }
            });
            (status, [(header::CONTENT_TYPE, HTML_CONTENT_TYPE)], page.into_string()).into_response()
        }
    };

    Ok(response)
}

/// The static landing message.
pub fn welcome(format: ResponseFormat) -> Response {
    match format {
        ResponseFormat::Json => WELCOME.into_response(),
        ResponseFormat::Html => {
            let page = page(html! { p { (WELCOME) } });
            (StatusCode::OK, [(header::CONTENT_TYPE, HTML_CONTENT_TYPE)], page.into_string()).into_response()
        }
    }
}

fn page(content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { "Gox" }
                link href=(PRISM_CSS) rel="stylesheet";
                script src=(PRISM_JS) {}
                script src=(PRISM_JSON_JS) {}
            }
            body {
                h1 { "G0X" }
                (content)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;
    use serde_json::json;

    use super::*;

    async fn body_string(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn content_type(response: &Response) -> &str {
        response.headers()[header::CONTENT_TYPE].to_str().unwrap()
    }

    #[tokio::test]
    async fn test_render_json_is_pretty() {
        let response = render(ResponseFormat::Json, StatusCode::OK, &json!({"a": 1})).unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(content_type(&response), "application/json");
        assert_eq!(body_string(response).await, "{\n  \"a\": 1\n}");
    }

    #[tokio::test]
    async fn test_render_keeps_status() {
        let response = render(ResponseFormat::Json, StatusCode::CREATED, &json!([])).unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    #[tokio::test]
    async fn test_render_html_escapes_json() {
        let response = render(ResponseFormat::Html, StatusCode::OK, &json!({"name": "<b>"})).unwrap();
        assert!(content_type(&response).starts_with("text/html"));

        let body = body_string(response).await;
        assert!(body.starts_with("<!DOCTYPE html>"));
        assert!(body.contains("<title>Gox</title>"));
        assert!(body.contains("<code class=\"language-json\">"));
        assert!(body.contains("&lt;b&gt;"));
        assert!(!body.contains("<b>"));
    }

    #[tokio::test]
    async fn test_welcome_variants() {
        let plain = welcome(ResponseFormat::Json);
        assert!(content_type(&plain).starts_with("text/plain"));
        assert_eq!(body_string(plain).await, "Welcome to gox.");

        let page = welcome(ResponseFormat::Html);
        assert!(content_type(&page).starts_with("text/html"));
        assert!(body_string(page).await.contains("Welcome to gox."));
    }
}
