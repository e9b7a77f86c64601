//! OpenAPI description of the public endpoints.

use axum::Json;
use serde_json::{json, Map, Value};

use crate::config::{SERVICE_TITLE, SERVICE_VERSION};

/// OpenAPI version the document conforms to
const OPENAPI_VERSION: &str = "3.1.0";

/// (path, operationId, summary) for each GET route
const OPERATIONS: [(&str, &str, &str); 3] = [
    ("/", "root", "Root"),
    ("/health", "health", "Health"),
    ("/api/v1/info", "info", "Info"),
];

/// Build the OpenAPI document describing every GET route.
pub fn document() -> Value {
    let mut paths = Map::new();
    for (path, operation_id, summary) in OPERATIONS {
        paths.insert(
            path.to_string(),
            json!({
                "get": {
                    "summary": summary,
                    "operationId": operation_id,
                    "responses": {
                        "200": {
                            "description": "Successful Response",
                            "content": {
                                "application/json": { "schema": {} }
                            }
                        }
                    }
                }
            }),
        );
    }

    json!({
        "openapi": OPENAPI_VERSION,
        "info": {
            "title": SERVICE_TITLE,
            "version": SERVICE_VERSION,
        },
        "paths": paths,
    })
}

/// OpenAPI document handler.
pub async fn openapi() -> Json<Value> {
    Json(document())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_info() {
        let doc = document();
        assert_eq!(doc["openapi"], "3.1.0");
        assert_eq!(doc["info"]["title"], "FastAPI Hello World");
        assert_eq!(doc["info"]["version"], "1.0.0");
    }

    #[test]
    fn test_document_lists_every_route() {
        let doc = document();
        let paths = doc["paths"].as_object().unwrap();
        assert_eq!(paths.len(), 3);
        for path in ["/", "/health", "/api/v1/info"] {
            let get = &paths[path]["get"];
            assert_eq!(get["responses"]["200"]["description"], "Successful Response");
        }
        assert_eq!(paths["/api/v1/info"]["get"]["operationId"], "info");
    }
}
