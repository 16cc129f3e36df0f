use serde_json::{Value, json};

pub const TITLE: &str = "serving-api";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Static OpenAPI 3.1 description of the greeting route.
#[must_use]
pub fn document(root_path: &str) -> Value {
    let server_url = if root_path.is_empty() { "/" } else { root_path };

    json!({
        "openapi": "3.1.0",
        "info": { "title": TITLE, "version": VERSION },
        "servers": [{ "url": server_url }],
        "paths": {
            "/": {
                "get": {
                    "summary": "Root",
                    "description": "Dummy endpoint that returns a 'hello world' message.",
                    "operationId": "root__get",
                    "responses": {
                        "200": {
                            "description": "Successful Response",
                            "content": {
                                "application/json": {
                                    "schema": {
                                        "type": "object",
                                        "properties": {
                                            "message": { "type": "string" }
                                        },
                                        "required": ["message"]
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_url_follows_root_path() {
        let doc = document("/prod");
        assert_eq!(doc["servers"][0]["url"], "/prod");

        let doc = document("");
        assert_eq!(doc["servers"][0]["url"], "/");
    }

    #[test]
    fn describes_only_the_root_route() {
        let doc = document("/prod");
        let paths = doc["paths"].as_object().unwrap();
        assert_eq!(paths.len(), 1);
        assert!(paths["/"].get("get").is_some());
    }
}
