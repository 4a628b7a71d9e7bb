use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("unknown template: {0}")]
    UnknownTemplate(String),
}

/// Presentation boundary. Handlers hand over a template name and a flat
/// object of named values; whatever implements this turns that into
/// markup. Tests inject a recording double.
pub trait Renderer: Send + Sync {
    fn render(&self, template: &str, context: Value) -> Result<String, RenderError>;
}

/// Minimal built-in renderer for the binary. Values arriving here are
/// already entity-escaped at the form boundary, so they are inserted
/// verbatim.
pub struct HtmlRenderer;

impl HtmlRenderer {
    fn page(title: &str, body: &str) -> String {
        format!(
            "<!DOCTYPE html><html><head><title>{title}</title></head>\
             <body><h1>{title}</h1>{body}</body></html>"
        )
    }
}

impl Renderer for HtmlRenderer {
    fn render(&self, template: &str, context: Value) -> Result<String, RenderError> {
        let title = context["title"].as_str().unwrap_or("Library Catalog");

        let body = match template {
            "genre_list" => {
                let mut items = String::new();
                if let Some(genres) = context["list_genres"].as_array() {
                    for genre in genres {
                        items.push_str(&format!(
                            "<li><a href=\"{}\">{}</a></li>",
                            genre["url"].as_str().unwrap_or(""),
                            genre["name"].as_str().unwrap_or("")
                        ));
                    }
                }
                format!("<ul>{items}</ul>")
            }
            "genre_detail" => {
                let name = context["genre"]["name"].as_str().unwrap_or("");
                let mut books = String::new();
                if let Some(list) = context["genre_books"].as_array() {
                    for book in list {
                        books.push_str(&format!(
                            "<li><strong>{}</strong>: {}</li>",
                            book["title"].as_str().unwrap_or(""),
                            book["summary"].as_str().unwrap_or("")
                        ));
                    }
                }
                if books.is_empty() {
                    books.push_str("<li>This genre has no books.</li>");
                }
                format!("<h2>Genre: {name}</h2><ul>{books}</ul>")
            }
            "genre_form" => {
                let value = context["genre"]["name"].as_str().unwrap_or("");
                let mut errors = String::new();
                if let Some(list) = context["errors"].as_array() {
                    for error in list {
                        errors.push_str(&format!(
                            "<li>{}</li>",
                            error["message"].as_str().unwrap_or("")
                        ));
                    }
                }
                format!(
                    "<form method=\"POST\">\
                     <label for=\"name\">Name:</label>\
                     <input id=\"name\" name=\"name\" value=\"{value}\">\
                     <button type=\"submit\">Submit</button>\
                     </form><ul class=\"errors\">{errors}</ul>"
                )
            }
            other => return Err(RenderError::UnknownTemplate(other.to_string())),
        };

        Ok(Self::page(title, &body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn list_template_links_each_genre() {
        let page = HtmlRenderer
            .render(
                "genre_list",
                json!({
                    "title": "Genre List",
                    "list_genres": [{ "name": "Fantasy", "url": "/genre/abc" }],
                }),
            )
            .unwrap();
        assert!(page.contains("<a href=\"/genre/abc\">Fantasy</a>"));
    }

    #[test]
    fn form_template_echoes_value_and_errors() {
        let page = HtmlRenderer
            .render(
                "genre_form",
                json!({
                    "title": "Create Genre",
                    "genre": { "name": "ab" },
                    "errors": [{ "field": "name", "message": "too short" }],
                }),
            )
            .unwrap();
        assert!(page.contains("value=\"ab\""));
        assert!(page.contains("<li>too short</li>"));
    }

    #[test]
    fn unknown_template_is_an_error() {
        let result = HtmlRenderer.render("author_list", json!({}));
        assert!(matches!(result, Err(RenderError::UnknownTemplate(_))));
    }
}
