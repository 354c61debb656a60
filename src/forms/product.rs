use crate::models;
use serde::{Deserialize, Serialize};
use serde_valid::validation::Errors;
use serde_valid::Validate;

/// Body of `POST /generate-content`
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct ProductRequest {
    #[validate(min_length = 1)]
    #[validate(pattern = r"\S")]
    pub product_name: String,
    #[validate(min_length = 1)]
    #[validate(pattern = r"\S")]
    pub product_description: String,
}

impl ProductRequest {
    /// Pair the request with the copy written for it
    pub fn into_history(self, generated_content: String) -> models::NewHistory {
        models::NewHistory {
            product_name: self.product_name,
            product_description: self.product_description,
            generated_content,
        }
    }
}

/// Flattens a validation error tree into `field: message` pairs joined by `; `
pub fn describe_errors(errors: &Errors) -> String {
    let mut messages = Vec::new();
    collect_errors(errors, "", &mut messages);
    messages.join("; ")
}

fn collect_errors(errors: &Errors, path: &str, messages: &mut Vec<String>) {
    match errors {
        Errors::Object(object) => {
            messages.extend(object.errors.iter().map(|error| label(path, error)));
            for (property, nested) in object.properties.iter() {
                collect_errors(nested, &join_path(path, property), messages);
            }
        }
        Errors::Array(array) => {
            messages.extend(array.errors.iter().map(|error| label(path, error)));
            for (index, nested) in array.items.iter() {
                collect_errors(nested, &join_path(path, &index.to_string()), messages);
            }
        }
        Errors::NewType(errors) => {
            messages.extend(errors.iter().map(|error| label(path, error)));
        }
    }
}

fn label(path: &str, error: &impl std::fmt::Display) -> String {
    if path.is_empty() {
        error.to_string()
    } else {
        format!("{}: {}", path, error)
    }
}

fn join_path(path: &str, segment: &str) -> String {
    if path.is_empty() {
        segment.to_string()
    } else {
        format!("{}.{}", path, segment)
    }
}

/// Body of a successful `POST /generate-content`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MarketingText {
    pub marketing_text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, description: &str) -> ProductRequest {
        ProductRequest {
            product_name: name.to_string(),
            product_description: description.to_string(),
        }
    }

    #[test]
    fn accepts_regular_input() {
        assert!(request("Widget", "A useful widget").validate().is_ok());
    }

    #[test]
    fn rejects_empty_fields() {
        assert!(request("", "A useful widget").validate().is_err());
        assert!(request("Widget", "").validate().is_err());
    }

    #[test]
    fn rejects_whitespace_only_fields() {
        assert!(request("   ", "A useful widget").validate().is_err());
        assert!(request("Widget", "\n\t ").validate().is_err());
    }

    #[test]
    fn accepts_long_fields() {
        let name = "x".repeat(201);
        let description = "y".repeat(5001);
        assert!(request(&name, &description).validate().is_ok());
    }

    #[test]
    fn describes_errors_per_field_as_plain_text() {
        let errors = request("", "A useful widget").validate().unwrap_err();
        let described = describe_errors(&errors);

        assert!(described.starts_with("product_name: "), "{described}");
        assert!(!described.contains('{'), "{described}");
        assert!(!described.contains("product_description"), "{described}");
    }

    #[test]
    fn missing_field_fails_to_deserialize() {
        let parsed = serde_json::from_str::<ProductRequest>(r#"{"product_name": "Widget"}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn into_history_keeps_fields_verbatim() {
        let history = request(" Widget ", "A useful widget").into_history("Buy now!".to_string());

        assert_eq!(history.product_name, " Widget ");
        assert_eq!(history.product_description, "A useful widget");
        assert_eq!(history.generated_content, "Buy now!");
    }
}
