//! Upstream reply interpretation.

use serde_json::Value;

/// Pull `images[0].url` out of an upstream success body.
///
/// Missing arrays, elements, or fields yield an empty string; only a body
/// that is not JSON at all is an error.
pub fn extract_image_url(body: &str) -> Result<String, serde_json::Error> {
    let value: Value = serde_json::from_str(body)?;
    Ok(value
        .get("images")
        .and_then(|images| images.get(0))
        .and_then(|image| image.get("url"))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_image_url_is_extracted() {
        let body = r#"{"images": [{"url": "https://img.example/a.png", "width": 1024}]}"#;
        assert_eq!(extract_image_url(body).unwrap(), "https://img.example/a.png");
    }

    #[test]
    fn missing_pieces_yield_an_empty_string() {
        assert_eq!(extract_image_url(r#"{"images": []}"#).unwrap(), "");
        assert_eq!(extract_image_url(r#"{"images": [{}]}"#).unwrap(), "");
        assert_eq!(extract_image_url("{}").unwrap(), "");
        assert_eq!(extract_image_url(r#"{"images": [{"url": 7}]}"#).unwrap(), "");
    }

    #[test]
    fn non_json_body_is_an_error() {
        assert!(extract_image_url("<html>oops</html>").is_err());
    }
}
