//! # Callback URLs
//!
//! Where the gateway sends the customer back after payment.

/// Success and failure landing pages under the public base URL
#[derive(Debug, Clone)]
pub struct CallbackUrls {
    /// Public base URL of the application (e.g., "https://shop.example.com")
    pub base_url: String,
    /// Success page path
    pub success_path: String,
    /// Failure page path
    pub failure_path: String,
}

impl CallbackUrls {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            success_path: "/success".to_string(),
            failure_path: "/failure".to_string(),
        }
    }

    pub fn success_url(&self) -> String {
        format!("{}{}", self.base_url, self.success_path)
    }

    pub fn failure_url(&self) -> String {
        format!("{}{}", self.base_url, self.failure_path)
    }
}

impl Default for CallbackUrls {
    fn default() -> Self {
        Self::new("http://localhost:8080")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_callback_urls() {
        let urls = CallbackUrls::new("https://shop.example.com");

        assert_eq!(urls.success_url(), "https://shop.example.com/success");
        assert_eq!(urls.failure_url(), "https://shop.example.com/failure");
    }

    #[test]
    fn test_empty_base_degrades_to_paths() {
        let urls = CallbackUrls::new("");
        assert_eq!(urls.success_url(), "/success");
    }
}
