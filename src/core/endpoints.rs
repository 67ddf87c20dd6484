pub const BREEDS_PATH: &str = "/api/v1/breeds/";
pub const DOGS_PATH: &str = "/api/v1/dogs/";
pub const ANSWER_PATH: &str = "/api/v1/answer/";

/// Upper bound for the breed page size.
pub const MAX_PAGE_SIZE: u64 = 100;

/// Builds the fixed API URLs from a base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base_url: String,
}

impl Endpoints {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn breeds(&self, limit: u64) -> String {
        format!("{}{}?limit={}", self.base_url, BREEDS_PATH, limit)
    }

    pub fn dogs(&self) -> String {
        format!("{}{}", self.base_url, DOGS_PATH)
    }

    pub fn answer(&self) -> String {
        format!("{}{}", self.base_url, ANSWER_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_strip_trailing_slash() {
        let endpoints = Endpoints::new("https://dogs.example.com/");
        assert_eq!(endpoints.base_url(), "https://dogs.example.com");
        assert_eq!(
            endpoints.breeds(1),
            "https://dogs.example.com/api/v1/breeds/?limit=1"
        );
        assert_eq!(endpoints.dogs(), "https://dogs.example.com/api/v1/dogs/");
        assert_eq!(endpoints.answer(), "https://dogs.example.com/api/v1/answer/");
    }
}
