//! CORS headers for proxy responses.

/// Headers allowed by default, matching what API Gateway clients send.
pub const DEFAULT_ALLOW_HEADERS: [&str; 5] = [
    "Authorization",
    "Content-Type",
    "X-Amz-Date",
    "X-Api-Key",
    "X-Amz-Security-Token",
];

/// CORS settings applied by the resolver to every response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsConfig {
    /// Primary allowed origin; `*` allows any origin.
    pub allow_origin: String,
    /// Further origins echoed back when they match the request `Origin`.
    pub extra_origins: Vec<String>,
    pub allow_headers: Vec<String>,
    pub expose_headers: Vec<String>,
    /// `Access-Control-Max-Age` in seconds.
    pub max_age: Option<u64>,
    pub allow_credentials: bool,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allow_origin: "*".to_string(),
            extra_origins: Vec::new(),
            allow_headers: DEFAULT_ALLOW_HEADERS.iter().map(ToString::to_string).collect(),
            expose_headers: Vec::new(),
            max_age: None,
            allow_credentials: false,
        }
    }
}

impl CorsConfig {
    /// Allow exactly the given origins.
    ///
    /// Falls back to the default (`*`) when the list is empty.
    pub fn for_origins(origins: Vec<String>) -> Self {
        let mut origins = origins.into_iter();
        match origins.next() {
            Some(first) => Self {
                allow_origin: first,
                extra_origins: origins.collect(),
                ..Self::default()
            },
            None => Self::default(),
        }
    }

    /// The `Access-Control-Allow-Origin` value for a request origin, if any.
    fn resolve_origin(&self, request_origin: Option<&str>) -> Option<String> {
        if self.allow_origin == "*" {
            return Some("*".to_string());
        }
        let origin = request_origin?;
        std::iter::once(&self.allow_origin)
            .chain(&self.extra_origins)
            .find(|allowed| allowed.as_str() == origin)
            .cloned()
    }

    /// Response headers for a request carrying `request_origin`.
    ///
    /// Empty when the origin is not allowed.
    pub fn headers(&self, request_origin: Option<&str>) -> Vec<(String, String)> {
        let Some(origin) = self.resolve_origin(request_origin) else {
            return Vec::new();
        };

        let mut allow_headers = self.allow_headers.clone();
        allow_headers.sort();
        allow_headers.dedup();

        let mut headers = vec![
            ("Access-Control-Allow-Origin".to_string(), origin),
            (
                "Access-Control-Allow-Headers".to_string(),
                allow_headers.join(","),
            ),
        ];
        if !self.expose_headers.is_empty() {
            headers.push((
                "Access-Control-Expose-Headers".to_string(),
                self.expose_headers.join(","),
            ));
        }
        if let Some(max_age) = self.max_age {
            headers.push(("Access-Control-Max-Age".to_string(), max_age.to_string()));
        }
        if self.allow_credentials {
            headers.push((
                "Access-Control-Allow-Credentials".to_string(),
                "true".to_string(),
            ));
        }
        headers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup<'a>(headers: &'a [(String, String)], name: &str) -> Option<&'a str> {
        headers
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    #[test]
    fn test_wildcard_origin() {
        let headers = CorsConfig::default().headers(None);
        assert_eq!(lookup(&headers, "Access-Control-Allow-Origin"), Some("*"));
        assert_eq!(
            lookup(&headers, "Access-Control-Allow-Headers"),
            Some("Authorization,Content-Type,X-Amz-Date,X-Amz-Security-Token,X-Api-Key")
        );
        assert_eq!(lookup(&headers, "Access-Control-Max-Age"), None);
    }

    #[test]
    fn test_specific_origins_are_echoed_only_when_allowed() {
        let cors = CorsConfig::for_origins(vec![
            "https://shop.example".to_string(),
            "https://admin.example".to_string(),
        ]);

        let headers = cors.headers(Some("https://admin.example"));
        assert_eq!(
            lookup(&headers, "Access-Control-Allow-Origin"),
            Some("https://admin.example")
        );
        assert!(cors.headers(Some("https://evil.example")).is_empty());
        assert!(cors.headers(None).is_empty());
    }

    #[test]
    fn test_optional_headers() {
        let cors = CorsConfig {
            expose_headers: vec!["X-Request-Id".to_string()],
            max_age: Some(300),
            allow_credentials: true,
            ..CorsConfig::default()
        };
        let headers = cors.headers(None);
        assert_eq!(
            lookup(&headers, "Access-Control-Expose-Headers"),
            Some("X-Request-Id")
        );
        assert_eq!(lookup(&headers, "Access-Control-Max-Age"), Some("300"));
        assert_eq!(
            lookup(&headers, "Access-Control-Allow-Credentials"),
            Some("true")
        );
    }

    #[test]
    fn test_empty_origin_list_defaults_to_wildcard() {
        assert_eq!(CorsConfig::for_origins(Vec::new()), CorsConfig::default());
    }
}
