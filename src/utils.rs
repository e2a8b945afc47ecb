use url::Url;

/// Longest response body excerpt kept in diagnostics
const MAX_BODY_EXCERPT: usize = 200;

/// Render a request URL for logging with the credential masked
pub fn redact_credential(url: &Url) -> String {
    let mut redacted = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(key, value)| {
            if key == "client_id" {
                (key.into_owned(), "***".to_string())
            } else {
                (key.into_owned(), value.into_owned())
            }
        })
        .collect();

    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted.to_string()
}

/// Shorten a response body so error messages stay on one screen line
pub fn body_excerpt(body: &str) -> String {
    let flattened = body.split_whitespace().collect::<Vec<_>>().join(" ");
    if flattened.chars().count() > MAX_BODY_EXCERPT {
        let cut: String = flattened.chars().take(MAX_BODY_EXCERPT).collect();
        format!("{cut}...")
    } else {
        flattened
    }
}
