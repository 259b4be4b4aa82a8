//! Target page retrieval.

/// Fetches a page body over HTTP.
///
/// Issues one GET request and returns the response body as text. A non-2xx
/// status is an error, same as a transport failure; the caller decides how
/// to surface it.
///
/// # Arguments
///
/// * `client` - The shared HTTP client (carries timeout and user agent)
/// * `url` - Absolute URL of the page to fetch
///
/// # Errors
///
/// Returns a `reqwest::Error` on transport failure or non-success status.
pub async fn fetch_page(client: &reqwest::Client, url: &str) -> Result<String, reqwest::Error> {
    let response = client.get(url).send().await?;
    let response = response.error_for_status()?;
    response.text().await
}
