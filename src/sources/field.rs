use reqwest::Client;
use serde_json::Value;

use crate::config::FieldUpstream;

/// Fetch the current tournament field from the upstream feed.
///
/// The upstream status code is not checked: whatever body comes back is
/// decoded as JSON, and only transport or decode failures are errors.
pub async fn fetch_field(
    client: &Client,
    upstream: &FieldUpstream,
) -> Result<Value, reqwest::Error> {
    client
        .get(&upstream.url)
        .query(&[
            ("tour", upstream.tour.as_str()),
            ("file_format", upstream.file_format.as_str()),
            ("key", upstream.api_key.as_str()),
        ])
        .send()
        .await?
        .json::<Value>()
        .await
}
