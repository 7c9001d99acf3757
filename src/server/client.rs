use std::time::Duration;

use tracing::debug;

/// Connection-establish timeout applied to probe requests
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// How many Location hops to follow before returning whatever came last
const MAX_REDIRECTS: usize = 10;

/// Outcome of fetching a url while recording every status line seen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchReply {
    /// Status code of the final response in the chain
    pub code: u16,
    /// One formatted status line per response, in order
    pub status_lines: Vec<String>,
}

/// Build the client used for probe requests.
///
/// Transport-level redirect following is disabled; [`fetch_with_status_lines`]
/// follows Location hops itself so the status line of every response in the
/// chain is retained.
pub fn build_probe_client() -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .connect_timeout(CONNECT_TIMEOUT)
        .build()
}

/// Perform a GET against `url`, following redirects manually and recording the
/// status line of each response along the way.
pub async fn fetch_with_status_lines(
    client: &reqwest::Client,
    url: &str,
) -> Result<FetchReply, reqwest::Error> {
    let mut status_lines = Vec::new();
    let mut url = url.to_owned();

    loop {
        let response = client.get(url.as_str()).send().await?;
        let status = response.status();
        status_lines.push(format!(
            "{:?} {} {}",
            response.version(),
            status.as_u16(),
            status.canonical_reason().unwrap_or("")
        ));

        let next = if status.is_redirection() && status_lines.len() <= MAX_REDIRECTS {
            response
                .headers()
                .get(reqwest::header::LOCATION)
                .and_then(|value| value.to_str().ok())
                .and_then(|location| response.url().join(location).ok())
        } else {
            None
        };

        match next {
            Some(location) => {
                debug!("following redirect from {} to {}", url, location);
                url = location.to_string();
            }
            None => {
                return Ok(FetchReply {
                    code: status.as_u16(),
                    status_lines,
                })
            }
        }
    }
}
