//! HEAD probe of the catalog URL.
//!
//! A metadata-only request run before the real download; the advertised
//! Content-Length is logged so an operator can see what a full pass would
//! pull. The value is never used for correctness.

use super::TransportError;
use crate::config::FetchOptions;
use std::str;

/// Parsed HEAD response metadata.
#[derive(Debug, Clone, Copy)]
pub struct ProbeResult {
    /// Size in bytes, if the remote sent `Content-Length`.
    pub content_length: Option<u64>,
}

/// Performs a HEAD request and reports the advertised content length.
///
/// Follows redirects. A connection failure or a non-2xx status is a
/// `TransportError`.
pub fn probe(url: &str, opts: FetchOptions) -> Result<ProbeResult, TransportError> {
    let mut headers: Vec<String> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.nobody(true)?; // HEAD request
    easy.follow_location(true)?;
    easy.connect_timeout(opts.connect_timeout)?;
    easy.timeout(opts.request_timeout)?;

    {
        let mut transfer = easy.transfer();
        transfer.header_function(|data| {
            if let Ok(s) = str::from_utf8(data) {
                headers.push(s.trim_end().to_string());
            }
            true
        })?;
        transfer.perform()?;
    }

    let code = easy.response_code()?;
    if !(200..300).contains(&code) {
        return Err(TransportError::Status {
            method: "HEAD",
            status: code,
        });
    }

    Ok(parse_headers(&headers))
}

/// Extracts `Content-Length` from collected header lines. When redirects
/// were followed the lines span every response; the last value wins.
fn parse_headers(lines: &[String]) -> ProbeResult {
    let mut content_length = None;
    for line in lines {
        if let Some((name, value)) = line.split_once(':') {
            if name.trim().eq_ignore_ascii_case("content-length") {
                if let Ok(n) = value.trim().parse::<u64>() {
                    content_length = Some(n);
                }
            }
        }
    }
    ProbeResult { content_length }
}
