//! Full GET retrieval of the catalog body.

use super::TransportError;
use crate::config::FetchOptions;

/// Downloads `url` into memory with a single GET.
///
/// Follows redirects. The transfer handle and the body buffer are scoped
/// here, so the connection is released whether or not the caller's
/// decoding succeeds. A connection failure or a non-2xx status is a
/// `TransportError`.
pub fn fetch_bytes(url: &str, opts: FetchOptions) -> Result<Vec<u8>, TransportError> {
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.connect_timeout(opts.connect_timeout)?;
    easy.timeout(opts.request_timeout)?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let code = easy.response_code()?;
    if !(200..300).contains(&code) {
        return Err(TransportError::Status {
            method: "GET",
            status: code,
        });
    }

    Ok(body)
}
