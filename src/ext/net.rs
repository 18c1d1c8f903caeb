//! Blocking HTTP download helpers and URL plumbing.
//!
//! Everything here is synchronous call-and-return: no pooling, retries or
//! timeouts beyond what the caller configures on their own. Non-2xx
//! responses surface as errors rather than partial payloads.

use std::collections::HashMap;
use std::io::Write;
use std::net::{IpAddr, ToSocketAddrs};

use reqwest::blocking::{Client, Response};
use reqwest::Url;

use crate::error::{Error, Result};

fn request(url: &str, headers: Option<&HashMap<String, String>>) -> Result<Response> {
    tracing::debug!("GET {}", url);
    let mut builder = Client::new().get(url);
    if let Some(headers) = headers {
        for (name, value) in headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
    }
    Ok(builder.send()?.error_for_status()?)
}

/// Download a URL into memory
pub fn download_bytes(url: &str, headers: Option<&HashMap<String, String>>) -> Result<Vec<u8>> {
    Ok(request(url, headers)?.bytes()?.to_vec())
}

/// Download a URL as text
pub fn download_text(url: &str, headers: Option<&HashMap<String, String>>) -> Result<String> {
    Ok(request(url, headers)?.text()?)
}

/// Stream a URL into a writer, returning the number of bytes written
pub fn download_to<W: Write>(
    url: &str,
    headers: Option<&HashMap<String, String>>,
    writer: &mut W,
) -> Result<u64> {
    let mut response = request(url, headers)?;
    Ok(response.copy_to(writer)?)
}

/// Resolve a host name to its addresses
pub fn resolve_host(host: &str) -> Result<Vec<IpAddr>> {
    let addrs = (host, 0).to_socket_addrs()?;
    Ok(addrs.map(|addr| addr.ip()).collect())
}

/// Append query parameters to a URL, percent-encoding keys and values
pub fn with_query(url: &str, pairs: &[(&str, &str)]) -> Result<String> {
    let mut url = Url::parse(url).map_err(|e| Error::InvalidUrl(e.to_string()))?;
    {
        let mut query = url.query_pairs_mut();
        for (key, value) in pairs {
            query.append_pair(key, value);
        }
    }
    Ok(url.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_query_encodes_keys_and_values() {
        let url = with_query("https://example.com/search", &[("q", "a b&c"), ("page", "2")])
            .unwrap();
        assert_eq!(url, "https://example.com/search?q=a+b%26c&page=2");
    }

    #[test]
    fn with_query_appends_to_existing_query() {
        let url = with_query("https://example.com/?a=1", &[("b", "2")]).unwrap();
        assert_eq!(url, "https://example.com/?a=1&b=2");
    }

    #[test]
    fn with_query_rejects_relative_urls() {
        assert!(matches!(
            with_query("not a url", &[]),
            Err(Error::InvalidUrl(_))
        ));
    }

    #[test]
    fn localhost_resolves() {
        let addrs = resolve_host("localhost").unwrap();
        assert!(addrs.iter().any(|a| a.is_loopback()));
    }
}
