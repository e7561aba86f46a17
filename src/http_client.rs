//! HTTP agent construction and bounded response reads.

use std::io::{self, Read};
use std::time::Duration;

use crate::config::HttpSettings;

/// Build an agent with the configured connect/read/write timeouts.
pub(crate) fn build_agent(settings: &HttpSettings) -> ureq::Agent {
    let read = Duration::from_secs(settings.read_timeout_secs);
    ureq::AgentBuilder::new()
        .timeout_connect(Duration::from_secs(settings.connect_timeout_secs))
        .timeout_read(read)
        .timeout_write(read)
        .build()
}

/// Read a response body as UTF-8 text, refusing anything over `max_bytes`.
pub(crate) fn read_body_limited(response: ureq::Response, max_bytes: usize) -> io::Result<String> {
    check_content_length(&response, max_bytes)?;
    let mut limited = response.into_reader().take(max_bytes as u64 + 1);
    let mut bytes = Vec::new();
    limited.read_to_end(&mut bytes)?;
    if bytes.len() > max_bytes {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("Response exceeded {max_bytes} bytes"),
        ));
    }
    String::from_utf8(bytes).map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
}

fn check_content_length(response: &ureq::Response, max_bytes: usize) -> io::Result<()> {
    let Some(length) = response
        .header("Content-Length")
        .and_then(|value| value.parse::<u64>().ok())
    else {
        return Ok(());
    };
    if length > max_bytes as u64 {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("Response too large: {length} bytes"),
        ));
    }
    Ok(())
}
