use std::io::{self, BufRead};

use extm3u_rs::Error;
use reqwest::blocking::Client;

mod file;
mod http;
pub use file::*;
pub use http::*;

/// Somewhere a playlist can be read from. The reader returned by
/// [`Source::open`] owns the underlying handle, dropping it closes the file
/// or the connection.
pub trait Source {
    fn location(&self) -> &str;
    fn open(&self) -> Result<Box<dyn BufRead>, Error>;
}

pub fn is_remote(identifier: impl AsRef<str>) -> bool {
    let identifier = identifier.as_ref();
    identifier.starts_with("http://") || identifier.starts_with("https://")
}

/// Picks the source for a playlist identifier, either a url or a file path.
pub fn open_source(identifier: impl AsRef<str>, client: &Client) -> Box<dyn Source> {
    let identifier = identifier.as_ref();
    if is_remote(identifier) {
        Box::new(HttpSource::new(identifier, client.clone()))
    } else {
        Box::new(FileSource::new(identifier))
    }
}

fn source_error(e: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Error {
    Error::Source(io::Error::other(e))
}
