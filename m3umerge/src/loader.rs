use extm3u_rs::{Error, Playlist, parse};
use log::{debug, info, warn};
use reqwest::blocking::Client;

use crate::source::{Source, open_source};

/// Opens the playlist behind `identifier` (a file path or an http(s) url) and
/// parses it.
pub fn load_playlist(identifier: impl AsRef<str>, http_client: &Client) -> Result<Playlist, Error> {
    let source = open_source(identifier, http_client);
    load_from(source.as_ref())
}

pub fn load_from(source: &dyn Source) -> Result<Playlist, Error> {
    debug!("Opening playlist {}", source.location());
    let playlist = parse(source.open()?)?;

    info!(
        "Loaded {} tracks from {}",
        playlist.len(),
        source.location()
    );
    Ok(playlist)
}

/// Loads every identifier in order. With `skip_invalid` a playlist that
/// fails to load is logged and left out, otherwise the first failure is
/// returned.
pub fn load_all(
    identifiers: &[String],
    http_client: &Client,
    skip_invalid: bool,
) -> Result<Vec<Playlist>, Error> {
    let mut result = Vec::with_capacity(identifiers.len());
    for identifier in identifiers.iter() {
        match load_playlist(identifier, http_client) {
            Ok(playlist) => result.push(playlist),
            Err(e) if skip_invalid => warn!("Skip playlist {}: {}", identifier, e),
            Err(e) => return Err(e),
        }
    }

    Ok(result)
}
