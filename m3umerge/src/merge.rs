use std::io::Write;

use extm3u_rs::{Error, Playlist};

/// Writes `playlists` one after another into `into`, sharing a single
/// `#EXTM3U` header. The header carries the attributes of the first playlist.
pub fn merge_into<'a>(
    playlists: impl IntoIterator<Item = &'a Playlist>,
    into: &mut impl Write,
    write_header: bool,
) -> Result<(), Error> {
    let mut write_header = write_header;
    for playlist in playlists {
        playlist.write_to(into, write_header)?;
        write_header = false;
    }

    // nothing written yet
    if write_header {
        Playlist::default().write_to(into, true)?;
    }

    Ok(())
}
