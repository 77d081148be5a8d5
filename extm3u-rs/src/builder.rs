use std::{
    fmt::Display,
    io::{Cursor, Write},
};

use crate::{
    Error,
    format::{Playlist, Tag, Track, directives},
};

/// Text of a playlist, with or without the `#EXTM3U` header.
pub struct Fragment<'a> {
    playlist: &'a Playlist,
    write_header: bool,
}

impl Playlist {
    pub fn fragment(&self, write_header: bool) -> Fragment<'_> {
        Fragment {
            playlist: self,
            write_header,
        }
    }

    /// Writes the playlist into `into` and flushes it.
    ///
    /// Leave `write_header` off when appending to a file that already has
    /// its header.
    pub fn write_to(&self, into: &mut impl Write, write_header: bool) -> Result<(), Error> {
        write!(into, "{}", self.fragment(write_header)).map_err(Error::Sink)?;
        into.flush().map_err(Error::Sink)
    }

    /// Complete playlist file, header included, as a readable buffer.
    pub fn marshall(&self) -> Result<Cursor<Vec<u8>>, Error> {
        let mut buffer = Vec::new();
        self.write_to(&mut buffer, true)?;
        Ok(Cursor::new(buffer))
    }
}

impl Display for Fragment<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // header
        if self.write_header {
            write!(f, "{}", directives::EXTM3U)?;
            for it in self.playlist.attributes.iter() {
                write!(f, " {}", it)?;
            }
            writeln!(f)?;
        }

        for it in self.playlist.tracks.iter() {
            it.fmt(f)?;
        }

        Ok(())
    }
}

impl Display for Playlist {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.fragment(true).fmt(f)
    }
}

impl Display for Track {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // #EXTINF:length tags..., name
        write!(f, "{}:{} ", directives::EXTINF, self.length)?;
        for (i, it) in self.tags.iter().enumerate() {
            if i != 0 {
                write!(f, " ")?;
            }
            it.fmt(f)?;
        }
        writeln!(f, ", {}", self.name)?;

        if self.has_group() {
            writeln!(f, "{}:{}", directives::EXTGRP, self.group)?;
        }
        writeln!(f, "{}", self.uri)
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}=\"{}\"", self.name, self.value)
    }
}

#[cfg(test)]
mod tests {
    use std::io::{self, Cursor, Read, Write};

    use crate::{Playlist, Tag, Track, parse};

    fn sample() -> Playlist {
        [
            Track::new(123, "Channel One", "http://example.com/one.m3u8")
                .with_tag("tvg-id", "1")
                .with_tag("tvg-name", "One")
                .with_group("News"),
            Track::new(10, "Only Name", "file.mp3"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_write_playlist() {
        assert_eq!(
            sample().to_string(),
            "#EXTM3U\n\
             #EXTINF:123 tvg-id=\"1\" tvg-name=\"One\", Channel One\n\
             #EXTGRP:News\n\
             http://example.com/one.m3u8\n\
             #EXTINF:10 , Only Name\n\
             file.mp3\n"
        );
    }

    #[test]
    fn test_write_without_header() {
        let mut out = Vec::new();
        sample().write_to(&mut out, false).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("#EXTINF:123 "));
        assert!(!text.contains("#EXTM3U"));
    }

    #[test]
    fn test_write_tracks_one_by_one() {
        let text: String = sample().into_iter().map(|x| x.to_string()).collect();
        assert_eq!(text, sample().fragment(false).to_string());
    }

    #[test]
    fn test_write_empty() {
        assert_eq!(Playlist::default().to_string(), "#EXTM3U\n");
        assert_eq!(Playlist::default().fragment(false).to_string(), "");
    }

    #[test]
    fn test_write_header_attributes() {
        let mut playlist = sample();
        playlist.attributes.push(Tag::new("x-tvg-url", "http://epg"));
        assert!(
            playlist
                .to_string()
                .starts_with("#EXTM3U x-tvg-url=\"http://epg\"\n#EXTINF:123")
        );
    }

    #[test]
    fn test_marshall_round_trip() {
        let playlist = sample();
        let mut text = String::new();
        playlist.marshall().unwrap().read_to_string(&mut text).unwrap();

        let parsed = parse(Cursor::new(text)).unwrap();
        assert_eq!(parsed, playlist);
    }

    #[test]
    fn test_parse_then_write_keeps_tracks() {
        let data = r#"#EXTM3U
# exported
#EXTINF:100 a="1" b="2", Title

#EXTGRP:Music
music/title.mp3
#EXTINF:-1,Live, Radio
http://radio/stream
"#;
        let parsed = parse(Cursor::new(data)).unwrap();
        let written = parsed.to_string();
        assert_eq!(
            written,
            "#EXTM3U\n\
             #EXTINF:100 a=\"1\" b=\"2\", Title\n\
             #EXTGRP:Music\n\
             music/title.mp3\n\
             #EXTINF:-1 , Live, Radio\n\
             http://radio/stream\n"
        );
        assert_eq!(parse(Cursor::new(written)).unwrap(), parsed);
    }

    struct BrokenSink;

    impl Write for BrokenSink {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_sink_failure() {
        let e = sample().write_to(&mut BrokenSink, true).unwrap_err();
        assert!(e.is_sink());
    }
}
