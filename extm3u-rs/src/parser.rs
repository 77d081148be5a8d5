use std::{
    io::{self, BufRead},
    mem::take,
    str::FromStr,
};

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    Error, FormatError, FormatErrorKind,
    format::{Playlist, Tag, Track, directives},
};

/// Parses a whole playlist from `reader`.
///
/// The reader is consumed and dropped before returning, whether the parse
/// succeeded or not.
pub fn parse(reader: impl BufRead) -> Result<Playlist, Error> {
    let mut parser = Parser::new(reader);
    parser.parse()?;
    Ok(parser.get_result())
}

/// Parses a playlist from lines that are already split, without line endings.
pub fn parse_lines<I, S>(lines: I) -> Result<Playlist, Error>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut state = ParserState::default();
    for line in lines {
        state.feed(line.as_ref())?;
    }
    state.finish()?;

    Ok(state.playlist)
}

impl FromStr for Playlist {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_lines(s.lines())
    }
}

pub struct Parser<R: BufRead> {
    reader: R,
    buffer: String,
    state: ParserState,
}

impl<R: BufRead> Parser<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: String::new(),
            state: ParserState::default(),
        }
    }

    /// Runs until the end of input or the first error. After an error the
    /// tracks read so far are still available from [`Parser::get_result`].
    pub fn parse(&mut self) -> Result<(), Error> {
        let Self {
            reader,
            buffer,
            state,
        } = self;

        while let Some(line) = next_line(reader, buffer).map_err(Error::Source)? {
            state.feed(line)?;
        }
        state.finish()?;

        Ok(())
    }

    pub fn get_result(&mut self) -> Playlist {
        take(&mut self.state.playlist)
    }
}

fn next_line<'a>(reader: &mut impl BufRead, buffer: &'a mut String) -> io::Result<Option<&'a str>> {
    buffer.clear();
    if reader.read_line(buffer)? == 0 {
        return Ok(None);
    }

    let line = buffer.as_str();
    let line = line.strip_suffix('\n').unwrap_or(line);
    Ok(Some(line.strip_suffix('\r').unwrap_or(line)))
}

lazy_static! {
    static ref TAG_REGEX: Regex =
        Regex::new(r#"([A-Za-z0-9-]+)="([^"]*)""#).expect("Regular expression error");
}

/// Extracts every `key="value"` pair of `input`, in order.
fn parse_tags(input: impl AsRef<str>) -> Vec<Tag> {
    TAG_REGEX
        .captures_iter(input.as_ref())
        .map(|x| x.extract())
        .map(|(_, [name, value])| Tag::new(name, value))
        .collect()
}

/// Splits the `#EXTINF` value into its info and name segments at the first
/// comma that is not inside a quoted tag value, or at the first comma when
/// every comma is quoted.
fn split_track_info(value: &str) -> Option<(&str, &str)> {
    let mut quoted = false;
    for (index, c) in value.char_indices() {
        match c {
            '"' => quoted = !quoted,
            ',' if !quoted => return Some((&value[..index], &value[index + 1..])),
            _ => {}
        }
    }

    value.split_once(',')
}

fn strip_directive<'a>(line: &'a str, directive: &str) -> Option<&'a str> {
    line.strip_prefix(directive)
        .map(|x| x.strip_prefix(':').unwrap_or(x))
}

#[derive(Default)]
struct ParserState {
    playlist: Playlist,
    /// Index of the track that location and group lines apply to
    current: Option<usize>,
    line_number: usize,
}

impl ParserState {
    fn error(&self, kind: FormatErrorKind) -> FormatError {
        FormatError::new(self.line_number, kind)
    }

    fn current_track(&mut self) -> Option<&mut Track> {
        self.current.and_then(|x| self.playlist.tracks.get_mut(x))
    }

    fn feed(&mut self, line: &str) -> Result<(), FormatError> {
        self.line_number += 1;
        if self.line_number == 1 {
            return self.parse_header(line);
        }

        if let Some(value) = strip_directive(line, directives::EXTINF) {
            return self.parse_track_info(value);
        }

        if let Some(value) = strip_directive(line, directives::EXTGRP) {
            let Some(track) = self.current_track() else {
                return Err(self.error(FormatErrorKind::GroupWithoutTrack));
            };
            track.group = value.into();
            return Ok(());
        }

        // comment or blank line
        if line.starts_with('#') || line.is_empty() {
            return Ok(());
        }

        let Some(track) = self.current_track() else {
            return Err(self.error(FormatErrorKind::UriWithoutTrack));
        };
        track.uri = line.trim_matches(' ').into();
        Ok(())
    }

    fn parse_header(&mut self, line: &str) -> Result<(), FormatError> {
        let line = line.strip_prefix('\u{feff}').unwrap_or(line);
        let attributes = line
            .strip_prefix(directives::EXTM3U)
            .ok_or_else(|| self.error(FormatErrorKind::MissingHeader))?;

        self.playlist.attributes = parse_tags(attributes);
        Ok(())
    }

    fn parse_track_info(&mut self, value: &str) -> Result<(), FormatError> {
        let (info, name) =
            split_track_info(value).ok_or_else(|| self.error(FormatErrorKind::MalformedMetadata))?;

        // parse length
        let length = info.split_whitespace().next().unwrap_or_default();
        let length = length.parse::<i64>().map_err(|_| {
            self.error(FormatErrorKind::InvalidLength {
                found: length.to_owned(),
            })
        })?;

        let mut track = Track::new(length, name.trim(), "");
        track.tags = parse_tags(info);

        self.playlist.tracks.push(track);
        self.current = Some(self.playlist.tracks.len() - 1);
        Ok(())
    }

    fn finish(&self) -> Result<(), FormatError> {
        if self.line_number == 0 {
            return Err(FormatError::new(1, FormatErrorKind::MissingHeader));
        }

        Ok(())
    }
}
