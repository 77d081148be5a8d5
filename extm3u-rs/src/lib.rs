//! # extm3u-rs
//! A library for parsing and generating extended m3u playlists
//!
//! # Example
//! ```rust
//! use extm3u_rs::parse;
//! use std::io::Cursor;
//!
//! // 1. Parse
//! let playlist = parse(Cursor::new(r#"#EXTM3U
//! #EXTINF:123 tvg-id="1", Channel One
//! #EXTGRP:News
//! http://example.com/one.m3u8"#)).unwrap();
//! assert_eq!(playlist.tracks[0].group, "News");
//!
//! // 2. Generate
//! println!("{}", playlist.to_string());
//! ```

mod builder;
mod errors;
pub mod format;
mod parser;
pub use builder::Fragment;
pub use errors::*;
pub use format::{Playlist, Tag, Track};
pub use parser::*;
