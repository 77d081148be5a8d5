mod playlist;
mod track;
pub use playlist::*;
pub use track::*;

pub mod directives {
    pub const EXTM3U: &str = "#EXTM3U";
    pub const EXTINF: &str = "#EXTINF";
    pub const EXTGRP: &str = "#EXTGRP";
}
