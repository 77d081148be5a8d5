use crate::format::{Tag, Track};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Playlist {
    /// Attributes of the `#EXTM3U` header line
    pub attributes: Vec<Tag>,
    /// Tracks of this playlist, in playback order
    pub tracks: Vec<Track>,
}

impl Playlist {
    pub fn new(tracks: Vec<Track>) -> Self {
        Self {
            attributes: Vec::new(),
            tracks,
        }
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Track> {
        self.tracks.iter()
    }
}

impl IntoIterator for Playlist {
    type Item = Track;
    type IntoIter = std::vec::IntoIter<Track>;

    fn into_iter(self) -> Self::IntoIter {
        self.tracks.into_iter()
    }
}

impl<'a> IntoIterator for &'a Playlist {
    type Item = &'a Track;
    type IntoIter = std::slice::Iter<'a, Track>;

    fn into_iter(self) -> Self::IntoIter {
        self.tracks.iter()
    }
}

impl FromIterator<Track> for Playlist {
    fn from_iter<T: IntoIterator<Item = Track>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
