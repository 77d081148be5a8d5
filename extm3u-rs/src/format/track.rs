use smol_str::SmolStr;

/// A `key="value"` pair attached to a track or to the playlist header
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Tag {
    pub name: SmolStr,
    pub value: SmolStr,
}

impl Tag {
    pub fn new(name: impl Into<SmolStr>, value: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Track {
    /// Display title, may be empty
    pub name: SmolStr,
    /// Duration in whole seconds, `-1` by convention for live streams
    pub length: i64,
    /// Location of the media, empty until a location line is read
    pub uri: SmolStr,
    /// Tags in the order they appeared, duplicated keys are kept
    pub tags: Vec<Tag>,
    /// Group of this track, empty means no group
    pub group: SmolStr,
}

impl Track {
    pub fn new(length: i64, name: impl Into<SmolStr>, uri: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            length,
            uri: uri.into(),
            tags: Vec::new(),
            group: SmolStr::default(),
        }
    }

    pub fn with_tag(mut self, name: impl Into<SmolStr>, value: impl Into<SmolStr>) -> Self {
        self.tags.push(Tag::new(name, value));
        self
    }

    pub fn with_group(mut self, group: impl Into<SmolStr>) -> Self {
        self.group = group.into();
        self
    }

    /// First tag value with the given name
    pub fn tag(&self, name: impl AsRef<str>) -> Option<&str> {
        self.tags
            .iter()
            .find(|x| x.name == name.as_ref())
            .map(|x| x.value.as_str())
    }

    pub fn has_group(&self) -> bool {
        !self.group.is_empty()
    }
}
