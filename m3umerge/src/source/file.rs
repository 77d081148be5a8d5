use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::PathBuf,
};

use extm3u_rs::Error;

use crate::source::Source;

pub struct FileSource {
    location: String,
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<String>) -> Self {
        let location = path.into();
        Self {
            path: PathBuf::from(&location),
            location,
        }
    }
}

impl Source for FileSource {
    fn location(&self) -> &str {
        &self.location
    }

    fn open(&self) -> Result<Box<dyn BufRead>, Error> {
        let file = File::open(&self.path).map_err(Error::Source)?;
        Ok(Box::new(BufReader::new(file)))
    }
}
