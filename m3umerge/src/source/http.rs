use std::io::{BufRead, BufReader};

use extm3u_rs::Error;
use reqwest::blocking::Client;
use url::Url;

use crate::source::{Source, source_error};

pub struct HttpSource {
    location: String,
    http_client: Client,
}

impl HttpSource {
    pub fn new(url: impl Into<String>, http_client: Client) -> Self {
        Self {
            location: url.into(),
            http_client,
        }
    }
}

impl Source for HttpSource {
    fn location(&self) -> &str {
        &self.location
    }

    fn open(&self) -> Result<Box<dyn BufRead>, Error> {
        let url = Url::parse(&self.location).map_err(source_error)?;
        let response = self
            .http_client
            .get(url)
            .send()
            .and_then(|x| x.error_for_status())
            .map_err(source_error)?;

        Ok(Box::new(BufReader::new(response)))
    }
}
