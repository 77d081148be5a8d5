use std::time::Duration;

use anyhow::Result;
use extm3u_rs::{Error, Playlist};
use log::info;
use reqwest::{Proxy, blocking::Client};

use crate::{Config, loader::load_all};

pub struct AppState {
    pub config: Config,
    pub http_client: Client,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        let mut builder = Client::builder();

        if let Some(user_agent) = &config.http.user_agent {
            builder = builder.user_agent(user_agent)
        }

        if let Some(proxy) = &config.http.proxy {
            info!("With proxy: {}", proxy);
            builder = builder.proxy(Proxy::all(proxy)?);
        }

        if let Some(timeout) = config.http.timeout {
            builder = builder.timeout(Duration::from_secs(timeout));
        }

        Ok(Self {
            http_client: builder.build()?,
            config,
        })
    }

    pub fn load_playlists(&self) -> Result<Vec<Playlist>, Error> {
        load_all(
            &self.config.sources,
            &self.http_client,
            self.config.skip_invalid,
        )
    }
}
