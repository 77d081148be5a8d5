use std::{
    env,
    fs::File,
    io::{self, BufWriter},
    process::exit,
};

use anyhow::Result;
use log::{error, info};
use m3umerge_rs::{AppState, load_config, merge::merge_into};

fn app_entry() -> Result<()> {
    let config = load_config(env::var("M3UMERGE_CONFIG").unwrap_or_else(|_| "config.yml".into()))?;
    let app_state = AppState::new(config)?;

    let playlists = app_state.load_playlists()?;
    let tracks: usize = playlists.iter().map(|x| x.len()).sum();

    match &app_state.config.output {
        Some(path) => {
            let mut output = BufWriter::new(File::create(path)?);
            merge_into(&playlists, &mut output, true)?;
            info!("Wrote {} tracks to {}", tracks, path);
        }
        None => merge_into(&playlists, &mut io::stdout().lock(), true)?,
    }

    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(e) = app_entry() {
        error!("Fatal error: {}", e);
        exit(1);
    }
}
