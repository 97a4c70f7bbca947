use anyhow::Result;

use crate::cmd;
use crate::constants;
use crate::display;
use crate::model::Configuration;
use crate::names::Names;

/// Fetch the package archive into the download directory.
pub fn download(cfg: &Configuration) -> Result<()> {
    let url = cfg.require(constants::DOWNLOADURL)?;
    let names = Names::new(cfg);
    let download_dir = names.download_dir()?;

    display::echo(&format!("downloading: {url}"));
    let command = vec![
        "curl".to_string(),
        "-L".to_string(),
        "-O".to_string(),
        url.to_string(),
    ];
    cmd::run_in_dir(&command, &download_dir)?;
    Ok(())
}

/// Unpack the downloaded archive next to where it was downloaded. The
/// archive name is the final component of the download URL.
pub fn unpack(cfg: &Configuration) -> Result<()> {
    let url = cfg.require(constants::DOWNLOADURL)?;
    let archive = url.rsplit('/').next().unwrap_or(url);
    let names = Names::new(cfg);
    let download_dir = names.download_dir()?;

    display::echo(&format!(
        "unpacking {} into {}",
        archive,
        names.source_dir()?.display()
    ));
    let command = vec!["tar".to_string(), "xf".to_string(), archive.to_string()];
    cmd::run_in_dir(&command, &download_dir)?;
    Ok(())
}
