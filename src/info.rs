use anyhow::Result;

use crate::constants;
use crate::display;
use crate::model::Configuration;

/// List the installations of the configured package below the install
/// root, across all toolchains and variants.
pub fn list_installations(cfg: &Configuration) -> Result<()> {
    let install_root = cfg.require(constants::INSTALLROOT)?;
    let package = cfg.require(constants::PACKAGE)?.to_lowercase();

    let pattern = format!("{install_root}/installation-{package}-*");
    let mut found = false;
    for entry in glob::glob(&pattern)?.flatten() {
        if entry.is_dir() {
            display::echo(&entry.display().to_string());
            found = true;
        }
    }
    if !found {
        display::echo(&format!(
            "no installations of {package} in installroot {install_root}"
        ));
    }
    Ok(())
}
