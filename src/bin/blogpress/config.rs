use std::env;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use blogpress::config::{read_config, Config};

use crate::CFG_FILE_NAME;

fn get_config_path() -> Option<PathBuf> {
    let exe_dir = env::current_exe().ok()
        .and_then(|exe| exe.parent().map(|p| p.to_path_buf()));
    let cur_dir = env::current_dir().ok();
    let cfg_dir = dirs::config_dir().map(|dir| dir.join("blogpress"));

    [exe_dir, cur_dir, cfg_dir].into_iter()
        .flatten()
        .map(|dir| dir.join(CFG_FILE_NAME))
        .find(|path| path.exists())
}

pub(crate) fn open_config(cfg_path: Option<PathBuf>) -> Result<Config> {
    let config_path = match cfg_path {
        Some(path) => path,
        None => get_config_path().ok_or_else(|| anyhow!("Could not find {}", CFG_FILE_NAME))?,
    };

    let mut config = read_config(&config_path)
        .with_context(|| format!("Reading config from {}", config_path.display()))?;

    if let Some(ref mut log) = config.log {
        if log.location.is_none() && !log.log_to_console {
            log.location = dirs::cache_dir().map(|dir| dir.join("blogpress").join("log").join("blogpress.log"));
        }
    }

    Ok(config)
}
