//! Application configuration initialization command.
//!
//! Runs the interactive setup wizard, or removes the configuration with
//! `--delete`.

use crate::{
    libs::{config::Config, data_storage::DataStorage, messages::Message},
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Remove existing configuration instead of creating new one
    #[arg(short, long)]
    delete: bool,
}

pub fn cmd(init_args: InitArgs) -> Result<()> {
    if init_args.delete {
        Config::delete_from(&DataStorage::new())?;
        msg_success!(Message::ConfigDeleted);
        return Ok(());
    }

    Config::init()?.save()?;

    msg_success!(Message::ConfigSaved);
    Ok(())
}
