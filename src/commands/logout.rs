use crate::{
    libs::{messages::Message, session::Session},
    msg_success,
};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    Session::clear()?;
    msg_success!(Message::LoggedOut);
    Ok(())
}
