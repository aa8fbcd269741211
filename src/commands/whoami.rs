use super::current_user;
use crate::{
    libs::{messages::Message, view::View},
    msg_error_anyhow, msg_print,
};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let (store, email) = current_user()?;
    let user = store.user(&email)?.ok_or_else(|| msg_error_anyhow!(Message::UserNotFound))?;

    msg_print!(Message::ProfileHeader, true);
    View::profile(&user);
    View::notification_window(&user.notifications);
    Ok(())
}
