use crate::{
    db::store::Store,
    libs::{messages::Message, session::Session},
    msg_bail_anyhow, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input, Password};

#[derive(Debug, Args)]
pub struct LoginArgs {
    /// Email used at signup
    #[arg(short, long)]
    email: Option<String>,
}

pub fn cmd(args: LoginArgs) -> Result<()> {
    let email = match args.email {
        Some(email) => email,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptEmail.to_string())
            .interact_text()?,
    };
    let password = Password::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptPassword.to_string())
        .interact()?;

    if email.is_empty() || password.is_empty() {
        msg_bail_anyhow!(Message::FieldsRequired);
    }

    let store = Store::open_default()?;
    let Some(user_id) = store.validate_credentials(&email, &password)? else {
        msg_bail_anyhow!(Message::InvalidCredentials);
    };

    Session::new(user_id, &email).save()?;
    msg_success!(Message::LoginSuccessful(email));
    Ok(())
}
