use crate::{
    db::{error::StoreError, store::Store},
    libs::{
        messages::Message,
        user::{NewUser, DEFAULT_DAILY_GOAL},
    },
    msg_bail_anyhow, msg_error_anyhow, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input, Password};

#[derive(Debug, Args)]
pub struct SignupArgs {
    /// Display name
    #[arg(short, long)]
    name: Option<String>,
    /// Email used to log in
    #[arg(short, long)]
    email: Option<String>,
    /// Daily goal in millilitres
    #[arg(short, long)]
    goal: Option<u32>,
}

pub fn cmd(args: SignupArgs) -> Result<()> {
    let name = match args.name {
        Some(name) => name,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptName.to_string())
            .interact_text()?,
    };
    let email = match args.email {
        Some(email) => email,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptEmail.to_string())
            .interact_text()?,
    };
    let goal = match args.goal {
        Some(goal) => goal,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDailyGoal.to_string())
            .default(DEFAULT_DAILY_GOAL)
            .interact_text()?,
    };
    let password = Password::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptPassword.to_string())
        .with_confirmation(Message::PromptPasswordConfirm.to_string(), Message::PasswordsDoNotMatch.to_string())
        .interact()?;

    if name.is_empty() || email.is_empty() || password.is_empty() {
        msg_bail_anyhow!(Message::FieldsRequired);
    }

    let store = Store::open_default()?;
    match store.create_user(&NewUser::new(&name, &email, &password, goal)) {
        Ok(_) => {
            msg_success!(Message::UserCreated(email));
            Ok(())
        }
        Err(StoreError::ConstraintViolation(_)) => Err(msg_error_anyhow!(Message::UserAlreadyExists(email))),
        Err(e) => Err(msg_error_anyhow!(Message::UserCreateFailed(e.to_string()))),
    }
}
