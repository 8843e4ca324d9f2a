use crate::{
    api::journal_client::JournalClient,
    config::Config,
    models::{
        auth::{ForgotPasswordPayload, LoginPayload, RegisterPayload, ResetPasswordPayload},
        session::Session,
    },
};
use anyhow::Result;

pub async fn login(config: &Config, email: &str, password: &str) -> Result<()> {
    let payload = LoginPayload::new(email, password)?;
    let token = JournalClient::new(config)?.login(&payload).await?;

    let mut session = Session::load(&config.session_file)?;
    session.store(token)?;

    tracing::info!(email = %payload.email, "Logged in");
    println!("Welcome back. Signed in as {}.", payload.email);

    Ok(())
}

pub async fn register(config: &Config, name: &str, email: &str, password: &str) -> Result<()> {
    let payload = RegisterPayload::new(name, email, password)?;
    let token = JournalClient::new(config)?.register(&payload).await?;

    let mut session = Session::load(&config.session_file)?;
    session.store(token)?;

    tracing::info!(email = %payload.email, "Account created");
    println!("Account created. Signed in as {}.", payload.email);

    Ok(())
}

pub fn logout(config: &Config) -> Result<()> {
    let mut session = Session::load(&config.session_file)?;

    if !session.is_authenticated() {
        println!("Not logged in.");
        return Ok(());
    }

    session.clear()?;
    println!("Logged out.");

    Ok(())
}

pub async fn forgot_password(config: &Config, email: &str) -> Result<()> {
    let payload = ForgotPasswordPayload::new(email)?;
    let msg = JournalClient::new(config)?
        .forgot_password(&payload)
        .await?;

    println!(
        "{}",
        msg.unwrap_or_else(|| format!("Verification code sent to {}.", payload.email))
    );

    Ok(())
}

pub async fn reset_password(
    config: &Config,
    email: &str,
    code: &str,
    new_password: &str,
    confirm_password: &str,
) -> Result<()> {
    let payload = ResetPasswordPayload::new(email, code, new_password, confirm_password)?;
    let msg = JournalClient::new(config)?.reset_password(&payload).await?;

    println!(
        "{}",
        msg.unwrap_or_else(|| "Password reset. You can now sign in.".to_string())
    );

    Ok(())
}
