use anyhow::{Context, Result};
use petmap_application::{AuthUseCase, Gateways};

pub async fn sign_in(gateways: &Gateways, email: &str, password: &str) -> Result<()> {
    let auth = AuthUseCase::new(gateways.auth());
    let credentials = auth
        .sign_in(email, password)
        .await
        .context("Sign-in failed")?;

    // The token goes to stdout so it can be captured into PETMAP_TOKEN.
    if let Some(token) = credentials.token() {
        println!("{}", token);
    }
    Ok(())
}

pub async fn sign_up(gateways: &Gateways, name: &str, email: &str, password: &str) -> Result<()> {
    let auth = AuthUseCase::new(gateways.auth());
    let response = auth
        .sign_up(name, email, password)
        .await
        .context("Sign-up failed")?;

    if response.message.is_empty() {
        println!("Registered {}", email);
    } else {
        println!("{}", response.message);
    }
    Ok(())
}
