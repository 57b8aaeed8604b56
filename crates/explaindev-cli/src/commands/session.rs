//! Session commands.

use anyhow::Result;

use crate::app::AppState;

pub async fn sign_in(app: &AppState, email: &str, password: &str) -> Result<()> {
    let user = app.session_store.sign_in(email, password).await?;
    println!("Signed in as {} <{}>", user.display_name, user.email);
    Ok(())
}

pub async fn sign_up(app: &AppState, email: &str, password: &str, name: &str) -> Result<()> {
    let user = app.session_store.sign_up(email, password, name).await?;
    println!("Welcome, {}! Signed in as <{}>", user.display_name, user.email);
    Ok(())
}

pub async fn sign_out(app: &AppState) -> Result<()> {
    app.session_store.sign_out().await?;
    println!("Signed out");
    Ok(())
}

pub async fn whoami(app: &AppState) -> Result<()> {
    match app.session_store.current_user().await {
        Some(user) => println!("{} <{}> (uid {})", user.display_name, user.email, user.uid),
        None => println!("Not signed in"),
    }
    Ok(())
}
