use anyhow::Result;

use crate::session::{SessionStore, User};

use super::args::LoginArgs;

pub(crate) fn handle_login(args: LoginArgs) -> Result<()> {
    let store = SessionStore::open_default()?;

    let mut user = User::new(args.email.trim());
    if let Some(name) = args.name {
        user = user.with_full_name(name.trim());
    }

    store.sign_in(&user)?;
    println!("👋 Signed in as {}", user.display_name());
    Ok(())
}

pub(crate) fn handle_logout() -> Result<()> {
    let store = SessionStore::open_default()?;

    if store.sign_out()? {
        println!("✅ Signed out (removed {}).", store.path().display());
    } else {
        println!("ℹ️  No user was signed in.");
    }
    Ok(())
}

pub(crate) fn handle_whoami() -> Result<()> {
    let session = SessionStore::open_default()?.load()?;

    match session.user {
        Some(user) => {
            println!("👤 {}", user.display_name());
            if user.full_name.is_some() {
                println!("   {}", user.email);
            }
        }
        None => {
            println!("👤 Not signed in.");
            println!("   Run: hackbuddy login --email you@example.com");
        }
    }
    Ok(())
}
