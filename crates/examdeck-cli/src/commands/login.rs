//! The `examdeck login` command.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;

use examdeck_providers::{load_config_from, MockAuth, SessionContext};

pub async fn execute(
    email: String,
    password: String,
    register: Option<String>,
    config: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config.as_deref())?;
    let provider = Arc::new(MockAuth::new(Duration::from_millis(config.mock_latency_ms)));
    let mut ctx = SessionContext::new(provider);

    let user = match register {
        Some(name) => ctx.register(&name, &email, &password).await?,
        None => ctx.login(&email, &password).await?,
    };

    println!("Signed in as {} <{}>", user.name, user.email);
    if let Some(url) = &user.avatar_url {
        println!("Avatar: {url}");
    }

    Ok(())
}
