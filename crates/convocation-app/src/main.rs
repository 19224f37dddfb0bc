//! Convocation registration client - main entry point.

mod config;
mod error;
mod ui;

use crate::config::Config;
use crate::error::AppResult;
use crate::ui::Prompter;
use anyhow::Context;
use auth_client::{AuthClient, OAuthProvider};
use profile_client::ProfileClient;
use registration_form::{FormController, FormStatus, Navigation};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> AppResult<()> {
    // Load configuration
    let config = Config::load().context("Failed to load configuration")?;

    // Initialize logging
    init_logging(&config.app.log_level);

    info!("Starting convocation registration client...");

    // Initialize clients
    let auth = Arc::new(
        AuthClient::new(
            config.auth_base_url(),
            &config.supabase.anon_key,
            config.app.request_timeout,
        )
        .context("Failed to create auth client")?,
    );

    let profiles = Arc::new(
        ProfileClient::new(
            config.functions_base_url(),
            &config.supabase.anon_key,
            config.app.request_timeout,
        )
        .context("Failed to create profile client")?,
    );

    let mut prompter = Prompter::new();

    // Establish a session: either a configured refresh token, or an
    // interactive OAuth sign-in pasted back from the browser.
    let refresh_token = match &config.supabase.refresh_token {
        Some(token) => token.clone(),
        None => {
            println!("Sign in with Google:");
            println!(
                "  {}",
                auth.authorize_url(OAuthProvider::Google, &config.app.redirect_url)
            );
            prompter.ask("Paste the refresh token from the callback").await?
        }
    };

    if let Err(e) = auth.refresh_session(&refresh_token).await {
        error!("Sign-in failed: {}", e);
        ui::render_login_redirect(Some(&e.to_string()));
        return Ok(());
    }
    info!("Session established");

    // Mount the form
    let mut controller = FormController::new(auth.clone(), profiles.clone());
    if let Some(nav) = controller.load().await {
        return navigate(nav, &controller);
    }

    ui::render(&controller.view());

    if *controller.status() != FormStatus::Editable {
        // Locked: the server already holds a registration; nothing to edit.
        return Ok(());
    }

    // Edit loop: collect guest count and any required guardian names, then
    // submit. Retries stay in the loop; navigation exits it.
    loop {
        let raw = prompter.ask("Number of guests (0-2)").await?;
        controller.set_guest_count(&raw);

        let view = controller.view();
        if let Some(error) = &view.guest_error {
            println!("  ! {}", error);
            continue;
        }
        if view.guest_count.is_none() {
            continue;
        }

        if view.guardian_1.is_some() {
            let name = prompter.ask("Guardian 1 name").await?;
            controller.set_guardian_1(&name);
        }
        if view.guardian_2.is_some() {
            let name = prompter.ask("Guardian 2 name").await?;
            controller.set_guardian_2(&name);
        }

        if !controller.is_submittable() {
            println!("  ! Registration is incomplete; please fill every field.");
            continue;
        }

        match controller.submit().await {
            Some(nav) => return navigate(nav, &controller),
            None => {
                // Conflict locks the form; other failures allow a retry.
                ui::render(&controller.view());
                if *controller.status() == FormStatus::Locked {
                    return Ok(());
                }
            }
        }
    }
}

/// Follow a navigation out of the form.
fn navigate<S, P>(nav: Navigation, controller: &FormController<S, P>) -> AppResult<()>
where
    S: registration_form::SessionProvider,
    P: registration_form::ProfileService,
{
    match nav {
        Navigation::Ticket => ui::render_ticket(&controller.view()),
        Navigation::Login { error } => ui::render_login_redirect(error.as_deref()),
    }
    Ok(())
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
