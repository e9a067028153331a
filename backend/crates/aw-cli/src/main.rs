//! aw - ad-watch rewards CLI
//!
//! # Examples
//!
//! ```bash
//! aw signup --email a@example.com --password hunter22
//! aw dashboard --pretty
//! aw watch
//! ```

mod cli;
mod commands;

use crate::{cli::Cli, commands::Commands};

use aw_cli::{
    AuthSession, AuthState, AuthUser, Client, GateDecision, LedgerReader, SessionGate, WatchFlow,
    WatchPolicy, WatchState,
};
use aw_config::{Config, SessionFile};

use std::process::ExitCode;

use chrono::Utc;
use clap::Parser;
use serde::Serialize;
use serde_json::{Value, json};

const NOT_SIGNED_IN: &str = "Not signed in. Run `aw login` or `aw signup` first.";

enum Outcome {
    Json(Value),
    Text(String),
}

type CommandResult = Result<Outcome, String>;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::from_filename(".env.local").ok();
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match Config::load().and_then(|c| c.client.validate().map(|_| c)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let server_url = cli
        .server
        .clone()
        .unwrap_or_else(|| config.client.server_url.clone());
    let client = Client::new(&server_url, config.client.api_key.as_deref());
    let state = restore_session(&server_url);

    let result = match cli.command {
        Commands::Signup { email, password } => {
            let session = state.sign_up(&client, &email, &password).await;
            remember(session, &server_url)
        }
        Commands::Login { email, password } => {
            let session = state.sign_in(&client, &email, &password).await;
            remember(session, &server_url)
        }
        Commands::Logout => SessionFile::remove()
            .map(|_| Outcome::Text("Signed out".to_string()))
            .map_err(|e| e.to_string()),
        Commands::Dashboard => dashboard(&state, &client).await,
        Commands::Watch => watch(&state, &client).await,
        Commands::Credit {
            uid,
            points,
            ticket,
        } => {
            let token = state.current().map(|user| user.token);
            client
                .add_points(&uid, points, ticket.as_deref(), token.as_deref())
                .await
                .map_err(|e| e.user_message())
                .and_then(to_json)
        }
        Commands::Rewards => client
            .rewards_policy()
            .await
            .map_err(|e| e.user_message())
            .and_then(to_json),
    };

    match result {
        Ok(Outcome::Text(text)) => {
            println!("{}", text);
            ExitCode::SUCCESS
        }
        Ok(Outcome::Json(value)) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(message) => {
            eprintln!("Error: {}", message);
            ExitCode::FAILURE
        }
    }
}

/// Rebuild the auth state from the stored session, if it is still usable
/// against this server.
fn restore_session(server_url: &str) -> AuthState {
    match SessionFile::read() {
        Ok(Some(session))
            if !session.is_expired(Utc::now())
                && session.server_url.trim_end_matches('/') == server_url.trim_end_matches('/') =>
        {
            AuthState::new(Some(AuthUser {
                uid: session.uid,
                email: session.email,
                token: session.token,
            }))
        }
        _ => AuthState::default(),
    }
}

fn remember(session: aw_cli::CliClientResult<AuthSession>, server_url: &str) -> CommandResult {
    let session = session.map_err(|e| e.user_message())?;

    SessionFile {
        uid: session.uid.clone(),
        email: session.email.clone(),
        token: session.token.clone(),
        expires_at: session.expires_at,
        server_url: server_url.to_string(),
    }
    .write()
    .map_err(|e| e.to_string())?;

    Ok(Outcome::Json(json!({
        "uid": session.uid,
        "email": session.email,
        "expires_at": session.expires_at,
    })))
}

async fn dashboard(state: &AuthState, client: &Client) -> CommandResult {
    let mut gate = SessionGate::new(state, client.clone());

    match gate.decide_once().await {
        GateDecision::Authenticated { user, points } => Ok(Outcome::Json(json!({
            "uid": user.uid,
            "email": user.email,
            "points": points,
        }))),
        GateDecision::RedirectToLogin => Err(NOT_SIGNED_IN.to_string()),
    }
}

async fn watch(state: &AuthState, client: &Client) -> CommandResult {
    let mut gate = SessionGate::new(state, client.clone());

    let user = match gate.decide_once().await {
        GateDecision::Authenticated { user, .. } => user,
        GateDecision::RedirectToLogin => return Err(NOT_SIGNED_IN.to_string()),
    };

    let policy = client
        .rewards_policy()
        .await
        .map_err(|e| e.user_message())?;
    let flow = WatchFlow::new(client.clone(), WatchPolicy::from(&policy));

    let cycle = flow.start(&user).map_err(|e| e.to_string())?;
    println!("{}", WatchState::Watching.message());

    match cycle.await {
        credited @ WatchState::Credited { .. } => {
            let balance = match client.read_points(&user).await {
                Ok(points) => points.unwrap_or(0),
                Err(_) => 0,
            };
            Ok(Outcome::Text(format!(
                "{}\nPoints: {}",
                credited.message(),
                balance
            )))
        }
        WatchState::Errored { reason } => Err(reason),
        other => Err(other.message()),
    }
}

fn to_json<T: Serialize>(value: T) -> CommandResult {
    serde_json::to_value(value)
        .map(Outcome::Json)
        .map_err(|e| e.to_string())
}
