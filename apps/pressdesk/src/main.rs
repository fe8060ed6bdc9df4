//! # Pressdesk
//!
//! Console front end for the content dashboard: posts, articles, blog
//! entries, dashboard metrics and the user directory.

use std::io::{BufRead, Write};
use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;

use pressdesk_core::domain::{ContentKind, Status, UserQuery};
use pressdesk_shared::PageResponse;

mod cli;
mod config;
mod error;
mod pages;
mod render;
mod state;
mod telemetry;

use cli::{Cli, Command, ContentAction};
use config::AppConfig;
use error::{AppError, AppResult};
use pages::{Confirm, ContentListPage, EditorPage};
use state::AppState;
use telemetry::{TelemetryConfig, init_telemetry};

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let telemetry = TelemetryConfig::from_env();
    init_telemetry(&if cli.verbose { telemetry.verbose() } else { telemetry });

    let config = AppConfig::from_env();
    let output = Output { json: cli.json };

    match run(cli.command, &config, &output).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => match err.downcast_ref::<AppError>() {
            Some(app_err) => {
                output.error(app_err);
                ExitCode::from(app_err.exit_code())
            }
            None => {
                tracing::error!("{err:#}");
                eprintln!("error: {err:#}");
                ExitCode::FAILURE
            }
        },
    }
}

async fn run(command: Command, config: &AppConfig, output: &Output) -> anyhow::Result<()> {
    let state = AppState::new(config).await?;

    match command {
        Command::Posts { action } => content(&state, ContentKind::Post, action, output).await?,
        Command::Articles { action } => {
            content(&state, ContentKind::Article, action, output).await?
        }
        Command::Blog { action } => content(&state, ContentKind::BlogPost, action, output).await?,
        Command::Dashboard => {
            let view = pages::dashboard(&state).await?;
            output.show(&view, render::dashboard)?;
        }
        Command::Users { query, role } => {
            let rows = pages::users(&state, &UserQuery { search: query, role });
            output.show(&rows, |rows| render::users(rows))?;
        }
    }

    Ok(())
}

async fn content(
    state: &AppState,
    kind: ContentKind,
    action: ContentAction,
    output: &Output,
) -> AppResult<()> {
    let repo = state.repository(kind);

    match action {
        ContentAction::List { query, status } => {
            let mut page = ContentListPage::new(repo);
            page.search(query);
            page.filter_status(status);
            output.show(&page.render().await?, render::list)
        }
        ContentAction::Show { id } => {
            let detail = EditorPage::new(repo).view(id).await?;
            output.show(&detail, render::detail)
        }
        ContentAction::Create { fields, publish } => {
            let draft = fields.to_draft(publish)?;
            let response = EditorPage::new(repo).create(draft).await?;
            output.page(&response, render::detail)
        }
        ContentAction::Update {
            id,
            fields,
            publish,
            draft,
            clear_image,
        } => {
            let status = match (publish, draft) {
                (true, _) => Some(Status::Published),
                (_, true) => Some(Status::Draft),
                _ => None,
            };
            let patch = fields.to_patch(status, clear_image)?;
            let response = EditorPage::new(repo).save(id, patch).await?;
            output.page(&response, render::detail)
        }
        ContentAction::Delete { id, yes } => {
            let page = ContentListPage::new(repo);
            let response = if yes {
                page.delete(id, &AssumeYes).await?
            } else {
                page.delete(id, &StdinConfirm).await?
            };
            output.page(&response, render::list)
        }
    }
}

/// Writes page results to stdout and notices to stderr.
struct Output {
    json: bool,
}

impl Output {
    fn show<T: Serialize>(&self, value: &T, text: impl FnOnce(&T) -> String) -> AppResult<()> {
        if self.json {
            println!("{}", render::json(value)?);
        } else {
            print!("{}", text(value));
        }
        Ok(())
    }

    fn page<T: Serialize>(
        &self,
        response: &PageResponse<T>,
        text: impl FnOnce(&T) -> String,
    ) -> AppResult<()> {
        if let Some(route) = &response.navigate_to {
            tracing::debug!(%route, "Navigate");
        }
        if self.json {
            println!("{}", render::json(response)?);
            return Ok(());
        }

        if let Some(message) = &response.message {
            println!("{message}");
        }
        if let Some(data) = &response.data {
            print!("{}", text(data));
        }
        Ok(())
    }

    fn error(&self, err: &AppError) {
        let notice = err.notice();
        if self.json {
            if let Ok(body) = render::json(&notice) {
                eprintln!("{body}");
                return;
            }
        }
        eprint!("{}", render::notice(&notice));
    }
}

struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}

/// Asks on stderr and reads the answer from stdin.
struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        eprint!("{prompt} [y/N] ");
        let _ = std::io::stderr().flush();

        let mut answer = String::new();
        if std::io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
    }
}
