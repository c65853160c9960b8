//! Terminal client: wires arguments to the gateway and views, prints results.

use crate::args::{Cli, Commands};
use chrono::{NaiveDate, Utc};
use clinicdesk::config::ClinicConfig;
use clinicdesk::error::Result;
use clinicdesk::gateway::MockGateway;
use clinicdesk::store::memory::InMemoryStore;
use clinicdesk::store::Snapshot;

pub mod handlers;
pub mod print;
pub mod shell;

/// Per-command output settings. Shell lines may override them.
#[derive(Debug, Clone, Copy)]
pub struct ViewOptions {
    pub today: NaiveDate,
    pub json: bool,
}

impl ViewOptions {
    pub fn for_line(&self, line: &Cli) -> Self {
        Self {
            today: line.today.unwrap_or(self.today),
            json: self.json || line.json,
        }
    }
}

pub struct AppContext {
    pub gateway: MockGateway<InMemoryStore>,
    pub options: ViewOptions,
}

pub async fn run(cli: Cli) -> Result<()> {
    let ctx = init_context(&cli).await?;

    match cli.command {
        Some(Commands::Shell) => shell::run(&ctx).await,
        command => handlers::dispatch(&ctx.gateway, &ctx.options, command).await,
    }
}

async fn init_context(cli: &Cli) -> Result<AppContext> {
    let config = ClinicConfig::load(cli.config.as_deref())?;
    let seed = cli.seed.clone().or_else(|| config.seed_file.clone());

    let gateway = MockGateway::new(InMemoryStore::new(), config);
    if let Some(path) = seed {
        gateway.load(Snapshot::from_file(&path)?).await;
    }

    Ok(AppContext {
        gateway,
        options: ViewOptions {
            today: cli.today.unwrap_or_else(|| Utc::now().date_naive()),
            json: cli.json,
        },
    })
}
