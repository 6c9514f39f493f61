use super::args::{Cli, Commands};
use super::handlers;
use crate::config::{Config, resolve_config_path};
use crate::logging;
use crate::presentation::{ConsoleRenderer, TextStyle};
use crate::types::OutputFormat;
use anyhow::Result;
use is_terminal::IsTerminal;

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level);

    let config_path = resolve_config_path(cli.config.as_deref())?;
    let config = Config::load_from(&config_path)?;

    let style = if std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none() {
        TextStyle::Colored
    } else {
        TextStyle::Plain
    };
    let renderer = ConsoleRenderer::new(cli.format == OutputFormat::Json, style);

    let Some(command) = cli.command else {
        return handlers::show::handle(&renderer, &config, None, None, false, None);
    };

    match command {
        Commands::Show {
            month,
            year,
            adjacent,
            select,
        } => handlers::show::handle(&renderer, &config, month, year, adjacent, select),

        Commands::Step {
            direction,
            month,
            year,
        } => handlers::step::handle(&renderer, direction.into(), month, year),

        Commands::Pick {
            month,
            year,
            adjacent,
        } => handlers::pick::handle(&renderer, &config, month, year, adjacent),
    }
}
