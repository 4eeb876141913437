//! Freight CLI - interactive record keeper and transport cost estimator for
//! rural properties.
//!
//! Starts a numbered menu over the four JSON documents kept in the data
//! directory. All prompts and messages are in Portuguese.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use freight_core::VERSION;

mod app;
mod commands;
mod config;
mod prompt;
mod shell;
mod ui;

use app::App;
use prompt::TerminalPrompter;
use ui::{print_error, print_info, TermEnv, UiContext};

/// Pause before exiting on an unexpected error.
const ERROR_PAUSE: Duration = Duration::from_secs(3);

/// Simulador de Logística de Transporte Rural
#[derive(Parser)]
#[command(name = "freight")]
#[command(author, version = VERSION, long_about = None)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Use ASCII symbols instead of unicode
    #[arg(long)]
    ascii: bool,
}

fn main() {
    let cli = Cli::parse();
    let ui = UiContext::new(&TermEnv::detect(), cli.no_color, cli.ascii);

    if let Err(err) = run(&cli, ui.clone()) {
        print_error(&ui, &format!("Erro inesperado: {:#}", err), None);
        std::thread::sleep(ERROR_PAUSE);
        std::process::exit(1);
    }
}

fn run(cli: &Cli, ui: UiContext) -> anyhow::Result<()> {
    let config = config::load(cli.config.as_deref())?;
    let prompter = Box::new(TerminalPrompter::new(ui.interactive));
    let mut app = App::open(config, ui, prompter)?;

    print_info(
        &app.ui,
        &format!(
            "Arquivos de dados serão armazenados em: {}",
            app.store.data_dir().display()
        ),
    );
    print_info(
        &app.ui,
        "Simulador de Logística de Transporte Rural iniciado com sucesso!",
    );

    shell::run(&mut app)
}
