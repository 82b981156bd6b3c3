use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use grantlaunch::criteria::{validate_criteria, AnswerSet};
use grantlaunch::wizard::Session;
use grantlaunch::{config, output, scoring, tui};

const EXIT_SUCCESS: i32 = 0;
const EXIT_TERMINAL: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the interactive assessment wizard (default if no subcommand)
    Wizard,
    /// Score a funder non-interactively from criterion flags
    Score {
        /// Criterion id answered "yes" (repeatable; see `criteria` for ids)
        #[arg(long = "yes", value_name = "ID")]
        yes: Vec<String>,
        /// Funder name substituted into the report
        #[arg(long, default_value = "")]
        name: String,
        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// List the effective criterion set and the ids `score --yes` accepts
    Criteria,
    /// Write a commented starter config file
    Init,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "grantlaunch")]
#[command(about = "Grant funder fit assessment wizard", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to config file (defaults to ~/.config/grantlaunch/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Wizard);
    let config_path = cli.config.map(PathBuf::from);

    // `init` writes a config rather than loading one
    if let Commands::Init = command {
        if let Err(e) = config::write_starter_config(config_path) {
            eprintln!("Init error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
        std::process::exit(EXIT_SUCCESS);
    }

    let config = match config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Validate the effective criterion set at startup
    let criteria = config.effective_criteria();
    if let Err(errors) = validate_criteria(&criteria) {
        eprintln!("Criteria config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let theme = match config.theme.as_deref() {
        None => tui::Theme::Auto,
        Some(value) => match tui::Theme::parse(value) {
            Some(theme) => theme,
            None => {
                eprintln!(
                    "Config error: unknown theme '{}' (expected dark, light, or auto)",
                    value
                );
                std::process::exit(EXIT_CONFIG);
            }
        },
    };

    match command {
        Commands::Wizard => {
            let colors = tui::resolve_theme(theme);
            let app = tui::App::new(Session::new(criteria), colors);
            if let Err(e) = tui::run_tui(app).await {
                eprintln!("Terminal error: {}", e);
                std::process::exit(EXIT_TERMINAL);
            }
        }
        Commands::Score { yes, name, format } => {
            let mut answers = AnswerSet::new(&criteria);
            for id in &yes {
                if !criteria.iter().any(|c| c.id == *id) {
                    eprintln!(
                        "Warning: unknown criterion id '{}' (run `grantlaunch criteria` for the list)",
                        id
                    );
                }
                answers.set(id, true);
            }

            let assessment = scoring::assess(&answers, &name);
            match format {
                OutputFormat::Json => match output::render_json(&assessment) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("Failed to encode report: {}", e);
                        std::process::exit(EXIT_TERMINAL);
                    }
                },
                OutputFormat::Text => {
                    let use_colors = output::should_use_colors();
                    println!("{}", output::format_report(&assessment, &name, use_colors));
                }
            }
        }
        Commands::Criteria => {
            let use_colors = output::should_use_colors();
            println!("{}", output::format_criteria_list(&criteria, use_colors));
        }
        // Handled above, before config load
        Commands::Init => {}
    }

    std::process::exit(EXIT_SUCCESS);
}
