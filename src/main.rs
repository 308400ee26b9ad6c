//! SeatMatrix - Main entry point
//!
//! Parses the command line, loads the seat matrix once, then either starts the
//! interactive dashboard or runs a headless command.

use anyhow::{Context, Result};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::File;
use std::io::stdout;
use std::sync::Mutex;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

use seatmatrix::cli::{Cli, Commands};
use seatmatrix::logic::filter::{all_colleges, category_options, college_options, NO_DATA_MESSAGE};
use seatmatrix::{
    load_workbook, App, DashboardConfig, FallbackTable, QueryOutcome, QueryRequest, SeatMatrix,
    SeatMatrixError,
};

/// Initialize tracing with appropriate settings.
///
/// `RUST_LOG` overrides the default `info` level. The dashboard owns the
/// terminal, so it only logs when `--log-file` is given.
fn init_logging(cli: &Cli) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(true)
        .with_line_number(true);

    match &cli.log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {:?}", path))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        None if cli.is_interactive() => builder.with_writer(std::io::sink).init(),
        None => builder.with_writer(std::io::stderr).init(),
    }
    Ok(())
}

/// Merge the config file (if any) with command-line overrides
fn load_config(cli: &Cli) -> Result<DashboardConfig> {
    let base = match &cli.config {
        Some(path) => DashboardConfig::load_from_file(path)?,
        None => DashboardConfig::default(),
    };
    let config = base.with_overrides(cli.data.clone(), cli.sheet.clone(), cli.fallback.clone());
    config.validate().context("Invalid configuration")?;
    debug!("Configuration resolved: {:?}", config);
    Ok(config)
}

/// Main application entry point
fn main() -> Result<()> {
    let cli = Cli::parse_args();
    init_logging(&cli)?;
    info!("SeatMatrix {} starting up", env!("CARGO_PKG_VERSION"));

    let config = load_config(&cli)?;
    let fallback = config.load_fallback_table()?;
    let command = cli.command.clone().unwrap_or(Commands::Tui);

    // Neither of these needs a workbook
    match &command {
        Commands::Resolve { category } => {
            if !fallback.contains(category) {
                warn!("Category '{}' has no fallback entry; using it alone", category);
            }
            println!("{}", fallback.resolve(category).join(" -> "));
            return Ok(());
        }
        Commands::SaveConfig { path } => {
            config.save_to_file(path)?;
            info!("Configuration written to {:?}", path);
            println!("✓ Configuration saved to {}", path.display());
            return Ok(());
        }
        _ => {}
    }

    let matrix = load_workbook(&config.data_file, config.sheet.as_deref()).map_err(|e| {
        error!("Failed to load seat matrix: {}", e);
        e
    })?;

    match command {
        Commands::Tui => run_tui(matrix, fallback),
        Commands::Categories => {
            category_options(&matrix).iter().for_each(|c| println!("{}", c));
            Ok(())
        }
        Commands::Colleges => {
            college_options(&matrix).iter().for_each(|c| println!("{}", c));
            Ok(())
        }
        Commands::Query {
            college,
            category,
            json,
        } => run_query(&matrix, &fallback, QueryRequest { category, college }, json),
        Commands::Overview { category, json } => {
            let table = all_colleges(&matrix, &fallback.resolve(&category))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&table)?);
            } else {
                println!("Displaying seat matrix for {} across all colleges:", category);
                print!("{}", table);
            }
            Ok(())
        }
        Commands::Validate => validate(&matrix, &fallback),
        Commands::Resolve { .. } | Commands::SaveConfig { .. } => Ok(()),
    }
}

/// Print one college query as text or JSON
fn run_query(
    matrix: &SeatMatrix,
    fallback: &FallbackTable,
    request: QueryRequest,
    json: bool,
) -> Result<()> {
    info!("Query: {} in {}", request.category, request.college);
    match request.run(matrix, fallback)? {
        QueryOutcome::Rows(table) if json => {
            println!("{}", serde_json::to_string_pretty(&table)?);
        }
        QueryOutcome::Rows(table) => {
            println!("{}", request.success_message());
            print!("{}", table);
        }
        QueryOutcome::NoData if json => {
            let body = serde_json::json!({ "message": NO_DATA_MESSAGE, "rows": [] });
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
        QueryOutcome::NoData => println!("{}", NO_DATA_MESSAGE),
    }
    Ok(())
}

/// Check that every category the fallback table names is a column.
///
/// Rows whose category counts exceed their Total are reported as warnings.
fn validate(matrix: &SeatMatrix, fallback: &FallbackTable) -> Result<()> {
    for row in matrix.rows_over_total() {
        warn!("Category counts exceed Total for {} / {}", row.college_name, row.branch_name);
        println!(
            "! {} / {}: category seats {} exceed Total {}",
            row.college_name,
            row.branch_name,
            row.tracked_seats(),
            row.total
        );
    }

    let missing: Vec<&str> = fallback
        .referenced_columns()
        .into_iter()
        .filter(|column| !matrix.has_column(column))
        .collect();

    if missing.is_empty() {
        info!("Fallback table validated against {} rows", matrix.len());
        println!(
            "✓ All {} fallback categories are present ({} rows)",
            fallback.referenced_columns().len(),
            matrix.len()
        );
        Ok(())
    } else {
        error!("Fallback categories missing from the seat matrix: {:?}", missing);
        eprintln!("✗ Missing category columns: {}", missing.join(", "));
        std::process::exit(1);
    }
}

/// Run the interactive dashboard
fn run_tui(matrix: SeatMatrix, fallback: FallbackTable) -> Result<()> {
    debug!("Initializing terminal for TUI mode");

    enable_raw_mode()
        .map_err(|e| SeatMatrixError::terminal(format!("Failed to enable raw mode: {}", e)))?;
    if let Err(e) = crossterm::execute!(stdout(), EnterAlternateScreen) {
        let _ = disable_raw_mode();
        let message = format!("Failed to enter alternate screen: {}", e);
        return Err(SeatMatrixError::terminal(message).into());
    }

    let backend = CrosstermBackend::new(stdout());
    let result = Terminal::new(backend)
        .map_err(|e| SeatMatrixError::terminal(format!("Failed to create terminal: {}", e)))
        .and_then(|mut terminal| {
            let mut app = App::new(matrix, fallback);
            let result = app.run(&mut terminal);
            let _ = terminal.show_cursor();
            result
        });

    // Cleanup terminal (always attempt cleanup, even if app failed)
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(stdout(), LeaveAlternateScreen);

    result.map_err(Into::into)
}
