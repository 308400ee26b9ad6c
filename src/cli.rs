use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// SeatMatrix - explore K-CET seat availability by category and college
#[derive(Parser)]
#[command(name = "seatmatrix")]
#[command(about = "Explore the K-CET seat matrix and make informed counselling choices")]
#[command(version)]
pub struct Cli {
    /// Seat matrix workbook (overrides the config file)
    #[arg(short, long, global = true)]
    pub data: Option<PathBuf>,

    /// Worksheet to read (defaults to the first sheet)
    #[arg(short, long, global = true)]
    pub sheet: Option<String>,

    /// JSON file replacing the built-in category fallback table
    #[arg(short, long, global = true)]
    pub fallback: Option<PathBuf>,

    /// Dashboard configuration file (JSON)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Write logs to this file (the dashboard is otherwise silent)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Run the interactive dashboard
    Tui,
    /// List the category codes found in the workbook
    Categories,
    /// List the colleges found in the workbook
    Colleges,
    /// Print the fallback chain of a category
    Resolve {
        /// Category code (e.g. 1R, SCG, GM)
        category: String,
    },
    /// Show the seat matrix of one college for one category
    Query {
        /// College name, matched exactly
        #[arg(short = 'C', long)]
        college: String,
        /// Category code
        #[arg(short = 'k', long)]
        category: String,
        /// Emit JSON instead of a text table
        #[arg(long)]
        json: bool,
    },
    /// Show every college's seats for one category
    Overview {
        /// Category code
        #[arg(short = 'k', long)]
        category: String,
        /// Emit JSON instead of a text table
        #[arg(long)]
        json: bool,
    },
    /// Check that every fallback category exists in the workbook
    Validate,
    /// Write the effective configuration to a JSON file
    SaveConfig {
        /// Destination path
        path: PathBuf,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        <Self as clap::Parser>::parse()
    }

    /// True when the interactive dashboard will run
    pub fn is_interactive(&self) -> bool {
        matches!(self.command, None | Some(Commands::Tui))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_no_args() {
        // Running with no args should succeed (defaults to TUI mode)
        let result = Cli::try_parse_from(["seatmatrix"]);
        assert!(result.is_ok());
        let cli = result.unwrap();
        assert!(cli.command.is_none());
        assert!(cli.is_interactive());
    }

    #[test]
    fn test_cli_query_command() {
        let cli = Cli::try_parse_from([
            "seatmatrix",
            "--data",
            "/tmp/cet_matrix.xlsx",
            "query",
            "--college",
            "ABC Engineering College",
            "--category",
            "1R",
        ])
        .unwrap();
        assert_eq!(cli.data.unwrap().to_str().unwrap(), "/tmp/cet_matrix.xlsx");
        match cli.command {
            Some(Commands::Query {
                college,
                category,
                json,
            }) => {
                assert_eq!(college, "ABC Engineering College");
                assert_eq!(category, "1R");
                assert!(!json);
            }
            _ => panic!("Expected Query command"),
        }
    }

    #[test]
    fn test_cli_global_flag_after_subcommand() {
        let cli =
            Cli::try_parse_from(["seatmatrix", "colleges", "--sheet", "Engineering"]).unwrap();
        assert_eq!(cli.sheet.as_deref(), Some("Engineering"));
        assert_eq!(cli.command, Some(Commands::Colleges));
        assert!(!cli.is_interactive());
    }

    #[test]
    fn test_cli_resolve_command() {
        let cli = Cli::try_parse_from(["seatmatrix", "resolve", "SCK"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Resolve {
                category: "SCK".to_string()
            })
        );
    }

    #[test]
    fn test_cli_overview_json() {
        let cli =
            Cli::try_parse_from(["seatmatrix", "overview", "-k", "GM", "--json"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Overview {
                category: "GM".to_string(),
                json: true
            })
        );
    }

    #[test]
    fn test_cli_save_config_command() {
        let cli = Cli::try_parse_from([
            "seatmatrix",
            "--data",
            "seats_2024.xlsx",
            "save-config",
            "dashboard.json",
        ])
        .unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::SaveConfig {
                path: PathBuf::from("dashboard.json")
            })
        );
        assert!(!cli.is_interactive());
    }

    #[test]
    fn test_cli_query_requires_college() {
        let result = Cli::try_parse_from(["seatmatrix", "query", "--category", "1R"]);
        assert!(result.is_err());
    }
}
