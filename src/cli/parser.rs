use crate::export::ExportFormat;
use crate::models::workout_type::WorkoutType;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rWorkouts
#[derive(Parser)]
#[command(
    name = "rworkouts",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple workout tracker CLI: log runs and rides with their position, pace and speed",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Current position as LAT,LNG (overrides `home_position` from the config)
    #[arg(global = true, long = "position", allow_hyphen_values = true)]
    pub position: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        /// Print the current configuration file to stdout
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        /// Edit the configuration file with your preferred editor
        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        /// Specify the editor to use (overrides $EDITOR/$VISUAL).
        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Record a new workout
    ///
    /// Examples:
    ///   rworkouts add running 5.2 24 178 --at 40.7,-74.0
    ///   rworkouts add cycling 25 95 523 --at 40.7,-74.0
    #[command(allow_negative_numbers = true)]
    Add {
        /// Workout type: running or cycling
        #[arg(value_enum)]
        kind: WorkoutType,

        /// Distance in km
        distance: f64,

        /// Duration in minutes
        duration: f64,

        /// Cadence in steps/min (running) or elevation gain in meters (cycling)
        metric: f64,

        /// Position of the workout as LAT,LNG (defaults to the current position)
        #[arg(long = "at", allow_hyphen_values = true)]
        at: Option<String>,
    },

    /// List recorded workouts
    List {
        /// Show one multi-line entry per workout instead of a table
        #[arg(long = "details", help = "Show one detailed entry per workout")]
        details: bool,

        /// Only show workouts of this type
        #[arg(long = "type", value_enum)]
        kind: Option<WorkoutType>,
    },

    /// Center the map on a workout's popup
    Show {
        /// Workout id (see `list`)
        id: String,
    },

    /// Render the map with a marker for every workout
    Map,

    /// Delete every stored workout
    Reset {
        /// Do not ask for confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the internal log table
    Log {
        /// Print rows from the internal `log` table
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Export workouts
    Export {
        /// Export format: csv, json
        #[arg(long, value_enum, value_name = "FORMAT", default_value = "csv")]
        format: ExportFormat,

        /// Output file path
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}
