use anyhow::Result;
use clap::{Parser, Subcommand};
use tripcraft::cli::{self, PlanInput, Removal};

/// tripcraft - Plan your perfect trip
#[derive(Parser)]
#[command(name = "tripcraft")]
#[command(about = "Day-by-day travel itineraries from your trip preferences", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an itinerary from trip preferences
    Plan {
        /// Where you are travelling to
        #[arg(long)]
        location: String,

        /// Trip length: 1-2, 3-5, 1-week, 2-weeks, 3-weeks or 1-month
        #[arg(long)]
        duration: String,

        #[arg(long)]
        age_range: Option<String>,

        #[arg(long)]
        group_size: Option<String>,

        /// Repeat for several interests
        #[arg(long = "interest")]
        interests: Vec<String>,

        #[arg(long)]
        mobility: Option<String>,

        #[arg(long)]
        budget: Option<String>,

        /// Special requests or other preferences
        #[arg(long)]
        notes: Option<String>,

        /// First day of the trip as YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<String>,

        /// Remove an activity after generation, as <day>:<activity id>
        #[arg(long = "remove")]
        removals: Vec<Removal>,

        /// Fabricate a share link
        #[arg(long)]
        share: bool,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List the activity catalog
    Catalog {
        #[arg(long)]
        json: bool,
    },
    /// List accepted values for each preference
    Options,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = tripcraft::Config::load(cli.config)?;
    config.validate()?;

    tripcraft::observability::init_observability(
        &config.observability.log_level,
        config.observability.json,
    )?;

    match cli.command {
        Commands::Plan {
            location,
            duration,
            age_range,
            group_size,
            interests,
            mobility,
            budget,
            notes,
            date,
            removals,
            share,
            json,
        } => cli::plan(
            config,
            PlanInput {
                location,
                duration,
                age_range,
                group_size,
                interests,
                mobility,
                budget,
                notes,
                date,
                removals,
                share,
                json,
            },
        ),
        Commands::Catalog { json } => cli::list_catalog(json),
        Commands::Options => {
            cli::list_options();
            Ok(())
        }
    }
}
