#![forbid(unsafe_code)]
use anyhow::Result;
use chrono::Utc;
use clap::{Parser, Subcommand};
use rotacheck::{
    checker::check_conflicts,
    grid::{GridOptions, MAX_BLOCK_MINUTES},
    io,
    model::StaffDirectory,
    report::{ReportRenderer, TextReport},
    storage::{ConflictLog, JsonStorage, Storage},
    time::format_time,
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI de vérification d'une grille de rotation
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Journal JSON des conflits du dernier contrôle
    #[arg(long, global = true, default_value = "conflicts.json")]
    log_file: String,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Vérifier la grille contre les fiches équipe
    Check {
        /// Grille CSV (postes en colonnes, créneaux en lignes)
        #[arg(long)]
        grid: String,
        /// Fiches équipe (JSON, ou CSV selon l'extension)
        #[arg(long)]
        team: String,
        /// Durée d'un créneau de la grille (1 à 1440 minutes)
        #[arg(
            long,
            default_value_t = 60,
            value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_BLOCK_MINUTES))
        )]
        block_minutes: u32,
        /// Export CSV des conflits (optionnel)
        #[arg(long)]
        report: Option<String>,
        /// Export JSON détaillé des conflits (optionnel)
        #[arg(long)]
        out_json: Option<String>,
    },

    /// Afficher le journal du dernier contrôle
    Log,

    /// Lister les fiches équipe avec leurs horaires
    Profiles {
        #[arg(long)]
        team: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let storage = JsonStorage::open(&cli.log_file)?;

    let code = match cli.cmd {
        Commands::Check {
            grid,
            team,
            block_minutes,
            report,
            out_json,
        } => {
            let opts = GridOptions { block_minutes };
            let entries = io::import_grid_csv(grid)?.entries(opts);
            let records = io::import_team(team)?;
            let staff = StaffDirectory::from_records(&records);

            let conflicts = check_conflicts(&entries, &staff);
            println!("{}", TextReport.render(&conflicts));

            let messages = conflicts.iter().map(|c| c.message.clone()).collect();
            storage.save(&ConflictLog::new(messages, Utc::now()))?;

            if let Some(path) = report {
                io::export_conflicts_csv(path, &conflicts)?;
            }
            if let Some(path) = out_json {
                io::export_conflicts_json(path, &conflicts)?;
            }

            if conflicts.is_empty() {
                0
            } else {
                eprintln!("Found {} conflict(s)", conflicts.len());
                // Code 2 = WARNING/INCOMPLETE
                2
            }
        }
        Commands::Log => {
            let log = storage.load()?;
            println!("{} | {}", log.id, log.generated_at.to_rfc3339());
            if log.conflicts.is_empty() {
                println!("No conflicts found.");
            }
            for line in &log.conflicts {
                println!("{line}");
            }
            0
        }
        Commands::Profiles { team } => {
            let records = io::import_team(team)?;
            let staff = StaffDirectory::from_records(&records);
            // impression compacte
            for p in staff.iter() {
                let mut line = format!(
                    "{} | {} → {} | meal {} → {}",
                    p.initials,
                    format_time(p.shift_start),
                    format_time(p.shift_end),
                    format_time(p.meal1_start),
                    format_time(p.meal1_end)
                );
                if p.meal2_start.is_some() || p.meal2_end.is_some() {
                    line.push_str(&format!(
                        " | meal {} → {}",
                        format_time(p.meal2_start),
                        format_time(p.meal2_end)
                    ));
                }
                println!("{line}");
            }
            0
        }
    };

    std::process::exit(code);
}
