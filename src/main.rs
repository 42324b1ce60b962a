use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::time::Instant;

use job_match::error::MatchError;
use job_match::model::{CandidateProfile, ExperienceRange, JobType, SalaryRange};
use job_match::store::{JobQuery, MemoryStore, ProfileRepository};

const EXIT_SUCCESS: i32 = 0;
const EXIT_NOT_FOUND: i32 = 1;
const EXIT_DATA: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(ValueEnum, Clone, Copy, Debug, Default)]
enum OutputFormat {
    #[default]
    Table,
    Tsv,
    Json,
}

#[derive(Subcommand, Debug)]
enum ProfileCommand {
    /// Print a stored profile as JSON
    Show { id: String },
    /// Add or replace a profile from a JSON file
    Import { file: PathBuf },
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Rank all jobs for a profile, best match first
    Rank {
        profile_id: String,
        /// Maximum number of matches to show (defaults to config default_limit)
        #[arg(short, long)]
        limit: Option<usize>,
        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,
    },
    /// Show the full breakdown for one profile and one job
    Score {
        profile_id: String,
        job_id: String,
        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,
    },
    /// Search jobs by text and filters
    Search {
        /// Matched against title, company, description and skills
        query: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long, value_enum)]
        job_type: Option<JobType>,
        /// Only remote jobs
        #[arg(long, conflicts_with = "onsite")]
        remote: bool,
        /// Only on-site jobs
        #[arg(long)]
        onsite: bool,
        #[arg(long, requires = "salary_max")]
        salary_min: Option<u64>,
        #[arg(long, requires = "salary_min")]
        salary_max: Option<u64>,
        #[arg(long, requires = "exp_max")]
        exp_min: Option<u32>,
        #[arg(long, requires = "exp_min")]
        exp_max: Option<u32>,
    },
    /// Manage candidate profiles
    Profile {
        #[command(subcommand)]
        command: ProfileCommand,
    },
    /// Write a default config file
    Init,
}

#[derive(Parser, Debug)]
#[command(name = "job-match")]
#[command(about = "Rank job postings against a candidate profile", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/job-match/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

fn fail(code: i32, message: impl std::fmt::Display) -> ! {
    eprintln!("{}", message);
    std::process::exit(code);
}

fn exit_code_for(err: &MatchError) -> i32 {
    match err {
        MatchError::ProfileNotFound(_) | MatchError::JobNotFound(_) => EXIT_NOT_FOUND,
        MatchError::InvalidRange { .. } => EXIT_DATA,
    }
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => fail(EXIT_DATA, format!("Failed to serialize output: {}", e)),
    }
}

fn main() {
    let cli = Cli::parse();
    job_match::logging::init(cli.verbose);
    let start_time = Instant::now();

    let config_path = cli.config.map(PathBuf::from);

    if let Commands::Init = cli.command {
        let path = match config_path {
            Some(p) => p,
            None => job_match::config::get_config_path()
                .unwrap_or_else(|e| fail(EXIT_CONFIG, format!("Config error: {:#}", e))),
        };
        match job_match::config::write_default_config(&path) {
            Ok(_) => println!("Wrote default config to {}", path.display()),
            Err(e) => fail(EXIT_CONFIG, format!("Config error: {:#}", e)),
        }
        std::process::exit(EXIT_SUCCESS);
    }

    // Load config
    let config = job_match::config::load_config(config_path)
        .unwrap_or_else(|e| fail(EXIT_CONFIG, format!("Config error: {:#}", e)));

    // Validate scoring config at startup
    let scoring = config.scoring.clone().unwrap_or_default();
    if let Err(errors) = job_match::scoring::validate_scoring(&scoring) {
        eprintln!("Scoring config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let data_path = match config.data_file.clone() {
        Some(p) => p,
        None => job_match::store::get_data_path()
            .unwrap_or_else(|e| fail(EXIT_CONFIG, format!("Config error: {:#}", e))),
    };
    let mut store: MemoryStore = job_match::store::load_store(&data_path)
        .unwrap_or_else(|e| fail(EXIT_DATA, format!("Data error: {:#}", e)));

    tracing::debug!(
        jobs = store.jobs.len(),
        profiles = store.profiles.len(),
        "data loaded in {:?}",
        start_time.elapsed()
    );

    let use_colors = job_match::output::should_use_colors();

    match cli.command {
        Commands::Rank {
            profile_id,
            limit,
            format,
        } => {
            let limit = limit.unwrap_or_else(|| config.limit());
            let report = job_match::matching::get_job_matches(&store, &profile_id, limit, &scoring)
                .unwrap_or_else(|e| fail(exit_code_for(&e), e));

            match format {
                OutputFormat::Table => {
                    println!(
                        "{}",
                        job_match::output::format_match_header(&report, use_colors)
                    );
                    println!(
                        "{}",
                        job_match::output::format_match_table(&report.matches, use_colors)
                    );
                }
                OutputFormat::Tsv => {
                    let tsv = job_match::output::format_tsv(&report.matches);
                    if !tsv.is_empty() {
                        println!("{}", tsv);
                    }
                }
                OutputFormat::Json => print_json(&report.matches),
            }
        }
        Commands::Score {
            profile_id,
            job_id,
            format,
        } => {
            let m = job_match::matching::match_one(&store, &profile_id, &job_id, &scoring)
                .unwrap_or_else(|e| fail(exit_code_for(&e), e));
            match format {
                OutputFormat::Json => print_json(&m),
                _ => println!(
                    "{}",
                    job_match::output::format_match_detail(m.job, &m.result, use_colors)
                ),
            }
        }
        Commands::Search {
            query,
            location,
            job_type,
            remote,
            onsite,
            salary_min,
            salary_max,
            exp_min,
            exp_max,
        } => {
            let salary = match (salary_min, salary_max) {
                (Some(min), Some(max)) => Some(SalaryRange { min, max }),
                _ => None,
            };
            let experience = match (exp_min, exp_max) {
                (Some(min), Some(max)) => Some(ExperienceRange { min, max }),
                _ => None,
            };
            let query = JobQuery {
                text: query,
                location,
                salary,
                experience,
                job_type,
                remote: if remote {
                    Some(true)
                } else if onsite {
                    Some(false)
                } else {
                    None
                },
            };
            let results = job_match::store::search_jobs(&store.jobs, &query);
            println!(
                "{}",
                job_match::output::format_job_list(&results, use_colors)
            );
        }
        Commands::Profile { command } => match command {
            ProfileCommand::Show { id } => match store.lookup_profile(&id) {
                Some(profile) => print_json(profile),
                None => fail(EXIT_NOT_FOUND, MatchError::ProfileNotFound(id)),
            },
            ProfileCommand::Import { file } => {
                let content = std::fs::read_to_string(&file).unwrap_or_else(|e| {
                    fail(EXIT_DATA, format!("Failed to read {}: {}", file.display(), e))
                });
                let profile: CandidateProfile = serde_json::from_str(&content)
                    .unwrap_or_else(|e| {
                        fail(EXIT_DATA, format!("Invalid profile in {}: {}", file.display(), e))
                    });
                let id = profile.id.clone();
                if let Err(e) = store.save_profile(profile) {
                    fail(exit_code_for(&e), e);
                }
                if let Err(e) = job_match::store::save_store(&data_path, &store) {
                    fail(EXIT_DATA, format!("Data error: {:#}", e));
                }
                println!("Saved profile {} to {}", id, data_path.display());
            }
        },
        // Handled before config load
        Commands::Init => {}
    }

    if cli.verbose {
        eprintln!("Done in {:?}", start_time.elapsed());
    }

    std::process::exit(EXIT_SUCCESS);
}
