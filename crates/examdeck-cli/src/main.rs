//! examdeck CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use examdeck_core::model::Difficulty;

mod commands;

#[derive(Parser)]
#[command(name = "examdeck", version, about = "Exam authoring and study tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Import an Aiken-format .txt file as a stored exam
    Import {
        /// Path to the .txt file
        file: PathBuf,

        /// Exam name (default: the file stem)
        #[arg(long)]
        name: Option<String>,

        /// Subject category
        #[arg(long, default_value = "General")]
        category: String,

        /// Difficulty: easy, medium, hard
        #[arg(long, default_value = "medium")]
        difficulty: Difficulty,

        /// Data directory override
        #[arg(long)]
        data_dir: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Parse an Aiken-format file and report authoring warnings
    Validate {
        /// Path to the .txt file
        file: PathBuf,
    },

    /// List stored exams
    List {
        /// Filter by name or category (case-insensitive substring)
        #[arg(long)]
        search: Option<String>,

        /// Data directory override
        #[arg(long)]
        data_dir: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Practice an exam interactively and record the attempt
    Practice {
        /// Exam id or name
        exam: String,

        /// Data directory override
        #[arg(long)]
        data_dir: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Drill an exam's flashcards interactively
    Drill {
        /// Exam id or name
        exam: String,

        /// Shuffle the deck before starting
        #[arg(long)]
        shuffle: bool,

        /// Shuffle seed (implies --shuffle)
        #[arg(long)]
        seed: Option<u64>,

        /// Data directory override
        #[arg(long)]
        data_dir: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Show the attempt history for an exam
    History {
        /// Exam id or name
        exam: String,

        /// Data directory override
        #[arg(long)]
        data_dir: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Export a stored exam back to Aiken format
    Export {
        /// Exam id or name
        exam: String,

        /// Output file (default: stdout)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Data directory override
        #[arg(long)]
        data_dir: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Generate an exam from a source document (mock backend)
    Generate {
        /// Path to the source document
        source: PathBuf,

        /// Number of questions to generate
        #[arg(long)]
        count: Option<usize>,

        /// Difficulty: easy, medium, hard
        #[arg(long)]
        difficulty: Option<Difficulty>,

        /// Exam name (default: the source file stem)
        #[arg(long)]
        name: Option<String>,

        /// Subject category
        #[arg(long, default_value = "General")]
        category: String,

        /// Data directory override
        #[arg(long)]
        data_dir: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Sign in against the mock auth backend
    Login {
        /// Email address
        #[arg(long)]
        email: String,

        /// Password
        #[arg(long)]
        password: String,

        /// Register a new account with this display name instead
        #[arg(long)]
        register: Option<String>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create a starter config and example exam file
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("examdeck=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Import {
            file,
            name,
            category,
            difficulty,
            data_dir,
            config,
        } => commands::import::execute(file, name, category, difficulty, data_dir, config),
        Commands::Validate { file } => commands::validate::execute(file),
        Commands::List {
            search,
            data_dir,
            config,
        } => commands::list::execute(search, data_dir, config),
        Commands::Practice {
            exam,
            data_dir,
            config,
        } => commands::practice::execute(exam, data_dir, config),
        Commands::Drill {
            exam,
            shuffle,
            seed,
            data_dir,
            config,
        } => commands::drill::execute(exam, shuffle, seed, data_dir, config),
        Commands::History {
            exam,
            data_dir,
            config,
        } => commands::history::execute(exam, data_dir, config),
        Commands::Export {
            exam,
            output,
            data_dir,
            config,
        } => commands::export::execute(exam, output, data_dir, config),
        Commands::Generate {
            source,
            count,
            difficulty,
            name,
            category,
            data_dir,
            config,
        } => {
            commands::generate::execute(source, count, difficulty, name, category, data_dir, config)
                .await
        }
        Commands::Login {
            email,
            password,
            register,
            config,
        } => commands::login::execute(email, password, register, config).await,
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
