use std::path::PathBuf;
use std::process::ExitCode;

use carelog_core::commands::{AddSessionCommand, DeleteSessionCommand};
use carelog_core::{resolve_data_file, storage, Model, Patient, SessionError, SystemClock};
use carelog_types::PatientName;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "carelog")]
#[command(about = "Carelog caring-session tracker CLI")]
struct Cli {
    /// Data file override (defaults to CARELOG_DATA_FILE or ./carelog.json)
    #[arg(long, global = true)]
    data_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a patient
    AddPatient {
        /// Patient name
        name: String,
    },
    /// List patients and their caring sessions
    List {
        /// Show only patients whose name contains this keyword
        #[arg(long)]
        filter: Option<String>,
    },
    /// Delete a patient
    DeletePatient {
        /// 1-based patient index
        index: String,
    },
    /// Add a caring session: PATIENT_INDEX d/DATE t/TIME type/CARE_TYPE [notes/NOTES]
    #[command(name = "add-session")]
    AddSession {
        /// Raw session arguments
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Delete a caring session: PATIENT_INDEX SESSION_INDEX
    #[command(name = "delete-session")]
    DeleteSession {
        /// Raw index arguments
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), SessionError> {
    let cfg = resolve_data_file(cli.data_file)?;
    tracing::debug!(data_file = %cfg.data_file().display(), "configuration resolved");
    let mut model = storage::load(&cfg)?;

    match cli.command {
        Some(Commands::AddPatient { name }) => {
            let name = PatientName::new(&name).map_err(|_| SessionError::InvalidPatientName)?;
            model.add_patient(Patient::new(name.clone()));
            storage::save(&cfg, &model)?;
            println!("Added patient: {}", name);
        }
        Some(Commands::List { filter }) => {
            if let Some(keyword) = &filter {
                model.set_filter(keyword);
            }
            print_patients(&model);
        }
        Some(Commands::DeletePatient { index }) => {
            let index = carelog_core::parser::fields::parse_index(&index)?;
            let removed = model.delete_patient(index)?;
            storage::save(&cfg, &model)?;
            println!("Deleted patient: {}", removed.name());
        }
        Some(Commands::AddSession { args }) => {
            let command = AddSessionCommand::parse(&args.join(" "), &SystemClock)?;
            let message = command.execute(&mut model)?;
            storage::save(&cfg, &model)?;
            println!("{}", message);
        }
        Some(Commands::DeleteSession { args }) => {
            let command = DeleteSessionCommand::parse(&args.join(" "))?;
            let message = command.execute(&mut model)?;
            storage::save(&cfg, &model)?;
            println!("{}", message);
        }
        None => {
            println!("Use 'carelog --help' for commands");
        }
    }

    Ok(())
}

fn print_patients(model: &Model) {
    let patients = model.filtered_patients();
    if patients.is_empty() {
        println!("No patients found.");
        return;
    }
    for (i, patient) in patients.iter().enumerate() {
        println!("{}. {}", i + 1, patient.name());
        for (j, session) in patient.sessions().iter().enumerate() {
            println!("   {}. {}", j + 1, session);
        }
    }
}
