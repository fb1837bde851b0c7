//! Command-line interface for the pillbox record stores.
//!
//! # Commands
//!
//! - `pillbox drug add --id <id> --name <name> --cost <cost> --dosage <dosage>`
//! - `pillbox drug list [--json]`
//! - `pillbox patient add --id <id> --first-name <f> --last-name <l> --dob <YYYY-MM-DD>`
//! - `pillbox patient list [--json]`
//! - `pillbox ping` - test registry connectivity (exit code 1 when unreachable)
//!
//! The patient table is ensured before every registry operation, so no
//! manual setup step is required.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use pillbox_core::{Database, DbConfig, Drug, FileStore, Patient};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "pillbox", version, about = "Drug ledger and patient registry")]
struct Cli {
    /// Path to the drug ledger file.
    #[arg(long, default_value = "drug_data.txt", global = true)]
    drug_file: PathBuf,

    /// Path to the patient registry database.
    #[arg(long, default_value = "patients.db", global = true)]
    db_path: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Drug ledger operations.
    #[command(subcommand)]
    Drug(DrugCommand),

    /// Patient registry operations.
    #[command(subcommand)]
    Patient(PatientCommand),

    /// Test connectivity to the patient registry.
    Ping,
}

#[derive(Debug, Subcommand)]
enum DrugCommand {
    /// Append a drug to the ledger.
    Add(AddDrugArgs),
    /// List every drug in the ledger.
    List(ListArgs),
}

#[derive(Debug, Subcommand)]
enum PatientCommand {
    /// Register a new patient.
    Add(AddPatientArgs),
    /// List every patient, ordered by id.
    List(ListArgs),
}

#[derive(Debug, Args)]
struct AddDrugArgs {
    /// Drug identifier.
    #[arg(long)]
    id: i64,

    /// Drug name.
    #[arg(long)]
    name: String,

    /// Cost per unit.
    #[arg(long)]
    cost: f64,

    /// Dosage information (e.g., "100mg twice daily").
    #[arg(long)]
    dosage: String,
}

#[derive(Debug, Args)]
struct AddPatientArgs {
    /// Patient identifier (must be unique).
    #[arg(long)]
    id: i64,

    /// Patient first name.
    #[arg(long)]
    first_name: String,

    /// Patient last name.
    #[arg(long)]
    last_name: String,

    /// Date of birth in YYYY-MM-DD format.
    #[arg(long)]
    dob: String,
}

#[derive(Debug, Args)]
struct ListArgs {
    /// Output as JSON instead of text.
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let ledger = FileStore::new(&cli.drug_file);
    let registry = Database::new(DbConfig::new(&cli.db_path));

    match cli.command {
        Command::Drug(DrugCommand::Add(args)) => {
            let drug = Drug::new(args.id, args.name, args.cost, args.dosage);
            ledger
                .append(&drug)
                .context("failed to append drug to ledger")?;
            println!("Drug {} saved to {}", drug.drug_id, cli.drug_file.display());
        }
        Command::Drug(DrugCommand::List(args)) => {
            let drugs = ledger.read_all().context("failed to read drug ledger")?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&drugs)?);
            } else if drugs.is_empty() {
                println!("No drugs in the ledger.");
            } else {
                for drug in &drugs {
                    println!(
                        "ID: {}, Name: {}, Cost: ${:.2}, Dosage: {}",
                        drug.drug_id, drug.name, drug.cost, drug.dosage
                    );
                }
            }
        }
        Command::Patient(PatientCommand::Add(args)) => {
            registry
                .ensure_schema()
                .context("failed to prepare patient table")?;
            let patient = Patient::new(args.id, args.first_name, args.last_name, args.dob);
            registry
                .insert_patient(&patient)
                .context("failed to save patient")?;
            println!(
                "Patient {} saved to {}",
                patient.patient_id,
                cli.db_path.display()
            );
        }
        Command::Patient(PatientCommand::List(args)) => {
            registry
                .ensure_schema()
                .context("failed to prepare patient table")?;
            let patients = registry
                .list_patients()
                .context("failed to list patients")?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&patients)?);
            } else if patients.is_empty() {
                println!("No patients in the registry.");
            } else {
                for patient in &patients {
                    println!(
                        "Patient ID: {}, Name: {}, DOB: {}",
                        patient.patient_id,
                        patient.full_name(),
                        patient.dob
                    );
                }
            }
        }
        Command::Ping => {
            if registry.probe() {
                println!("Database connection successful: {}", cli.db_path.display());
            } else {
                println!("Database connection failed: {}", cli.db_path.display());
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
