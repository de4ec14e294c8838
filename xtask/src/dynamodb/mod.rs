//! DynamoDB infrastructure management commands.

mod client;
mod config;
mod deploy;
mod error;
mod planning;
mod seed;

pub use error::{DynamodbError, Result};

use crate::prelude::*;
use dialoguer::Confirm;

/// DynamoDB infrastructure management commands.
#[derive(Debug, clap::Parser)]
pub struct DynamodbCommand {
    #[command(subcommand)]
    pub action: DynamodbAction,
}

/// Available DynamoDB actions.
#[derive(Debug, clap::Subcommand)]
pub enum DynamodbAction {
    /// Deploy or destroy DynamoDB table infrastructure.
    Deploy(DeployCommand),

    /// Show the current state of the table.
    Status(StatusCommand),

    /// Seed the table with demo movie records.
    Seed(SeedCommand),
}

/// Deploy or update DynamoDB infrastructure.
#[derive(Debug, clap::Parser)]
#[command(long_about = "Deploy or destroy DynamoDB table infrastructure.

By default, this command creates the moviedrop DynamoDB table with `id`
as its partition key and pay-per-request billing.

The command shows a plan of changes before applying and asks for confirmation.

Environment variables:
  AWS_ENDPOINT_URL    - Use local DynamoDB (e.g., http://localhost:8000)
  AWS_REGION          - AWS region (defaults to us-east-1)
  AWS_PROFILE         - AWS profile to use for credentials")]
pub struct DeployCommand {
    /// Skip confirmation prompts.
    #[arg(long)]
    pub force: bool,

    /// Destroy the table instead of creating it.
    #[arg(long)]
    pub destroy: bool,

    /// Table name to use.
    #[arg(long, default_value = "moviedrop")]
    pub table_name: String,
}

/// Show the current state of the table.
#[derive(Debug, clap::Parser)]
pub struct StatusCommand {
    /// Table name to use.
    #[arg(long, default_value = "moviedrop")]
    pub table_name: String,
}

/// Seed the table with demo movie records.
#[derive(Debug, clap::Parser)]
#[command(long_about = "Generate and insert demo movie records into DynamoDB.

The first record is the service's fixed fallback movie; the rest cycle
through a small catalog with matching release years. Every record gets
a freshly generated id.")]
pub struct SeedCommand {
    /// Number of records to insert.
    #[arg(long, default_value = "1")]
    pub count: u32,

    /// Table name to use.
    #[arg(long, default_value = "moviedrop")]
    pub table_name: String,

    /// Skip confirmation prompts.
    #[arg(long)]
    pub force: bool,
}

/// Main entry point for dynamodb command.
pub async fn run(command: DynamodbCommand, global: crate::Global) -> Result<()> {
    match command.action {
        DynamodbAction::Deploy(deploy_cmd) => run_deploy(deploy_cmd, &global).await,
        DynamodbAction::Status(status_cmd) => run_status(status_cmd, &global).await,
        DynamodbAction::Seed(seed_cmd) => run_seed(seed_cmd, &global).await,
    }
}

async fn run_deploy(cmd: DeployCommand, global: &crate::Global) -> Result<()> {
    let aws_config = client::AwsConfig::default();

    if !global.is_silent() {
        aprintln!("{} {}", p_b("Target:"), aws_config.target_display());
        aprintln!();
    }

    let dynamo_client = client::create_client(&aws_config).await?;
    let current_state = client::get_table_state(&dynamo_client, &cmd.table_name).await?;

    if cmd.destroy {
        // Destroy flow
        let plan = planning::calculate_destroy_plan(current_state.as_ref(), &cmd.table_name);

        if !global.is_silent() {
            aprintln!("{}", p_y("Destroy Plan:"));
            for line in planning::format_destroy_plan(&plan) {
                aprintln!("  {}", p_r(&line));
            }
            aprintln!();
        }

        if matches!(plan, planning::DestroyPlan::AlreadyGone { .. }) {
            if !global.is_silent() {
                aprintln!("{}", p_g("Nothing to destroy."));
            }
            return Ok(());
        }

        if !cmd.force {
            let confirmed = Confirm::new()
                .with_prompt("Are you sure you want to delete this table? ALL DATA WILL BE LOST")
                .default(false)
                .interact()
                .map_err(|e| DynamodbError::AwsSdk(e.to_string()))?;

            if !confirmed {
                return Err(DynamodbError::UserCancelled);
            }
        }

        if !global.is_silent() {
            aprintln!("{}", p_b("Deleting table..."));
        }

        deploy::execute_destroy_plan(&dynamo_client, &plan).await?;

        if !global.is_silent() {
            aprintln!("{}", p_g("Table destroyed successfully."));
        }
    } else {
        // Deploy flow
        let table_config = config::moviedrop_table_config().with_table_name(&cmd.table_name);

        let plan = planning::calculate_deploy_plan(current_state.as_ref(), &table_config);

        if !global.is_silent() {
            aprintln!("{}", p_c("Deploy Plan:"));
            for line in planning::format_deploy_plan(&plan) {
                if line.starts_with('+') {
                    aprintln!("  {}", p_g(&line));
                } else {
                    aprintln!("  {}", line);
                }
            }
            aprintln!();
        }

        if matches!(plan, planning::DeployPlan::NoChanges { .. }) {
            if !global.is_silent() {
                aprintln!("{}", p_g("Infrastructure is up to date."));
            }
            return Ok(());
        }

        if !cmd.force {
            let confirmed = Confirm::new()
                .with_prompt("Apply these changes?")
                .default(true)
                .interact()
                .map_err(|e| DynamodbError::AwsSdk(e.to_string()))?;

            if !confirmed {
                return Err(DynamodbError::UserCancelled);
            }
        }

        if !global.is_silent() {
            aprintln!("{}", p_b("Applying changes..."));
        }

        deploy::execute_deploy_plan(&dynamo_client, &plan).await?;

        if !global.is_silent() {
            aprintln!("{}", p_g("Infrastructure deployed successfully."));
        }
    }

    Ok(())
}

async fn run_status(cmd: StatusCommand, global: &crate::Global) -> Result<()> {
    let aws_config = client::AwsConfig::default();
    let dynamo_client = client::create_client(&aws_config).await?;
    let current_state = client::get_table_state(&dynamo_client, &cmd.table_name).await?;

    aprintln!("{} {}", p_b("Target:"), aws_config.target_display());
    match &current_state {
        Some(state) => {
            aprintln!("{} {}", p_b("Table:"), cmd.table_name);
            aprintln!(
                "{} {}",
                p_b("Status:"),
                planning::format_table_status(state.status)
            );
            if global.is_verbose() {
                aprintln!("{state:#?}");
            }
        }
        None => {
            aprintln!(
                "{}",
                p_y(&format!("Table '{}' does not exist.", cmd.table_name))
            );
        }
    }

    Ok(())
}

async fn run_seed(cmd: SeedCommand, global: &crate::Global) -> Result<()> {
    let aws_config = client::AwsConfig::default();
    let dynamo_client = client::create_client(&aws_config).await?;

    let current_state = client::get_table_state(&dynamo_client, &cmd.table_name).await?;
    if current_state.is_none() {
        return Err(DynamodbError::TableNotFound {
            table_name: cmd.table_name,
        });
    }

    let movies = seed::generate_seed_movies(cmd.count);

    if !global.is_silent() {
        aprintln!("{} {}", p_b("Target:"), aws_config.target_display());
        aprintln!(
            "{}",
            p_c(&format!(
                "About to insert {} record(s) into '{}'.",
                movies.len(),
                cmd.table_name
            ))
        );
    }

    if !cmd.force {
        let confirmed = Confirm::new()
            .with_prompt("Insert these records?")
            .default(true)
            .interact()
            .map_err(|e| DynamodbError::AwsSdk(e.to_string()))?;

        if !confirmed {
            return Err(DynamodbError::UserCancelled);
        }
    }

    seed::insert_movies(&dynamo_client, &cmd.table_name, &movies).await?;

    if !global.is_silent() {
        for movie in &movies {
            aprintln!("  {} {} ({})", p_g("+"), movie.title, movie.year);
        }
        aprintln!("{}", p_g("Seed data inserted successfully."));
    }

    Ok(())
}
