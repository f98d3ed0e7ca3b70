// src/main.rs
// =============================================================================
// Entry point of the repo-branches CLI.
//
// What happens here:
// 1. Parse command-line arguments (and their environment fallbacks)
// 2. Set up logging
// 3. Build the upstream client and the aggregator from explicit config
// 4. Dispatch to the subcommand
// 5. Exit with a proper code (0 = success, 2 = error)
// =============================================================================

mod aggregate; // src/aggregate/ - fan-out and join of the upstream reads
mod cli; // src/cli.rs - command-line parsing
mod github; // src/github/ - upstream API client and records
mod server; // src/server/ - HTTP endpoint

#[cfg(test)]
mod testing;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use aggregate::RepositoryAggregator;
use cli::{Cli, Commands, UpstreamArgs};
use github::{GithubClient, Repository, UpstreamConfig};

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<i32> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let aggregator = build_aggregator(&cli.upstream)?;

    match cli.command {
        Commands::Repos { username, json } => handle_repos(&aggregator, &username, json).await,
        Commands::Serve { bind } => {
            let app = server::create_router(Arc::new(aggregator));
            server::run_server(app, bind).await?;
            Ok(0)
        }
    }
}

// Logs go to stderr so `repos --json` output can be piped.
fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "repo_branches=debug,tower_http=debug,info"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_aggregator(args: &UpstreamArgs) -> Result<RepositoryAggregator<GithubClient>> {
    let config = UpstreamConfig::new(
        &args.base_url,
        Duration::from_secs(args.timeout_secs),
        args.user_agent.clone(),
    )?;
    let client = GithubClient::new(config)?;

    Ok(RepositoryAggregator::new(client).with_max_concurrency(args.max_concurrency))
}

async fn handle_repos(
    aggregator: &RepositoryAggregator<GithubClient>,
    username: &str,
    json: bool,
) -> Result<i32> {
    let repos = aggregator.get_all_repos(username).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&repos)?);
    } else {
        print_table(&repos);
    }

    Ok(0)
}

// Prints one row per branch; repositories without branches still get a row.
fn print_table(repos: &[Repository]) {
    println!("{:<40} {:<20} {:<30} {:<40}", "REPOSITORY", "OWNER", "BRANCH", "SHA");
    println!("{}", "=".repeat(133));

    for repo in repos {
        if repo.branches.is_empty() {
            println!("{:<40} {:<20} {:<30} {:<40}", repo.name, repo.owner.login, "-", "-");
        }
        for branch in &repo.branches {
            println!(
                "{:<40} {:<20} {:<30} {:<40}",
                repo.name, repo.owner.login, branch.name, branch.commit.sha
            );
        }
    }

    println!();

    let branch_count: usize = repos.iter().map(|r| r.branches.len()).sum();
    println!("📊 Summary:");
    println!("   📁 Repositories: {}", repos.len());
    println!("   🌿 Branches: {}", branch_count);
}
