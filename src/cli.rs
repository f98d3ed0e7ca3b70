// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Two subcommands:
// - repos <username>   one aggregation, printed as a table or JSON
// - serve              run the HTTP endpoint
//
// Every upstream setting can also come from an environment variable, so the
// server can be configured without touching its command line.
// =============================================================================

use std::net::SocketAddr;

use clap::{Args, Parser, Subcommand};

use crate::github::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};

#[derive(Parser, Debug)]
#[command(
    name = "repo-branches",
    version,
    about = "List a user's non-fork repositories with every branch head",
    long_about = "repo-branches asks the GitHub API for a user's repositories, drops forks, \
                  and fetches the branch list of each remaining repository concurrently."
)]
pub struct Cli {
    #[command(flatten)]
    pub upstream: UpstreamArgs,

    /// Log at debug level (RUST_LOG, when set, takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Settings for the upstream API client.
#[derive(Args, Debug, Clone)]
pub struct UpstreamArgs {
    /// Root URL of the hosting API
    #[arg(long, global = true, env = "REPO_BRANCHES_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[arg(long, global = true, env = "REPO_BRANCHES_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Maximum number of branch lookups in flight at once (default: no limit)
    #[arg(long, global = true, env = "REPO_BRANCHES_MAX_CONCURRENCY")]
    pub max_concurrency: Option<usize>,

    /// User-Agent header sent upstream
    #[arg(long, global = true, env = "REPO_BRANCHES_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print a user's non-fork repositories and their branches
    ///
    /// Example: repo-branches repos octocat --json
    Repos {
        /// Account whose repositories are listed
        username: String,

        /// Output results in JSON format instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Serve GET /api/v1/github/{username}/repos over HTTP
    Serve {
        /// Address to listen on
        #[arg(long, env = "REPO_BRANCHES_BIND", default_value = "127.0.0.1:8080")]
        bind: SocketAddr,
    },
}
