use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use rediboard::api::ApiClient;
use rediboard::config::{self, DEFAULT_SORT_FIELD, INSTANCES_ENDPOINT, SORT_FIELDS};
use rediboard::controller::InstanceListController;
use rediboard::render;

#[derive(Parser)]
#[command(
    name = "rediboard",
    author,
    version,
    about = "Dashboard for monitored Redis instances",
    long_about = r#"rediboard fetches the instance list from a rediboard backend and shows it as a table.

The backend URL comes from `--api-url`, the REDIBOARD_API_URL environment variable, or a `.env` file.

Examples:
  rediboard
  rediboard list --sort used_memory
  rediboard list --all --api-url http://monitor:8080
  rediboard check-config
"#,
    after_help = "Use `rediboard <subcommand> --help` to get subcommand specific options."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    /// Disable colorized output
    #[arg(long, global = true)]
    no_color: bool,
    /// Log each request as a curl command together with the raw response
    #[arg(long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch and display the instance list
    #[command(long_about = "Fetch the instance list once and print it. Instances without replication links and without errors are hidden unless `--all` is given.")]
    List {
        /// Attribute to sort by (name, host, port, role, version, used_memory, maxmemory, maxmemory_policy)
        #[arg(long, short = 's', default_value_t = String::from(DEFAULT_SORT_FIELD))]
        sort: String,
        /// Show instances that have neither connections nor errors
        #[arg(long, short = 'a')]
        all: bool,
        /// Print the view state as JSON instead of a table
        #[arg(long)]
        json: bool,
        /// Backend base URL (overrides REDIBOARD_API_URL)
        #[arg(long)]
        api_url: Option<String>,
        /// Path to .env file
        #[arg(long)]
        env_file: Option<String>,
    },
    /// Show the resolved configuration and check that the backend answers
    CheckConfig {
        /// Path to .env file
        #[arg(long)]
        env_file: Option<String>,
    },
}

fn build_client(api_url: Option<&str>, verbose: bool) -> ApiClient {
    let base_url = match api_url {
        Some(url) => config::sanitize_base_url(url),
        None => config::get_api_base_url(),
    };
    match ApiClient::new(base_url, config::get_request_timeout()) {
        Ok(client) => client.with_verbose(verbose),
        Err(e) => {
            tracing::error!(%e, "Failed to create HTTP client");
            eprintln!("{}: {}", yansi::Paint::red("Failed to create HTTP client"), e);
            process::exit(1);
        }
    }
}

async fn run_list(sort: String, all: bool, json: bool, api_url: Option<String>, env_file: Option<String>, verbose: bool) {
    config::load_env_file(env_file.as_deref());
    let client = build_client(api_url.as_deref(), verbose);

    let mut controller = InstanceListController::initialize(&client).await;
    controller.set_sort_field(sort);

    if json {
        if let Err(e) = render::print_json(&controller) {
            eprintln!("{}: {}", yansi::Paint::red("Failed to encode view state"), e);
            process::exit(1);
        }
    } else {
        render::print_dashboard(&controller, all);
    }
}

async fn run_check_config(env_file: Option<String>, verbose: bool) {
    config::load_env_file(env_file.as_deref());
    let client = build_client(None, verbose);
    let timeout = config::get_request_timeout()
        .map(|t| format!("{}s", t.as_secs()))
        .unwrap_or_else(|| "none".to_string());

    println!("API URL:     {}", yansi::Paint::new(client.base_url()).cyan());
    println!("Endpoint:    {}", INSTANCES_ENDPOINT);
    println!("Timeout:     {}", timeout);
    println!("Sort fields: {}", SORT_FIELDS.join(", "));

    let controller = InstanceListController::initialize(&client).await;
    if controller.instances().is_empty() && !controller.errors().is_empty() {
        for error in controller.errors() {
            eprintln!("{}", yansi::Paint::red(error));
        }
        process::exit(1);
    }
    println!(
        "{}",
        yansi::Paint::new(format!(
            "Backend reachable ({} instances, {} reported errors)",
            controller.instances().len(),
            controller.errors().len()
        ))
        .green()
    );
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.no_color {
        yansi::whenever(yansi::Condition::NEVER);
    }

    match cli.command {
        None => run_list(DEFAULT_SORT_FIELD.to_string(), false, false, None, None, cli.verbose).await,
        Some(Commands::List { sort, all, json, api_url, env_file }) => {
            run_list(sort, all, json, api_url, env_file, cli.verbose).await
        }
        Some(Commands::CheckConfig { env_file }) => run_check_config(env_file, cli.verbose).await,
    }
}
