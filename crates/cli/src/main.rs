mod args;
mod output;

use args::GlobalArgs;
use clap::{Parser, Subcommand};
use hmy_probe_lib::{
    bench::Benchmarker,
    constant::DEFAULT_STRESS_REPORT_PATH,
    env::{load_environment_file, ProcessEnv},
    error::ProbeError,
    full_suite,
    log::{LoggingFormat, DEFAULT_LOG_FILTER},
    rpc::{get_transport, JsonRpcRequest, RpcMethod},
    sanitize_error,
    validator::config_validator::ConfigValidator,
    Config, HarnessOptions, NetworkName, ProfileResolver, RpcHarness, RpcTransport, TestReport,
};
use std::sync::Arc;

#[derive(Subcommand)]
enum Commands {
    /// Run the account and protocol suites against the node
    Run {
        /// Account to query (defaults to ADDRESS / harness.address)
        #[arg(long)]
        address: Option<String>,

        /// Where to write the JSON report (defaults to harness.report_path)
        #[arg(long)]
        report: Option<String>,

        /// Fail responses that carry both or neither of result and error
        #[arg(long, default_value_t = false)]
        strict: bool,
    },
    /// Network profile operations
    Profile {
        #[command(subcommand)]
        profile_command: ProfileCommands,
    },
    /// Send one method repeatedly with bounded concurrency
    Bench {
        /// Method to benchmark (defaults to bench.method)
        #[arg(long)]
        method: Option<String>,

        /// Account to query (defaults to ADDRESS / harness.address)
        #[arg(long)]
        address: Option<String>,

        /// Total requests to send
        #[arg(long)]
        requests: Option<usize>,

        /// Maximum requests in flight
        #[arg(long)]
        concurrency: Option<usize>,
    },
    /// Benchmark every known method in turn and write a stress report
    Stress {
        /// Account to query (defaults to ADDRESS / harness.address)
        #[arg(long)]
        address: Option<String>,

        /// Requests to send per method
        #[arg(long)]
        requests: Option<usize>,

        /// Maximum requests in flight
        #[arg(long)]
        concurrency: Option<usize>,

        /// Where to write the stress report
        #[arg(long, default_value = DEFAULT_STRESS_REPORT_PATH)]
        report: String,
    },
    /// Configuration management commands
    Config {
        #[command(subcommand)]
        config_command: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ProfileCommands {
    /// Resolve one network and print its profile with secrets redacted
    Show {
        #[arg(value_enum)]
        network: NetworkName,
    },
    /// Check the environment of every network
    Check,
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Validate configuration file and network environment
    Validate,
}

#[derive(Parser)]
#[command(author, version, about = "hmy-probe - Harmony JSON-RPC verification harness", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    pub global_args: GlobalArgs,
}

#[tokio::main]
async fn main() -> Result<(), ProbeError> {
    load_environment_file();
    let cli = Cli::parse();

    setup_logging(&cli.global_args.logging_format);

    let mut config = Config::load_or_default(cli.global_args.config.as_ref())
        .unwrap_or_else(|e| {
            print_error(&format!("Failed to load config: {e}"));
            std::process::exit(1);
        })
        .with_env_overrides(&ProcessEnv);

    if let Some(net_url) = cli.global_args.net_url {
        config.harness.net_url = net_url;
    }
    log::debug!("Using endpoint {}", sanitize_error!(config.harness.net_url));

    match cli.command {
        Some(Commands::Run { address, report, strict }) => {
            if let Some(address) = address {
                config.harness.address = Some(address);
            }
            let address = config.harness.require_address()?.to_string();
            let report_path = report.unwrap_or_else(|| config.harness.report_path.clone());

            let transport =
                get_transport(&config.harness.net_url, config.harness.request_timeout())?;
            let options =
                HarnessOptions { strict_envelope: strict || config.harness.strict_envelope };
            let harness = RpcHarness::with_options(transport, options);

            let outcomes = harness.run_all(&full_suite(&address)).await;
            for outcome in &outcomes {
                output::print_metric(&outcome.metric);
            }

            let endpoint = harness.transport().endpoint();
            let report = TestReport::from_outcomes(&address, &endpoint, &outcomes);
            report.write_to(&report_path)?;

            let (passed, failed) = report.summary();
            output::print_summary(passed, failed, &report_path);
            if failed > 0 {
                std::process::exit(1);
            }
        }
        Some(Commands::Profile { profile_command }) => {
            let resolver = ProfileResolver::from_process_env();
            match profile_command {
                ProfileCommands::Show { network } => {
                    let profile = resolver.resolve(network).unwrap_or_else(|e| {
                        print_error(&e.to_string());
                        std::process::exit(1);
                    });
                    output::print_profile(&profile);
                }
                ProfileCommands::Check => {
                    let mut healthy = true;
                    for network in NetworkName::ALL {
                        let problems = resolver.validate(network);
                        output::print_profile_check(network, &problems);
                        healthy &= problems.is_empty();
                    }
                    if !healthy {
                        std::process::exit(1);
                    }
                }
            }
        }
        Some(Commands::Bench { method, address, requests, concurrency }) => {
            if let Some(address) = address {
                config.harness.address = Some(address);
            }
            let address = config.harness.require_address()?.to_string();
            let method: RpcMethod =
                method.unwrap_or_else(|| config.bench.method.clone()).parse()?;

            let benchmarker = Benchmarker::new(
                requests.unwrap_or(config.bench.requests),
                concurrency.unwrap_or(config.bench.max_concurrent),
            )?;
            let transport =
                get_transport(&config.harness.net_url, config.harness.request_timeout())?;
            let request = JsonRpcRequest::new(method.name(), method.default_params(&address));

            let summary = benchmarker.run(Arc::clone(&transport), &request).await;
            output::print_bench_summary(method, &summary);
        }
        Some(Commands::Stress { address, requests, concurrency, report }) => {
            if let Some(address) = address {
                config.harness.address = Some(address);
            }
            let address = config.harness.require_address()?.to_string();

            let benchmarker = Benchmarker::new(
                requests.unwrap_or(config.bench.requests),
                concurrency.unwrap_or(config.bench.max_concurrent),
            )?;
            let transport =
                get_transport(&config.harness.net_url, config.harness.request_timeout())?;

            let stress = benchmarker.stress(transport, &RpcMethod::ALL, &address).await;
            stress.write_to(&report)?;
            output::print_stress_report(&stress, &report);
        }
        Some(Commands::Config { config_command }) => match config_command {
            ConfigCommands::Validate => {
                let resolver = ProfileResolver::from_process_env();
                if ConfigValidator::validate_with_result(&config, Some(&resolver)).is_err() {
                    std::process::exit(1);
                }
            }
        },
        None => {
            println!("No command specified. Use --help for usage information.");
            println!("Available commands:");
            println!("  run               - Run the account and protocol suites");
            println!("  profile show      - Print a resolved network profile");
            println!("  profile check     - Check every network's environment");
            println!("  bench             - Benchmark a single method");
            println!("  stress            - Benchmark every method and write a report");
            println!("  config validate   - Validate configuration");
        }
    }

    Ok(())
}

fn print_error(message: &str) {
    eprintln!("Error: {message}");
}

fn setup_logging(format: &LoggingFormat) {
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());

    let subscriber = tracing_subscriber::fmt().with_env_filter(env_filter);
    match format {
        LoggingFormat::Standard => subscriber.init(),
        LoggingFormat::Json => subscriber.json().init(),
    }
}
