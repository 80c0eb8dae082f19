use clap::Parser;
use switchboard::cli::{
    agents, classify, handle_completions, handle_config_init, load_config, route,
    AgentsCommands, Cli, Commands, ConfigCommands,
};
use switchboard::config::LoggingConfig;
use switchboard::logging::init_tracing;

fn start_tracing(config: &LoggingConfig) {
    if let Err(e) = init_tracing(config) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }
}

fn main() {
    let cli = Cli::parse();
    let log_level = cli.log_level.as_deref();

    let result = match cli.command {
        Commands::Route(args) => load_config(&args.config, log_level).and_then(|config| {
            start_tracing(&config.logging);
            let output = route::handle_route(&args, &config)?;
            println!("{}", output);
            Ok(())
        }),
        Commands::Agents(cmd) => match cmd {
            AgentsCommands::List(args) => {
                load_config(&args.config, log_level).and_then(|config| {
                    start_tracing(&config.logging);
                    let output = agents::handle_agents_list(&args, &config.roster())?;
                    println!("{}", output);
                    Ok(())
                })
            }
        },
        Commands::Classify(args) => {
            let mut logging = LoggingConfig::default();
            if let Some(level) = log_level {
                logging.level = level.to_string();
            }
            start_tracing(&logging);
            classify::handle_classify(&args).map(|output| println!("{}", output))
        }
        Commands::Config(config_cmd) => match config_cmd {
            ConfigCommands::Init(args) => handle_config_init(&args),
        },
        Commands::Completions(args) => {
            handle_completions(&args);
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
