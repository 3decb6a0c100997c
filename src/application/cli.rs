use std::io;
use std::path;

use anyhow::bail;
use anyhow::Result;
use clap::value_parser;
use clap::Arg;
use clap::ArgAction;
use clap::ArgMatches;
use clap::Command;
use clap_complete::generate;
use clap_complete::Generator;
use clap_complete::Shell;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use yansi::Paint;

use crate::application::ui::App;
use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::AuthFlowKind;
use crate::domain::models::ScenarioDraft;

const EPHEMERAL_ARG: &str = "ephemeral";

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
}

async fn create_config_file() -> Result<()> {
    let config_file_path_str = Config::default(ConfigKey::ConfigFile);
    let config_file_path = path::PathBuf::from(&config_file_path_str);
    if config_file_path.exists() {
        bail!(format!(
            "Config file already exists at {config_file_path_str}"
        ));
    }

    if let Some(parent) = config_file_path.parent() {
        fs::create_dir_all(parent).await?;
    }

    let mut file = fs::File::create(&config_file_path).await?;
    file.write_all(Config::serialize_default(build()).as_bytes())
        .await?;

    println!("Created default config file at {config_file_path_str}");
    return Ok(());
}

fn arg_email() -> Arg {
    return Arg::new("email")
        .short('e')
        .long("email")
        .num_args(1)
        .help("Account email. Prompted for when omitted.");
}

fn subcommand_completions() -> Command {
    return Command::new("completions")
        .about("Generates shell completions.")
        .arg(
            clap::Arg::new("shell")
                .short('s')
                .long("shell")
                .help("Which shell to generate completions for.")
                .action(ArgAction::Set)
                .value_parser(value_parser!(Shell))
                .required(true),
        );
}

fn subcommand_config() -> Command {
    return Command::new("config")
        .about("Configuration file options.")
        .subcommand(
            Command::new("create").about("Saves the default config file to the configuration file path. This command will fail if the file exists already.")
        )
        .subcommand(
            Command::new("default").about("Outputs the default configuration file to stdout.")
        )
        .subcommand(
            Command::new("path").about("Returns the default path for the configuration file.")
        );
}

fn subcommand_start() -> Command {
    return Command::new("start")
        .about("Start an interview for a scenario and answer questions in the terminal.")
        .arg(
            Arg::new("company")
                .long("company")
                .num_args(1)
                .required(true)
                .help("Company you are interviewing at."),
        )
        .arg(
            Arg::new("role")
                .long("role")
                .num_args(1)
                .required(true)
                .help("Role you are interviewing for."),
        )
        .arg(
            Arg::new("level")
                .long("level")
                .num_args(1)
                .help("Optional seniority level, such as L3."),
        )
        .arg(
            Arg::new("brief")
                .long("brief")
                .num_args(1)
                .help("Optional context for the interviewer, such as your background."),
        )
        .arg(
            Arg::new("agree")
                .long("agree")
                .num_args(0)
                .action(ArgAction::SetTrue)
                .help("Accept that your answers are sent to the interviewer backend and stored."),
        );
}

fn subcommand_sessions() -> Command {
    return Command::new("sessions")
        .about("Browse past interview sessions.")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("list")
                .about("List previous sessions for the signed in account.")
                .arg(
                    Arg::new("all")
                        .long("all")
                        .num_args(0)
                        .action(ArgAction::SetTrue)
                        .help("Include sessions from every account."),
                ),
        )
        .subcommand(
            Command::new("show")
                .about("Show every question, answer and score of a session.")
                .arg(
                    Arg::new("session-id")
                        .short('i')
                        .long("id")
                        .num_args(1)
                        .required(true)
                        .help("Session ID"),
                ),
        );
}

pub fn build() -> Command {
    let about = format!(
        "{}\n\nVersion: {}",
        env!("CARGO_PKG_DESCRIPTION"),
        env!("CARGO_PKG_VERSION"),
    );

    return Command::new("mockinterview")
        .about(about)
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .arg_required_else_help(false)
        .subcommand(Command::new("login").about("Sign in with email and password.").arg(arg_email()))
        .subcommand(Command::new("signup").about("Create an account and sign in.").arg(arg_email()))
        .subcommand(
            Command::new("forgot-password")
                .about("Request a password reset link.")
                .arg(arg_email()),
        )
        .subcommand(Command::new("logout").about("Forget the signed in account on this machine."))
        .subcommand(Command::new("whoami").about("Print the signed in account email."))
        .subcommand(subcommand_start())
        .subcommand(subcommand_sessions())
        .subcommand(subcommand_completions())
        .subcommand(subcommand_config())
        .subcommand(Command::new("manpages").about("Generates manpages and outputs to stdout."))
        .arg(
            Arg::new(ConfigKey::ConfigFile.to_string())
                .short('c')
                .long(ConfigKey::ConfigFile.to_string())
                .env("MOCKINTERVIEW_CONFIG_FILE")
                .num_args(1)
                .help(format!("Path to configuration file [default: {}]", Config::default(ConfigKey::ConfigFile)))
                .global(true)
        )
        .arg(
            Arg::new(ConfigKey::ApiURL.to_string())
                .long(ConfigKey::ApiURL.to_string())
                .env("MOCKINTERVIEW_API_URL")
                .num_args(1)
                .help(format!("Base URL of the mock interview backend. [default: {}]", Config::default(ConfigKey::ApiURL)))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::StorageFile.to_string())
                .long(ConfigKey::StorageFile.to_string())
                .env("MOCKINTERVIEW_STORAGE_FILE")
                .num_args(1)
                .help(format!("Path to the file used as durable client storage. [default: {}]", Config::default(ConfigKey::StorageFile)))
                .global(true),
        )
        .arg(
            Arg::new(EPHEMERAL_ARG)
                .long(EPHEMERAL_ARG)
                .num_args(0)
                .action(ArgAction::SetTrue)
                .help("Keep the signed in account in memory only for this run.")
                .global(true),
        );
}

fn is_ephemeral(matches: &ArgMatches) -> bool {
    return matches
        .try_get_one::<bool>(EPHEMERAL_ARG)
        .ok()
        .flatten()
        .copied()
        .unwrap_or(false);
}

fn draft_from_matches(matches: &ArgMatches) -> ScenarioDraft {
    let get = |name: &str| {
        return matches
            .get_one::<String>(name)
            .cloned()
            .unwrap_or_default();
    };

    let mut draft = ScenarioDraft::new(&get("company"), &get("role"), &get("level"), &get("brief"));
    draft.agreed_to_terms = matches.get_flag("agree");
    return draft;
}

/// Parses arguments, loads configuration, and runs the chosen command. With
/// no subcommand the interactive flow starts.
pub async fn parse() -> Result<()> {
    let matches = build().get_matches();

    match matches.subcommand() {
        Some(("completions", subcmd_matches)) => {
            if let Some(completions) = subcmd_matches.get_one::<Shell>("shell").copied() {
                let mut app = build();
                print_completions(completions, &mut app);
            }
            return Ok(());
        }
        Some(("config", subcmd_matches)) => {
            match subcmd_matches.subcommand() {
                Some(("create", _)) => create_config_file().await?,
                Some(("default", _)) => println!("{}", Config::serialize_default(build())),
                Some(("path", _)) => println!("{}", Config::default(ConfigKey::ConfigFile)),
                _ => subcommand_config().print_long_help()?,
            }
            return Ok(());
        }
        Some(("manpages", _)) => {
            clap_mangen::Man::new(build()).render(&mut io::stdout())?;
            return Ok(());
        }
        _ => {}
    }

    let mut arg_matches = vec![&matches];
    if let Some((_, subcmd_matches)) = matches.subcommand() {
        arg_matches.push(subcmd_matches);
    }
    Config::load(arg_matches.clone()).await?;

    let ephemeral = arg_matches.iter().any(|e| return is_ephemeral(e));
    let app = App::new(ephemeral);

    match matches.subcommand() {
        Some(("login", subcmd_matches)) => {
            let email = subcmd_matches.get_one::<String>("email");
            app.login(AuthFlowKind::Login, email.map(|e| return e.as_str()))
                .await?;
        }
        Some(("signup", subcmd_matches)) => {
            let email = subcmd_matches.get_one::<String>("email");
            app.login(AuthFlowKind::Signup, email.map(|e| return e.as_str()))
                .await?;
        }
        Some(("forgot-password", subcmd_matches)) => {
            let email = subcmd_matches.get_one::<String>("email");
            app.login(AuthFlowKind::ForgotPassword, email.map(|e| return e.as_str()))
                .await?;
        }
        Some(("logout", _)) => app.logout()?,
        Some(("whoami", _)) => match app.whoami() {
            Some(email) => println!("{email}"),
            None => println!("{}", Paint::yellow("Not signed in.")),
        },
        Some(("start", subcmd_matches)) => {
            app.start(&draft_from_matches(subcmd_matches)).await?;
        }
        Some(("sessions", subcmd_matches)) => match subcmd_matches.subcommand() {
            Some(("list", list_matches)) => {
                app.print_sessions(list_matches.get_flag("all")).await?;
            }
            Some(("show", show_matches)) => {
                if let Some(session_id) = show_matches.get_one::<String>("session-id") {
                    app.print_summary(session_id).await?;
                }
            }
            _ => subcommand_sessions().print_long_help()?,
        },
        _ => app.run().await?,
    }

    return Ok(());
}
