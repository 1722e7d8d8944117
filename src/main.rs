use clap::{Parser, Subcommand};
use serial_factory::config::{Config, ConfigLoader, LogFormat, LoggingConfig};
use serial_factory::port::{available_ports, Parity, SerialPortFactory, StopBits};
use serial_factory::{AppError, AppResult};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

// Command-line arguments
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Translate a serial configuration and open the port.",
    long_about = "Resolves a generic serial configuration from a TOML file, environment \
                  variables and flags, translates it for the native serialport driver and \
                  opens the named device."
)]
struct Args {
    /// Configuration file to use instead of the standard locations.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level regardless of the configured level.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the serial ports found on this system.
    Ports {
        #[arg(long)]
        json: bool,
    },

    /// Print the resolved configuration.
    Show {
        #[arg(long)]
        json: bool,
    },

    /// Translate the configuration and open the port once.
    Open {
        /// Device path or alias; defaults to `[port] name`.
        name: Option<String>,

        #[arg(long)]
        baud: Option<u32>,

        /// none, odd, even, mark, space (or N, O, E, M, S).
        #[arg(long)]
        parity: Option<Parity>,

        /// 1, 1.5 or 2.
        #[arg(long)]
        stop_bits: Option<StopBits>,

        /// Bits per character.
        #[arg(long)]
        size: Option<u8>,

        #[arg(long)]
        timeout_ms: Option<u64>,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    let loaded = match args.config {
        Some(ref path) => ConfigLoader::load_from(path),
        None => ConfigLoader::load(),
    };
    let loader = match loaded {
        Ok(loader) => loader,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&loader.config().logging, args.verbose);
    if let Some(ref path) = loader.config_path {
        info!("Using configuration file {}", path.display());
    }

    match run(args.command, loader.into_config()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(logging: &LoggingConfig, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level))
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match logging.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.pretty().init(),
        LogFormat::Compact => builder.compact().init(),
    }
}

fn run(command: Command, mut config: Config) -> AppResult<()> {
    match command {
        Command::Ports { json } => list_ports(json),
        Command::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(&config)?);
            } else {
                let toml = toml::to_string_pretty(&config)
                    .map_err(serial_factory::ConfigError::from)?;
                print!("{toml}");
            }
            Ok(())
        }
        Command::Open {
            name,
            baud,
            parity,
            stop_bits,
            size,
            timeout_ms,
        } => {
            let serial = &mut config.serial;
            if let Some(baud) = baud {
                serial.baud = baud;
            }
            if let Some(parity) = parity {
                serial.parity = parity;
            }
            if let Some(stop_bits) = stop_bits {
                serial.stop_bits = stop_bits;
            }
            if let Some(size) = size {
                serial.size = size;
            }
            if let Some(timeout_ms) = timeout_ms {
                serial.read_timeout_ms = timeout_ms;
            }

            let name = name
                .or_else(|| config.port.name.clone())
                .ok_or(AppError::NoPortName)?;
            open_port(&config.port.resolve(&name), &config)
        }
    }
}

fn list_ports(json: bool) -> AppResult<()> {
    let ports = available_ports()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&ports)?);
        return Ok(());
    }

    if ports.is_empty() {
        println!("No serial ports detected on this system");
        return Ok(());
    }

    for port in ports {
        let description = [port.manufacturer, port.product]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ");
        println!("{:<24} {:<16} {}", port.name, port.kind, description);
    }
    Ok(())
}

fn open_port(name: &str, config: &Config) -> AppResult<()> {
    let factory = SerialPortFactory::new(name, &config.serial.to_port_config())?;
    let driver_config = factory.config();
    info!(
        port = %driver_config.name,
        baud = driver_config.baud,
        parity = ?driver_config.parity,
        stop_bits = ?driver_config.stop_bits,
        "configuration translated"
    );

    let port = factory.open()?;
    info!("Opened {name}");
    drop(port);

    println!("{name}: ok");
    Ok(())
}
