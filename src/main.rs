//! slidein: demo host for the slide-in search bar
//!
//! Usage:
//!   slidein                    - Open the demo window
//!   slidein config             - Print the effective configuration
//!   slidein help               - Show help
//!   slidein --config <path>    - Use a config file other than the default

use iced::window;
use slidein::app::{self, Host};
use slidein::config;
use std::env;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> iced::Result {
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let mut args: Vec<String> = env::args().skip(1).collect();
    let config_path = match take_config_flag(&mut args) {
        Ok(path) => path,
        Err(e) => fail(&e),
    };

    match args.first().map(String::as_str) {
        None => start(config_path),
        Some(cmd) => match handle_cli_command(cmd, config_path) {
            Ok(()) => Ok(()),
            Err(e) => fail(&e),
        },
    }
}

fn fail(message: &str) -> ! {
    eprintln!("Error: {}", message);
    eprintln!("Run 'slidein help' for usage");
    std::process::exit(2)
}

/// Remove `--config <path>` from `args`.
fn take_config_flag(args: &mut Vec<String>) -> Result<Option<PathBuf>, String> {
    let Some(index) = args.iter().position(|a| a == "--config") else {
        return Ok(None);
    };
    if index + 1 >= args.len() {
        return Err("--config needs a path".to_string());
    }
    let path = args.remove(index + 1);
    args.remove(index);
    Ok(Some(PathBuf::from(path)))
}

fn handle_cli_command(cmd: &str, config_path: Option<PathBuf>) -> Result<(), String> {
    match cmd {
        "config" => {
            let config = config::load_or_default(config_path.as_deref());
            let json = serde_json::to_string_pretty(&config).map_err(|e| e.to_string())?;
            println!("{}", json);
            Ok(())
        }
        "help" | "--help" | "-h" => {
            println!("slidein - animated slide-in search bar demo\n");
            println!("Usage: slidein [--config <path>] [command]\n");
            println!("Commands:");
            println!("  (none)   Open the demo window");
            println!("  config   Print the effective configuration");
            println!("  help     Show this help message");
            match config::default_path() {
                Some(path) => println!("\nDefault config: {}", path.display()),
                None => println!("\nNo default config directory on this platform"),
            }
            Ok(())
        }
        _ => Err(format!("Unknown command: {}", cmd)),
    }
}

fn start(config_path: Option<PathBuf>) -> iced::Result {
    let config = config::load_or_default(config_path.as_deref());

    tracing::info!(
        cancel = config.search_bar.show_cancel,
        "Starting slidein with placeholder {:?}",
        config.placeholder
    );

    iced::application(Host::title, Host::update, Host::view)
        .subscription(Host::subscription)
        .theme(Host::theme)
        .window(window::Settings {
            size: app::WINDOW_SIZE,
            position: window::Position::Centered,
            resizable: true,
            ..Default::default()
        })
        .antialiasing(true)
        .run_with(move || (Host::new(config, app::WINDOW_SIZE), iced::Task::none()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_config_flag_is_removed() {
        let mut list = args(&["--config", "/tmp/c.json", "config"]);
        let path = take_config_flag(&mut list).unwrap();
        assert_eq!(path, Some(PathBuf::from("/tmp/c.json")));
        assert_eq!(list, args(&["config"]));
    }

    #[test]
    fn test_config_flag_needs_path() {
        let mut list = args(&["--config"]);
        assert!(take_config_flag(&mut list).is_err());
    }

    #[test]
    fn test_unknown_command_fails() {
        let err = handle_cli_command("frobnicate", None).unwrap_err();
        assert!(err.contains("frobnicate"));
    }

    #[test]
    fn test_no_flag() {
        let mut list = args(&["help"]);
        assert_eq!(take_config_flag(&mut list).unwrap(), None);
        assert_eq!(list, args(&["help"]));
    }
}
