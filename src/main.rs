use anyhow::{Context, Result};
use clap::{crate_version, App as ClapApp, Arg};
use garden_tui::logger::{CustomLogger, LogBuffer};
use garden_tui::ui::Theme;
use garden_tui::{App, Config};
use log::{info, LevelFilter};

fn main() -> Result<()> {
    let themes = Theme::available_themes();
    let theme_names: Vec<&str> = themes.iter().map(String::as_str).collect();
    let matches = ClapApp::new("garden-tui")
        .version(crate_version!())
        .about("A terminal user interface for keeping track of garden plants")
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Directory holding config.yml")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("theme")
                .short("t")
                .long("theme")
                .value_name("NAME")
                .help("Color theme for this session")
                .possible_values(&theme_names)
                .takes_value(true),
        )
        .arg(
            Arg::with_name("no-seed")
                .long("no-seed")
                .help("Start with an empty plant list"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .help("Show debug messages in the log panel"),
        )
        .get_matches();

    let level = if matches.is_present("verbose") {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let log_buffer = LogBuffer::default();
    CustomLogger::new(log_buffer.clone(), level)
        .init()
        .context("Failed to initialize logger")?;

    let mut config = Config::new();
    config
        .load(matches.value_of("config"))
        .context("Failed to load configuration")?;
    if let Some(theme) = matches.value_of("theme") {
        config.set_theme_name(theme)?;
    }
    if matches.is_present("no-seed") {
        config.seed_demo_plants = false;
    }
    if let Some(path) = config.file_path() {
        info!("Using configuration at {}", path.display());
    }

    App::start(&config, log_buffer)?;
    Ok(())
}
