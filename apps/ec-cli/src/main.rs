use clap::{Parser, Subcommand, ValueEnum};
use ec_app::{AppResult, ConverterService, history_lines};
use ec_core::{Category, ConvertError, get_units_for_category};
use ec_store::{HistoryStore, SettingsStore, Theme};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "ec-cli")]
#[command(about = "Everything Converter CLI - length, weight, temperature, volume, speed and area", long_about = None)]
struct Cli {
    /// Directory holding settings.yaml and history.json
    #[arg(long, global = true, default_value = ".everything-converter")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a value between two units of one category
    Convert {
        /// Value to convert
        #[arg(allow_hyphen_values = true)]
        value: String,
        /// Category (length, weight, temperature, volume, speed, area)
        category: String,
        /// Source unit
        from: String,
        /// Target unit
        to: String,
        /// Print the unformatted numeric result
        #[arg(long)]
        raw: bool,
    },
    /// List units for a category, or every category
    Units {
        category: Option<String>,
    },
    /// Convert highlighted text such as "12 km" or "-40°F"
    Selection {
        #[arg(allow_hyphen_values = true)]
        text: String,
        /// Target unit (defaults from settings)
        #[arg(long)]
        to: Option<String>,
    },
    /// Show recent conversions
    History {
        /// Remove all history entries
        #[arg(long)]
        clear: bool,
    },
    /// Inspect or change settings
    #[command(subcommand)]
    Settings(SettingsCommands),
}

#[derive(Subcommand)]
enum SettingsCommands {
    /// Print the current settings
    Show,
    /// Restore default settings
    Reset,
    /// Set the default category and unit pair
    SetDefault {
        category: String,
        from: String,
        to: String,
    },
    /// Turn history recording on or off
    History {
        #[arg(value_enum)]
        state: Toggle,
    },
    /// Choose the color theme
    Theme {
        #[arg(value_enum)]
        theme: ThemeArg,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Toggle {
    On,
    Off,
}

#[derive(Clone, Copy, ValueEnum)]
enum ThemeArg {
    Light,
    Dark,
}

fn main() -> AppResult<()> {
    // Initialize tracing; stdout is reserved for results
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let data_dir = cli.data_dir.as_path();

    match cli.command {
        Commands::Convert {
            value,
            category,
            from,
            to,
            raw,
        } => cmd_convert(data_dir, &value, &category, &from, &to, raw),
        Commands::Units { category } => cmd_units(category.as_deref()),
        Commands::Selection { text, to } => cmd_selection(data_dir, &text, to.as_deref()),
        Commands::History { clear } => cmd_history(data_dir, clear),
        Commands::Settings(settings_cmd) => match settings_cmd {
            SettingsCommands::Show => cmd_settings_show(data_dir),
            SettingsCommands::Reset => cmd_settings_reset(data_dir),
            SettingsCommands::SetDefault { category, from, to } => {
                cmd_settings_set_default(data_dir, &category, &from, &to)
            }
            SettingsCommands::History { state } => {
                cmd_settings_history(data_dir, matches!(state, Toggle::On))
            }
            SettingsCommands::Theme { theme } => cmd_settings_theme(
                data_dir,
                match theme {
                    ThemeArg::Light => Theme::Light,
                    ThemeArg::Dark => Theme::Dark,
                },
            ),
        },
    }
}

fn settings_store(data_dir: &Path) -> SettingsStore {
    SettingsStore::new(data_dir.join("settings.yaml"))
}

fn open_service(data_dir: &Path) -> AppResult<ConverterService> {
    tracing::debug!(data_dir = %data_dir.display(), "opening stores");
    let settings = settings_store(data_dir).load()?;
    let history = HistoryStore::open(data_dir.join("history.json"))?;
    Ok(ConverterService::new(settings, Some(history)))
}

fn cmd_convert(
    data_dir: &Path,
    value: &str,
    category: &str,
    from: &str,
    to: &str,
    raw: bool,
) -> AppResult<()> {
    let mut service = open_service(data_dir)?;
    let outcome = service.run_text(value, category, from, to)?;
    if raw {
        println!("{}", outcome.result);
    } else {
        println!("{}", outcome.line);
    }
    Ok(())
}

fn cmd_units(category: Option<&str>) -> AppResult<()> {
    match category {
        Some(tag) => {
            let units = get_units_for_category(tag);
            if units.is_empty() {
                return Err(ConvertError::UnknownCategory {
                    category: tag.to_string(),
                }
                .into());
            }
            println!("{}", units.join(", "));
        }
        None => {
            for category in Category::ALL {
                println!("{:<12} {}", category, category.units().join(", "));
            }
        }
    }
    Ok(())
}

fn cmd_selection(data_dir: &Path, text: &str, to: Option<&str>) -> AppResult<()> {
    let mut service = open_service(data_dir)?;
    let outcome = service.convert_selection(text, to)?;
    println!("{}", outcome.line);
    Ok(())
}

fn cmd_history(data_dir: &Path, clear: bool) -> AppResult<()> {
    let mut history = HistoryStore::open(data_dir.join("history.json"))?;

    if clear {
        history.clear()?;
        println!("✓ History cleared");
        return Ok(());
    }

    if history.is_empty() {
        println!("No conversions yet");
        return Ok(());
    }

    let now = chrono::Utc::now().timestamp_millis();
    for line in history_lines(history.entries(), now) {
        println!("  {:<40} {}", line.text, line.age);
    }
    Ok(())
}

fn cmd_settings_show(data_dir: &Path) -> AppResult<()> {
    let settings = settings_store(data_dir).load()?;

    println!("Default category: {}", settings.default_category);
    println!(
        "Default units:    {} -> {}",
        settings.default_from_unit, settings.default_to_unit
    );
    println!(
        "History:          {}",
        if settings.enable_history { "on" } else { "off" }
    );
    println!(
        "Theme:            {}",
        match settings.theme {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    );
    println!("Popup shortcut:   {}", settings.shortcuts.popup);
    println!("Inline shortcut:  {}", settings.shortcuts.inline);
    for (category, defaults) in &settings.category_defaults {
        println!("  {:<12} {} -> {}", category, defaults.from, defaults.to);
    }
    Ok(())
}

fn cmd_settings_reset(data_dir: &Path) -> AppResult<()> {
    settings_store(data_dir).reset()?;
    println!("✓ Settings reset to defaults");
    Ok(())
}

fn cmd_settings_set_default(data_dir: &Path, category: &str, from: &str, to: &str) -> AppResult<()> {
    let store = settings_store(data_dir);
    let mut settings = store.load()?;
    let category: Category = category.parse()?;
    settings.set_default_units(category, from, to)?;
    store.save(&settings)?;
    println!("✓ Default conversion set to {category}: {from} -> {to}");
    Ok(())
}

fn cmd_settings_history(data_dir: &Path, enabled: bool) -> AppResult<()> {
    let store = settings_store(data_dir);
    let mut settings = store.load()?;
    settings.enable_history = enabled;
    store.save(&settings)?;
    println!("✓ History {}", if enabled { "enabled" } else { "disabled" });
    Ok(())
}

fn cmd_settings_theme(data_dir: &Path, theme: Theme) -> AppResult<()> {
    let store = settings_store(data_dir);
    let mut settings = store.load()?;
    settings.theme = theme;
    store.save(&settings)?;
    println!("✓ Settings saved successfully");
    Ok(())
}
