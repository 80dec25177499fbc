//! Settings CLI commands

use clap::Subcommand;

use crate::config::paths::PocketbookPaths;
use crate::config::settings::{Settings, Theme, AVAILABLE_CURRENCIES};
use crate::error::{PocketbookError, PocketbookResult};
use crate::models::Category;

/// Config subcommands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show paths and settings
    Show,

    /// Change the display currency (e.g., "EUR")
    Currency {
        /// ISO currency code
        code: String,
    },

    /// Change the category used when none is given
    DefaultCategory {
        /// Category name
        category: String,
    },

    /// Change the theme preference (light, dark, system)
    Theme {
        /// Theme name
        theme: String,
    },

    /// List supported currencies
    Currencies,
}

/// Handle a config command; no subcommand shows the configuration
pub fn handle_config_command(
    paths: &PocketbookPaths,
    settings: &mut Settings,
    cmd: Option<ConfigCommands>,
) -> PocketbookResult<()> {
    match cmd.unwrap_or(ConfigCommands::Show) {
        ConfigCommands::Show => {
            println!("Pocketbook Configuration");
            println!("========================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Expenses file:    {}", paths.expenses_file().display());
            println!("Budgets file:     {}", paths.budgets_file().display());
            println!("Export directory: {}", paths.export_dir().display());
            println!();
            println!("Settings:");
            println!(
                "  Currency:         {} ({})",
                settings.currency_code,
                settings.currency_symbol()
            );
            println!("  Default category: {}", settings.default_category);
            println!("  Theme:            {}", settings.theme);
        }

        ConfigCommands::Currency { code } => {
            settings.set_currency(&code)?;
            settings.save(paths)?;
            println!(
                "Currency set to {} ({})",
                settings.currency_code,
                settings.currency_symbol()
            );
        }

        ConfigCommands::DefaultCategory { category } => {
            settings.default_category = category
                .parse::<Category>()
                .map_err(PocketbookError::Validation)?;
            settings.save(paths)?;
            println!("Default category set to {}", settings.default_category);
        }

        ConfigCommands::Theme { theme } => {
            settings.theme = theme.parse::<Theme>().map_err(PocketbookError::Validation)?;
            settings.save(paths)?;
            println!("Theme set to {}", settings.theme);
        }

        ConfigCommands::Currencies => {
            for currency in AVAILABLE_CURRENCIES {
                println!("{:4} {:3} {}", currency.code, currency.symbol, currency.name);
            }
        }
    }

    Ok(())
}
