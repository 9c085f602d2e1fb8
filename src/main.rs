use clap::{Parser, Subcommand, ValueEnum};
use kaffiy_dashboard::cards::{CardId, DASHBOARD_CARDS};
use kaffiy_dashboard::layout::{plan_cards, CardSlot, Column};
use kaffiy_dashboard::logging;
use kaffiy_dashboard::preferences::CardPreferences;
use kaffiy_dashboard::settings::Settings;
use kaffiy_dashboard::storage::FileStore;
use kaffiy_dashboard::theme::{Theme, ThemePreference};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "kaffiy_dashboard", version, about = "Manage kaffiy dashboard preferences")]
struct Cli {
    /// Settings file; preference storage lives next to it.
    #[arg(long, global = true, default_value = "settings.json")]
    settings: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, PartialEq, Eq, Subcommand)]
enum Command {
    /// List dashboard cards and their visibility
    Cards,
    /// Flip a card's visibility
    Toggle { card: CardId },
    /// Make a card visible
    Show { card: CardId },
    /// Hide a card
    Hide { card: CardId },
    /// Show every card again
    Reset,
    /// Print the cards the dashboard renders
    Layout,
    /// Print or change the barista theme
    Theme {
        #[arg(value_enum)]
        choice: Option<ThemeChoice>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ThemeChoice {
    Light,
    Dark,
    Toggle,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = Settings::load(&cli.settings)?;
    logging::init(settings.debug_logging, settings.log_file.as_ref().map(PathBuf::from));

    let storage = FileStore::new(settings.storage_path(&cli.settings));
    tracing::debug!(dir = %storage.dir().display(), "using preference storage");

    match cli.command.unwrap_or(Command::Cards) {
        Command::Cards => {
            let prefs = CardPreferences::load_with_key(&storage, &settings.cards_key);
            for card in &DASHBOARD_CARDS {
                let mark = if prefs.get_visibility(card.id) { "on " } else { "off" };
                println!("[{mark}] {:<22} {}", card.id, card.name);
            }
        }
        Command::Toggle { card } => {
            let mut prefs = CardPreferences::load_with_key(&storage, &settings.cards_key);
            prefs.toggle(card);
            report(card, &prefs);
        }
        Command::Show { card } => {
            let mut prefs = CardPreferences::load_with_key(&storage, &settings.cards_key);
            prefs.set_visibility(card, true);
            report(card, &prefs);
        }
        Command::Hide { card } => {
            let mut prefs = CardPreferences::load_with_key(&storage, &settings.cards_key);
            prefs.set_visibility(card, false);
            report(card, &prefs);
        }
        Command::Reset => {
            let mut prefs = CardPreferences::load_with_key(&storage, &settings.cards_key);
            prefs.reset_to_default();
            println!("all dashboard cards visible");
        }
        Command::Layout => {
            let prefs = CardPreferences::load_with_key(&storage, &settings.cards_key);
            for planned in plan_cards(prefs.visibility(), &settings.plan()) {
                let column = match planned.column {
                    Column::Main => "main",
                    Column::Sidebar => "sidebar",
                };
                let note = match planned.slot {
                    CardSlot::ChurnAlert { locked: true } => " (locked)".to_string(),
                    CardSlot::TrialProgress { used, limit } => format!(" ({used}/{limit})"),
                    CardSlot::ActiveCampaigns => " + live feed".to_string(),
                    _ => String::new(),
                };
                println!("{column:<8} {}{note}", planned.slot.card().descriptor().name);
            }
        }
        Command::Theme { choice } => {
            let mut theme = ThemePreference::load_with_key(&storage, &settings.theme_key);
            match choice {
                None => {}
                Some(ThemeChoice::Toggle) => {
                    theme.toggle();
                }
                Some(ThemeChoice::Light) => theme.set_theme(Theme::Light),
                Some(ThemeChoice::Dark) => theme.set_theme(Theme::Dark),
            }
            println!("{}", theme.theme());
        }
    }
    Ok(())
}

fn report(card: CardId, prefs: &CardPreferences<&FileStore>) {
    let state = if prefs.get_visibility(card) { "visible" } else { "hidden" };
    println!("{card} is now {state}");
    if !prefs.is_persisted() {
        eprintln!("warning: the change could not be saved and will be lost on restart");
    }
}
