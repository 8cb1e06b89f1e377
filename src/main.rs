use cardsmith::card::CardDefinition;
use cardsmith::catalog::Catalog;
use cardsmith::config::{self, CardsmithConfig};
use cardsmith::gallery::{self, Category};
use cardsmith::output;
use cardsmith::values::{self, Values};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "cardsmith")]
#[command(about = "Parameterized HTML email cards")]
#[command(long_about = "\
Parameterized HTML email cards

Every card is a set of named text fields plus a template that renders them
into a self-contained, inline-styled HTML table. Render a card with its
defaults, override fields from a JSON file or the command line, or write a
preview page of the whole catalog.

Cards containing the accent gold also get a derived color variant
(<id>-red by default). Variant settings live in cardsmith.toml.

Multi-line fields accept a little markup:
  *text*           italic
  [label](url)     link
  newline          line break

Run 'cardsmith gen-config' to generate a documented cardsmith.toml.")]
#[command(version)]
struct Cli {
    /// Directory holding cardsmith.toml
    #[arg(long, default_value = ".", global = true)]
    config_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List every card in the catalog
    List {
        /// Print a JSON array instead of text
        #[arg(long)]
        json: bool,
        /// Only cards in this category (card category or gallery section)
        #[arg(long)]
        category: Option<String>,
    },
    /// Show a card's fields and defaults
    Show {
        /// Card id, e.g. simple-text
        id: String,
    },
    /// Print the HTML fragment of a card
    Render {
        /// Card id, e.g. simple-text
        id: String,
        /// JSON object of field values, layered over the defaults
        #[arg(long)]
        values: Option<PathBuf>,
        /// Field assignment name=value, applied last (repeatable)
        #[arg(long = "set", value_name = "NAME=VALUE")]
        assignments: Vec<String>,
        /// Zero the outer padding, as when pasting into an existing layout
        #[arg(long)]
        flush: bool,
    },
    /// Write a preview page of every card
    Gallery {
        /// Output directory
        #[arg(long, default_value = "gallery")]
        output: PathBuf,
    },
    /// Print a stock cardsmith.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::List { json, category } => {
            let (_, catalog) = load_catalog(&cli.config_dir)?;
            let cards: Vec<&CardDefinition> = catalog
                .iter()
                .filter(|card| category.as_deref().is_none_or(|c| in_category(card, c)))
                .collect();
            if json {
                println!("{}", output::format_card_list_json(&cards)?);
            } else {
                output::print_card_list(&cards);
            }
        }
        Command::Show { id } => {
            let (_, catalog) = load_catalog(&cli.config_dir)?;
            output::print_card_fields(catalog.get(&id)?);
        }
        Command::Render {
            id,
            values: values_file,
            assignments,
            flush,
        } => {
            let (_, catalog) = load_catalog(&cli.config_dir)?;
            let card = catalog.get(&id)?;
            let values = resolve_values(card, values_file, &assignments)?;
            let html = card.render(&values);
            if flush {
                println!("{}", gallery::strip_outer_padding(&html));
            } else {
                println!("{}", html);
            }
        }
        Command::Gallery { output: out_dir } => {
            let (config, catalog) = load_catalog(&cli.config_dir)?;
            println!("==> Rendering gallery → {}", out_dir.display());
            let index = gallery::write_gallery(&catalog, &config.gallery, &out_dir)?;
            output::print_gallery_written(&catalog, &index);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Load `cardsmith.toml` and build the catalog it describes.
fn load_catalog(
    config_dir: &Path,
) -> Result<(CardsmithConfig, Catalog), Box<dyn std::error::Error>> {
    let config = config::load_config(config_dir)?;
    let catalog = Catalog::build(&config.variants)?;
    Ok((config, catalog))
}

/// Match either the card's own category or its gallery section.
fn in_category(card: &CardDefinition, category: &str) -> bool {
    card.category == category || Category::classify(card).slug() == category
}

/// Defaults, then the JSON file, then `--set` assignments; later wins.
fn resolve_values(
    card: &CardDefinition,
    values_file: Option<PathBuf>,
    assignments: &[String],
) -> Result<Values, values::ValuesError> {
    let mut values = card.default_values();
    if let Some(path) = values_file {
        values.merge(values::load_values(&path)?);
    }
    for assignment in assignments {
        let (name, value) = values::parse_assignment(assignment)?;
        values.set(name, value);
    }
    Ok(values)
}
