use std::env;

use anyhow::{anyhow, bail, Context, Result};
use parcours::profiles::{columns, ProfileRecord, ProfileSummary, TimelineBuilder};
use parcours::datasets::ProfileDataset;
use parcours::workspace::Workspace;
use serde_json::json;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let command = Command::parse(env::args().skip(1))?;
    if matches!(command, Command::Help) {
        print_usage();
        return Ok(());
    }
    let workspace = Workspace::new()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(workspace.config.logging.level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match command {
        Command::Init => init(&workspace),
        Command::Groups => list_groups(&workspace),
        Command::Breakdown {
            group,
            column,
            filter,
        } => breakdown(&workspace, &group, &column, filter.as_ref()),
        Command::Sample {
            group,
            domain,
            confirm,
            json,
        } => sample(&workspace, &group, &domain, confirm, json),
        Command::Timeline {
            group,
            profile,
            json,
        } => timeline(&workspace, &group, &profile, json),
        Command::Representatives { domain } => representatives(&workspace, domain.as_deref()),
        Command::Help => Ok(()),
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Init,
    Groups,
    Breakdown {
        group: String,
        column: String,
        filter: Option<(String, String)>,
    },
    Sample {
        group: String,
        domain: String,
        confirm: bool,
        json: bool,
    },
    Timeline {
        group: String,
        profile: String,
        json: bool,
    },
    Representatives {
        domain: Option<String>,
    },
    Help,
}

#[derive(Default)]
struct Flags {
    group: Option<String>,
    domain: Option<String>,
    column: Option<String>,
    filter: Option<(String, String)>,
    profile: Option<String>,
    confirm: bool,
    json: bool,
}

impl Command {
    fn parse(args: impl IntoIterator<Item = String>) -> Result<Self> {
        let mut args = args.into_iter();
        let Some(name) = args.next() else {
            return Ok(Command::Help);
        };
        if matches!(name.as_str(), "--help" | "-h" | "help") {
            return Ok(Command::Help);
        }

        let mut flags = Flags::default();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--group" => flags.group = Some(value_for(&mut args, "--group")?),
                "--domain" => flags.domain = Some(value_for(&mut args, "--domain")?),
                "--column" => flags.column = Some(value_for(&mut args, "--column")?),
                "--profile" => flags.profile = Some(value_for(&mut args, "--profile")?),
                "--filter" => {
                    let raw = value_for(&mut args, "--filter")?;
                    let (column, value) = raw
                        .split_once('=')
                        .context("Expected --filter COLUMN=VALUE")?;
                    flags.filter = Some((column.to_string(), value.to_string()));
                }
                "--confirm" => flags.confirm = true,
                "--json" => flags.json = true,
                other => {
                    return Err(anyhow!(
                        "Unknown argument '{other}'. Run with --help for usage instructions."
                    ));
                }
            }
        }

        let require = |value: Option<String>, flag: &str| {
            value.with_context(|| format!("'{name}' requires {flag}"))
        };
        let command = match name.as_str() {
            "init" => Command::Init,
            "groups" => Command::Groups,
            "breakdown" => Command::Breakdown {
                group: require(flags.group, "--group")?,
                column: require(flags.column, "--column")?,
                filter: flags.filter,
            },
            "sample" => Command::Sample {
                group: require(flags.group, "--group")?,
                domain: require(flags.domain, "--domain")?,
                confirm: flags.confirm,
                json: flags.json,
            },
            "timeline" => Command::Timeline {
                group: require(flags.group, "--group")?,
                profile: require(flags.profile, "--profile")?,
                json: flags.json,
            },
            "representatives" => Command::Representatives {
                domain: flags.domain,
            },
            other => bail!("Unknown command '{other}'. Run with --help for usage instructions."),
        };
        Ok(command)
    }
}

fn value_for(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String> {
    args.next()
        .with_context(|| format!("Expected a value after {flag}"))
}

fn print_usage() {
    println!("Parcours: representative career paths per domain");
    println!("Usage: parcours <command> [options]");
    println!("Commands:");
    println!("  init                                     Write a default config.toml");
    println!("  groups                                   List discovered source groups");
    println!("  breakdown --group G --column C [--filter COL=VALUE]");
    println!("                                           Count the values of a column");
    println!("  sample --group G --domain D [--confirm] [--json]");
    println!("                                           Show a random profile of domain D;");
    println!("                                           --confirm stores it as representative");
    println!("  timeline --group G --profile URL [--json]");
    println!("                                           Show one profile's career path");
    println!("  representatives [--domain D]             List stored representatives");
    println!("Environment:");
    println!("  PARCOURS_HOME   Workspace root (config/, datasets/, store file)");
    println!("  RUST_LOG        Log filter, overrides logging.level from config.toml");
}

fn init(workspace: &Workspace) -> Result<()> {
    if workspace.init_config()? {
        println!("Configuration written to {}", workspace.config_path.display());
    } else {
        println!(
            "Configuration already present at {}",
            workspace.config_path.display()
        );
    }
    Ok(())
}

fn list_groups(workspace: &Workspace) -> Result<()> {
    let sources = workspace.dataset_sources()?;
    if sources.is_empty() {
        println!("No datasets found in {}", workspace.datasets_dir().display());
        return Ok(());
    }
    for source in sources {
        let dataset = ProfileDataset::from_csv_path(&source.group, &source.path)?;
        println!(
            "{}\t{} profiles\t{}",
            source.group,
            dataset.len(),
            source.path.display()
        );
    }
    Ok(())
}

fn breakdown(
    workspace: &Workspace,
    group: &str,
    column: &str,
    filter: Option<&(String, String)>,
) -> Result<()> {
    let mut dataset = workspace.load_dataset(group)?;
    if let Some((filter_column, value)) = filter {
        dataset = dataset.filter_eq(filter_column, value);
    }
    if !dataset.column_exists(column) {
        println!("Column '{column}' not found.");
        return Ok(());
    }
    let counts = dataset.value_counts(column);
    let total: usize = counts.iter().map(|(_, count)| count).sum();
    println!("Based on {} profiles", dataset.len());
    for (value, count) in counts {
        let share = if total == 0 {
            0.0
        } else {
            count as f64 * 100.0 / total as f64
        };
        println!("{count:>5}  {share:>5.1}%  {value}");
    }
    Ok(())
}

fn sample(
    workspace: &Workspace,
    group: &str,
    domain: &str,
    confirm: bool,
    json: bool,
) -> Result<()> {
    let dataset = workspace.load_dataset(group)?;
    if !dataset.column_exists(columns::LAST_POSITION_DOMAIN) {
        bail!(
            "Column '{}' not found in group '{group}'",
            columns::LAST_POSITION_DOMAIN
        );
    }
    let candidates = dataset.filter_eq(columns::LAST_POSITION_DOMAIN, domain);
    let Some(profile) = candidates.sample_one(&mut rand::thread_rng()) else {
        println!("No profile in group '{group}' for domain '{domain}'.");
        return Ok(());
    };

    show_profile(&profile, json)?;

    if confirm {
        workspace.open_store()?.record(&profile, domain, group)?;
        println!(
            "Profile stored as representative of '{domain}' in {}",
            workspace.store_path().display()
        );
    }
    Ok(())
}

fn timeline(workspace: &Workspace, group: &str, identifier: &str, json: bool) -> Result<()> {
    let dataset = workspace.load_dataset(group)?;
    let profile = dataset
        .find_by_identity(identifier)
        .with_context(|| format!("No profile '{identifier}' in group '{group}'"))?;
    show_profile(&profile, json)
}

fn show_profile(profile: &ProfileRecord, json: bool) -> Result<()> {
    let summary = ProfileSummary::from_record(profile);
    let builder = TimelineBuilder::new();
    if json {
        let payload = json!({
            "identifier": profile.identity(),
            "summary": summary,
            "timeline": builder.entries(profile),
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    for line in summary.lines() {
        println!("{line}");
    }
    println!();
    println!("Career path:");
    for line in builder.build(profile) {
        println!("- {line}");
    }
    Ok(())
}

fn representatives(workspace: &Workspace, domain: Option<&str>) -> Result<()> {
    let store = workspace.open_store()?;
    let entries = match domain {
        Some(domain) => store.entries_for_domain(domain)?,
        None => store.entries()?,
    };
    if entries.is_empty() {
        println!("No representative profiles stored yet.");
        return Ok(());
    }
    for entry in entries {
        println!(
            "{}\t{}\t{}\t{}",
            entry.timestamp.to_rfc3339(),
            entry.domain,
            entry.source_group,
            entry.identifier
        );
    }
    Ok(())
}
