use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use kot_scorer::catalog::{Catalog, EventGroup, EventType, House, SportEvent};
use kot_scorer::config::Config;
use kot_scorer::placement::{Meet, MeetSnapshot, Rank};
use kot_scorer::ranking::{rank_awards, rank_standings, AwardCategory};
use kot_scorer::roster::ParticipantDraft;
use kot_scorer::{output, summary};

const EXIT_SUCCESS: i32 = 0;
const EXIT_SNAPSHOT: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum GroupArg {
    Track,
    Field,
}

impl From<GroupArg> for EventGroup {
    fn from(group: GroupArg) -> Self {
        match group {
            GroupArg::Track => EventGroup::Track,
            GroupArg::Field => EventGroup::Field,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show house standings (default if no subcommand)
    Standings {
        /// Print as JSON
        #[arg(long, conflicts_with = "tsv")]
        json: bool,
        /// Print as tab-separated values
        #[arg(long)]
        tsv: bool,
    },
    /// Show the best male and female athletes
    Awards {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show completed events and their placements
    Results,
    /// Show roster counts per house
    Stats,
    /// List catalog events
    Events {
        /// Only events a participant of this category may enter
        #[arg(long)]
        category: Option<String>,
        /// Only track or field events
        #[arg(long, value_enum)]
        group: Option<GroupArg>,
    },
    /// List registered participants
    Participants {
        /// Only participants entered in this event id
        #[arg(long)]
        event: Option<String>,
        /// Only names or numbers containing this text
        #[arg(long)]
        search: Option<String>,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Set or clear a placement slot of a catalog event
    Place {
        /// Event id, as shown by `events`
        event_id: String,
        /// Finishing position
        #[arg(value_parser = clap::value_parser!(u8).range(1..=4))]
        rank: u8,
        /// Participant id or number (individual) or house name (team); omit to clear
        value: Option<String>,
    },
    /// Set or clear a placement slot of a generic event
    Generic {
        /// Generic event name
        name: String,
        /// Finishing position
        #[arg(value_parser = clap::value_parser!(u8).range(1..=4))]
        rank: u8,
        /// House name; omit to clear
        house: Option<String>,
    },
    /// Set a house's manual (sukantara) score
    Sukantara {
        house: String,
        score: u32,
    },
    /// Register a participant
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        house: String,
        #[arg(long)]
        number: String,
        #[arg(long)]
        category: String,
        /// Event id to enter (repeatable)
        #[arg(long = "event")]
        events: Vec<String>,
    },
    /// Edit a registered participant; omitted fields keep their value
    Edit {
        /// Participant id or number
        participant: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        house: Option<String>,
        #[arg(long)]
        number: Option<String>,
        #[arg(long)]
        category: Option<String>,
        /// Event id to enter (repeatable); replaces the current entries
        #[arg(long = "event")]
        events: Vec<String>,
        /// Withdraw from every event
        #[arg(long, conflicts_with = "events")]
        clear_events: bool,
    },
}

#[derive(Parser, Debug)]
#[command(name = "kot")]
#[command(about = "Sports-day scoring and standings", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/kot-scorer/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Path to meet file (defaults to ~/.config/kot-scorer/meet.json)
    #[arg(short, long, global = true)]
    snapshot: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() {
    let cli = Cli::parse();
    kot_scorer::logging::init_logging(cli.verbose);

    let command = cli.command.unwrap_or(Commands::Standings {
        json: false,
        tsv: false,
    });

    // Load config
    let config_path = cli.config.map(PathBuf::from);
    let config = match kot_scorer::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    if let Err(errors) = kot_scorer::config::validate_config(&config) {
        report_errors("Config errors:", errors);
    }

    let snapshot_path = cli
        .snapshot
        .map(PathBuf::from)
        .or_else(|| config.snapshot.clone())
        .unwrap_or_else(kot_scorer::placement::get_snapshot_path);

    let snapshot = match kot_scorer::placement::load_snapshot(&snapshot_path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Meet file error: {:#}", e);
            std::process::exit(EXIT_SNAPSHOT);
        }
    };
    tracing::debug!(path = %snapshot_path.display(), "meet file loaded");

    let mut meet = Meet::from(snapshot);
    let catalog = Catalog::default();
    let use_colors = output::should_use_colors();

    match command {
        Commands::Standings { json, tsv } => {
            let standings = kot_scorer::scoring::compute_standings(
                &meet.placements,
                &catalog,
                &meet.roster,
                &meet.sukantara,
            );
            let ranked = rank_standings(&standings);

            if json {
                print_json(&ranked);
            } else if tsv {
                println!("{}", output::format_standings_tsv(&ranked));
            } else {
                println!("{}", output::format_standings_table(&ranked, use_colors));
            }
        }
        Commands::Awards { json } => {
            let awards = rank_awards(
                &meet.placements,
                &catalog,
                &meet.roster,
                &config.awards.convention(),
            );

            if json {
                print_json(&awards);
            } else {
                println!(
                    "{}",
                    output::format_awards(
                        "Best Male Athletes",
                        awards.list(AwardCategory::Male),
                        use_colors
                    )
                );
                println!();
                println!(
                    "{}",
                    output::format_awards(
                        "Best Female Athletes",
                        awards.list(AwardCategory::Female),
                        use_colors
                    )
                );
            }
        }
        Commands::Results => {
            let events = summary::event_summaries(&meet.placements, &catalog, &meet.roster);
            let generic = summary::generic_summaries(&meet.placements);
            println!("{}", output::format_event_summaries(&events, use_colors));
            println!();
            println!("{}", output::format_generic_summaries(&generic, use_colors));
        }
        Commands::Stats => {
            println!(
                "{}",
                output::format_roster_stats(&summary::roster_stats(&meet.roster))
            );
        }
        Commands::Events { category, group } => {
            let group = group.map(EventGroup::from);
            match category {
                Some(c) => {
                    let in_group = |e: &&SportEvent| group.map_or(true, |g| e.group == g);
                    for event_type in [EventType::Individual, EventType::Team] {
                        let events: Vec<_> = catalog
                            .eligible_events(&c, event_type)
                            .into_iter()
                            .filter(in_group)
                            .collect();
                        println!("{} events open to {}:", event_type, c.trim());
                        println!("{}", output::format_events(&events));
                    }
                }
                None => {
                    let events: Vec<_> = match group {
                        Some(g) => catalog.by_group(g).collect(),
                        None => catalog.events().iter().collect(),
                    };
                    println!("{}", output::format_events(&events));
                }
            }
        }
        Commands::Participants {
            event,
            search,
            json,
        } => {
            if let Some(ref id) = event {
                if catalog.get(id).is_none() {
                    usage_error(&format!(
                        "Unknown event '{}'. Run `kot events` to list event ids.",
                        id
                    ));
                }
            }

            let found = meet.roster.search(event.as_deref(), search.as_deref());
            if json {
                print_json(&found);
            } else {
                println!("{}", output::format_participants(&found, use_colors));
            }
        }
        Commands::Place {
            event_id,
            rank,
            value,
        } => {
            let rank = parse_rank(rank);
            let Some(event) = catalog.get(&event_id) else {
                usage_error(&format!(
                    "Unknown event '{}'. Run `kot events` to list event ids.",
                    event_id
                ));
            };

            let resolved = value.map(|v| match event.event_type {
                EventType::Team => parse_house(&v).name().to_string(),
                EventType::Individual => match meet.roster.resolve(&v) {
                    Some(p) => p.id.clone(),
                    None => usage_error(&format!("No participant with id or number '{}'", v)),
                },
            });

            let message = match &resolved {
                Some(v) => format!("{} {}: {}", event.name, rank, v),
                None => format!("{} {}: cleared", event.name, rank),
            };
            meet.placements.set_placement(&event_id, rank, resolved);
            save(&snapshot_path, meet);
            println!("{}", message);
        }
        Commands::Generic { name, rank, house } => {
            let rank = parse_rank(rank);
            if !is_generic_event(&config, &name) {
                usage_error(&format!(
                    "Unknown generic event '{}'. Configured: {}",
                    name,
                    config.generic_event_names().join(", ")
                ));
            }

            let house = house.as_deref().map(parse_house);
            meet.placements
                .set_generic_placement(name.trim(), rank, house);
            save(&snapshot_path, meet);
            match house {
                Some(h) => println!("{} {}: {}", name.trim(), rank, h),
                None => println!("{} {}: cleared", name.trim(), rank),
            }
        }
        Commands::Sukantara { house, score } => {
            let house = parse_house(&house);
            meet.sukantara.insert(house, score);
            save(&snapshot_path, meet);
            println!("{} sukantara: {}", house, score);
        }
        Commands::Register {
            name,
            house,
            number,
            category,
            events,
        } => {
            let draft = ParticipantDraft {
                name,
                house: parse_house(&house),
                participant_number: number,
                category,
                events,
            };

            let id = match kot_scorer::roster::register_participant(&mut meet.roster, draft, &catalog)
            {
                Ok(id) => id,
                Err(errors) => report_errors("Registration errors:", errors),
            };
            save(&snapshot_path, meet);
            println!("Registered participant {}", id);
        }
        Commands::Edit {
            participant,
            name,
            house,
            number,
            category,
            events,
            clear_events,
        } => {
            let Some(current) = meet.roster.resolve(&participant) else {
                usage_error(&format!(
                    "No participant with id or number '{}'",
                    participant
                ));
            };
            let id = current.id.clone();
            let mut draft = ParticipantDraft::from(current);

            if let Some(name) = name {
                draft.name = name;
            }
            if let Some(house) = house {
                draft.house = parse_house(&house);
            }
            if let Some(number) = number {
                draft.participant_number = number;
            }
            if let Some(category) = category {
                draft.category = category;
            }
            if clear_events {
                draft.events.clear();
            } else if !events.is_empty() {
                draft.events = events;
            }

            if let Err(errors) =
                kot_scorer::roster::edit_participant(&mut meet.roster, &id, draft, &catalog)
            {
                report_errors("Edit errors:", errors);
            }
            save(&snapshot_path, meet);
            println!("Updated participant {}", id);
        }
    }

    std::process::exit(EXIT_SUCCESS);
}

fn usage_error(message: &str) -> ! {
    eprintln!("{}", message);
    std::process::exit(EXIT_CONFIG);
}

fn report_errors(title: &str, errors: Vec<String>) -> ! {
    eprintln!("{}", title);
    for error in errors {
        eprintln!("  - {}", error);
    }
    std::process::exit(EXIT_CONFIG);
}

fn parse_rank(position: u8) -> Rank {
    match Rank::from_position(position as usize) {
        Some(rank) => rank,
        None => usage_error(&format!("Invalid rank {}. Must be between 1 and 4.", position)),
    }
}

fn parse_house(value: &str) -> House {
    match House::parse(value) {
        Some(house) => house,
        None => usage_error(&format!(
            "Unknown house '{}'. Expected one of: Biru, Hijau, Kuning, Merah",
            value
        )),
    }
}

fn is_generic_event(config: &Config, name: &str) -> bool {
    config
        .generic_event_names()
        .iter()
        .any(|n| n.trim() == name.trim())
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Failed to serialize output: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
    }
}

fn save(path: &Path, meet: Meet) {
    if let Err(e) = kot_scorer::placement::save_snapshot(path, &MeetSnapshot::from(meet)) {
        eprintln!("Meet file error: {:#}", e);
        std::process::exit(EXIT_SNAPSHOT);
    }
}
