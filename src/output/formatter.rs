use std::io::IsTerminal;
use owo_colors::OwoColorize;
use terminal_size::{Width, terminal_size};

use crate::catalog::{House, SportEvent};
use crate::roster::Participant;
use crate::ranking::AthleteAward;
use crate::scoring::HouseStandings;
use crate::summary::{EventSummary, GenericSummary, PlacementRow, RosterStats};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate a name to fit available width, accounting for Unicode
fn truncate_name(name: &str, max_width: usize) -> String {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() <= max_width {
        name.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

fn house_label(house: House, use_colors: bool) -> String {
    let name = format!("{:<6}", house.name());
    if !use_colors {
        return name;
    }
    match house {
        House::Biru => name.blue().bold().to_string(),
        House::Hijau => name.green().bold().to_string(),
        House::Kuning => name.yellow().bold().to_string(),
        House::Merah => name.red().bold().to_string(),
    }
}

/// Format ranked standings as a table with a header row.
/// Columns: position, house, gold, silver, bronze, 4th, individual points,
/// team points, sukantara, total.
pub fn format_standings_table(standings: &[HouseStandings], use_colors: bool) -> String {
    let header = format!(
        "{:>3} {:<6} {:>4} {:>4} {:>4} {:>4} {:>6} {:>6} {:>6} {:>6}",
        "#", "House", "G", "S", "B", "4th", "Indiv", "Team", "Manual", "Total"
    );

    let mut lines = vec![if use_colors {
        header.dimmed().to_string()
    } else {
        header
    }];

    for (idx, s) in standings.iter().enumerate() {
        let total = format!("{:>6}", s.total_points());
        lines.push(format!(
            "{:>2}. {} {:>4} {:>4} {:>4} {:>4} {:>6} {:>6} {:>6} {}",
            idx + 1,
            house_label(s.house, use_colors),
            s.total_gold(),
            s.total_silver(),
            s.total_bronze(),
            s.total_fourth(),
            s.individual_points(),
            s.team_points(),
            s.sukantara,
            if use_colors { total.bold().to_string() } else { total },
        ));
    }

    lines.join("\n")
}

/// Format ranked standings as tab-separated values for scripting
/// Columns: house, gold, silver, bronze, fourth, total points (no headers, no colors)
pub fn format_standings_tsv(standings: &[HouseStandings]) -> String {
    standings
        .iter()
        .map(|s| {
            format!(
                "{}\t{}\t{}\t{}\t{}\t{}",
                s.house,
                s.total_gold(),
                s.total_silver(),
                s.total_bronze(),
                s.total_fourth(),
                s.total_points()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format one best-athlete list under a title line
pub fn format_awards(title: &str, athletes: &[AthleteAward], use_colors: bool) -> String {
    let heading = if use_colors {
        title.bold().to_string()
    } else {
        title.to_string()
    };

    if athletes.is_empty() {
        return format!("{}\n  No medalists yet.", heading);
    }

    // "  1. " + number + house + medals + points
    let fixed_width = 5 + 8 + 7 + 16 + 8;
    let name_width = match get_terminal_width() {
        Some(width) if width > fixed_width + 10 => Some(width - fixed_width),
        Some(_) => Some(20),
        None => None,
    };

    let mut lines = vec![heading];
    for (idx, athlete) in athletes.iter().enumerate() {
        let name = match name_width {
            Some(width) => truncate_name(&athlete.name, width),
            None => athlete.name.clone(),
        };
        let medals = format!(
            "{}G {}S {}B",
            athlete.medals.gold, athlete.medals.silver, athlete.medals.bronze
        );
        lines.push(format!(
            "  {}. {:<7} {} {:<12} {:>4} pts  {}",
            idx + 1,
            athlete.participant_number,
            house_label(athlete.house, use_colors),
            medals,
            athlete.points,
            if use_colors { name.bold().to_string() } else { name },
        ));
    }

    lines.join("\n")
}

fn format_row(row: &PlacementRow) -> String {
    match &row.athlete {
        Some(athlete) => format!(
            "  {}. {:<6} {} ({}) +{}",
            row.position, row.house.name(), athlete.name, athlete.participant_number, row.points
        ),
        None => format!("  {}. {:<6} +{}", row.position, row.house.name(), row.points),
    }
}

/// Format completed events with their placements
pub fn format_event_summaries(summaries: &[EventSummary], use_colors: bool) -> String {
    if summaries.is_empty() {
        return "No results recorded.".to_string();
    }

    summaries
        .iter()
        .map(|summary| {
            let title = format!("{} [{}]", summary.event_name, summary.event_id);
            let mut lines = vec![if use_colors {
                title.bold().to_string()
            } else {
                title
            }];
            lines.extend(summary.rows.iter().map(format_row));
            lines.join("\n")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format completed generic events with their house placements
pub fn format_generic_summaries(summaries: &[GenericSummary], use_colors: bool) -> String {
    if summaries.is_empty() {
        return "No generic results recorded.".to_string();
    }

    summaries
        .iter()
        .map(|summary| {
            let mut lines = vec![if use_colors {
                summary.name.bold().to_string()
            } else {
                summary.name.clone()
            }];
            lines.extend(summary.rows.iter().map(format_row));
            lines.join("\n")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_roster_stats(stats: &RosterStats) -> String {
    let mut lines = vec![
        format!("Participants: {}", stats.total_participants),
        format!("Event entries: {}", stats.total_entries),
    ];
    for (house, count) in &stats.house_counts {
        lines.push(format!("  {:<6} {}", house.name(), count));
    }
    lines.join("\n")
}

/// Format participants one per line: index, bib number, house, category,
/// name, entered events
pub fn format_participants(participants: &[&Participant], use_colors: bool) -> String {
    if participants.is_empty() {
        return "No participants found.".to_string();
    }

    participants
        .iter()
        .enumerate()
        .map(|(idx, p)| {
            let index_str = format!("{:>3}.", idx + 1);
            format!(
                "{} {:<7} {} {:<8} {}  [{}]",
                if use_colors { index_str.dimmed().to_string() } else { index_str },
                p.participant_number,
                house_label(p.house, use_colors),
                p.category,
                if use_colors { p.name.bold().to_string() } else { p.name.clone() },
                p.events.join(", "),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format catalog events one per line: id, name, type, category
pub fn format_events(events: &[&SportEvent]) -> String {
    if events.is_empty() {
        return "No events found.".to_string();
    }

    events
        .iter()
        .map(|e| format!("{:<16} {:<28} {:<10} {}", e.id, e.name, e.event_type, e.category))
        .collect::<Vec<_>>()
        .join("\n")
}
