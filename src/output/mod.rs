pub mod formatter;

pub use formatter::{
    format_awards, format_event_summaries, format_events, format_generic_summaries,
    format_participants, format_roster_stats, format_standings_table, format_standings_tsv,
    should_use_colors,
};
