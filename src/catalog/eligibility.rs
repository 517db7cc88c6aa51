/// Whether a participant of `participant_category` may enter an event of
/// `event_category`.
///
/// Categories compare upper-cased and trimmed. Besides an exact match,
/// open relays ("Terbuka L" / "Terbuka P") take any male / female category
/// and "PPKI Mix" takes any PPKI category.
pub fn is_eligible(event_category: &str, participant_category: &str) -> bool {
    let event_cat = event_category.trim().to_uppercase();
    let participant_cat = participant_category.trim().to_uppercase();

    if event_cat == participant_cat {
        return true;
    }

    match event_cat.as_str() {
        "TERBUKA L" => is_male_category(&participant_cat),
        "TERBUKA P" => is_female_category(&participant_cat),
        "PPKI MIX" => participant_cat.contains("PPKI"),
        _ => false,
    }
}

/// "L1", "L3", "PPKI L" and so on. Expects an upper-cased category.
fn is_male_category(category: &str) -> bool {
    category.starts_with('L') || category.ends_with(" L")
}

/// "P1", "P3", "PPKI P" and so on. Expects an upper-cased category.
fn is_female_category(category: &str) -> bool {
    category.starts_with('P') || category.ends_with(" P")
}
