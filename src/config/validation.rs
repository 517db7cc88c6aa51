use super::schema::Config;

/// Validate configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    let male = config.awards.male_marker.trim().to_uppercase();
    let female = config.awards.female_marker.trim().to_uppercase();

    if male.is_empty() {
        errors.push("awards.male_marker: must not be empty".to_string());
    }
    if female.is_empty() {
        errors.push("awards.female_marker: must not be empty".to_string());
    }

    // A shared prefix would let one category match both award lists
    if !male.is_empty() && !female.is_empty() {
        if male == female {
            errors.push(format!(
                "awards: male_marker and female_marker are both '{}'",
                config.awards.male_marker.trim()
            ));
        } else if male.starts_with(&female) || female.starts_with(&male) {
            errors.push(format!(
                "awards: '{}' and '{}' overlap; neither marker may be a prefix of the other",
                config.awards.male_marker.trim(),
                config.awards.female_marker.trim()
            ));
        }
    }

    if let Some(ref names) = config.generic_events {
        for (i, name) in names.iter().enumerate() {
            if name.trim().is_empty() {
                errors.push(format!("generic_events[{}]: must not be empty", i));
            } else if names[..i].iter().any(|other| other.trim() == name.trim()) {
                errors.push(format!("generic_events[{}]: '{}' listed twice", i, name.trim()));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
