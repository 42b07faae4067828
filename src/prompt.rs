//! Entry of today's observed levels, either from a CLI flag or interactively.

use anyhow::{Result, bail};

use aeolus_markov::Level;

/// Parses a comma-separated list of level names, one per attribute.
///
/// Accepts `low`/`l`/`0`, `medium`/`med`/`m`/`1` and `high`/`h`/`2`,
/// case-insensitively.
pub fn parse_levels(input: &str, names: &[String]) -> Result<Vec<Level>> {
    let fields: Vec<&str> = input.split(',').map(str::trim).collect();
    if fields.len() != names.len() {
        bail!(
            "expected {} comma-separated levels ({}), got {}",
            names.len(),
            names.join(", "),
            fields.len()
        );
    }
    fields.iter().map(|field| parse_level(field)).collect()
}

fn parse_level(field: &str) -> Result<Level> {
    match field.to_lowercase().as_str() {
        "low" | "l" | "0" => Ok(Level::Low),
        "medium" | "med" | "m" | "1" => Ok(Level::Medium),
        "high" | "h" | "2" => Ok(Level::High),
        other => bail!("unknown level {other:?} (expected low, medium or high)"),
    }
}

/// Asks for one level per attribute with a styled select menu.
pub fn prompt_levels(names: &[String]) -> Result<Vec<Level>> {
    cliclack::intro("aeolus predict")?;
    cliclack::log::info("Describe today's weather relative to the typical range.")?;

    let mut levels = Vec::with_capacity(names.len());
    for name in names {
        let level: Level = cliclack::select(format!("Today's {name}"))
            .item(Level::Low, "Low", "below the typical range")
            .item(Level::Medium, "Medium", "within the typical range")
            .item(Level::High, "High", "above the typical range")
            .interact()?;
        levels.push(level);
    }

    cliclack::outro("Ranking tomorrow's outcomes")?;
    Ok(levels)
}
