//! Inspect command: summarize the transition structure behind the predictions.

use anyhow::{Context, Result, bail};
use tracing::{info, info_span};

use aeolus_io::read_observed;
use aeolus_markov::{Level, StateSpace, count_transitions, estimate_transitions};
use aeolus_matrix::STOCHASTIC_TOLERANCE;

use crate::cli::InspectArgs;
use crate::{config, convert};

/// How many of the heaviest observed transitions to list.
const TOP_TRANSITIONS: usize = 10;

/// Run the inspection pipeline.
pub fn run(args: InspectArgs) -> Result<()> {
    let _cmd = info_span!("inspect").entered();
    // 1. Load config and observations, same front end as predict
    let cfg = config::load_or_default(&args.config)?;
    let names = convert::attribute_names(&cfg.attributes);

    let data_path = args
        .data
        .or_else(|| cfg.data.path.clone())
        .ok_or_else(|| anyhow::anyhow!("no data path: set [data].path in config or use --data"))?;
    let reader_cfg = convert::build_reader_config(&cfg.data, names.len());

    info!(path = %data_path.display(), "reading observed data");
    let series = read_observed(&data_path, &reader_cfg)
        .with_context(|| format!("failed to read observations: {}", data_path.display()))?;
    if series.n_days() == 0 {
        bail!("no observations in {}", data_path.display());
    }

    // 2. Discretize, count and estimate
    let table = convert::build_cutoff_table(&cfg.attributes)?;
    let days = table.classify_series(series.values())?;
    let space = StateSpace::new(Level::ALL.len(), table.width())?;

    let counts = count_transitions(&days, &space)?;
    let matrix = estimate_transitions(&days, &space)?;

    // 3. State coverage
    let mut indices = Vec::with_capacity(days.len());
    for day in &days {
        indices.push(space.encode_levels(day)?);
    }
    let mut seen = vec![false; space.n_states()];
    for &index in &indices {
        seen[index] = true;
    }
    let n_seen = seen.iter().filter(|&&s| s).count();

    // A state with no outgoing transition keeps the uniform prior in its column.
    let mut has_outgoing = vec![false; space.n_states()];
    for &index in &indices[..indices.len().saturating_sub(1)] {
        has_outgoing[index] = true;
    }
    let n_uniform = has_outgoing.iter().filter(|&&out| !out).count();

    println!(
        "Observed {} days over {} possible states ({} distinct states seen).",
        days.len(),
        space.n_states(),
        n_seen
    );
    println!(
        "{n_uniform} state(s) never occur as a previous day; their columns carry the uniform prior."
    );
    if matrix.is_column_stochastic(STOCHASTIC_TOLERANCE) {
        println!("Transition matrix is column-stochastic within {STOCHASTIC_TOLERANCE}.");
    }

    // 4. Heaviest observed transitions
    let mut heaviest: Vec<(f64, usize, usize)> = Vec::new();
    for prev in 0..space.n_states() {
        for next in 0..space.n_states() {
            let count = counts.get(next + 1, prev + 1);
            if count > 0.0 {
                heaviest.push((count, prev, next));
            }
        }
    }
    heaviest.sort_by(|a, b| {
        b.0.partial_cmp(&a.0)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.1.cmp(&b.1))
            .then(a.2.cmp(&b.2))
    });

    println!("\nHeaviest observed transitions:");
    for &(count, prev, next) in heaviest.iter().take(TOP_TRANSITIONS) {
        println!(
            "  {count:>4.0}x  [{}] -> [{}]",
            describe_state(&space.decode(prev)?, &names),
            describe_state(&space.decode(next)?, &names),
        );
    }

    Ok(())
}

/// Formats decoded state digits as "temperature high, humidity low, ...".
fn describe_state(digits: &[usize], names: &[String]) -> String {
    digits
        .iter()
        .enumerate()
        .map(|(i, &digit)| {
            let level = Level::from_index(digit).map(Level::label).unwrap_or("?");
            match names.get(i) {
                Some(name) => format!("{name} {level}"),
                None => level.to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}
