//! Predict command: rank tomorrow's likely weather from the observed history.

use anyhow::{Context, Result, bail};
use tracing::{info, info_span};

use aeolus_io::read_observed;
use aeolus_markov::{Level, StateSpace, estimate_transitions, predict};

use crate::cli::PredictArgs;
use crate::{config, convert, prompt, report};

/// Run the prediction pipeline.
pub fn run(args: PredictArgs) -> Result<()> {
    let _cmd = info_span!("predict").entered();
    // 1. Load project TOML
    let cfg = config::load_or_default(&args.config)?;
    let names = convert::attribute_names(&cfg.attributes);

    // 2. Read observed data
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

    // 3. Discretize and estimate the transition matrix
    let table = convert::build_cutoff_table(&cfg.attributes)?;
    let days = table.classify_series(series.values())?;
    let space = StateSpace::new(Level::ALL.len(), table.width())?;
    let matrix = estimate_transitions(&days, &space)?;
    info!(
        n_days = days.len(),
        n_states = space.n_states(),
        "transition matrix estimated"
    );

    // 4. Resolve today's state
    let today = match args.today {
        Some(ref levels) => prompt::parse_levels(levels, &names)?,
        None => prompt::prompt_levels(&names)?,
    };

    // 5. Predict and rank next-day outcomes
    let prediction = predict(&matrix, &today, &space)?;
    let rep = report::build(&prediction, &today, &names, cfg.predict.significance);

    println!("{}", report::render(&rep, cfg.predict.top));

    // 6. Optional JSON export
    if let Some(ref path) = args.json {
        let json = serde_json::to_string_pretty(&rep).context("failed to serialize report")?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report: {}", path.display()))?;
        info!(path = %path.display(), "report written");
    }

    Ok(())
}
