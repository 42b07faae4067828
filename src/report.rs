//! Prediction report: terminal rendering and JSON export.

use serde::Serialize;

use aeolus_markov::{Level, Prediction};

/// Full prediction report in exportable form.
#[derive(Debug, Serialize)]
pub struct PredictionReport {
    /// Levels supplied for the current day, in attribute order.
    pub today: Vec<String>,
    /// Likelihood threshold for an outcome to count as significant.
    pub significance: f64,
    /// Number of outcomes at or above the threshold.
    pub n_significant: usize,
    /// Most likely next-day level per attribute.
    pub attributes: Vec<AttributeReport>,
    /// Ranked joint outcomes, most likely first.
    pub outcomes: Vec<OutcomeReport>,
}

/// Marginal summary for one attribute.
#[derive(Debug, Serialize)]
pub struct AttributeReport {
    pub name: String,
    pub level: String,
    pub likelihood: f64,
}

/// One ranked joint outcome.
#[derive(Debug, Serialize)]
pub struct OutcomeReport {
    pub state: usize,
    pub levels: Vec<String>,
    pub likelihood: f64,
}

/// Assembles the report from a prediction and the attribute names.
pub fn build(
    prediction: &Prediction,
    today: &[Level],
    names: &[String],
    significance: f64,
) -> PredictionReport {
    let attributes = names
        .iter()
        .zip(prediction.marginals())
        .map(|(name, marginal)| {
            let (level, likelihood) = marginal.best_level();
            AttributeReport {
                name: name.clone(),
                level: level.label().to_string(),
                likelihood,
            }
        })
        .collect();

    let outcomes = prediction
        .outcomes()
        .iter()
        .map(|outcome| OutcomeReport {
            state: outcome.index(),
            levels: outcome.levels().iter().map(label_owned).collect(),
            likelihood: outcome.likelihood(),
        })
        .collect();

    PredictionReport {
        today: today.iter().map(label_owned).collect(),
        significance,
        n_significant: prediction.significant(significance).len(),
        attributes,
        outcomes,
    }
}

fn label_owned(level: &Level) -> String {
    level.label().to_string()
}

/// Renders the report as terminal text, listing at most `top` outcomes.
pub fn render(report: &PredictionReport, top: usize) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Today: {}\n",
        describe_levels(&report.attributes, &report.today)
    ));

    let name_width = report
        .attributes
        .iter()
        .map(|a| a.name.len())
        .max()
        .unwrap_or(0);

    out.push_str("\nMost likely level per attribute tomorrow:\n");
    for attribute in &report.attributes {
        out.push_str(&format!(
            "  {:<name_width$}  {:<6}  {:>5.1}%\n",
            attribute.name,
            attribute.level,
            100.0 * attribute.likelihood,
        ));
    }

    let shown = report.outcomes.len().min(top);
    out.push_str(&format!(
        "\nRanked outcomes (top {shown} of {} with nonzero likelihood):\n",
        report.outcomes.len()
    ));
    for (rank, outcome) in report.outcomes.iter().take(top).enumerate() {
        out.push_str(&format!(
            "  {:>3}. {:>5.1}%  {}\n",
            rank + 1,
            100.0 * outcome.likelihood,
            describe_levels(&report.attributes, &outcome.levels),
        ));
    }

    if report.n_significant == 0 {
        out.push_str(&format!(
            "\nNo outcome reaches the {:.1}% significance threshold; \
             there is no dominant next-day state.\n",
            100.0 * report.significance
        ));
    } else {
        out.push_str(&format!(
            "\n{} outcome(s) at or above the {:.1}% significance threshold.\n",
            report.n_significant,
            100.0 * report.significance
        ));
    }

    out
}

/// Formats levels as "temperature high, humidity low, ...".
fn describe_levels(attributes: &[AttributeReport], levels: &[String]) -> String {
    levels
        .iter()
        .enumerate()
        .map(|(i, level)| match attributes.get(i) {
            Some(attribute) => format!("{} {level}", attribute.name),
            None => level.clone(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}
