//! Plain-text rendering of results for the user interface.

use std::fmt::Write;

use liftos_domain::{
    PlateLoad, PrOutcome, RepMaxEstimate, TrainingSet, Unit, WarmupStep,
    rounding::{round1, round2},
};

#[must_use]
pub fn plate_load(load: &PlateLoad, unit: Unit) -> String {
    let plan = match load {
        PlateLoad::Plan(plan) => plan,
        PlateLoad::BelowBar { .. } => return "Target < bar".to_string(),
        PlateLoad::Invalid => return "Invalid weight".to_string(),
    };

    let mut text = format!("Bar {}{unit}", plan.bar_weight);
    for entry in &plan.entries {
        let _ = write!(
            text,
            " · {}{unit} × {} / side",
            entry.denomination, entry.count_per_side
        );
    }
    if !plan.is_matched() {
        let _ = write!(
            text,
            " (≈ off by {}{unit} per side)",
            round2(plan.residual_per_side)
        );
    }
    text
}

#[must_use]
pub fn warmup_step(step: &WarmupStep, unit: Unit) -> String {
    format!(
        "{} {unit} × {}: {}",
        step.weight,
        step.reps,
        plate_load(&step.plate_load, unit)
    )
}

/// Line shown below an exercise after a set was logged.
#[must_use]
pub fn logged_set(set: &TrainingSet, pr: &PrOutcome) -> String {
    let mut text = format!(
        "{} {}{} × {}",
        set.local_time().format("%b %d %H:%M"),
        set.weight,
        set.unit,
        set.reps
    );
    if let Some(rpe) = set.rpe {
        let _ = write!(text, " @RPE {rpe}");
    }
    let _ = write!(text, " · e1RM {}{}", round1(pr.e1rm), set.unit);
    if pr.is_pr() {
        text.push_str(" · PR");
    }
    text
}

#[must_use]
pub fn rep_max_estimate(estimate: &RepMaxEstimate, unit: Unit) -> String {
    format!(
        "Epley: {} {unit} · Brzycki: {} {unit}",
        round1(estimate.epley),
        round1(estimate.brzycki)
    )
}
