//! Calculation-note builder.
//!
//! Each categorized day carries a deterministic, human-readable explanation
//! of the rule that fired, rendered in Spanish for the report sheet. The
//! note is derived from the same inputs as the categorization itself and is
//! reproducible, never stored upstream.

use rust_decimal::Decimal;

use crate::config::CategorizationRules;

use super::day_classification::{DayClassification, DayKind};
use super::interval::WorkInterval;
use super::saturday_split::SaturdaySplit;
use super::weekday_distribution::WeekdayDistribution;

/// Formats an hour quantity with two decimals for the note.
fn fmt_hours(hours: Decimal) -> String {
    format!("{:.2}", hours)
}

/// Builds the calculation note for one categorized day.
///
/// The note has two parts: the detected shift interval (or a "no punches"
/// marker) and the specific distribution rule that fired: holiday,
/// rest day, Sunday, Saturday split, or the weekday distribution with its
/// deficit or overtime breakdown.
///
/// `distribution` is the weekday distribution that was applied (all zeros
/// for day kinds that bypass it); `saturday_split` is present only for
/// Saturday records with a usable punch pair.
pub fn build_calc_note(
    interval: Option<&WorkInterval>,
    classification: &DayClassification,
    hours_worked: Decimal,
    distribution: &WeekdayDistribution,
    saturday_split: Option<&SaturdaySplit>,
    rules: &CategorizationRules,
) -> String {
    let mut parts: Vec<String> = Vec::new();

    match interval {
        Some(iv) => parts.push(format!(
            "Inicio {} {} -> Fin {} {}.",
            iv.start.format("%Y-%m-%d"),
            iv.start.format("%H:%M"),
            iv.end.format("%Y-%m-%d"),
            iv.end.format("%H:%M"),
        )),
        None => parts.push("Sin marcajes, se usa resumen del día.".to_string()),
    }

    let holiday_name = classification
        .holiday_name
        .as_deref()
        .unwrap_or("sin nombre");

    match classification.kind {
        DayKind::Holiday if classification.crossed_into_holiday => {
            parts.push(format!(
                "Fin cae en feriado {} => {}h al 100% y fecha asignada {}.",
                holiday_name,
                fmt_hours(hours_worked),
                classification.attributed_date,
            ));
        }
        DayKind::Holiday => {
            parts.push(format!(
                "Feriado {} => {}h al 100%.",
                holiday_name,
                fmt_hours(hours_worked),
            ));
        }
        DayKind::WorkedRestDay => {
            parts.push(format!(
                "Franco trabajado (día de descanso) => {}h al 100%.",
                fmt_hours(hours_worked),
            ));
        }
        DayKind::Sunday => {
            parts.push("Domingo => todo al 100%.".to_string());
        }
        DayKind::Saturday => {
            parts.push(saturday_note(
                saturday_split,
                interval.is_some(),
                rules.saturday_cutoff_hour,
            ));
        }
        DayKind::Weekday => {
            parts.push(weekday_note(hours_worked, distribution, rules));
        }
    }

    parts.join(" ")
}

fn saturday_note(
    split: Option<&SaturdaySplit>,
    has_interval: bool,
    cutoff_hour: u32,
) -> String {
    match split {
        Some(split) if split.weekend_100_hours > Decimal::ZERO => format!(
            "Sábado => {}h al 100% desde las {}:00 y {}h como día hábil.",
            fmt_hours(split.weekend_100_hours),
            cutoff_hour,
            fmt_hours(split.weekday_portion_hours),
        ),
        Some(_) => format!(
            "Sábado => todo antes de las {}:00, distribución de día hábil.",
            cutoff_hour,
        ),
        None if has_interval => format!(
            "Sábado => todo antes de las {}:00, distribución de día hábil.",
            cutoff_hour,
        ),
        None => "Sábado sin marcajes => distribución de día hábil.".to_string(),
    }
}

fn weekday_note(
    hours_worked: Decimal,
    distribution: &WeekdayDistribution,
    rules: &CategorizationRules,
) -> String {
    if hours_worked <= rules.full_shift_hours {
        if distribution.pending > Decimal::ZERO {
            format!(
                "Lun-Vie: {}h regulares + {}h pendientes.",
                fmt_hours(hours_worked),
                fmt_hours(distribution.pending),
            )
        } else {
            "Lun-Vie: horas dentro de la jornada regular.".to_string()
        }
    } else {
        format!(
            "Lun-Vie: {}h regulares + {}h 50% + {}h 100%.",
            fmt_hours(distribution.regular),
            fmt_hours(distribution.extra_50),
            fmt_hours(distribution.extra_100),
        )
    }
}
