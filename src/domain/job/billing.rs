//! Time and cost arithmetic over a job
//!
//! Pure, stateless functions. Callers inject `now` so that open time logs
//! can be valued at any instant and tests stay deterministic.

use chrono::{DateTime, Utc};

use super::job::Job;
use super::time_log::TimeLog;

const MS_PER_HOUR: f64 = 3_600_000.0;

/// Total elapsed milliseconds over all time logs. An open log contributes
/// up to `now`, so this value grows on every evaluation while clocked in.
pub fn total_duration_ms(job: &Job, now: DateTime<Utc>) -> i64 {
    job.time_logs.iter().map(|log| log.elapsed_ms(now)).sum()
}

/// Labor cost in dollars at the job's snapshotted hourly rate
pub fn labor_cost(job: &Job, now: DateTime<Utc>) -> f64 {
    total_duration_ms(job, now) as f64 / MS_PER_HOUR * job.hourly_rate
}

/// Sum of part line costs. Order-invariant.
pub fn parts_cost(job: &Job) -> f64 {
    job.parts.iter().map(|part| part.line_cost()).sum()
}

pub fn is_clocked_in(job: &Job) -> bool {
    job.time_logs.iter().any(|log| log.is_open())
}

/// Clock in or out at `now`: close the open log if one exists, otherwise
/// open a new one. Returns the updated job; the caller replaces the record
/// in the store.
///
/// This toggle is the only mutator of `time_logs`, which is what guarantees
/// that no two logs are ever open simultaneously.
pub fn toggle_clock(job: &Job, now: DateTime<Utc>) -> Job {
    let mut updated = job.clone();
    match updated.time_logs.iter_mut().find(|log| log.is_open()) {
        Some(open_log) => open_log.end_time = Some(now),
        None => updated.time_logs.push(TimeLog::open_at(now)),
    }
    updated
}

/// Format a millisecond duration as "Xh Ym"
pub fn format_duration(ms: i64) -> String {
    let hours = ms / 3_600_000;
    let minutes = (ms % 3_600_000) / 60_000;
    format!("{}h {}m", hours, minutes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::job::{Part, PropertyType};
    use chrono::TimeZone;

    fn job_at_rate(rate: f64) -> Job {
        Job::new("Test Customer", "555-0100", "1 Main St", PropertyType::Commercial, rate)
    }

    fn at(ms: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(ms).unwrap()
    }

    #[test]
    fn toggle_pair_produces_one_closed_log() {
        let job = job_at_rate(85.0);
        let clocked_in = toggle_clock(&job, at(0));
        assert!(is_clocked_in(&clocked_in));

        let clocked_out = toggle_clock(&clocked_in, at(3_600_000));
        assert!(!is_clocked_in(&clocked_out));
        assert_eq!(clocked_out.time_logs.len(), 1);
        assert_eq!(total_duration_ms(&clocked_out, at(999_999_999)), 3_600_000);
    }

    #[test]
    fn at_most_one_open_log_for_any_toggle_sequence() {
        let mut job = job_at_rate(85.0);
        for i in 0..7 {
            job = toggle_clock(&job, at(i * 60_000));
            let open = job.time_logs.iter().filter(|log| log.is_open()).count();
            assert!(open <= 1, "open logs after toggle {}: {}", i, open);
        }
    }

    #[test]
    fn one_hour_at_85_costs_85() {
        let job = job_at_rate(85.0);
        let job = toggle_clock(&job, at(0));
        let job = toggle_clock(&job, at(3_600_000));
        assert!((labor_cost(&job, at(3_600_000)) - 85.00).abs() < 1e-9);
    }

    #[test]
    fn labor_cost_is_linear_in_rate() {
        let mut job = job_at_rate(42.0);
        job = toggle_clock(&job, at(0));
        job = toggle_clock(&job, at(90_000_000));

        let mut doubled = job.clone();
        doubled.hourly_rate = 84.0;

        let now = at(90_000_000);
        assert!((labor_cost(&doubled, now) - 2.0 * labor_cost(&job, now)).abs() < 1e-9);
    }

    #[test]
    fn open_log_counts_up_to_now() {
        let job = toggle_clock(&job_at_rate(100.0), at(0));
        assert_eq!(total_duration_ms(&job, at(1_800_000)), 1_800_000);
        assert_eq!(total_duration_ms(&job, at(3_600_000)), 3_600_000);
    }

    #[test]
    fn parts_cost_is_reorder_invariant() {
        let mut job = job_at_rate(85.0);
        job.parts = vec![
            Part::new("20A GFCI Outlet (Tamper Resistant)", 2, 18.50),
            Part::new("1-Gang Old Work Plastic Box", 3, 2.50),
            Part::new("12/2 NM-B Wire (250ft)", 1, 145.00),
        ];
        let forward = parts_cost(&job);
        job.parts.reverse();
        assert_eq!(parts_cost(&job), forward);
        assert!((forward - (37.00 + 7.50 + 145.00)).abs() < 1e-9);
    }

    #[test]
    fn gfci_scenario_totals_37() {
        let mut job = job_at_rate(85.0);
        job.parts.push(Part::new("20A GFCI Outlet", 2, 18.50));
        assert!((parts_cost(&job) - 37.00).abs() < 1e-9);
    }

    #[test]
    fn duration_formats_hours_and_minutes() {
        assert_eq!(format_duration(0), "0h 0m");
        assert_eq!(format_duration(3_600_000 + 5 * 60_000), "1h 5m");
        assert_eq!(format_duration(59_999), "0h 0m");
    }
}
