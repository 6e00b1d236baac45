//! Compliance evaluation service.
//!
//! Measures how many completed audits satisfy a target inside its time
//! window. The evaluation instant is an explicit parameter so the
//! function stays deterministic and testable; only weekly targets use it,
//! since their window is always the current week rather than a stored
//! year and month.

use crate::error::ScheduleError;
use crate::models::{ComplianceReport, ComplianceStatus, CompletedAudit, Period, Target};
use crate::services::calendar;
use chrono::{DateTime, Duration, NaiveDate, Utc};

/// Evaluates `records` against `target`, counting the audits whose scope
/// is covered by the target and whose completion falls inside the
/// resolved window (inclusive on both ends).
pub fn evaluate(
    target: &Target,
    records: &[CompletedAudit],
    now: DateTime<Utc>,
) -> Result<ComplianceReport, ScheduleError> {
    let (window_start, window_end) = resolve_window(target, now)?;

    let completed = records
        .iter()
        .filter(|record| target.scope.covers(&record.scope))
        .filter(|record| {
            record.completed_at >= window_start && record.completed_at <= window_end
        })
        .count() as u32;

    let percentage = if target.quantity > 0 {
        let ratio = f64::from(completed) / f64::from(target.quantity);
        ((ratio * 100.0).round() as u32).min(100) as u8
    } else {
        0
    };

    Ok(ComplianceReport {
        target: target.quantity,
        completed,
        shortfall: target.quantity.saturating_sub(completed),
        percentage,
        status: ComplianceStatus::from_percentage(percentage),
        window_start,
        window_end,
    })
}

/// Inclusive UTC window the target is measured over.
fn resolve_window(
    target: &Target,
    now: DateTime<Utc>,
) -> Result<(DateTime<Utc>, DateTime<Utc>), ScheduleError> {
    if !(1900..=2100).contains(&target.year) {
        return Err(ScheduleError::YearOutOfRange(target.year));
    }

    let (first, last) = match target.period {
        Period::Weekly => {
            let monday = calendar::week_start(now.date_naive());
            (monday, monday + Duration::days(6))
        }
        Period::Monthly => {
            let month = target.month.ok_or(ScheduleError::MissingMonth)?;
            if !(1..=12).contains(&month) {
                return Err(ScheduleError::MonthOutOfRange(month));
            }
            let first = NaiveDate::from_ymd_opt(target.year, month, 1)
                .ok_or(ScheduleError::YearOutOfRange(target.year))?;
            let last =
                first + Duration::days(i64::from(calendar::days_in_month(target.year, month)) - 1);
            (first, last)
        }
        Period::Annual => {
            let first = NaiveDate::from_ymd_opt(target.year, 1, 1)
                .ok_or(ScheduleError::YearOutOfRange(target.year))?;
            let last = NaiveDate::from_ymd_opt(target.year, 12, 31)
                .ok_or(ScheduleError::YearOutOfRange(target.year))?;
            (first, last)
        }
    };

    Ok(calendar::day_bounds(first, last))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ScopeKey;
    use chrono::TimeZone;
    use uuid::Uuid;

    fn utc(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, hour, 0, 0).unwrap()
    }

    fn monthly_target(scope: ScopeKey, quantity: u32, year: i32, month: u32) -> Target {
        Target {
            period: Period::Monthly,
            quantity,
            year,
            month: Some(month),
            scope,
            active: true,
        }
    }

    #[test]
    fn test_monthly_target_counts_matching_records() {
        let company = Uuid::new_v4();
        let scope = ScopeKey::company(company);
        let target = monthly_target(scope, 10, 2024, 3);

        let mut records: Vec<CompletedAudit> = (1..=7)
            .map(|day| CompletedAudit::new(scope, utc(2024, 3, day, 9)))
            .collect();
        // Outside the window
        records.push(CompletedAudit::new(scope, utc(2024, 2, 28, 9)));
        records.push(CompletedAudit::new(scope, utc(2024, 4, 1, 9)));
        // Wrong company
        records.push(CompletedAudit::new(
            ScopeKey::company(Uuid::new_v4()),
            utc(2024, 3, 10, 9),
        ));

        let report = evaluate(&target, &records, utc(2024, 3, 20, 12)).unwrap();
        assert_eq!(report.target, 10);
        assert_eq!(report.completed, 7);
        assert_eq!(report.shortfall, 3);
        assert_eq!(report.percentage, 70);
        assert_eq!(report.status, ComplianceStatus::Pending);
    }

    #[test]
    fn test_window_bounds_are_inclusive() {
        let scope = ScopeKey::company(Uuid::new_v4());
        let target = monthly_target(scope, 2, 2024, 3);

        let records = vec![
            CompletedAudit::new(scope, Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap()),
            CompletedAudit::new(scope, Utc.with_ymd_and_hms(2024, 3, 31, 23, 59, 59).unwrap()),
        ];

        let report = evaluate(&target, &records, utc(2024, 3, 15, 12)).unwrap();
        assert_eq!(report.completed, 2);
        assert_eq!(report.status, ComplianceStatus::Fulfilled);
    }

    #[test]
    fn test_weekly_window_follows_evaluation_time() {
        let scope = ScopeKey::company(Uuid::new_v4());
        let target = Target {
            period: Period::Weekly,
            quantity: 2,
            year: 2024,
            month: None,
            scope,
            active: true,
        };

        // 2024-03-13 is a Wednesday; its week runs Mon 11th .. Sun 17th
        let now = utc(2024, 3, 13, 15);
        let records = vec![
            CompletedAudit::new(scope, utc(2024, 3, 11, 8)),
            CompletedAudit::new(scope, utc(2024, 3, 17, 20)),
            CompletedAudit::new(scope, utc(2024, 3, 10, 8)),
            CompletedAudit::new(scope, utc(2024, 3, 18, 8)),
        ];

        let report = evaluate(&target, &records, now).unwrap();
        assert_eq!(report.completed, 2);
        assert_eq!(report.window_start.to_rfc3339(), "2024-03-11T00:00:00+00:00");
        assert_eq!(report.window_end.to_rfc3339(), "2024-03-17T23:59:59+00:00");
    }

    #[test]
    fn test_annual_window_spans_target_year() {
        let scope = ScopeKey::company(Uuid::new_v4());
        let target = Target {
            period: Period::Annual,
            quantity: 4,
            year: 2024,
            month: None,
            scope,
            active: true,
        };

        let records = vec![
            CompletedAudit::new(scope, utc(2024, 1, 1, 0)),
            CompletedAudit::new(scope, utc(2024, 12, 31, 23)),
            CompletedAudit::new(scope, utc(2023, 12, 31, 23)),
            CompletedAudit::new(scope, utc(2025, 1, 1, 0)),
        ];

        let report = evaluate(&target, &records, utc(2025, 6, 1, 12)).unwrap();
        assert_eq!(report.completed, 2);
        assert_eq!(report.percentage, 50);
        assert_eq!(report.status, ComplianceStatus::Pending);
    }

    #[test]
    fn test_company_wide_target_covers_branch_audits() {
        let company = Uuid::new_v4();
        let target = monthly_target(ScopeKey::company(company), 2, 2024, 5);

        let records = vec![
            CompletedAudit::new(ScopeKey::branch(company, Uuid::new_v4()), utc(2024, 5, 3, 9)),
            CompletedAudit::new(ScopeKey::company(company), utc(2024, 5, 10, 9)),
        ];

        let report = evaluate(&target, &records, utc(2024, 5, 15, 12)).unwrap();
        assert_eq!(report.completed, 2);
    }

    #[test]
    fn test_branch_target_ignores_other_branches() {
        let company = Uuid::new_v4();
        let branch = Uuid::new_v4();
        let target = monthly_target(ScopeKey::branch(company, branch), 2, 2024, 5);

        let records = vec![
            CompletedAudit::new(ScopeKey::branch(company, branch), utc(2024, 5, 3, 9)),
            CompletedAudit::new(ScopeKey::branch(company, Uuid::new_v4()), utc(2024, 5, 4, 9)),
            CompletedAudit::new(ScopeKey::company(company), utc(2024, 5, 5, 9)),
        ];

        let report = evaluate(&target, &records, utc(2024, 5, 15, 12)).unwrap();
        assert_eq!(report.completed, 1);
    }

    #[test]
    fn test_over_completion_caps_percentage_and_zeroes_shortfall() {
        let scope = ScopeKey::company(Uuid::new_v4());
        let target = monthly_target(scope, 2, 2024, 6);

        let records: Vec<CompletedAudit> = (1..=5)
            .map(|day| CompletedAudit::new(scope, utc(2024, 6, day, 9)))
            .collect();

        let report = evaluate(&target, &records, utc(2024, 6, 20, 12)).unwrap();
        assert_eq!(report.completed, 5);
        assert_eq!(report.shortfall, 0);
        assert_eq!(report.percentage, 100);
        assert_eq!(report.status, ComplianceStatus::Fulfilled);
    }

    #[test]
    fn test_percentage_rounds_to_nearest() {
        let scope = ScopeKey::company(Uuid::new_v4());
        let target = monthly_target(scope, 3, 2024, 6);

        let records = vec![
            CompletedAudit::new(scope, utc(2024, 6, 1, 9)),
            CompletedAudit::new(scope, utc(2024, 6, 2, 9)),
        ];

        let report = evaluate(&target, &records, utc(2024, 6, 20, 12)).unwrap();
        // 2/3 of the target rounds to 67%
        assert_eq!(report.percentage, 67);
        assert_eq!(report.status, ComplianceStatus::Pending);
    }

    #[test]
    fn test_on_track_tier() {
        let scope = ScopeKey::company(Uuid::new_v4());
        let target = monthly_target(scope, 10, 2024, 6);

        let records: Vec<CompletedAudit> = (1..=8)
            .map(|day| CompletedAudit::new(scope, utc(2024, 6, day, 9)))
            .collect();

        let report = evaluate(&target, &records, utc(2024, 6, 20, 12)).unwrap();
        assert_eq!(report.percentage, 80);
        assert_eq!(report.status, ComplianceStatus::OnTrack);
    }

    #[test]
    fn test_evaluation_is_deterministic() {
        let scope = ScopeKey::company(Uuid::new_v4());
        let target = monthly_target(scope, 5, 2024, 7);
        let records = vec![CompletedAudit::new(scope, utc(2024, 7, 4, 9))];
        let now = utc(2024, 7, 20, 12);

        let first = evaluate(&target, &records, now).unwrap();
        let second = evaluate(&target, &records, now).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_zero_quantity_target_reports_zero_percentage() {
        let scope = ScopeKey::company(Uuid::new_v4());
        let mut target = monthly_target(scope, 1, 2024, 7);
        target.quantity = 0;
        let records = vec![CompletedAudit::new(scope, utc(2024, 7, 4, 9))];

        let report = evaluate(&target, &records, utc(2024, 7, 20, 12)).unwrap();
        assert_eq!(report.percentage, 0);
        assert_eq!(report.shortfall, 0);
        assert_eq!(report.status, ComplianceStatus::Pending);
    }

    #[test]
    fn test_rejects_monthly_target_without_month() {
        let scope = ScopeKey::company(Uuid::new_v4());
        let target = Target {
            period: Period::Monthly,
            quantity: 5,
            year: 2024,
            month: None,
            scope,
            active: true,
        };
        assert_eq!(
            evaluate(&target, &[], utc(2024, 7, 20, 12)),
            Err(ScheduleError::MissingMonth)
        );
    }

    #[test]
    fn test_rejects_year_out_of_range() {
        let scope = ScopeKey::company(Uuid::new_v4());
        let mut target = monthly_target(scope, 5, 2024, 7);
        target.year = 2101;
        assert_eq!(
            evaluate(&target, &[], utc(2024, 7, 20, 12)),
            Err(ScheduleError::YearOutOfRange(2101))
        );
    }
}
