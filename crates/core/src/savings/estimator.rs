//! Savings projection for the cost calculator.
//!
//! The rate is a product of a per-provider base rate, a per-resource multiplier and a utilization
//! bonus. It is not clamped: over the closed provider/resource sets and utilization in 0..=100
//! it peaks at 0.768 (aws, compute, 0%).

use crate::domain::savings::{MonthPoint, Provider, ResourceType, SavingsInput, SavingsResult};
use crate::error::ValidationError;
use crate::time::projection_calendar::{month_label, projection_months};
use chrono::{NaiveDate, Utc};

pub use crate::time::projection_calendar::PROJECTION_MONTHS;

pub fn base_rate(provider: Provider) -> f64 {
    match provider {
        Provider::Aws => 0.32,
        Provider::Azure => 0.28,
        Provider::Gcp => 0.30,
    }
}

pub fn resource_multiplier(resource_type: ResourceType) -> f64 {
    match resource_type {
        ResourceType::Compute => 1.20,
        ResourceType::Storage => 1.00,
        ResourceType::Database => 1.10,
    }
}

/// Lower utilization means more idle capacity to reclaim.
pub fn utilization_impact(utilization_rate: u8) -> f64 {
    (100.0 - f64::from(utilization_rate)) / 100.0
}

pub fn savings_rate(input: &SavingsInput) -> f64 {
    base_rate(input.provider)
        * resource_multiplier(input.resource_type)
        * (1.0 + utilization_impact(input.utilization_rate))
}

/// Estimates savings with the projection starting in the current UTC month.
pub fn estimate(input: &SavingsInput) -> Result<SavingsResult, ValidationError> {
    estimate_at(input, Utc::now().date_naive())
}

/// Estimates savings with the projection starting in `anchor`'s month.
///
/// Scalar figures are rounded to cents; projection points keep full precision for charting.
pub fn estimate_at(
    input: &SavingsInput,
    anchor: NaiveDate,
) -> Result<SavingsResult, ValidationError> {
    let spend = input.current_spend;
    if !spend.is_finite() {
        return Err(ValidationError::InvalidSpend {
            raw: spend.to_string(),
        });
    }
    if spend <= 0.0 {
        return Err(ValidationError::NonPositiveSpend { value: spend });
    }

    let months = projection_months(anchor, PROJECTION_MONTHS)
        .ok_or(ValidationError::ProjectionOutOfRange { anchor })?;

    let rate = savings_rate(input);
    let monthly = spend * rate;

    let projection = months
        .into_iter()
        .enumerate()
        .map(|(i, month)| {
            let ramp = (i as f64 + 1.0) / PROJECTION_MONTHS as f64;
            MonthPoint {
                month_label: month_label(month),
                baseline: spend,
                optimized: spend * (1.0 - rate * ramp),
                savings_to_date: spend * rate * ramp,
            }
        })
        .collect();

    tracing::debug!(
        provider = %input.provider,
        resource_type = %input.resource_type,
        utilization_rate = input.utilization_rate,
        savings_rate = rate,
        "estimated savings"
    );

    Ok(SavingsResult {
        monthly_savings: round_cents(monthly),
        annual_savings: round_cents(monthly * 12.0),
        savings_percentage: round_cents(rate * 100.0),
        projection,
    })
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    const EPS: f64 = 1e-9;

    fn anchor() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn input(spend: f64, provider: Provider, resource_type: ResourceType, util: u8) -> SavingsInput {
        SavingsInput {
            current_spend: spend,
            provider,
            resource_type,
            utilization_rate: util,
        }
    }

    fn all_inputs(spend: f64) -> Vec<SavingsInput> {
        let mut out = Vec::new();
        for provider in Provider::ALL {
            for resource_type in ResourceType::ALL {
                for util in [0, 1, 25, 50, 73, 99, 100] {
                    out.push(input(spend, provider, resource_type, util));
                }
            }
        }
        out
    }

    #[test]
    fn aws_compute_half_utilized() {
        let input = input(1000.0, Provider::Aws, ResourceType::Compute, 50);
        assert!((savings_rate(&input) - 0.576).abs() < EPS);

        let result = estimate_at(&input, anchor()).unwrap();
        assert!((result.monthly_savings - 576.00).abs() < EPS);
        assert!((result.annual_savings - 6912.00).abs() < EPS);
        assert!((result.savings_percentage - 57.6).abs() < EPS);
    }

    #[test]
    fn scalar_figures_follow_rate() {
        for spend in [0.01, 1.0, 1234.56, 98_765.0] {
            for input in all_inputs(spend) {
                let rate = savings_rate(&input);
                let result = estimate_at(&input, anchor()).unwrap();

                assert!((result.monthly_savings - round_cents(spend * rate)).abs() < EPS);
                assert!((result.annual_savings - round_cents(spend * rate * 12.0)).abs() < EPS);
                // Rounding each figure separately can drift by at most 12 half-cents.
                assert!((result.annual_savings - 12.0 * result.monthly_savings).abs() <= 0.06 + EPS);
            }
        }
    }

    #[test]
    fn percentage_is_independent_of_spend() {
        for input in all_inputs(10.0) {
            let small = estimate_at(&input, anchor()).unwrap();
            let large = estimate_at(
                &SavingsInput {
                    current_spend: 250_000.0,
                    ..input.clone()
                },
                anchor(),
            )
            .unwrap();
            assert_eq!(small.savings_percentage, large.savings_percentage);
            assert!((small.savings_percentage - round_cents(savings_rate(&input) * 100.0)).abs() < EPS);
        }
    }

    #[test]
    fn projection_shape() {
        for input in all_inputs(5000.0) {
            let result = estimate_at(&input, anchor()).unwrap();
            let points = &result.projection;
            assert_eq!(points.len(), PROJECTION_MONTHS);

            for p in points {
                assert_eq!(p.baseline, input.current_spend);
            }
            for pair in points.windows(2) {
                assert!(pair[0].savings_to_date <= pair[1].savings_to_date);
                assert!(pair[0].optimized >= pair[1].optimized);
            }

            let full_ramp = input.current_spend * savings_rate(&input);
            let last = &points[PROJECTION_MONTHS - 1];
            assert!((last.savings_to_date - full_ramp).abs() < 1e-6);
            assert!((last.optimized - (input.current_spend - full_ramp)).abs() < 1e-6);
        }
    }

    #[test]
    fn projection_labels_start_at_anchor_month() {
        let input = input(100.0, Provider::Gcp, ResourceType::Storage, 80);
        let result = estimate_at(&input, anchor()).unwrap();
        let labels: Vec<&str> = result
            .projection
            .iter()
            .map(|p| p.month_label.as_str())
            .collect();
        assert_eq!(
            labels,
            ["Oct", "Nov", "Dec", "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep"]
        );
    }

    #[test]
    fn rate_stays_below_one_for_every_valid_input() {
        let peak = savings_rate(&input(1.0, Provider::Aws, ResourceType::Compute, 0));
        assert!((peak - 0.768).abs() < EPS);

        for input in all_inputs(700.0) {
            assert!(savings_rate(&input) < 1.0);
            let result = estimate_at(&input, anchor()).unwrap();
            assert!(result.projection.iter().all(|p| p.optimized > 0.0));
            assert!((0.0..100.0).contains(&result.savings_percentage));
        }
    }

    #[test]
    fn rejects_non_positive_spend() {
        for spend in [0.0, -5.0] {
            let err = estimate_at(
                &input(spend, Provider::Azure, ResourceType::Database, 50),
                anchor(),
            )
            .unwrap_err();
            assert_eq!(err, ValidationError::NonPositiveSpend { value: spend });
        }

        let err = estimate_at(
            &input(f64::NAN, Provider::Azure, ResourceType::Database, 50),
            anchor(),
        )
        .unwrap_err();
        assert!(matches!(err, ValidationError::InvalidSpend { .. }));
    }

    #[test]
    fn estimate_is_idempotent() {
        let input = input(4321.0, Provider::Azure, ResourceType::Database, 35);
        assert_eq!(
            estimate_at(&input, anchor()).unwrap(),
            estimate_at(&input, anchor()).unwrap()
        );
    }

    #[test]
    fn anchor_near_calendar_end_is_an_error_not_a_short_projection() {
        let anchor = NaiveDate::from_ymd_opt(NaiveDate::MAX.year(), 6, 1).unwrap();
        let err = estimate_at(&input(1000.0, Provider::Aws, ResourceType::Compute, 50), anchor)
            .unwrap_err();
        assert_eq!(err, ValidationError::ProjectionOutOfRange { anchor });
    }
}
