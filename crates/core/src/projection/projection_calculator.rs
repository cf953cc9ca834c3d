//! Month-by-month compound growth of weekly savings.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use super::projection_model::{ProjectionInput, ProjectionPoint, ProjectionResult};
use crate::constants::{DISPLAY_DECIMAL_PRECISION, MAX_PROJECTION_YEARS, WEEKS_PER_YEAR};
use crate::errors::{Result, ValidationError};

fn display(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(
        DISPLAY_DECIMAL_PRECISION,
        RoundingStrategy::MidpointAwayFromZero,
    )
}

fn validate(input: &ProjectionInput) -> Result<()> {
    if input.weekly_amount < Decimal::ZERO {
        return Err(ValidationError::InvalidInput(format!(
            "weeklyAmount must not be negative, got {}",
            input.weekly_amount
        ))
        .into());
    }
    if input.starting_balance < Decimal::ZERO {
        return Err(ValidationError::InvalidInput(format!(
            "startingBalance must not be negative, got {}",
            input.starting_balance
        ))
        .into());
    }
    if input.years == 0 || input.years > MAX_PROJECTION_YEARS {
        return Err(ValidationError::InvalidInput(format!(
            "years must be between 1 and {}, got {}",
            MAX_PROJECTION_YEARS, input.years
        ))
        .into());
    }
    if input.annual_rate_pct < dec!(-100) || input.annual_rate_pct > dec!(100) {
        return Err(ValidationError::InvalidInput(format!(
            "annualRatePct must be between -100 and 100, got {}",
            input.annual_rate_pct
        ))
        .into());
    }
    Ok(())
}

/// Projects the balance reached by saving `weekly_amount` every week.
///
/// Contributions are converted to monthly ones (52 weeks over 12 months) and
/// compounded monthly at `annual_rate_pct / 12`. Interest accrues on the
/// opening balance before the month's contribution is added.
pub fn project_future_value(input: &ProjectionInput) -> Result<ProjectionResult> {
    validate(input)?;

    let out_of_range =
        || ValidationError::InvalidInput("Projection exceeds the supported range".to_string());

    let monthly_contribution = input
        .weekly_amount
        .checked_mul(Decimal::from(WEEKS_PER_YEAR))
        .ok_or_else(out_of_range)?
        / dec!(12);
    let growth = Decimal::ONE + input.annual_rate_pct / dec!(100) / dec!(12);

    let mut balance = input.starting_balance;
    let mut contributed = input.starting_balance;
    let mut yearly = Vec::with_capacity(input.years as usize);

    for year in 1..=input.years {
        for _ in 0..12 {
            balance = balance
                .checked_mul(growth)
                .and_then(|grown| grown.checked_add(monthly_contribution))
                .ok_or_else(out_of_range)?;
            contributed = contributed
                .checked_add(monthly_contribution)
                .ok_or_else(out_of_range)?;
        }
        yearly.push(ProjectionPoint {
            year,
            balance: display(balance),
            contributed: display(contributed),
        });
    }

    let future_value = display(balance);
    let total_contributed = display(contributed);
    Ok(ProjectionResult {
        future_value,
        total_contributed,
        interest_earned: future_value - total_contributed,
        yearly,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;

    fn input(weekly: Decimal, rate: Decimal, years: u32) -> ProjectionInput {
        ProjectionInput {
            weekly_amount: weekly,
            annual_rate_pct: rate,
            years,
            starting_balance: Decimal::ZERO,
        }
    }

    #[test]
    fn test_zero_rate_returns_contributions() {
        let result = project_future_value(&input(dec!(10), dec!(0), 1)).unwrap();
        assert_eq!(result.total_contributed, dec!(520.00));
        assert_eq!(result.future_value, result.total_contributed);
        assert_eq!(result.interest_earned, Decimal::ZERO);
        assert_eq!(result.yearly.len(), 1);
    }

    #[test]
    fn test_positive_rate_grows_past_contributions() {
        let result = project_future_value(&input(dec!(25), dec!(7), 10)).unwrap();
        assert_eq!(result.total_contributed, dec!(13000.00));
        assert!(result.future_value > dec!(18700) && result.future_value < dec!(18800));
        assert_eq!(
            result.interest_earned,
            result.future_value - result.total_contributed
        );
        assert_eq!(result.yearly.len(), 10);
        assert_eq!(result.yearly[9].balance, result.future_value);
        assert!(result
            .yearly
            .windows(2)
            .all(|pair| pair[1].balance > pair[0].balance));
    }

    #[test]
    fn test_overflow_is_reported() {
        let huge = input(Decimal::MAX / dec!(100), dec!(100), MAX_PROJECTION_YEARS);
        assert!(project_future_value(&huge).is_err());
    }

    #[test]
    fn test_starting_balance_compounds() {
        let result = project_future_value(&ProjectionInput {
            weekly_amount: Decimal::ZERO,
            annual_rate_pct: dec!(12),
            years: 1,
            starting_balance: dec!(1000),
        })
        .unwrap();
        // 1% a month for 12 months
        assert_eq!(result.future_value, dec!(1126.83));
        assert_eq!(result.total_contributed, dec!(1000.00));
        assert_eq!(result.interest_earned, dec!(126.83));
    }

    #[test]
    fn test_invalid_inputs_are_rejected() {
        let cases = [
            input(dec!(-1), dec!(5), 5),
            input(dec!(10), dec!(5), 0),
            input(dec!(10), dec!(5), MAX_PROJECTION_YEARS + 1),
            input(dec!(10), dec!(101), 5),
            input(dec!(10), dec!(-150), 5),
        ];
        for case in cases {
            assert!(matches!(
                project_future_value(&case),
                Err(Error::Validation(ValidationError::InvalidInput(_)))
            ));
        }
    }
}
