//! Rule-based weekly budget allocator.
//!
//! Splits weekly income into obligations, savings and four variable buckets
//! (groceries, transport, discretionary, buffer) using the percentages of the
//! caller's [`Profile`](super::Profile). The allocator never fails: shortfalls
//! are reported through the advisory tips.

use crate::constants::{
    BUFFER, DISCRETIONARY, DISCRETIONARY_SKIM_RATIO, GROCERIES, GROCERY_TIP_THRESHOLD, MAX_TIPS,
    MINIMUM_PAYMENT_NOTE, SMALL_REMAINDER_THRESHOLD, TRANSPORT,
};

use super::budget_model::{BudgetResult, FallbackInput, Line, WeeklyBudget};

const TIP_SAVINGS_TRIMMED: &str =
    "Savings were trimmed to fit this week. Increase income or cut discretionary spending to reach your target.";
const TIP_OBLIGATIONS_EXCEED_INCOME: &str =
    "Fixed expenses and debt minimums exceed your income. Try renegotiating bills or debt payments.";
const TIP_GROCERIES_NEAR_CAP: &str =
    "Groceries are close to the cap. Meal planning can stretch this budget further.";
const TIP_PROTECT_SAVINGS: &str =
    "Stay within this plan to protect your savings and buffer.";
const TIP_TIGHT_WEEK: &str =
    "Tight week: the small remainder went to your buffer for surprises.";

/// Rounds half-up to a whole currency unit, flooring at zero.
///
/// Non-finite values round to zero.
pub fn round_money(n: f64) -> f64 {
    if n.is_finite() {
        n.round().max(0.0)
    } else {
        0.0
    }
}

/// Double-sided clamp that never panics, even when `min > max`.
pub fn clamp(n: f64, min: f64, max: f64) -> f64 {
    n.max(min).min(max)
}

fn non_negative(n: f64) -> f64 {
    if n.is_finite() {
        n.max(0.0)
    } else {
        0.0
    }
}

fn sum_amounts(lines: &[Line]) -> f64 {
    lines.iter().map(|line| line.amount).sum()
}

/// Builds the weekly budget for `input`.
///
/// Pure and deterministic: identical input always yields identical output.
pub fn create_fallback_budget(input: &FallbackInput) -> BudgetResult {
    let policy = input.profile.policy();
    let income = non_negative(input.income);

    let fixed_expenses: Vec<Line> = input
        .fixed_expenses
        .iter()
        .map(|line| Line {
            name: line.name.clone(),
            amount: non_negative(line.amount),
            notes: line.notes.clone(),
        })
        .collect();
    let debt_minimums: Vec<Line> = input
        .debt_minimums
        .iter()
        .map(|line| {
            Line::new(line.name.clone(), non_negative(line.amount)).with_notes(MINIMUM_PAYMENT_NOTE)
        })
        .collect();

    let fixed_total = round_money(sum_amounts(&fixed_expenses));
    let debt_total = round_money(sum_amounts(&debt_minimums));
    let must_pay = fixed_total + debt_total;

    let desired_savings = round_money(input.savings_target);
    let floor_savings = round_money(income * policy.save_floor);
    let cap_savings = round_money(income * policy.save_cap);

    // The cap only limits how far the floor pushes; an explicit request above it stands.
    let provisional_savings = clamp(
        desired_savings,
        floor_savings,
        cap_savings.max(desired_savings),
    );
    let mut can_save = provisional_savings.min(income - must_pay).max(0.0);

    let mut remainder = income - must_pay - can_save;
    let (mut groceries, mut transport, mut discretionary, mut buffer) = (0.0, 0.0, 0.0, 0.0);

    if remainder <= 0.0 {
        remainder = 0.0;
    } else if remainder < SMALL_REMAINDER_THRESHOLD {
        buffer = round_money(remainder);
    } else {
        groceries = round_money(remainder * policy.groceries);
        transport = round_money(remainder * policy.transport);
        discretionary = round_money(remainder * policy.discretionary);
        buffer = remainder - (groceries + transport + discretionary);
    }

    let grocery_cap = round_money(income * policy.grocery_cap);
    if groceries > grocery_cap {
        buffer += groceries - grocery_cap;
        groceries = grocery_cap;
    }

    // Skimmed money leaves the variable pool, so it must not be refolded into the buffer.
    let mut distributable = remainder;
    let discretionary_cap = round_money(income * policy.discretionary_cap);
    if discretionary > discretionary_cap {
        let skim = ((discretionary - discretionary_cap) * DISCRETIONARY_SKIM_RATIO).floor();
        discretionary -= skim;
        can_save += skim;
        distributable -= skim;
        log::debug!(
            "Discretionary {} over soft cap {}, moved {} into savings",
            discretionary + skim,
            discretionary_cap,
            skim
        );
    }

    let diff = distributable - (groceries + transport + discretionary + buffer);
    if diff != 0.0 {
        buffer += diff;
    }

    let mut categories = Vec::with_capacity(fixed_expenses.len() + debt_minimums.len() + 4);
    categories.extend(fixed_expenses);
    categories.extend(debt_minimums);
    for (name, amount) in [
        (GROCERIES, groceries),
        (TRANSPORT, transport),
        (DISCRETIONARY, discretionary),
        (BUFFER, buffer),
    ] {
        let amount = round_money(amount);
        if amount > 0.0 {
            categories.push(Line::new(name, amount));
        }
    }

    let mut tips = Vec::new();
    if desired_savings > can_save {
        tips.push(TIP_SAVINGS_TRIMMED.to_string());
    }
    if income < must_pay {
        tips.push(TIP_OBLIGATIONS_EXCEED_INCOME.to_string());
    }
    if groceries > GROCERY_TIP_THRESHOLD * grocery_cap {
        tips.push(TIP_GROCERIES_NEAR_CAP.to_string());
    }
    if discretionary > 0.0 && can_save > 0.0 {
        tips.push(TIP_PROTECT_SAVINGS.to_string());
    }
    if (0.0..SMALL_REMAINDER_THRESHOLD).contains(&remainder) {
        tips.push(TIP_TIGHT_WEEK.to_string());
    }
    tips.truncate(MAX_TIPS);

    BudgetResult {
        weekly_budget: WeeklyBudget {
            income_weekly: round_money(income),
            savings_target: round_money(can_save),
            categories,
        },
        tips,
    }
}
