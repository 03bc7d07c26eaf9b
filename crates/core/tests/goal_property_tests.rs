//! Property-based tests for goal validation and contribution bookkeeping.
//!
//! These tests verify that universal properties hold across generated inputs,
//! using the `proptest` crate for random test case generation.

use chrono::{TimeZone, Utc};
use nextgoal_core::contributions::Contribution;
use nextgoal_core::goals::{ContributionFrequency, Goal, GoalUpdate, NewGoal};
use proptest::prelude::*;
use rust_decimal::Decimal;

// =============================================================================
// Generators
// =============================================================================

fn arb_frequency() -> impl Strategy<Value = ContributionFrequency> {
    prop_oneof![
        Just(ContributionFrequency::Daily),
        Just(ContributionFrequency::Weekly),
        Just(ContributionFrequency::Monthly),
    ]
}

/// Positive amounts with two decimal places, 0.01 to 1,000,000.00.
fn arb_positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..=100_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

/// Zero or negative amounts with two decimal places.
fn arb_non_positive_amount() -> impl Strategy<Value = Decimal> {
    (-100_000_000i64..=0).prop_map(|cents| Decimal::new(cents, 2))
}

fn arb_title() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9 ]{0,30}"
}

fn arb_blank_title() -> impl Strategy<Value = String> {
    "[ \t\n]{0,8}"
}

fn new_goal(
    title: String,
    total: Decimal,
    contribution: Decimal,
    frequency: ContributionFrequency,
) -> NewGoal {
    NewGoal {
        id: None,
        title,
        description: None,
        currency: "UAH".to_string(),
        total_amount: total,
        contribution_amount: contribution,
        contribution_frequency: frequency,
        created_date: Some(Utc.with_ymd_and_hms(2025, 10, 27, 12, 0, 0).unwrap()),
    }
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn valid_input_constructs_empty_goal(
        title in arb_title(),
        total in arb_positive_amount(),
        contribution in arb_positive_amount(),
        frequency in arb_frequency(),
    ) {
        let goal = Goal::new(new_goal(title, total, contribution, frequency)).unwrap();
        prop_assert_eq!(goal.current_amount(), Decimal::ZERO);
        prop_assert!(goal.contributions().is_empty());
        prop_assert_eq!(goal.remaining_amount(), total);
        prop_assert!(goal.days_remaining() >= 1);
    }

    #[test]
    fn blank_title_is_rejected(
        title in arb_blank_title(),
        total in arb_positive_amount(),
        contribution in arb_positive_amount(),
        frequency in arb_frequency(),
    ) {
        prop_assert!(Goal::new(new_goal(title, total, contribution, frequency)).is_err());
    }

    #[test]
    fn non_positive_amounts_are_rejected(
        title in arb_title(),
        good in arb_positive_amount(),
        bad in arb_non_positive_amount(),
        frequency in arb_frequency(),
    ) {
        prop_assert!(Goal::new(new_goal(title.clone(), bad, good, frequency)).is_err());
        prop_assert!(Goal::new(new_goal(title, good, bad, frequency)).is_err());
    }

    #[test]
    fn current_amount_is_sum_of_contributions(
        amounts in proptest::collection::vec(arb_positive_amount(), 0..20),
        frequency in arb_frequency(),
    ) {
        let mut goal = Goal::new(new_goal(
            "Sum".to_string(),
            Decimal::new(1_000_000, 0),
            Decimal::new(100, 0),
            frequency,
        ))
        .unwrap();
        for amount in &amounts {
            goal.add_contribution(Contribution::now(*amount, None).unwrap())
                .unwrap();
        }

        let expected: Decimal = amounts.iter().copied().sum();
        prop_assert_eq!(goal.current_amount(), expected);
        prop_assert_eq!(goal.contributions().len(), amounts.len());
    }

    #[test]
    fn edit_keeps_identity_and_progress(
        total in arb_positive_amount(),
        contribution in arb_positive_amount(),
        saved in arb_positive_amount(),
        frequency in arb_frequency(),
        new_frequency in arb_frequency(),
    ) {
        let mut goal = Goal::new(new_goal("Before".to_string(), total, contribution, frequency)).unwrap();
        goal.add_contribution(Contribution::now(saved, None).unwrap()).unwrap();

        let edited = goal
            .with_updated_fields(GoalUpdate {
                title: "After".to_string(),
                description: None,
                currency: "EUR".to_string(),
                total_amount: total + contribution,
                contribution_amount: contribution,
                contribution_frequency: new_frequency,
            })
            .unwrap();

        prop_assert_eq!(edited.id(), goal.id());
        prop_assert_eq!(edited.created_date(), goal.created_date());
        prop_assert_eq!(edited.current_amount(), saved);
        prop_assert_eq!(edited.contributions(), goal.contributions());
    }

    #[test]
    fn days_remaining_covers_remaining_amount(
        total in arb_positive_amount(),
        contribution in arb_positive_amount(),
        frequency in arb_frequency(),
    ) {
        let goal = Goal::new(new_goal("Cover".to_string(), total, contribution, frequency)).unwrap();
        let days = Decimal::from(goal.days_remaining());
        let daily = goal.equivalent_daily_contribution();
        // Saving for `days` days reaches the target; one day fewer does not.
        prop_assert!(days * daily >= total - Decimal::new(1, 6));
        prop_assert!((days - Decimal::ONE) * daily < total);
    }
}
