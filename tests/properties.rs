//! Property tests for the progression rules.

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;

use grade_engine::calculation::{
    assign_grade, compute_coefficient, demote, effective_months, promote, schedule_promotion,
};
use grade_engine::config::ProgressionConfig;
use grade_engine::models::{Credit, CreditKind, Grade, StaffProgression};

fn grade_strategy() -> impl Strategy<Value = Grade> {
    prop_oneof![
        Just(Grade::GradeI),
        Just(Grade::GradeII),
        Just(Grade::GradeIII),
    ]
}

fn credits_strategy() -> impl Strategy<Value = Vec<Credit>> {
    prop::collection::vec(
        prop_oneof![Just(CreditKind::Reward), Just(CreditKind::Competition)].prop_map(Credit::new),
        0..40,
    )
}

fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0i64..20_000).prop_map(|days| {
        NaiveDate::from_ymd_opt(1990, 1, 1).unwrap() + Duration::days(days)
    })
}

proptest! {
    #[test]
    fn coefficient_and_salary_follow_the_table(grade in grade_strategy(), level_seed in 0u32..100) {
        let config = ProgressionConfig::default();
        let rule = config.grades().rule(grade);
        let level = 1 + level_seed % rule.max_level;

        let coefficient = compute_coefficient(grade, level, config.grades()).unwrap();
        prop_assert_eq!(
            coefficient,
            rule.base_coefficient + rule.level_increment * Decimal::from(level - 1)
        );

        let mut staff = StaffProgression::new_hire("mscb-p", NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
        staff.grade = Some(grade);
        staff.level = level;
        let staff = grade_engine::calculation::recompute_derived_fields(staff, &config).unwrap();
        prop_assert_eq!(staff.salary, staff.coefficient * Decimal::from(2_340_000));
    }

    #[test]
    fn effective_wait_never_drops_below_a_year(grade in grade_strategy(), credits in credits_strategy()) {
        let config = ProgressionConfig::default();
        prop_assert!(effective_months(grade, &credits, &config) >= 12);
    }

    #[test]
    fn next_promotion_is_at_least_a_year_out(
        grade in grade_strategy(),
        credits in credits_strategy(),
        from in date_strategy(),
    ) {
        let config = ProgressionConfig::default();
        let schedule = schedule_promotion(grade, Some(from), &credits, &config).unwrap();
        prop_assert!(schedule.next_date >= from + Duration::days(365));
        prop_assert!(schedule.next_date > from);
    }

    #[test]
    fn promotions_stay_within_bounds(
        grade in grade_strategy(),
        credits in credits_strategy(),
        start in date_strategy(),
        attempts in 0usize..20,
    ) {
        let config = ProgressionConfig::default();
        let staff = StaffProgression::new_hire("mscb-p", start).with_credits(credits);
        let mut staff = assign_grade(staff, grade, start, &config).unwrap();
        let max_level = config.grades().max_level(grade);

        for _ in 0..attempts {
            let today = staff.next_promotion_date.unwrap();
            match promote(staff.clone(), today, &config) {
                Ok(next) => staff = next,
                Err(_) => break,
            }
            prop_assert!(staff.level <= max_level);
        }

        for _ in 0..attempts {
            match demote(staff.clone(), &config) {
                Ok(next) => staff = next,
                Err(_) => break,
            }
            prop_assert!(staff.level >= 1);
        }
    }

    #[test]
    fn assigning_a_grade_always_lands_on_level_one(
        first in grade_strategy(),
        second in grade_strategy(),
        promotions in 0usize..10,
        start in date_strategy(),
    ) {
        let config = ProgressionConfig::default();
        let mut staff = assign_grade(StaffProgression::new_hire("mscb-p", start), first, start, &config).unwrap();
        for _ in 0..promotions {
            let today = staff.next_promotion_date.unwrap();
            if let Ok(next) = promote(staff.clone(), today, &config) {
                staff = next;
            }
        }

        let staff = assign_grade(staff, second, start, &config).unwrap();
        prop_assert_eq!(staff.level, 1);
        prop_assert_eq!(staff.coefficient, config.grades().rule(second).base_coefficient);
    }

    #[test]
    fn operations_are_deterministic(
        grade in grade_strategy(),
        credits in credits_strategy(),
        start in date_strategy(),
    ) {
        let config = ProgressionConfig::default();
        let staff = StaffProgression::new_hire("mscb-p", start).with_credits(credits);

        let a = assign_grade(staff.clone(), grade, start, &config).unwrap();
        let b = assign_grade(staff, grade, start, &config).unwrap();
        prop_assert_eq!(&a, &b);

        let today = a.next_promotion_date.unwrap();
        prop_assert_eq!(promote(a.clone(), today, &config), promote(b, today, &config));
    }
}
