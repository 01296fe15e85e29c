//! Tests for benefit eligibility across every window policy

use chrono::NaiveDate;
use domain_benefit::{filter_active, is_benefit_active, Benefit, UserAnchors};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn active(validity_type: &str, anchor: NaiveDate, reference: NaiveDate) -> bool {
    is_benefit_active(validity_type, Some(anchor), reference)
}

mod exact_date {
    use super::*;

    #[test]
    fn test_active_only_on_the_day() {
        let birthday = date(1990, 6, 15);
        assert!(active("birthday_exact_date", birthday, date(2024, 6, 15)));
        assert!(!active("birthday_exact_date", birthday, date(2024, 6, 14)));
        assert!(!active("birthday_exact_date", birthday, date(2024, 6, 16)));
        assert!(!active("birthday_exact_date", birthday, date(2024, 7, 15)));
    }

    #[test]
    fn test_leap_day_anchor_in_leap_year() {
        assert!(active("birthday_exact_date", date(1992, 2, 29), date(2024, 2, 29)));
    }

    #[test]
    fn test_leap_day_anchor_is_not_shifted_in_common_year() {
        let leap = date(1992, 2, 29);
        assert!(!active("birthday_exact_date", leap, date(2023, 2, 28)));
        assert!(!active("birthday_exact_date", leap, date(2023, 3, 1)));
    }

    #[test]
    fn test_anniversary_variant() {
        let anniversary = date(2015, 9, 1);
        assert!(active("anniversary_exact_date", anniversary, date(2024, 9, 1)));
        assert!(!active("anniversary_exact_date", anniversary, date(2024, 9, 2)));
    }
}

mod entire_month {
    use super::*;

    #[test]
    fn test_active_for_every_day_of_the_month() {
        let birthday = date(1990, 6, 15);
        assert!(active("birthday_entire_month", birthday, date(2024, 6, 1)));
        assert!(active("birthday_entire_month", birthday, date(2024, 6, 30)));
        assert!(!active("birthday_entire_month", birthday, date(2024, 5, 31)));
        assert!(!active("birthday_entire_month", birthday, date(2024, 7, 1)));
    }

    #[test]
    fn test_february_leap_anchor_month_in_common_year() {
        assert!(active("birthday_entire_month", date(1992, 2, 29), date(2023, 2, 28)));
    }

    #[test]
    fn test_anniversary_variant() {
        assert!(active("anniversary_entire_month", date(2015, 9, 1), date(2024, 9, 30)));
    }
}

mod week_before_after {
    use super::*;

    #[test]
    fn test_seven_days_after_is_inside() {
        let birthday = date(1990, 6, 15);
        assert!(active("birthday_week_before_after", birthday, date(2024, 6, 22)));
        assert!(!active("birthday_week_before_after", birthday, date(2024, 6, 23)));
    }

    #[test]
    fn test_seven_days_before_is_inside() {
        let birthday = date(1990, 6, 15);
        assert!(active("birthday_week_before_after", birthday, date(2024, 6, 8)));
        assert!(!active("birthday_week_before_after", birthday, date(2024, 6, 7)));
    }

    #[test]
    fn test_window_crosses_new_year() {
        let birthday = date(1990, 1, 3);
        assert!(active("birthday_week_before_after", birthday, date(2023, 12, 27)));
        assert!(active("birthday_week_before_after", birthday, date(2024, 1, 10)));
        assert!(!active("birthday_week_before_after", birthday, date(2023, 12, 19)));
        assert!(!active("birthday_week_before_after", birthday, date(2023, 12, 26)));
    }

    #[test]
    fn test_window_crosses_new_year_from_december_anchor() {
        let anniversary = date(2010, 12, 29);
        assert!(active("anniversary_week_before_after", anniversary, date(2025, 1, 5)));
        assert!(!active("anniversary_week_before_after", anniversary, date(2025, 1, 6)));
    }

    #[test]
    fn test_leap_day_anchor_window_in_common_year() {
        let leap = date(1992, 2, 29);
        assert!(active("birthday_week_before_after", leap, date(2023, 3, 7)));
        assert!(!active("birthday_week_before_after", leap, date(2023, 3, 8)));
    }
}

mod thirty_days {
    use super::*;

    #[test]
    fn test_thirty_day_radius() {
        let birthday = date(1990, 6, 15);
        assert!(active("birthday_30_days", birthday, date(2024, 5, 16)));
        assert!(active("birthday_30_days", birthday, date(2024, 7, 15)));
        assert!(!active("birthday_30_days", birthday, date(2024, 5, 15)));
        assert!(!active("birthday_30_days", birthday, date(2024, 7, 16)));
    }

    #[test]
    fn test_thirty_days_across_year_end() {
        let birthday = date(1990, 1, 10);
        assert!(active("birthday_30_days", birthday, date(2023, 12, 11)));
        assert!(!active("birthday_30_days", birthday, date(2023, 12, 10)));
    }
}

mod one_sided_windows {
    use super::*;

    #[test]
    fn test_seven_days_before() {
        let birthday = date(1990, 6, 15);
        assert!(active("birthday_7_days_before", birthday, date(2024, 6, 8)));
        assert!(active("birthday_7_days_before", birthday, date(2024, 6, 15)));
        assert!(!active("birthday_7_days_before", birthday, date(2024, 6, 7)));
        assert!(!active("birthday_7_days_before", birthday, date(2024, 6, 16)));
    }

    #[test]
    fn test_seven_days_after() {
        let birthday = date(1990, 6, 15);
        assert!(active("birthday_7_days_after", birthday, date(2024, 6, 15)));
        assert!(active("birthday_7_days_after", birthday, date(2024, 6, 22)));
        assert!(!active("birthday_7_days_after", birthday, date(2024, 6, 14)));
        assert!(!active("birthday_7_days_after", birthday, date(2024, 6, 23)));
    }

    #[test]
    fn test_three_days_before_across_year_end() {
        let birthday = date(1990, 1, 2);
        assert!(active("birthday_3_days_before", birthday, date(2023, 12, 30)));
        assert!(!active("birthday_3_days_before", birthday, date(2023, 12, 29)));
    }

    #[test]
    fn test_three_days_after_across_year_end() {
        let birthday = date(1990, 12, 30);
        assert!(active("birthday_3_days_after", birthday, date(2025, 1, 2)));
        assert!(!active("birthday_3_days_after", birthday, date(2025, 1, 3)));
    }
}

mod weekend {
    use super::*;

    #[test]
    fn test_weekday_anchor_runs_to_sunday() {
        // 2024-06-12 is a Wednesday
        let birthday = date(1990, 6, 12);
        assert!(active("birthday_weekend", birthday, date(2024, 6, 12)));
        assert!(active("birthday_weekend", birthday, date(2024, 6, 14)));
        assert!(active("birthday_weekend", birthday, date(2024, 6, 15)));
        assert!(active("birthday_weekend", birthday, date(2024, 6, 16)));
        assert!(!active("birthday_weekend", birthday, date(2024, 6, 11)));
        assert!(!active("birthday_weekend", birthday, date(2024, 6, 17)));
    }

    #[test]
    fn test_saturday_anchor() {
        // 2024-06-15 is a Saturday
        let birthday = date(1990, 6, 15);
        assert!(active("birthday_weekend", birthday, date(2024, 6, 15)));
        assert!(active("birthday_weekend", birthday, date(2024, 6, 16)));
        assert!(!active("birthday_weekend", birthday, date(2024, 6, 14)));
    }

    #[test]
    fn test_sunday_anchor_includes_saturday_before() {
        // 2024-06-16 is a Sunday
        let birthday = date(1990, 6, 16);
        assert!(active("birthday_weekend", birthday, date(2024, 6, 15)));
        assert!(active("birthday_weekend", birthday, date(2024, 6, 16)));
        assert!(!active("birthday_weekend", birthday, date(2024, 6, 17)));
    }

    #[test]
    fn test_monday_anchor_uses_following_weekend() {
        // 2024-06-17 is a Monday
        let birthday = date(1990, 6, 17);
        assert!(active("birthday_weekend", birthday, date(2024, 6, 17)));
        assert!(active("birthday_weekend", birthday, date(2024, 6, 23)));
        assert!(!active("birthday_weekend", birthday, date(2024, 6, 15)));
        assert!(!active("birthday_weekend", birthday, date(2024, 6, 16)));
        assert!(!active("birthday_weekend", birthday, date(2024, 6, 24)));
    }

    #[test]
    fn test_weekend_spills_into_january() {
        // 2025-12-31 is a Wednesday
        let birthday = date(1990, 12, 31);
        assert!(active("birthday_weekend", birthday, date(2026, 1, 4)));
        assert!(!active("birthday_weekend", birthday, date(2026, 1, 5)));
    }
}

mod degraded_inputs {
    use super::*;

    #[test]
    fn test_absent_anchor() {
        for validity in domain_benefit::registry().iter() {
            assert!(!is_benefit_active(validity.id, None, date(2024, 6, 15)));
        }
    }

    #[test]
    fn test_unknown_types() {
        let birthday = date(1990, 6, 15);
        for raw in ["", "unknown_type", "BIRTHDAY_EXACT_DATE", " birthday_exact_date", "always_valid"] {
            assert!(!active(raw, birthday, date(2024, 6, 15)), "{raw:?}");
        }
    }

    #[test]
    fn test_extreme_dates_do_not_panic() {
        let birthday = date(1990, 6, 15);
        for validity in domain_benefit::registry().iter() {
            let _ = active(validity.id, birthday, NaiveDate::MAX);
            let _ = active(validity.id, birthday, NaiveDate::MIN);
            let _ = active(validity.id, NaiveDate::MAX, date(2024, 6, 15));
        }
    }
}

mod legacy_aliases {
    use super::*;

    #[test]
    fn test_legacy_matches_canonical_through_a_year() {
        let anchor = date(1988, 1, 5);
        for (legacy, canonical) in domain_benefit::registry().aliases() {
            let mut day = date(2024, 1, 1);
            while day <= date(2024, 12, 31) {
                assert_eq!(
                    active(legacy, anchor, day),
                    active(canonical, anchor, day),
                    "{legacy} vs {canonical} on {day}"
                );
                day = day.succ_opt().unwrap();
            }
        }
    }
}

mod batch {
    use super::*;

    fn benefit(id: &str, validity_type: &str) -> Benefit {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "brandId": "brand",
            "title": id,
            "validityType": validity_type
        }))
        .unwrap()
    }

    #[test]
    fn test_filter_active_reads_anchor_per_type_and_keeps_order() {
        let benefits = vec![
            benefit("a", "anniversary_entire_month"),
            benefit("b", "always_valid"),
            benefit("c", "birthday_month"),
            benefit("d", "birthday_exact_date"),
        ];
        let anchors = UserAnchors::new(Some(date(1990, 6, 15)), Some(date(2015, 6, 2)));

        let active: Vec<&str> = filter_active(&benefits, &anchors, date(2024, 6, 10))
            .into_iter()
            .map(|b| b.id.as_str())
            .collect();

        assert_eq!(active, vec!["a", "c"]);
    }

    #[test]
    fn test_filter_active_without_anniversary() {
        let benefits = vec![benefit("a", "anniversary_entire_month")];
        let anchors = UserAnchors::with_birthday(date(1990, 6, 15));
        assert!(filter_active(&benefits, &anchors, date(2024, 6, 10)).is_empty());
    }
}
