#[cfg(test)]
mod tests {
    use crate::budget::{
        BudgetRepositoryTrait, BudgetService, BudgetServiceTrait, FallbackInput, Line,
        NewSavedBudget, Profile, SavedBudget,
    };
    use crate::errors::{Error, Result, ValidationError};
    use crate::events::{AnalyticsEvent, MockAnalyticsSink};
    use async_trait::async_trait;
    use chrono::{NaiveDate, Utc};
    use std::sync::{Arc, Mutex};

    // --- Mock BudgetRepository ---
    #[derive(Clone, Default)]
    struct MockBudgetRepository {
        budgets: Arc<Mutex<Vec<SavedBudget>>>,
    }

    #[async_trait]
    impl BudgetRepositoryTrait for MockBudgetRepository {
        async fn upsert_budget(&self, new_budget: NewSavedBudget) -> Result<SavedBudget> {
            let mut budgets = self.budgets.lock().unwrap();
            let now = Utc::now().naive_utc();
            budgets.retain(|b| {
                !(b.user_id == new_budget.user_id && b.week_start == new_budget.week_start)
            });
            let saved = SavedBudget {
                id: format!("{}:{}", new_budget.user_id, new_budget.week_start),
                user_id: new_budget.user_id,
                week_start: new_budget.week_start,
                profile: new_budget.profile,
                input: new_budget.input,
                result: new_budget.result,
                created_at: now,
                updated_at: now,
            };
            budgets.push(saved.clone());
            Ok(saved)
        }

        fn get_budget(&self, user_id: &str, week_start: NaiveDate) -> Result<Option<SavedBudget>> {
            Ok(self
                .budgets
                .lock()
                .unwrap()
                .iter()
                .find(|b| b.user_id == user_id && b.week_start == week_start)
                .cloned())
        }

        fn list_budgets(&self, user_id: &str) -> Result<Vec<SavedBudget>> {
            let mut list: Vec<SavedBudget> = self
                .budgets
                .lock()
                .unwrap()
                .iter()
                .filter(|b| b.user_id == user_id)
                .cloned()
                .collect();
            list.sort_by(|a, b| b.week_start.cmp(&a.week_start));
            Ok(list)
        }

        async fn delete_budget(&self, user_id: &str, week_start: NaiveDate) -> Result<usize> {
            let mut budgets = self.budgets.lock().unwrap();
            let before = budgets.len();
            budgets.retain(|b| !(b.user_id == user_id && b.week_start == week_start));
            Ok(before - budgets.len())
        }
    }

    fn setup() -> (BudgetService, MockBudgetRepository, MockAnalyticsSink) {
        let repo = MockBudgetRepository::default();
        let sink = MockAnalyticsSink::new();
        let service = BudgetService::new(Arc::new(repo.clone()), Arc::new(sink.clone()));
        (service, repo, sink)
    }

    fn student_input() -> FallbackInput {
        FallbackInput {
            profile: Profile::Student,
            income: 800.0,
            fixed_expenses: vec![Line::new("Rent", 400.0)],
            debt_minimums: vec![],
            savings_target: 100.0,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn test_generate_stores_budget_under_week_start() {
        let (service, repo, sink) = setup();

        // Thursday
        let saved = service
            .generate_weekly_budget("user-1", date(2026, 10, 15), student_input())
            .await
            .unwrap();

        assert_eq!(saved.week_start, date(2026, 10, 12));
        assert_eq!(saved.result.weekly_budget.savings_target, 100.0);
        assert_eq!(repo.list_budgets("user-1").unwrap().len(), 1);

        let events = sink.events();
        assert_eq!(events.len(), 1);
        assert_eq!(
            events[0],
            AnalyticsEvent::budget_generated("user-1", date(2026, 10, 12), Profile::Student, 100.0)
        );
    }

    #[tokio::test]
    async fn test_regenerate_same_week_replaces_budget() {
        let (service, _repo, _sink) = setup();

        service
            .generate_weekly_budget("user-1", date(2026, 10, 12), student_input())
            .await
            .unwrap();
        let mut richer = student_input();
        richer.income = 1000.0;
        service
            .generate_weekly_budget("user-1", date(2026, 10, 18), richer)
            .await
            .unwrap();

        let budgets = service.list_weekly_budgets("user-1").unwrap();
        assert_eq!(budgets.len(), 1);
        assert_eq!(budgets[0].result.weekly_budget.income_weekly, 1000.0);
    }

    #[tokio::test]
    async fn test_get_and_delete_use_any_day_of_week() {
        let (service, _repo, _sink) = setup();
        service
            .generate_weekly_budget("user-1", date(2026, 10, 12), student_input())
            .await
            .unwrap();

        let found = service
            .get_weekly_budget("user-1", date(2026, 10, 17))
            .unwrap();
        assert!(found.is_some());

        let deleted = service
            .delete_weekly_budget("user-1", date(2026, 10, 14))
            .await
            .unwrap();
        assert_eq!(deleted, 1);
        assert!(service
            .get_weekly_budget("user-1", date(2026, 10, 12))
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_list_is_newest_first() {
        let (service, _repo, _sink) = setup();
        for day in [date(2026, 9, 28), date(2026, 10, 12), date(2026, 10, 5)] {
            service
                .generate_weekly_budget("user-1", day, student_input())
                .await
                .unwrap();
        }
        let weeks: Vec<NaiveDate> = service
            .list_weekly_budgets("user-1")
            .unwrap()
            .into_iter()
            .map(|b| b.week_start)
            .collect();
        assert_eq!(
            weeks,
            vec![date(2026, 10, 12), date(2026, 10, 5), date(2026, 9, 28)]
        );
    }

    #[tokio::test]
    async fn test_blank_user_id_is_rejected() {
        let (service, repo, sink) = setup();
        let err = service
            .generate_weekly_budget("  ", date(2026, 10, 12), student_input())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::MissingField(_))
        ));
        assert!(repo.budgets.lock().unwrap().is_empty());
        assert!(sink.is_empty());
    }

    #[test]
    fn test_preview_does_not_persist() {
        let (service, repo, sink) = setup();
        let result = service.preview_budget(&student_input());
        assert_eq!(result.weekly_budget.categories.len(), 5);
        assert!(repo.budgets.lock().unwrap().is_empty());
        assert!(sink.is_empty());
    }
}
