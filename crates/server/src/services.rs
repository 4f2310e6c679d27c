//! Mock data generation behind the API endpoints.

use chrono::{Datelike, Duration, Local};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use models::{DataPoint, HistoryResponse, KpiSummary, Transaction, TransactionsResponse};

use crate::mock_data::{
    generate_email, Plan, EMAIL_DOMAINS, KPI_CONFIG, PLANS, REVENUE_CONFIG, SAMPLE_CUSTOMERS,
};

// Seed for the revenue series so repeated dashboard refreshes draw the
// same curve.
const HISTORY_NOISE_SEED: u64 = 42;

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Fresh KPI snapshot inside the configured realistic ranges.
pub fn generate_kpi_summary() -> KpiSummary {
    let cfg = &KPI_CONFIG;
    let mut rng = rand::thread_rng();

    KpiSummary {
        mrr: round2(rng.gen_range(cfg.mrr_min..=cfg.mrr_max)),
        active_users: rng.gen_range(cfg.active_users_min..=cfg.active_users_max),
        churn_rate: round2(rng.gen_range(cfg.churn_rate_min..=cfg.churn_rate_max)),
        new_customers: rng.gen_range(cfg.new_customers_min..=cfg.new_customers_max),
        mrr_growth: round2(rng.gen_range(cfg.mrr_growth_min..=cfg.mrr_growth_max)),
    }
}

/// Daily revenue series over the trailing window, oldest first.
///
/// Base value with a linear growth trend, seeded noise and a weekend dip,
/// clipped at zero and rounded to cents.
pub fn generate_history(range_days: u32, metric: &str) -> HistoryResponse {
    let cfg = &REVENUE_CONFIG;
    let end = Local::now().date_naive();
    let start = end - Duration::days(i64::from(range_days));
    let mut noise_rng = StdRng::seed_from_u64(HISTORY_NOISE_SEED);

    let mut data = Vec::with_capacity(range_days as usize + 1);
    for offset in 0..=range_days {
        let date = start + Duration::days(i64::from(offset));
        let base = cfg.base_daily_revenue + f64::from(offset) * cfg.growth_factor;
        let noise = noise_rng.gen_range(-cfg.volatility..=cfg.volatility);
        let weekend_factor = if date.weekday().num_days_from_monday() >= 5 {
            cfg.weekend_dip
        } else {
            1.0
        };
        let value = ((base + noise) * weekend_factor).max(0.0);

        data.push(DataPoint {
            date: date.format("%Y-%m-%d").to_string(),
            value: round2(value),
        });
    }

    HistoryResponse {
        metric: metric.to_string(),
        range_days,
        data,
    }
}

/// A page of recent transactions, most recent first.
///
/// Samples distinct customers, weight-picks a plan, and dates each event
/// within the last week. `total` is the number actually returned, which
/// caps at the size of the customer pool.
pub fn generate_transactions(count: usize) -> TransactionsResponse {
    let mut rng = rand::thread_rng();

    let mut customers = SAMPLE_CUSTOMERS.to_vec();
    customers.shuffle(&mut rng);
    customers.truncate(count.min(SAMPLE_CUSTOMERS.len()));

    let mut transactions: Vec<Transaction> = customers
        .into_iter()
        .map(|(first, last)| {
            let plan = pick_plan(&mut rng);
            let days_ago = rng.gen_range(0..=7);
            let hours_ago = rng.gen_range(0..24);
            let date = Local::now() - Duration::days(days_ago) - Duration::hours(hours_ago);
            let domain = EMAIL_DOMAINS[rng.gen_range(0..EMAIL_DOMAINS.len())];
            let status = if rng.gen_range(0..100) < 85 {
                "completado"
            } else {
                "pendiente"
            };

            Transaction {
                id: format!("TX{}", rng.gen_range(10000..=99999)),
                customer_name: format!("{first} {last}"),
                email: generate_email(first, last, domain),
                amount: plan.price,
                plan: plan.name.to_string(),
                date: date.format("%Y-%m-%d %H:%M").to_string(),
                status: status.to_string(),
            }
        })
        .collect();

    transactions.sort_by(|a, b| b.date.cmp(&a.date));

    let total = transactions.len() as u64;
    TransactionsResponse {
        transactions,
        total,
    }
}

fn pick_plan(rng: &mut impl Rng) -> &'static Plan {
    let total: u32 = PLANS.iter().map(|p| p.weight).sum();
    let mut roll = rng.gen_range(0..total);
    for plan in &PLANS {
        if roll < plan.weight {
            return plan;
        }
        roll -= plan.weight;
    }
    // Unreachable while the weights sum to `total`.
    &PLANS[0]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kpi_summary_stays_inside_configured_ranges() {
        for _ in 0..50 {
            let summary = generate_kpi_summary();
            assert!(summary.mrr >= KPI_CONFIG.mrr_min && summary.mrr <= KPI_CONFIG.mrr_max);
            assert!(summary.active_users >= KPI_CONFIG.active_users_min);
            assert!(summary.active_users <= KPI_CONFIG.active_users_max);
            assert!(summary.churn_rate >= KPI_CONFIG.churn_rate_min);
            assert!(summary.churn_rate <= KPI_CONFIG.churn_rate_max);
        }
    }

    #[test]
    fn history_covers_the_window_in_order() {
        let history = generate_history(30, "revenue");

        assert_eq!(history.metric, "revenue");
        assert_eq!(history.range_days, 30);
        assert_eq!(history.data.len(), 31);

        for pair in history.data.windows(2) {
            assert!(pair[0].date < pair[1].date, "series must be chronological");
        }
        for point in &history.data {
            assert!(point.value >= 0.0);
            assert_eq!(point.value, round2(point.value));
        }
    }

    #[test]
    fn history_noise_is_deterministic_across_calls() {
        let a = generate_history(7, "revenue");
        let b = generate_history(7, "revenue");
        assert_eq!(a, b);
    }

    #[test]
    fn transactions_are_most_recent_first_and_distinct() {
        let page = generate_transactions(10);

        assert_eq!(page.total, 10);
        assert_eq!(page.transactions.len(), 10);

        for pair in page.transactions.windows(2) {
            assert!(pair[0].date >= pair[1].date);
        }

        let mut names: Vec<_> = page
            .transactions
            .iter()
            .map(|t| t.customer_name.clone())
            .collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 10, "customers must not repeat");
    }

    #[test]
    fn transaction_count_caps_at_the_customer_pool() {
        let page = generate_transactions(100);
        assert_eq!(page.transactions.len(), SAMPLE_CUSTOMERS.len());
        assert_eq!(page.total, SAMPLE_CUSTOMERS.len() as u64);
    }

    #[test]
    fn transactions_use_known_plans_and_statuses() {
        let page = generate_transactions(15);

        for txn in &page.transactions {
            assert!(PLANS.iter().any(|p| p.name == txn.plan && p.price == txn.amount));
            assert!(txn.status == "completado" || txn.status == "pendiente");
            assert!(txn.id.starts_with("TX"));
            assert!(txn.email.contains('@'));
        }
    }
}
