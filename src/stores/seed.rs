//! Demo data loaded at startup: two staff accounts, plus either a generated
//! payment ledger or one read from a CSV file.

use std::path::Path;

use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use tracing::debug;
use uuid::Uuid;

use crate::dto::{Payment, PaymentStatus, Role, User};
use crate::error::Result;

use super::MemoryStore;

pub const DEFAULT_PAYMENT_COUNT: usize = 20;

pub fn default_users() -> Vec<User> {
    vec![
        User {
            email: "john-cs@durianpay.id".to_string(),
            password: "admin123".to_string(),
            role: Role::Cs,
        },
        User {
            email: "jane-operational@durianpay.id".to_string(),
            password: "admin123".to_string(),
            role: Role::Operational,
        },
    ]
}

/// Payment `i` is dated `i` days ago, amounts step by 25 from 10000 and
/// statuses cycle completed, processing, failed.
pub fn generate_payments(count: usize) -> Vec<Payment> {
    let now = Utc::now();
    (0..count)
        .map(|i| {
            let id = Uuid::new_v4().to_string();
            Payment {
                merchant_name: format!("Merchant{}", &id[..6]),
                date: now - Duration::days(i as i64),
                amount: Decimal::from(10_000 + i as u64 * 25),
                status: PaymentStatus::ALL[i % PaymentStatus::ALL.len()],
                reviewed: false,
                id,
            }
        })
        .collect()
}

impl MemoryStore {
    /// Store populated with the demo users and [`DEFAULT_PAYMENT_COUNT`] generated payments.
    pub fn seeded() -> Self {
        let store = Self::with_default_users();
        for payment in generate_payments(DEFAULT_PAYMENT_COUNT) {
            store.update_payment(payment);
        }
        store
    }

    pub fn with_default_users() -> Self {
        let store = Self::new();
        for user in default_users() {
            store.insert_user(user);
        }
        store
    }

    /// Upserts every row of a `id,merchant_name,date,amount,status,reviewed` CSV
    /// file. Returns the number of rows read. The file is parsed fully before
    /// the store is touched, so a bad row leaves the store unchanged.
    pub fn load_payments_csv<P: AsRef<Path>>(&self, path: P) -> Result<usize> {
        let payments = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(path.as_ref())?
            .into_deserialize::<Payment>()
            .collect::<Result<Vec<_>, _>>()?;

        let count = payments.len();
        for payment in payments {
            self.update_payment(payment);
        }
        debug!(count, path = %path.as_ref().display(), "loaded payments from csv");
        Ok(count)
    }
}
