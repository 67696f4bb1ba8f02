use std::cmp::Ordering;
use std::sync::Arc;

use tracing::{debug, info};

use crate::dto::{
    ListRequest, ListResult, Payment, PaymentStatus, SortKey, SortOrder, StatusSummary,
};
use crate::error::{Error, Result};
use crate::stores::MemoryStore;

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Read side of the payment ledger plus the review write path.
pub struct PaymentEngine {
    store: Arc<MemoryStore>,
}

impl PaymentEngine {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }

    /// Filters, sorts and paginates the ledger.
    ///
    /// Ordering is by the requested key and direction; equal keys are ordered
    /// by id ascending regardless of direction, so repeated calls return the
    /// same pages.
    pub fn get_list(&self, request: &ListRequest) -> ListResult {
        let mut filtered = self.filtered(request);
        filtered.sort_by(|a, b| compare(a, b, request.sort_by, request.order_by));

        let size = normalize(request.size, DEFAULT_PAGE_SIZE);
        let page = normalize(request.page, 1);
        let total = filtered.len();

        let start = (page - 1).saturating_mul(size).min(total);
        let end = start.saturating_add(size).min(total);
        let total_pages = total.div_ceil(size);

        debug!(
            total,
            page,
            size,
            status = %request.status,
            search = %request.search,
            "listed payments"
        );

        filtered.truncate(end);
        let data = filtered.split_off(start);

        ListResult {
            total,
            size,
            page,
            total_pages,
            data,
        }
    }

    /// Number of payments passing the filter step of [`PaymentEngine::get_list`].
    pub fn get_total_by_filter(&self, request: &ListRequest) -> usize {
        self.store.with_payments(|payments| {
            payments
                .iter()
                .filter(|p| matches_filter(p, request))
                .count()
        })
    }

    /// Counts per status across the whole ledger; list filters do not apply.
    pub fn get_status_summary(&self) -> StatusSummary {
        self.store.with_payments(|payments| {
            payments
                .iter()
                .fold(StatusSummary::default(), |mut summary, payment| {
                    match payment.status {
                        PaymentStatus::Completed => summary.completed += 1,
                        PaymentStatus::Processing => summary.processing += 1,
                        PaymentStatus::Failed => summary.failed += 1,
                    }
                    summary
                })
        })
    }

    /// Marks a payment reviewed. Reviewing an already reviewed payment succeeds.
    pub fn review(&self, payment_id: &str) -> Result<()> {
        let mut payment = self
            .store
            .get_payment_by_id(payment_id)
            .ok_or_else(|| Error::NotFound(format!("paymentId: {payment_id}")))?;

        payment.reviewed = true;
        self.store.update_payment(payment);
        info!(payment_id, "payment reviewed");
        Ok(())
    }

    fn filtered(&self, request: &ListRequest) -> Vec<Payment> {
        self.store.with_payments(|payments| {
            payments
                .iter()
                .filter(|p| matches_filter(p, request))
                .cloned()
                .collect()
        })
    }
}

/// Shared by the list and the count so the two can never disagree.
fn matches_filter(payment: &Payment, request: &ListRequest) -> bool {
    (request.status.is_empty() || request.status == payment.status.as_str())
        && (request.search.is_empty() || payment.id.contains(request.search.as_str()))
}

fn compare(a: &Payment, b: &Payment, key: SortKey, order: SortOrder) -> Ordering {
    let primary = match key {
        SortKey::Amount => a.amount.cmp(&b.amount),
        SortKey::Date => a.date.cmp(&b.date),
    };
    let primary = match order {
        SortOrder::Asc => primary,
        SortOrder::Desc => primary.reverse(),
    };
    primary.then_with(|| a.id.cmp(&b.id))
}

fn normalize(value: i64, default: usize) -> usize {
    if value <= 0 {
        default
    } else {
        usize::try_from(value).unwrap_or(usize::MAX)
    }
}
