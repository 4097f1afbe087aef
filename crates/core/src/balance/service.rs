//! Balance aggregation service.

use std::collections::{BTreeMap, HashMap};

use rust_decimal::Decimal;
use tracing::{debug, warn};

use centime_shared::types::{AccountId, UserId};

use crate::ledger::Transaction;

use super::types::{Account, AccountBalances, BalanceReport, TreasurySummary};

/// Running deltas for one account while scanning the snapshot.
#[derive(Debug, Default, Clone, Copy)]
struct Deltas {
    real: Decimal,
    upcoming: Decimal,
}

impl Deltas {
    fn credit(&mut self, amount: Decimal, cleared: bool) {
        self.upcoming += amount;
        if cleared {
            self.real += amount;
        }
    }

    fn debit(&mut self, amount: Decimal, cleared: bool) {
        self.upcoming -= amount;
        if cleared {
            self.real -= amount;
        }
    }
}

/// Real / upcoming / pending balance computation over one user's snapshot.
pub struct BalanceService;

impl BalanceService {
    /// Computes the three balances for every account of the user, plus
    /// portfolio totals.
    ///
    /// The snapshot is scanned once, distributing each transaction's
    /// amount to the accounts it touches; no per-account re-scan.
    /// Degenerate transactions and transactions touching only accounts
    /// outside the snapshot contribute nothing.
    #[must_use]
    pub fn balances(
        user_id: UserId,
        accounts: &[Account],
        transactions: &[Transaction],
    ) -> BalanceReport {
        let mut deltas: HashMap<AccountId, Deltas> = accounts
            .iter()
            .filter(|a| a.user_id == user_id)
            .map(|a| (a.id, Deltas::default()))
            .collect();

        for tx in transactions.iter().filter(|t| t.user_id == user_id) {
            if tx.is_degenerate() {
                warn!(transaction = %tx.id, "degenerate transaction in snapshot, treated as no-op");
                continue;
            }
            if let Some(from) = deltas.get_mut(&tx.from_account) {
                from.debit(tx.amount, tx.cleared);
            }
            if let Some(to) = deltas.get_mut(&tx.to_account) {
                to.credit(tx.amount, tx.cleared);
            }
        }

        let mut balances: BTreeMap<AccountId, AccountBalances> = BTreeMap::new();
        let mut treasury = TreasurySummary::default();

        for account in accounts.iter().filter(|a| a.user_id == user_id) {
            let delta = deltas.get(&account.id).copied().unwrap_or_default();
            let real = account.initial_balance + delta.real;
            let upcoming = account.initial_balance + delta.upcoming;
            let pending = upcoming - real;

            treasury.total_real += real;
            treasury.total_upcoming += upcoming;
            treasury.total_pending += pending;

            balances.insert(
                account.id,
                AccountBalances {
                    name: account.name.clone(),
                    real,
                    upcoming,
                    pending,
                },
            );
        }

        debug!(accounts = balances.len(), "balances aggregated");

        BalanceReport {
            accounts: balances,
            treasury,
        }
    }
}
