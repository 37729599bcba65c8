//! Redistributes a new total budget across platform entries, preserving each
//! entry's relative share.
//!
//! For entry `i` the raw share is `budget_i / reference`, where `reference`
//! is the sum of the entries' baselines (falling back to the legacy total
//! when that sum is zero). Shares are then normalised by their sum and the
//! new budget is `round(new_total * normalised_share)`. Rounding drift is
//! not corrected: the outputs need not sum exactly to `new_total`.

use std::fmt;

use crate::config::CAMPAIGN;
use crate::domain::PlatformBudget;

/// Errors raised while redistributing a budget
#[derive(Debug, Clone, PartialEq)]
pub enum AllocationError {
    /// Total is negative, NaN or infinite
    InvalidTotal(f64),
    /// Every share is zero and the policy refuses to guess
    ZeroShares,
}

impl fmt::Display for AllocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AllocationError::InvalidTotal(total) => {
                write!(f, "Invalid total budget: {}", total)
            }
            AllocationError::ZeroShares => {
                write!(f, "Cannot redistribute: every platform share is zero")
            }
        }
    }
}

impl std::error::Error for AllocationError {}

/// Which amount an entry's share is computed from.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, clap::ValueEnum)]
pub enum ShareBasis {
    /// The entry's current budget (shares drift with rounding over repeated moves)
    #[default]
    Current,
    /// The entry's original baseline (stable across repeated moves)
    Baseline,
}

/// What to do when the shares sum to zero.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, clap::ValueEnum)]
pub enum ZeroSharePolicy {
    /// Give every entry `round(new_total / n)`
    #[default]
    EqualSplit,
    /// Leave all entries as they are
    KeepUnchanged,
    /// Fail with `AllocationError::ZeroShares`
    Reject,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BudgetAllocator {
    pub share_basis: ShareBasis,
    pub zero_share_policy: ZeroSharePolicy,
}

impl BudgetAllocator {
    pub fn new(share_basis: ShareBasis, zero_share_policy: ZeroSharePolicy) -> Self {
        Self {
            share_basis,
            zero_share_policy,
        }
    }

    /// Computes the new budget of each entry, in the same order as `entries`.
    pub fn allocate(
        &self,
        new_total: f64,
        entries: &[PlatformBudget],
    ) -> Result<Vec<u64>, AllocationError> {
        if !new_total.is_finite() || new_total < 0.0 {
            return Err(AllocationError::InvalidTotal(new_total));
        }
        if entries.is_empty() {
            return Ok(Vec::new());
        }

        let reference = reference_total(entries);
        let shares: Vec<f64> = entries
            .iter()
            .map(|e| self.basis_amount(e) as f64 / reference)
            .collect();
        let sum_shares: f64 = shares.iter().sum();

        if sum_shares <= 0.0 {
            return match self.zero_share_policy {
                ZeroSharePolicy::EqualSplit => {
                    let each = round_budget(new_total / entries.len() as f64);
                    Ok(vec![each; entries.len()])
                }
                ZeroSharePolicy::KeepUnchanged => Ok(entries.iter().map(|e| e.budget).collect()),
                ZeroSharePolicy::Reject => Err(AllocationError::ZeroShares),
            };
        }

        Ok(shares
            .iter()
            .map(|share| round_budget(new_total * (share / sum_shares)))
            .collect())
    }

    /// Applies `allocate` to the entries in place. Entries are left untouched
    /// on error.
    pub fn redistribute(
        &self,
        new_total: f64,
        entries: &mut [PlatformBudget],
    ) -> Result<(), AllocationError> {
        let budgets = self.allocate(new_total, entries)?;
        for (entry, budget) in entries.iter_mut().zip(budgets) {
            entry.budget = budget;
        }
        Ok(())
    }

    fn basis_amount(&self, entry: &PlatformBudget) -> u64 {
        match self.share_basis {
            ShareBasis::Current => entry.budget,
            ShareBasis::Baseline => entry.baseline,
        }
    }
}

/// Total the raw shares are measured against: the sum of the entries'
/// baselines, or the legacy campaign total if there is none.
pub fn reference_total(entries: &[PlatformBudget]) -> f64 {
    let baseline_sum: u64 = entries.iter().map(|e| e.baseline).sum();
    if baseline_sum == 0 {
        CAMPAIGN.legacy_reference_total
    } else {
        baseline_sum as f64
    }
}

// Half away from zero; inputs are never negative here.
fn round_budget(value: f64) -> u64 {
    value.round() as u64
}
