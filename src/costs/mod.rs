//! Cost calculator.
//!
//! Billing is per pair of consecutive periods (two months, a "bimestre").
//! A trailing period without a partner is not billed.

mod amount;

pub use amount::Amount;

use serde::{Deserialize, Serialize};

/// Prefix of the due-date label of each payment.
pub const DUE_LABEL_PREFIX: &str = "inizio";

/// Input of [`compute_costs`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CostConfig {
    /// Billable periods in chronological order.
    pub included_periods: Vec<String>,
    /// Flat amount charged per pair of periods.
    pub rate_per_pair: Amount,
}

/// One installment of the payment schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentEntry {
    /// `"<first>-<second>"`.
    #[serde(rename = "periodo")]
    pub period: String,
    #[serde(rename = "importo")]
    pub amount: Amount,
    /// `"inizio <first>"`.
    #[serde(rename = "scadenza")]
    pub due_label: String,
}

/// Output of [`compute_costs`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostResult {
    #[serde(rename = "bimestri")]
    pub pairs: Vec<[String; 2]>,
    #[serde(rename = "numero_bimestri")]
    pub pair_count: u32,
    #[serde(rename = "costo_totale")]
    pub total_cost: Amount,
    #[serde(rename = "dettaglio_pagamenti")]
    pub payment_schedule: Vec<PaymentEntry>,
}

/// Group the included periods in pairs and price them.
pub fn compute_costs(config: &CostConfig) -> CostResult {
    let pairs: Vec<[String; 2]> = config
        .included_periods
        .chunks_exact(2)
        .map(|pair| [pair[0].clone(), pair[1].clone()])
        .collect();

    if config.included_periods.len() % 2 == 1
        && let Some(dropped) = config.included_periods.last()
    {
        log::debug!("costs: trailing period '{}' has no partner, not billed", dropped);
    }

    let payment_schedule = pairs
        .iter()
        .map(|[first, second]| PaymentEntry {
            period: format!("{}-{}", first, second),
            amount: config.rate_per_pair,
            due_label: format!("{} {}", DUE_LABEL_PREFIX, first),
        })
        .collect();

    let pair_count = pairs.len() as u32;
    let total_cost = config.rate_per_pair.times(pair_count);

    CostResult {
        pairs,
        pair_count,
        total_cost,
        payment_schedule,
    }
}
