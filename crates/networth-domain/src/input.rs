//! Snapshot of everything a projection run reads.

use serde::{Deserialize, Serialize};

use crate::flow::{FlowKind, FlowList};

pub const DEFAULT_HORIZON_YEARS: i32 = 15;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectionInput {
    pub start_net_worth: f64,
    #[serde(default)]
    pub monthly_incomes: FlowList,
    #[serde(default)]
    pub monthly_expenses: FlowList,
    #[serde(default)]
    pub monthly_investments: FlowList,
    #[serde(default = "ProjectionInput::default_horizon_years")]
    pub horizon_years: i32,
}

impl ProjectionInput {
    pub fn new(start_net_worth: f64) -> Self {
        Self {
            start_net_worth,
            monthly_incomes: FlowList::new(),
            monthly_expenses: FlowList::new(),
            monthly_investments: FlowList::new(),
            horizon_years: DEFAULT_HORIZON_YEARS,
        }
    }

    pub fn with_horizon(mut self, years: i32) -> Self {
        self.horizon_years = years;
        self
    }

    fn default_horizon_years() -> i32 {
        DEFAULT_HORIZON_YEARS
    }

    pub fn flows(&self, kind: FlowKind) -> &FlowList {
        match kind {
            FlowKind::Income => &self.monthly_incomes,
            FlowKind::Expense => &self.monthly_expenses,
            FlowKind::Investment => &self.monthly_investments,
        }
    }

    pub fn flows_mut(&mut self, kind: FlowKind) -> &mut FlowList {
        match kind {
            FlowKind::Income => &mut self.monthly_incomes,
            FlowKind::Expense => &mut self.monthly_expenses,
            FlowKind::Investment => &mut self.monthly_investments,
        }
    }

    /// Incomes minus expenses minus investments. May be negative.
    pub fn monthly_net_change(&self) -> f64 {
        FlowKind::ALL
            .iter()
            .map(|kind| kind.sign() * self.flows(*kind).total())
            .sum()
    }
}

impl Default for ProjectionInput {
    fn default() -> Self {
        Self::new(0.0)
    }
}
