use serde::Serialize;

use networth_core::{ZoomRange, ZoomWindow};
use networth_domain::{FlowKind, PeriodLabel, ProjectionInput, Series};

/// Monthly sums per flow kind, as shown on the chart header.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq)]
pub struct FlowTotals {
    pub income: f64,
    pub expense: f64,
    pub investment: f64,
    pub net: f64,
}

impl FlowTotals {
    pub fn from_input(input: &ProjectionInput) -> Self {
        Self {
            income: input.flows(FlowKind::Income).total(),
            expense: input.flows(FlowKind::Expense).total(),
            investment: input.flows(FlowKind::Investment).total(),
            net: input.monthly_net_change(),
        }
    }

    /// Share of income left after expenses and investments, in percent.
    pub fn savings_rate_pct(&self) -> Option<f64> {
        (self.income > 0.0).then(|| self.net / self.income * 100.0)
    }
}

/// Everything a host needs to draw one refresh of the projection card.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectionView {
    pub series: Series,
    pub goal: f64,
    pub eta: Option<PeriodLabel>,
    pub eta_label: Option<String>,
    pub goal_marker: String,
    pub range: ZoomRange,
    pub zoom: ZoomWindow,
    pub totals: FlowTotals,
}

impl ProjectionView {
    pub fn goal_reached(&self) -> bool {
        self.eta.is_some()
    }

    pub fn final_net_worth(&self) -> Option<f64> {
        self.series.last().map(|point| point.net_worth)
    }
}
