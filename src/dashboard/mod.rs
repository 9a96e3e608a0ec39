//! Host-side state for the savings and investment projection card.

mod view;

pub use view::{FlowTotals, ProjectionView};

use tracing::{debug, warn};
use uuid::Uuid;

use networth_config::Config;
use networth_core::{
    compute_zoom_window, CoreError, GoalEtaFinder, ProjectionEngine, ZoomRange,
    DEFAULT_GOAL_NET_WORTH,
};
use networth_domain::{FlowItem, FlowKind, FlowList, ProjectionInput, DEFAULT_HORIZON_YEARS};

use crate::{
    currency::{format_currency_value, format_goal_marker, format_period, parse_amount, LocaleConfig},
    errors::DashboardError,
};

const DEFAULT_BALANCE: f64 = 7500.0;
const DEFAULT_CURRENCY: &str = "EUR";

/// Balance, flows and view settings, regenerating the projection through an injected engine.
pub struct DashboardSession {
    engine: ProjectionEngine,
    input: ProjectionInput,
    goal: f64,
    active_range: ZoomRange,
    locale: LocaleConfig,
    currency: String,
}

impl DashboardSession {
    /// Empty session: no flows, zero balance, default horizon and goal.
    pub fn empty(engine: ProjectionEngine) -> Self {
        Self {
            engine,
            input: ProjectionInput::new(0.0).with_horizon(DEFAULT_HORIZON_YEARS),
            goal: DEFAULT_GOAL_NET_WORTH,
            active_range: ZoomRange::default(),
            locale: LocaleConfig::for_tag("es-ES"),
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }

    /// Session seeded with the dashboard's starter data.
    pub fn new(engine: ProjectionEngine) -> Self {
        let mut session = Self::empty(engine);
        session.input.start_net_worth = DEFAULT_BALANCE;
        session
            .input
            .monthly_incomes
            .add(FlowItem::new("Salario", 1000.0));
        session
            .input
            .monthly_expenses
            .add(FlowItem::new("Subscripciones", 20.0));
        session
    }

    /// Starter session with balance, horizon, goal, range and locale taken from `config`.
    pub fn from_config(config: &Config, engine: ProjectionEngine) -> Result<Self, DashboardError> {
        let mut session = Self::new(engine);
        session.input.start_net_worth = config.starting_balance;
        session.input.horizon_years = config.horizon_years;
        session.goal = config.goal_net_worth;
        session.active_range = config.default_range.parse()?;
        session.locale = LocaleConfig::for_tag(&config.locale);
        session.currency = config.currency.clone();
        Ok(session)
    }

    pub fn input(&self) -> &ProjectionInput {
        &self.input
    }

    pub fn balance(&self) -> f64 {
        self.input.start_net_worth
    }

    pub fn set_balance(&mut self, balance: f64) {
        self.input.start_net_worth = balance;
    }

    /// Applies an edited balance such as `7500,50`. Invalid text leaves the balance unchanged.
    pub fn set_balance_from_text(&mut self, text: &str) -> Result<f64, DashboardError> {
        let balance = parse_amount(text).ok_or_else(|| {
            warn!(input = text, "rejected balance edit");
            DashboardError::InvalidAmount(text.to_string())
        })?;
        self.input.start_net_worth = balance;
        Ok(balance)
    }

    /// Balance card text. The card groups every thousand (`7.500,00 €`), even where
    /// the locale would leave four-digit amounts ungrouped.
    pub fn formatted_balance(&self) -> String {
        let card_locale = LocaleConfig {
            min_grouping_digits: 1,
            ..self.locale.clone()
        };
        format_currency_value(self.balance(), &self.currency, &card_locale)
    }

    pub fn flows(&self, kind: FlowKind) -> &FlowList {
        self.input.flows(kind)
    }

    /// Adds a flow from form text. Empty labels and non-numeric amounts are rejected
    /// without touching the list.
    pub fn add_flow(
        &mut self,
        kind: FlowKind,
        label: &str,
        amount_text: &str,
    ) -> Result<Uuid, DashboardError> {
        let label = label.trim();
        if label.is_empty() {
            warn!(%kind, "rejected flow without label");
            return Err(CoreError::Validation("flow label is empty".into()).into());
        }
        let amount = parse_amount(amount_text).ok_or_else(|| {
            warn!(%kind, input = amount_text, "rejected flow amount");
            DashboardError::InvalidAmount(amount_text.to_string())
        })?;
        Ok(self.push_flow(kind, FlowItem::new(label, amount)))
    }

    /// Adds an already-built flow item.
    pub fn push_flow(&mut self, kind: FlowKind, item: FlowItem) -> Uuid {
        debug!(%kind, label = %item.label, amount = item.amount, "flow added");
        self.input.flows_mut(kind).add(item)
    }

    /// Removes a flow by id. Unknown ids yield [`CoreError::FlowNotFound`].
    pub fn remove_flow(&mut self, kind: FlowKind, id: Uuid) -> Result<(), DashboardError> {
        if !self.input.flows_mut(kind).remove(id) {
            warn!(%kind, %id, "flow removal for unknown id");
            return Err(CoreError::FlowNotFound(id).into());
        }
        debug!(%kind, %id, "flow removed");
        Ok(())
    }

    pub fn clear_flows(&mut self, kind: FlowKind) {
        *self.input.flows_mut(kind) = FlowList::new();
    }

    pub fn horizon_years(&self) -> i32 {
        self.input.horizon_years
    }

    pub fn set_horizon_years(&mut self, years: i32) {
        self.input.horizon_years = years;
    }

    pub fn goal(&self) -> f64 {
        self.goal
    }

    pub fn set_goal(&mut self, goal: f64) {
        self.goal = goal;
    }

    pub fn active_range(&self) -> ZoomRange {
        self.active_range
    }

    pub fn set_range(&mut self, token: &str) -> Result<ZoomRange, DashboardError> {
        self.active_range = token.parse()?;
        Ok(self.active_range)
    }

    pub fn locale(&self) -> &LocaleConfig {
        &self.locale
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn totals(&self) -> FlowTotals {
        FlowTotals::from_input(&self.input)
    }

    /// Rebuilds the series from scratch and derives ETA, zoom window and totals.
    pub fn refresh(&mut self) -> ProjectionView {
        let series = self.engine.generate_series(&self.input);
        let eta = GoalEtaFinder::find_eta(&series, self.goal);
        let zoom = compute_zoom_window(self.active_range, series.zoom_point_count());
        debug!(
            points = series.len(),
            reached = eta.is_some(),
            range = %self.active_range,
            "dashboard projection refreshed"
        );
        ProjectionView {
            eta_label: eta.as_ref().map(|period| format_period(&self.locale, period)),
            goal_marker: format_goal_marker(&self.locale, self.goal, &self.currency),
            eta,
            goal: self.goal,
            range: self.active_range,
            zoom,
            totals: self.totals(),
            series,
        }
    }
}

impl Default for DashboardSession {
    fn default() -> Self {
        Self::new(ProjectionEngine::system())
    }
}
