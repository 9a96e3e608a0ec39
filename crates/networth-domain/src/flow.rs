//! Recurring monthly cash flows and the lists that own them.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::*;

/// Which side of the monthly balance a flow contributes to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum FlowKind {
    Income,
    Expense,
    Investment,
}

impl FlowKind {
    pub const ALL: [FlowKind; 3] = [FlowKind::Income, FlowKind::Expense, FlowKind::Investment];

    /// `+1.0` for incomes, `-1.0` for expenses and investments.
    pub fn sign(self) -> f64 {
        match self {
            FlowKind::Income => 1.0,
            FlowKind::Expense | FlowKind::Investment => -1.0,
        }
    }
}

impl fmt::Display for FlowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FlowKind::Income => "Income",
            FlowKind::Expense => "Expense",
            FlowKind::Investment => "Investment",
        };
        f.write_str(label)
    }
}

/// A single recurring monthly entry. Never mutated in place; lists replace or remove it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FlowItem {
    pub id: Uuid,
    pub label: String,
    pub amount: f64,
}

impl FlowItem {
    pub fn new(label: impl Into<String>, amount: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            label: label.into(),
            amount,
        }
    }
}

impl Identifiable for FlowItem {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Amounted for FlowItem {
    fn amount(&self) -> f64 {
        self.amount
    }
}

/// Ordered list of flows of one kind. Order only matters for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct FlowList {
    items: Vec<FlowItem>,
}

impl FlowList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an item, replacing any existing entry with the same id.
    pub fn add(&mut self, item: FlowItem) -> Uuid {
        let id = item.id();
        self.items.retain(|existing| existing.id() != id);
        self.items.push(item);
        id
    }

    /// Removes the item with `id`, returning whether anything was removed.
    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        before != self.items.len()
    }

    pub fn get(&self, id: Uuid) -> Option<&FlowItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Sum of all amounts; an empty list totals `0.0`.
    pub fn total(&self) -> f64 {
        self.items.iter().map(Amounted::amount).sum()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FlowItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<FlowItem> for FlowList {
    fn from_iter<I: IntoIterator<Item = FlowItem>>(iter: I) -> Self {
        let mut list = FlowList::new();
        for item in iter {
            list.add(item);
        }
        list
    }
}

impl<'a> IntoIterator for &'a FlowList {
    type Item = &'a FlowItem;
    type IntoIter = std::slice::Iter<'a, FlowItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
