use std::collections::BTreeSet;

use dealership_core::{DomainError, DomainResult, UnitId};

/// Car units currently available for sale.
///
/// Backed by an ordered set: no unit appears twice and iteration is always
/// ascending, so a released unit lands back in sorted position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryPool {
    units: BTreeSet<UnitId>,
}

impl InventoryPool {
    /// Pool holding units `1..=size`.
    pub fn with_fleet(size: u32) -> Self {
        Self {
            units: (1..=size).map(UnitId::new).collect(),
        }
    }

    pub fn contains(&self, unit: UnitId) -> bool {
        self.units.contains(&unit)
    }

    /// Resolve a raw operator-supplied unit id to an available unit.
    pub fn available(&self, raw: i64) -> DomainResult<UnitId> {
        UnitId::from_raw(raw)
            .filter(|unit| self.contains(*unit))
            .ok_or(DomainError::InvalidUnitSelection(raw))
    }

    /// Remove a unit from the pool. Fails if it was not available.
    pub fn take(&mut self, unit: UnitId) -> DomainResult<()> {
        if self.units.remove(&unit) {
            Ok(())
        } else {
            Err(DomainError::invariant(format!("unit {unit} is not in the pool")))
        }
    }

    /// Put a unit back. Fails if it is already available.
    pub fn release(&mut self, unit: UnitId) -> DomainResult<()> {
        if self.units.insert(unit) {
            Ok(())
        } else {
            Err(DomainError::invariant(format!("unit {unit} is already in the pool")))
        }
    }

    /// Units in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = UnitId> + '_ {
        self.units.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Collapse the pool into inclusive runs, e.g. `[(1, 2), (4, 50)]`.
    pub fn ranges(&self) -> Vec<(UnitId, UnitId)> {
        let mut runs: Vec<(UnitId, UnitId)> = Vec::new();
        for unit in self.iter() {
            match runs.last_mut() {
                Some((_, end)) if end.get() + 1 == unit.get() => *end = unit,
                _ => runs.push((unit, unit)),
            }
        }
        runs
    }
}
