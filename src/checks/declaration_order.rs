use crate::buffer::AnalysisSnapshot;
use crate::error::{Result, StyleGuardError};
use crate::ledger::{Finding, RuleCode};
use crate::locator::{AccessKind, AccessRegion, find_class_bodies, regions_in_body};

use super::{StyleCheck, no_class_found};

/// Required ordering of access regions inside a class body.
///
/// Each access kind gets a distinct rank in `1..=3`; labelled regions must
/// appear in non-decreasing rank order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeclarationOrder {
    public: u8,
    protected: u8,
    private: u8,
}

impl Default for DeclarationOrder {
    fn default() -> Self {
        Self {
            public: 1,
            protected: 2,
            private: 3,
        }
    }
}

impl DeclarationOrder {
    /// # Errors
    /// Returns `Config` when a rank is outside `1..=3` or two ranks are equal.
    pub fn new(public: u8, protected: u8, private: u8) -> Result<Self> {
        let ranks = [public, protected, private];
        if let Some(bad) = ranks.iter().find(|rank| !(1..=3).contains(*rank)) {
            return Err(StyleGuardError::Config(format!(
                "declaration order rank {bad} is out of range (expected 1, 2 or 3)"
            )));
        }
        if public == protected || public == private || protected == private {
            return Err(StyleGuardError::Config(format!(
                "declaration order ranks must be distinct (public={public}, protected={protected}, private={private})"
            )));
        }
        Ok(Self {
            public,
            protected,
            private,
        })
    }

    #[must_use]
    pub const fn rank(&self, kind: AccessKind) -> u8 {
        match kind {
            AccessKind::Public => self.public,
            AccessKind::Protected => self.protected,
            AccessKind::Private => self.private,
        }
    }

    /// Access kinds sorted by rank.
    #[must_use]
    pub fn sequence(&self) -> [AccessKind; 3] {
        let mut kinds = AccessKind::ALL;
        kinds.sort_by_key(|kind| self.rank(*kind));
        kinds
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DeclarationOrderCheck {
    order: DeclarationOrder,
}

impl DeclarationOrderCheck {
    #[must_use]
    pub const fn new(order: DeclarationOrder) -> Self {
        Self { order }
    }

    fn expected_text(&self) -> String {
        self.order
            .sequence()
            .iter()
            .map(|kind| kind.keyword())
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn check_body(&self, snapshot: &AnalysisSnapshot, regions: &[AccessRegion]) -> Vec<Finding> {
        let mut findings = Vec::new();
        let mut furthest: Option<(u8, &AccessRegion)> = None;

        for region in regions.iter().filter(|region| region.label.is_some()) {
            let rank = self.order.rank(region.kind);
            match furthest {
                Some((seen, earlier)) if seen > rank => {
                    let earlier_line = snapshot.line_of(earlier.anchor());
                    findings.push(Finding::error(
                        RuleCode::DeclarationOrder,
                        snapshot.line_of(region.anchor()),
                        format!(
                            "{} section appears after {} section at line {earlier_line} (expected order: {})",
                            region.kind,
                            earlier.kind,
                            self.expected_text()
                        ),
                    ));
                }
                Some((seen, _)) if seen == rank => {}
                _ => furthest = Some((rank, region)),
            }
        }

        findings
    }
}

impl StyleCheck for DeclarationOrderCheck {
    fn rule(&self) -> RuleCode {
        RuleCode::DeclarationOrder
    }

    fn check(&self, snapshot: &AnalysisSnapshot) -> Vec<Finding> {
        let bodies = find_class_bodies(snapshot);
        if bodies.is_empty() {
            return vec![no_class_found(RuleCode::DeclarationOrder)];
        }
        bodies
            .iter()
            .flat_map(|body| self.check_body(snapshot, &regions_in_body(snapshot, body)))
            .collect()
    }
}

#[cfg(test)]
#[path = "declaration_order_tests.rs"]
mod tests;
