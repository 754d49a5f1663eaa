use std::collections::HashSet;

use crate::domain::member::Capability;
use crate::domain::news::entity::NewsItem;

/// Viewing is capability-gated only for hidden items; anything live is
/// world-readable.
pub struct CanViewNewsSpec<'a> {
    capabilities: &'a HashSet<Capability>,
    item: &'a NewsItem,
}

impl<'a> CanViewNewsSpec<'a> {
    pub fn new(capabilities: &'a HashSet<Capability>, item: &'a NewsItem) -> Self {
        Self { capabilities, item }
    }

    pub fn is_satisfied(&self) -> bool {
        self.item.live
            || self
                .capabilities
                .iter()
                .any(|cap| cap.matches("news", "view"))
    }
}
