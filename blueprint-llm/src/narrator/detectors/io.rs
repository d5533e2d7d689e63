use crate::narrator::config::IoLists;
use crate::narrator::detectors::{call_target, enclosing_function, Detector};
use crate::narrator::{Finding, FindingType, NarratorConfig};
use blueprint_core::SyntaxTree;

/// Network, database, filesystem and subprocess calls
pub struct IoDetector {
    io: IoLists,
}

impl IoDetector {
    pub fn new(cfg: &NarratorConfig) -> Self {
        Self { io: cfg.io.clone() }
    }

    fn classify(&self, callee: &str) -> Option<FindingType> {
        if IoLists::matches(&self.io.network_callees, callee) {
            Some(FindingType::NetworkCall)
        } else if IoLists::matches(&self.io.db_callees, callee) {
            Some(FindingType::DbCall)
        } else if IoLists::matches(&self.io.fs_callees, callee) {
            Some(FindingType::FsIo)
        } else if IoLists::matches(&self.io.subprocess_callees, callee) {
            Some(FindingType::SubprocessCall)
        } else {
            None
        }
    }
}

impl Detector for IoDetector {
    fn detect(&self, tree: &SyntaxTree<'_>) -> Vec<Finding> {
        tree.nodes()
            .filter(|n| n.kind() == "call")
            .filter_map(|call| {
                let callee = call_target(tree, call)?;
                let typ = self.classify(&callee)?;
                let mut finding = Finding::new(call.start_position().row + 1, typ).with_subject(callee);
                if let Some(owner) = enclosing_function(tree, call) {
                    finding = finding.with_owner(owner);
                }
                Some(finding)
            })
            .collect()
    }
}
