//! Implements `list`, printing the registered patches.

use crate::internal;

pub fn execute() {
    for patch in internal::registered() {
        println!(
            "{:<16} {} (target: {})",
            patch.name, patch.summary, patch.default_target
        );
    }
}
