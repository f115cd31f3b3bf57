//! Patch model: the generic single-span patch type and the registered patch
//! definitions built on it.

pub mod dsp_info;
pub mod patch;

use self::patch::SourcePatch;

/// All patches this tool knows how to apply.
pub fn registered() -> Vec<&'static SourcePatch> {
    vec![dsp_info::patch()]
}
