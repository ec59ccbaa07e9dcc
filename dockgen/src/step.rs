//! Named, described instruction groups.

use crate::sequence::{InstructionSet, Instructions};

/// A named, described group of instructions meant to be embedded inside a
/// larger manifest.
///
/// A step renders as two leading comment lines (name, then description)
/// followed by its own instructions. Parents absorb the rendered text as an
/// opaque block via [`Instructions::with_step`]; steps nest recursively the
/// same way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    name: String,
    description: String,
    set: InstructionSet,
}

impl Step {
    /// Create an empty step.
    ///
    /// Both identity strings are stored verbatim, with no trimming or case
    /// normalization.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            set: InstructionSet::new(),
        }
    }

    /// The step name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The step description.
    pub fn description(&self) -> &str {
        &self.description
    }
}

impl Instructions for Step {
    fn instructions(&self) -> &InstructionSet {
        &self.set
    }

    fn instructions_mut(&mut self) -> &mut InstructionSet {
        &mut self.set
    }

    fn render(&self) -> String {
        format!("# {}\n# {}\n{}", self.name, self.description, self.set.render())
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}
