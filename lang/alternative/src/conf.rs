use crate::err::ConfError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Conf {
    /// line width used when rendering error trees
    pub render_width: usize,
    /// nesting indent for child failures
    pub indent: isize,
    /// silence the panic hook while `catch` evaluates
    pub quiet_faults: bool,
}

impl Default for Conf {
    fn default() -> Self {
        Conf { render_width: 80, indent: 2, quiet_faults: false }
    }
}

impl Conf {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfError> {
        Ok(toml::from_str(s)?)
    }
}
