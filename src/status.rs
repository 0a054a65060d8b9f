// src/status.rs
use serde::Serialize;
use std::fmt;

/// A module identifier extracted from an archive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleName {
    name: String,
    automatic: bool,
}

impl ModuleName {
    /// A name declared by a genuine module descriptor.
    #[must_use]
    pub fn descriptor(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            automatic: false,
        }
    }

    /// A name derived from the weaker automatic-module manifest marker.
    #[must_use]
    pub fn automatic(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            automatic: true,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn is_automatic(&self) -> bool {
        self.automatic
    }
}

impl fmt::Display for ModuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// How far one resolved artifact has progressed toward modularization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ModularizationStatus {
    /// The archive declares a real module descriptor.
    FullyModularized {
        module: ModuleName,
        version: String,
    },
    /// The archive only carries an automatic-module-name manifest marker.
    AutomaticModuleName {
        module: ModuleName,
        version: String,
    },
    /// A readable archive with neither descriptor nor marker.
    NotModularized { version: String },
    /// The resolved file is not a jar-like container at all.
    NotArchive { version: String },
    /// The artifact resolved but could not be inspected.
    Unavailable { error: Option<String> },
}

impl ModularizationStatus {
    #[must_use]
    pub fn module(&self) -> Option<&ModuleName> {
        match self {
            ModularizationStatus::FullyModularized { module, .. }
            | ModularizationStatus::AutomaticModuleName { module, .. } => Some(module),
            ModularizationStatus::NotModularized { .. }
            | ModularizationStatus::NotArchive { .. }
            | ModularizationStatus::Unavailable { .. } => None,
        }
    }

    #[must_use]
    pub fn version(&self) -> Option<&str> {
        match self {
            ModularizationStatus::FullyModularized { version, .. }
            | ModularizationStatus::AutomaticModuleName { version, .. }
            | ModularizationStatus::NotModularized { version }
            | ModularizationStatus::NotArchive { version } => Some(version),
            ModularizationStatus::Unavailable { .. } => None,
        }
    }

    /// Goodness rank, higher is better. The report rows themselves stay in
    /// dependency order.
    #[must_use]
    pub fn rank(&self) -> u8 {
        match self {
            ModularizationStatus::FullyModularized { .. } => 4,
            ModularizationStatus::AutomaticModuleName { .. } => 3,
            ModularizationStatus::NotModularized { .. } => 2,
            ModularizationStatus::NotArchive { .. } => 1,
            ModularizationStatus::Unavailable { .. } => 0,
        }
    }
}

impl fmt::Display for ModularizationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModularizationStatus::FullyModularized { module, version } => {
                write!(f, "version {version} is fully modularized as '{module}'")
            }
            ModularizationStatus::AutomaticModuleName { module, version } => {
                write!(f, "version {version} is named automatic module '{module}'")
            }
            ModularizationStatus::NotModularized { version } => {
                write!(f, "version {version} is not modularized")
            }
            ModularizationStatus::NotArchive { version } => {
                write!(f, "version {version} is not a jar archive")
            }
            ModularizationStatus::Unavailable { error } => match error {
                Some(e) => write!(f, "is unavailable: {e}"),
                None => write!(f, "is unavailable"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_ordering() {
        let full = ModularizationStatus::FullyModularized {
            module: ModuleName::descriptor("com.io7m.example"),
            version: "1.0.0".to_string(),
        };
        let auto = ModularizationStatus::AutomaticModuleName {
            module: ModuleName::automatic("com.io7m.example"),
            version: "1.0.0".to_string(),
        };
        let not = ModularizationStatus::NotModularized {
            version: "1.0.0".to_string(),
        };
        let not_jar = ModularizationStatus::NotArchive {
            version: "1.0.0".to_string(),
        };
        let unavailable = ModularizationStatus::Unavailable { error: None };

        assert!(full.rank() > auto.rank());
        assert!(auto.rank() > not.rank());
        assert!(not.rank() > not_jar.rank());
        assert!(not_jar.rank() > unavailable.rank());
    }

    #[test]
    fn test_module_accessor() {
        let auto = ModularizationStatus::AutomaticModuleName {
            module: ModuleName::automatic("com.io7m.example"),
            version: "1.0.0".to_string(),
        };
        assert!(auto.module().is_some_and(ModuleName::is_automatic));
        let not = ModularizationStatus::NotModularized {
            version: "1.0.0".to_string(),
        };
        assert!(not.module().is_none());
    }
}
