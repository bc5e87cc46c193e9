use crate::models::EnvironmentMap;

/// Read-only access to the process environment.
///
/// Handlers never touch `std::env` directly: they take a fresh snapshot per
/// request through this capability, which lives in application state. Tests
/// (and anything else that must not observe the live environment) construct
/// one over a fixed map instead.
#[derive(Debug, Clone)]
pub struct EnvironmentSnapshot {
    source: Source,
}

#[derive(Debug, Clone)]
enum Source {
    Process,
    Fixed(EnvironmentMap),
}

impl EnvironmentSnapshot {
    /// Capability over the live process environment.
    pub fn from_process() -> Self {
        Self {
            source: Source::Process,
        }
    }

    /// Capability over a fixed set of variables.
    pub fn with_vars(vars: EnvironmentMap) -> Self {
        Self {
            source: Source::Fixed(vars),
        }
    }

    /// Full point-in-time copy of the environment. The returned map is an
    /// independent copy; later changes to the process environment do not
    /// show through. Non-UTF-8 entries are skipped.
    ///
    /// Nothing is filtered or redacted here; whether the copy may leave the
    /// process is the dispatcher's decision.
    pub fn snapshot(&self) -> EnvironmentMap {
        match &self.source {
            Source::Process => std::env::vars_os()
                .filter_map(|(name, value)| {
                    Some((name.into_string().ok()?, value.into_string().ok()?))
                })
                .collect(),
            Source::Fixed(vars) => vars.clone(),
        }
    }

    /// Read a single variable.
    pub fn get(&self, name: &str) -> Option<String> {
        match &self.source {
            Source::Process => std::env::var(name).ok(),
            Source::Fixed(vars) => vars.get(name).cloned(),
        }
    }
}
