//! Type-safe identifier wrappers.
//!
//! A simulation session is identified by a UUID v7 (time-ordered), minted
//! when the hosting layer initializes a new population. Agents inside a
//! session carry dense integer ids assigned at creation (0..n-1), stable
//! for the agent's lifetime.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for one simulation session.
///
/// Minted at initialization and replaced wholesale when a new population
/// is built. Lets callers detect that a re-initialize discarded the
/// simulation they were stepping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SimulationId(pub Uuid);

impl SimulationId {
    /// Create a new identifier using UUID v7 (time-ordered).
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Return the inner [`Uuid`] value.
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for SimulationId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for SimulationId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for SimulationId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<SimulationId> for Uuid {
    fn from(id: SimulationId) -> Self {
        id.0
    }
}

/// Dense integer identifier for an agent within one session.
///
/// Assigned in band order at population construction: workers first,
/// then capitalists, then government. Stable for the agent's lifetime.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct AgentId(pub u32);

impl AgentId {
    /// Return the raw index value.
    pub const fn into_inner(self) -> u32 {
        self.0
    }
}

impl core::fmt::Display for AgentId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for AgentId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl From<AgentId> for u32 {
    fn from(id: AgentId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simulation_ids_are_unique() {
        let a = SimulationId::new();
        let b = SimulationId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn simulation_id_roundtrip_serde() {
        let original = SimulationId::new();
        let json = serde_json::to_string(&original).ok();
        assert!(json.is_some());
        let restored: Result<SimulationId, _> =
            serde_json::from_str(json.as_deref().unwrap_or(""));
        assert_eq!(restored.ok(), Some(original));
    }

    #[test]
    fn agent_id_display_is_the_index() {
        let id = AgentId::from(42);
        assert_eq!(id.to_string(), "42");
        assert_eq!(id.into_inner(), 42);
    }
}
