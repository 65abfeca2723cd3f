use tilenav_core::Position;

/// Read-only walkability oracle for the world map.
///
/// Queried many times per search. Implementations shared between threads
/// must tolerate concurrent read-only calls.
pub trait WorldGrid {
    /// Whether an agent may stand on `p`.
    fn is_walkable(&self, p: Position) -> bool;
}

impl<F> WorldGrid for F
where
    F: Fn(Position) -> bool,
{
    #[inline]
    fn is_walkable(&self, p: Position) -> bool {
        self(p)
    }
}

/// Movement capabilities of the agent a path is generated for.
///
/// Carried by every [`PathRequest`](crate::PathRequest) but not consulted by
/// the search yet.
pub trait AgentAbility {
    /// Short name used in diagnostics.
    fn label(&self) -> &str {
        "agent"
    }
}

impl AgentAbility for () {}
