/// Proof that the host application currently has a foreground UI.
///
/// Operations that open vendor screens or send window-bound requests refuse
/// to run without one. The host integration constructs the token while it has
/// a visible window and passes it along with each call; when the UI goes to
/// background, it simply passes `None` and the bridge answers those
/// operations with [`BridgeError::NoForeground`](crate::error::BridgeError).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Foreground(u64);

impl Foreground {
    /// Creates a token referring to the host window with the given identifier.
    pub fn new(window_id: u64) -> Self {
        Self(window_id)
    }

    /// Identifier of the host window this token refers to.
    pub fn window_id(&self) -> u64 {
        self.0
    }
}
