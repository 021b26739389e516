//! Texture ownership bookkeeping

/// Texture names used by the game.
pub mod names {
    /// Door sprite
    pub const DOOR: &str = "DoorNew.png";
    /// Indicator for a neighbor with a positive event
    pub const POSITIVE_INDICATOR: &str = "PositiveIndicator.png";
    /// Indicator for a neighbor with a negative event
    pub const NEGATIVE_INDICATOR: &str = "NegativeIndicator.png";
    /// Player sprite
    pub const PLAYER: &str = "MalePlayer.png";
    /// Speed boost pickup
    pub const SAUSAGE_ROLL: &str = "GreggsSausageRoll.png";
    /// Timer freeze pickup
    pub const FREEZE: &str = "Freeze.png";
    /// Hidden figure, revealed
    pub const GHOST: &str = "Longboi.png";
    /// Hidden figure, before reveal
    pub const GHOST_SHADOW: &str = "LongboiShadow.png";
    /// Secret passage prop
    pub const BOOKSHELF: &str = "Bookshelf.png";
}

/// The set of textures an owner holds on behalf of the host renderer.
///
/// `dispose` releases them once; later calls are no-ops.
#[derive(Debug, Clone, Default)]
pub struct TextureSet {
    names: Vec<String>,
    disposed: bool,
}

impl TextureSet {
    /// Create a set from texture names; duplicates are kept once
    #[must_use]
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::default();
        for name in names {
            set.insert(name);
        }
        set
    }

    /// Add a texture name
    pub fn insert(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !self.names.contains(&name) {
            self.names.push(name);
        }
    }

    /// Names still held
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Whether `dispose` has run
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Release all textures. Returns how many were released by this call.
    pub fn dispose(&mut self) -> usize {
        if self.disposed {
            return 0;
        }
        self.disposed = true;
        let released = self.names.len();
        log::debug!("Disposing {released} textures");
        self.names.clear();
        released
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispose_is_idempotent() {
        let mut set = TextureSet::new(["Room1.png", "Room3.png", "Room1.png"]);
        assert_eq!(set.names().len(), 2);

        assert_eq!(set.dispose(), 2);
        assert!(set.is_disposed());
        assert!(set.names().is_empty());

        assert_eq!(set.dispose(), 0);
    }
}
