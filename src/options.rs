//! Game configuration options.

/// Configuration options for a Big Two game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bigtwo::GameOptions;
///
/// let options = GameOptions::default()
///     .with_validate_opening_shape(true)
///     .with_validate_fresh_round_shape(true);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Whether the opening play must also be a single, a pair or a
    /// recognised five-card hand. When disabled, any play containing the
    /// Diamonds-3 opens the game.
    pub validate_opening_shape: bool,
    /// Whether the first play of a round must be a single, a pair or a
    /// recognised five-card hand. When disabled, any non-empty play starts
    /// the round.
    pub validate_fresh_round_shape: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            validate_opening_shape: false,
            validate_fresh_round_shape: true,
        }
    }
}

impl GameOptions {
    /// Sets whether the opening play must have a legal shape.
    ///
    /// # Example
    ///
    /// ```
    /// use bigtwo::GameOptions;
    ///
    /// let options = GameOptions::default().with_validate_opening_shape(true);
    /// assert!(options.validate_opening_shape);
    /// ```
    #[must_use]
    pub const fn with_validate_opening_shape(mut self, validate: bool) -> Self {
        self.validate_opening_shape = validate;
        self
    }

    /// Sets whether the first play of a round must have a legal shape.
    ///
    /// # Example
    ///
    /// ```
    /// use bigtwo::GameOptions;
    ///
    /// let options = GameOptions::default().with_validate_fresh_round_shape(false);
    /// assert!(!options.validate_fresh_round_shape);
    /// ```
    #[must_use]
    pub const fn with_validate_fresh_round_shape(mut self, validate: bool) -> Self {
        self.validate_fresh_round_shape = validate;
        self
    }
}
