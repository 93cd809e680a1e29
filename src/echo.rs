/// Substitute symbol used by [`EchoPolicy::masked`]
pub const DEFAULT_MASK: char = '*';

/// What gets written back to the terminal while a line is typed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EchoPolicy {
    /// Echo every accepted character as typed
    #[default]
    Visible,
    /// Echo nothing, not even erases
    Hidden,
    /// Echo the given symbol once per accepted character
    Masked(char),
}

/// Feedback for one accepted byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Echo {
    /// Write nothing
    Nothing,
    /// Write the byte as received
    Byte(u8),
    /// Write the mask symbol
    Symbol(char),
}

impl EchoPolicy {
    /// Masked input with the default `*` symbol
    pub const fn masked() -> Self {
        EchoPolicy::Masked(DEFAULT_MASK)
    }

    /// Feedback for an accepted printable byte
    pub const fn feedback(self, byte: u8) -> Echo {
        match self {
            EchoPolicy::Visible => Echo::Byte(byte),
            EchoPolicy::Hidden => Echo::Nothing,
            EchoPolicy::Masked(symbol) => Echo::Symbol(symbol),
        }
    }

    /// Whether an erase is shown on the terminal
    pub const fn erases_visually(self) -> bool {
        !matches!(self, EchoPolicy::Hidden)
    }
}
