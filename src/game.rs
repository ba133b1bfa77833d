//! Identity of the running game.
//!
//! Every catalog entry is tagged with the [`GameId`] it was written for. The
//! identity is queried once when the hook registry is built and never changes
//! while the game stays loaded.

use std::str::FromStr;

use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::{Error, Result};

/// Identifies which SCI game is running.
///
/// The string form is the short engine game id (`qfg1`, `kq5`, ...), which is
/// what detection tables and configuration files use.
///
/// # Examples
///
/// ```rust
/// use scihooks::GameId;
///
/// let game = GameId::parse("qfg1")?;
/// assert_eq!(game, GameId::Qfg1);
/// assert_eq!(game.to_string(), "qfg1");
/// # Ok::<(), scihooks::Error>(())
/// ```
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumString, EnumIter, IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum GameId {
    /// Castle of Dr. Brain
    CastleBrain,
    /// Conquests of Camelot
    Camelot,
    /// EcoQuest: The Search for Cetus
    EcoQuest,
    /// Gabriel Knight: Sins of the Fathers
    Gk1,
    /// Hoyle's Official Book of Games
    Hoyle1,
    /// King's Quest IV
    Kq4,
    /// King's Quest V
    Kq5,
    /// King's Quest VI
    Kq6,
    /// Leisure Suit Larry 1
    Lsl1,
    /// Leisure Suit Larry 2
    Lsl2,
    /// Leisure Suit Larry 3
    Lsl3,
    /// Laura Bow: The Colonel's Bequest
    LauraBow,
    /// Police Quest 2
    Pq2,
    /// Police Quest 3
    Pq3,
    /// Quest for Glory I (EGA)
    Qfg1,
    /// Quest for Glory I (VGA remake)
    Qfg1Vga,
    /// Quest for Glory II
    Qfg2,
    /// Quest for Glory III
    Qfg3,
    /// Space Quest III
    Sq3,
    /// Space Quest IV
    Sq4,
    /// Space Quest V
    Sq5,
}

impl GameId {
    /// Parses a short game id, mapping unknown ids to [`Error::UnknownGame`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownGame`] if `id` does not name a supported game.
    pub fn parse(id: &str) -> Result<Self> {
        GameId::from_str(id).map_err(|_| Error::UnknownGame(id.to_string()))
    }
}
