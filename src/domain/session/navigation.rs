use derive_more::Display;
use strum::{EnumIter, EnumString, IntoEnumIterator};

/// Sidebar menu entries shown once the session is authenticated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter, EnumString)]
pub enum Destination {
    #[default]
    #[display(fmt = "Home")]
    #[strum(serialize = "home")]
    Home,
    #[display(fmt = "Chart")]
    #[strum(serialize = "chart")]
    Chart,
    #[display(fmt = "Log out")]
    #[strum(serialize = "logout")]
    LogOut,
}

impl Destination {
    /// Menu order, top to bottom.
    pub fn menu() -> Vec<Destination> {
        Destination::iter().collect()
    }

    /// Leaving the session is the only destination with a side effect.
    pub fn ends_session(&self) -> bool {
        matches!(self, Destination::LogOut)
    }
}
