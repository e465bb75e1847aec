//! Badge configuration persistence seam.
//!
//! The provisioning flow hands a validated [`BadgeConfig`] to whatever
//! store the application wires in; the flash-backed store lives with the
//! application, not here.

use core::convert::Infallible;

use protobadge_link::BadgeConfig;

/// Where the owner's configuration lives between boots.
pub trait ConfigStore {
    type Error;

    /// The previously saved configuration, if any.
    fn load(&mut self) -> Result<Option<BadgeConfig>, Self::Error>;

    /// Persist a configuration. Called only after full link validation.
    fn save(&mut self, config: &BadgeConfig) -> Result<(), Self::Error>;
}

/// In-memory store for examples and bring-up; forgets on reset.
#[derive(Default)]
pub struct RamStore {
    config: Option<BadgeConfig>,
}

impl RamStore {
    pub const fn new() -> Self {
        Self { config: None }
    }
}

impl ConfigStore for RamStore {
    type Error = Infallible;

    fn load(&mut self) -> Result<Option<BadgeConfig>, Self::Error> {
        Ok(self.config.clone())
    }

    fn save(&mut self, config: &BadgeConfig) -> Result<(), Self::Error> {
        self.config = Some(config.clone());
        Ok(())
    }
}
