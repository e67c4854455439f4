//! On/off capabilities: webcam, webcam hardware block, Fn/Win key swap,
//! cooler boost and super battery.

use embassy_sync::blocking_mutex::raw::RawMutex;
use msi_ec_access::EcTransport;

use crate::{Error, Service};

/// State of an on/off capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Switch {
    /// Feature disabled.
    Off,
    /// Feature enabled.
    On,
}

impl Switch {
    /// Whether the switch is on.
    pub const fn is_on(self) -> bool {
        matches!(self, Self::On)
    }
}

impl From<bool> for Switch {
    fn from(on: bool) -> Self {
        if on { Self::On } else { Self::Off }
    }
}

/// Physical position of a swappable key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeySide {
    /// Key acts in its left position.
    Left,
    /// Key acts in its right position.
    Right,
}

impl<M: RawMutex, E: EcTransport> Service<M, E> {
    /// Whether the integrated webcam is enabled.
    pub async fn webcam(&self) -> Result<Switch, Error<E::Error>> {
        let webcam = &self.config().webcam;
        Ok(self.read_flag(webcam.address, webcam.bit).await?.into())
    }

    /// Enable or disable the integrated webcam.
    pub async fn set_webcam(&self, state: Switch) -> Result<(), Error<E::Error>> {
        let webcam = &self.config().webcam;
        self.write_flag(webcam.address, webcam.bit, state.is_on()).await
    }

    /// Whether the webcam hardware block is engaged.
    ///
    /// The block register uses the same bit as the enable register, with
    /// inverted polarity: a cleared bit means the camera is blocked.
    pub async fn webcam_block(&self) -> Result<Switch, Error<E::Error>> {
        let webcam = &self.config().webcam;
        let enabled = self.read_flag(webcam.block_address, webcam.bit).await?;
        Ok((!enabled).into())
    }

    /// Engage or release the webcam hardware block.
    pub async fn set_webcam_block(&self, state: Switch) -> Result<(), Error<E::Error>> {
        let webcam = &self.config().webcam;
        self.write_flag(webcam.block_address, webcam.bit, !state.is_on()).await
    }

    /// Position the Fn key currently acts in.
    pub async fn fn_key(&self) -> Result<KeySide, Error<E::Error>> {
        let swap = &self.config().fn_win_swap;
        let swapped = self.read_flag(swap.address, swap.bit).await?;
        Ok(if swapped { KeySide::Right } else { KeySide::Left })
    }

    /// Move the Fn key to the given position.
    pub async fn set_fn_key(&self, side: KeySide) -> Result<(), Error<E::Error>> {
        let swap = &self.config().fn_win_swap;
        self.write_flag(swap.address, swap.bit, side == KeySide::Right).await
    }

    /// Position the Win key currently acts in.
    pub async fn win_key(&self) -> Result<KeySide, Error<E::Error>> {
        let swap = &self.config().fn_win_swap;
        let swapped = self.read_flag(swap.address, swap.bit).await?;
        Ok(if swapped { KeySide::Left } else { KeySide::Right })
    }

    /// Move the Win key to the given position.
    pub async fn set_win_key(&self, side: KeySide) -> Result<(), Error<E::Error>> {
        let swap = &self.config().fn_win_swap;
        self.write_flag(swap.address, swap.bit, side == KeySide::Left).await
    }

    /// Whether cooler boost is engaged.
    pub async fn cooler_boost(&self) -> Result<Switch, Error<E::Error>> {
        let boost = &self.config().cooler_boost;
        Ok(self.read_flag(boost.address, boost.bit).await?.into())
    }

    /// Engage or release cooler boost.
    pub async fn set_cooler_boost(&self, state: Switch) -> Result<(), Error<E::Error>> {
        let boost = &self.config().cooler_boost;
        self.write_flag(boost.address, boost.bit, state.is_on()).await
    }

    /// Whether super battery (battery saver) is enabled.
    ///
    /// The feature counts as enabled only when every masked bit is set.
    pub async fn super_battery(&self) -> Result<Switch, Error<E::Error>> {
        let sb = &self.config().super_battery;
        let addr = self.require_register(sb.address)?;
        let mut ec = self.lock().await;
        let on = ec.check_by_mask(addr, sb.mask).await.map_err(Error::Transport)?;
        Ok(on.into())
    }

    /// Enable or disable super battery.
    pub async fn set_super_battery(&self, state: Switch) -> Result<(), Error<E::Error>> {
        let sb = &self.config().super_battery;
        let addr = self.require_register(sb.address)?;
        let mut ec = self.lock().await;
        if state.is_on() {
            ec.set_by_mask(addr, sb.mask).await.map_err(Error::Transport)
        } else {
            ec.unset_by_mask(addr, sb.mask).await.map_err(Error::Transport)
        }
    }
}
