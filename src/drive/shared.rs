//! Interrupt-safe access to a drive.
//!
//! The step clock and the command edges are usually serviced by different
//! interrupts. Every entry point here runs its whole handler inside one
//! critical section, so state and step index are never observed half-updated
//! and only one handler mutates them at a time.

use core::cell::RefCell;

use critical_section::Mutex;

use crate::config::units::StepIndex;
use crate::error::{DriveError, Error, Result};
use crate::motion::{Event, MotorState};
use crate::waveform::Waveform;

use super::driver::StepperDrive;
use super::output::OutputDriver;

/// A drive shared between interrupt handlers.
///
/// Intended to live in a `static`:
///
/// ```rust,ignore
/// static DRIVE: SharedDrive<Bridge> = SharedDrive::new();
///
/// fn main() {
///     let drive = StepperDriveBuilder::new().output(bridge).build()?;
///     DRIVE.install(drive);
///     DRIVE.start()?;
///     // enable interrupts
/// }
///
/// #[interrupt]
/// fn TIM2() {
///     let _ = DRIVE.on_timer_interrupt();
/// }
///
/// #[interrupt]
/// fn EXTI1() {
///     let _ = DRIVE.on_advance_edge();
/// }
/// ```
pub struct SharedDrive<O: OutputDriver> {
    inner: Mutex<RefCell<Option<StepperDrive<O>>>>,
}

impl<O: OutputDriver> SharedDrive<O> {
    /// Create an empty slot.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(None)),
        }
    }

    /// Install a drive, returning the one it replaces.
    pub fn install(&self, drive: StepperDrive<O>) -> Option<StepperDrive<O>> {
        critical_section::with(|cs| self.inner.borrow_ref_mut(cs).replace(drive))
    }

    /// Remove the installed drive.
    pub fn take(&self) -> Option<StepperDrive<O>> {
        critical_section::with(|cs| self.inner.borrow_ref_mut(cs).take())
    }

    /// Whether a drive is installed.
    pub fn is_installed(&self) -> bool {
        critical_section::with(|cs| self.inner.borrow_ref(cs).is_some())
    }

    /// Run `f` on the installed drive inside a critical section.
    ///
    /// # Errors
    ///
    /// Returns `DriveError::NotInstalled` if no drive is installed.
    pub fn with<R>(&self, f: impl FnOnce(&mut StepperDrive<O>) -> R) -> Result<R> {
        critical_section::with(|cs| {
            let mut slot = self.inner.borrow_ref_mut(cs);
            slot.as_mut()
                .map(f)
                .ok_or(Error::Drive(DriveError::NotInstalled))
        })
    }

    /// Apply the startup holding output.
    pub fn start(&self) -> Result<Waveform> {
        self.with(|drive| drive.start())?
    }

    /// Periodic timer interrupt handler.
    pub fn on_timer_interrupt(&self) -> Result<Option<Waveform>> {
        self.with(|drive| drive.on_timer_tick())?
    }

    /// ADVANCE line falling-edge handler.
    pub fn on_advance_edge(&self) -> Result<Option<Waveform>> {
        self.dispatch(Event::Advance)
    }

    /// RETREAT line falling-edge handler.
    pub fn on_retreat_edge(&self) -> Result<Option<Waveform>> {
        self.dispatch(Event::Retreat)
    }

    /// Explicit stop request.
    pub fn on_stop(&self) -> Result<Option<Waveform>> {
        self.dispatch(Event::Stop)
    }

    /// Feed any event to the installed drive.
    pub fn dispatch(&self, event: Event) -> Result<Option<Waveform>> {
        self.with(|drive| drive.dispatch(event))?
    }

    /// Snapshot of the state and step index.
    pub fn snapshot(&self) -> Result<(MotorState, StepIndex)> {
        self.with(|drive| (drive.state(), drive.step_index()))
    }
}

impl<O: OutputDriver> Default for SharedDrive<O> {
    fn default() -> Self {
        Self::new()
    }
}
