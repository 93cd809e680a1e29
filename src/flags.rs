//! Process-wide shell state.
//!
//! These are owned by whoever sets up the device (storage, radio, boot
//! code). The line reader and tokenizer never look at them.

use core::cell::RefCell;
use core::sync::atomic::{AtomicBool, Ordering};

use embassy_sync::blocking_mutex::{raw::RawMutex, Mutex};
use heapless::String;

/// Subsystem readiness flags
///
/// `const`-constructible so it can live in a `static`.
#[derive(Debug)]
pub struct SystemFlags {
    sd_initialized: AtomicBool,
    storage_mounted: AtomicBool,
    retrocat_inited: AtomicBool,
    has_wifi: AtomicBool,
}

impl SystemFlags {
    pub const fn new() -> Self {
        Self {
            sd_initialized: AtomicBool::new(false),
            storage_mounted: AtomicBool::new(false),
            retrocat_inited: AtomicBool::new(false),
            has_wifi: AtomicBool::new(false),
        }
    }

    pub fn sd_initialized(&self) -> bool {
        self.sd_initialized.load(Ordering::Relaxed)
    }

    pub fn set_sd_initialized(&self, value: bool) {
        self.sd_initialized.store(value, Ordering::Relaxed);
    }

    pub fn storage_mounted(&self) -> bool {
        self.storage_mounted.load(Ordering::Relaxed)
    }

    pub fn set_storage_mounted(&self, value: bool) {
        self.storage_mounted.store(value, Ordering::Relaxed);
    }

    pub fn retrocat_inited(&self) -> bool {
        self.retrocat_inited.load(Ordering::Relaxed)
    }

    pub fn set_retrocat_inited(&self, value: bool) {
        self.retrocat_inited.store(value, Ordering::Relaxed);
    }

    pub fn has_wifi(&self) -> bool {
        self.has_wifi.load(Ordering::Relaxed)
    }

    pub fn set_has_wifi(&self, value: bool) {
        self.has_wifi.store(value, Ordering::Relaxed);
    }
}

impl Default for SystemFlags {
    fn default() -> Self {
        Self::new()
    }
}

/// Device identity shown by the shell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceInfo<const N: usize> {
    pub device_type: String<N>,
    pub kernel_version: String<N>,
    pub hostname: String<N>,
}

impl<const N: usize> DeviceInfo<N> {
    pub const fn new() -> Self {
        Self {
            device_type: String::new(),
            kernel_version: String::new(),
            hostname: String::new(),
        }
    }
}

impl<const N: usize> Default for DeviceInfo<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// [`DeviceInfo`] behind a blocking mutex, for use from a `static`
pub struct SharedDeviceInfo<M: RawMutex, const N: usize> {
    inner: Mutex<M, RefCell<DeviceInfo<N>>>,
}

impl<M: RawMutex, const N: usize> SharedDeviceInfo<M, N> {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(DeviceInfo::new())),
        }
    }

    /// Copy of the current identity
    pub fn snapshot(&self) -> DeviceInfo<N> {
        self.inner.lock(|info| info.borrow().clone())
    }

    pub fn hostname(&self) -> String<N> {
        self.inner.lock(|info| info.borrow().hostname.clone())
    }

    /// Fails with `()` if `hostname` is longer than `N` bytes
    pub fn set_hostname(&self, hostname: &str) -> Result<(), ()> {
        Self::replace(&self.inner, hostname, |info| &mut info.hostname)
    }

    pub fn set_device_type(&self, device_type: &str) -> Result<(), ()> {
        Self::replace(&self.inner, device_type, |info| &mut info.device_type)
    }

    pub fn set_kernel_version(&self, version: &str) -> Result<(), ()> {
        Self::replace(&self.inner, version, |info| &mut info.kernel_version)
    }

    fn replace(
        inner: &Mutex<M, RefCell<DeviceInfo<N>>>,
        value: &str,
        field: impl FnOnce(&mut DeviceInfo<N>) -> &mut String<N>,
    ) -> Result<(), ()> {
        let value = String::try_from(value)?;
        inner.lock(|info| *field(&mut info.borrow_mut()) = value);
        Ok(())
    }
}

impl<M: RawMutex, const N: usize> Default for SharedDeviceInfo<M, N> {
    fn default() -> Self {
        Self::new()
    }
}
