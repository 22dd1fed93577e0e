//! Direct plugin command surface.
//!
//! Host plugins expose fire-and-forget commands with no return value and
//! no acknowledgement. The only command defined today drives LED hardware
//! from encoded image data.

use tracing::trace;

/// Sink for the `led` plugin's device commands.
///
/// Implemented by the host when LED hardware support is present.
pub trait LedTarget: Send {
    /// Pushes one frame of encoded image data to every connected device.
    /// Fire-and-forget: there is no status and no error path.
    fn set_all_devices_by_image_data(&mut self, encoded_image_data: &str, width: u32, height: u32);
}

/// The script-facing plugin command surface.
///
/// Capabilities the host never wired are absent; calling into an absent
/// capability is silently dropped, best-effort.
#[derive(Default)]
pub struct PluginCommands {
    led: Option<Box<dyn LedTarget>>,
}

impl PluginCommands {
    /// A command surface with no capabilities wired.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wires the `led` capability.
    #[must_use]
    pub fn with_led(target: impl LedTarget + 'static) -> Self {
        Self {
            led: Some(Box::new(target)),
        }
    }

    #[must_use]
    pub fn has_led(&self) -> bool {
        self.led.is_some()
    }

    /// `led.setAllDevicesByImageData` — pushes a frame to all LED devices.
    /// No-op when the host provides no LED target.
    pub fn led_set_all_devices_by_image_data(
        &mut self,
        encoded_image_data: &str,
        width: u32,
        height: u32,
    ) {
        match &mut self.led {
            Some(target) => {
                trace!(width, height, "forwarding LED frame");
                target.set_all_devices_by_image_data(encoded_image_data, width, height);
            }
            None => trace!("LED command dropped, no target wired"),
        }
    }
}
