use smithay_client_toolkit::{
    output::OutputState,
    registry::RegistryState,
    shell::xdg::window::Window,
    shm::{Shm, slot::SlotPool},
};
use wayland_client::{QueueHandle, globals::GlobalList};

use super::simpleclock::Simpleclock;

pub struct Widget {
    pub registry_state: RegistryState,
    pub output_state: OutputState,
    pub shm: Shm,
    pub pool: SlotPool,
    pub window: Window,
    pub exit: bool,
}

impl Widget {
    pub fn new(
        globals: &GlobalList,
        qh: &QueueHandle<Simpleclock>,
        shm: Shm,
        pool: SlotPool,
        window: Window,
    ) -> Self {
        Self {
            registry_state: RegistryState::new(globals),
            output_state: OutputState::new(globals, qh),
            shm,
            pool,
            window,
            exit: false,
        }
    }
}
