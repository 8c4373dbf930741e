use std::num::NonZeroU32;

use smithay_client_toolkit::{
    compositor::CompositorHandler,
    delegate_compositor, delegate_output, delegate_registry, delegate_shm, delegate_xdg_shell,
    delegate_xdg_window,
    output::{OutputHandler, OutputState},
    registry::{ProvidesRegistryState, RegistryState},
    registry_handlers,
    shell::xdg::window::{Window, WindowConfigure, WindowHandler},
    shm::{Shm, ShmHandler},
};
use wayland_client::{
    Connection, QueueHandle,
    protocol::{wl_output, wl_surface},
};

use crate::simpleclock::Simpleclock;

impl CompositorHandler for Simpleclock {
    fn scale_factor_changed(
        &mut self,
        _: &Connection,
        _: &QueueHandle<Self>,
        _: &wl_surface::WlSurface,
        _: i32,
    ) {
    }
    fn transform_changed(
        &mut self,
        _: &Connection,
        _: &QueueHandle<Self>,
        _: &wl_surface::WlSurface,
        _: wl_output::Transform,
    ) {
    }
    fn frame(&mut self, _: &Connection, _: &QueueHandle<Self>, _: &wl_surface::WlSurface, _: u32) {}
    fn surface_enter(
        &mut self,
        _: &Connection,
        _: &QueueHandle<Self>,
        _: &wl_surface::WlSurface,
        _: &wl_output::WlOutput,
    ) {
    }
    fn surface_leave(
        &mut self,
        _: &Connection,
        _: &QueueHandle<Self>,
        _: &wl_surface::WlSurface,
        _: &wl_output::WlOutput,
    ) {
    }
}

impl OutputHandler for Simpleclock {
    fn output_state(&mut self) -> &mut OutputState {
        &mut self.widget.output_state
    }
    fn new_output(&mut self, _: &Connection, _: &QueueHandle<Self>, _: wl_output::WlOutput) {}
    fn update_output(&mut self, _: &Connection, _: &QueueHandle<Self>, _: wl_output::WlOutput) {}
    fn output_destroyed(&mut self, _: &Connection, _: &QueueHandle<Self>, _: wl_output::WlOutput) {}
}

impl WindowHandler for Simpleclock {
    fn request_close(&mut self, _conn: &Connection, _qh: &QueueHandle<Self>, _window: &Window) {
        self.widget.exit = true;
    }

    fn configure(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _window: &Window,
        configure: WindowConfigure,
        _serial: u32,
    ) {
        // The compositor may leave either dimension up to us, in which
        // case we keep the current one.
        let width = configure
            .new_size
            .0
            .map_or(self.canvas.width as u32, NonZeroU32::get);
        let height = configure
            .new_size
            .1
            .map_or(self.canvas.height as u32, NonZeroU32::get);
        log::debug!("configure: {width}x{height}");

        self.canvas.resize(width as i32, height as i32);
        self.configured = true;
        self.draw();
    }
}

impl ShmHandler for Simpleclock {
    fn shm_state(&mut self) -> &mut Shm {
        &mut self.widget.shm
    }
}

delegate_compositor!(Simpleclock);
delegate_output!(Simpleclock);
delegate_shm!(Simpleclock);
delegate_xdg_shell!(Simpleclock);
delegate_xdg_window!(Simpleclock);
delegate_registry!(Simpleclock);

impl ProvidesRegistryState for Simpleclock {
    fn registry(&mut self) -> &mut RegistryState {
        &mut self.widget.registry_state
    }
    registry_handlers![OutputState];
}
