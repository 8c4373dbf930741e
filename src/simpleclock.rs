use smithay_client_toolkit::shell::WaylandSurface;
use wayland_client::protocol::wl_shm::Format::Argb8888;

use super::canvas::{Canvas, ClockTime};
use super::theme::Theme;
use super::widget::Widget;

pub struct Simpleclock {
    pub widget: Widget,
    pub canvas: Canvas,
    theme: Theme,
    /// Set by the timer tick, consumed by the event loop.
    pub redraw_requested: bool,
    /// Buffers may only be attached after the first configure.
    pub configured: bool,
}

impl Simpleclock {
    pub fn new(theme: Theme, widget: Widget, canvas: Canvas) -> Self {
        Self {
            widget,
            canvas,
            theme,
            redraw_requested: false,
            configured: false,
        }
    }

    /// Renders the current wall-clock time and presents the frame.
    pub fn draw(&mut self) {
        self.canvas.draw_clock(ClockTime::now(), self.theme);
        self.present();
    }

    fn present(&mut self) {
        let (width, height) = (self.canvas.width, self.canvas.height);
        let stride = width * 4;

        let (buffer, surface) = self
            .widget
            .pool
            .create_buffer(width, height, stride, Argb8888)
            .expect("create buffer");

        surface.copy_from_slice(self.canvas.get_data());

        let wl_surface = self.widget.window.wl_surface();
        wl_surface.damage_buffer(0, 0, width, height);
        buffer.attach_to(wl_surface).expect("buffer attach");
        wl_surface.commit();
    }
}
