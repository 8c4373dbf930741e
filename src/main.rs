mod canvas;
mod geometry;
mod registry;
mod simpleclock;
mod theme;
mod widget;

use std::time::Duration;

use anyhow::Context;
use smithay_client_toolkit::{
    compositor::CompositorState,
    reexports::{
        calloop::{
            EventLoop,
            timer::{TimeoutAction, Timer},
        },
        calloop_wayland_source::WaylandSource,
    },
    shell::{
        WaylandSurface,
        xdg::{XdgShell, window::WindowDecorations},
    },
    shm::{Shm, slot::SlotPool},
};
use wayland_client::{Connection, globals::registry_queue_init};

use canvas::Canvas;
use simpleclock::Simpleclock;
use theme::Theme;
use widget::Widget;

const SIDE: i32 = 256;
const TICK: Duration = Duration::from_millis(500);

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let conn = Connection::connect_to_env().context("connect to wayland display")?;
    let (globals, event_queue) = registry_queue_init(&conn)?;
    let qh = event_queue.handle();

    let shm = Shm::bind(&globals, &qh).context("wl_shm not available")?;
    let compositor = CompositorState::bind(&globals, &qh).context("wl_compositor not available")?;
    let xdg_shell = XdgShell::bind(&globals, &qh).context("xdg shell not available")?;

    let surface = compositor.create_surface(&qh);
    let window = xdg_shell.create_window(surface, WindowDecorations::RequestServer, &qh);
    window.set_title("Simpleclock");
    window.set_app_id("simpleclock");
    window.commit();

    let pool = SlotPool::new((SIDE * SIDE * 4) as usize, &shm)?;

    let mut app = Simpleclock::new(
        Theme::default(),
        Widget::new(&globals, &qh, shm, pool, window),
        Canvas::new(SIDE, SIDE),
    );

    let mut event_loop: EventLoop<Simpleclock> =
        EventLoop::try_new().context("initialize event loop")?;
    let loop_handle = event_loop.handle();

    WaylandSource::new(conn, event_queue).insert(loop_handle.clone())?;

    let timer = Timer::from_duration(TICK);
    loop_handle
        .insert_source(timer, |_deadline, _timer_handle, app: &mut Simpleclock| {
            app.redraw_requested = true;
            TimeoutAction::ToDuration(TICK)
        })
        .expect("Failed to insert timer");

    loop {
        event_loop.dispatch(None, &mut app)?;

        if app.redraw_requested {
            app.redraw_requested = false;
            if app.configured {
                app.draw();
            }
        }

        if app.widget.exit {
            log::info!("Exiting simpleclock");
            break;
        }
    }

    Ok(())
}
