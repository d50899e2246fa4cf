use globe_core::{
    load_models, wheel_delta_pixels, FrameClock, GlobeConfig, GlobeSession, InstantClock,
    PointerButtons, ProceduralAssets, ScrollUnit,
};
use globe_render::Renderer;
use winit::dpi::PhysicalPosition;
use winit::{
    event::*,
    event_loop::{ControlFlow, EventLoop},
    window::{Window, WindowBuilder},
};

/// Button mask for a winit mouse button, in DOM `buttons` layout.
fn button_mask(button: MouseButton) -> PointerButtons {
    match button {
        MouseButton::Left => PointerButtons::PRIMARY,
        MouseButton::Right => PointerButtons::SECONDARY,
        MouseButton::Middle => PointerButtons::AUXILIARY,
        _ => PointerButtons::NONE,
    }
}

/// Wheel delta in pixels, positive when zooming out. winit reports scrolling
/// away from the user as positive y, the DOM as negative.
fn scroll_pixels(delta: MouseScrollDelta) -> f32 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => wheel_delta_pixels(-y, ScrollUnit::Line),
        MouseScrollDelta::PixelDelta(pos) => -(pos.y as f32),
    }
}

#[derive(Default)]
struct PointerTracker {
    buttons: PointerButtons,
    last: Option<PhysicalPosition<f64>>,
}

impl PointerTracker {
    /// Returns the movement since the last known cursor position.
    fn moved_to(&mut self, pos: PhysicalPosition<f64>) -> Option<(f32, f32)> {
        let prev = self.last.replace(pos)?;
        Some(((pos.x - prev.x) as f32, (pos.y - prev.y) as f32))
    }
}

struct NativeApp<'w, C: FrameClock> {
    window: &'w Window,
    renderer: Renderer<'w>,
    session: GlobeSession,
    clock: C,
    pointer: PointerTracker,
}

impl<'w, C: FrameClock> NativeApp<'w, C> {
    fn handle_window_event(&mut self, event: WindowEvent) -> bool {
        match event {
            WindowEvent::CloseRequested => return false,
            WindowEvent::Resized(size) => {
                self.renderer.resize_if_needed(size.width, size.height);
                self.session.resize(size.width, size.height);
            }
            WindowEvent::MouseWheel { delta, .. } => self.session.on_scroll(scroll_pixels(delta)),
            WindowEvent::MouseInput { state, button, .. } => {
                self.pointer.buttons = self
                    .pointer
                    .buttons
                    .with(button_mask(button), state == ElementState::Pressed);
            }
            WindowEvent::CursorMoved { position, .. } => {
                if let Some((dx, dy)) = self.pointer.moved_to(position) {
                    self.session.on_drag(dx, dy, self.pointer.buttons);
                }
            }
            WindowEvent::CursorLeft { .. } => self.pointer.last = None,
            _ => {}
        }
        true
    }

    fn redraw(&mut self) -> bool {
        let output = self.session.frame(&mut self.clock);
        match self.renderer.render(&output) {
            Ok(()) => self.window.request_redraw(),
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.renderer.reconfigure()
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("surface out of memory");
                return false;
            }
            Err(e) => log::warn!("surface error: {:?}", e),
        }
        true
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let models = pollster::block_on(load_models(&ProceduralAssets::default()))?;

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);
    let window = WindowBuilder::new()
        .with_title("Globe Flight (native)")
        .build(&event_loop)?;
    let size = window.inner_size();

    let instance = wgpu::Instance::default();
    let surface = instance.create_surface(&window)?;
    let mut renderer =
        pollster::block_on(Renderer::new(&instance, surface, size.width, size.height))?;
    renderer.upload_models(&models);

    let mut session = GlobeSession::new(GlobeConfig::default());
    session.resize(size.width, size.height);

    let mut app = NativeApp {
        window: &window,
        renderer,
        session,
        clock: InstantClock::new(),
        pointer: PointerTracker::default(),
    };

    event_loop.run(move |event, elwt| {
        let keep_running = match event {
            Event::WindowEvent { event, .. } => app.handle_window_event(event),
            Event::AboutToWait => app.redraw(),
            _ => true,
        };
        if !keep_running {
            elwt.exit();
        }
    })?;
    Ok(())
}
