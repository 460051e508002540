// Copyright 2025 the Verdant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Native Vello demo for Verdant.
//!
//! Runs a session timer and feeds its progress into a [`PlantEngine`], so the
//! plant grows from a sprout to full size as the session elapses. Keys:
//! Space starts (or restarts) the session, `0` resets the plant, Left/Right
//! switch the session length, Escape quits.

use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::Instant;

use kurbo::{Affine, Cap, Join, Stroke};
use peniko::color::palette::css;
use peniko::{Fill, Mix};
use vello::util::{RenderContext, RenderSurface};
use vello::{AaConfig, AaSupport, RenderParams, Renderer, RendererOptions, Scene};
use verdant_lsystem::Grammar;
use verdant_render::{Frame, PlantEngine, PlantStyle, Size};
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{Key, NamedKey};
use winit::window::{Window, WindowId};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SessionKind {
    Focus,
    ShortBreak,
    LongBreak,
}

impl SessionKind {
    // Focus is kept short so a full growth cycle is quick to watch.
    fn duration_secs(self) -> f64 {
        match self {
            Self::Focus => 0.1 * 60.0,
            Self::ShortBreak => 5.0 * 60.0,
            Self::LongBreak => 15.0 * 60.0,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Focus => "Focus",
            Self::ShortBreak => "Short break",
            Self::LongBreak => "Long break",
        }
    }

    fn next(self) -> Self {
        match self {
            Self::Focus => Self::ShortBreak,
            Self::ShortBreak => Self::LongBreak,
            Self::LongBreak => Self::Focus,
        }
    }

    fn prev(self) -> Self {
        match self {
            Self::Focus => Self::LongBreak,
            Self::ShortBreak => Self::Focus,
            Self::LongBreak => Self::ShortBreak,
        }
    }
}

fn format_remaining(secs: f64) -> String {
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "clamped to >= 0 and session durations are far below u64 range"
    )]
    let secs = secs.max(0.0).round() as u64;
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// Replays a display-list frame into a Vello scene.
///
/// The frame carries absolute coordinates, so every op paints under the
/// identity transform; the circular clip becomes a layer.
fn paint_frame(scene: &mut Scene, frame: &Frame) {
    scene.push_layer(Mix::Clip, 1.0, Affine::IDENTITY, &frame.clip);
    for op in &frame.ops {
        if let Some(brush) = &op.fill {
            scene.fill(Fill::NonZero, Affine::IDENTITY, brush, None, &op.path);
        }
        if let Some((brush, width)) = &op.stroke {
            let stroke = Stroke::new(*width)
                .with_caps(Cap::Round)
                .with_join(Join::Round);
            scene.stroke(&stroke, Affine::IDENTITY, brush, None, &op.path);
        }
    }
    scene.pop_layer();
}

struct App {
    window: Option<Arc<Window>>,
    window_id: Option<WindowId>,
    render_cx: RenderContext,
    surface: Option<RenderSurface<'static>>,
    renderer: Option<Renderer>,
    scene: Scene,
    engine: PlantEngine,
    session: SessionKind,
    started: Option<Instant>,
}

impl App {
    fn new() -> Self {
        let engine = PlantEngine::new(Grammar::plant(), PlantStyle::default())
            .expect("default plant grammar");
        Self {
            window: None,
            window_id: None,
            render_cx: RenderContext::new(),
            surface: None,
            renderer: None,
            scene: Scene::new(),
            engine,
            session: SessionKind::Focus,
            started: None,
        }
    }

    /// Fraction of the running session that has elapsed, clamped to `0..=1`.
    fn session_progress(&self) -> Option<f64> {
        let started = self.started?;
        let total = self.session.duration_secs();
        Some((started.elapsed().as_secs_f64() / total).clamp(0.0, 1.0))
    }

    fn start_session(&mut self) {
        self.started = Some(Instant::now());
    }

    /// Stops the timer and shows the resting state: progress 0 is the reset
    /// sentinel, so the plant stands fully grown.
    fn reset_plant(&mut self) {
        self.started = None;
        self.engine.set_growth_progress(0.0);
    }

    fn switch_session(&mut self, session: SessionKind) {
        self.session = session;
        self.reset_plant();
    }

    fn update_growth(&mut self) {
        if let Some(progress) = self.session_progress() {
            self.engine.set_growth_progress(progress);
            if progress >= 1.0 {
                self.started = None;
            }
        }
    }

    fn rebuild_scene(&mut self) {
        self.scene.reset();
        if let Some(frame) = self.engine.render_frame() {
            paint_frame(&mut self.scene, &frame);
        }
    }

    fn update_window_title(&self) {
        let Some(w) = &self.window else {
            return;
        };
        let label = self.session.label();
        match self.started {
            Some(started) => {
                let remaining = self.session.duration_secs() - started.elapsed().as_secs_f64();
                w.set_title(&format!(
                    "verdant_vello_demo — {label} — {} — growth {:.2}",
                    format_remaining(remaining),
                    self.engine.growth()
                ));
            }
            None => {
                w.set_title(&format!(
                    "verdant_vello_demo — {label} — Space to start, 0 to reset"
                ));
            }
        }
    }

    fn request_redraw(&self) {
        if let Some(w) = &self.window {
            w.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let window = Arc::new(
            event_loop
                .create_window(
                    Window::default_attributes()
                        .with_title("verdant_vello_demo")
                        .with_inner_size(PhysicalSize::new(900_u32, 900_u32)),
                )
                .expect("create window"),
        );
        let size = window.inner_size();
        let width = size.width.max(1);
        let height = size.height.max(1);

        let surface = pollster::block_on(self.render_cx.create_surface(
            window.clone(),
            width,
            height,
            wgpu::PresentMode::AutoVsync,
        ))
        .expect("create surface");

        let device_handle = &self.render_cx.devices[surface.dev_id];
        let renderer = Renderer::new(
            &device_handle.device,
            RendererOptions {
                antialiasing_support: AaSupport::all(),
                num_init_threads: NonZeroUsize::new(1),
                ..RendererOptions::default()
            },
        )
        .expect("create vello renderer");

        self.window_id = Some(window.id());
        self.window = Some(window);
        self.surface = Some(surface);
        self.renderer = Some(renderer);

        self.engine.handle_resize(Size {
            width: f64::from(width),
            height: f64::from(height),
        });
        self.update_window_title();
        self.request_redraw();
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        // While a session is running, drive a continuous redraw loop.
        if self.started.is_some() {
            self.request_redraw();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, id: WindowId, event: WindowEvent) {
        if Some(id) != self.window_id {
            return;
        }

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(PhysicalSize { width, height }) => {
                if width == 0 || height == 0 {
                    return;
                }
                if let Some(surface) = self.surface.as_mut() {
                    self.render_cx.resize_surface(surface, width, height);
                }
                self.engine.handle_resize(Size {
                    width: f64::from(width),
                    height: f64::from(height),
                });
                self.request_redraw();
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key,
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => {
                match logical_key {
                    Key::Named(NamedKey::Escape) => event_loop.exit(),
                    Key::Named(NamedKey::Space) => self.start_session(),
                    Key::Named(NamedKey::ArrowRight) => self.switch_session(self.session.next()),
                    Key::Named(NamedKey::ArrowLeft) => self.switch_session(self.session.prev()),
                    Key::Character(c) if c == "0" => self.reset_plant(),
                    _ => return,
                }
                self.update_window_title();
                self.request_redraw();
            }
            WindowEvent::RedrawRequested => {
                self.update_growth();
                self.rebuild_scene();
                self.update_window_title();

                let Some(surface) = self.surface.as_mut() else {
                    return;
                };
                let Some(renderer) = self.renderer.as_mut() else {
                    return;
                };
                let device_handle = &self.render_cx.devices[surface.dev_id];

                let surface_texture = match surface.surface.get_current_texture() {
                    Ok(tex) => tex,
                    Err(_) => {
                        self.render_cx.resize_surface(
                            surface,
                            surface.config.width,
                            surface.config.height,
                        );
                        return;
                    }
                };
                let surface_view = surface_texture
                    .texture
                    .create_view(&wgpu::TextureViewDescriptor::default());

                renderer
                    .render_to_texture(
                        &device_handle.device,
                        &device_handle.queue,
                        &self.scene,
                        &surface.target_view,
                        &RenderParams {
                            base_color: css::WHITE,
                            width: surface.config.width,
                            height: surface.config.height,
                            antialiasing_method: AaConfig::Msaa16,
                        },
                    )
                    .expect("render");

                let mut encoder =
                    device_handle
                        .device
                        .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                            label: Some("blit"),
                        });
                surface.blitter.copy(
                    &device_handle.device,
                    &mut encoder,
                    &surface.target_view,
                    &surface_view,
                );
                device_handle.queue.submit([encoder.finish()]);
                surface_texture.present();

                if self.started.is_some() {
                    self.request_redraw();
                }
            }
            _ => {}
        }
    }
}

fn main() {
    let event_loop = EventLoop::new().expect("event loop");
    let mut app = App::new();
    event_loop.run_app(&mut app).expect("run");
}
