// File: crates/report/src/viewer.rs
// Summary: Windowed viewer that blits the chart render to a window via winit + softbuffer.

use anyhow::{Context, Result};
use fpschart_core::types::{Insets, HEIGHT, WIDTH};
use fpschart_core::{Chart, RenderOptions};
use std::num::NonZeroU32;
use winit::event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

/// Show the chart in a blocking window. Re-renders on resize; exits on
/// close or Escape. Does not return except through process exit.
pub fn show(chart: Chart, title: &str) -> Result<()> {
    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(title)
        .with_inner_size(winit::dpi::LogicalSize::new(1200.0, 750.0))
        .build(&event_loop)
        .context("build window")?;

    let context = unsafe { softbuffer::Context::new(&window) }
        .map_err(|e| anyhow::anyhow!("softbuffer context: {e:?}"))?;
    let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }
        .map_err(|e| anyhow::anyhow!("softbuffer surface: {e:?}"))?;

    let mut size = window.inner_size();

    event_loop.run(move |event, _, cf| {
        *cf = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    *cf = ControlFlow::Exit;
                }
                WindowEvent::KeyboardInput {
                    input:
                        KeyboardInput {
                            state: ElementState::Pressed,
                            virtual_keycode: Some(VirtualKeyCode::Escape),
                            ..
                        },
                    ..
                } => {
                    *cf = ControlFlow::Exit;
                }
                WindowEvent::Resized(new_size) => {
                    size = new_size;
                    window.request_redraw();
                }
                _ => {}
            },
            Event::MainEventsCleared => {
                window.request_redraw();
            }
            Event::RedrawRequested(_) => {
                let w = size.width.max(1);
                let h = size.height.max(1);
                surface
                    .resize(NonZeroU32::new(w).unwrap(), NonZeroU32::new(h).unwrap())
                    .ok();

                let opts = window_options(w as i32, h as i32);
                // Render to RGBA and convert to packed u32 for softbuffer
                let (rgba, _, _, _) = chart.render_to_rgba8(&opts).expect("render rgba");
                let mut frame = surface.buffer_mut().expect("frame");
                let max_px = frame.len().min(rgba.len() / 4);
                for (i, px) in rgba.chunks_exact(4).take(max_px).enumerate() {
                    let r = px[0] as u32;
                    let g = px[1] as u32;
                    let b = px[2] as u32;
                    let a = px[3] as u32;
                    frame[i] = (a << 24) | (r << 16) | (g << 8) | b;
                }
                if let Err(e) = frame.present() {
                    eprintln!("present error: {e:?}");
                }
            }
            _ => {}
        }
    });
}

/// Render options for an on-screen surface: same chart, insets scaled from
/// the print-resolution defaults down to the window size.
fn window_options(width: i32, height: i32) -> RenderOptions {
    let mut opts = RenderOptions::default();
    opts.width = width;
    opts.height = height;
    let sx = (width as f32 / WIDTH as f32).max(0.25);
    let sy = (height as f32 / HEIGHT as f32).max(0.25);
    let d = Insets::default();
    opts.insets = Insets::new(
        (d.left as f32 * sx) as u32,
        (d.right as f32 * sx) as u32,
        (d.top as f32 * sy) as u32,
        (d.bottom as f32 * sy) as u32,
    );
    opts
}
