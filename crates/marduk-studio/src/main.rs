use anyhow::{Context as _, Result};

use marduk_engine::core::{App, AppControl, FrameCtx};
use marduk_engine::device::GpuInit;
use marduk_engine::logging::{init_logging, LoggingConfig};
use marduk_engine::render::MeshRenderer;
use marduk_engine::text::{AtlasConfig, FontAtlas};
use marduk_engine::window::{Runtime, RuntimeConfig};
use marduk_imgui::prelude::*;

const BACKGROUND: Color = Color::from_premul(0.05, 0.06, 0.08, 1.0);

const RUN: WidgetId = WidgetId::from_const(1);
const RESET: WidgetId = WidgetId::from_const(2);
const QUIT: WidgetId = WidgetId::from_const(3);
const VERBOSE: WidgetId = WidgetId::from_const(4);
const THROTTLE: WidgetId = WidgetId::from_const(5);
const CALLSIGN: WidgetId = WidgetId::from_const(6);
const COMMAND: WidgetId = WidgetId::from_const(7);

struct Studio {
    atlas: FontAtlas,
    renderer: MeshRenderer,
    atlas_uploaded: bool,
    ui: marduk_imgui::Context,
    panel: Panel,
}

/// Caller-owned widget values.
struct Panel {
    verbose: bool,
    throttle: f32,
    callsign: TextInputState<[u8; 64]>,
    command: TextInputState<[u8; 64]>,
    status: String,
}

impl Panel {
    fn new() -> Self {
        let mut callsign = TextInputState::from_buffer([0u8; 64]);
        if let Err(e) = callsign.set_text(b"MARDUK-1") {
            log::warn!("callsign: {e}");
        }
        Self {
            verbose: false,
            throttle: 0.35,
            callsign,
            command: TextInputState::from_buffer([0u8; 64]),
            status: "idle".to_string(),
        }
    }

    /// Declares the control panel. Returns `true` when Quit was clicked.
    fn declare(&mut self, frame: &mut marduk_imgui::Frame<'_>, panel: Rect) -> bool {
        if frame.push_layout(panel, Direction::Stacked, 16.0, 8.0).is_err() {
            return false;
        }

        frame.label(Place::Next(24.0), "MISSION CONTROL");

        let mut quit = false;
        if frame.push_nested(32.0, Direction::Row, 0.0, 8.0).is_ok() {
            if frame.button(RUN, Place::Next(120.0), "Run") {
                self.status = format!("running at {:.0}%", self.throttle * 100.0);
                log::info!("run: throttle {:.2}", self.throttle);
            }
            if frame.button(RESET, Place::Next(120.0), "Reset") {
                self.throttle = 0.35;
                self.command.clear();
                self.status = "idle".to_string();
            }
            quit = frame.button(QUIT, Place::Next(120.0), "Quit");
            if frame.pop_layout().is_err() {
                return quit;
            }
        }

        if frame.checkbox(VERBOSE, Place::Next(24.0), "Verbose log", &mut self.verbose) {
            log::info!("verbose: {}", self.verbose);
        }

        frame.label(Place::Next(20.0), "Throttle");
        if frame.slider(THROTTLE, Place::Next(20.0), 0.0..=1.0, &mut self.throttle) && self.verbose {
            log::debug!("throttle {:.3}", self.throttle);
        }

        frame.label(Place::Next(20.0), "Callsign");
        frame.text_input(CALLSIGN, Place::Next(28.0), &mut self.callsign);

        frame.label(Place::Next(20.0), "Command");
        let response = frame.text_input(COMMAND, Place::Next(28.0), &mut self.command);
        if response.submitted {
            let callsign = self.callsign.as_str().unwrap_or("?");
            let command = self.command.as_str().unwrap_or("");
            log::info!("{callsign}: {command}");
            self.status = format!("sent \"{command}\"");
            self.command.clear();
        }

        let status = format!("Status: {}", self.status);
        frame.label(Place::Next(20.0), &status);

        if let Err(e) = frame.pop_layout() {
            log::warn!("control panel: {e}");
        }
        quit
    }
}

impl Studio {
    fn new(atlas: FontAtlas) -> Self {
        Self {
            atlas,
            renderer: MeshRenderer::new(),
            atlas_uploaded: false,
            ui: marduk_imgui::Context::new(),
            panel: Panel::new(),
        }
    }
}

impl App for Studio {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let viewport = ctx.window.logical_size();
        let panel = Rect::new(24.0, 24.0, (viewport.width - 48.0).min(520.0), viewport.height - 48.0);

        let input = FrameInput::from_engine(ctx.input, ctx.input_frame);
        let mut frame = self.ui.begin(&self.atlas, input);
        let quit = self.panel.declare(&mut frame, panel);
        let mesh = frame.end();

        let (renderer, atlas, uploaded) = (&mut self.renderer, &self.atlas, &mut self.atlas_uploaded);
        let control = ctx.render(BACKGROUND, |rctx, target| {
            if !*uploaded {
                renderer.set_atlas(rctx, atlas);
                *uploaded = true;
            }
            renderer.render(rctx, target, mesh);
        });

        if quit {
            log::info!("quit requested");
            return AppControl::Exit;
        }
        control
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let font = load_font().context("no system font found (looked for DejaVu Sans / Noto Sans)")?;
    let atlas = FontAtlas::new(&font, AtlasConfig::default()).context("baking font atlas")?;
    log::info!("font atlas {}x{}", atlas.width(), atlas.height());

    let config = RuntimeConfig {
        title: "Marduk Studio".to_string(),
        ..RuntimeConfig::default()
    };
    Runtime::run(config, GpuInit::default(), Studio::new(atlas))
}

fn load_font() -> Option<Vec<u8>> {
    [
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/noto/NotoSans-Regular.ttf",
        "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    ]
    .iter()
    .find_map(|p| std::fs::read(p).ok())
}
