use anyhow::Result;
use winit::dpi::LogicalSize;

use cellgrid_engine::core::{App, AppControl, FrameCtx};
use cellgrid_engine::device::GpuInit;
use cellgrid_engine::grid::GridDims;
use cellgrid_engine::logging::{LoggingConfig, init_logging};
use cellgrid_engine::paint::Color;
use cellgrid_engine::render::{GridRenderer, QuadRenderer};
use cellgrid_engine::window::{Runtime, RuntimeConfig};

const GRID_SIZE: u32 = 32;

/// Teal clear behind red cells.
const CLEAR_COLOR: Color = Color::new(0.0, 0.5, 0.7, 1.0);

/// What to draw over the cleared surface.
enum Scene {
    /// Clear color only.
    Clear,
    /// One solid quad.
    Quad(QuadRenderer),
    /// Instanced grid of quads.
    Grid(GridRenderer),
}

impl Scene {
    fn from_arg(arg: Option<&str>) -> Result<Self> {
        match arg {
            None | Some("grid") => Ok(Scene::Grid(GridRenderer::new(GridDims::square(
                GRID_SIZE,
            )))),
            Some("quad") => Ok(Scene::Quad(QuadRenderer::new())),
            Some("clear") => Ok(Scene::Clear),
            Some(other) => anyhow::bail!("unknown scene '{other}' (expected clear, quad or grid)"),
        }
    }

    fn title(&self) -> String {
        match self {
            Scene::Clear => "cellgrid (clear)".to_string(),
            Scene::Quad(_) => "cellgrid (quad)".to_string(),
            Scene::Grid(r) => format!("cellgrid {}x{}", r.dims().cols, r.dims().rows),
        }
    }
}

struct Viewer {
    scene: Scene,
}

impl App for Viewer {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        match &mut self.scene {
            Scene::Clear => ctx.render(CLEAR_COLOR, |_, _| {}),
            Scene::Quad(r) => ctx.render(CLEAR_COLOR, |rctx, target| r.render(rctx, target)),
            Scene::Grid(r) => ctx.render(CLEAR_COLOR, |rctx, target| r.render(rctx, target)),
        }
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let arg = std::env::args().nth(1);
    let scene = Scene::from_arg(arg.as_deref())?;
    log::info!("starting: {}", scene.title());

    let config = RuntimeConfig {
        title: scene.title(),
        initial_size: LogicalSize::new(512.0, 512.0),
    };

    Runtime::run(config, GpuInit::default(), Viewer { scene })
}
