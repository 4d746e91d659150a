use glam::Vec2;
use tarmac_kernel::{Session, Tile};

/// View dimensions in world units, centered on the camera.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 800.0,
        }
    }
}

impl Viewport {
    /// World-space top-left corner for a camera centered in the view.
    pub fn top_left(&self, camera: Vec2) -> Vec2 {
        camera - Vec2::new(self.width, self.height) * 0.5
    }
}

/// Inclusive tile-index range covering a viewport. Indices may run past the
/// grid on any side; out-of-range tiles classify as Wall, which is exactly
/// what a backend should draw at the world edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileRect {
    pub min_x: i64,
    pub min_y: i64,
    pub max_x: i64,
    pub max_y: i64,
}

impl TileRect {
    pub fn contains(&self, tx: i64, ty: i64) -> bool {
        tx >= self.min_x && tx <= self.max_x && ty >= self.min_y && ty <= self.max_y
    }
}

/// The tile range a centered camera can see: floor on the near edge, ceil
/// on the far edge, so partially visible tiles are included.
pub fn visible_tiles(camera: Vec2, viewport: &Viewport, tile_size: f32) -> TileRect {
    let tl = viewport.top_left(camera);
    TileRect {
        min_x: (tl.x / tile_size).floor() as i64,
        min_y: (tl.y / tile_size).floor() as i64,
        max_x: ((tl.x + viewport.width) / tile_size).ceil() as i64,
        max_y: ((tl.y + viewport.height) / tile_size).ceil() as i64,
    }
}

/// Renderer-agnostic interface. Backends read session state and a viewport
/// and produce output; they never mutate the session.
pub trait Renderer {
    type Output;

    fn render(&self, session: &Session, viewport: &Viewport) -> Self::Output;
}

/// Debug text renderer — workaround for a graphical backend. One character
/// per visible tile, entities overlaid, HUD line on top. Useful for CLI
/// output, logging, and testing the render interface.
#[derive(Debug, Default)]
pub struct DebugTextRenderer;

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self
    }

    fn tile_char(tile: Tile) -> char {
        match tile {
            Tile::Open => '.',
            Tile::Road => '=',
            Tile::Wall => '#',
        }
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, session: &Session, viewport: &Viewport) -> String {
        let world = session.world();
        let tile_size = world.tile_size();
        let rect = visible_tiles(session.camera().pos, viewport, tile_size);

        let to_tile = |p: Vec2| {
            (
                (p.x / tile_size).floor() as i64,
                (p.y / tile_size).floor() as i64,
            )
        };
        let player_tile = to_tile(session.player().body.pos);
        let agent_tiles: Vec<(i64, i64)> = session
            .agents()
            .iter()
            .map(|a| to_tile(a.body.pos))
            .collect();

        let mut out = String::new();
        out.push_str(&format!(
            "{}{}\n",
            crate::hud::HudSummary::from_session(session),
            if session.is_paused() { "  [paused]" } else { "" },
        ));

        for ty in rect.min_y..=rect.max_y {
            for tx in rect.min_x..=rect.max_x {
                let c = if (tx, ty) == player_tile {
                    '@'
                } else if agent_tiles.contains(&(tx, ty)) {
                    'n'
                } else {
                    Self::tile_char(world.tile_at(tx, ty))
                };
                out.push(c);
            }
            out.push('\n');
        }

        out
    }
}
