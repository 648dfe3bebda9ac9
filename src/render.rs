use anyhow::{Result, anyhow};
use sdl2::gfx::primitives::DrawRenderer;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, RenderTarget};
use sdl2::ttf::Font;
use sdl2::video::Window;
use steer::agent::Agent;
use steer::frame::{CoordinateFrame, grid_lines};
use steer::library::Vector2;

pub const BACKGROUND: Color = Color::RGB(0xbb, 0xbb, 0xbb);
const GRID: Color = Color::RGB(0xaa, 0xaa, 0xaa);
const ORIGIN: Color = Color::WHITE;
const OUTLINE: Color = Color::BLACK;
const VELOCITY_RAY: Color = Color::RGB(0xff, 0x00, 0x00);
const HUD_TEXT: Color = Color::RGB(0x20, 0x20, 0x20);
const ORIGIN_RADIUS: i16 = 4;
const HUD_MARGIN: i32 = 10;

fn to_abgr(color: Color) -> Color {
    Color::RGBA(color.a, color.b, color.g, color.r)
}

fn to_pixel(p: Vector2) -> (i16, i16) {
    (p[0].round() as i16, p[1].round() as i16)
}

fn segment<T: RenderTarget>(canvas: &mut Canvas<T>, a: Vector2, b: Vector2, color: Color) {
    let (x1, y1) = to_pixel(a);
    let (x2, y2) = to_pixel(b);
    let _ = canvas.line(x1, y1, x2, y2, to_abgr(color));
}

pub fn draw_background<T: RenderTarget>(canvas: &mut Canvas<T>) {
    canvas.set_draw_color(BACKGROUND);
    canvas.clear();
}

/// Grid aligned to the simulation origin, plus a marker at the origin itself.
pub fn draw_grid<T: RenderTarget>(canvas: &mut Canvas<T>, frame: &CoordinateFrame, grid_size: f32) {
    let (width, height) = canvas.output_size().unwrap_or((0, 0));
    for [a, b] in grid_lines(frame, width, height, grid_size) {
        segment(canvas, a, b, GRID);
    }
    let (x, y) = to_pixel(frame.to_screen([0.0, 0.0]));
    let _ = canvas.filled_circle(x, y, ORIGIN_RADIUS, to_abgr(ORIGIN));
}

/// Triangle outline and the velocity ray leaving the apex.
pub fn draw_agent<T: RenderTarget>(canvas: &mut Canvas<T>, frame: &CoordinateFrame, agent: &Agent) {
    let [a, b, c] = agent.vertices().map(|v| frame.to_screen(v));
    segment(canvas, a, b, OUTLINE);
    segment(canvas, b, c, OUTLINE);
    segment(canvas, c, a, OUTLINE);

    let [start, end] = agent.velocity_ray().map(|v| frame.to_screen(v));
    segment(canvas, start, end, VELOCITY_RAY);
}

/// Position, velocity and acceleration readouts in the top-left corner.
pub fn draw_hud(canvas: &mut Canvas<Window>, font: &Font, agent: &Agent) -> Result<()> {
    let [px, py] = agent.apex();
    let [vx, vy] = agent.velocity();
    let [ax, ay] = agent.acceleration();
    let lines = [
        format!("position: ({px:.2}, {py:.2})"),
        format!("velocity: ({vx:.3}, {vy:.3})"),
        format!("acceleration: ({ax:.4}, {ay:.4})"),
    ];

    let texture_creator = canvas.texture_creator();
    let mut y = HUD_MARGIN;
    for line in lines {
        let surface = font.render(&line).blended(HUD_TEXT)?;
        let texture = texture_creator.create_texture_from_surface(&surface)?;
        let query = texture.query();
        let target = Rect::new(HUD_MARGIN, y, query.width, query.height);
        canvas.copy(&texture, None, Some(target)).map_err(|e| anyhow!("failed to draw HUD: {e}"))?;
        y += query.height as i32;
    }
    Ok(())
}
