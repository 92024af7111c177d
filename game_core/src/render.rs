//! Drawing contract between the simulation and whatever hosts it
//!
//! The core never owns pixels. Each tick it issues a handful of primitive
//! draw calls against a [`Surface`]; the browser client maps them onto a
//! canvas 2d context and tests record them with [`RecordingSurface`].

use std::fmt;

use glam::Vec2;

use crate::{Ball, Court, MatchState, Paddle};

/// Opaque RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
    pub const RED: Color = Color::rgb(0xff, 0x00, 0x00);
    pub const GREEN: Color = Color::rgb(0x00, 0xff, 0x00);
    pub const BLUE: Color = Color::rgb(0x00, 0x00, 0xff);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#rrggbb`, as canvas fill styles expect
    pub fn to_css(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Horizontal anchor for text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Start,
    Center,
}

impl TextAlign {
    pub fn as_css(self) -> &'static str {
        match self {
            TextAlign::Start => "start",
            TextAlign::Center => "center",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub size_pt: u16,
    pub family: &'static str,
    pub align: TextAlign,
    pub color: Color,
}

impl TextStyle {
    pub const SCORE: TextStyle = TextStyle {
        size_pt: 22,
        family: "Arial",
        align: TextAlign::Start,
        color: Color::WHITE,
    };

    pub const BANNER: TextStyle = TextStyle {
        align: TextAlign::Center,
        ..TextStyle::SCORE
    };

    pub const TITLE: TextStyle = TextStyle {
        size_pt: 72,
        family: "Arial",
        align: TextAlign::Center,
        color: Color::WHITE,
    };

    /// CSS font shorthand, e.g. `22pt Arial`
    pub fn font(&self) -> String {
        format!("{}pt {}", self.size_pt, self.family)
    }
}

/// A fixed-size drawing target
pub trait Surface {
    fn width(&self) -> f32;
    fn height(&self) -> f32;

    /// Reset the surface before a new frame
    fn clear(&mut self);

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);

    fn fill_text(&mut self, text: &str, x: f32, y: f32, style: &TextStyle);
}

/// Everything visible in one frame, borrowed from the match
pub struct Frame<'a> {
    pub court: &'a Court,
    pub ball: &'a Ball,
    pub near: &'a Paddle,
    pub far: &'a Paddle,
    pub state: &'a MatchState,
}

/// Full redraw: background, ball, paddles, score line and winner banner
pub fn draw_frame(surface: &mut dyn Surface, frame: &Frame<'_>) {
    let court = frame.court;

    surface.clear();
    surface.fill_rect(0.0, 0.0, court.width, court.height, Color::BLACK);

    surface.fill_circle(frame.ball.pos, frame.ball.radius, frame.ball.color);
    draw_paddle(surface, frame.near);
    draw_paddle(surface, frame.far);

    let score = frame.state.score();
    surface.fill_text(
        &score.near.to_string(),
        court.width / 4.0,
        22.0,
        &TextStyle::SCORE,
    );
    surface.fill_text(
        &score.far.to_string(),
        3.0 * court.width / 4.0,
        22.0,
        &TextStyle::SCORE,
    );

    if let Some(winner) = frame.state.winner() {
        surface.fill_text(
            &format!("{} Wins!", winner.display_name()),
            court.width / 2.0,
            court.height / 2.0 - 50.0,
            &TextStyle::BANNER,
        );
    }
}

fn draw_paddle(surface: &mut dyn Surface, paddle: &Paddle) {
    surface.fill_rect(
        paddle.pos.x,
        paddle.pos.y,
        paddle.width,
        paddle.height,
        paddle.color,
    );
}

/// Static title card shown before a match
pub fn draw_title(surface: &mut dyn Surface) {
    let (w, h) = (surface.width(), surface.height());
    surface.clear();
    surface.fill_rect(0.0, 0.0, w, h, Color::BLACK);
    surface.fill_text("Pong", w / 2.0, h / 2.0, &TextStyle::TITLE);
}

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    Rect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: Color,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    Text {
        text: String,
        x: f32,
        y: f32,
        style: TextStyle,
    },
}

/// In-memory surface that keeps the draw calls since the last clear
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    width: f32,
    height: f32,
    commands: Vec<DrawCommand>,
    frames: u64,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
            frames: 0,
        }
    }

    /// Draw calls of the current frame, starting with its `Clear`
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of clears seen, i.e. frames started
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
        self.frames += 1;
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        self.commands.push(DrawCommand::Rect { x, y, w, h, color });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, style: &TextStyle) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            x,
            y,
            style: *style,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_to_css() {
        assert_eq!(Color::GREEN.to_css(), "#00ff00");
        assert_eq!(Color::rgb(0x12, 0xab, 0x0f).to_css(), "#12ab0f");
    }

    #[test]
    fn test_text_style_font() {
        assert_eq!(TextStyle::SCORE.font(), "22pt Arial");
        assert_eq!(TextStyle::TITLE.font(), "72pt Arial");
        assert_eq!(TextStyle::BANNER.align, TextAlign::Center);
        assert_eq!(TextStyle::BANNER.size_pt, 22);
    }

    #[test]
    fn test_draw_title() {
        let mut surface = RecordingSurface::new(800.0, 600.0);
        draw_title(&mut surface);

        assert_eq!(
            surface.commands(),
            &[
                DrawCommand::Clear,
                DrawCommand::Rect {
                    x: 0.0,
                    y: 0.0,
                    w: 800.0,
                    h: 600.0,
                    color: Color::BLACK,
                },
                DrawCommand::Text {
                    text: "Pong".to_string(),
                    x: 400.0,
                    y: 300.0,
                    style: TextStyle::TITLE,
                },
            ]
        );
    }

    #[test]
    fn test_recording_surface_keeps_only_current_frame() {
        let mut surface = RecordingSurface::new(100.0, 100.0);
        surface.clear();
        surface.fill_rect(1.0, 2.0, 3.0, 4.0, Color::RED);
        surface.clear();
        surface.fill_text("7", 0.0, 0.0, &TextStyle::SCORE);

        assert_eq!(surface.frames(), 2);
        assert_eq!(surface.commands().len(), 2);
        assert_eq!(surface.texts().collect::<Vec<_>>(), vec!["7"]);
    }
}
