//! Drawing of a single frame onto a 2D surface.

use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

use crate::model::GameState;
use crate::state::AssetSet;
use crate::util::{fps_label, score_label};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextStyle {
    pub fill: &'static str,
    pub font: &'static str,
    pub align: &'static str,
    pub baseline: &'static str,
}

pub const SCORE_STYLE: TextStyle = TextStyle {
    fill: "rgba(250, 250, 250, 1)",
    font: "16px sans-serif",
    align: "left",
    baseline: "top",
};
pub const SCORE_POS: (f64, f64) = (32.0, 34.0);

pub const FPS_STYLE: TextStyle = TextStyle {
    fill: "rgba(250, 255, 255, 1)",
    font: "12px sans-serif",
    align: "left",
    baseline: "top",
};
pub const FPS_POS: (f64, f64) = (440.0, 38.0);

pub trait Surface {
    type Image;

    fn draw_image(&self, image: &Self::Image, x: f64, y: f64);
    fn draw_text(&self, text: &str, style: &TextStyle, x: f64, y: f64);
}

impl Surface for CanvasRenderingContext2d {
    type Image = HtmlImageElement;

    fn draw_image(&self, image: &HtmlImageElement, x: f64, y: f64) {
        if let Err(e) = self.draw_image_with_html_image_element(image, x, y) {
            log::warn!("draw_image failed: {:?}", e);
        }
    }

    fn draw_text(&self, text: &str, style: &TextStyle, x: f64, y: f64) {
        self.set_fill_style_str(style.fill);
        self.set_font(style.font);
        self.set_text_align(style.align);
        self.set_text_baseline(style.baseline);
        self.fill_text(text, x, y).ok();
    }
}

/// Background, hero, monster (each only once loaded), then the score and fps overlays.
pub fn render_frame<S: Surface>(surface: &S, game: &GameState, assets: &AssetSet<S::Image>, fps: f64) {
    if let Some(img) = assets.background.ready() {
        surface.draw_image(img, 0.0, 0.0);
    }
    if let Some(img) = assets.hero.ready() {
        surface.draw_image(img, game.hero.x, game.hero.y);
    }
    if let Some(img) = assets.monster.ready() {
        surface.draw_image(img, game.monster.x, game.monster.y);
    }
    surface.draw_text(&score_label(game.monsters_caught), &SCORE_STYLE, SCORE_POS.0, SCORE_POS.1);
    surface.draw_text(&fps_label(fps), &FPS_STYLE, FPS_POS.0, FPS_POS.1);
}
