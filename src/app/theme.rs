//! Canvas colours, kept in one place instead of scattered through the paint code.

use crate::ui::core::style::Color;

#[derive(Debug, Clone)]
pub struct CanvasTheme {
    pub background: Color,
    pub button_bg: Color,
    pub block_bg: Color,
    pub label_fg: Color,
    pub dock_bg: Color,
    pub trash_bg: Color,
    pub run_bg: Color,
    pub divider_fg: Color,
    pub readout_fg: Color,
    pub output_fg: Color,
}

impl Default for CanvasTheme {
    fn default() -> Self {
        Self {
            background: Color::BLACK,
            button_bg: Color::Rgb(120, 120, 120),
            block_bg: Color::Rgb(40, 80, 120),
            label_fg: Color::WHITE,
            dock_bg: Color::Rgb(40, 60, 80),
            trash_bg: Color::Rgb(238, 45, 45),
            run_bg: Color::Rgb(109, 190, 69),
            divider_fg: Color::WHITE,
            readout_fg: Color::WHITE,
            output_fg: Color::Rgb(180, 180, 180),
        }
    }
}
