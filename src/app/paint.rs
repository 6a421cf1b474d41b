use super::controller::Controller;
use super::theme::CanvasTheme;
use super::viewport::Viewport;
use crate::config::BuilderConfig;
use crate::kernel::sink::format_step;
use crate::kernel::{Model, Point, Step};
use crate::ui::core::geom::Pos;
use crate::ui::core::painter::Painter;
use crate::ui::core::style::{Mod, Style};

/// Everything one frame draws.
pub struct BuilderView<'a> {
    pub model: &'a Model,
    pub controller: &'a Controller,
    pub config: &'a BuilderConfig,
    pub theme: &'a CanvasTheme,
    pub last_run: Option<&'a [Step]>,
}

impl BuilderView<'_> {
    /// Full repaint; nothing from the previous frame is reused.
    pub fn paint(&self, painter: &mut Painter, viewport: &Viewport) {
        let theme = self.theme;
        let area = viewport.area();
        let label = Style::default().fg(theme.label_fg);

        painter.fill_rect(area, Style::solid(theme.background));

        self.paint_last_run(painter, viewport);

        for button in self.model.buttons() {
            let rect = viewport.to_cells(button.rect);
            painter.fill_rect(rect, Style::solid(theme.button_bg));
            painter.label(rect, button.name.as_str(), label.add_mod(Mod::BOLD));
        }

        for block in self.model.instructions() {
            let rect = viewport.to_cells(block.rect);
            painter.fill_rect(rect, Style::solid(theme.block_bg));
            let style = if self.controller.focused() == Some(block.id) {
                label.add_mod(Mod::UNDERLINE)
            } else {
                label
            };
            painter.label(rect, block.name.as_str(), style);
        }

        if let Some(block) = self.controller.focused().and_then(|id| self.model.block(id)) {
            if let Some(pos) = viewport.to_cell(self.config.readout) {
                let text = format!("{}{}", self.config.duration_prompt, block.duration.value());
                painter.text(pos, text, Style::default().fg(theme.readout_fg));
            }
        }

        painter.fill_rect(viewport.to_cells(self.model.dock()), Style::solid(theme.dock_bg));
        painter.fill_rect(viewport.to_cells(self.model.trash()), Style::solid(theme.trash_bg));

        if let Some(top) = viewport.to_cell(Point::new(self.config.divider_x, 0)) {
            painter.vline(top, area.h, '│', Style::default().fg(theme.divider_fg));
        }

        let run = viewport.to_cells(self.model.run_button());
        painter.fill_rect(run, Style::solid(theme.run_bg));
        painter.label(run, "Run", label.add_mod(Mod::BOLD));
    }

    fn paint_last_run(&self, painter: &mut Painter, viewport: &Viewport) {
        let Some(program) = self.last_run else {
            return;
        };
        let Some(origin) = viewport.to_cell(self.config.run_output) else {
            return;
        };
        let style = Style::default().fg(self.theme.output_fg);
        painter.text(origin, "last run:", style.add_mod(Mod::DIM));
        for (i, step) in program.iter().enumerate() {
            let y = origin.y.saturating_add(i as u16 + 1);
            if y >= viewport.area().bottom() {
                break;
            }
            let line = format!("{}. {:<8} {}", i + 1, step.name, format_step(step));
            painter.text(Pos::new(origin.x, y), line, style);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/paint.rs"]
mod tests;
