use std::io::{self, Write};
use std::sync::mpsc;
use std::time::Instant;

use blockbot::app::{BuilderView, CanvasTheme, Controller, FrameClock, InputCollector, Viewport};
use blockbot::config::BuilderConfig;
use blockbot::kernel::{Model, RunLog};
use blockbot::logging;
use blockbot::tui::crossterm::into_input_event;
use blockbot::tui::terminal_guard::TerminalGuard;
use blockbot::ui::backend::terminal::RatatuiTerminal;
use blockbot::ui::backend::Backend;
use blockbot::ui::core::painter::Painter;

fn main() -> io::Result<()> {
    let _logging = logging::init();

    let config = BuilderConfig::default();
    let theme = CanvasTheme::default();
    let mut model = Model::new(&config);
    let mut controller = Controller::new();
    let mut collector = InputCollector::new();
    let mut runs = RunLog::new();

    let guard = TerminalGuard::new()?;
    let (signal_tx, signal_rx) = mpsc::channel();
    #[cfg(unix)]
    let _signals =
        blockbot::tui::terminal_guard::install_termination_signals(guard.restorer(), signal_tx)?;
    #[cfg(not(unix))]
    drop(signal_tx);

    let mut terminal = RatatuiTerminal::new(io::stdout())?;
    let mut viewport = Viewport::new(config.canvas_width, config.canvas_height, terminal.area()?);
    let mut clock = FrameClock::new(config.frame_interval(), Instant::now());
    let mut painter = Painter::new();

    tracing::info!(
        cols = viewport.area().w,
        rows = viewport.area().h,
        fps = config.frame_rate,
        "builder started"
    );

    loop {
        while let Some(timeout) = clock.remaining(Instant::now()) {
            if !crossterm::event::poll(timeout)? {
                break;
            }
            let event = into_input_event(crossterm::event::read()?);
            collector.feed(&event, &viewport);
        }
        clock.advance(Instant::now());

        if collector.quit_requested() {
            tracing::info!("quit requested");
            break;
        }
        if let Ok(signal) = signal_rx.try_recv() {
            tracing::info!(?signal, "terminated by signal");
            break;
        }

        let frame = collector.take_frame();
        controller.update(&mut model, &frame, &mut runs);

        terminal.draw(|backend, area| {
            viewport = Viewport::new(config.canvas_width, config.canvas_height, area);
            painter.clear();
            BuilderView {
                model: &model,
                controller: &controller,
                config: &config,
                theme: &theme,
                last_run: runs.last(),
            }
            .paint(&mut painter, &viewport);
            backend.draw(area, painter.cmds());
        })?;
    }

    drop(terminal);
    guard.restorer().restore()?;
    drop(guard);

    let mut stdout = io::stdout().lock();
    runs.write_to(&mut stdout)?;
    stdout.flush()
}
