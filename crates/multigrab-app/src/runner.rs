//! Interactive terminal session driven by the hand simulator

use std::io::{self, Write};
use std::time::Instant;

use crossterm::{
    cursor,
    event::{self, Event as CrosstermEvent, KeyCode, KeyModifiers},
    execute, queue,
    style::{Print, ResetColor, SetForegroundColor},
    terminal::{self, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use multigrab_core::{Hand, HandSimulator, Pose};

use crate::config::AppConfig;
use crate::handlers::handle_event;
use crate::state::DemoState;

const HELP: &str = "WASD/QE left hand  IJKL/UO right hand  Z/X N/M twist  1/2 grab  \
                    R double-rotation  C light  T teleport  Esc quit";

/// Runs the keyboard-driven session until quit
pub struct InteractiveRunner {
    state: DemoState,
    simulator: HandSimulator,
    config: AppConfig,
    running: bool,
}

impl InteractiveRunner {
    pub fn new(state: DemoState, config: AppConfig) -> Self {
        Self {
            state,
            simulator: HandSimulator::new(),
            config,
            running: true,
        }
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, cursor::Hide)?;

        let result = self.event_loop();

        execute!(io::stdout(), cursor::Show, LeaveAlternateScreen)?;
        terminal::disable_raw_mode()?;
        result
    }

    fn event_loop(&mut self) -> io::Result<()> {
        let tick_rate = self.config.tick_rate();
        let mut last_tick = Instant::now();

        while self.running {
            let timeout = tick_rate
                .checked_sub(last_tick.elapsed())
                .unwrap_or_default();

            if event::poll(timeout)? {
                if let CrosstermEvent::Key(key) = event::read()? {
                    if key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        self.running = false;
                        continue;
                    }

                    for event in self.simulator.process_key(key) {
                        if !handle_event(event, &mut self.state, self.simulator.poses()) {
                            self.running = false;
                            break;
                        }
                    }
                }
            }

            if last_tick.elapsed() >= tick_rate {
                self.state.update(self.simulator.poses());
                self.draw()?;
                last_tick = Instant::now();
            }
        }

        Ok(())
    }

    fn draw(&self) -> io::Result<()> {
        let mut out = io::stdout();
        let controller = &self.state.controller;
        let lens = self.state.lens.frame();

        queue!(out, cursor::MoveTo(0, 0), terminal::Clear(ClearType::All))?;
        let mut row = 0;
        let mut line = |out: &mut io::Stdout, text: String| -> io::Result<()> {
            queue!(out, cursor::MoveTo(0, row), Print(text))?;
            row += 1;
            Ok(())
        };

        line(
            &mut out,
            format!(
                "tick {}  state {:?}  double rotation {}",
                self.state.tick,
                controller.state(),
                controller.double_rotation_enabled()
            ),
        )?;
        line(&mut out, format!("lens   {}", describe(controller.pose())))?;
        for hand in Hand::BOTH {
            let marker = if self.simulator.is_grabbing(hand) { "*" } else { " " };
            let pose = self.simulator.hand_pose(hand);
            line(&mut out, format!("{marker}{:<6} {}", hand.label(), describe(&pose)))?;
        }
        line(
            &mut out,
            format!(
                "player {:?}  lens roll {:+.2} rad",
                self.state.player_position(),
                lens.rotation_param
            ),
        )?;

        queue!(
            out,
            cursor::MoveTo(0, row),
            SetForegroundColor(self.state.light.color.to_crossterm()),
            Print("■ light"),
            ResetColor
        )?;
        row += 1;
        if let Some(message) = &self.state.status_message {
            queue!(out, cursor::MoveTo(0, row), Print(message))?;
        }
        queue!(out, cursor::MoveTo(0, row + 2), Print(HELP))?;

        out.flush()
    }
}

fn describe(pose: &Pose) -> String {
    let p = pose.position;
    let (angle, axis) = pose.rotation.to_axis_angle();
    format!(
        "pos ({:+.3}, {:+.3}, {:+.3})  rot {:>6.1}° about ({:+.2}, {:+.2}, {:+.2})",
        p.x, p.y, p.z, angle.to_degrees(), axis.x, axis.y, axis.z
    )
}
