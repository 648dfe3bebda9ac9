//! Simulation context: the agent, its pending input and the screen frame.

use crate::agent::Agent;
use crate::config::SimConfig;
use crate::frame::CoordinateFrame;
use crate::input::{Command, CommandQueue};
use tracing::{debug, trace};

pub struct Simulation {
    agent: Agent,
    initial: Agent,
    commands: CommandQueue,
    frame: CoordinateFrame,
    impulse: f32,
    ticks: u64,
}

impl Simulation {
    pub fn new(agent: Agent, frame: CoordinateFrame, impulse: f32) -> Simulation {
        Simulation {
            initial: agent.clone(),
            agent,
            commands: CommandQueue::new(),
            frame,
            impulse,
            ticks: 0,
        }
    }

    /// Builds a simulation centred on a window of the configured size.
    pub fn from_config(config: &SimConfig) -> Simulation {
        let frame = CoordinateFrame::centered(config.window_width, config.window_height);
        Simulation::new(config.build_agent(), frame, config.impulse)
    }

    pub fn agent(&self) -> &Agent {
        &self.agent
    }

    pub fn frame(&self) -> &CoordinateFrame {
        &self.frame
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Queues a command for the next tick.
    pub fn submit(&mut self, command: Command) {
        self.commands.push(command);
    }

    pub fn pending(&self) -> usize {
        self.commands.len()
    }

    /// Applies every queued command, then advances the agent one frame.
    pub fn tick(&mut self) {
        for command in self.commands.drain() {
            match command {
                Command::Thrust(direction) => {
                    debug!(?direction, "thrust");
                    self.agent.apply_impulse(direction.delta(self.impulse));
                }
                Command::Reset => {
                    debug!("agent reset");
                    self.agent = self.initial.clone();
                }
            }
        }
        self.agent.update();
        self.ticks += 1;
        trace!(tick = self.ticks, "simulation tick");
    }
}
