use std::io::Read;
use std::io::Write;
use std::ops::ControlFlow;

use tracing::debug;
use tracing::info;
use tracing::warn;

use crate::config::Config;
use crate::error::Result;
use crate::events::Event;
use crate::io::read_event;
use crate::render::Renderer;
use crate::world::World;

/// Where the command loop is in its cycle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    /// Draw the board
    Render,

    /// Block on the next byte of input
    AwaitInput,

    /// Act on a command
    Dispatch(Event),

    /// The user asked to quit
    Done,
}

/// The render, read, dispatch loop.
pub struct App {
    world: World,
    renderer: Renderer,
    state: State,
}

impl Default for App {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self::with_world(World::new(config), Renderer::new(config))
    }

    pub fn with_world(world: World, renderer: Renderer) -> Self {
        Self {
            world,
            renderer,
            state: State::Render,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Move the state machine forward by one transition
    pub fn advance<R: Read, W: Write>(&mut self, input: &mut R, output: &mut W) -> Result<()> {
        self.state = match self.state {
            State::Render => {
                self.renderer.present(self.world.board(), output)?;
                State::AwaitInput
            }
            State::AwaitInput => State::Dispatch(read_event(input)),
            State::Dispatch(event) => self.dispatch(event),
            State::Done => State::Done,
        };

        Ok(())
    }

    /// Run one full cycle: render, wait for a command, act on it
    pub fn tick<R: Read, W: Write>(
        &mut self,
        input: &mut R,
        output: &mut W,
    ) -> Result<ControlFlow<()>> {
        loop {
            self.advance(input, output)?;

            match self.state {
                State::Render => return Ok(ControlFlow::Continue(())),
                State::Done => return Ok(ControlFlow::Break(())),
                _ => {}
            }
        }
    }

    /// Run until the user quits. Without a quit command this never returns.
    pub fn run<R: Read, W: Write>(&mut self, input: &mut R, output: &mut W) -> Result<()> {
        info!("starting");

        while self.tick(input, output)?.is_continue() {}

        self.finish(output)
    }

    /// Like [`App::run`], but stop after at most `n` cycles. Returns the number of cycles run.
    pub fn run_for<R: Read, W: Write>(
        &mut self,
        n: usize,
        input: &mut R,
        output: &mut W,
    ) -> Result<usize> {
        for i in 0..n {
            if self.tick(input, output)?.is_break() {
                self.finish(output)?;
                return Ok(i + 1);
            }
        }

        Ok(n)
    }

    fn finish<W: Write>(&self, output: &mut W) -> Result<()> {
        info!(generation = self.world.generation(), "exiting");
        self.renderer.restore(output)?;

        Ok(())
    }

    fn dispatch(&mut self, event: Event) -> State {
        debug!(?event, "dispatch");

        match event {
            Event::Shuffle => self.world.shuffle(),
            Event::Glider => {
                if let Err(e) = self.world.put_glider_centered() {
                    warn!("{e}");
                }
            }
            Event::Step => self.world.step(),
            Event::Quit => return State::Done,
        }

        State::Render
    }
}
