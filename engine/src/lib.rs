pub mod app;
pub mod audio;
pub mod graphics;
pub mod pixels_renderer;
pub mod regression;
pub mod surface;
pub mod ui;

/// A pure `(state, input) -> (state, effects)` transition.
///
/// Implementors keep all game rules here so they can be driven by the windowed host, by tests,
/// or by the regression helpers without a display or a clock.
pub trait GameLogic {
    type State;
    type Input;
    type Effect;

    fn initial_state(&self) -> Self::State;
    fn step(&self, state: &Self::State, input: Self::Input) -> (Self::State, Vec<Self::Effect>);
}

#[derive(Debug)]
pub struct HeadlessRunner<G: GameLogic> {
    game: G,
    state: G::State,
    frame: usize,
    effects: Vec<G::Effect>,
}

impl<G: GameLogic> HeadlessRunner<G> {
    pub fn new(game: G) -> Self {
        let state = game.initial_state();
        Self {
            game,
            state,
            frame: 0,
            effects: Vec::new(),
        }
    }

    pub fn with_state(game: G, state: G::State) -> Self {
        Self {
            game,
            state,
            frame: 0,
            effects: Vec::new(),
        }
    }

    /// Number of inputs applied so far.
    pub fn frame(&self) -> usize {
        self.frame
    }

    pub fn state(&self) -> &G::State {
        &self.state
    }

    /// Effects emitted since the last drain, in emission order.
    pub fn effects(&self) -> &[G::Effect] {
        &self.effects
    }

    pub fn drain_effects(&mut self) -> Vec<G::Effect> {
        std::mem::take(&mut self.effects)
    }

    pub fn step(&mut self, input: G::Input) -> usize {
        let (next, effects) = self.game.step(&self.state, input);
        self.state = next;
        self.effects.extend(effects);
        self.frame += 1;
        self.frame
    }

    pub fn run<I>(&mut self, inputs: I) -> usize
    where
        I: IntoIterator<Item = G::Input>,
    {
        for input in inputs {
            self.step(input);
        }
        self.frame
    }
}
