use std::sync::Arc;
use std::time::Duration;

use color_eyre::eyre::Result;
use tokio::{
    sync::Mutex,
    time::{sleep_until, Instant},
};

use crate::{
    core::{raw_msg::RawMsg, state::AppState},
    domain::deck::Deck,
    infrastructure::{
        config::Config,
        tui::{self, RealTui, TuiLike},
    },
    integration::runtime::Runtime,
    presentation::components::Components,
};

enum Wake {
    Event(Option<tui::Event>),
    Deadline,
}

/// Drives the Elm loop: waits for either the next terminal event or the
/// next reveal deadline, feeds it through the runtime and redraws.
pub struct AppRunner {
    runtime: Runtime,
    tui: Arc<Mutex<dyn TuiLike + Send>>,
    components: Components,
    started: Instant,
}

impl AppRunner {
    pub fn new(deck: Deck, config: Config, tui: Arc<Mutex<dyn TuiLike + Send>>) -> Self {
        Self {
            runtime: Runtime::new(AppState::new_with_config(deck, config)),
            tui,
            components: Components::new(),
            started: Instant::now(),
        }
    }

    pub fn new_with_real(deck: Deck, config: Config, tick_rate: f64, frame_rate: f64) -> Result<Self> {
        let tui = RealTui::new()?.tick_rate(tick_rate).frame_rate(frame_rate);
        Ok(Self::new(deck, config, Arc::new(Mutex::new(tui))))
    }

    pub fn state(&self) -> &AppState {
        self.runtime.state()
    }

    pub fn tui(&self) -> &Arc<Mutex<dyn TuiLike + Send>> {
        &self.tui
    }

    /// Time since the runner was created; the model's only clock
    fn now(&self) -> Duration {
        self.started.elapsed()
    }

    pub async fn run(&mut self) -> Result<()> {
        let tui = Arc::clone(&self.tui);
        let mut tui = tui.lock().await;
        tui.enter()?;

        let area = tui.area()?;
        self.runtime
            .send_raw_msg(RawMsg::Resize(area.width, area.height));
        self.runtime.start(self.now());
        self.runtime.run_update_cycle(self.now(), &mut *tui)?;
        let mut needs_render = true;

        loop {
            if needs_render {
                self.render(&mut *tui)?;
                needs_render = false;
            }
            if self.runtime.state().system.should_quit {
                break;
            }

            let deadline = self
                .runtime
                .state()
                .presentation
                .next_deadline()
                .map(|offset| self.started + offset);
            let wake = tokio::select! {
                event = tui.next() => Wake::Event(event),
                () = wait_until(deadline) => Wake::Deadline,
            };

            match wake {
                Wake::Event(Some(event)) => {
                    if matches!(event, tui::Event::Render) {
                        needs_render = true;
                    }
                    if let Some(raw) = raw_from_event(event) {
                        self.runtime.send_raw_msg(raw);
                    }
                }
                Wake::Event(None) => {
                    log::info!("terminal event source closed");
                    break;
                }
                Wake::Deadline => self.runtime.send_raw_msg(RawMsg::TimerDue),
            }

            needs_render |= self.runtime.run_update_cycle(self.now(), &mut *tui)?;
        }

        self.runtime.shutdown();
        tui.exit()?;
        Ok(())
    }

    fn render(&mut self, tui: &mut (dyn TuiLike + Send)) -> Result<()> {
        let state = self.runtime.state();
        let components = &mut self.components;
        tui.draw(&mut |f: &mut tui::Frame<'_>| components.render(f, state))
    }
}

async fn wait_until(deadline: Option<Instant>) {
    match deadline {
        Some(at) => sleep_until(at).await,
        None => std::future::pending().await,
    }
}

fn raw_from_event(event: tui::Event) -> Option<RawMsg> {
    match event {
        tui::Event::Quit | tui::Event::Closed => Some(RawMsg::Quit),
        tui::Event::Tick => Some(RawMsg::Tick),
        tui::Event::Render => Some(RawMsg::Render),
        tui::Event::Resize(w, h) => Some(RawMsg::Resize(w, h)),
        tui::Event::Key(key) => Some(RawMsg::Key(key)),
        tui::Event::Mouse(mouse) => Some(RawMsg::Mouse(mouse)),
        tui::Event::Error(e) => Some(RawMsg::Error(e)),
        tui::Event::Init
        | tui::Event::FocusGained
        | tui::Event::FocusLost
        | tui::Event::Paste(_) => None,
    }
}
