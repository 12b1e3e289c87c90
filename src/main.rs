use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use mvu::app::{Message, Model, Program, TopLevel};
use mvu::config::Config;
use mvu::logging::init_tracing;
use mvu::update::{add_effect, Update};
use mvu::{Dispatcher, Executor, Runtime};

/// Counts up to a target, persisting each value and announcing milestones.
#[derive(Debug, Parser)]
#[command(name = "mvu-demo", version)]
struct Cli {
    /// Path to a config file (default: platform config dir).
    #[arg(long)]
    config: Option<PathBuf>,

    /// How many ticks to run before quitting.
    #[arg(long, default_value_t = 10)]
    ticks: u32,

    /// Announce a milestone every N ticks.
    #[arg(long, default_value_t = 5)]
    every: u32,

    /// Delay between ticks in milliseconds.
    #[arg(long, default_value_t = 50)]
    delay_ms: u64,
}

#[derive(Debug, Clone, PartialEq)]
struct Counter {
    value: u32,
    target: u32,
    every: u32,
    milestones: Vec<u32>,
}

impl Model for Counter {}

#[derive(Debug, Clone, PartialEq)]
enum Msg {
    Tick,
}

impl Message for Msg {}

#[derive(Debug, Clone, PartialEq)]
enum Effect {
    Persist(u32),
    Announce(u32),
    Schedule(Msg),
    Quit,
}

/// Signal the counting step reports to the program.
#[derive(Debug, Clone, PartialEq)]
enum Reached {
    Milestone(u32),
}

struct CounterProgram;

impl CounterProgram {
    fn count(model: Counter) -> Update<Counter, Effect, Reached> {
        let value = model.value + 1;
        let next = Update::save(Counter { value, ..model }).and_add_effect(Effect::Persist(value));
        if value % next.value.every == 0 {
            next.and_add_signal(Reached::Milestone(value))
        } else {
            next
        }
    }

    fn on_reached(mut model: Counter, signal: Reached) -> TopLevel<Counter, Effect> {
        match signal {
            Reached::Milestone(n) => {
                model.milestones.push(n);
                Update::save(model).and_then(add_effect(Effect::Announce(n)))
            }
        }
    }
}

impl Program for CounterProgram {
    type Model = Counter;
    type Message = Msg;
    type Effect = Effect;
    type Flags = (u32, u32);

    fn init((target, every): (u32, u32)) -> TopLevel<Counter, Effect> {
        let model = Counter {
            value: 0,
            target,
            every: every.max(1),
            milestones: Vec::new(),
        };
        if target == 0 {
            Update::with_effect(model, Effect::Quit)
        } else {
            Update::with_effect(model, Effect::Schedule(Msg::Tick))
        }
    }

    fn update(message: Msg, model: Counter) -> TopLevel<Counter, Effect> {
        match message {
            Msg::Tick => Self::count(model)
                .apply_signals(Self::on_reached)
                .and_then(|model| {
                    let follow_up = if model.value >= model.target {
                        Effect::Quit
                    } else {
                        Effect::Schedule(Msg::Tick)
                    };
                    Update::with_effect(model, follow_up)
                }),
        }
    }
}

struct DemoExecutor {
    delay: Duration,
}

impl Executor<Effect, Msg> for DemoExecutor {
    fn execute(&mut self, effect: Effect, dispatch: &Dispatcher<Msg>) {
        match effect {
            Effect::Persist(value) => tracing::info!(value, "Persisted counter"),
            Effect::Announce(value) => tracing::info!(value, "Milestone reached"),
            Effect::Schedule(message) => {
                let dispatch = dispatch.clone();
                let delay = self.delay;
                tokio::spawn(async move {
                    tokio::time::sleep(delay).await;
                    if let Err(e) = dispatch.send(message) {
                        tracing::warn!(error = %e, "Dropped scheduled message");
                    }
                });
            }
            Effect::Quit => {
                if let Err(e) = dispatch.quit() {
                    tracing::warn!(error = %e, "Quit not delivered");
                }
            }
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    init_tracing(&config.logging);

    let executor = DemoExecutor {
        delay: Duration::from_millis(cli.delay_ms),
    };
    let runtime =
        Runtime::<CounterProgram, _>::new((cli.ticks, cli.every), executor, config.runtime);
    let model = runtime.run().await?;

    println!(
        "counted to {} (milestones: {:?})",
        model.value, model.milestones
    );
    Ok(())
}
