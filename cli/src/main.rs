//! CLI entrypoint for Agent Debate
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::Result;
use clap::Parser;
use debate_application::{
    DebateEvent, DebateOutcome, DiagramRenderer, EventSink, FixedTopic, NoEventSink,
    RunDebateError, RunDebateInput, RunDebateUseCase, TopicSource,
};
use debate_infrastructure::{ConfigLoader, DotDiagramRenderer, JsonlEventSink, StdinTopicSource};
use debate_presentation::{Cli, ConsoleFormatter, OutputFormat};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Starting Agent Debate");

    // Load configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())?
    };
    let setup = config.into_setup()?;
    let rounds = cli.rounds.unwrap_or(setup.rounds);

    // === Dependency Injection ===
    let sink: Box<dyn EventSink> = if cli.no_log {
        Box::new(NoEventSink)
    } else {
        match JsonlEventSink::new(&cli.log_file) {
            Some(s) => Box::new(s),
            None => {
                warn!("Event log disabled: could not open {}", cli.log_file.display());
                Box::new(NoEventSink)
            }
        }
    };

    // The diagram is peripheral; a rendering failure never stops the debate.
    if !cli.no_diagram {
        match DotDiagramRenderer::new(&setup.output_dir).render() {
            Ok(path) => sink.record(DebateEvent::DiagramRendered { path }),
            Err(e) => warn!("Could not render topology diagram: {}", e),
        }
    }

    if !cli.quiet {
        println!();
        println!("+============================================================+");
        println!("|                 Agent Debate - CLI Simulation              |");
        println!("+============================================================+");
        println!();
        println!(
            "Debate: {} vs {} ({} rounds)",
            setup.first.label(),
            setup.second.label(),
            rounds
        );
        println!();
    }

    let input = RunDebateInput::new(setup.first, setup.second).with_rounds(rounds);

    let outcome = match cli.topic {
        Some(topic) => run(FixedTopic::new(topic), setup.judge, input, sink.as_ref())?,
        None => run(StdinTopicSource, setup.judge, input, sink.as_ref())?,
    };

    // Output results
    let output = match cli.output {
        OutputFormat::Full => ConsoleFormatter::format(&outcome),
        OutputFormat::Verdict => ConsoleFormatter::format_verdict_only(&outcome),
        OutputFormat::Json => ConsoleFormatter::format_json(&outcome),
    };

    println!("{}", output);

    Ok(())
}

fn run<T: TopicSource>(
    topic_source: T,
    judge: debate_domain::Judge,
    input: RunDebateInput,
    sink: &dyn EventSink,
) -> Result<DebateOutcome, RunDebateError> {
    RunDebateUseCase::new(topic_source, judge).execute_with_sink(input, sink)
}
