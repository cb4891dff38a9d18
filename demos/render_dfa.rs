//! Render a small DFA and print the SVG to stdout.
//!
//! Run with `RUST_LOG=debug cargo run --example render_dfa --features tracing`
//! to see layout and skipped-transition events on stderr.

use autodata::{DiagramSpec, RenderDiagnostic, StateSpec, TransitionSpec};

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    // Accepts binary strings with an even number of ones.
    let mut spec = DiagramSpec::new()
        .state("even", StateSpec::unplaced().initial().accepting())
        .state("odd", StateSpec::unplaced())
        .transition(TransitionSpec::new("even", "odd").with_label("1"))
        .transition(TransitionSpec::new("odd", "even").with_label("1"))
        .transition(TransitionSpec::self_loop("even").with_label("0"))
        .transition(TransitionSpec::self_loop("odd").with_label("0"));

    let mut events: Vec<RenderDiagnostic> = Vec::new();
    let svg = autodata::render_with(&mut spec, &mut events)?;
    for event in &events {
        eprintln!("note: {event:?}");
    }
    println!("{svg}");
    Ok(())
}
