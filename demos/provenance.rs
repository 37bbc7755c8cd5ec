//! Frame traces with a shared, restylable layout.
//!
//! Run with: RUST_LOG=seqview=debug cargo run --example provenance

use seqview::{Frame, FormatTokens, StyleHandle, TracePrinter, ViewRange};
use tracing_subscriber::EnvFilter;

fn load(frames: &mut Vec<Frame>, printer: &TracePrinter) -> seqview::Result<u16> {
    frames.insert(0, Frame::caller("load"));
    printer.guard(frames, || "65536".parse::<u16>())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let style = StyleHandle::provenance();
    let printer = TracePrinter::with_style(style.clone());
    let mut frames = vec![Frame::caller("main")];

    match load(&mut frames, &printer) {
        Ok(port) => println!("port = {port}"),
        Err(err) => println!("error: {err}\n"),
    }

    // Every printer sharing the record picks up the new layout
    style.set(FormatTokens::new().with_prefix("trace: ").with_join(" <- ").with_suffix(""));
    println!("{}", printer.render_all(&frames)?);
    println!("{}", printer.render(&frames, &ViewRange::first())?);

    Ok(())
}
