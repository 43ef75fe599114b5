//! tty-arcade runner (default binary).
//!
//! One frame: sample input, dispatch the active mode into the framebuffer, pace to the frame
//! budget, draw the debug overlay and flush the changed cells.

use anyhow::Result;
use clap::Parser;
use log::{error, info};

use tty_arcade::cli::Args;
use tty_arcade::core::{FramePacer, SystemClock};
use tty_arcade::engine::Host;
use tty_arcade::input::{CrosstermSource, InputSampler};
use tty_arcade::logging;
use tty_arcade::term::{FrameBuffer, TerminalRenderer};

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.log_file.as_deref())?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &args);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, args: &Args) -> Result<()> {
    let vp = TerminalRenderer::viewport()?;
    let seed = args.seed();
    info!(
        "starting: {}x{} at {} fps, seed {}",
        vp.width, vp.height, args.fps, seed
    );

    let mut host = match Host::new(vp, seed, args.debug) {
        Ok(host) => host,
        Err(e) => {
            error!("tail buffer allocation failed: {e}");
            return Ok(());
        }
    };

    let mut fb = FrameBuffer::new(vp.width, vp.height);
    let mut sampler = InputSampler::new();
    let mut source = CrosstermSource;
    let mut pacer = FramePacer::with_fps(SystemClock::new(), args.fps);

    loop {
        sampler.sample(&mut source)?;
        if sampler.resized_to().is_some() {
            term.invalidate();
        }

        if let Err(e) = host.run_sampled(&sampler, &mut fb) {
            error!("tail buffer reallocation failed: {e}");
            return Ok(());
        }

        let stats = pacer.finish_frame();
        host.finish_frame(&stats);
        host.render_overlay(&stats, &mut fb);
        term.draw_swap(&mut fb)?;

        sampler.clear();
        if !host.is_running() {
            info!("exiting after {}s", stats.elapsed_secs);
            return Ok(());
        }
    }
}
