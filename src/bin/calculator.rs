use clap::Parser;
use opcalc::calculator::Registry;
use opcalc::cli::Options;
use opcalc::repl::{Editor, LineSource, Reader, Session};

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let options = Options::parse();

    env_logger::Builder::new()
        .filter_level(options.log_level())
        .init();

    #[cfg(unix)]
    opcalc::repl::exit_on_interrupt()?;

    let registry = Registry::standard()?;
    let mut session = Session::new(registry).with_prompt(&options.prompt);

    let mut input: Box<dyn LineSource> = if options.plain {
        Box::new(Reader::new(std::io::stdin().lock(), std::io::stdout()))
    } else {
        Box::new(Editor::new()?)
    };

    // Leaving the loop by command, interrupt or end of input is a success
    let exit = session.run(&mut input, &mut std::io::stdout())?;
    log::debug!("exiting after {:?}", exit);

    Ok(())
}
