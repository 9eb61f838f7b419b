use std::process::ExitCode;
use vortex_autoclick::ClickerResult;
use vortex_autoclick::args::{Args, ParsedArgs};
use vortex_autoclick::automation::{
    FeatureConfig, ScanConfig, ScanContext, ScanController, arrange_windows,
};
use vortex_autoclick::desktop::{EnigoPointer, NativeWindowManager, ThreadSleeper, XcapDesktop};
use vortex_autoclick::logging;

fn main() -> ExitCode {
    let args = match Args::parse() {
        ParsedArgs::Run(args) => args,
        ParsedArgs::Exit => return ExitCode::SUCCESS,
        ParsedArgs::Invalid => return ExitCode::FAILURE,
    };

    if let Err(e) = logging::init(args.verbose) {
        eprintln!("❌ {e}");
        return ExitCode::FAILURE;
    }

    match run(&args) {
        Ok(never) => match never {},
        Err(e) => {
            if e.is_startup_error() {
                log::error!("Startup failed: {e}");
            } else {
                log::error!("Scan loop stopped: {e}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> ClickerResult<std::convert::Infallible> {
    log::info!("Initializing system");
    log::info!(
        "Arguments: chrome={}, vortex={}, verbose={}",
        args.chrome,
        args.vortex,
        args.verbose
    );

    let desktop = XcapDesktop::new()?;
    let context = ScanContext::initialize(&desktop, ScanConfig::default(), FeatureConfig::default())?;

    let mut sleeper = ThreadSleeper;
    if args.chrome {
        arrange_windows(
            &mut NativeWindowManager,
            &mut sleeper,
            context.topology(),
            context.config().window_settle_delay,
        )?;
    }

    let pointer = EnigoPointer::new()?;
    let mut controller = ScanController::new(context, desktop, pointer, sleeper, args.vortex);
    controller.run()
}
