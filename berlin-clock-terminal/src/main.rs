use berlin_clock_core::{ClockTime, Config};
use berlin_clock_terminal::{EXIT_DISPLAY_FAILED, TimeSource, render_frame, write_frame};
use clap::Parser;
use embassy_executor::Executor;
use embassy_time::Timer;
use log::*;
use static_cell::StaticCell;

/// Show the time on a Berlin Clock
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Start from this time and tick it forward instead of reading the system clock
    #[arg(short, long, value_name = "HH:MM:SS")]
    time: Option<ClockTime>,
    /// Read the system clock as UTC instead of local time
    #[arg(long, conflicts_with = "time")]
    utc: bool,
    /// Draw a single frame and exit
    #[arg(long)]
    once: bool,
    /// Only print the text form. No colors
    #[arg(long)]
    plain: bool,
    /// Lamp brightness (0-255)
    #[arg(short, long, default_value_t = 255)]
    brightness: u8,
}

static EXECUTOR: StaticCell<Executor> = StaticCell::new();

#[embassy_executor::task]
async fn clock_task(mut source: TimeSource, tx: flume::Sender<ClockTime>) {
    loop {
        let now = source.read();

        if tx.send_async(now).await.is_err() {
            info!("display is gone. clock task complete");
            break;
        }

        Timer::after_secs(1).await;
    }
}

/// The executor never returns, so this task ends the process when it stops.
#[embassy_executor::task]
async fn display_task(rx: flume::Receiver<ClockTime>, config: Config, plain: bool) {
    while let Ok(time) = rx.recv_async().await {
        trace!("displaying {time}");

        let frame = render_frame(time, &config, plain);

        if let Err(err) = write_frame(&mut std::io::stdout().lock(), &frame, !plain) {
            error!("display task failed: {err:?}");
            std::process::exit(EXIT_DISPLAY_FAILED);
        }
    }

    info!("clock is gone. display task complete");
    std::process::exit(0);
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();

    debug!("{cli:?}");

    let config = Config {
        brightness: cli.brightness,
        ..Default::default()
    };

    let mut source = match cli.time {
        Some(time) => TimeSource::Fixed(time),
        None if cli.utc => TimeSource::Utc,
        None => TimeSource::Local,
    };

    if cli.once {
        let frame = render_frame(source.read(), &config, cli.plain);

        write_frame(&mut std::io::stdout().lock(), &frame, false)?;

        return Ok(());
    }

    info!("starting {source:?} clock");

    // bounded so a slow terminal makes the clock task wait instead of piling up frames
    let (tx, rx) = flume::bounded(2);

    let executor = EXECUTOR.init(Executor::new());

    executor.run(move |spawner| {
        spawner.must_spawn(clock_task(source, tx));
        spawner.must_spawn(display_task(rx, config, cli.plain));

        debug!("all tasks spawned");
    })
}
