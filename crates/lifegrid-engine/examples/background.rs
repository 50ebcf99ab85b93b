//! Lifegrid RealtimeWorld: background ticking with a UI thread feeding
//! intents and draining outcomes.
//!
//! Demonstrates:
//!   1. Starting a RealtimeWorld (tick thread "lifegrid-tick")
//!   2. Submitting intents from a separate thread via IntentSender
//!   3. Consuming the ordered outcome stream
//!   4. Cooperative shutdown and recovering the Session
//!
//! Run with:
//!   cargo run --example background

use std::thread;
use std::time::Duration;

use lifegrid_core::{Cell, Intent, Outcome};
use lifegrid_engine::{RealtimeWorld, SessionConfig};

fn main() {
    let mut world = RealtimeWorld::new(SessionConfig::default()).expect("valid config");

    // "UI" thread: draw an R-pentomino, start, speed up twice.
    let ui = world.sender();
    let input = thread::spawn(move || {
        for (x, y) in [(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)] {
            ui.submit(Intent::AddCell(Cell::new(x, y))).expect("queue has room");
        }
        ui.submit(Intent::SetRunning(true)).expect("queue has room");
        thread::sleep(Duration::from_millis(600));
        ui.submit(Intent::SetSpeed(4)).expect("queue has room");
        thread::sleep(Duration::from_millis(300));
        ui.submit(Intent::SetSpeed(5)).expect("queue has room");
    });

    let mut ticks = 0;
    while ticks < 30 {
        match world.events().recv_timeout(Duration::from_secs(2)) {
            Ok(Outcome::Stepped(r)) => {
                ticks += 1;
                println!(
                    "gen {:>3}  live {:>3}  +{} -{}",
                    r.generation,
                    r.live.len(),
                    r.born.len(),
                    r.died.len()
                );
            }
            Ok(Outcome::SpeedChanged { index, interval }) => {
                println!("speed {index}: {interval:?} per tick");
            }
            Ok(other) => println!("{other:?}"),
            Err(e) => {
                eprintln!("no outcome: {e}");
                break;
            }
        }
    }
    input.join().expect("input thread");

    let report = world.shutdown();
    println!(
        "shutdown in {}ms, drained {} intents, joined={}",
        report.total_ms, report.drained, report.tick_joined
    );
    if let Some(session) = world.take_session() {
        println!(
            "final generation {} with {} live cells, {} undo entries",
            session.grid().generation(),
            session.grid().population(),
            session.history().len()
        );
    }
}
