//! Background-mode ordering: intents from one sender are applied in
//! submission order, never inside a tick, and shutdown applies
//! everything queued before it.

use std::sync::{Arc, Barrier};
use std::time::Duration;

use lifegrid_core::{Cell, Intent, Outcome};
use lifegrid_engine::{RealtimeWorld, SessionConfig, SubmitError};
use lifegrid_test_utils::blinker_horizontal;

fn fast_config(queue: usize) -> SessionConfig {
    SessionConfig {
        speeds: vec![Duration::from_millis(2)],
        initial_speed: 0,
        intent_queue_capacity: queue,
        ..SessionConfig::default()
    }
}

#[test]
fn intents_interleave_with_ticks_in_order() {
    let mut world = RealtimeWorld::new(fast_config(1024)).unwrap();
    world
        .submit(Intent::Load(blinker_horizontal(Cell::new(1000, 1000)).into_iter().collect()))
        .unwrap();
    world.submit(Intent::SetRunning(true)).unwrap();
    for x in 0..100 {
        world.submit(Intent::AddCell(Cell::new(x * 10, 0))).unwrap();
        std::thread::sleep(Duration::from_micros(200));
    }
    world.submit(Intent::SetRunning(false)).unwrap();
    world.shutdown();

    let mut added = Vec::new();
    let mut last_generation = 0;
    let mut stopped = false;
    for outcome in world.events().try_iter() {
        match outcome {
            Outcome::CellsAdded(cells) => added.extend(cells),
            Outcome::Stepped(r) => {
                assert!(!stopped, "tick after pause");
                assert_eq!(r.generation.0, last_generation + 1);
                last_generation = r.generation.0;
            }
            Outcome::RunningChanged(false) => stopped = true,
            _ => {}
        }
    }
    let xs: Vec<i64> = added.iter().map(|c| c.x).collect();
    let expected: Vec<i64> = (0..100).map(|x| x * 10).collect();
    assert_eq!(xs, expected);
    assert!(last_generation >= 1, "background thread never ticked");
}

#[test]
fn full_queue_reports_back_pressure() {
    let world = RealtimeWorld::new(fast_config(1)).unwrap();
    let sender = world.sender();
    let mut saw_full = false;
    for x in 0..10_000 {
        match sender.submit(Intent::AddCell(Cell::new(x, x))) {
            Ok(()) => {}
            Err(SubmitError::QueueFull) => {
                saw_full = true;
                break;
            }
            Err(e) => panic!("unexpected {e}"),
        }
    }
    assert!(saw_full);
}

#[test]
fn shutdown_hands_back_session_with_all_intents_applied() {
    let mut world = RealtimeWorld::new(SessionConfig::default()).unwrap();
    let senders: Vec<_> = (0..4).map(|_| world.sender()).collect();
    let handles: Vec<_> = senders
        .into_iter()
        .enumerate()
        .map(|(t, s)| {
            std::thread::spawn(move || {
                for i in 0..50 {
                    s.submit(Intent::AddCell(Cell::new(t as i64, i))).unwrap();
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    let report = world.shutdown();
    assert!(report.tick_joined);
    let session = world.take_session().unwrap();
    assert_eq!(session.grid().population(), 200);
    assert_eq!(world.submit(Intent::Clear), Err(SubmitError::Shutdown));
}

#[test]
fn accepted_intents_survive_racing_shutdown() {
    for round in 0..20 {
        let mut world = RealtimeWorld::new(fast_config(64)).unwrap();
        let start = Arc::new(Barrier::new(5));
        let handles: Vec<_> = (0..4i64)
            .map(|t| {
                let sender = world.sender();
                let start = Arc::clone(&start);
                std::thread::spawn(move || {
                    start.wait();
                    let mut accepted = 0usize;
                    for i in 0.. {
                        match sender.submit(Intent::AddCell(Cell::new(t, i))) {
                            Ok(()) => accepted += 1,
                            Err(SubmitError::QueueFull) => std::thread::yield_now(),
                            Err(SubmitError::Shutdown) => break,
                        }
                    }
                    accepted
                })
            })
            .collect();

        start.wait();
        std::thread::sleep(Duration::from_micros(50 * round));
        let report = world.shutdown();
        assert!(report.tick_joined);

        let accepted: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();
        let session = world.take_session().unwrap();
        assert_eq!(
            session.grid().population(),
            accepted,
            "round {round}: accepted intent lost at shutdown"
        );
    }
}
