//! Thread safety checks
//!
//! Frames are immutable and can be read from any number of threads. A game
//! shared between threads is wrapped in a mutex so frame additions are
//! serialized.

use bowling_core::{BowlingError, BowlingScorer, Frame, Game};
use std::sync::{Arc, Barrier, Mutex};
use std::thread;

#[test]
fn test_types_are_send_sync() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}

    assert_send::<Frame>();
    assert_sync::<Frame>();
    assert_send::<Game>();
    assert_sync::<Game>();
    assert_sync::<BowlingScorer<'static>>();
}

#[test]
fn test_concurrent_readers_share_frames() {
    let mut frames = vec![vec![10]; 9];
    frames.push(vec![10, 10, 10]);
    let game = Arc::new(Game::from_frames(&frames).unwrap());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let game = Arc::clone(&game);
            thread::spawn(move || BowlingScorer::new(game.frames()).calculate())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 300);
    }
}

#[test]
fn test_mutex_serializes_frame_additions() {
    let num_threads = 12;
    let game = Arc::new(Mutex::new(Game::new()));
    let barrier = Arc::new(Barrier::new(num_threads));

    let handles: Vec<_> = (0..num_threads)
        .map(|_| {
            let game = Arc::clone(&game);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                game.lock().unwrap().add_frame(&[3, 4]).map(|_| ())
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let accepted = results.iter().filter(|r| r.is_ok()).count();
    let rejected: Vec<_> = results.into_iter().filter_map(Result::err).collect();

    assert_eq!(accepted, 10);
    assert_eq!(rejected, vec![BowlingError::GameComplete; 2]);

    let game = game.lock().unwrap();
    assert!(game.is_complete());
    assert_eq!(game.score(), 70);
}
