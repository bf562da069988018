//! Tracing output of game setup.
//!
//! Every way of starting a game should leave a `debug` record of the deal.

use std::io;
use std::sync::{Arc, Mutex};

use memory_match::{Color, GameConfig, MatchGame, Symbol, SymbolId};
use tracing::Level;

/// Writer that collects formatted log lines in memory.
#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Captured {
    fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

fn capture<T>(f: impl FnOnce() -> T) -> (T, String) {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    let result = tracing::subscriber::with_default(subscriber, f);
    (result, captured.text())
}

fn pool_ab() -> Vec<Symbol> {
    vec![
        Symbol::new(SymbolId::new(0), "A", Color::rgb(0, 0, 0)),
        Symbol::new(SymbolId::new(1), "B", Color::rgb(0, 0, 0)),
    ]
}

#[test]
fn test_shuffled_deal_is_logged() {
    let (game, logs) = capture(|| MatchGame::new(GameConfig::new(2, pool_ab()).with_seed(4)));

    assert!(game.is_ok());
    assert!(logs.contains("dealt new game"), "logs: {logs}");
    assert!(logs.contains("seed=4"), "logs: {logs}");
}

#[test]
fn test_layout_deal_is_logged() {
    let a = SymbolId::new(0);
    let b = SymbolId::new(1);
    let (game, logs) = capture(|| {
        MatchGame::with_layout(GameConfig::new(2, pool_ab()).with_seed(9), &[a, b, b, a])
    });

    assert!(game.is_ok());
    assert!(logs.contains("laid out fixed game"), "logs: {logs}");
    assert!(logs.contains("with_layout"), "logs: {logs}");
    assert!(logs.contains("seed=9"), "logs: {logs}");
}
