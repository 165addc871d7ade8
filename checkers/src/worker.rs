//! Background engine thread.
//!
//! Every request is tagged with a generation number. Starting a new request
//! or calling [`EngineWorker::invalidate`] bumps the generation, and replies
//! carrying an older one are dropped on arrival.

use checkers_agents::{Agent, EngineError};
use checkers_core::{GameState, Move};
use crossbeam_channel::{unbounded, Receiver, Sender};
use std::thread::{self, JoinHandle};
use tracing::{debug, trace, warn};

struct Request {
    generation: u64,
    state: GameState,
}

struct Reply {
    generation: u64,
    result: Result<Move, EngineError>,
}

pub struct EngineWorker {
    requests: Option<Sender<Request>>,
    replies: Receiver<Reply>,
    generation: u64,
    pending: Option<u64>,
    name: String,
    handle: Option<JoinHandle<()>>,
}

impl EngineWorker {
    /// Moves `engine` onto its own thread.
    pub fn spawn<A: Agent + Send + 'static>(mut engine: A) -> Self {
        let (request_sender, request_receiver) = unbounded::<Request>();
        let (reply_sender, reply_receiver) = unbounded::<Reply>();
        let name = engine.name().to_string();

        let handle = thread::spawn(move || {
            while let Ok(request) = request_receiver.recv() {
                trace!(generation = request.generation, "engine request");
                let result = engine.best_move(&request.state);
                let reply = Reply {
                    generation: request.generation,
                    result,
                };
                if reply_sender.send(reply).is_err() {
                    break;
                }
            }
            debug!("engine worker shutting down");
        });

        EngineWorker {
            requests: Some(request_sender),
            replies: reply_receiver,
            generation: 0,
            pending: None,
            name,
            handle: Some(handle),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Asks for a move in `state`, superseding any earlier request.
    pub fn request(&mut self, state: GameState) -> u64 {
        self.generation += 1;
        if let Some(sender) = &self.requests {
            if sender
                .send(Request {
                    generation: self.generation,
                    state,
                })
                .is_ok()
            {
                self.pending = Some(self.generation);
            }
        }
        self.generation
    }

    /// Marks every outstanding request as stale.
    pub fn invalidate(&mut self) {
        self.generation += 1;
        self.pending = None;
    }

    /// Blocks until the reply to the current request arrives.
    ///
    /// Returns `None` if nothing is pending or the worker thread has stopped.
    pub fn wait(&mut self) -> Option<Result<Move, EngineError>> {
        if self.pending != Some(self.generation) {
            return None;
        }
        while let Ok(reply) = self.replies.recv() {
            if let Some(result) = self.accept(reply) {
                return Some(result);
            }
        }
        None
    }

    fn accept(&mut self, reply: Reply) -> Option<Result<Move, EngineError>> {
        if reply.generation != self.generation {
            trace!(
                stale = reply.generation,
                current = self.generation,
                "discarding stale engine reply"
            );
            return None;
        }
        self.pending = None;
        Some(reply.result)
    }
}

impl Drop for EngineWorker {
    fn drop(&mut self) {
        // Closing the request channel ends the thread's loop.
        self.requests.take();
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                warn!(engine = %self.name, "engine worker panicked");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use checkers_agents::{Difficulty, Engine};
    use checkers_core::Variant;

    #[test]
    fn test_request_and_wait() {
        let mut worker = EngineWorker::spawn(Engine::with_seed(Difficulty::Easy, 3));
        let state = GameState::new(Variant::Russian);

        assert_eq!(worker.request(state.clone()), 1);
        let mv = worker.wait().unwrap().unwrap();
        assert!(state.is_legal(&mv));
        assert!(worker.wait().is_none());
    }

    #[test]
    fn test_stale_reply_is_discarded() {
        let mut worker = EngineWorker::spawn(Engine::with_seed(Difficulty::Novice, 5));
        let first = GameState::new(Variant::Russian);
        let mut second = first.clone();
        let opening = second.iter_legal_moves().next().unwrap().clone();
        second.apply_move(&opening);

        worker.request(first);
        worker.request(second.clone());
        let mv = worker.wait().unwrap().unwrap();
        assert!(second.is_legal(&mv));
        assert!(worker.wait().is_none());
    }

    #[test]
    fn test_invalidate_cancels_wait() {
        let mut worker = EngineWorker::spawn(Engine::with_seed(Difficulty::Novice, 7));
        worker.request(GameState::new(Variant::Brazilian));
        worker.invalidate();
        assert!(worker.wait().is_none());
    }

    #[test]
    fn test_engine_error_is_forwarded() {
        let mut worker = EngineWorker::spawn(Engine::with_seed(Difficulty::Novice, 1));
        let state = GameState::empty(Variant::Russian);
        worker.request(state);
        assert!(matches!(worker.wait(), Some(Err(EngineError::NoLegalMoves(_)))));
    }

    struct FailingAgent;

    impl Agent for FailingAgent {
        fn best_move(&mut self, _state: &GameState) -> Result<Move, EngineError> {
            panic!("search blew up");
        }

        fn name(&self) -> &str {
            "Failing"
        }
    }

    #[test]
    fn test_panicking_engine_ends_the_worker() {
        let mut worker = EngineWorker::spawn(FailingAgent);
        worker.request(GameState::new(Variant::Russian));
        assert!(worker.wait().is_none());
        // Dropping joins the dead thread without propagating its panic.
        drop(worker);
    }
}
