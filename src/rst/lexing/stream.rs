//! Threaded token stream
//!
//!     Runs a [`Lexer`] on its own thread and hands its tokens over a rendezvous channel: the
//!     lexer blocks on every send until the consumer takes the token, so it never runs more
//!     than one token ahead. Dropping the stream disconnects the channel, which stops the
//!     lexer thread at its next send.

use super::lexer::Lexer;
use crate::rst::token::Token;
use std::io;
use std::sync::mpsc::{sync_channel, Receiver};
use std::thread::{self, JoinHandle};
use tracing::{debug, warn};

pub struct TokenStream {
    receiver: Receiver<Token>,
    handle: Option<JoinHandle<()>>,
}

impl TokenStream {
    /// Start lexing `input` on a new thread.
    pub fn spawn(input: String) -> io::Result<Self> {
        let (sender, receiver) = sync_channel(0);
        let handle = thread::Builder::new()
            .name("rst-lexer".to_string())
            .spawn(move || {
                for token in Lexer::new(&input) {
                    let eof = token.is_eof();
                    if sender.send(token).is_err() {
                        debug!("token consumer went away");
                        return;
                    }
                    if eof {
                        return;
                    }
                }
            })?;

        Ok(Self {
            receiver,
            handle: Some(handle),
        })
    }
}

impl Iterator for TokenStream {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        match self.receiver.recv() {
            Ok(token) => Some(token),
            Err(_) => {
                if let Some(handle) = self.handle.take() {
                    if handle.join().is_err() {
                        warn!("lexer thread panicked");
                    }
                }
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rst::lexing::tokenize;

    #[test]
    fn test_stream_matches_inline_lexer() {
        let input = "Title\n=====\n\ntext\n\n    quoted\n";
        let streamed: Vec<Token> = TokenStream::spawn(input.to_string()).unwrap().collect();
        assert_eq!(streamed, tokenize(input));
    }

    #[test]
    fn test_early_drop_stops_lexer() {
        let mut stream = TokenStream::spawn("a\n\nb\n\nc\n".to_string()).unwrap();
        assert!(stream.next().is_some());
        drop(stream);
    }
}
