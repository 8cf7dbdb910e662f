use crate::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// The options applied to a search engine.
pub struct EngineOptions
{
    /// The mark the engine plays for the lifetime of a game.
    pub mark: Mark,

    /// The number of threads the root moves are split across. Zero or one searches on the calling thread.
    pub threads: usize,
}

impl Default for EngineOptions
{
    fn default() -> Self
    {
        EngineOptions::new(Mark::O)
    }
}

impl EngineOptions
{
    /// Returns single-threaded options for the given mark.
    pub fn new(mark: Mark) -> Self
    {
        EngineOptions { mark, threads: 1 }
    }

    /// Returns these options for the opposing mark.
    pub fn flipped(self) -> Self
    {
        EngineOptions {
            mark: self.mark.flip(),
            ..self
        }
    }

    pub fn with_threads(self, threads: usize) -> Self
    {
        EngineOptions { threads, ..self }
    }
}
