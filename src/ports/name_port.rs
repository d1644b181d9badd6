//! Company name source port trait.
//!
//! The core only needs a stream of display names unique enough to key the
//! investments map; where they come from is the caller's business.

pub trait NamePort {
    /// Produce the next company name. Implementations must not repeat a
    /// name within a single run.
    fn next_name(&mut self) -> String;
}
