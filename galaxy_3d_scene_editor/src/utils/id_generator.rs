/// Generates unique, human-readable string identifiers.
///
/// Camera paths and path points are keyed by strings so that ids survive
/// serialization by external collaborators. The generator is an explicit
/// value threaded through every constructor that needs a fresh id, so tests
/// can reset or isolate id sequences.
///
/// Ids are never recycled: a removed point's id is not handed out again.
///
/// # Example
///
/// ```ignore
/// let mut ids = IdGenerator::new();
/// ids.next_id("path");   // "path_1"
/// ids.next_id("point");  // "point_2"
/// ```
#[derive(Debug, Clone)]
pub struct IdGenerator {
    next: u64,
}

impl IdGenerator {
    /// Create a generator whose first id carries the number 1
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Create a generator that continues after ids already in use
    /// (e.g. after loading a scene whose highest id number is `last`).
    pub fn starting_after(last: u64) -> Self {
        Self { next: last.saturating_add(1) }
    }

    /// Produce the next id as `"<prefix>_<n>"`
    pub fn next_id(&mut self, prefix: &str) -> String {
        let id = format!("{}_{}", prefix, self.next);
        self.next += 1;
        id
    }

    /// Number that the next id will carry
    pub fn peek(&self) -> u64 {
        self.next
    }

    /// Restart the sequence at 1
    pub fn reset(&mut self) {
        self.next = 1;
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "id_generator_tests.rs"]
mod tests;
