use crate::error::PuzzleError;
use crate::puzzle::context::{BucketKind, PuzzleContext};

/// Most words a single read may consume.
pub const MAX_READ: usize = 2;

struct Bucket {
    kind: BucketKind,
    words: Vec<String>,
}

/// Sequential cursor over the ordered word buckets plus a flat cross-bucket
/// index for exclusion-aware sampling. Not reentrant; one reader drives one
/// scan.
pub struct BucketReader {
    buckets: Vec<Bucket>,
    flat: Vec<String>,
    bucket: usize,
    offset: usize,
}

impl BucketReader {
    pub fn new(context: &PuzzleContext) -> Self {
        let flat = context.total_words();
        // Empty buckets are dropped up front so the cursor only ever rests
        // inside a bucket with at least one word.
        let buckets = context
            .buckets()
            .into_iter()
            .filter(|(_, words)| !words.is_empty())
            .map(|(kind, words)| Bucket { kind, words })
            .collect();
        Self {
            buckets,
            flat,
            bucket: 0,
            offset: 0,
        }
    }

    pub fn has_current(&self) -> bool {
        self.bucket < self.buckets.len()
    }

    /// Next `n` words of the current bucket, without advancing. Truncated at
    /// the bucket boundary; fails past the last bucket or for `n > 2`.
    pub fn read(&self, n: usize) -> Result<Vec<String>, PuzzleError> {
        if n > MAX_READ {
            return Err(PuzzleError::OversizedRead(n));
        }
        let bucket = self
            .buckets
            .get(self.bucket)
            .ok_or(PuzzleError::BucketExhausted)?;
        let end = (self.offset + n).min(bucket.words.len());
        Ok(bucket.words[self.offset..end].to_vec())
    }

    /// Advance the cursor by `n` words. Returns `true` while still inside
    /// the current bucket; crossing into the next bucket resets the offset
    /// and returns `false` so callers can see the boundary.
    pub fn next(&mut self, n: usize) -> bool {
        self.offset += n;
        if self.has_current() && self.offset < self.buckets[self.bucket].words.len() {
            return true;
        }
        self.bucket += 1;
        self.offset = 0;
        false
    }

    /// Lookahead strictly within the current bucket; `None` past its end.
    pub fn peek(&self, lookahead: usize) -> Option<&str> {
        let bucket = self.buckets.get(self.bucket)?;
        bucket
            .words
            .get(self.offset + lookahead)
            .map(String::as_str)
    }

    pub fn is_bucket(&self, kind: BucketKind) -> bool {
        self.buckets
            .get(self.bucket)
            .is_some_and(|b| b.kind == kind)
    }

    pub fn flat_len(&self) -> usize {
        self.flat.len()
    }

    /// Flat-domain word at `index` unless excluded, probing at most two
    /// further slots (`index + 1`, `index + 2`, both mod len). The final
    /// probe is returned even if it is still excluded.
    pub fn rand_not(&self, index: usize, exclude: &[&str]) -> &str {
        let len = self.flat.len();
        let mut i = index % len;
        for _ in 0..2 {
            if !exclude.contains(&self.flat[i].as_str()) {
                break;
            }
            i = (i + 1) % len;
        }
        &self.flat[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> PuzzleContext {
        PuzzleContext {
            chosen: vec!["the".into(), "lazy".into(), "dog".into()],
            active: None,
            other_words: vec!["owl".into(), "elm".into()],
            min_count: 3,
        }
    }

    #[test]
    fn read_does_not_advance() {
        let reader = BucketReader::new(&context());
        assert_eq!(reader.read(1).unwrap(), vec!["owl"]);
        assert_eq!(reader.read(2).unwrap(), vec!["owl", "elm"]);
    }

    #[test]
    fn read_truncates_at_bucket_boundary() {
        let mut reader = BucketReader::new(&context());
        reader.next(1);
        // One word left in the other bucket
        assert_eq!(reader.read(2).unwrap(), vec!["elm"]);
    }

    #[test]
    fn read_rejects_more_than_two_words() {
        let reader = BucketReader::new(&context());
        assert!(matches!(
            reader.read(3).unwrap_err(),
            PuzzleError::OversizedRead(3)
        ));
    }

    #[test]
    fn next_signals_bucket_crossing() {
        let mut reader = BucketReader::new(&context());
        assert!(reader.next(1)); // still inside `other`
        assert!(!reader.next(1)); // crossed into `chosen`
        assert!(reader.is_bucket(BucketKind::Chosen));
        assert_eq!(reader.read(1).unwrap(), vec!["the"]);
        assert!(reader.next(2));
        assert!(!reader.next(1)); // past the last bucket
        assert!(!reader.has_current());
        assert!(matches!(
            reader.read(1).unwrap_err(),
            PuzzleError::BucketExhausted
        ));
    }

    #[test]
    fn empty_buckets_are_dropped() {
        let mut ctx = context();
        ctx.other_words.clear();
        let reader = BucketReader::new(&ctx);
        assert!(reader.is_bucket(BucketKind::Chosen));
    }

    #[test]
    fn peek_stays_within_the_current_bucket() {
        let reader = BucketReader::new(&context());
        assert_eq!(reader.peek(0), Some("owl"));
        assert_eq!(reader.peek(1), Some("elm"));
        // "the" lives in the next bucket; peek never crosses
        assert_eq!(reader.peek(2), None);
    }

    #[test]
    fn rand_not_probes_at_most_two_extra_slots() {
        let reader = BucketReader::new(&context());
        // flat: [owl, elm, the, lazy, dog]
        assert_eq!(reader.rand_not(0, &[]), "owl");
        assert_eq!(reader.rand_not(0, &["owl"]), "elm");
        assert_eq!(reader.rand_not(0, &["owl", "elm"]), "the");
        // Third probe returned even though still excluded
        assert_eq!(reader.rand_not(0, &["owl", "elm", "the"]), "the");
        // Wraps around the flat pool
        assert_eq!(reader.rand_not(4, &["dog"]), "owl");
    }
}
