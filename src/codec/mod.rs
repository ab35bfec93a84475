/// `key = t v in out` text round-trip.
pub mod text;
