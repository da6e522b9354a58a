mod status_tone;

pub use status_tone::StatusTone;
