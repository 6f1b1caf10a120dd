use crate::config::SignalKind;
use std::f32::consts::TAU;

// Raw recorder levels peak a little above the saturation point so loud
// syllables pin the blob at full amplitude.
const PEAK_LEVEL: f32 = 1500.0;
const SYLLABLE_HZ: f32 = 1.3;
const PHRASE_HZ: f32 = 0.27;
const SINE_HZ: f32 = 0.5;

/// Synthetic raw level (recorder units) at `t_sec`.
pub fn level_at(kind: SignalKind, t_sec: f32) -> f32 {
    match kind {
        SignalKind::Speech => {
            let syllable = (TAU * SYLLABLE_HZ * t_sec).sin().max(0.0);
            let phrase = 0.6 + 0.4 * (TAU * PHRASE_HZ * t_sec).sin();
            PEAK_LEVEL * syllable * syllable * phrase
        }
        SignalKind::Sine => PEAK_LEVEL * 0.5 * (1.0 + (TAU * SINE_HZ * t_sec).sin()),
        SignalKind::Silence => 0.0,
    }
}
