/// Audio collaborator boundary.  Playback is fire-and-forget: a sink that
/// fails is logged and skipped, never allowed to stall the simulation.

use std::io::Write;

use tracing::{debug, warn};

use crate::error::AudioError;
use crate::events::{AudioCue, GameEvent};

pub trait AudioSink {
    fn play(&mut self, cue: AudioCue) -> Result<(), AudioError>;
}

/// Forward every audio cue in `events` to `sink`.  Returns how many cues
/// were delivered successfully.
pub fn dispatch(sink: &mut impl AudioSink, events: &[GameEvent]) -> usize {
    let mut delivered = 0;
    for event in events {
        let GameEvent::Audio(cue) = event else {
            continue;
        };
        match sink.play(*cue) {
            Ok(()) => delivered += 1,
            Err(err) => warn!(?cue, %err, "audio cue dropped"),
        }
    }
    delivered
}

/// Rings the terminal bell for explosions.  Terminals have no music
/// channel, so music cues only update the tracked playback state.
pub struct TerminalBell<W: Write> {
    out: W,
    music_playing: bool,
}

impl<W: Write> TerminalBell<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            music_playing: false,
        }
    }

    pub fn music_playing(&self) -> bool {
        self.music_playing
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> AudioSink for TerminalBell<W> {
    fn play(&mut self, cue: AudioCue) -> Result<(), AudioError> {
        match cue {
            AudioCue::PlayExplosion => {
                self.out.write_all(b"\x07")?;
                self.out.flush()?;
            }
            AudioCue::StartMusic => self.music_playing = true,
            AudioCue::PauseMusic | AudioCue::StopAndRewindMusic => self.music_playing = false,
        }
        debug!(?cue, music_playing = self.music_playing, "audio cue");
        Ok(())
    }
}
