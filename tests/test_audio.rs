use star_volley::audio::*;
use star_volley::error::AudioError;
use star_volley::events::*;

/// Records every cue; optionally refuses explosions.
#[derive(Default)]
struct Recorder {
    played: Vec<AudioCue>,
    fail_explosions: bool,
}

impl AudioSink for Recorder {
    fn play(&mut self, cue: AudioCue) -> Result<(), AudioError> {
        if self.fail_explosions && cue == AudioCue::PlayExplosion {
            return Err(AudioError::Io(std::io::Error::other("no device")));
        }
        self.played.push(cue);
        Ok(())
    }
}

#[test]
fn dispatch_forwards_audio_only() {
    let mut sink = Recorder::default();
    let events = vec![
        GameEvent::Audio(AudioCue::PlayExplosion),
        GameEvent::Notice(Notice::TimeUp { final_score: 100 }),
        GameEvent::Audio(AudioCue::StopAndRewindMusic),
    ];

    let delivered = dispatch(&mut sink, &events);

    assert_eq!(delivered, 2);
    assert_eq!(
        sink.played,
        vec![AudioCue::PlayExplosion, AudioCue::StopAndRewindMusic]
    );
}

#[test]
fn failed_cue_is_skipped_not_fatal() {
    let mut sink = Recorder {
        fail_explosions: true,
        ..Recorder::default()
    };
    let events = vec![
        GameEvent::Audio(AudioCue::PlayExplosion),
        GameEvent::Audio(AudioCue::StartMusic),
    ];

    let delivered = dispatch(&mut sink, &events);

    assert_eq!(delivered, 1);
    assert_eq!(sink.played, vec![AudioCue::StartMusic]);
}

#[test]
fn terminal_bell_rings_for_explosions() {
    let mut bell = TerminalBell::new(Vec::new());
    bell.play(AudioCue::PlayExplosion).unwrap();
    bell.play(AudioCue::PlayExplosion).unwrap();
    assert_eq!(bell.into_inner(), b"\x07\x07".to_vec());
}

#[test]
fn terminal_bell_tracks_music_state() {
    let mut bell = TerminalBell::new(Vec::new());
    assert!(!bell.music_playing());

    bell.play(AudioCue::StartMusic).unwrap();
    assert!(bell.music_playing());

    bell.play(AudioCue::PauseMusic).unwrap();
    assert!(!bell.music_playing());

    bell.play(AudioCue::StartMusic).unwrap();
    bell.play(AudioCue::StopAndRewindMusic).unwrap();
    assert!(!bell.music_playing());
    assert!(bell.into_inner().is_empty());
}
