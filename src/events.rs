/// Messages crossing the boundary between the simulation and its hosts.

/// Snapshot of which directions the player is currently asking for.
/// Independent of the concrete input device.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputIntent {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl InputIntent {
    pub fn any(&self) -> bool {
        self.up || self.down || self.left || self.right
    }
}

/// Fire-and-forget requests for the audio collaborator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AudioCue {
    PlayExplosion,
    StartMusic,
    PauseMusic,
    StopAndRewindMusic,
}

/// One-off messages for the UI collaborator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notice {
    /// Health ran out.
    GameOver { final_score: u32 },
    /// The countdown reached zero.
    TimeUp { final_score: u32 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    Audio(AudioCue),
    Notice(Notice),
}
